//! Test suite for the Web and headless browsers.

#![cfg(target_arch = "wasm32")]

extern crate wasm_bindgen_test;
use portfolio_particles::background::ParticleBackground;
use portfolio_particles::config::BackgroundConfig;
use portfolio_particles::content::{Section, EXPERIENCE, SKILL_CATEGORIES};
use portfolio_particles::dom;
use portfolio_particles::page::Page;
use portfolio_particles::reveal::{on_intersection, Reveal, RevealState, REVEAL_CLASS, VISIBLE_CLASS};
use portfolio_particles::timeline::TimelineItem;
use std::cell::Cell;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(id: &str) -> Element {
    let document = dom::document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn fresh_canvas() -> HtmlCanvasElement {
    let document = dom::document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn background_fills_canvas_and_seeds_particles() {
    let window = dom::window().unwrap();
    let canvas = fresh_canvas();
    let mut background =
        ParticleBackground::mount(&window, canvas.clone(), BackgroundConfig::default()).unwrap();

    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(canvas.width(), width);
    assert!(background.is_running());
    if width > 0 {
        assert_eq!(background.particle_count(), BackgroundConfig::PARTICLE_COUNT);
    }

    background.stop();
    assert!(!background.is_running());
    background.stop();
}

#[wasm_bindgen_test]
fn page_builds_sections_in_order() {
    let window = dom::window().unwrap();
    let document = dom::document().unwrap();
    let root = fresh_root("page-order");
    let page = Page::mount(&window, &document, &root).unwrap();

    let sections = root.query_selector_all("main > section").unwrap();
    assert_eq!(sections.length() as usize, Section::ORDER.len());
    for (i, section) in Section::ORDER.iter().enumerate() {
        let node = sections.item(i as u32).unwrap().dyn_into::<Element>().unwrap();
        assert_eq!(node.id(), section.id());
    }

    let skill_count: usize = SKILL_CATEGORIES.iter().map(|c| c.skills.len()).sum();
    assert_eq!(page.skill_cards().len(), skill_count);
    assert_eq!(page.timeline().len(), EXPERIENCE.len());
    for card in page.skill_cards() {
        assert_eq!(card.bar().width(), 0);
    }
}

#[wasm_bindgen_test]
fn reveal_starts_pending() {
    let root = fresh_root("reveal-target");
    let reveal = Reveal::observe(&root).unwrap();
    assert_eq!(reveal.state(), RevealState::Pending);
    assert!(root.class_list().contains(REVEAL_CLASS));
}

#[wasm_bindgen_test]
fn stop_unregisters_resize_listener() {
    let window = dom::window().unwrap();
    let canvas = fresh_canvas();
    let mut background =
        ParticleBackground::mount(&window, canvas.clone(), BackgroundConfig::default()).unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;

    canvas.set_width(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(canvas.width(), width);

    background.stop();
    let before = background.particles();
    canvas.set_width(1);
    window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
    assert_eq!(canvas.width(), 1);
    assert_eq!(background.particles(), before);
}

#[wasm_bindgen_test]
fn visible_class_is_added_once() {
    let target = fresh_root("reveal-once");
    let state = Cell::new(RevealState::Pending);

    assert!(!on_intersection(&state, &target, false));
    assert!(!target.class_list().contains(VISIBLE_CLASS));

    assert!(on_intersection(&state, &target, true));
    assert!(target.class_list().contains(VISIBLE_CLASS));

    target.class_list().remove_1(VISIBLE_CLASS).unwrap();
    assert!(!on_intersection(&state, &target, true));
    assert!(!target.class_list().contains(VISIBLE_CLASS));
    assert_eq!(state.get(), RevealState::Fired);
}

#[wasm_bindgen_test]
fn toggle_button_expands_achievements() {
    let document = dom::document().unwrap();
    let root = fresh_root("timeline-toggle");
    let item = TimelineItem::mount(&document, &root, &EXPERIENCE[0]).unwrap();
    assert!(!item.achievements().is_expanded());

    let button = root
        .query_selector(".timeline-toggle")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    button.click();
    assert!(item.achievements().is_expanded());
    assert_eq!(button.text_content().unwrap(), "Show Less");

    button.click();
    assert!(!item.achievements().is_expanded());
}
