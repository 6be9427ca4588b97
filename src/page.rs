//! Page composition. Builds the navbar, every section in [`Section::ORDER`]
//! and the footer into a mount element, and keeps the handles (reveals,
//! skill cards, timeline items, tab listeners) alive for the page lifetime.

use crate::content::{
    Section, CONTACT_INTRO, CONTACT_LINKS, EDUCATION, EXPERIENCE, EXPERIENCE_INTRO, PROFILE,
    SKILLS_INTRO, SKILL_CATEGORIES,
};
use crate::dom;
use crate::reveal::Reveal;
use crate::skill::SkillCard;
use crate::timeline::TimelineItem;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Selected skill category. Selecting the active tab again is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TabSelection {
    active: usize,
    count: usize,
}

impl TabSelection {
    pub fn new(count: usize) -> Self {
        TabSelection { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns true when the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

pub struct Page {
    reveals: Vec<Reveal>,
    skill_cards: Vec<SkillCard>,
    timeline: Vec<TimelineItem>,
    tab_listeners: Vec<(Element, Closure<dyn FnMut()>)>,
}

impl Page {
    pub fn mount(window: &Window, document: &Document, root: &Element) -> Result<Page, JsValue> {
        let mut page = Page {
            reveals: Vec::new(),
            skill_cards: Vec::new(),
            timeline: Vec::new(),
            tab_listeners: Vec::new(),
        };

        build_navbar(document, root)?;
        let main = dom::child(document, root, "main", "")?;
        for section in Section::ORDER.iter().copied() {
            let element = dom::child(document, &main, "section", "section")?;
            element.set_id(section.id());
            match section {
                Section::Hero => build_hero(document, &element)?,
                Section::About => page.build_about(document, &element)?,
                Section::Skills => page.build_skills(window, document, &element)?,
                Section::Experience => page.build_experience(document, &element)?,
                Section::Education => page.build_education(document, &element)?,
                Section::Contact => page.build_contact(document, &element)?,
            }
        }
        build_footer(document, root)?;
        Ok(page)
    }

    pub fn skill_cards(&self) -> &[SkillCard] {
        &self.skill_cards
    }

    pub fn timeline(&self) -> &[TimelineItem] {
        &self.timeline
    }

    // Section title and optional intro, revealed together on first scroll-in
    fn heading(&mut self, document: &Document, section: &Element, kind: Section, intro: Option<&str>) -> Result<(), JsValue> {
        let header = dom::child(document, section, "div", "section-header")?;
        dom::text_child(document, &header, "h2", "section-title", kind.heading())?;
        if let Some(intro) = intro {
            dom::text_child(document, &header, "p", "section-intro", intro)?;
        }
        self.reveals.push(Reveal::observe(&header)?);
        Ok(())
    }

    fn build_about(&mut self, document: &Document, section: &Element) -> Result<(), JsValue> {
        self.heading(document, section, Section::About, Some(PROFILE.about))?;

        let details = dom::child(document, section, "div", "about-details")?;
        for (label, value) in &[
            ("Name", PROFILE.name),
            ("Location", PROFILE.location),
            ("Email", PROFILE.email),
        ] {
            let item = dom::child(document, &details, "div", "about-item")?;
            dom::text_child(document, &item, "h3", "", label)?;
            dom::text_child(document, &item, "p", "", value)?;
        }
        let interests = dom::child(document, &details, "div", "interests")?;
        dom::text_child(document, &interests, "h3", "", "Interests")?;
        for interest in PROFILE.interests {
            dom::text_child(document, &interests, "span", "tag", interest)?;
        }
        self.reveals.push(Reveal::observe(&details)?);

        let activities = dom::child(document, section, "div", "activities")?;
        dom::text_child(document, &activities, "h3", "", "Extra-Curricular Activities")?;
        for activity in PROFILE.activities {
            dom::text_child(document, &activities, "p", "activity", activity)?;
        }
        self.reveals.push(Reveal::observe(&activities)?);
        Ok(())
    }

    fn build_skills(&mut self, window: &Window, document: &Document, section: &Element) -> Result<(), JsValue> {
        self.heading(document, section, Section::Skills, Some(SKILLS_INTRO))?;

        let tab_list = dom::child(document, section, "div", "tab-list")?;
        let mut buttons = Vec::with_capacity(SKILL_CATEGORIES.len());
        let mut panels = Vec::with_capacity(SKILL_CATEGORIES.len());
        for category in SKILL_CATEGORIES {
            let button = dom::text_child(document, &tab_list, "button", "tab", category.label)?;
            button.set_attribute("data-tab", category.id)?;
            buttons.push(button);

            let panel = dom::child(document, section, "div", "tab-panel skill-grid")?;
            for skill in category.skills {
                self.skill_cards
                    .push(SkillCard::mount(window, document, &panel, skill)?);
            }
            panels.push(dom::as_html(&panel)?);
        }

        let selection = Rc::new(Cell::new(TabSelection::new(SKILL_CATEGORIES.len())));
        show_tab(&buttons, &panels, selection.get().active())?;

        let buttons = Rc::new(buttons);
        let panels = Rc::new(panels);
        for (index, button) in buttons.iter().enumerate() {
            let on_click = {
                let selection = selection.clone();
                let buttons = buttons.clone();
                let panels = panels.clone();
                Closure::wrap(Box::new(move || {
                    let mut current = selection.get();
                    if current.select(index) {
                        selection.set(current);
                        let _ = show_tab(&buttons, &panels, index);
                    }
                }) as Box<dyn FnMut()>)
            };
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            self.tab_listeners.push((button.clone(), on_click));
        }
        Ok(())
    }

    fn build_experience(&mut self, document: &Document, section: &Element) -> Result<(), JsValue> {
        self.heading(document, section, Section::Experience, Some(EXPERIENCE_INTRO))?;
        let list = dom::child(document, section, "div", "timeline")?;
        for entry in EXPERIENCE {
            self.timeline.push(TimelineItem::mount(document, &list, entry)?);
        }
        Ok(())
    }

    fn build_education(&mut self, document: &Document, section: &Element) -> Result<(), JsValue> {
        self.heading(document, section, Section::Education, None)?;
        for entry in EDUCATION {
            let card = dom::child(document, section, "div", "education-card")?;
            dom::text_child(document, &card, "h3", "", entry.degree)?;
            dom::text_child(document, &card, "p", "institution", entry.institution)?;
            dom::text_child(document, &card, "span", "period", entry.period)?;
            dom::text_child(document, &card, "span", "tag", entry.grade)?;
            dom::text_child(document, &card, "p", "", entry.summary)?;
            self.reveals.push(Reveal::observe(&card)?);
        }
        Ok(())
    }

    fn build_contact(&mut self, document: &Document, section: &Element) -> Result<(), JsValue> {
        self.heading(document, section, Section::Contact, Some(CONTACT_INTRO))?;
        let links = dom::child(document, section, "div", "contact-links")?;
        for contact in CONTACT_LINKS {
            let row = dom::child(document, &links, "div", "contact-item")?;
            dom::text_child(document, &row, "h3", "", contact.label)?;
            dom::link(document, &row, contact.href, contact.text)?;
        }
        self.reveals.push(Reveal::observe(&links)?);
        Ok(())
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for (button, on_click) in self.tab_listeners.drain(..) {
            let _ = button.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

fn show_tab(buttons: &[Element], panels: &[HtmlElement], active: usize) -> Result<(), JsValue> {
    for (i, (button, panel)) in buttons.iter().zip(panels).enumerate() {
        button
            .class_list()
            .toggle_with_force("active", i == active)?;
        panel.set_hidden(i != active);
    }
    Ok(())
}

fn build_navbar(document: &Document, root: &Element) -> Result<(), JsValue> {
    let header = dom::child(document, root, "header", "navbar")?;
    dom::link(document, &header, &format!("#{}", Section::Hero.id()), PROFILE.name)?;
    let nav = dom::child(document, &header, "nav", "")?;
    for section in Section::ORDER.iter() {
        if let Some(label) = section.nav_label() {
            dom::link(document, &nav, &format!("#{}", section.id()), label)?;
        }
    }
    let socials = dom::child(document, &header, "div", "socials")?;
    for contact in CONTACT_LINKS {
        dom::link(document, &socials, contact.href, contact.label)?;
    }
    Ok(())
}

fn build_hero(document: &Document, section: &Element) -> Result<(), JsValue> {
    let title = dom::child(document, section, "h1", "hero-title")?;
    dom::text_child(document, &title, "span", "", "Hi, I'm")?;
    dom::text_child(document, &title, "span", "gradient", PROFILE.name)?;
    dom::text_child(document, section, "h2", "hero-headline", PROFILE.headline)?;
    let actions = dom::child(document, section, "div", "hero-actions")?;
    dom::link(document, &actions, &format!("#{}", Section::Contact.id()), "Get in Touch")?;
    dom::link(document, &actions, &format!("#{}", Section::About.id()), "Learn More")?;
    Ok(())
}

fn build_footer(document: &Document, root: &Element) -> Result<(), JsValue> {
    let footer = dom::child(document, root, "footer", "footer")?;
    let year = js_sys::Date::new_0().get_full_year();
    dom::text_child(
        document,
        &footer,
        "p",
        "",
        &format!("\u{a9} {} {}. All rights reserved.", year, PROFILE.name),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_is_selected_initially() {
        assert_eq!(TabSelection::new(4).active(), 0);
    }

    #[test]
    fn selecting_changes_only_on_a_new_valid_tab() {
        let mut tabs = TabSelection::new(4);
        assert!(!tabs.select(0));
        assert!(tabs.select(2));
        assert_eq!(tabs.active(), 2);
        assert!(!tabs.select(2));
        assert!(!tabs.select(9));
        assert_eq!(tabs.active(), 2);
    }
}
