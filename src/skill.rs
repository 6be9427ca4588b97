// Skill card: title, description and a progress bar that grows from empty to
// the skill's level shortly after the card is created

use crate::content::Skill;
use crate::dom;
use crate::reveal::Reveal;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SkillBar {
    level: u8,
    width: u8,
}

impl SkillBar {
    pub const MAX_LEVEL: u8 = 100;
    pub const FILL_DELAY_MS: i32 = 100;

    // Levels above 100 are clamped
    pub fn new(level: u8) -> Self {
        SkillBar {
            level: level.min(SkillBar::MAX_LEVEL),
            width: 0,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    // Current bar width in percent
    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn is_filled(&self) -> bool {
        self.width == self.level
    }

    // Called once the fill delay has elapsed
    pub fn fill(&mut self) {
        self.width = self.level;
    }

    pub fn width_css(&self) -> String {
        format!("{}%", self.width)
    }
}

pub struct SkillCard {
    pub element: Element,
    bar: Rc<Cell<SkillBar>>,
    window: Window,
    timeout_id: Option<i32>,
    _on_fill: Closure<dyn FnMut()>,
    _reveal: Reveal,
}

impl SkillCard {
    pub fn mount(
        window: &Window,
        document: &Document,
        parent: &Element,
        skill: &Skill,
    ) -> Result<SkillCard, JsValue> {
        let bar = SkillBar::new(skill.level);

        let element = dom::child(document, parent, "div", "skill-card")?;
        dom::text_child(document, &element, "h3", "skill-title", skill.title)?;
        dom::text_child(document, &element, "p", "skill-description", skill.description)?;
        let track = dom::child(document, &element, "div", "skill-track")?;
        let fill = dom::as_html(&dom::child(document, &track, "div", "skill-fill")?)?;
        fill.style().set_property("width", &bar.width_css())?;
        dom::text_child(
            document,
            &element,
            "div",
            "skill-level",
            &format!("{}%", bar.level()),
        )?;

        let bar = Rc::new(Cell::new(bar));
        let on_fill = {
            let bar = bar.clone();
            Closure::wrap(Box::new(move || {
                let mut current = bar.get();
                current.fill();
                bar.set(current);
                let _ = set_width(&fill, &current);
            }) as Box<dyn FnMut()>)
        };
        let timeout_id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            on_fill.as_ref().unchecked_ref(),
            SkillBar::FILL_DELAY_MS,
        )?;
        let reveal = Reveal::observe(&element)?;

        Ok(SkillCard {
            element,
            bar,
            window: window.clone(),
            timeout_id: Some(timeout_id),
            _on_fill: on_fill,
            _reveal: reveal,
        })
    }

    pub fn bar(&self) -> SkillBar {
        self.bar.get()
    }
}

fn set_width(fill: &HtmlElement, bar: &SkillBar) -> Result<(), JsValue> {
    fill.style().set_property("width", &bar.width_css())
}

impl Drop for SkillCard {
    fn drop(&mut self) {
        if let Some(id) = self.timeout_id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let bar = SkillBar::new(85);
        assert_eq!(bar.width(), 0);
        assert_eq!(bar.width_css(), "0%");
        assert!(!bar.is_filled());
    }

    #[test]
    fn fills_to_exact_level_for_every_valid_input() {
        for level in 0..=100u8 {
            let mut bar = SkillBar::new(level);
            bar.fill();
            assert_eq!(bar.width(), level);
            assert_eq!(bar.width_css(), format!("{}%", level));
            assert!(bar.is_filled());
        }
    }

    #[test]
    fn clamps_levels_above_max() {
        let mut bar = SkillBar::new(140);
        bar.fill();
        assert_eq!(bar.level(), 100);
        assert_eq!(bar.width(), 100);
    }
}
