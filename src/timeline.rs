//! Experience timeline entries with a collapsible achievement list.

use crate::content::Experience;
use crate::dom;
use crate::reveal::Reveal;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Which achievements of an entry are shown. Collapsed lists show the first
/// [`AchievementList::COLLAPSED_COUNT`]; the toggle only exists when there is
/// something to hide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AchievementList {
    len: usize,
    expanded: bool,
}

impl AchievementList {
    pub const COLLAPSED_COUNT: usize = 2;

    pub fn new(len: usize) -> Self {
        AchievementList {
            len,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn visible_count(&self) -> usize {
        if self.expanded {
            self.len
        } else {
            self.len.min(AchievementList::COLLAPSED_COUNT)
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.visible_count()
    }

    pub fn has_toggle(&self) -> bool {
        self.len > AchievementList::COLLAPSED_COUNT
    }

    pub fn toggle(&mut self) {
        if self.has_toggle() {
            self.expanded = !self.expanded;
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            "Show Less"
        } else {
            "Show More"
        }
    }
}

pub struct TimelineItem {
    pub element: Element,
    list: Rc<Cell<AchievementList>>,
    toggle: Option<(Element, Closure<dyn FnMut()>)>,
    _reveal: Reveal,
}

impl TimelineItem {
    pub fn mount(document: &Document, parent: &Element, entry: &Experience) -> Result<TimelineItem, JsValue> {
        let list = AchievementList::new(entry.achievements.len());

        let element = dom::child(document, parent, "article", "timeline-item")?;
        let header = dom::child(document, &element, "header", "timeline-header")?;
        dom::text_child(document, &header, "h3", "timeline-title", entry.title)?;
        dom::text_child(
            document,
            &header,
            "p",
            "timeline-company",
            &format!("{} - {}", entry.company, entry.location),
        )?;
        dom::text_child(document, &header, "span", "timeline-period", entry.period)?;

        let body = dom::child(document, &element, "div", "timeline-achievements")?;
        let mut rows = Vec::with_capacity(entry.achievements.len());
        for achievement in entry.achievements {
            let row = dom::child(document, &body, "div", "achievement")?;
            dom::text_child(document, &row, "h4", "achievement-title", achievement.title)?;
            dom::text_child(document, &row, "p", "achievement-description", achievement.description)?;
            rows.push(dom::as_html(&row)?);
        }
        apply_visibility(&rows, &list);

        let list = Rc::new(Cell::new(list));
        let toggle = if list.get().has_toggle() {
            let button = dom::text_child(document, &element, "button", "timeline-toggle", list.get().toggle_label())?;
            let on_click = {
                let list = list.clone();
                let button = button.clone();
                Closure::wrap(Box::new(move || {
                    let mut current = list.get();
                    current.toggle();
                    list.set(current);
                    apply_visibility(&rows, &current);
                    button.set_text_content(Some(current.toggle_label()));
                }) as Box<dyn FnMut()>)
            };
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            Some((button, on_click))
        } else {
            None
        };

        let reveal = Reveal::observe(&element)?;
        Ok(TimelineItem {
            element,
            list,
            toggle,
            _reveal: reveal,
        })
    }

    pub fn achievements(&self) -> AchievementList {
        self.list.get()
    }
}

fn apply_visibility(rows: &[HtmlElement], list: &AchievementList) {
    for (i, row) in rows.iter().enumerate() {
        row.set_hidden(!list.is_visible(i));
    }
}

impl Drop for TimelineItem {
    fn drop(&mut self) {
        if let Some((button, on_click)) = self.toggle.take() {
            let _ = button.remove_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_shows_first_two() {
        let list = AchievementList::new(6);
        assert_eq!(list.visible_count(), 2);
        assert!(list.is_visible(1));
        assert!(!list.is_visible(2));
        assert_eq!(list.toggle_label(), "Show More");
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut list = AchievementList::new(6);
        list.toggle();
        assert!(list.is_expanded());
        assert_eq!(list.visible_count(), 6);
        assert_eq!(list.toggle_label(), "Show Less");
        list.toggle();
        assert_eq!(list.visible_count(), 2);
    }

    #[test]
    fn short_lists_have_no_toggle() {
        let mut list = AchievementList::new(2);
        assert!(!list.has_toggle());
        list.toggle();
        assert!(!list.is_expanded());
        assert_eq!(list.visible_count(), 2);
        assert_eq!(AchievementList::new(1).visible_count(), 1);
        assert_eq!(AchievementList::new(0).visible_count(), 0);
    }
}
