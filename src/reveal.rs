//! Scroll reveal: fade a node in the first time it scrolls into view, and
//! never again afterwards.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// Class present while the node waits for its entrance.
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the node has entered the viewport.
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Fired,
}

impl RevealState {
    /// Records an "entered viewport" event. Returns true only for the first
    /// one, which is when the visible transition should run.
    pub fn enter(&mut self) -> bool {
        match self {
            RevealState::Pending => {
                *self = RevealState::Fired;
                true
            }
            RevealState::Fired => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        *self == RevealState::Fired
    }
}

impl Default for RevealState {
    fn default() -> Self {
        RevealState::Pending
    }
}

/// Watches one element. Dropping it disconnects the observer.
pub struct Reveal {
    state: Rc<Cell<RevealState>>,
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Reveal {
    pub fn observe(element: &Element) -> Result<Reveal, JsValue> {
        element.class_list().add_1(REVEAL_CLASS)?;

        let state = Rc::new(Cell::new(RevealState::Pending));
        let callback = {
            let state = state.clone();
            let target = element.clone();
            Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entered = entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .any(|entry| entry.is_intersecting());
                    if on_intersection(&state, &target, entered) {
                        observer.unobserve(&target);
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(element);

        Ok(Reveal {
            state,
            observer,
            _callback: callback,
        })
    }

    pub fn state(&self) -> RevealState {
        self.state.get()
    }
}

/// Applies one observer notification. Adds [`VISIBLE_CLASS`] on the first
/// intersecting notification and returns true then, so the caller can stop
/// observing.
pub fn on_intersection(state: &Cell<RevealState>, target: &Element, intersecting: bool) -> bool {
    if !intersecting {
        return false;
    }
    let mut current = state.get();
    if !current.enter() {
        return false;
    }
    state.set(current);
    // A failed class change only costs the fade, the node stays in place
    let _ = target.class_list().add_1(VISIBLE_CLASS);
    true
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
