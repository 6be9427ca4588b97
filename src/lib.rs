mod utils;
pub mod background;
pub mod color;
pub mod config;
pub mod content;
pub mod dom;
pub mod field;
pub mod page;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod skill;
pub mod timeline;

use background::ParticleBackground;
use config::BackgroundConfig;
use page::Page;
use wasm_bindgen::prelude::*;
use web_sys::{console, Element, HtmlCanvasElement};

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

#[wasm_bindgen]
pub struct PortfolioApp {
    page: Option<Page>,
    background: ParticleBackground,
}

/// Builds the page into the element with id `mount_id` and starts the
/// particle background on the canvas with id `canvas_id`.
#[wasm_bindgen]
pub fn start(mount_id: &str, canvas_id: &str) -> Result<PortfolioApp, JsValue> {
    let _timer = Timer::new("start");
    let window = dom::window()?;
    let document = dom::document()?;
    let root = dom::element_by_id::<Element>(&document, mount_id)?;
    let canvas = dom::element_by_id::<HtmlCanvasElement>(&document, canvas_id)?;

    let page = Page::mount(&window, &document, &root)?;
    let background = ParticleBackground::mount(&window, canvas, BackgroundConfig::default())?;

    Ok(PortfolioApp {
        page: Some(page),
        background,
    })
}

#[wasm_bindgen]
impl PortfolioApp {
    pub fn stop(&mut self) {
        self.background.stop();
        self.page.take();
    }

    pub fn is_running(&self) -> bool {
        self.background.is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.background.particle_count()
    }
}
