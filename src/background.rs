//! The animated particle background. Owns the canvas, the particle field,
//! the window listeners and the self-rescheduling animation frame callback.

use crate::config::BackgroundConfig;
use crate::field::ParticleField;
use crate::particle::Particle;
use crate::renderer::CanvasRenderer;
#[cfg(feature = "frame-timing")]
use crate::Timer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, MouseEvent, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct BackgroundState {
    canvas: HtmlCanvasElement,
    field: ParticleField,
}

pub struct ParticleBackground {
    window: Window,
    state: Rc<RefCell<BackgroundState>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Option<Closure<dyn FnMut()>>,
    on_mouse_move: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl ParticleBackground {
    /// Sizes the canvas to the viewport, seeds the field, hooks `resize` and
    /// `mousemove` on the window and starts the animation loop.
    pub fn mount(
        window: &Window,
        canvas: HtmlCanvasElement,
        config: BackgroundConfig,
    ) -> Result<ParticleBackground, JsValue> {
        let state = Rc::new(RefCell::new(BackgroundState {
            canvas,
            field: ParticleField::new(config),
        }));
        resize(window, &state);

        let on_resize = {
            let window = window.clone();
            let state = state.clone();
            Closure::wrap(Box::new(move || resize(&window, &state)) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let on_mouse_move = {
            let state = state.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                state
                    .borrow_mut()
                    .field
                    .set_pointer(event.client_x() as f64, event.client_y() as f64);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        window.add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            let window = window.clone();
            let state = state.clone();
            let next = frame.clone();
            let frame_id = frame_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                tick(&state);
                frame_id.set(request_frame(&window, &next));
            }) as Box<dyn FnMut()>));
        }
        frame_id.set(request_frame(window, &frame));

        console::log_1(&"particle background mounted".into());
        Ok(ParticleBackground {
            window: window.clone(),
            state,
            frame,
            frame_id,
            on_resize: Some(on_resize),
            on_mouse_move: Some(on_mouse_move),
        })
    }

    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().field.particles().len()
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.state.borrow().field.particles().to_vec()
    }

    /// Cancels the pending frame and unregisters the window listeners.
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        if self.is_running() {
            console::log_1(&"particle background stopped".into());
        }
        if let Some(id) = self.frame_id.take() {
            // Nothing left to cancel if the frame already ran
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the callback breaks its reference cycle through `frame`
        self.frame.borrow_mut().take();

        // Removal only fails for listeners the window never had
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        if let Some(on_mouse_move) = self.on_mouse_move.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, frame: &FrameCallback) -> Option<i32> {
    let frame = frame.borrow();
    let callback = frame.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

fn viewport_size(window: &Window) -> Option<(u32, u32)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width.max(0.0) as u32, height.max(0.0) as u32))
}

fn resize(window: &Window, state: &RefCell<BackgroundState>) {
    let (width, height) = match viewport_size(window) {
        Some(size) => size,
        None => return,
    };
    console::log_1(&format!("particle background resized to {}x{}", width, height).into());
    let mut state = state.borrow_mut();
    state.canvas.set_width(width);
    state.canvas.set_height(height);
    state
        .field
        .resize(width as f64, height as f64, &mut rand::thread_rng());
}

fn tick(state: &RefCell<BackgroundState>) {
    #[cfg(feature = "frame-timing")]
    let _timer = Timer::new("ParticleBackground::tick");
    let mut state = state.borrow_mut();
    let mut renderer = match CanvasRenderer::from_canvas(&state.canvas) {
        Some(renderer) => renderer,
        None => return,
    };
    state.field.step(&mut renderer);
}
