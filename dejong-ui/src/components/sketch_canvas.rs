// dejong-ui/src/components/sketch_canvas.rs
use dejong_compute::{composite_offset, Sketch, SketchConfig, SketchError, Surface, TickOutcome};
use leptos::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

use crate::hooks::use_frame_loop;
use crate::rendering::{draw_pixels_to_canvas, get_2d_context, window_inner_size};

type SharedSketch = Rc<RefCell<Sketch<Surface, StdRng>>>;

/// Build a sketch whose surface matches the viewport read once at setup.
fn create_sketch(config: &SketchConfig, width: u32, height: u32) -> Result<SharedSketch, SketchError> {
    let surface = Surface::new(width, height, config.origin)?;
    let sketch = Sketch::new(*config, surface, StdRng::from_entropy())?;
    Ok(Rc::new(RefCell::new(sketch)))
}

/// Blit the surface onto the visible canvas, centered.
fn present(canvas: &HtmlCanvasElement, surface: &Surface) -> Result<(), JsValue> {
    let ctx = get_2d_context(canvas)?;
    let (x, y) = composite_offset(
        (canvas.width(), canvas.height()),
        (surface.width(), surface.height()),
    );
    draw_pixels_to_canvas(&ctx, surface.expose(), surface.width(), x, y)
}

#[component]
pub fn SketchCanvas(
    /// Sketch variant to render
    config: &'static SketchConfig,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();

    let (width, height) = match window_inner_size() {
        Ok(size) => size,
        Err(e) => {
            log::error!("Failed to read window size: {:?}", e);
            (0, 0)
        }
    };

    let sketch = match create_sketch(config, width, height) {
        Ok(sketch) => sketch,
        Err(e) => {
            log::error!("Failed to start sketch: {}", e);
            return view! { <p style="color: white; padding: 1rem;">{e.to_string()}</p> }
                .into_view();
        }
    };

    // Size the canvas once it is mounted; resizing afterwards is not tracked.
    create_effect(move |_| {
        let Some(canvas_el) = canvas_ref.get() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
        canvas.set_width(width);
        canvas.set_height(height);
    });

    let tick_sketch = Rc::clone(&sketch);
    let frame_loop = use_frame_loop(move || {
        // Keep the sweep armed until there is a canvas to show it on.
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return true;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
        let mut sketch = tick_sketch.borrow_mut();

        match sketch.on_tick() {
            Ok(TickOutcome::Rendered(stats)) => {
                if let Err(e) = present(canvas, sketch.target()) {
                    log::error!("Failed to composite surface: {:?}", e);
                }
                log::info!(
                    "Sweep complete: {}",
                    serde_json::to_string(&stats).unwrap_or_default()
                );
                sketch.is_looping()
            }
            Ok(TickOutcome::Halted) => false,
            Err(e) => {
                log::error!("Sweep failed: {}", e);
                false
            }
        }
    });

    let activate_sketch = Rc::clone(&sketch);
    let is_running = frame_loop.is_running;
    let start = frame_loop.start;
    let on_mousedown = move |_: web_sys::MouseEvent| {
        let coefficients = activate_sketch.borrow_mut().on_activate();
        log::debug!(
            "Activated with {}",
            serde_json::to_string(&coefficients).unwrap_or_default()
        );
        start();
    };

    view! {
        <canvas
            node_ref=canvas_ref
            on:mousedown=on_mousedown
            style="display: block;"
            style:cursor=move || if is_running.get() { "progress" } else { "pointer" }
        />
    }
    .into_view()
}
