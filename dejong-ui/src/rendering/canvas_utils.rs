use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Read the browser viewport size in whole pixels.
pub fn window_inner_size() -> Result<(u32, u32), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width as u32, height as u32))
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Draw RGBA pixel data to canvas at specified position.
pub fn draw_pixels_to_canvas(
    ctx: &CanvasRenderingContext2d,
    pixels: &[u8],
    width: u32,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let image_data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels),
        width,
        pixels.len() as u32 / width / 4,
    )?;
    ctx.put_image_data(&image_data, x, y)
}
