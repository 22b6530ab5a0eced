pub mod canvas_utils;

pub use canvas_utils::{draw_pixels_to_canvas, get_2d_context, window_inner_size};
