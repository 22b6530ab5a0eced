pub mod sketch_canvas;

pub use sketch_canvas::SketchCanvas;
