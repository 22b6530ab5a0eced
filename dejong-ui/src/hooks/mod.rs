mod frame_loop;

pub use frame_loop::{use_frame_loop, FrameLoop};
