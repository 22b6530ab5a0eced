// dejong-ui/src/hooks/frame_loop.rs
use leptos::*;
use leptos_use::{use_raf_fn, utils::Pausable};

/// Handle to a running animation-frame loop.
pub struct FrameLoop<S>
where
    S: Fn() + Clone,
{
    /// Whether frames are currently being requested.
    pub is_running: Signal<bool>,
    /// Restart the loop after it stopped itself.
    pub start: S,
}

/// Call `on_frame` once per animation frame until it returns false.
///
/// Starts running immediately. Once `on_frame` returns false the loop pauses
/// and stays paused until `start` is called.
pub fn use_frame_loop<F>(on_frame: F) -> FrameLoop<impl Fn() + Clone>
where
    F: Fn() -> bool + 'static,
{
    let (wants_frames, set_wants_frames) = create_signal(true);

    let Pausable {
        is_active,
        pause,
        resume,
    } = use_raf_fn(move |_| {
        if !on_frame() {
            set_wants_frames.set(false);
        }
    });

    // Pausing from inside the rAF callback is not possible, so stop on the signal.
    create_effect(move |_| {
        if !wants_frames.get() {
            pause();
        }
    });

    let start = move || {
        set_wants_frames.set(true);
        resume();
    };

    FrameLoop {
        is_running: is_active,
        start,
    }
}
