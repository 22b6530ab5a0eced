use crate::components::SketchCanvas;
use dejong_core::{default_config, get_config, SketchConfig};
use leptos::*;

fn resolve_config(config_id: Option<&str>) -> &'static SketchConfig {
    match config_id {
        Some(id) => get_config(id).unwrap_or_else(|| {
            log::warn!("Unknown sketch variant '{}', using default", id);
            default_config()
        }),
        None => default_config(),
    }
}

#[component]
pub fn App(
    /// Registered sketch variant to run
    #[prop(optional)]
    config_id: Option<String>,
) -> impl IntoView {
    let config = resolve_config(config_id.as_deref());
    log::info!(
        "Starting {} ({} seeds x {} iterations)",
        config.display_name,
        config.seed_point_count,
        config.iteration_count
    );

    view! {
        <div style="width: 100vw; height: 100vh; overflow: hidden; background: black;">
            <SketchCanvas config=config />
        </div>
    }
}
