mod campus;

use std::process::ExitCode;

use engine::{resolve_content_path, run_app, ContentLibrary, LoopConfig, RENDER_SCALE};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    info!("=== Campus Walk Startup ===");

    let content = load_content();
    let config = LoopConfig::default();
    let scene = match campus::CampusScene::new(
        content,
        config.window_width as f32 / RENDER_SCALE,
        config.window_height as f32 / RENDER_SCALE,
    ) {
        Ok(scene) => scene,
        Err(err) => {
            error!(error = %err, "world_build_failed");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_app(config, Box::new(scene)) {
        error!(error = %err, "startup_failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}

/// Prefer the content document on disk; fall back to the embedded copy so a
/// bare binary still starts with the default catalogue.
fn load_content() -> ContentLibrary {
    match resolve_content_path() {
        Ok(path) => match ContentLibrary::load_from_path(&path) {
            Ok(library) => {
                info!(path = %path.display(), "content_loaded");
                return library;
            }
            Err(err) => warn!(error = %err, "content_load_failed"),
        },
        Err(err) => info!(reason = %err, "content_document_not_found"),
    }

    match ContentLibrary::from_json_str(campus::DEFAULT_CONTENT_JSON) {
        Ok(library) => {
            info!("embedded_content_loaded");
            library
        }
        Err(err) => {
            error!(error = %err, "embedded_content_invalid");
            ContentLibrary::default()
        }
    }
}
