use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod app;
pub mod content;

pub use app::{
    move_with_collision, overlaps_solid, run_app, world_to_screen_px, Activation, AppError,
    Building, BuildingId, Camera, ContentSection, DialogPage, EnterOutcome, Facing, GridBuilder,
    GridError, InputAction, InputSnapshot, Interaction, Location, LoopConfig,
    LoopMetricsSnapshot, OverlayController, OverlayState, OverlayView, PanelEntry, Player,
    PlayerView, Prompt, Renderer, RoomItem, Scene, SceneCommand, SceneView, Tile, TileGrid,
    TilePoint, Viewport, World, WorldError, CAMPUS_LOCATION_NAME, INTERACT_COOLDOWN_SECONDS,
    PLAYER_SPEED_PX_PER_SECOND, RENDER_SCALE, TILE_SIZE_PX,
};
pub use content::{ContentError, ContentLibrary, SiteContent};

pub const ROOT_ENV_VAR: &str = "CAMPUS_ROOT";
pub const CONTENT_FILE_RELATIVE: &str = "content/content.json";

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to read environment variable {var}: {source}")]
    EnvVar {
        var: &'static str,
        #[source]
        source: env::VarError,
    },
    #[error("failed to resolve current executable path: {0}")]
    CurrentExe(#[source] std::io::Error),
    #[error("current executable path has no parent directory: {0}")]
    ExeHasNoParent(PathBuf),
    #[error(
        "{env_var} is set but does not point to a directory containing content/content.json: {path}"
    )]
    InvalidEnvRoot {
        path: PathBuf,
        env_var: &'static str,
    },
    #[error(
        "could not find content/content.json walking upward from {start_dir}; set {env_var} to the project root"
    )]
    ContentNotFound {
        start_dir: PathBuf,
        env_var: &'static str,
    },
}

/// Locate the content document: `CAMPUS_ROOT` wins when set, otherwise the
/// executable's ancestor directories are searched for `content/content.json`.
pub fn resolve_content_path() -> Result<PathBuf, StartupError> {
    match env::var(ROOT_ENV_VAR) {
        Ok(value) => {
            let root = normalize_path(&PathBuf::from(value));
            if is_content_root(&root) {
                Ok(root.join(CONTENT_FILE_RELATIVE))
            } else {
                Err(StartupError::InvalidEnvRoot {
                    path: root,
                    env_var: ROOT_ENV_VAR,
                })
            }
        }
        Err(env::VarError::NotPresent) => {
            let exe = env::current_exe().map_err(StartupError::CurrentExe)?;
            let exe_dir = exe
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| StartupError::ExeHasNoParent(exe.clone()))?;

            for candidate in exe_dir.ancestors() {
                if is_content_root(candidate) {
                    return Ok(normalize_path(candidate).join(CONTENT_FILE_RELATIVE));
                }
            }

            Err(StartupError::ContentNotFound {
                start_dir: normalize_path(&exe_dir),
                env_var: ROOT_ENV_VAR,
            })
        }
        Err(source) => Err(StartupError::EnvVar {
            var: ROOT_ENV_VAR,
            source,
        }),
    }
}

fn is_content_root(path: &Path) -> bool {
    path.join(CONTENT_FILE_RELATIVE).is_file()
}

fn normalize_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn content_root_requires_the_content_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(!is_content_root(dir.path()));

        fs::create_dir_all(dir.path().join("content")).expect("mkdir");
        let mut file =
            fs::File::create(dir.path().join(CONTENT_FILE_RELATIVE)).expect("create");
        file.write_all(b"{}").expect("write");
        assert!(is_content_root(dir.path()));
    }
}
