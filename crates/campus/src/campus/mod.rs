mod content_data;
mod interiors;
mod map;
mod scene;

use std::collections::BTreeMap;

use engine::{Building, BuildingId, ContentLibrary, GridError, World, WorldError};
use thiserror::Error;

pub use content_data::DEFAULT_CONTENT_JSON;
pub use scene::CampusScene;

#[derive(Debug, Error)]
pub enum CampusBuildError {
    #[error("failed to build a campus grid: {0}")]
    Grid(#[from] GridError),
    #[error("campus world failed validation: {0}")]
    World(#[from] WorldError),
}

/// Assemble the campus world: the overworld grid plus the four interiors,
/// cross-checked against the content catalogue.
pub fn build_world(content: &ContentLibrary) -> Result<World, CampusBuildError> {
    let campus = map::campus_grid()?;
    let mut buildings = BTreeMap::new();
    for spec in &map::BUILDING_SPECS {
        let layout = interiors::interior_layout(spec.id)?;
        buildings.insert(
            spec.id,
            Building {
                name: spec.name.to_string(),
                entrance: spec.entrance,
                spawn: layout.spawn,
                grid: layout.grid,
            },
        );
    }
    Ok(World::new(campus, buildings, content)?)
}
