use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use super::grid::{TileGrid, TilePoint};
use super::interaction::{BuildingId, Interaction, RoomItem};
use crate::content::ContentLibrary;

pub const CAMPUS_LOCATION_NAME: &str = "Cambridge Campus";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Campus,
    Inside(BuildingId),
}

/// A registered building: its campus-side door cell, its interior grid, and
/// where the player appears inside.
#[derive(Debug, Clone)]
pub struct Building {
    pub name: String,
    pub entrance: TilePoint,
    pub spawn: TilePoint,
    pub grid: TileGrid,
}

#[derive(Debug, Clone)]
pub struct EnterOutcome {
    pub spawn: TilePoint,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("door record at ({x}, {y}) references unregistered building {building:?}")]
    DoorWithoutInterior { building: BuildingId, x: i32, y: i32 },
    #[error("building {building:?} entrance cell carries no door record")]
    EntranceMissingDoor { building: BuildingId },
    #[error("building {building:?} campus-side exit cell is not walkable")]
    ExitCellBlocked { building: BuildingId },
    #[error("building {building:?} interior spawn is not walkable")]
    SpawnBlocked { building: BuildingId },
    #[error("building {building:?} interior has no exit record")]
    MissingExit { building: BuildingId },
    #[error("object record for {room:?}/{item:?} has no note in the content catalogue")]
    UnresolvedRoomNote { room: BuildingId, item: RoomItem },
}

/// The campus grid, its interiors, and which of them is active. Grids are
/// immutable; only the current location changes, on enter/exit transitions.
#[derive(Debug, Clone)]
pub struct World {
    campus: TileGrid,
    buildings: BTreeMap<BuildingId, Building>,
    location: Location,
}

impl World {
    /// Validates the cross-references the dispatcher later relies on:
    /// every door leads to a registered interior, every entrance cell
    /// actually carries a door, spawns and exit cells are walkable, every
    /// interior can be left, and every placed object note resolves against
    /// the content catalogue.
    pub fn new(
        campus: TileGrid,
        buildings: BTreeMap<BuildingId, Building>,
        content: &ContentLibrary,
    ) -> Result<Self, WorldError> {
        validate_grid_records(&campus, &buildings, content)?;
        for (&id, building) in &buildings {
            match campus.interaction_at(building.entrance.x, building.entrance.y) {
                Some(Interaction::Door { building: door_id }) if *door_id == id => {}
                _ => return Err(WorldError::EntranceMissingDoor { building: id }),
            }
            let exit_cell = building.entrance.below();
            if campus.is_solid(exit_cell.x, exit_cell.y) {
                return Err(WorldError::ExitCellBlocked { building: id });
            }
            if building.grid.is_solid(building.spawn.x, building.spawn.y) {
                return Err(WorldError::SpawnBlocked { building: id });
            }
            if !building
                .grid
                .interactions()
                .any(|(_, interaction)| matches!(interaction, Interaction::Exit))
            {
                return Err(WorldError::MissingExit { building: id });
            }
            validate_grid_records(&building.grid, &buildings, content)?;
        }
        Ok(Self {
            campus,
            buildings,
            location: Location::Campus,
        })
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn location_name(&self) -> &str {
        match self.location {
            Location::Campus => CAMPUS_LOCATION_NAME,
            Location::Inside(id) => self
                .buildings
                .get(&id)
                .map(|building| building.name.as_str())
                .unwrap_or(CAMPUS_LOCATION_NAME),
        }
    }

    pub fn current_grid(&self) -> &TileGrid {
        match self.location {
            Location::Campus => &self.campus,
            Location::Inside(id) => self
                .buildings
                .get(&id)
                .map(|building| &building.grid)
                .unwrap_or(&self.campus),
        }
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(&id)
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        !self.current_grid().is_solid(x, y)
    }

    /// Switch to a building's interior. `None` (and no transition) if the
    /// building has no registered interior in this world.
    pub fn enter_building(&mut self, id: BuildingId) -> Option<EnterOutcome> {
        let building = self.buildings.get(&id)?;
        let outcome = EnterOutcome {
            spawn: building.spawn,
            name: building.name.clone(),
        };
        self.location = Location::Inside(id);
        debug!(building = id.as_token(), "building_entered");
        Some(outcome)
    }

    /// Return to the campus, spawning one tile below the building's
    /// entrance. No-op from the campus.
    pub fn exit_building(&mut self) -> Option<TilePoint> {
        let Location::Inside(id) = self.location else {
            return None;
        };
        let building = self.buildings.get(&id)?;
        let spawn = building.entrance.below();
        self.location = Location::Campus;
        debug!(building = id.as_token(), "building_exited");
        Some(spawn)
    }

    /// Scan the 3x3 block centered on (x, y) row-major from the top-left
    /// and return the first interaction record found. The order is the
    /// tie-break contract when several adjacent cells carry records.
    pub fn nearby_interaction(&self, x: i32, y: i32) -> Option<(TilePoint, &Interaction)> {
        let grid = self.current_grid();
        for dy in -1..=1 {
            for dx in -1..=1 {
                let cell = TilePoint::new(x + dx, y + dy);
                if let Some(interaction) = grid.interaction_at(cell.x, cell.y) {
                    return Some((cell, interaction));
                }
            }
        }
        None
    }
}

fn validate_grid_records(
    grid: &TileGrid,
    buildings: &BTreeMap<BuildingId, Building>,
    content: &ContentLibrary,
) -> Result<(), WorldError> {
    for (cell, interaction) in grid.interactions() {
        match interaction {
            Interaction::Door { building } | Interaction::Entrance { building } => {
                if !buildings.contains_key(building) {
                    return Err(WorldError::DoorWithoutInterior {
                        building: *building,
                        x: cell.x,
                        y: cell.y,
                    });
                }
            }
            Interaction::Object { room, item } => {
                if content.room_note(*room, *item).is_none() {
                    return Err(WorldError::UnresolvedRoomNote {
                        room: *room,
                        item: *item,
                    });
                }
            }
            _ => {}
        }
    }
    Ok(())
}
