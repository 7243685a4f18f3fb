use std::collections::HashMap;

use thiserror::Error;

use super::interaction::Interaction;

pub const TILE_SIZE_PX: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Grass,
    Path,
    Water,
    Flower,
    Tree,
    TreeTop,
    Wall,
    Roof,
    Door,
    Window,
    Sign,
    WoodFloor,
    InteriorWall,
    Bookshelf,
    Desk,
    Computer,
    Podium,
    LabBench,
    Chair,
}

impl Tile {
    /// Default collision for a freshly placed tile; authored layouts may
    /// override it per cell (a door tile is walkable so the player can step
    /// into it).
    pub fn blocks_by_default(self) -> bool {
        match self {
            Tile::Empty
            | Tile::Grass
            | Tile::Path
            | Tile::Flower
            | Tile::Door
            | Tile::WoodFloor => false,
            Tile::Water
            | Tile::Tree
            | Tile::TreeTop
            | Tile::Wall
            | Tile::Roof
            | Tile::Window
            | Tile::Sign
            | Tile::InteriorWall
            | Tile::Bookshelf
            | Tile::Desk
            | Tile::Computer
            | Tile::Podium
            | Tile::LabBench
            | Tile::Chair => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePoint {
    pub x: i32,
    pub y: i32,
}

impl TilePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn below(self) -> Self {
        Self {
            x: self.x,
            y: self.y + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("{layer} layer cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("interaction record at out-of-range cell index {index} (cell count {cell_count})")]
    InteractionOutOfRange { index: usize, cell_count: usize },
}

/// Dense row-major grid of tile kinds with a parallel collision mask and a
/// sparse interaction map. Immutable after construction.
///
/// Bounds policy: coordinates outside the grid read as [`Tile::Empty`] and
/// SOLID: the edge behaves as a boundary wall, so movement can never leave
/// authored space. Queries never panic.
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    solid: Vec<bool>,
    interactions: HashMap<usize, Interaction>,
}

impl TileGrid {
    pub fn new(
        width: u32,
        height: u32,
        tiles: Vec<Tile>,
        solid: Vec<bool>,
        interactions: HashMap<usize, Interaction>,
    ) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if tiles.len() != expected {
            return Err(GridError::CellCountMismatch {
                layer: "tile",
                expected,
                actual: tiles.len(),
            });
        }
        if solid.len() != expected {
            return Err(GridError::CellCountMismatch {
                layer: "collision",
                expected,
                actual: solid.len(),
            });
        }
        if let Some(&index) = interactions.keys().find(|&&index| index >= expected) {
            return Err(GridError::InteractionOutOfRange {
                index,
                cell_count: expected,
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
            solid,
            interactions,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE_PX
    }

    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE_PX
    }

    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        self.index_of(x, y)
            .and_then(|index| self.tiles.get(index).copied())
            .unwrap_or(Tile::Empty)
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        match self.index_of(x, y) {
            Some(index) => self.solid.get(index).copied().unwrap_or(true),
            None => true,
        }
    }

    pub fn interaction_at(&self, x: i32, y: i32) -> Option<&Interaction> {
        self.index_of(x, y)
            .and_then(|index| self.interactions.get(&index))
    }

    pub fn interactions(&self) -> impl Iterator<Item = (TilePoint, &Interaction)> {
        self.interactions.iter().map(|(&index, interaction)| {
            let x = (index % self.width as usize) as i32;
            let y = (index / self.width as usize) as i32;
            (TilePoint::new(x, y), interaction)
        })
    }
}

/// Authoring helper for hand-built layouts. Writes outside the grid are
/// ignored, matching how layouts paint freely near the edges.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
    solid: Vec<bool>,
    interactions: HashMap<usize, Interaction>,
}

impl GridBuilder {
    pub fn filled(width: u32, height: u32, fill: Tile) -> Self {
        let cell_count = width as usize * height as usize;
        Self {
            width,
            height,
            tiles: vec![fill; cell_count],
            solid: vec![fill.blocks_by_default(); cell_count],
            interactions: HashMap::new(),
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) -> &mut Self {
        if let Some(index) = self.index_of(x, y) {
            self.tiles[index] = tile;
            self.solid[index] = tile.blocks_by_default();
        }
        self
    }

    pub fn set_tile_with_collision(
        &mut self,
        x: i32,
        y: i32,
        tile: Tile,
        blocked: bool,
    ) -> &mut Self {
        if let Some(index) = self.index_of(x, y) {
            self.tiles[index] = tile;
            self.solid[index] = blocked;
        }
        self
    }

    pub fn set_solid(&mut self, x: i32, y: i32, blocked: bool) -> &mut Self {
        if let Some(index) = self.index_of(x, y) {
            self.solid[index] = blocked;
        }
        self
    }

    pub fn set_interaction(&mut self, x: i32, y: i32, interaction: Interaction) -> &mut Self {
        if let Some(index) = self.index_of(x, y) {
            self.interactions.insert(index, interaction);
        }
        self
    }

    pub fn build(self) -> Result<TileGrid, GridError> {
        TileGrid::new(
            self.width,
            self.height,
            self.tiles,
            self.solid,
            self.interactions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_wall_at_center() -> TileGrid {
        let mut builder = GridBuilder::filled(3, 3, Tile::Grass);
        builder.set_tile(1, 1, Tile::Wall);
        builder.build().expect("grid")
    }

    #[test]
    fn new_rejects_tile_layer_count_mismatch() {
        let err = TileGrid::new(2, 2, vec![Tile::Grass; 3], vec![false; 4], HashMap::new())
            .expect_err("err");
        assert_eq!(
            err,
            GridError::CellCountMismatch {
                layer: "tile",
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn new_rejects_collision_layer_count_mismatch() {
        let err = TileGrid::new(2, 2, vec![Tile::Grass; 4], vec![false; 5], HashMap::new())
            .expect_err("err");
        assert_eq!(
            err,
            GridError::CellCountMismatch {
                layer: "collision",
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn new_rejects_interaction_beyond_cell_count() {
        let mut interactions = HashMap::new();
        interactions.insert(4usize, Interaction::Exit);
        let err = TileGrid::new(2, 2, vec![Tile::Grass; 4], vec![false; 4], interactions)
            .expect_err("err");
        assert_eq!(
            err,
            GridError::InteractionOutOfRange {
                index: 4,
                cell_count: 4
            }
        );
    }

    #[test]
    fn out_of_range_reads_empty_and_solid() {
        let grid = grid_with_wall_at_center();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (100, 100)] {
            assert_eq!(grid.tile_at(x, y), Tile::Empty);
            assert!(grid.is_solid(x, y), "({x},{y}) should read as boundary");
            assert!(grid.interaction_at(x, y).is_none());
        }
    }

    #[test]
    fn solid_kinds_report_solid_and_open_kinds_do_not() {
        let solid_kinds = [
            Tile::Water,
            Tile::Tree,
            Tile::Wall,
            Tile::Window,
            Tile::Bookshelf,
            Tile::Desk,
            Tile::Chair,
        ];
        let open_kinds = [
            Tile::Grass,
            Tile::Path,
            Tile::Flower,
            Tile::WoodFloor,
            Tile::Door,
        ];
        for kind in solid_kinds {
            let mut builder = GridBuilder::filled(1, 1, Tile::Grass);
            builder.set_tile(0, 0, kind);
            assert!(builder.build().expect("grid").is_solid(0, 0), "{kind:?}");
        }
        for kind in open_kinds {
            let mut builder = GridBuilder::filled(1, 1, Tile::Grass);
            builder.set_tile(0, 0, kind);
            assert!(!builder.build().expect("grid").is_solid(0, 0), "{kind:?}");
        }
    }

    #[test]
    fn collision_override_survives_build() {
        let mut builder = GridBuilder::filled(2, 1, Tile::Grass);
        builder.set_tile_with_collision(0, 0, Tile::Door, false);
        builder.set_tile_with_collision(1, 0, Tile::Grass, true);
        let grid = builder.build().expect("grid");
        assert_eq!(grid.tile_at(0, 0), Tile::Door);
        assert!(!grid.is_solid(0, 0));
        assert!(grid.is_solid(1, 0));
    }

    #[test]
    fn interaction_round_trips_through_builder() {
        let mut builder = GridBuilder::filled(3, 3, Tile::Grass);
        builder.set_interaction(
            2,
            1,
            Interaction::Sign {
                text: "hi".to_string(),
            },
        );
        let grid = builder.build().expect("grid");
        assert_eq!(
            grid.interaction_at(2, 1),
            Some(&Interaction::Sign {
                text: "hi".to_string()
            })
        );
        assert!(grid.interaction_at(1, 1).is_none());
    }

    #[test]
    fn builder_ignores_writes_outside_the_grid() {
        let mut builder = GridBuilder::filled(2, 2, Tile::Grass);
        builder.set_tile(-1, 0, Tile::Wall);
        builder.set_tile(0, 5, Tile::Wall);
        builder.set_interaction(9, 9, Interaction::Exit);
        let grid = builder.build().expect("grid");
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(grid.tile_at(x, y), Tile::Grass);
                assert!(!grid.is_solid(x, y));
            }
        }
        assert_eq!(grid.interactions().count(), 0);
    }

    #[test]
    fn interactions_iterator_reports_cell_coordinates() {
        let mut builder = GridBuilder::filled(4, 3, Tile::Grass);
        builder.set_interaction(3, 2, Interaction::Exit);
        let grid = builder.build().expect("grid");
        let placed: Vec<_> = grid.interactions().collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].0, TilePoint::new(3, 2));
    }
}
