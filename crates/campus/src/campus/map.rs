use engine::{BuildingId, GridBuilder, GridError, Interaction, Tile, TileGrid, TilePoint};

pub const CAMPUS_WIDTH: u32 = 40;
pub const CAMPUS_HEIGHT: u32 = 30;
pub const CAMPUS_SPAWN: TilePoint = TilePoint { x: 20, y: 26 };

const MAIN_PATH_ROWS: [i32; 2] = [13, 14];
const VERTICAL_PATH_COLUMNS: [i32; 3] = [8, 20, 32];
const RIVER_WIDTH: i32 = 3;

const FLOWER_POSITIONS: [(i32, i32); 12] = [
    (5, 16),
    (6, 17),
    (10, 5),
    (11, 6),
    (24, 20),
    (25, 21),
    (35, 16),
    (36, 17),
    (14, 10),
    (15, 11),
    (26, 10),
    (27, 11),
];

const TREE_POSITIONS: [(i32, i32); 16] = [
    (4, 4),
    (4, 20),
    (4, 25),
    (12, 4),
    (12, 20),
    (12, 25),
    (24, 4),
    (24, 24),
    (28, 20),
    (36, 4),
    (36, 20),
    (36, 25),
    (14, 17),
    (26, 17),
    (38, 10),
    (38, 16),
];

/// Footprint and entrance of one campus building. The entrance cell gets
/// the door; the cell below it is the walkable approach.
#[derive(Debug, Clone, Copy)]
pub struct BuildingSpec {
    pub id: BuildingId,
    pub name: &'static str,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub entrance: TilePoint,
}

pub const BUILDING_SPECS: [BuildingSpec; 4] = [
    BuildingSpec {
        id: BuildingId::Office,
        name: "Sam's Office",
        x: 6,
        y: 9,
        width: 5,
        height: 4,
        entrance: TilePoint { x: 8, y: 12 },
    },
    BuildingSpec {
        id: BuildingId::Library,
        name: "King's College Library",
        x: 17,
        y: 14,
        width: 7,
        height: 5,
        entrance: TilePoint { x: 20, y: 18 },
    },
    BuildingSpec {
        id: BuildingId::LectureHall,
        name: "Senate House",
        x: 29,
        y: 9,
        width: 6,
        height: 4,
        entrance: TilePoint { x: 32, y: 12 },
    },
    BuildingSpec {
        id: BuildingId::Lab,
        name: "Research Lab",
        x: 17,
        y: 4,
        width: 7,
        height: 4,
        entrance: TilePoint { x: 20, y: 7 },
    },
];

/// The hand-authored Cambridge campus: the River Cam along the west edge,
/// a path grid, greenery, and the four enterable buildings with their
/// signposts.
pub fn campus_grid() -> Result<TileGrid, GridError> {
    let mut builder = GridBuilder::filled(CAMPUS_WIDTH, CAMPUS_HEIGHT, Tile::Grass);

    for row in MAIN_PATH_ROWS {
        for x in 0..CAMPUS_WIDTH as i32 {
            builder.set_tile(x, row, Tile::Path);
        }
    }
    for column in VERTICAL_PATH_COLUMNS {
        for y in 5..25 {
            builder.set_tile(column, y, Tile::Path);
        }
    }

    for x in 0..RIVER_WIDTH {
        for y in 0..CAMPUS_HEIGHT as i32 {
            builder.set_tile(x, y, Tile::Water);
        }
    }

    for (x, y) in FLOWER_POSITIONS {
        builder.set_tile(x, y, Tile::Flower);
    }
    for (x, y) in TREE_POSITIONS {
        builder.set_tile(x, y, Tile::Tree);
        builder.set_tile(x, y - 1, Tile::TreeTop);
    }

    for spec in &BUILDING_SPECS {
        place_building(&mut builder, spec);
    }

    place_sign(&mut builder, 7, 13, "Sam's Office - About Me");
    place_sign(&mut builder, 19, 19, "King's College Library - Publications");
    place_sign(&mut builder, 31, 13, "Senate House - Media & Talks");
    place_sign(&mut builder, 19, 8, "Research Lab - Current Projects");
    place_sign(
        &mut builder,
        20,
        22,
        "Welcome to Cambridge! Explore the campus to learn about Sam's work. \
         Enter buildings to discover more.",
    );

    builder.build()
}

fn place_building(builder: &mut GridBuilder, spec: &BuildingSpec) {
    for bx in spec.x..spec.x + spec.width {
        for by in spec.y..spec.y + spec.height {
            builder.set_tile(bx, by, Tile::Wall);
        }
    }
    for bx in spec.x..spec.x + spec.width {
        builder.set_tile(bx, spec.y, Tile::Roof);
    }
    // Windows on the facade, skipping the entrance column.
    let mut bx = spec.x + 1;
    while bx < spec.x + spec.width - 1 {
        if bx != spec.entrance.x {
            builder.set_tile(bx, spec.y + 2, Tile::Window);
        }
        bx += 2;
    }

    builder.set_tile_with_collision(spec.entrance.x, spec.entrance.y, Tile::Door, false);
    builder.set_interaction(
        spec.entrance.x,
        spec.entrance.y,
        Interaction::Door { building: spec.id },
    );

    let approach = spec.entrance.below();
    builder.set_tile(approach.x, approach.y, Tile::Path);
    builder.set_interaction(
        approach.x,
        approach.y,
        Interaction::Entrance { building: spec.id },
    );
}

fn place_sign(builder: &mut GridBuilder, x: i32, y: i32, text: &str) {
    builder.set_tile(x, y, Tile::Sign);
    builder.set_interaction(
        x,
        y,
        Interaction::Sign {
            text: text.to_string(),
        },
    );
}
