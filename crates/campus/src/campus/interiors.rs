use engine::{
    BuildingId, ContentSection, GridBuilder, GridError, Interaction, RoomItem, Tile, TileGrid,
    TilePoint,
};

pub struct InteriorLayout {
    pub grid: TileGrid,
    pub spawn: TilePoint,
}

pub fn interior_layout(id: BuildingId) -> Result<InteriorLayout, GridError> {
    match id {
        BuildingId::Office => office_interior(),
        BuildingId::Library => library_interior(),
        BuildingId::LectureHall => lecture_hall_interior(),
        BuildingId::Lab => lab_interior(),
    }
}

fn shell(width: u32, height: u32) -> GridBuilder {
    let mut builder = GridBuilder::filled(width, height, Tile::WoodFloor);
    for x in 0..width as i32 {
        builder.set_tile(x, 0, Tile::InteriorWall);
    }
    for y in 0..height as i32 {
        builder.set_solid(0, y, true);
        builder.set_solid(width as i32 - 1, y, true);
    }
    builder
}

fn place_exit(builder: &mut GridBuilder, width: u32, height: u32) -> TilePoint {
    let exit = TilePoint::new(width as i32 / 2, height as i32 - 1);
    builder.set_interaction(exit.x, exit.y, Interaction::Exit);
    exit
}

fn object(room: BuildingId, item: RoomItem) -> Interaction {
    Interaction::Object { room, item }
}

/// Sam's office: desk and computer by the west wall, a bookshelf run along
/// the north wall, and a window onto the courtyard.
fn office_interior() -> Result<InteriorLayout, GridError> {
    let (width, height) = (12u32, 10u32);
    let mut builder = shell(width, height);

    builder.set_tile(2, 2, Tile::Desk);
    builder.set_interaction(2, 3, object(BuildingId::Office, RoomItem::Desk));
    builder.set_tile(3, 2, Tile::Computer);
    builder.set_interaction(3, 3, object(BuildingId::Office, RoomItem::Computer));
    // The desk chair stays walkable, like the rest of the floor.
    builder.set_tile_with_collision(2, 3, Tile::Chair, false);

    for x in 6..10 {
        builder.set_tile(x, 1, Tile::Bookshelf);
        builder.set_interaction(x, 2, object(BuildingId::Office, RoomItem::Bookshelf));
    }

    builder.set_tile(10, 1, Tile::Window);
    builder.set_interaction(10, 2, object(BuildingId::Office, RoomItem::Window));

    place_exit(&mut builder, width, height);
    Ok(InteriorLayout {
        grid: builder.build()?,
        spawn: TilePoint::new(width as i32 / 2, height as i32 - 2),
    })
}

/// The library: wall shelves keyed to individual publications, central
/// stacks, and a reading desk that opens the full publications panel.
fn library_interior() -> Result<InteriorLayout, GridError> {
    let (width, height) = (16u32, 12u32);
    let mut builder = shell(width, height);

    for x in 2..7 {
        builder.set_tile(x, 1, Tile::Bookshelf);
        builder.set_interaction(x, 2, Interaction::Publication { index: x as usize - 2 });
    }
    for x in 9..14 {
        builder.set_tile(x, 1, Tile::Bookshelf);
        builder.set_interaction(x, 2, Interaction::Publication { index: x as usize - 4 });
    }

    for x in 3..13 {
        builder.set_tile(x, 4, Tile::Bookshelf);
        builder.set_tile(x, 7, Tile::Bookshelf);
    }

    builder.set_tile(7, 9, Tile::Desk);
    builder.set_tile(8, 9, Tile::Desk);
    builder.set_interaction(
        7,
        10,
        Interaction::Panel {
            section: ContentSection::Publications,
        },
    );

    place_exit(&mut builder, width, height);
    Ok(InteriorLayout {
        grid: builder.build()?,
        spawn: TilePoint::new(width as i32 / 2, height as i32 - 2),
    })
}

/// Senate House: a podium and projector screen up front, side lecterns
/// opening the media and talks panels, and seat rows keyed to media items.
fn lecture_hall_interior() -> Result<InteriorLayout, GridError> {
    let (width, height) = (14u32, 12u32);
    let mut builder = shell(width, height);

    builder.set_tile(6, 2, Tile::Podium);
    builder.set_tile(7, 2, Tile::Podium);
    builder.set_interaction(6, 3, Interaction::Media { index: 0 });
    builder.set_interaction(7, 3, Interaction::Media { index: 0 });

    for x in 5..9 {
        builder.set_tile(x, 1, Tile::Window);
    }

    builder.set_interaction(
        3,
        2,
        Interaction::Panel {
            section: ContentSection::Media,
        },
    );
    builder.set_interaction(
        10,
        2,
        Interaction::Panel {
            section: ContentSection::Talks,
        },
    );

    for row in 0..4 {
        let y = 5 + row * 2;
        let mut x = 3;
        while x < 11 {
            builder.set_tile(x, y, Tile::Chair);
            builder.set_interaction(x + 1, y, Interaction::Media { index: row as usize + 1 });
            x += 2;
        }
    }

    place_exit(&mut builder, width, height);
    Ok(InteriorLayout {
        grid: builder.build()?,
        spawn: TilePoint::new(width as i32 / 2, height as i32 - 2),
    })
}

/// The research lab: bench rows and computer stations keyed to research
/// topics, plus the whiteboard wall.
fn lab_interior() -> Result<InteriorLayout, GridError> {
    let (width, height) = (16u32, 12u32);
    let mut builder = shell(width, height);

    for x in 2..7 {
        builder.set_tile(x, 2, Tile::LabBench);
        builder.set_interaction(x, 3, Interaction::Research { index: 0 });
    }
    for x in 9..14 {
        builder.set_tile(x, 2, Tile::LabBench);
        builder.set_interaction(x, 3, Interaction::Research { index: 1 });
    }

    builder.set_tile(3, 5, Tile::Desk);
    builder.set_tile(4, 5, Tile::Computer);
    builder.set_interaction(3, 6, Interaction::Research { index: 2 });
    builder.set_interaction(4, 6, Interaction::Research { index: 2 });

    builder.set_tile(11, 5, Tile::Desk);
    builder.set_tile(12, 5, Tile::Computer);
    builder.set_interaction(11, 6, Interaction::Research { index: 3 });
    builder.set_interaction(12, 6, Interaction::Research { index: 3 });

    for x in 5..11 {
        builder.set_tile(x, 8, Tile::Bookshelf);
    }
    builder.set_interaction(7, 9, object(BuildingId::Lab, RoomItem::Whiteboard));
    builder.set_interaction(8, 9, object(BuildingId::Lab, RoomItem::Whiteboard));

    place_exit(&mut builder, width, height);
    Ok(InteriorLayout {
        grid: builder.build()?,
        spawn: TilePoint::new(width as i32 / 2, height as i32 - 2),
    })
}
