use serde::Deserialize;

/// Enterable campus buildings. Closed set: every variant has a registered
/// interior, so "unknown building id" is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildingId {
    Office,
    Library,
    LectureHall,
    Lab,
}

impl BuildingId {
    pub const ALL: [BuildingId; 4] = [
        BuildingId::Office,
        BuildingId::Library,
        BuildingId::LectureHall,
        BuildingId::Lab,
    ];

    pub fn as_token(self) -> &'static str {
        match self {
            BuildingId::Office => "office",
            BuildingId::Library => "library",
            BuildingId::LectureHall => "lecture_hall",
            BuildingId::Lab => "lab",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSection {
    Publications,
    Talks,
    Media,
    Research,
}

impl ContentSection {
    pub fn title(self) -> &'static str {
        match self {
            ContentSection::Publications => "Publications",
            ContentSection::Talks => "Invited Talks",
            ContentSection::Media => "Media & Appearances",
            ContentSection::Research => "Research Projects",
        }
    }
}

/// Interactive fixtures inside rooms. Keys into the content catalogue's
/// per-room notes; the pairing with a room is validated at world
/// construction so a placed fixture can never silently miss its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoomItem {
    Desk,
    Bookshelf,
    Window,
    Computer,
    Plant,
    Entrance,
    JournalShelf,
    ConferenceShelf,
    ReadingDesk,
    Podium,
    Screen,
    Seats,
    Workbench,
    Servers,
    Whiteboard,
}

impl RoomItem {
    pub fn display_name(self) -> &'static str {
        match self {
            RoomItem::Desk => "Desk",
            RoomItem::Bookshelf => "Bookshelf",
            RoomItem::Window => "Window",
            RoomItem::Computer => "Computer",
            RoomItem::Plant => "Plant",
            RoomItem::Entrance => "Entrance",
            RoomItem::JournalShelf => "Journal Shelf",
            RoomItem::ConferenceShelf => "Conference Shelf",
            RoomItem::ReadingDesk => "Reading Desk",
            RoomItem::Podium => "Podium",
            RoomItem::Screen => "Screen",
            RoomItem::Seats => "Seats",
            RoomItem::Workbench => "Workbench",
            RoomItem::Servers => "Servers",
            RoomItem::Whiteboard => "Whiteboard",
        }
    }
}

/// What happens when the player activates a cell. Attached to at most one
/// cell per grid; several cells may name the same logical subject.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    Door { building: BuildingId },
    Entrance { building: BuildingId },
    Exit,
    Sign { text: String },
    Object { room: BuildingId, item: RoomItem },
    Publication { index: usize },
    Talk { index: usize },
    Media { index: usize },
    Research { index: usize },
    Panel { section: ContentSection },
}
