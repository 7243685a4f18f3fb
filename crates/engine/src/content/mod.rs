mod library;
mod types;

pub use library::{ContentError, ContentLibrary};
pub use types::{
    About, Education, MediaItem, MediaKind, Publication, ResearchTopic, RoomNotes, SiteContent,
    Talk,
};
