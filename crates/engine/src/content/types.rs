use std::collections::HashMap;

use serde::Deserialize;

use crate::app::RoomItem;

/// The portfolio catalogue, deserialized once from `content.json`. Every
/// collection defaults to empty so partial documents still load; the game
/// degrades to fallback dialog text instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub talks: Vec<Talk>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub research: Vec<ResearchTopic>,
    #[serde(default)]
    pub rooms: RoomNotes,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub affiliation: String,
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub year: i32,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "abstract")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Talk {
    pub title: String,
    pub venue: String,
    pub date: String,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub slides: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Podcast,
    Video,
    Panel,
    Interview,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Podcast => "PODCAST",
            MediaKind::Video => "VIDEO",
            MediaKind::Panel => "PANEL",
            MediaKind::Interview => "INTERVIEW",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub title: String,
    pub venue: String,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchTopic {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Flavor text for interactive fixtures, keyed by the typed room/item pair
/// used in grid interaction records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomNotes {
    #[serde(default)]
    pub office: HashMap<RoomItem, String>,
    #[serde(default)]
    pub library: HashMap<RoomItem, String>,
    #[serde(default, rename = "lectureHall")]
    pub lecture_hall: HashMap<RoomItem, String>,
    #[serde(default)]
    pub lab: HashMap<RoomItem, String>,
}
