use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{About, MediaItem, Publication, ResearchTopic, SiteContent, Talk};
use crate::app::{BuildingId, RoomItem};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content document {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
}

/// Read-only lookup surface over the deserialized catalogue. Indexed
/// lookups are bounds-checked and return `None` on a miss; callers decide
/// the fallback presentation.
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    content: SiteContent,
}

impl ContentLibrary {
    pub fn from_site_content(content: SiteContent) -> Self {
        Self { content }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        Self::parse(raw, "<embedded>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, ContentError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        let content: SiteContent =
            serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
                ContentError::Parse {
                    origin: origin.to_string(),
                    source,
                }
            })?;
        Ok(Self { content })
    }

    pub fn about(&self) -> &About {
        &self.content.about
    }

    pub fn publication(&self, index: usize) -> Option<&Publication> {
        self.content.publications.get(index)
    }

    pub fn publications(&self) -> &[Publication] {
        &self.content.publications
    }

    pub fn talk(&self, index: usize) -> Option<&Talk> {
        self.content.talks.get(index)
    }

    pub fn talks(&self) -> &[Talk] {
        &self.content.talks
    }

    pub fn media_item(&self, index: usize) -> Option<&MediaItem> {
        self.content.media.get(index)
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.content.media
    }

    pub fn research_topic(&self, index: usize) -> Option<&ResearchTopic> {
        self.content.research.get(index)
    }

    pub fn research(&self) -> &[ResearchTopic] {
        &self.content.research
    }

    pub fn room_note(&self, room: BuildingId, item: RoomItem) -> Option<&str> {
        let notes = match room {
            BuildingId::Office => &self.content.rooms.office,
            BuildingId::Library => &self.content.rooms.library,
            BuildingId::LectureHall => &self.content.rooms.lecture_hall,
            BuildingId::Lab => &self.content.rooms.lab,
        };
        notes.get(&item).map(String::as_str)
    }
}
