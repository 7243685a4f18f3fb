use std::collections::{BTreeSet, VecDeque};

use tracing::info;

use super::interaction::{BuildingId, ContentSection, Interaction, RoomItem};
use crate::content::ContentLibrary;

pub const INTERACT_COOLDOWN_SECONDS: f32 = 0.2;

const FALLBACK_PUBLICATION: &str =
    "Rows of academic journals and conference proceedings line the shelves.";
const FALLBACK_TALK: &str = "The stage is set for academic presentations and guest lectures.";
const FALLBACK_MEDIA: &str = "The lecture hall is set up for presentations on AI and conservation.";
const FALLBACK_RESEARCH: &str =
    "Equipment and computers fill the lab, all dedicated to conservation AI research.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogPage {
    pub title: String,
    pub body: String,
}

impl DialogPage {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub heading: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Idle,
    Dialog {
        current: DialogPage,
        queue: VecDeque<DialogPage>,
    },
    Panel {
        title: String,
        entries: Vec<PanelEntry>,
        focus_index: usize,
    },
}

/// What an accepted interaction asks the caller to do next. Dialog/panel
/// transitions are already applied; location transitions are the caller's
/// job because they touch world, player, and camera together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    None,
    Dialog,
    Panel,
    EnterBuilding(BuildingId),
    ExitBuilding,
}

/// Verb line shown beneath the subject in the proximity prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub subject: String,
    pub action: &'static str,
}

impl Prompt {
    pub fn for_interaction(interaction: &Interaction, building_name: Option<&str>) -> Self {
        match interaction {
            Interaction::Door { .. } | Interaction::Entrance { .. } => Self {
                subject: building_name.unwrap_or("Entrance").to_string(),
                action: "Press ENTER to enter",
            },
            Interaction::Exit => Self {
                subject: "Exit".to_string(),
                action: "Press ENTER to exit",
            },
            Interaction::Sign { .. } => Self {
                subject: "Sign".to_string(),
                action: "Press ENTER to read",
            },
            Interaction::Object { item, .. } => Self {
                subject: item.display_name().to_string(),
                action: "Press ENTER to interact",
            },
            Interaction::Publication { .. } => Self {
                subject: "Bookshelf".to_string(),
                action: "Press ENTER to interact",
            },
            Interaction::Talk { .. } => Self {
                subject: "Lecture Notes".to_string(),
                action: "Press ENTER to interact",
            },
            Interaction::Media { .. } => Self {
                subject: "Media Equipment".to_string(),
                action: "Press ENTER to interact",
            },
            Interaction::Research { .. } => Self {
                subject: "Research Station".to_string(),
                action: "Press ENTER to interact",
            },
            Interaction::Panel { section } => Self {
                subject: section.title().to_string(),
                action: "Press ENTER to browse",
            },
        }
    }
}

/// Dialog/panel overlay state machine. States are mutually exclusive; a
/// fixed cooldown after each accepted interaction absorbs duplicate
/// activations, and building visits are tracked for welcome messages.
#[derive(Debug, Clone)]
pub struct OverlayController {
    state: OverlayState,
    cooldown_remaining: f32,
    visited: BTreeSet<BuildingId>,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayController {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Idle,
            cooldown_remaining: 0.0,
            visited: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, OverlayState::Idle)
    }

    pub fn is_dialog_open(&self) -> bool {
        matches!(self.state, OverlayState::Dialog { .. })
    }

    pub fn is_panel_open(&self) -> bool {
        matches!(self.state, OverlayState::Panel { .. })
    }

    pub fn tick(&mut self, dt_seconds: f32) {
        self.cooldown_remaining = (self.cooldown_remaining - dt_seconds).max(0.0);
    }

    /// Resolve an interaction record against the content catalogue.
    /// Rejected while an overlay is open or during the cooldown window.
    pub fn activate(&mut self, interaction: &Interaction, content: &ContentLibrary) -> Activation {
        if self.is_open() || self.cooldown_remaining > 0.0 {
            return Activation::None;
        }
        self.cooldown_remaining = INTERACT_COOLDOWN_SECONDS;

        match interaction {
            Interaction::Door { building } | Interaction::Entrance { building } => {
                Activation::EnterBuilding(*building)
            }
            Interaction::Exit => Activation::ExitBuilding,
            Interaction::Sign { text } => {
                self.open_dialog(vec![DialogPage::new("Sign", text.clone())]);
                Activation::Dialog
            }
            Interaction::Object { room, item } => {
                self.open_dialog(vec![object_page(*room, *item, content)]);
                Activation::Dialog
            }
            Interaction::Publication { index } => {
                self.open_dialog(vec![publication_page(*index, content)]);
                Activation::Dialog
            }
            Interaction::Talk { index } => {
                self.open_dialog(vec![talk_page(*index, content)]);
                Activation::Dialog
            }
            Interaction::Media { index } => {
                self.open_dialog(vec![media_page(*index, content)]);
                Activation::Dialog
            }
            Interaction::Research { index } => {
                self.open_dialog(vec![research_page(*index, content)]);
                Activation::Dialog
            }
            Interaction::Panel { section } => {
                self.open_panel(*section, content);
                Activation::Panel
            }
        }
    }

    /// Show the first page now and queue the rest; advancing drains the
    /// queue before closing, so N queued pages need N+1 advances in total.
    pub fn open_dialog(&mut self, pages: Vec<DialogPage>) {
        let mut pages = pages.into_iter();
        let Some(current) = pages.next() else {
            return;
        };
        info!(title = %current.title, "dialog_opened");
        self.state = OverlayState::Dialog {
            current,
            queue: pages.collect(),
        };
    }

    pub fn advance_dialog(&mut self) {
        let state = std::mem::replace(&mut self.state, OverlayState::Idle);
        match state {
            OverlayState::Dialog { mut queue, .. } => match queue.pop_front() {
                Some(next) => {
                    self.state = OverlayState::Dialog {
                        current: next,
                        queue,
                    };
                }
                None => info!("dialog_closed"),
            },
            other => self.state = other,
        }
    }

    pub fn open_panel(&mut self, section: ContentSection, content: &ContentLibrary) {
        let entries = panel_entries(section, content);
        info!(section = section.title(), entry_count = entries.len(), "panel_opened");
        self.state = OverlayState::Panel {
            title: section.title().to_string(),
            entries,
            focus_index: 0,
        };
    }

    pub fn close_panel(&mut self) {
        if matches!(self.state, OverlayState::Panel { .. }) {
            self.state = OverlayState::Idle;
            info!("panel_closed");
        }
    }

    /// Forward focus wrap within the panel's entries.
    pub fn focus_next(&mut self) {
        if let OverlayState::Panel {
            entries,
            focus_index,
            ..
        } = &mut self.state
        {
            if !entries.is_empty() {
                *focus_index = (*focus_index + 1) % entries.len();
            }
        }
    }

    /// Backward focus wrap within the panel's entries.
    pub fn focus_prev(&mut self) {
        if let OverlayState::Panel {
            entries,
            focus_index,
            ..
        } = &mut self.state
        {
            if !entries.is_empty() {
                *focus_index = (*focus_index + entries.len() - 1) % entries.len();
            }
        }
    }

    /// Record a visit; true on the first visit this session.
    pub fn record_visit(&mut self, building: BuildingId) -> bool {
        self.visited.insert(building)
    }

    pub fn has_visited(&self, building: BuildingId) -> bool {
        self.visited.contains(&building)
    }

    pub fn welcome_pages(
        &self,
        building: BuildingId,
        name: &str,
        first_visit: bool,
        content: &ContentLibrary,
    ) -> Vec<DialogPage> {
        if !first_visit {
            return vec![DialogPage::new(name, format!("Welcome back to {name}!"))];
        }
        let mut pages = vec![DialogPage::new(name, format!("Welcome to {name}!"))];
        if let Some(note) = content.room_note(building, RoomItem::Entrance) {
            pages.push(DialogPage::new(name, note));
        }
        pages
    }
}

fn object_page(room: BuildingId, item: RoomItem, content: &ContentLibrary) -> DialogPage {
    let body = content
        .room_note(room, item)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "You take a closer look at the {}.",
                item.display_name().to_lowercase()
            )
        });
    DialogPage::new(item.display_name(), body)
}

fn publication_page(index: usize, content: &ContentLibrary) -> DialogPage {
    match content.publication(index) {
        Some(publication) => DialogPage::new(
            "Publication",
            format!(
                "{}\n{}\n{} ({})",
                publication.title, publication.authors, publication.venue, publication.year
            ),
        ),
        None => DialogPage::new("Bookshelf", FALLBACK_PUBLICATION),
    }
}

fn talk_page(index: usize, content: &ContentLibrary) -> DialogPage {
    match content.talk(index) {
        Some(talk) => {
            let mut body = format!("{}\n{} ({})", talk.title, talk.venue, talk.date);
            if let Some(description) = &talk.description {
                body.push('\n');
                body.push_str(description);
            }
            DialogPage::new("Talk", body)
        }
        None => DialogPage::new("Lecture Theatre", FALLBACK_TALK),
    }
}

fn media_page(index: usize, content: &ContentLibrary) -> DialogPage {
    match content.media_item(index) {
        Some(item) => {
            let mut body = format!("{}\n{} at {}", item.title, item.kind.label(), item.venue);
            if let Some(description) = &item.description {
                body.push('\n');
                body.push_str(description);
            }
            body.push('\n');
            body.push_str(&item.date);
            DialogPage::new("Media & Talks", body)
        }
        None => DialogPage::new("Lecture Hall", FALLBACK_MEDIA),
    }
}

fn research_page(index: usize, content: &ContentLibrary) -> DialogPage {
    match content.research_topic(index) {
        Some(topic) => {
            let mut body = format!("{}\n{}", topic.name, topic.description);
            if !topic.tags.is_empty() {
                let tags: Vec<String> = topic.tags.iter().map(|tag| format!("[{tag}]")).collect();
                body.push('\n');
                body.push_str(&tags.join(" "));
            }
            DialogPage::new("Research Project", body)
        }
        None => DialogPage::new("Research Lab", FALLBACK_RESEARCH),
    }
}

fn panel_entries(section: ContentSection, content: &ContentLibrary) -> Vec<PanelEntry> {
    match section {
        ContentSection::Publications => content
            .publications()
            .iter()
            .map(|publication| PanelEntry {
                heading: publication.title.clone(),
                detail: format!(
                    "{} — {} ({})",
                    publication.authors, publication.venue, publication.year
                ),
            })
            .collect(),
        ContentSection::Talks => content
            .talks()
            .iter()
            .map(|talk| PanelEntry {
                heading: talk.title.clone(),
                detail: format!("{} — {}", talk.venue, talk.date),
            })
            .collect(),
        ContentSection::Media => content
            .media()
            .iter()
            .map(|item| PanelEntry {
                heading: item.title.clone(),
                detail: format!("{} at {} — {}", item.kind.label(), item.venue, item.date),
            })
            .collect(),
        ContentSection::Research => content
            .research()
            .iter()
            .map(|topic| PanelEntry {
                heading: topic.name.clone(),
                detail: topic.description.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_content() -> ContentLibrary {
        ContentLibrary::from_json_str(
            r#"{
                "publications": [
                    {"title": "P0", "authors": "A", "venue": "V", "year": 2023},
                    {"title": "P1", "authors": "B", "venue": "W", "year": 2024}
                ],
                "talks": [
                    {"title": "T0", "venue": "TV", "date": "2023-11-04"}
                ],
                "media": [
                    {"type": "podcast", "title": "M0", "venue": "BBC", "date": "June 2023"}
                ],
                "research": [
                    {"name": "R0", "description": "D0", "tags": ["ai", "ecology"]}
                ],
                "rooms": {
                    "office": {"desk": "A cluttered desk.", "entrance": "Welcome note."}
                }
            }"#,
        )
        .expect("content")
    }

    fn sign() -> Interaction {
        Interaction::Sign {
            text: "Welcome to Cambridge!".to_string(),
        }
    }

    #[test]
    fn sign_activation_opens_dialog_with_text() {
        let content = sample_content();
        let mut overlay = OverlayController::new();
        assert_eq!(overlay.activate(&sign(), &content), Activation::Dialog);
        match overlay.state() {
            OverlayState::Dialog { current, queue } => {
                assert_eq!(current.title, "Sign");
                assert_eq!(current.body, "Welcome to Cambridge!");
                assert!(queue.is_empty());
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn queued_pages_need_queue_len_plus_one_advances() {
        let mut overlay = OverlayController::new();
        overlay.open_dialog(vec![
            DialogPage::new("t", "page 0"),
            DialogPage::new("t", "page 1"),
            DialogPage::new("t", "page 2"),
        ]);

        // Two queued follow-ups: two advances keep it open, the third closes.
        overlay.advance_dialog();
        assert!(overlay.is_dialog_open());
        overlay.advance_dialog();
        assert!(overlay.is_dialog_open());
        overlay.advance_dialog();
        assert!(!overlay.is_open());
    }

    #[test]
    fn activation_is_rejected_while_dialog_open() {
        let content = sample_content();
        let mut overlay = OverlayController::new();
        overlay.activate(&sign(), &content);
        assert_eq!(overlay.activate(&sign(), &content), Activation::None);
    }

    #[test]
    fn cooldown_suppresses_immediate_reactivation() {
        let content = sample_content();
        let mut overlay = OverlayController::new();
        overlay.activate(&sign(), &content);
        overlay.advance_dialog();
        assert!(!overlay.is_open());

        assert_eq!(overlay.activate(&sign(), &content), Activation::None);
        overlay.tick(INTERACT_COOLDOWN_SECONDS + 0.05);
        assert_eq!(overlay.activate(&sign(), &content), Activation::Dialog);
    }

    #[test]
    fn door_and_exit_request_location_transitions() {
        let content = sample_content();
        let mut overlay = OverlayController::new();
        assert_eq!(
            overlay.activate(
                &Interaction::Door {
                    building: BuildingId::Lab
                },
                &content
            ),
            Activation::EnterBuilding(BuildingId::Lab)
        );
        assert!(!overlay.is_open());

        overlay.tick(1.0);
        assert_eq!(
            overlay.activate(&Interaction::Exit, &content),
            Activation::ExitBuilding
        );
    }

    #[test]
    fn publication_lookup_hit_and_fallback() {
        let content = sample_content();
        let hit = publication_page(1, &content);
        assert_eq!(hit.title, "Publication");
        assert!(hit.body.contains("P1"));
        assert!(hit.body.contains("W (2024)"));

        let miss = publication_page(7, &content);
        assert_eq!(miss.title, "Bookshelf");
        assert_eq!(miss.body, FALLBACK_PUBLICATION);
    }

    #[test]
    fn media_research_and_talk_lookups_fall_back_out_of_range() {
        let content = sample_content();
        assert!(media_page(0, &content).body.contains("PODCAST at BBC"));
        assert_eq!(media_page(3, &content).body, FALLBACK_MEDIA);
        assert!(research_page(0, &content).body.contains("[ai] [ecology]"));
        assert_eq!(research_page(9, &content).body, FALLBACK_RESEARCH);
        assert!(talk_page(0, &content).body.contains("TV"));
        assert_eq!(talk_page(1, &content).body, FALLBACK_TALK);
    }

    #[test]
    fn object_uses_room_note_with_generic_fallback() {
        let content = sample_content();
        let noted = object_page(BuildingId::Office, RoomItem::Desk, &content);
        assert_eq!(noted.body, "A cluttered desk.");

        let missing = object_page(BuildingId::Office, RoomItem::Plant, &content);
        assert!(missing.body.contains("plant"));
    }

    #[test]
    fn panel_focus_wraps_both_directions_and_close_restores_idle() {
        let content = sample_content();
        let mut overlay = OverlayController::new();
        assert_eq!(
            overlay.activate(
                &Interaction::Panel {
                    section: ContentSection::Publications
                },
                &content
            ),
            Activation::Panel
        );
        let focus = |overlay: &OverlayController| match overlay.state() {
            OverlayState::Panel { focus_index, .. } => *focus_index,
            other => panic!("unexpected state: {other:?}"),
        };

        assert_eq!(focus(&overlay), 0);
        overlay.focus_next();
        assert_eq!(focus(&overlay), 1);
        overlay.focus_next();
        assert_eq!(focus(&overlay), 0);
        overlay.focus_prev();
        assert_eq!(focus(&overlay), 1);

        overlay.close_panel();
        assert!(!overlay.is_open());
    }

    #[test]
    fn focus_is_a_no_op_on_an_empty_panel() {
        let empty = ContentLibrary::default();
        let mut overlay = OverlayController::new();
        overlay.open_panel(ContentSection::Talks, &empty);
        overlay.focus_next();
        overlay.focus_prev();
        match overlay.state() {
            OverlayState::Panel {
                entries,
                focus_index,
                ..
            } => {
                assert!(entries.is_empty());
                assert_eq!(*focus_index, 0);
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn visits_are_first_once_per_building() {
        let mut overlay = OverlayController::new();
        assert!(overlay.record_visit(BuildingId::Office));
        assert!(!overlay.record_visit(BuildingId::Office));
        assert!(overlay.record_visit(BuildingId::Library));
        assert!(overlay.has_visited(BuildingId::Office));
        assert!(!overlay.has_visited(BuildingId::Lab));
    }

    #[test]
    fn first_visit_welcome_includes_entrance_note_page() {
        let content = sample_content();
        let overlay = OverlayController::new();
        let first = overlay.welcome_pages(BuildingId::Office, "Sam's Office", true, &content);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].body, "Welcome to Sam's Office!");
        assert_eq!(first[1].body, "Welcome note.");

        let returning = overlay.welcome_pages(BuildingId::Office, "Sam's Office", false, &content);
        assert_eq!(returning.len(), 1);
        assert_eq!(returning[0].body, "Welcome back to Sam's Office!");
    }

    #[test]
    fn welcome_without_entrance_note_is_a_single_page() {
        let overlay = OverlayController::new();
        let pages =
            overlay.welcome_pages(BuildingId::Lab, "Research Lab", true, &ContentLibrary::default());
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn prompts_carry_kind_specific_verbs() {
        let enter = Prompt::for_interaction(
            &Interaction::Door {
                building: BuildingId::Library
            },
            Some("King's College Library"),
        );
        assert_eq!(enter.subject, "King's College Library");
        assert_eq!(enter.action, "Press ENTER to enter");

        let read = Prompt::for_interaction(&sign(), None);
        assert_eq!(read.subject, "Sign");
        assert_eq!(read.action, "Press ENTER to read");

        let exit = Prompt::for_interaction(&Interaction::Exit, None);
        assert_eq!(exit.subject, "Exit");
        assert_eq!(exit.action, "Press ENTER to exit");

        let shelf = Prompt::for_interaction(&Interaction::Publication { index: 0 }, None);
        assert_eq!(shelf.subject, "Bookshelf");
    }
}
