/// Fallback copy of the content document, baked in so the game still runs
/// when no `content/content.json` can be found next to the binary.
pub const DEFAULT_CONTENT_JSON: &str = include_str!("../../../../content/content.json");
