//! Player data structure.

use serde::{Deserialize, Serialize};

/// Image shown for players registered without one.
pub const DEFAULT_IMAGE_URL: &str = "/static/fifa-logo.svg";

/// A league participant. The trimmed `name` is the identity key; matches
/// embed a copy of the full record, so editing the roster after fixture
/// generation does not propagate into existing matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "imageUrl", default = "default_image_url")]
    pub image_url: String,
}

fn default_image_url() -> String {
    DEFAULT_IMAGE_URL.to_string()
}

impl Player {
    /// Create a player. A missing or blank image URL falls back to the placeholder.
    pub fn new(name: impl Into<String>, image_url: Option<String>) -> Self {
        let image_url = image_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(default_image_url);
        Self {
            name: name.into(),
            image_url,
        }
    }
}
