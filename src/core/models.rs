use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use url::Url;

/// Shown when neither a file name nor a usable path segment is available.
pub const UNTITLED_PHOTO: &str = "Untitled photo";

/// One photo reference plus optional capture metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub image_url: Url,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub taken_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl MediaItem {
    #[must_use]
    pub fn new(image_url: Url) -> Self {
        Self {
            image_url,
            file_name: None,
            taken_at: None,
            location: None,
        }
    }

    /// Name used to introduce the photo to the model.
    ///
    /// Prefers the caller-supplied file name, then the last path segment of the URL.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.file_name.as_deref().map(str::trim)
            && !name.is_empty()
        {
            return name.to_string();
        }

        self.image_url
            .path_segments()
            .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNTITLED_PHOTO.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateSummaryRequest {
    pub media_items: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
    pub prompts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    #[must_use]
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }
}
