use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// What kind of post a share link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ContentType {
    Video,
    ImageGallery,
}

/// Metadata scraped from one share page.
///
/// Built once per call and never mutated. Optional fields are `None` when
/// their pattern did not match; that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    /// Platform id (`aweme_id`) from the statistics block
    pub id: Option<String>,
    pub comment_count: Option<u64>,
    /// `digg_count` on the page
    pub like_count: Option<u64>,
    pub share_count: Option<u64>,
    pub collect_count: Option<u64>,
    pub author_nickname: Option<String>,
    pub author_signature: Option<String>,
    pub description: Option<String>,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    pub created_at: Option<String>,
    /// Direct play URL; empty for galleries
    pub video_url: String,
    pub content_type: ContentType,
    /// Signed image URLs; empty for videos
    pub image_urls: Vec<String>,
}

impl VideoRecord {
    pub fn is_video(&self) -> bool {
        self.content_type == ContentType::Video
    }
}
