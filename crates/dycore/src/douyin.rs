//! DouyinClient: share text in, `VideoRecord` out.
//!
//! Pipeline per call: find the short link, fetch the page once, then scan it.
//! The client holds nothing but its fetcher, so independent calls can run
//! concurrently against one instance.

use crate::core::config::douyin::play_url;
use crate::core::error::{AppError, AppResult};
use crate::core::utils::format_epoch_seconds;
use crate::extract::{
    extract_douyin_url, find_play_token, parse_author, parse_create_time, parse_description, parse_image_list,
    parse_statistics, ContentType, VideoRecord,
};
use crate::fetch::{HttpPageFetcher, PageFetcher};

/// Scan an already-fetched share page into a record.
///
/// Fails with [`AppError::StatsNotFound`] when the page has no statistics
/// block; every other field is optional.
pub fn assemble_record(body: &str) -> AppResult<VideoRecord> {
    let (content_type, video_url, image_urls) = match find_play_token(body) {
        Some(token) => (ContentType::Video, play_url(token), Vec::new()),
        None => (ContentType::ImageGallery, String::new(), parse_image_list(body)),
    };

    let stats = parse_statistics(body).ok_or(AppError::StatsNotFound)?;

    let (author_nickname, author_signature) = match parse_author(body) {
        Some(author) => (Some(author.nickname), Some(author.signature)),
        None => (None, None),
    };

    let created_at = parse_create_time(body).and_then(format_epoch_seconds);
    let description = parse_description(body).map(str::to_string);

    Ok(VideoRecord {
        id: stats.aweme_id,
        comment_count: stats.comment_count,
        like_count: stats.digg_count,
        share_count: stats.share_count,
        collect_count: stats.collect_count,
        author_nickname,
        author_signature,
        description,
        created_at,
        video_url,
        content_type,
        image_urls,
    })
}

/// Entry point for resolving share links.
pub struct DouyinClient<F = HttpPageFetcher> {
    fetcher: F,
}

impl DouyinClient {
    /// Client backed by reqwest, honouring `DOUYIN_PROXY`.
    pub fn new() -> AppResult<Self> {
        Ok(Self::with_fetcher(HttpPageFetcher::new()?))
    }
}

impl<F: PageFetcher> DouyinClient<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Link extraction happens before any network access.
    async fn fetch_linked_page(&self, text: &str) -> AppResult<String> {
        let url = extract_douyin_url(text).ok_or(AppError::LinkNotFound)?;
        self.fetcher.fetch_text(url).await
    }

    /// Full metadata for the first short link in `text`.
    pub async fn get_video_info(&self, text: &str) -> AppResult<VideoRecord> {
        let body = self.fetch_linked_page(text).await?;
        let record = assemble_record(&body)?;

        log::info!(
            "Scraped {} id={} images={}",
            record.content_type,
            record.id.as_deref().unwrap_or("-"),
            record.image_urls.len()
        );
        Ok(record)
    }

    /// Play-address token of the linked video.
    ///
    /// Gallery posts have no play address and fail with
    /// [`AppError::VideoIdNotFound`].
    pub async fn get_video_id(&self, text: &str) -> AppResult<String> {
        let body = self.fetch_linked_page(text).await?;
        find_play_token(&body)
            .map(str::to_string)
            .ok_or(AppError::VideoIdNotFound)
    }

    /// Direct play URL of the linked video.
    pub async fn get_video_url(&self, text: &str) -> AppResult<String> {
        let id = self.get_video_id(text).await?;
        Ok(play_url(&id))
    }
}
