//! dycore - metadata scraper for Douyin share links
//!
//! Resolves a `v.douyin.com` short link found in arbitrary text, fetches the
//! mobile page it redirects to, and pattern-matches the embedded JSON
//! fragments into a [`VideoRecord`].
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging and small helpers
//! - `extract`: pure text scanners (short link, play token, statistics, images)
//! - `fetch`: the `PageFetcher` seam and its reqwest implementation
//! - `douyin`: `DouyinClient`, the fetch-then-scan pipeline

// Static regexes are compiled from literals; their `expect` cannot fire at runtime.
#![allow(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod core;
pub mod douyin;
pub mod extract;
pub mod fetch;

// Re-export commonly used types for convenience
pub use crate::core::error::{AppError, AppResult};
pub use crate::core::utils::format_epoch_seconds;
pub use douyin::{assemble_record, DouyinClient};
pub use extract::{extract_douyin_url, parse_image_list, ContentType, VideoRecord};
pub use fetch::{HttpPageFetcher, PageFetcher};
