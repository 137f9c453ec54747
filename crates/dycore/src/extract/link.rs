//! Short-link detection in free-form share text
//!
//! Douyin's "share" button produces prose such as
//! `7.94 复制打开抖音，看看【作者的作品】 https://v.douyin.com/iRNBho6u/ Kxq:/ 09/21`.
//! Only the `https://v.douyin.com/<token>/` part is useful.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `https://v.douyin.com/<alphanumeric token>` with an optional trailing slash
static SHORT_LINK_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://v\.douyin\.com/[a-zA-Z0-9]+/?").expect("short link regex"));

/// Find the first Douyin short link in `text`.
///
/// # Examples
///
/// ```
/// use dycore::extract_douyin_url;
///
/// let text = "看看这个 https://v.douyin.com/iRNBho6u/ 复制此链接";
/// assert_eq!(extract_douyin_url(text), Some("https://v.douyin.com/iRNBho6u/"));
/// assert_eq!(extract_douyin_url("no link here"), None);
/// ```
pub fn extract_douyin_url(text: &str) -> Option<&str> {
    SHORT_LINK_REGEX.find(text).map(|m| m.as_str())
}
