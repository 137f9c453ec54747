//! Signed image URLs for image-gallery ("图文") posts
//!
//! A gallery page lists every image as `{"uri":"<id>","url_list":["<url>", ...]}`,
//! usually several times over (preview blobs, share cards, the router data).
//! The first signed CDN URL seen for each distinct `uri` is kept.

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// First signed-CDN entry of a `url_list`, captured up to its closing quote
static SIGNED_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\{"uri":"[^\s"]+","url_list":\["(https://p\d{1,2}-sign\.douyinpic\.com/.*?)""#)
        .expect("signed image url regex")
});

/// Every `uri` that owns a `url_list`
static IMAGE_URI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""uri":"([^\s"]+)","url_list":"#).expect("image uri regex"));

/// Low-resolution/internal variants, not meant for end use
const EXCLUDED_PATH_MARKER: &str = "/obj/";

/// Undo the JSON slash escaping used inside `<script>` payloads.
fn normalize_slashes(body: &str) -> String {
    body.replace(r"\u002F", "/").replace(r"\/", "/")
}

/// Extract the gallery's image URLs.
///
/// Order follows the first appearance of each image `uri`. Identifiers with no
/// signed URL are skipped, as is any URL under `/obj/`.
pub fn parse_image_list(body: &str) -> Vec<String> {
    let content = normalize_slashes(body);

    let signed_urls: Vec<&str> = SIGNED_URL_REGEX
        .captures_iter(&content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();

    let images: Vec<String> = IMAGE_URI_REGEX
        .captures_iter(&content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unique()
        .filter_map(|uri| signed_urls.iter().find(|url| url.contains(uri)))
        .filter(|url| !url.contains(EXCLUDED_PATH_MARKER))
        .map(|url| url.to_string())
        .collect();

    log::debug!(
        "Image list: {} signed url(s) on page, {} kept",
        signed_urls.len(),
        images.len()
    );

    images
}
