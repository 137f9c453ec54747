use once_cell::sync::Lazy;
use regex::Regex;

/// `"video":{"play_addr":{"uri":"<token>"`, only present on video pages
static PLAY_ADDR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""video":\{"play_addr":\{"uri":"([a-z0-9]+)""#).expect("play_addr regex"));

/// Play-address token of the first video on the page, if any.
///
/// Image galleries have no play address, so `None` doubles as the
/// content-type signal.
pub fn find_play_token(body: &str) -> Option<&str> {
    PLAY_ADDR_REGEX
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
