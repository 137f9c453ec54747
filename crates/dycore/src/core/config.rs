use once_cell::sync::Lazy;
use std::env;

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: dyinfo.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "dyinfo.log".to_string()));

/// Log verbosity
/// Read from LOG_LEVEL environment variable (off, error, warn, info, debug, trace)
/// Default: info
pub static LOG_LEVEL: Lazy<log::LevelFilter> = Lazy::new(|| parse_level(env::var("LOG_LEVEL").ok().as_deref()));

fn parse_level(raw: Option<&str>) -> log::LevelFilter {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}

/// Outbound proxy configuration
pub mod proxy {
    use super::{env, Lazy};

    /// Proxy for page fetches (http://, https:// or socks5:// URL)
    /// Read from DOUYIN_PROXY environment variable
    /// Empty, "none" and "disabled" all mean a direct connection
    pub static DOUYIN_PROXY: Lazy<Option<String>> = Lazy::new(|| env::var("DOUYIN_PROXY").ok());

    /// Returns the usable proxy URL, or None when the value switches proxying off.
    pub fn normalize(raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("disabled") {
            None
        } else {
            Some(trimmed)
        }
    }
}

/// Fixed values the Douyin endpoints depend on
pub mod douyin {
    /// Mobile Samsung browser signature. The share page only embeds the
    /// JSON fragments we scan for when it sees this exact string.
    pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 11; SAMSUNG SM-G973U) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/14.2 Chrome/87.0.4280.141 Mobile Safari/537.36";

    /// Direct play endpoint; `%s` is replaced by the play-address token
    pub const PLAY_URL_TEMPLATE: &str = "https://www.iesdouyin.com/aweme/v1/play/?video_id=%s&ratio=1080p&line=0";

    /// Build the direct play URL for a play-address token
    pub fn play_url(token: &str) -> String {
        PLAY_URL_TEMPLATE.replacen("%s", token, 1)
    }
}
