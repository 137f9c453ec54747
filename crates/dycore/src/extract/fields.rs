//! Engagement counters, author, creation time and description
//!
//! The statistics block is the only scoped scan: its counters are searched
//! inside the captured block so that counters belonging to related videos
//! elsewhere on the page are never picked up. The remaining fields are
//! independent best-effort matches over the whole page.

use once_cell::sync::Lazy;
use regex::Regex;

/// Non-greedy `"statistics":{ ... },` block
static STATISTICS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""statistics"\s*:\s*\{([\s\S]*?)\},"#).expect("statistics regex"));

static AWEME_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""aweme_id"\s*:\s*"([^"]+)""#).expect("aweme_id regex"));
static COMMENT_COUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""comment_count"\s*:\s*(\d+)"#).expect("comment_count regex"));
static DIGG_COUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""digg_count"\s*:\s*(\d+)"#).expect("digg_count regex"));
static SHARE_COUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""share_count"\s*:\s*(\d+)"#).expect("share_count regex"));
static COLLECT_COUNT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""collect_count"\s*:\s*(\d+)"#).expect("collect_count regex"));

/// Nickname immediately followed by signature; one without the other is ignored
static AUTHOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""nickname":\s*"([^"]+)",\s*"signature":\s*"([^"]+)""#).expect("author regex")
});
static CREATE_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""create_time":\s*(\d+)"#).expect("create_time regex"));
static DESC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#""desc":\s*"([^"]+)""#).expect("desc regex"));

/// Counters found in the statistics block. Each one is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub aweme_id: Option<String>,
    pub comment_count: Option<u64>,
    pub digg_count: Option<u64>,
    pub share_count: Option<u64>,
    pub collect_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub nickname: String,
    pub signature: String,
}

fn capture<'t>(regex: &Regex, haystack: &'t str) -> Option<&'t str> {
    regex.captures(haystack).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// Digits that overflow `u64` are treated like a missing counter.
fn capture_count(regex: &Regex, haystack: &str) -> Option<u64> {
    capture(regex, haystack).and_then(|digits| digits.parse().ok())
}

/// Locate the statistics block and read its counters.
///
/// `None` means the block itself is missing; a block without any of the known
/// counters still yields `Some(Statistics::default())`.
pub fn parse_statistics(body: &str) -> Option<Statistics> {
    // The whole match, prefix included, is what the counters are searched in.
    let block = STATISTICS_REGEX.find(body)?.as_str();

    Some(Statistics {
        aweme_id: capture(&AWEME_ID_REGEX, block).map(str::to_string),
        comment_count: capture_count(&COMMENT_COUNT_REGEX, block),
        digg_count: capture_count(&DIGG_COUNT_REGEX, block),
        share_count: capture_count(&SHARE_COUNT_REGEX, block),
        collect_count: capture_count(&COLLECT_COUNT_REGEX, block),
    })
}

pub fn parse_author(body: &str) -> Option<Author> {
    let caps = AUTHOR_REGEX.captures(body)?;
    Some(Author {
        nickname: caps.get(1)?.as_str().to_string(),
        signature: caps.get(2)?.as_str().to_string(),
    })
}

/// Creation time as epoch seconds
pub fn parse_create_time(body: &str) -> Option<i64> {
    capture(&CREATE_TIME_REGEX, body).and_then(|digits| digits.parse().ok())
}

pub fn parse_description(body: &str) -> Option<&str> {
    capture(&DESC_REGEX, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STATS_PAGE: &str = r#"{"statistics":{"admire_count":0,"comment_count":1532,"digg_count":48211,"collect_count":3120,"play_count":0,"share_count":907,"aweme_id":"7301234567890123456"},"status":{}}"#;

    #[test]
    fn test_parse_statistics_all_fields() {
        let stats = parse_statistics(STATS_PAGE).unwrap();
        assert_eq!(
            stats,
            Statistics {
                aweme_id: Some("7301234567890123456".to_string()),
                comment_count: Some(1532),
                digg_count: Some(48211),
                share_count: Some(907),
                collect_count: Some(3120),
            }
        );
    }

    #[test]
    fn test_parse_statistics_with_whitespace() {
        let body = "\"statistics\" : {\n  \"comment_count\" : 3,\n  \"digg_count\": 4\n},";
        let stats = parse_statistics(body).unwrap();
        assert_eq!(stats.comment_count, Some(3));
        assert_eq!(stats.digg_count, Some(4));
        assert_eq!(stats.share_count, None);
        assert_eq!(stats.aweme_id, None);
    }

    #[test]
    fn test_parse_statistics_is_scoped_to_block() {
        // share_count only appears after the block closes
        let body = r#""statistics":{"comment_count":1,"digg_count":2},"related":{"share_count":99}"#;
        let stats = parse_statistics(body).unwrap();
        assert_eq!(stats.comment_count, Some(1));
        assert_eq!(stats.share_count, None);
    }

    #[test]
    fn test_parse_statistics_empty_block() {
        let stats = parse_statistics(r#""statistics":{},"x":1"#).unwrap();
        assert_eq!(stats, Statistics::default());
    }

    #[test]
    fn test_parse_statistics_missing_block() {
        assert_eq!(parse_statistics(r#"{"comment_count":1,"digg_count":2}"#), None);
        // Block without the trailing comma does not count
        assert_eq!(parse_statistics(r#"{"statistics":{"comment_count":1}}"#), None);
    }

    #[test]
    fn test_parse_statistics_overflow_is_none() {
        let body = r#""statistics":{"comment_count":99999999999999999999999,"digg_count":5},"#;
        let stats = parse_statistics(body).unwrap();
        assert_eq!(stats.comment_count, None);
        assert_eq!(stats.digg_count, Some(5));
    }

    #[test]
    fn test_parse_author() {
        let body = r#"{"author":{"uid":"1","nickname":"晚霞收集者","signature":"记录每一天的天空"}}"#;
        assert_eq!(
            parse_author(body),
            Some(Author {
                nickname: "晚霞收集者".to_string(),
                signature: "记录每一天的天空".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_author_requires_both() {
        assert_eq!(parse_author(r#""nickname":"solo","uid":"1""#), None);
        assert_eq!(parse_author(r#""nickname":"a","signature":"""#), None);
    }

    #[test]
    fn test_parse_create_time() {
        assert_eq!(parse_create_time(r#""create_time": 1700000000,"#), Some(1_700_000_000));
        assert_eq!(parse_create_time(r#""create_time":"1700000000""#), None);
    }

    #[test]
    fn test_parse_description() {
        assert_eq!(parse_description(r#""desc":"今天的晚霞 #日落","#), Some("今天的晚霞 #日落"));
        assert_eq!(parse_description(r#""desc":"""#), None);
    }
}
