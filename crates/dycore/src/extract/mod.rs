//! Pure text scanners over raw share-page HTML
//!
//! Every scanner is a regex over the unparsed page text: the embedded JSON is
//! not guaranteed to be well-formed inside the surrounding markup, so nothing
//! here attempts a real parse.

pub mod fields;
pub mod images;
pub mod link;
pub mod record;
pub mod video;

pub use fields::{parse_author, parse_create_time, parse_description, parse_statistics, Author, Statistics};
pub use images::parse_image_list;
pub use link::extract_douyin_url;
pub use record::{ContentType, VideoRecord};
pub use video::find_play_token;
