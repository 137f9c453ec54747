//! Shared fixtures for dycore integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use dycore::{AppResult, PageFetcher};
use std::sync::Mutex;

/// Gallery share page: three images (one under /obj/) plus a music cover
/// that is not on the signed CDN.
pub const GALLERY_PAGE: &str = r#"<!doctype html><html><head><title>抖音</title></head><body><script id="RENDER_DATA">window._ROUTER_DATA = {"loaderData":{"note_(id)/page":{"videoInfoRes":{"item_list":[{"aweme_id":"7309876543210987654","desc":"周末去看海","create_time":1704067200,"author":{"nickname":"海边的猫","signature":"慢慢走"},"images":[{"uri":"tos-cn-i-0813\u002FoAbC1","url_list":["https:\u002F\u002Fp3-sign.douyinpic.com\u002Ftos-cn-i-0813\u002FoAbC1~tplv-dy-aweme-images:q75.webp?x-expires=1706659200&x-signature=AAA","https:\u002F\u002Fp26-sign.douyinpic.com\u002Ftos-cn-i-0813\u002FoAbC1~tplv-dy-aweme-images:q75.jpeg?x-signature=BBB"],"width":1080,"height":1440},{"uri":"tos-cn-i-0813\u002FoDeF2","url_list":["https:\u002F\u002Fp9-sign.douyinpic.com\u002Fobj\u002Ftos-cn-i-0813\u002FoDeF2?x-signature=CCC"],"width":1080,"height":1440},{"uri":"tos-cn-i-0813\u002FoGhI3","url_list":["https:\u002F\u002Fp3-sign.douyinpic.com\u002Ftos-cn-i-0813\u002FoGhI3~tplv-dy-aweme-images:q75.webp?x-signature=DDD"],"width":1080,"height":1440}],"music":{"cover_hd":{"uri":"aweme-avatar\u002Fmusic_cover","url_list":["https:\u002F\u002Fp3.douyinpic.com\u002Faweme\u002F720x720\u002Fmusic_cover.jpeg"]}},"statistics":{"aweme_id":"7309876543210987654","comment_count":88,"digg_count":2048,"share_count":12,"collect_count":301},"status":{}}]}}}}</script></body></html>"#;

/// Video share page whose play-address token is `xyz123`.
pub const VIDEO_PAGE: &str = r#"<!doctype html><html><body><script id="RENDER_DATA">window._ROUTER_DATA = {"loaderData":{"video_(id)/page":{"videoInfoRes":{"item_list":[{"aweme_id":"7301234567890123456","desc":"今天的晚霞","create_time":1700000000,"author":{"nickname":"晚霞收集者","signature":"记录每一天的天空"},"video":{"play_addr":{"uri":"xyz123","url_list":["https:\u002F\u002Faweme.snssdk.com\u002Faweme\u002Fv1\u002Fplaywm\u002F?video_id=xyz123"]},"duration":15000},"statistics":{"aweme_id":"7301234567890123456","comment_count":1532,"digg_count":48211,"share_count":907,"collect_count":3120},"status":{}}]}}}}</script></body></html>"#;

/// Page of a removed post: play address and author, no statistics.
pub const NO_STATS_PAGE: &str = r#"<html><body><script>window._ROUTER_DATA = {"loaderData":{"video_(id)/page":{"videoInfoRes":{"item_list":[{"desc":"已删除","create_time":1700000000,"author":{"nickname":"someone","signature":"hi"},"video":{"play_addr":{"uri":"abc987","url_list":[]}}}]}}}}</script></body></html>"#;

pub const SHARE_TEXT: &str = "2.05 复制打开抖音，看看【海边的猫的图文作品】周末去看海 https://v.douyin.com/iRNBho6u/ Kxq:/ 09/21";

/// Serves one canned body and records every requested URL.
pub struct StaticPageFetcher {
    body: String,
    requests: Mutex<Vec<String>>,
}

impl StaticPageFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticPageFetcher {
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(self.body.clone())
    }
}
