use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CombineStats {
    pub items_seen: usize,
    pub items_emitted: usize,
    pub x_posts_folded: usize,
    pub duplicate_urls_missing: usize,
}
