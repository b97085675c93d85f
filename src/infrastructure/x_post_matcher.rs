use crate::domain::model::PostKey;
use crate::domain::traits::XPostMatcher;

/// Matches records whose `xPostMetadata` points at the same original post.
pub struct OriginXPostMatcher;

impl XPostMatcher for OriginXPostMatcher {
    fn same_x_post(&self, previous: &PostKey, current: &PostKey) -> bool {
        let (Some(a), Some(b)) = (
            previous.x_post_metadata.as_ref(),
            current.x_post_metadata.as_ref(),
        ) else {
            return false;
        };

        // Both ids must be known; two half-empty origins are not the same post.
        match (a.blog_id, a.post_id, b.blog_id, b.post_id) {
            (Some(ab), Some(ap), Some(bb), Some(bp)) => ab == bb && ap == bp,
            _ => false,
        }
    }
}
