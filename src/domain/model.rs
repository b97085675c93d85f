use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Where a cross-post originally lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XPostOrigin {
    #[serde(rename = "blogId", default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,

    #[serde(rename = "postId", default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,

    #[serde(rename = "commentURL", default, skip_serializing_if = "Option::is_none")]
    pub comment_url: Option<String>,

    #[serde(rename = "postURL", default, skip_serializing_if = "Option::is_none")]
    pub post_url: Option<String>,
}

/// One observed entry of a reader stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostKey {
    #[serde(rename = "blogId", default, skip_serializing_if = "Option::is_none")]
    pub blog_id: Option<u64>,

    #[serde(rename = "postId", default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<u64>,

    #[serde(rename = "feedId", default, skip_serializing_if = "Option::is_none")]
    pub feed_id: Option<u64>,

    #[serde(rename = "feedItemId", default, skip_serializing_if = "Option::is_none")]
    pub feed_item_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// URLs of folded duplicates, in observation order. Empty means absent.
    #[serde(
        rename = "xPostUrls",
        default,
        deserialize_with = "x_post_urls_or_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub x_post_urls: Vec<String>,

    #[serde(rename = "xPostMetadata", default, skip_serializing_if = "Option::is_none")]
    pub x_post_metadata: Option<XPostOrigin>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Anything but an array (`null` included) reads as "no x-post urls yet".
/// Non-string entries are dropped.
fn x_post_urls_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl PostKey {
    /// Returns a copy of `self` with `duplicate`'s url appended to `x_post_urls`.
    ///
    /// A duplicate without a url contributes nothing; the list never holds
    /// placeholders.
    pub fn with_duplicate_url(&self, duplicate: &PostKey) -> PostKey {
        let mut x_post_urls = Vec::with_capacity(self.x_post_urls.len() + 1);
        x_post_urls.extend(self.x_post_urls.iter().cloned());
        if let Some(url) = duplicate.url.as_ref() {
            x_post_urls.push(url.clone());
        }
        PostKey {
            x_post_urls,
            ..self.clone()
        }
    }

    /// Short human label used in events and error messages.
    pub fn label(&self) -> String {
        if let Some(url) = self.url.as_deref() {
            return url.to_string();
        }
        match (self.blog_id, self.feed_id, self.post_id, self.feed_item_id) {
            (Some(blog), _, Some(post), _) => format!("blog:{blog}/post:{post}"),
            (_, Some(feed), _, Some(item)) => format!("feed:{feed}/item:{item}"),
            _ => "<unidentified>".to_string(),
        }
    }
}
