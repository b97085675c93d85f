use crate::domain::traits::XPostMatcher;
use crate::infrastructure::schema_validator::{validate_all_post_keys, validate_stream_document};
use crate::infrastructure::serde_json_adapter::StreamFileDto;
use anyhow::{anyhow, Result};
use serde_json::Value;

/// Checks that a stream is well-formed and already combined.
pub fn validate_stream(dto: &StreamFileDto, matcher: &dyn XPostMatcher) -> Result<()> {
    let stream_value = serde_json::to_value(dto)?;
    validate_stream_document(&stream_value)?;
    validate_all_post_keys(&stream_value)?;
    validate_combined(dto, matcher)
}

/// Same checks as [`validate_stream`], with the schemas applied to the
/// document exactly as read, before serde defaults smooth anything over.
pub fn validate_stream_json(raw: &Value, matcher: &dyn XPostMatcher) -> Result<()> {
    validate_stream_document(raw)?;
    validate_all_post_keys(raw)?;
    let dto: StreamFileDto = serde_json::from_value(raw.clone())?;
    validate_combined(&dto, matcher)
}

fn validate_combined(dto: &StreamFileDto, matcher: &dyn XPostMatcher) -> Result<()> {
    for (idx, pair) in dto.items.windows(2).enumerate() {
        if matcher.same_x_post(&pair[0], &pair[1]) {
            return Err(anyhow!(
                "adjacent x-posts not combined at items[{}] and items[{}]: {} / {}",
                idx,
                idx + 1,
                pair[0].label(),
                pair[1].label()
            ));
        }
    }

    Ok(())
}
