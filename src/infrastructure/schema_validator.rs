use anyhow::{anyhow, Result};
use jsonschema::{Draft, JSONSchema};
use once_cell::sync::Lazy;
use serde_json::Value;

static STREAM_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/stream_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid stream schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile stream schema")
});

static POST_KEY_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| {
    let schema_content = include_str!("../schemas/post_key_schema.json");
    let schema: Value = serde_json::from_str(schema_content).expect("Invalid post key schema");
    JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .expect("Failed to compile post key schema")
});

/// Validate the stream document envelope.
pub fn validate_stream_document(stream: &Value) -> Result<()> {
    match STREAM_SCHEMA.validate(stream) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Stream document validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate a single post key.
pub fn validate_post_key(post_key: &Value) -> Result<()> {
    match POST_KEY_SCHEMA.validate(post_key) {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_list: Vec<String> = errors.map(|e| e.to_string()).collect();
            Err(anyhow!(
                "Post key validation failed:\n{}",
                error_list.join("\n")
            ))
        }
    }
}

/// Validate every item of the document's `items` array, reporting the index.
pub fn validate_all_post_keys(stream: &Value) -> Result<()> {
    let Some(items) = stream.get("items").and_then(|v| v.as_array()) else {
        return Ok(());
    };

    for (idx, item) in items.iter().enumerate() {
        validate_post_key(item).map_err(|e| anyhow!("items[{idx}]: {e}"))?;
    }

    Ok(())
}
