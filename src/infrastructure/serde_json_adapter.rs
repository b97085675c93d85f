use crate::domain::model::PostKey;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreamFileDto {
    #[serde(rename = "streamKey", default, skip_serializing_if = "Option::is_none")]
    pub stream_key: Option<String>,

    #[serde(default)]
    pub items: Vec<PostKey>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

pub async fn read_stream_file(path: &str) -> Result<StreamFileDto> {
    let raw = fs::read_to_string(path).await?;
    let dto: StreamFileDto = serde_json::from_str(&raw)?;
    Ok(dto)
}

/// The document as written on disk, for schema checks that must see it raw.
pub async fn read_stream_value(path: &str) -> Result<Value> {
    let raw = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// A page may be a bare array of post keys or a full stream document.
pub async fn read_page_file(path: &str) -> Result<Vec<PostKey>> {
    let raw = fs::read_to_string(path).await?;
    let value: Value = serde_json::from_str(&raw)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }
    let dto: StreamFileDto = serde_json::from_value(value)?;
    Ok(dto.items)
}

pub async fn write_stream_file(path: &str, dto: &StreamFileDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(dto)?;
    fs::write(path, pretty).await?;
    Ok(())
}
