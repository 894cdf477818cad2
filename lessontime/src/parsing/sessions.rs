use anyhow::{Context, Result};
use std::path::Path;

use crate::models::SessionRecord;

/// Envelope shape some endpoints use instead of a bare array
#[derive(Debug, serde::Deserialize)]
struct SessionsEnvelope {
    sessions: Vec<serde_json::Value>,
}

/// Parse a sessions JSON file into SessionRecord structures
pub fn parse_sessions_json(json_path: &Path) -> Result<Vec<SessionRecord>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read sessions file: {}", json_path.display()))?;

    parse_sessions_json_str(&json_content)
}

/// Parse sessions JSON from a string.
///
/// Accepts either a bare top-level array of session records or an envelope
/// object carrying them under a `sessions` key. On a record that fails to
/// deserialize, the error names the index of the first bad record rather
/// than a bare serde message.
pub fn parse_sessions_json_str(json_str: &str) -> Result<Vec<SessionRecord>> {
    // First validate that it's valid JSON
    let json_value: serde_json::Value = serde_json::from_str(json_str).with_context(|| {
        let preview = if json_str.len() > 500 {
            format!("{}...", &json_str[..500])
        } else {
            json_str.to_string()
        };
        format!("Invalid JSON syntax. First 500 chars: {}", preview)
    })?;

    let raw_records = if json_value.is_array() {
        json_value
            .as_array()
            .cloned()
            .unwrap_or_default()
    } else {
        let envelope: SessionsEnvelope =
            serde_json::from_value(json_value.clone()).map_err(|_| {
                anyhow::anyhow!(
                    "Sessions JSON must be an array or an object with a 'sessions' key. Found keys: {:?}",
                    json_value.as_object().map(|o| o.keys().collect::<Vec<_>>())
                )
            })?;
        envelope.sessions
    };

    let mut sessions = Vec::with_capacity(raw_records.len());
    for (idx, raw) in raw_records.into_iter().enumerate() {
        let record: SessionRecord = serde_json::from_value(raw.clone()).with_context(|| {
            format!(
                "Error in session record at index {}: {}",
                idx,
                serde_json::to_string(&raw).unwrap_or_else(|_| "cannot display".to_string())
            )
        })?;

        sessions.push(record);
    }

    Ok(sessions)
}
