//! Wire types for the sequential thinking endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sequential thinking request.
///
/// Every field is optional on the wire; missing fields take the defaults
/// below. No further validation happens here — an out-of-range
/// `thought_number` is handled by the dispatcher's fallback.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThinkingRequest {
    /// Free-text content of the current thought.
    pub thought: String,
    /// Accepted for wire compatibility; the continuation flag in the
    /// response is derived from the step counters, not from this field.
    pub next_thought_needed: bool,
    /// Current step number, 1-based.
    pub thought_number: i64,
    /// Expected length of the thinking sequence.
    pub total_thoughts: i64,
    /// Opaque caller-supplied context, carried but not interpreted.
    pub context: serde_json::Map<String, serde_json::Value>,
    /// The end user's message, preferred over `thought` for screening.
    pub user_message: String,
}

impl Default for ThinkingRequest {
    fn default() -> Self {
        Self {
            thought: String::new(),
            next_thought_needed: true,
            thought_number: 1,
            total_thoughts: 3,
            context: serde_json::Map::new(),
            user_message: String::new(),
        }
    }
}

/// Response envelope for a processed thought.
#[derive(Debug, Clone, Serialize)]
pub struct ThinkingResponse {
    pub success: bool,
    pub thought_number: i64,
    pub total_thoughts: i64,
    /// Whether the caller is expected to send another step.
    pub next_thought_needed: bool,
    /// The generated analysis text for this step.
    pub analysis: String,
    /// Human-readable label for this step, e.g. `Step 1: Safety Assessment
    /// & Crisis Screening`.
    pub reasoning_step: String,
    /// Wall-clock instant the response was built (RFC 3339).
    pub timestamp: DateTime<Utc>,
}

/// Error envelope returned when analysis generation fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    pub error: String,
    /// The step number from the failing request, defaulting to 1.
    pub thought_number: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_takes_all_defaults() {
        let request: ThinkingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.thought, "");
        assert!(request.next_thought_needed);
        assert_eq!(request.thought_number, 1);
        assert_eq!(request.total_thoughts, 3);
        assert!(request.context.is_empty());
        assert_eq!(request.user_message, "");
    }

    #[test]
    fn partial_body_keeps_remaining_defaults() {
        let request: ThinkingRequest =
            serde_json::from_str(r#"{"thought_number": 2, "thought": "hi"}"#).unwrap();
        assert_eq!(request.thought_number, 2);
        assert_eq!(request.thought, "hi");
        assert_eq!(request.total_thoughts, 3);
    }

    #[test]
    fn context_accepts_arbitrary_json_object() {
        let request: ThinkingRequest =
            serde_json::from_str(r#"{"context": {"loss_type": "parent", "weeks": 6}}"#).unwrap();
        assert_eq!(request.context.len(), 2);
    }

    #[test]
    fn response_timestamp_serializes_as_rfc3339() {
        let response = ThinkingResponse {
            success: true,
            thought_number: 1,
            total_thoughts: 3,
            next_thought_needed: true,
            analysis: "a".into(),
            reasoning_step: "s".into(),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let ts = value["timestamp"].as_str().unwrap();
        assert!(ts.contains('T'), "expected ISO-8601 timestamp, got {ts}");
    }
}
