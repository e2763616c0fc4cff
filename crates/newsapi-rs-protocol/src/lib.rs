//! Wire protocol types shared between the News API extension and its host.

mod media;
mod tool;

pub use media::Media;
pub use tool::ToolError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for a host session.
pub type SessionId = Uuid;
/// Unique identifier for a tool call.
pub type ToolCallId = Uuid;

/// Wrapper for events emitted towards the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMsg {
    /// Unique id for the event.
    pub id: Uuid,
    /// Session id associated with the event.
    pub session_id: SessionId,
    /// Timestamp when the event was created.
    pub created_at: DateTime<Utc>,
    /// Event payload content.
    pub payload: EventPayload,
}

impl EventMsg {
    /// Stamp a payload with a fresh id and the current time.
    pub fn new(session_id: SessionId, payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            created_at: Utc::now(),
            payload,
        }
    }
}

/// All events an extension can emit while a function runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "payload")]
pub enum EventPayload {
    /// Function call execution started.
    ToolCallStarted {
        tool_call_id: ToolCallId,
        tool_name: String,
        arguments: Value,
    },
    /// Media attachments to deliver to the end user.
    MediasSent {
        tool_call_id: Option<ToolCallId>,
        medias: Vec<Media>,
    },
    /// Function call execution completed.
    ToolCallFinished {
        tool_call_id: ToolCallId,
        result: Value,
        success: bool,
    },
}

/// Sink interface for extension events; implemented by the host transport.
pub trait EventSink: Send + Sync {
    /// Emit an event to downstream listeners.
    fn emit(&self, event: EventMsg);
}
