//! Tool execution context and host event helpers.

use crate::Tool;
use crate::news::NewsProvider;
use log::debug;
use newsapi_rs_config::NewsApiSettings;
use newsapi_rs_protocol::{
    EventMsg, EventPayload, EventSink, Media, SessionId, ToolCallId, ToolError,
};
use serde_json::Value;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Host-provided services shared by every call in a session.
pub struct ToolServices {
    /// Parameter values resolved by the host for this session.
    pub settings: NewsApiSettings,
    /// Provider used by news functions.
    pub news: Option<Arc<dyn NewsProvider>>,
    /// Delivery channel for media and lifecycle events.
    pub event_sink: Option<Arc<dyn EventSink>>,
}

/// Shared context passed to functions during execution.
///
/// Per-invocation identity fields are stored directly; services sit behind
/// an `Arc` so cloning per call is a reference-count bump.
#[derive(Clone)]
pub struct ToolContext {
    /// Session id associated with the call.
    pub session_id: SessionId,
    /// Tool call id for this invocation.
    pub tool_call_id: Option<ToolCallId>,
    /// Function name for the current invocation.
    pub tool_name: Option<String>,
    /// Shared session services.
    pub services: Arc<ToolServices>,
}

impl ToolContext {
    /// Build a context for a new session.
    pub fn new(services: ToolServices) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            tool_call_id: None,
            tool_name: None,
            services: Arc::new(services),
        }
    }

    fn emit(&self, payload: EventPayload) -> bool {
        let Some(sink) = self.services.event_sink.as_ref() else {
            return false;
        };
        sink.emit(EventMsg::new(self.session_id, payload));
        true
    }

    /// Deliver media attachments to the end user.
    ///
    /// An empty set is not emitted.
    pub fn send_medias(&self, medias: Vec<Media>) {
        if medias.is_empty() {
            return;
        }
        let count = medias.len();
        let delivered = self.emit(EventPayload::MediasSent {
            tool_call_id: self.tool_call_id,
            medias,
        });
        debug!(
            "sending medias (session_id={}, count={}, delivered={})",
            self.session_id, count, delivered
        );
    }

    /// Emit a tool-call started event and return the tool call id.
    pub fn emit_tool_started(&self, name: &str, args: &Value) -> ToolCallId {
        let tool_call_id = Uuid::new_v4();
        self.emit(EventPayload::ToolCallStarted {
            tool_call_id,
            tool_name: name.to_string(),
            arguments: args.clone(),
        });
        tool_call_id
    }

    /// Emit a tool-call finished event.
    pub fn emit_tool_finished(&self, tool_call_id: ToolCallId, result: Value, success: bool) {
        self.emit(EventPayload::ToolCallFinished {
            tool_call_id,
            result,
            success,
        });
    }

    /// Execute a function with the full event pipeline.
    pub async fn execute_tool(&mut self, tool: &dyn Tool, args: Value) -> Result<Value, ToolError> {
        self.tool_name = Some(tool.name().to_string());
        let tool_call_id = self.emit_tool_started(tool.name(), &args);
        self.tool_call_id = Some(tool_call_id);
        debug!(
            "executing tool (name={}, session_id={})",
            tool.name(),
            self.session_id
        );

        match tool.call(self, args).await {
            Ok(output) => {
                self.emit_tool_finished(tool_call_id, output.clone(), true);
                Ok(output)
            }
            Err(err) => {
                self.emit_tool_finished(tool_call_id, json!({ "error": err.to_string() }), false);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("session_id", &self.session_id)
            .field("tool_call_id", &self.tool_call_id)
            .field("tool_name", &self.tool_name)
            .finish()
    }
}
