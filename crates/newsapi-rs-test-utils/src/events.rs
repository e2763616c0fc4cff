use newsapi_rs_protocol::{EventMsg, EventPayload, EventSink, Media};
use parking_lot::Mutex;

/// Event sink that keeps every emitted event in order.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<EventMsg>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<EventMsg> {
        self.events.lock().clone()
    }

    /// Media sets in emission order.
    pub fn media_sets(&self) -> Vec<Vec<Media>> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match &event.payload {
                EventPayload::MediasSent { medias, .. } => Some(medias.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: EventMsg) {
        self.events.lock().push(event);
    }
}
