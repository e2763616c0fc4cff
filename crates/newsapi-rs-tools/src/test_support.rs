//! Doubles shared by this crate's unit tests.
//!
//! Integration tests use `newsapi-rs-test-utils`, which links against the
//! published library and so cannot stand in for `crate::` types here.

use crate::news::{Article, NewsProvider, NewsProviderError, NewsQuery};
use async_trait::async_trait;
use newsapi_rs_protocol::{EventMsg, EventPayload, EventSink, Media};
use parking_lot::Mutex;

/// Sink that keeps every event in emission order.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) events: Mutex<Vec<EventMsg>>,
}

impl RecordingSink {
    /// Media sets carried by `MediasSent` events.
    pub(crate) fn media_sets(&self) -> Vec<Vec<Media>> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match &event.payload {
                EventPayload::MediasSent { medias, .. } => Some(medias.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: EventMsg) {
        self.events.lock().push(event);
    }
}

/// Provider answering every query with the same response.
pub(crate) struct FixedProvider {
    response: Result<Vec<Article>, NewsProviderError>,
    pub(crate) queries: Mutex<Vec<NewsQuery>>,
}

impl FixedProvider {
    pub(crate) fn new(response: Result<Vec<Article>, NewsProviderError>) -> Self {
        Self {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl NewsProvider for FixedProvider {
    async fn everything(&self, query: &NewsQuery) -> Result<Vec<Article>, NewsProviderError> {
        self.queries.lock().push(query.clone());
        self.response.clone()
    }
}
