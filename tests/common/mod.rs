//! Shared test doubles: an in-memory container source and a tracing layer
//! that records every event.

#![allow(dead_code)]

use container_inventory::inventory::ContainerSource;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

// =============================================================================
// Container source double
// =============================================================================

/// Lists `ids` in order; inspects from `docs`, `None` for unknown ids.
#[derive(Default)]
pub struct FakeSource {
    pub ids: Vec<String>,
    pub docs: HashMap<String, Value>,
    pub inspected: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, doc: Value) -> Self {
        self.ids.push(id.to_string());
        self.docs.insert(id.to_string(), doc);
        self
    }

    /// Listed but never inspectable.
    pub fn with_missing(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }

    pub fn inspected(&self) -> Vec<String> {
        self.inspected.lock().unwrap().clone()
    }
}

impl ContainerSource for FakeSource {
    fn list(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn inspect(&self, id: &str) -> Option<Value> {
        self.inspected.lock().unwrap().push(id.to_string());
        self.docs.get(id).cloned()
    }
}

pub fn node_1() -> String {
    "node-1".to_string()
}

// =============================================================================
// Log capture
// =============================================================================

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<(Level, String)>>>);

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self) -> Dispatch {
        Dispatch::new(Registry::default().with(CaptureLayer(self.clone())))
    }

    pub fn warnings(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .map(|(_, line)| line.clone())
            .collect()
    }
}

struct CaptureLayer(CapturedLogs);

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut line = FieldLine(String::new());
        event.record(&mut line);
        (self.0).0.lock().unwrap().push((*event.metadata().level(), line.0));
    }
}

struct FieldLine(String);

impl Visit for FieldLine {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}
