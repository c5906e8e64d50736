//! Request/response shell around the collector. Enumeration is the only
//! supported read path; every instance-level and write operation is
//! answered with `NotSupported`.

use crate::inventory::{Collector, ContainerRecord, ContainerSource};
use std::fmt;
use tracing::info;

/// Final status posted after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotSupported,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::NotSupported => write!(f, "NOT_SUPPORTED"),
        }
    }
}

/// Receives zero or more records followed by exactly one status.
pub trait InstanceSink {
    fn post_instance(&mut self, record: ContainerRecord);
    fn post_status(&mut self, status: Status);
}

/// Sink that keeps everything it is handed.
#[derive(Debug, Default)]
pub struct RecordBuffer {
    pub records: Vec<ContainerRecord>,
    pub status: Option<Status>,
}

impl InstanceSink for RecordBuffer {
    fn post_instance(&mut self, record: ContainerRecord) {
        self.records.push(record);
    }

    fn post_status(&mut self, status: Status) {
        self.status = Some(status);
    }
}

pub struct InventoryProvider<S> {
    collector: Collector<S>,
}

impl<S: ContainerSource> InventoryProvider<S> {
    pub fn new(collector: Collector<S>) -> Self {
        Self { collector }
    }

    pub fn load(&self, sink: &mut impl InstanceSink) {
        sink.post_status(Status::Ok);
    }

    pub fn unload(&self, sink: &mut impl InstanceSink) {
        sink.post_status(Status::Ok);
    }

    /// Takes a fresh snapshot and posts every record, then `Ok`. Partial
    /// failures only show up in the log.
    pub fn enumerate_instances(&self, sink: &mut impl InstanceSink) {
        let records = self.collector.collect();
        info!(count = records.len(), "enumerated container inventory");
        for record in records {
            sink.post_instance(record);
        }
        sink.post_status(Status::Ok);
    }

    pub fn get_instance(&self, sink: &mut impl InstanceSink, _key: &ContainerRecord) {
        sink.post_status(Status::NotSupported);
    }

    pub fn create_instance(&self, sink: &mut impl InstanceSink, _instance: &ContainerRecord) {
        sink.post_status(Status::NotSupported);
    }

    pub fn modify_instance(&self, sink: &mut impl InstanceSink, _instance: &ContainerRecord) {
        sink.post_status(Status::NotSupported);
    }

    pub fn delete_instance(&self, sink: &mut impl InstanceSink, _key: &ContainerRecord) {
        sink.post_status(Status::NotSupported);
    }
}
