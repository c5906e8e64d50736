//! Inventory assembly: list, inspect each container, stamp the host name.

use crate::inventory::inspect::inspect_container;
use crate::inventory::record::ContainerRecord;
use crate::inventory::source::ContainerSource;
use crate::utils::host;
use tracing::{debug, Dispatch};

/// Runs point-in-time collections against one source. Holds no state
/// between calls.
pub struct Collector<S> {
    source: S,
    resolve_host: Box<dyn Fn() -> String>,
    dispatch: Option<Dispatch>,
}

impl<S: ContainerSource> Collector<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            resolve_host: Box::new(host::host_name),
            dispatch: None,
        }
    }

    /// Overrides how the host name is resolved. Called once per collection.
    pub fn with_host_resolver(mut self, resolve: impl Fn() -> String + 'static) -> Self {
        self.resolve_host = Box::new(resolve);
        self
    }

    /// Stamps records with a host name that is already known.
    pub fn with_host_name(self, host_name: impl Into<String>) -> Self {
        let host_name = host_name.into();
        self.with_host_resolver(move || host_name.clone())
    }

    /// Routes this collector's log events to `dispatch` instead of the
    /// process-wide subscriber.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// One record per listed container, in listing order.
    pub fn collect(&self) -> Vec<ContainerRecord> {
        self.logged(|| self.collect_with_host(&(self.resolve_host)()))
    }

    /// Single container, stamped like a collected one.
    pub fn inspect_one(&self, id: &str) -> ContainerRecord {
        self.logged(|| {
            let mut record = inspect_container(&self.source, id);
            record.host_name = (self.resolve_host)();
            record
        })
    }

    fn collect_with_host(&self, host_name: &str) -> Vec<ContainerRecord> {
        let ids = self.source.list();
        debug!(count = ids.len(), host = host_name, "collecting container inventory");

        ids.iter()
            .map(|id| {
                let mut record = inspect_container(&self.source, id);
                record.host_name = host_name.to_string();
                record
            })
            .collect()
    }

    fn logged<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}
