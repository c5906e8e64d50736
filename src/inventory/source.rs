use crate::inventory::lister;
use crate::runtime::{request, Transport};
use serde_json::Value;
use tracing::warn;

/// What the collector needs from a container runtime.
pub trait ContainerSource {
    /// Ids of all containers, including stopped ones.
    fn list(&self) -> Vec<String>;

    /// Raw inspect document for one container, `None` if unavailable.
    fn inspect(&self, id: &str) -> Option<Value>;
}

impl<S: ContainerSource + ?Sized> ContainerSource for &S {
    fn list(&self) -> Vec<String> {
        (**self).list()
    }

    fn inspect(&self, id: &str) -> Option<Value> {
        (**self).inspect(id)
    }
}

/// Source backed by the runtime's HTTP API.
#[derive(Debug, Clone)]
pub struct RuntimeSource<T> {
    transport: T,
}

impl<T: Transport> RuntimeSource<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> ContainerSource for RuntimeSource<T> {
    fn list(&self) -> Vec<String> {
        lister::list_container_ids(&self.transport)
    }

    fn inspect(&self, id: &str) -> Option<Value> {
        let raw = match request::inspect(id) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(container = id, error = %e, "not sending inspect request");
                return None;
            }
        };
        self.transport.exchange(&[raw]).into_iter().next().flatten()
    }
}
