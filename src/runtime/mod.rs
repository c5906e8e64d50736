//! Runtime daemon access: raw request strings in, JSON documents out.

pub mod http;
pub mod request;
pub mod socket;

pub use socket::{Endpoint, SocketTransport, DEFAULT_DOCKER_HOST};

use serde_json::Value;

/// Sends raw requests to the runtime and returns one parsed document per
/// request, in request order. A request that fails, or answers without a
/// usable body, yields `None` in its slot.
pub trait Transport {
    fn exchange(&self, requests: &[String]) -> Vec<Option<Value>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn exchange(&self, requests: &[String]) -> Vec<Option<Value>> {
        (**self).exchange(requests)
    }
}
