use crate::runtime::{request, Transport};
use serde_json::Value;
use tracing::{debug, warn};

/// Ids of every container on the host, stopped ones included, in the
/// order the runtime lists them. Empty when the runtime gives no answer.
pub fn list_container_ids<T: Transport + ?Sized>(transport: &T) -> Vec<String> {
    let doc = transport.exchange(&[request::list_all()]).into_iter().next().flatten();

    let Some(doc) = doc else {
        warn!("container listing returned no result");
        return Vec::new();
    };
    let Some(entries) = doc.as_array() else {
        warn!("container listing is not an array");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry.get("Id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => {
                debug!("skipping listing entry without Id");
                None
            }
        })
        .collect()
}
