//! Inspect-document normalization.
//! Shape: https://docs.docker.com/engine/api/v1.43/#tag/Container/operation/ContainerInspect
//!
//! Missing sub-objects (Config / State / HostConfig) are logged as warnings.
//! Missing fields inside a present sub-object fall back to defaults and are
//! only logged at debug level.

use crate::inventory::record::{ContainerRecord, ContainerState};
use crate::inventory::source::ContainerSource;
use serde_json::Value;
use tracing::{debug, warn};

const COMPOSE_PROJECT_LABEL: &str = "com.docker.compose.project";

// ── Entry points ────────────────────────────────────────────────────────────

/// Fetches and normalizes one container.
pub fn inspect_container<S: ContainerSource + ?Sized>(source: &S, id: &str) -> ContainerRecord {
    let doc = source.inspect(id);
    normalize(id, doc.as_ref())
}

/// Builds a record from an inspect document. `id` is the identifier the
/// document was requested for.
pub fn normalize(id: &str, doc: Option<&Value>) -> ContainerRecord {
    let doc = match doc {
        Some(d) if !d.is_null() => d,
        _ => {
            warn!(container = id, "inspect of container {} returned null", id);
            return ContainerRecord::new(id);
        }
    };

    let instance_id = match doc.get("Id").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => {
            debug!(container = id, "inspect document has no Id, keeping requested id");
            id.to_string()
        }
    };

    let mut record = ContainerRecord::new(instance_id);
    record.image_id = string_field(doc, "Image", &record.instance_id);
    record.created_time = string_field(doc, "Created", &record.instance_id);

    extract_config(&mut record, doc);
    extract_state(&mut record, doc);
    extract_host_config(&mut record, doc);

    record
}

// ── Sub-extractors ──────────────────────────────────────────────────────────

pub fn extract_config(record: &mut ContainerRecord, doc: &Value) {
    let Some(config) = sub_object(doc, "Config", &record.instance_id) else {
        return;
    };
    let id = record.instance_id.as_str();

    record.container_hostname = string_field(config, "Hostname", id);
    record.environment_var = passthrough(config, "Env", id);
    record.command = passthrough(config, "Cmd", id);

    // optional at every level, no logging
    record.compose_group = config
        .get("Labels")
        .and_then(|labels| labels.get(COMPOSE_PROJECT_LABEL))
        .and_then(Value::as_str)
        .map(str::to_string);
}

pub fn extract_state(record: &mut ContainerRecord, doc: &Value) {
    let Some(state) = sub_object(doc, "State", &record.instance_id) else {
        return;
    };
    let id = record.instance_id.as_str();

    let exit_code = match state.get("ExitCode").and_then(as_integer) {
        Some(code) => code,
        None => {
            debug!(container = id, field = "ExitCode", "field missing, using 0");
            0
        }
    };
    let running = flag(state, "Running", id);
    let paused = flag(state, "Paused", id);

    record.exit_code = exit_code;
    record.state = ContainerState::derive(exit_code, running, paused);
    record.started_at = string_field(state, "StartedAt", id);
    record.finished_at = string_field(state, "FinishedAt", id);
}

pub fn extract_host_config(record: &mut ContainerRecord, doc: &Value) {
    let Some(host_config) = sub_object(doc, "HostConfig", &record.instance_id) else {
        return;
    };
    let id = record.instance_id.as_str();

    record.links = passthrough(host_config, "Links", id);
    record.ports = passthrough(host_config, "PortBindings", id);
}

// ── Accessors ───────────────────────────────────────────────────────────────

fn sub_object<'a>(doc: &'a Value, key: &str, id: &str) -> Option<&'a Value> {
    match doc.get(key) {
        Some(v) if v.is_object() => Some(v),
        _ => {
            warn!(container = id, section = key, "container {} has no {} information", id, key);
            None
        }
    }
}

fn string_field(obj: &Value, key: &str, id: &str) -> String {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => {
            debug!(container = id, field = key, "field missing or not a string");
            String::new()
        }
    }
}

/// Compact JSON of the child, `null` when it is missing.
fn passthrough(obj: &Value, key: &str, id: &str) -> String {
    match obj.get(key) {
        Some(v) => v.to_string(),
        None => {
            debug!(container = id, field = key, "field missing, storing null");
            Value::Null.to_string()
        }
    }
}

fn flag(obj: &Value, key: &str, id: &str) -> bool {
    match obj.get(key) {
        Some(v) => truthy(v),
        None => {
            debug!(container = id, field = key, "flag missing, treating as false");
            false
        }
    }
}

/// `true`, or any non-zero number.
fn truthy(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    }
}

fn as_integer(v: &Value) -> Option<i64> {
    v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))
}
