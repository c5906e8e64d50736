use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle classification of a container at collection time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerState {
    Running,
    Paused,
    #[default]
    Stopped,
    Failed,
}

impl ContainerState {
    /// Total over its inputs. A non-zero exit code wins over the runtime
    /// flags, so a stale `Running` next to exit 137 still reads Failed.
    pub fn derive(exit_code: i64, running: bool, paused: bool) -> Self {
        if exit_code != 0 {
            ContainerState::Failed
        } else if running {
            ContainerState::Running
        } else if paused {
            ContainerState::Paused
        } else {
            ContainerState::Stopped
        }
    }
}

impl fmt::Display for ContainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerState::Running => write!(f, "Running"),
            ContainerState::Paused => write!(f, "Paused"),
            ContainerState::Stopped => write!(f, "Stopped"),
            ContainerState::Failed => write!(f, "Failed"),
        }
    }
}

/// One container's normalized inventory entry.
///
/// `environment_var`, `command`, `links` and `ports` hold the runtime's
/// JSON for those fields verbatim (compact), `"null"` when the field was
/// missing from a present sub-object, and `""` when the whole sub-object
/// was missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRecord {
    #[serde(rename = "InstanceID")]
    pub instance_id: String,
    #[serde(rename = "ImageID")]
    pub image_id: String,
    #[serde(rename = "HostName")]
    pub host_name: String,
    #[serde(rename = "CreatedTime")]
    pub created_time: String,
    #[serde(rename = "ContainerHostname")]
    pub container_hostname: String,
    #[serde(rename = "EnvironmentVar")]
    pub environment_var: String,
    #[serde(rename = "Command")]
    pub command: String,
    #[serde(rename = "ComposeGroup", skip_serializing_if = "Option::is_none", default)]
    pub compose_group: Option<String>,
    #[serde(rename = "ExitCode")]
    pub exit_code: i64,
    #[serde(rename = "State")]
    pub state: ContainerState,
    #[serde(rename = "StartedAt")]
    pub started_at: String,
    #[serde(rename = "FinishedAt")]
    pub finished_at: String,
    #[serde(rename = "Links")]
    pub links: String,
    #[serde(rename = "Ports")]
    pub ports: String,
}

impl ContainerRecord {
    /// Empty record for `id`; what a failed inspection contributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            instance_id: id.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_exit_code_is_failed_whatever_the_flags() {
        for code in [1, 2, 125, 137, 255, -1] {
            for running in [false, true] {
                for paused in [false, true] {
                    assert_eq!(
                        ContainerState::derive(code, running, paused),
                        ContainerState::Failed,
                        "exit={} running={} paused={}",
                        code,
                        running,
                        paused
                    );
                }
            }
        }
    }

    #[test]
    fn clean_exit_follows_flags() {
        assert_eq!(ContainerState::derive(0, true, false), ContainerState::Running);
        assert_eq!(ContainerState::derive(0, true, true), ContainerState::Running);
        assert_eq!(ContainerState::derive(0, false, true), ContainerState::Paused);
        assert_eq!(ContainerState::derive(0, false, false), ContainerState::Stopped);
    }

    #[test]
    fn serializes_with_inventory_field_names() {
        let mut record = ContainerRecord::new("abc123");
        record.state = ContainerState::Paused;
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["InstanceID"], "abc123");
        assert_eq!(v["State"], "Paused");
        assert_eq!(v["ExitCode"], 0);
        assert!(v.get("ComposeGroup").is_none());

        record.compose_group = Some("web".to_string());
        let v = serde_json::to_value(&record).unwrap();
        assert_eq!(v["ComposeGroup"], "web");
    }
}
