//! Top-level snapshot structure

use crate::inventory::record::{ContainerRecord, ContainerState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub collected_at: String,
    pub host_name: String,
    pub containers: Vec<ContainerRecord>,
}

impl Snapshot {
    pub fn new(host_name: String, containers: Vec<ContainerRecord>) -> Self {
        Self {
            collected_at: chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S %z")
                .to_string(),
            host_name,
            containers,
        }
    }

    pub fn count(&self, state: ContainerState) -> usize {
        self.containers.iter().filter(|c| c.state == state).count()
    }
}
