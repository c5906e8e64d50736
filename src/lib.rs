//! Point-in-time container inventory.
//!
//! Lists every container known to the runtime, inspects each one over the
//! Engine API and normalizes the inspect document into a [`ContainerRecord`].
//!
//! ```no_run
//! use container_inventory::inventory::{Collector, RuntimeSource};
//! use container_inventory::runtime::SocketTransport;
//!
//! let transport = SocketTransport::new("unix:///var/run/docker.sock".parse()?);
//! for record in Collector::new(RuntimeSource::new(transport)).collect() {
//!     println!("{} {}", record.instance_id, record.state);
//! }
//! # Ok::<(), container_inventory::utils::InventoryError>(())
//! ```

pub mod inventory;
pub mod logging;
pub mod output;
pub mod provider;
pub mod runtime;
pub mod utils;

pub use inventory::{ContainerRecord, ContainerState};
