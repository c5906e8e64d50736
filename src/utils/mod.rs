pub mod error;
pub mod host;

pub use error::{InventoryError, Result};
