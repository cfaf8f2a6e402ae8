//! appkit - shared logic for the mobile client
//!
//! The centrepiece is weighted random selection, used to pick among message
//! variants or animation paths with tunable odds. The remaining modules are
//! framework-independent helpers for formatting, links, paths and device
//! metrics.

pub mod config;
pub mod device;
pub mod error;
pub mod format;
pub mod links;
pub mod logging;
pub mod paths;
pub mod selection;
pub mod text;
pub mod types;
pub mod values;
pub mod variants;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppKitError, Result, SelectionError};
pub use selection::{pick_weighted_index, select_weighted_index};
pub use types::{Platform, RequestState, SharePayload};
pub use variants::WeightedVariants;
