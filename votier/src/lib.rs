pub mod authorization;
pub mod configuration;
pub mod directory;
pub mod engine;
pub mod event;
pub mod ledger;
pub mod manager;
pub mod phase;
pub mod registry;
pub mod resolver;

pub use authorization::{AdminPolicy, Authorize};
pub use directory::ElectionDirectory;
pub use engine::Engine;
pub use manager::{ElectionHandle, ElectionManager};
pub use votier_common as common;
