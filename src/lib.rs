// Fitness Club Registry - Core Library
// Exposes the registry for the console menu and for tests

pub mod ids;
pub mod error;
pub mod entities;
pub mod registry;

// Console front-end (optional - enabled by the default `cli` feature)
#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;
#[cfg(feature = "cli")]
pub mod menu;

// Re-export commonly used types
pub use ids::{EntityId, IdGenerator};
pub use error::{EntityKind, RegistryError};
pub use entities::{
    FitnessClass, FitnessGoal, Member, MembershipType, ProgressEntry, ProgressLog,
    Specialization, Trainer, Transaction,
};
pub use registry::{FitnessRegistry, RegistrySnapshot, RevenueLine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
