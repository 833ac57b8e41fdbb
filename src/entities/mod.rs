// Entity Models
//
// Each entity has:
// - Stable identity (EntityId) issued by the owning registry
// - Plain data with no pointer back to the registry
// - Enum display names as methods on the enum

pub mod member;
pub mod trainer;
pub mod fitness_class;
pub mod transaction;

pub use member::{FitnessGoal, Member, MembershipType, ProgressEntry, ProgressLog};
pub use trainer::{Specialization, Trainer};
pub use fitness_class::FitnessClass;
pub use transaction::Transaction;
