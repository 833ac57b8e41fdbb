// 🔢 Identifier generation
//
// Every entity gets its identity from the generator owned by its registry.
// Identity never changes; two registries never share a counter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identity of a member, trainer, class or transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    pub fn new(raw: u64) -> Self {
        EntityId(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(EntityId)
    }
}

/// Monotonic counter handing out identifiers, starting at 1
#[derive(Debug)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { last: 0 }
    }

    /// Issue the next identifier. Never repeats for this instance.
    pub fn next(&mut self) -> EntityId {
        self.last += 1;
        EntityId(self.last)
    }

    /// Number of identifiers issued so far
    pub fn issued(&self) -> u64 {
        self.last
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
