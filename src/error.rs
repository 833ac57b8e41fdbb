use crate::ids::EntityId;
use std::fmt;
use thiserror::Error;

/// Which collection a failed lookup went to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Member,
    Trainer,
    FitnessClass,
    Transaction,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Member => "Member",
            EntityKind::Trainer => "Trainer",
            EntityKind::FitnessClass => "Class",
            EntityKind::Transaction => "Transaction",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{kind} with id: {id} doesn't exist")]
    NotFound { kind: EntityKind, id: EntityId },
}

impl RegistryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
