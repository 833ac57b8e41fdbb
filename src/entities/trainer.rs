// 🧑‍🏫 Trainer Entity
//
// Trainers are referenced by classes through their id only.
// Which classes a trainer runs is a registry query, not trainer state.

use crate::entities::fitness_class::FitnessClass;
use crate::ids::{EntityId, IdGenerator};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SPECIALIZATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Yoga,
    StrengthTraining,
    Cardio,
}

impl Specialization {
    pub const ALL: [Specialization; 3] = [
        Specialization::Yoga,
        Specialization::StrengthTraining,
        Specialization::Cardio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Yoga => "Yoga",
            Specialization::StrengthTraining => "Strength Training",
            Specialization::Cardio => "Cardio",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Specialization::Yoga => "YOGA",
            Specialization::StrengthTraining => "STRENGTH_TRAINING",
            Specialization::Cardio => "CARDIO",
        }
    }

    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRAINER ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    id: EntityId,
    name: String,
    specialization: Specialization,
}

impl Trainer {
    pub(crate) fn new(ids: &mut IdGenerator, name: String, specialization: Specialization) -> Self {
        Trainer {
            id: ids.next(),
            name,
            specialization,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn specialization(&self) -> Specialization {
        self.specialization
    }

    /// Make this trainer the class's trainer. Any previous trainer is replaced.
    pub fn assign_class(&self, class: &mut FitnessClass) {
        class.set_trainer(Some(self.id));
    }
}

impl PartialEq for Trainer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Trainer {}
