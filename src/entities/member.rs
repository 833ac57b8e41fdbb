// 🏋️ Member Entity - club member with a per-goal progress log
//
// Identity is the EntityId handed out by the registry.
// Name, age and goal are fixed at registration; membership type can be upgraded.

use crate::ids::{EntityId, IdGenerator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// MEMBERSHIP TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MembershipType {
    Basic,
    Premium,
    Vip,
}

impl MembershipType {
    /// Menu order
    pub const ALL: [MembershipType; 3] = [
        MembershipType::Basic,
        MembershipType::Premium,
        MembershipType::Vip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Basic => "Basic",
            MembershipType::Premium => "Premium",
            MembershipType::Vip => "Vip",
        }
    }

    /// Upper-case code used in menus and receipts
    pub fn code(&self) -> &'static str {
        match self {
            MembershipType::Basic => "BASIC",
            MembershipType::Premium => "PREMIUM",
            MembershipType::Vip => "VIP",
        }
    }

    /// 1-based menu choice
    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// FITNESS GOAL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [
        FitnessGoal::WeightLoss,
        FitnessGoal::MuscleGain,
        FitnessGoal::Endurance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "WeightLoss",
            FitnessGoal::MuscleGain => "MuscleGain",
            FitnessGoal::Endurance => "Endurance",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "WEIGHT_LOSS",
            FitnessGoal::MuscleGain => "MUSCLE_GAIN",
            FitnessGoal::Endurance => "ENDURANCE",
        }
    }

    pub fn from_choice(choice: usize) -> Option<Self> {
        choice.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PROGRESS LOG
// ============================================================================

/// One caller-supplied progress record. The registry never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub note: String,
    pub recorded_on: NaiveDate,
}

impl ProgressEntry {
    pub fn new(note: impl Into<String>, recorded_on: NaiveDate) -> Self {
        ProgressEntry {
            note: note.into(),
            recorded_on,
        }
    }
}

impl fmt::Display for ProgressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.recorded_on.format("%Y-%m-%d"), self.note)
    }
}

/// Goal -> entries in the order they were logged
pub type ProgressLog = BTreeMap<FitnessGoal, Vec<ProgressEntry>>;

// ============================================================================
// MEMBER ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    id: EntityId,
    name: String,
    age: u8,
    membership_type: MembershipType,
    fitness_goal: FitnessGoal,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    progress: ProgressLog,
}

impl Member {
    pub(crate) fn new(
        ids: &mut IdGenerator,
        name: String,
        age: u8,
        membership_type: MembershipType,
        fitness_goal: FitnessGoal,
    ) -> Self {
        Member {
            id: ids.next(),
            name,
            age,
            membership_type,
            fitness_goal,
            progress: ProgressLog::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn membership_type(&self) -> MembershipType {
        self.membership_type
    }

    pub fn fitness_goal(&self) -> FitnessGoal {
        self.fitness_goal
    }

    /// Read-only view of the progress log
    pub fn progress(&self) -> &ProgressLog {
        &self.progress
    }

    pub fn update_membership(&mut self, new_type: MembershipType) {
        self.membership_type = new_type;
    }

    /// Append an entry under `goal`, creating that goal's log on first use
    pub fn track_progress(&mut self, entry: ProgressEntry, goal: FitnessGoal) {
        self.progress.entry(goal).or_default().push(entry);
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Member {}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn ali(ids: &mut IdGenerator) -> Member {
        Member::new(
            ids,
            "Ali".to_string(),
            25,
            MembershipType::Basic,
            FitnessGoal::WeightLoss,
        )
    }

    #[test]
    fn test_member_creation() {
        let mut ids = IdGenerator::new();
        let member = ali(&mut ids);

        assert_eq!(member.id(), EntityId::new(1));
        assert_eq!(member.name(), "Ali");
        assert_eq!(member.age(), 25);
        assert_eq!(member.membership_type(), MembershipType::Basic);
        assert_eq!(member.fitness_goal(), FitnessGoal::WeightLoss);
        assert!(member.progress().is_empty());
    }

    #[test]
    fn test_update_membership() {
        let mut ids = IdGenerator::new();
        let mut member = ali(&mut ids);

        member.update_membership(MembershipType::Vip);
        assert_eq!(member.membership_type(), MembershipType::Vip);
    }

    #[test]
    fn test_track_progress_creates_log_lazily() {
        let mut ids = IdGenerator::new();
        let mut member = ali(&mut ids);

        member.track_progress(ProgressEntry::new("Lost 2kg", day(1)), FitnessGoal::WeightLoss);

        assert_eq!(member.progress().len(), 1);
        assert!(!member.progress().contains_key(&FitnessGoal::Endurance));
        assert_eq!(member.progress()[&FitnessGoal::WeightLoss][0].note, "Lost 2kg");
    }

    #[test]
    fn test_track_progress_keeps_order_per_goal() {
        let mut ids = IdGenerator::new();
        let mut member = ali(&mut ids);

        member.track_progress(ProgressEntry::new("Lost 2kg", day(1)), FitnessGoal::WeightLoss);
        member.track_progress(ProgressEntry::new("Ran 5km", day(2)), FitnessGoal::Endurance);
        member.track_progress(ProgressEntry::new("Lost 1kg", day(8)), FitnessGoal::WeightLoss);

        let notes: Vec<&str> = member.progress()[&FitnessGoal::WeightLoss]
            .iter()
            .map(|e| e.note.as_str())
            .collect();
        assert_eq!(notes, vec!["Lost 2kg", "Lost 1kg"]);
        assert_eq!(member.progress()[&FitnessGoal::Endurance].len(), 1);
    }

    #[test]
    fn test_enum_display_names() {
        assert_eq!(MembershipType::Vip.to_string(), "Vip");
        assert_eq!(MembershipType::Vip.code(), "VIP");
        assert_eq!(FitnessGoal::MuscleGain.to_string(), "MuscleGain");
        assert_eq!(FitnessGoal::MuscleGain.code(), "MUSCLE_GAIN");
    }

    #[test]
    fn test_enum_from_choice() {
        assert_eq!(MembershipType::from_choice(1), Some(MembershipType::Basic));
        assert_eq!(MembershipType::from_choice(3), Some(MembershipType::Vip));
        assert_eq!(MembershipType::from_choice(0), None);
        assert_eq!(FitnessGoal::from_choice(2), Some(FitnessGoal::MuscleGain));
        assert_eq!(FitnessGoal::from_choice(4), None);
    }

    #[test]
    fn test_progress_entry_display() {
        let entry = ProgressEntry::new("Bench 80kg", day(15));
        assert_eq!(entry.to_string(), "2024-03-15: Bench 80kg");
    }
}
