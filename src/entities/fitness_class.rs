// 📅 FitnessClass Entity - capacity-bounded enrollment set

use crate::ids::{EntityId, IdGenerator};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A scheduled class
///
/// Invariant: `members.len() <= capacity`. Only `enroll_member` adds members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessClass {
    id: EntityId,
    name: String,
    trainer: Option<EntityId>,
    capacity: u32,
    schedule: NaiveDate,
    members: BTreeSet<EntityId>,
}

impl FitnessClass {
    pub(crate) fn new(
        ids: &mut IdGenerator,
        name: String,
        trainer: Option<EntityId>,
        capacity: u32,
        schedule: NaiveDate,
    ) -> Self {
        FitnessClass {
            id: ids.next(),
            name,
            trainer,
            capacity,
            schedule,
            members: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trainer(&self) -> Option<EntityId> {
        self.trainer
    }

    pub(crate) fn set_trainer(&mut self, trainer: Option<EntityId>) {
        self.trainer = trainer;
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn schedule(&self) -> NaiveDate {
        self.schedule
    }

    pub fn members(&self) -> &BTreeSet<EntityId> {
        &self.members
    }

    pub fn current_enrollments(&self) -> usize {
        self.members.len()
    }

    pub fn is_enrolled(&self, member_id: EntityId) -> bool {
        self.members.contains(&member_id)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity as usize
    }

    /// Enroll a member if one more seat is available.
    ///
    /// Returns `false` without touching the class when it is full.
    /// Enrolling someone already on the list succeeds without adding a duplicate.
    pub fn enroll_member(&mut self, member_id: EntityId) -> bool {
        if self.members.len() + 1 > self.capacity as usize {
            return false;
        }

        self.members.insert(member_id);
        true
    }

    /// Drop a member from the class. Unknown members are ignored.
    pub fn cancel_booking(&mut self, member_id: EntityId) {
        self.members.remove(&member_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_capacity(capacity: u32) -> (IdGenerator, FitnessClass) {
        let mut ids = IdGenerator::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let class = FitnessClass::new(&mut ids, "Spin".to_string(), None, capacity, date);
        (ids, class)
    }

    #[test]
    fn test_enroll_until_full() {
        let (mut ids, mut class) = class_with_capacity(3);

        for _ in 0..3 {
            assert!(class.enroll_member(ids.next()));
        }
        assert!(class.is_full());

        assert!(!class.enroll_member(ids.next()));
        assert_eq!(class.current_enrollments(), 3);
    }

    #[test]
    fn test_zero_capacity_rejects_everyone() {
        let (mut ids, mut class) = class_with_capacity(0);

        assert!(!class.enroll_member(ids.next()));
        assert_eq!(class.current_enrollments(), 0);
    }

    #[test]
    fn test_reenroll_is_noop_success() {
        let (mut ids, mut class) = class_with_capacity(2);
        let member = ids.next();

        assert!(class.enroll_member(member));
        assert!(class.enroll_member(member));
        assert_eq!(class.current_enrollments(), 1);
    }

    #[test]
    fn test_cancel_booking() {
        let (mut ids, mut class) = class_with_capacity(2);
        let member = ids.next();
        class.enroll_member(member);

        class.cancel_booking(member);
        assert!(!class.is_enrolled(member));

        // Absent member: nothing happens
        class.cancel_booking(ids.next());
        assert_eq!(class.current_enrollments(), 0);
    }

    #[test]
    fn test_cancel_frees_a_seat() {
        let (mut ids, mut class) = class_with_capacity(1);
        let first = ids.next();
        let second = ids.next();

        assert!(class.enroll_member(first));
        assert!(!class.enroll_member(second));

        class.cancel_booking(first);
        assert!(class.enroll_member(second));
    }
}
