// 🗂️ Fitness Registry - owns every entity and every relationship between them
//
// Members, trainers, classes and transactions live in id-keyed maps.
// Ids come from one generator and only grow, so map order is insertion order.

use crate::entities::{
    FitnessClass, FitnessGoal, Member, MembershipType, ProgressEntry, ProgressLog,
    Specialization, Trainer, Transaction,
};
use crate::error::{EntityKind, RegistryError, Result};
use crate::ids::{EntityId, IdGenerator};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

// ============================================================================
// REPORT TYPES
// ============================================================================

/// Revenue collected for one membership type / service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueLine {
    pub membership_type: MembershipType,
    pub transactions: usize,
    pub total: f64,
}

/// Serializable view of the whole registry
#[derive(Debug, Serialize)]
pub struct RegistrySnapshot<'a> {
    pub members: Vec<&'a Member>,
    pub trainers: Vec<&'a Trainer>,
    pub classes: Vec<&'a FitnessClass>,
    pub transactions: Vec<&'a Transaction>,
    pub total_revenue: f64,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Aggregate holding all club state for the lifetime of the process
#[derive(Debug, Default)]
pub struct FitnessRegistry {
    ids: IdGenerator,
    members: BTreeMap<EntityId, Member>,
    trainers: BTreeMap<EntityId, Trainer>,
    classes: BTreeMap<EntityId, FitnessClass>,
    transactions: BTreeMap<EntityId, Transaction>,
}

impl FitnessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with a small sample club
    pub fn with_demo_data() -> Self {
        let mut registry = Self::new();
        registry.register_demo_data();
        registry
    }

    fn register_demo_data(&mut self) {
        let today = Utc::now().date_naive();

        // 1. Members
        let ali = self
            .register_member("Ali", 25, MembershipType::Basic, FitnessGoal::WeightLoss)
            .id();
        let maria = self
            .register_member("Maria", 31, MembershipType::Premium, FitnessGoal::MuscleGain)
            .id();
        let tom = self
            .register_member("Tom", 42, MembershipType::Vip, FitnessGoal::Endurance)
            .id();

        // 2. Trainers
        let sara = self.add_trainer("Sara", Specialization::Yoga).id();
        let igor = self.add_trainer("Igor", Specialization::StrengthTraining).id();

        // 3. Classes - trainers exist and capacities are fixed, so these cannot fail
        let classes = [
            ("Morning Yoga", sara, 10),
            ("Power Lifting", igor, 5),
        ];
        for (name, trainer, capacity) in classes {
            let class_id = match self.schedule_class(name, Some(trainer), capacity, today) {
                Ok(class) => class.id(),
                Err(_) => continue,
            };
            let _ = self.enroll_member(ali, class_id);
            let _ = self.enroll_member(maria, class_id);
        }

        // 4. Payments and progress
        let _ = self.process_payment(ali, 500.0, MembershipType::Basic);
        let _ = self.process_payment(maria, 1000.0, MembershipType::Premium);
        let _ = self.process_payment(tom, 2000.0, MembershipType::Vip);
        let _ = self.track_progress(ali, ProgressEntry::new("Lost 2kg", today), FitnessGoal::WeightLoss);
        let _ = self.track_progress(tom, ProgressEntry::new("Ran 10km", today), FitnessGoal::Endurance);
    }

    // ------------------------------------------------------------------------
    // Members
    // ------------------------------------------------------------------------

    /// Create and store a member. Inputs are expected to be pre-validated.
    pub fn register_member(
        &mut self,
        name: impl Into<String>,
        age: u8,
        membership_type: MembershipType,
        fitness_goal: FitnessGoal,
    ) -> &Member {
        let member = Member::new(&mut self.ids, name.into(), age, membership_type, fitness_goal);
        let id = member.id();
        info!(member_id = %id, name = member.name(), "member registered");
        self.members.entry(id).or_insert(member)
    }

    /// Remove a member and every booking they hold
    pub fn cancel_membership(&mut self, member_id: EntityId) -> Result<Member> {
        let member = self.members.remove(&member_id).ok_or_else(|| {
            warn!(member_id = %member_id, "cancel_membership: unknown member");
            RegistryError::not_found(EntityKind::Member, member_id)
        })?;

        for class in self.classes.values_mut() {
            class.cancel_booking(member_id);
        }

        info!(member_id = %member_id, name = member.name(), "membership cancelled");
        Ok(member)
    }

    /// All members in registration order
    pub fn view_members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    pub fn member(&self, member_id: EntityId) -> Option<&Member> {
        self.members.get(&member_id)
    }

    fn member_mut(&mut self, member_id: EntityId) -> Result<&mut Member> {
        self.members
            .get_mut(&member_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Member, member_id))
    }

    pub fn update_membership(&mut self, member_id: EntityId, new_type: MembershipType) -> Result<()> {
        let member = self.member_mut(member_id)?;
        member.update_membership(new_type);
        debug!(member_id = %member_id, membership = new_type.as_str(), "membership updated");
        Ok(())
    }

    pub fn track_progress(
        &mut self,
        member_id: EntityId,
        entry: ProgressEntry,
        goal: FitnessGoal,
    ) -> Result<()> {
        let member = self.member_mut(member_id)?;
        member.track_progress(entry, goal);
        debug!(member_id = %member_id, goal = goal.as_str(), "progress tracked");
        Ok(())
    }

    /// Progress log of a member, or `None` when the member is unknown
    pub fn view_member_progress(&self, member_id: EntityId) -> Option<&ProgressLog> {
        self.members.get(&member_id).map(Member::progress)
    }

    // ------------------------------------------------------------------------
    // Trainers
    // ------------------------------------------------------------------------

    pub fn add_trainer(&mut self, name: impl Into<String>, specialization: Specialization) -> &Trainer {
        let trainer = Trainer::new(&mut self.ids, name.into(), specialization);
        let id = trainer.id();
        info!(trainer_id = %id, name = trainer.name(), "trainer added");
        self.trainers.entry(id).or_insert(trainer)
    }

    /// Remove a trainer; their classes stay scheduled without a trainer
    pub fn remove_trainer(&mut self, trainer_id: EntityId) -> Result<Trainer> {
        let trainer = self.trainers.remove(&trainer_id).ok_or_else(|| {
            warn!(trainer_id = %trainer_id, "remove_trainer: unknown trainer");
            RegistryError::not_found(EntityKind::Trainer, trainer_id)
        })?;

        for class in self.classes.values_mut() {
            if class.trainer() == Some(trainer_id) {
                class.set_trainer(None);
            }
        }

        info!(trainer_id = %trainer_id, name = trainer.name(), "trainer removed");
        Ok(trainer)
    }

    pub fn view_trainers(&self) -> Vec<&Trainer> {
        self.trainers.values().collect()
    }

    pub fn trainer(&self, trainer_id: EntityId) -> Option<&Trainer> {
        self.trainers.get(&trainer_id)
    }

    // ------------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------------

    /// Schedule a class. A given trainer id must belong to a registered trainer.
    pub fn schedule_class(
        &mut self,
        name: impl Into<String>,
        trainer: Option<EntityId>,
        capacity: u32,
        schedule: NaiveDate,
    ) -> Result<&FitnessClass> {
        if let Some(trainer_id) = trainer {
            if !self.trainers.contains_key(&trainer_id) {
                warn!(trainer_id = %trainer_id, "schedule_class: unknown trainer");
                return Err(RegistryError::not_found(EntityKind::Trainer, trainer_id));
            }
        }

        let class = FitnessClass::new(&mut self.ids, name.into(), trainer, capacity, schedule);
        let id = class.id();
        info!(class_id = %id, name = class.name(), capacity, "class scheduled");
        Ok(self.classes.entry(id).or_insert(class))
    }

    pub fn view_classes(&self) -> Vec<&FitnessClass> {
        self.classes.values().collect()
    }

    pub fn fitness_class(&self, class_id: EntityId) -> Option<&FitnessClass> {
        self.classes.get(&class_id)
    }

    fn class_mut(&mut self, class_id: EntityId) -> Result<&mut FitnessClass> {
        self.classes
            .get_mut(&class_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::FitnessClass, class_id))
    }

    /// Enroll a member in a class. `Ok(false)` means the class is full.
    pub fn enroll_member(&mut self, member_id: EntityId, class_id: EntityId) -> Result<bool> {
        if !self.members.contains_key(&member_id) {
            return Err(RegistryError::not_found(EntityKind::Member, member_id));
        }

        let class = self.class_mut(class_id)?;
        let enrolled = class.enroll_member(member_id);
        if enrolled {
            debug!(member_id = %member_id, class_id = %class_id, "member enrolled");
        } else {
            warn!(member_id = %member_id, class_id = %class_id, "class is full");
        }
        Ok(enrolled)
    }

    pub fn cancel_booking(&mut self, member_id: EntityId, class_id: EntityId) -> Result<()> {
        let class = self.class_mut(class_id)?;
        class.cancel_booking(member_id);
        debug!(member_id = %member_id, class_id = %class_id, "booking cancelled");
        Ok(())
    }

    /// Hand a class to a trainer, replacing whoever ran it before
    pub fn assign_trainer(&mut self, trainer_id: EntityId, class_id: EntityId) -> Result<()> {
        let trainer = self
            .trainers
            .get(&trainer_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Trainer, trainer_id))?;
        let class = self
            .classes
            .get_mut(&class_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::FitnessClass, class_id))?;

        trainer.assign_class(class);
        debug!(trainer_id = %trainer_id, class_id = %class_id, "trainer assigned");
        Ok(())
    }

    /// Classes a member is enrolled in
    pub fn classes_for_member(&self, member_id: EntityId) -> Vec<&FitnessClass> {
        self.classes
            .values()
            .filter(|class| class.is_enrolled(member_id))
            .collect()
    }

    /// Classes run by a trainer
    pub fn classes_for_trainer(&self, trainer_id: EntityId) -> Vec<&FitnessClass> {
        self.classes
            .values()
            .filter(|class| class.trainer() == Some(trainer_id))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Transactions
    // ------------------------------------------------------------------------

    /// Record a payment dated now
    pub fn process_payment(
        &mut self,
        member_id: EntityId,
        amount: f64,
        membership_type: MembershipType,
    ) -> Result<&Transaction> {
        self.process_payment_at(member_id, amount, membership_type, Utc::now())
    }

    /// Record a payment with an explicit payment date
    pub fn process_payment_at(
        &mut self,
        member_id: EntityId,
        amount: f64,
        membership_type: MembershipType,
        paid_at: DateTime<Utc>,
    ) -> Result<&Transaction> {
        let member = self
            .members
            .get(&member_id)
            .ok_or_else(|| RegistryError::not_found(EntityKind::Member, member_id))?;

        let transaction = Transaction::new(&mut self.ids, member, amount, paid_at, membership_type)
            .inspect_err(|e| warn!(member_id = %member_id, amount, "payment rejected: {}", e))?;

        let id = transaction.id();
        info!(transaction_id = %id, member_id = %member_id, amount, "payment processed");
        Ok(self.transactions.entry(id).or_insert(transaction))
    }

    pub fn view_transactions(&self) -> Vec<&Transaction> {
        self.transactions.values().collect()
    }

    pub fn transaction(&self, transaction_id: EntityId) -> Option<&Transaction> {
        self.transactions.get(&transaction_id)
    }

    pub fn transactions_for_member(&self, member_id: EntityId) -> Vec<&Transaction> {
        self.transactions
            .values()
            .filter(|tx| tx.member() == member_id)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------------

    /// Total of all recorded payments
    pub fn generate_revenue_report(&self) -> f64 {
        self.transactions.values().map(Transaction::amount_paid).sum()
    }

    /// Revenue per membership type, in menu order, skipping types nobody paid for
    pub fn revenue_by_membership(&self) -> Vec<RevenueLine> {
        MembershipType::ALL
            .iter()
            .filter_map(|&membership_type| {
                let (transactions, total) = self
                    .transactions
                    .values()
                    .filter(|tx| tx.membership_type() == membership_type)
                    .fold((0, 0.0), |(count, sum), tx| (count + 1, sum + tx.amount_paid()));

                (transactions > 0).then_some(RevenueLine {
                    membership_type,
                    transactions,
                    total,
                })
            })
            .collect()
    }

    pub fn snapshot(&self) -> RegistrySnapshot<'_> {
        RegistrySnapshot {
            members: self.view_members(),
            trainers: self.view_trainers(),
            classes: self.view_classes(),
            transactions: self.view_transactions(),
            total_revenue: self.generate_revenue_report(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
