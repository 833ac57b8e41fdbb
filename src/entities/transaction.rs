// 💳 Transaction Entity - immutable payment record

use crate::entities::member::{Member, MembershipType};
use crate::error::{RegistryError, Result};
use crate::ids::{EntityId, IdGenerator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A payment made by a member
///
/// Core fields never change after construction. The member's name is copied
/// at payment time so receipts still render after the membership is cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: EntityId,
    member: EntityId,
    member_name: String,
    amount_paid: f64,
    payment_date: DateTime<Utc>,
    membership_type: MembershipType,
}

impl Transaction {
    /// Build a transaction, rejecting non-positive amounts.
    ///
    /// The id is only drawn from the generator once the amount is accepted.
    pub(crate) fn new(
        ids: &mut IdGenerator,
        member: &Member,
        amount_paid: f64,
        payment_date: DateTime<Utc>,
        membership_type: MembershipType,
    ) -> Result<Self> {
        if !amount_paid.is_finite() || amount_paid <= 0.0 {
            return Err(RegistryError::validation("amount must be positive"));
        }

        Ok(Transaction {
            id: ids.next(),
            member: member.id(),
            member_name: member.name().to_string(),
            amount_paid,
            payment_date,
            membership_type,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Id of the paying member
    pub fn member(&self) -> EntityId {
        self.member
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn amount_paid(&self) -> f64 {
        self.amount_paid
    }

    pub fn payment_date(&self) -> DateTime<Utc> {
        self.payment_date
    }

    /// Membership type or service paid for
    pub fn membership_type(&self) -> MembershipType {
        self.membership_type
    }

    pub fn generate_receipt(&self) -> String {
        format!(
            "Receipt for Transaction #{}\n\
             Member: {}\n\
             Membership: {} (${})\n\
             Date: {}\n\
             Amount Paid: ${}",
            self.id,
            self.member_name,
            self.membership_type.code(),
            self.amount_paid,
            self.payment_date.format("%Y-%m-%d"),
            self.amount_paid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::member::FitnessGoal;
    use chrono::TimeZone;

    fn member(ids: &mut IdGenerator) -> Member {
        Member::new(
            ids,
            "Ali".to_string(),
            25,
            MembershipType::Basic,
            FitnessGoal::WeightLoss,
        )
    }

    #[test]
    fn test_transaction_creation() {
        let mut ids = IdGenerator::new();
        let ali = member(&mut ids);
        let now = Utc::now();

        let tx = Transaction::new(&mut ids, &ali, 1000.0, now, MembershipType::Basic).unwrap();

        assert_eq!(tx.id(), EntityId::new(2));
        assert_eq!(tx.member(), ali.id());
        assert_eq!(tx.member_name(), "Ali");
        assert_eq!(tx.amount_paid(), 1000.0);
        assert_eq!(tx.payment_date(), now);
        assert_eq!(tx.membership_type(), MembershipType::Basic);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut ids = IdGenerator::new();
        let ali = member(&mut ids);

        for amount in [0.0, -10.0, f64::NAN] {
            let err = Transaction::new(&mut ids, &ali, amount, Utc::now(), MembershipType::Vip)
                .unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains("amount must be positive"));
        }

        // Rejected attempts do not consume ids
        assert_eq!(ids.issued(), 1);
    }

    #[test]
    fn test_receipt_format() {
        let mut ids = IdGenerator::new();
        let ali = member(&mut ids);
        let paid_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();

        let tx = Transaction::new(&mut ids, &ali, 500.0, paid_at, MembershipType::Premium).unwrap();

        assert_eq!(
            tx.generate_receipt(),
            "Receipt for Transaction #2\n\
             Member: Ali\n\
             Membership: PREMIUM ($500)\n\
             Date: 2024-01-15\n\
             Amount Paid: $500"
        );
    }

    #[test]
    fn test_receipt_keeps_fractional_amount() {
        let mut ids = IdGenerator::new();
        let ali = member(&mut ids);
        let paid_at = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();

        let tx = Transaction::new(&mut ids, &ali, 49.5, paid_at, MembershipType::Basic).unwrap();

        assert!(tx.generate_receipt().ends_with("Amount Paid: $49.5"));
    }
}
