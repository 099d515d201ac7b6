use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar;
use crate::decimal::{Money, Rate};
use crate::types::{BonusRecurrence, EntryId, Recurrence};

/// A dated, recurring or one-off cash flow. Incomes and expenses share this
/// type; which side of the ledger it lands on is decided by the list it is
/// passed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowEntry {
    pub id: EntryId,
    pub description: String,
    pub amount: Money,
    pub effective_date: NaiveDate,
    pub recurrence: Recurrence,
}

impl CashFlowEntry {
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        effective_date: NaiveDate,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            effective_date,
            recurrence,
        }
    }

    pub fn monthly(description: impl Into<String>, amount: Money, effective_date: NaiveDate) -> Self {
        Self::new(description, amount, effective_date, Recurrence::Monthly)
    }

    pub fn yearly(description: impl Into<String>, amount: Money, effective_date: NaiveDate) -> Self {
        Self::new(description, amount, effective_date, Recurrence::Yearly)
    }

    pub fn once(description: impl Into<String>, amount: Money, effective_date: NaiveDate) -> Self {
        Self::new(description, amount, effective_date, Recurrence::Once)
    }

    /// does this entry produce a cash flow in the month containing `period`?
    pub fn is_active(&self, period: NaiveDate) -> bool {
        calendar::entry_is_active(self.effective_date, self.recurrence, period)
    }
}

/// A bonus with a fraction earmarked for debt repayment. Only the allocated
/// share reaches the plan; the rest is assumed spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    pub id: EntryId,
    pub description: String,
    pub amount: Money,
    pub effective_date: NaiveDate,
    /// fraction of the amount applied to debt, nominally within [0, 1]
    pub allocation: Rate,
    #[serde(default)]
    pub recurrence: BonusRecurrence,
}

impl BonusEntry {
    /// `allocation_percent` is the familiar 0-100 form
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        effective_date: NaiveDate,
        allocation_percent: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            effective_date,
            allocation: Rate::from_percent(allocation_percent),
            recurrence: BonusRecurrence::default(),
        }
    }

    pub fn with_recurrence(mut self, recurrence: BonusRecurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// the share of the bonus applied to debt, with out-of-range
    /// allocations clamped into [0%, 100%]
    pub fn allocated_amount(&self) -> Money {
        let hundred_percent = Rate::from_decimal(Decimal::ONE);
        let allocation = self.allocation.clamp(Rate::ZERO, hundred_percent);
        self.amount * allocation
    }

    /// does this bonus land in the month containing `period`?
    pub fn is_active(&self, period: NaiveDate) -> bool {
        calendar::bonus_is_active(self.effective_date, self.recurrence, period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_entries_mint_unique_ids() {
        let a = CashFlowEntry::monthly("salary", Money::from_major(300_000), date(2024, 1, 1));
        let b = CashFlowEntry::monthly("salary", Money::from_major(300_000), date(2024, 1, 1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_bonus_allocated_amount() {
        let bonus = BonusEntry::new("summer bonus", Money::from_major(500_000), date(2024, 6, 15), dec!(50));
        assert_eq!(bonus.allocated_amount(), Money::from_major(250_000));
    }

    #[test]
    fn test_bonus_allocation_clamped() {
        let over = BonusEntry::new("typo", Money::from_major(100_000), date(2024, 6, 15), dec!(150));
        assert_eq!(over.allocated_amount(), Money::from_major(100_000));

        let negative = BonusEntry::new("typo", Money::from_major(100_000), date(2024, 6, 15), dec!(-10));
        assert_eq!(negative.allocated_amount(), Money::ZERO);
    }

    #[test]
    fn test_bonus_default_recurrence_repeats_yearly() {
        let bonus = BonusEntry::new("winter bonus", Money::from_major(500_000), date(2024, 12, 15), dec!(50));
        assert!(bonus.is_active(date(2024, 12, 1)));
        assert!(bonus.is_active(date(2026, 12, 1)));
        assert!(!bonus.is_active(date(2024, 11, 1)));

        let once = bonus.with_recurrence(BonusRecurrence::Once);
        assert!(once.is_active(date(2024, 12, 1)));
        assert!(!once.is_active(date(2025, 12, 1)));
    }

    #[test]
    fn test_entry_activation_delegates_to_calendar() {
        let rent = CashFlowEntry::monthly("rent", Money::from_major(80_000), date(2024, 2, 10));
        assert!(!rent.is_active(date(2024, 1, 1)));
        assert!(rent.is_active(date(2024, 2, 1)));
        assert!(rent.is_active(date(2025, 8, 1)));
    }
}
