use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::entries::{BonusEntry, CashFlowEntry};

/// one month's aggregated cash flows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodFlows {
    pub income: Money,
    pub expenses: Money,
    pub bonus_applied: Money,
}

impl PeriodFlows {
    /// cash available for debt service this month; negative means a deficit
    pub fn surplus(&self) -> Money {
        self.income - self.expenses + self.bonus_applied
    }
}

/// Sum the cash flows active in the month containing `period`. Entries with
/// a non-positive amount are half-filled rows from the input surface and
/// are skipped rather than rejected.
pub fn aggregate(
    period: NaiveDate,
    incomes: &[CashFlowEntry],
    expenses: &[CashFlowEntry],
    bonuses: &[BonusEntry],
) -> PeriodFlows {
    let sum_active = |entries: &[CashFlowEntry]| -> Money {
        entries
            .iter()
            .filter(|e| e.amount.is_positive() && e.is_active(period))
            .map(|e| e.amount)
            .sum()
    };

    let bonus_applied = bonuses
        .iter()
        .filter(|b| b.amount.is_positive() && b.is_active(period))
        .map(|b| b.allocated_amount())
        .sum();

    PeriodFlows {
        income: sum_active(incomes),
        expenses: sum_active(expenses),
        bonus_applied,
    }
}
