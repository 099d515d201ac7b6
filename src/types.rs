use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a cash-flow entry
pub type EntryId = Uuid;

/// how often an income or expense repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    /// every month on/after the effective month
    Monthly,
    /// the effective month's calendar month, every year on/after the effective year
    Yearly,
    /// the exact effective month only
    Once,
}

/// how a bonus repeats across years
///
/// Bonuses have no free-form recurrence; the two variants cover the
/// behaviors seen in practice (a summer bonus that lands every June, or a
/// one-off windfall). `EveryYear` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BonusRecurrence {
    /// the effective month's calendar month, every year on/after the effective year
    #[default]
    EveryYear,
    /// the exact effective month only
    Once,
}

/// payment policy for a repayment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentPolicy {
    /// put every available surplus toward the debt, floored at the minimum payment
    #[default]
    Auto,
    /// pay a level amortization amount each month, floored at the minimum payment
    Fixed,
}

/// how a simulation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// balance reached zero within the horizon
    PaidOff,
    /// horizon exhausted with debt remaining
    HorizonReached,
    /// degenerate input, nothing simulated
    Empty,
}
