use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::config::PlanConfig;
use crate::decimal::{Money, Rate};
use crate::entries::{BonusEntry, CashFlowEntry};
use crate::errors::{PlanError, Result};
use crate::types::Recurrence;

/// the published required payment is ceiled to this step for readability
pub const REQUIRED_PAYMENT_STEP: u32 = 1_000;

/// outcome of a reverse solve: the payment needed to hit the target date,
/// and whether the household's recurring cash flow can sustain it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReverseCalculationResult {
    pub required_monthly_payment: Money,
    pub average_monthly_disposable: Money,
    pub is_achievable: bool,
    /// zero when achievable
    pub shortfall_per_month: Money,
    pub target_payoff_date: NaiveDate,
    pub term_months: u32,
}

/// Level monthly payment that retires `principal` over `months` at the
/// given annual rate: the standard amortization formula
/// `P * r * (1+r)^n / ((1+r)^n - 1)`, degrading to straight division when
/// the rate is zero.
pub fn level_payment(principal: Money, annual_rate: Rate, months: u32) -> Money {
    let months = months.max(1);
    let r = annual_rate.monthly().as_decimal();

    if r.is_zero() {
        return principal / Decimal::from(months);
    }

    let base = Decimal::ONE + r;
    let mut compound = Decimal::ONE;
    for _ in 0..months {
        compound *= base;
    }

    let numerator = principal.as_decimal() * r * compound;
    let denominator = compound - Decimal::ONE;
    Money::from_decimal(numerator / denominator)
}

/// Derive the payment required to retire the debt by the configured target
/// date and compare it against average recurring cash flow. Errors where
/// the source UI silently hid the result: a missing or inverted target.
pub fn solve_for_target(
    config: &PlanConfig,
    incomes: &[CashFlowEntry],
    expenses: &[CashFlowEntry],
    bonuses: &[BonusEntry],
) -> Result<ReverseCalculationResult> {
    let target = config.target_end_date.ok_or(PlanError::MissingTargetDate)?;
    if target < config.start_date {
        return Err(PlanError::TargetBeforeStart {
            start: config.start_date,
            target,
        });
    }

    let term_months = calendar::months_between(target, config.start_date).max(1) as u32;
    let required_monthly_payment = level_payment(config.principal, config.annual_rate, term_months)
        .ceil_to_step(REQUIRED_PAYMENT_STEP);

    let average_monthly_disposable = average_monthly_disposable(incomes, expenses, bonuses);
    let is_achievable = average_monthly_disposable >= required_monthly_payment;
    let shortfall_per_month = if is_achievable {
        Money::ZERO
    } else {
        required_monthly_payment - average_monthly_disposable
    };

    Ok(ReverseCalculationResult {
        required_monthly_payment,
        average_monthly_disposable,
        is_achievable,
        shortfall_per_month,
        target_payoff_date: target,
        term_months,
    })
}

/// recurring monthly entries only; yearly and one-off entries are excluded
/// from the average on purpose
pub fn monthly_recurring_total(entries: &[CashFlowEntry]) -> Money {
    entries
        .iter()
        .filter(|e| e.recurrence == Recurrence::Monthly && e.amount.is_positive())
        .map(|e| e.amount)
        .sum()
}

/// every bonus contributes a twelfth of its allocated share per month
pub fn monthly_bonus_total(bonuses: &[BonusEntry]) -> Money {
    let allocated: Money = bonuses
        .iter()
        .filter(|b| b.amount.is_positive())
        .map(|b| b.allocated_amount())
        .sum();
    allocated / Decimal::from(12)
}

/// average cash left for debt service in a typical month
pub fn average_monthly_disposable(
    incomes: &[CashFlowEntry],
    expenses: &[CashFlowEntry],
    bonuses: &[BonusEntry],
) -> Money {
    monthly_recurring_total(incomes) - monthly_recurring_total(expenses)
        + monthly_bonus_total(bonuses)
}
