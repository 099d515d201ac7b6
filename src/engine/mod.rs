pub mod aggregator;
pub mod allocator;
pub mod schedule;

pub use aggregator::{aggregate, PeriodFlows};
pub use allocator::{allocate, Allocation, PaymentRule};
pub use schedule::{PeriodRecord, RepaymentSchedule};

use crate::calendar;
use crate::config::PlanConfig;
use crate::decimal::Money;
use crate::entries::{BonusEntry, CashFlowEntry};
use crate::solver;
use crate::types::PaymentPolicy;

/// resolve the configured policy into a per-run payment rule; the Fixed
/// level payment is sized once here, over the configured planning window
pub fn resolve_rule(config: &PlanConfig) -> PaymentRule {
    match config.payment_policy {
        PaymentPolicy::Auto => PaymentRule::Auto {
            minimum: config.minimum_payment,
        },
        PaymentPolicy::Fixed => PaymentRule::Level {
            payment: solver::level_payment(
                config.principal,
                config.annual_rate,
                config.planning_months(),
            ),
            minimum: config.minimum_payment,
        },
    }
}

/// run a full month-by-month simulation under the configured payment policy
pub fn simulate(
    config: &PlanConfig,
    incomes: &[CashFlowEntry],
    expenses: &[CashFlowEntry],
    bonuses: &[BonusEntry],
) -> RepaymentSchedule {
    simulate_with_rule(config, incomes, expenses, bonuses, resolve_rule(config))
}

/// Run a simulation under a caller-resolved payment rule; this is how a
/// reverse-solved payment feeds back into the engine. A degenerate config
/// (no debt) yields an empty schedule rather than an error, and the loop
/// never produces more periods than the config's horizon.
pub fn simulate_with_rule(
    config: &PlanConfig,
    incomes: &[CashFlowEntry],
    expenses: &[CashFlowEntry],
    bonuses: &[BonusEntry],
    rule: PaymentRule,
) -> RepaymentSchedule {
    let start = calendar::month_start(config.start_date);
    if !config.principal.is_positive() {
        return RepaymentSchedule::empty(config.principal, config.annual_rate, start);
    }

    let monthly_rate = config.monthly_rate();
    let horizon = config.horizon_months();

    let mut balance = config.principal;
    let mut cumulative_interest = Money::ZERO;
    let mut period_date = start;
    let mut periods = Vec::with_capacity(config.planning_months() as usize);

    for sequence in 1..=horizon {
        let flows = aggregate(period_date, incomes, expenses, bonuses);
        let alloc = allocate(balance, monthly_rate, &flows, &rule);
        cumulative_interest += alloc.interest_portion;

        periods.push(PeriodRecord {
            sequence,
            period_date,
            closing_balance: alloc.new_balance,
            payment: alloc.payment,
            principal_portion: alloc.principal_portion,
            interest_portion: alloc.interest_portion,
            expenses: flows.expenses,
            income: flows.income,
            bonus_applied: flows.bonus_applied,
            surplus: flows.surplus(),
            cumulative_interest,
        });

        balance = alloc.new_balance;
        if balance.is_zero() {
            break;
        }
        period_date = calendar::add_months(period_date, 1);
    }

    RepaymentSchedule::new(config.principal, config.annual_rate, start, periods)
}
