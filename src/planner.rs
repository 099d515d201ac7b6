use crate::config::PlanConfig;
use crate::decimal::Money;
use crate::engine::{self, PaymentRule, RepaymentSchedule};
use crate::entries::{BonusEntry, CashFlowEntry};
use crate::errors::Result;
use crate::solver::{self, ReverseCalculationResult};
use crate::types::EntryId;

/// One user's planning snapshot: an immutable debt configuration plus the
/// entry lists it is simulated against. The planner holds no results —
/// every call recomputes from current inputs, which is what keeps
/// keystroke-driven recalculation trivially correct.
#[derive(Debug, Clone, PartialEq)]
pub struct Planner {
    config: PlanConfig,
    incomes: Vec<CashFlowEntry>,
    expenses: Vec<CashFlowEntry>,
    bonuses: Vec<BonusEntry>,
}

impl Planner {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            incomes: Vec::new(),
            expenses: Vec::new(),
            bonuses: Vec::new(),
        }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// swap in a new configuration; entry lists are kept
    pub fn set_config(&mut self, config: PlanConfig) {
        self.config = config;
    }

    pub fn incomes(&self) -> &[CashFlowEntry] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[CashFlowEntry] {
        &self.expenses
    }

    pub fn bonuses(&self) -> &[BonusEntry] {
        &self.bonuses
    }

    pub fn add_income(&mut self, entry: CashFlowEntry) -> EntryId {
        let id = entry.id;
        self.incomes.push(entry);
        id
    }

    pub fn add_expense(&mut self, entry: CashFlowEntry) -> EntryId {
        let id = entry.id;
        self.expenses.push(entry);
        id
    }

    pub fn add_bonus(&mut self, entry: BonusEntry) -> EntryId {
        let id = entry.id;
        self.bonuses.push(entry);
        id
    }

    pub fn remove_income(&mut self, id: EntryId) -> bool {
        let before = self.incomes.len();
        self.incomes.retain(|e| e.id != id);
        self.incomes.len() != before
    }

    pub fn remove_expense(&mut self, id: EntryId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    pub fn remove_bonus(&mut self, id: EntryId) -> bool {
        let before = self.bonuses.len();
        self.bonuses.retain(|e| e.id != id);
        self.bonuses.len() != before
    }

    /// recurring monthly income total
    pub fn monthly_income(&self) -> Money {
        solver::monthly_recurring_total(&self.incomes)
    }

    /// recurring monthly expense total
    pub fn monthly_expenses(&self) -> Money {
        solver::monthly_recurring_total(&self.expenses)
    }

    /// monthly equivalent of the allocated bonus amounts
    pub fn monthly_bonus(&self) -> Money {
        solver::monthly_bonus_total(&self.bonuses)
    }

    /// simulate under the configured payment policy
    pub fn schedule(&self) -> RepaymentSchedule {
        engine::simulate(&self.config, &self.incomes, &self.expenses, &self.bonuses)
    }

    /// reverse-solve the payment needed to hit the configured target date
    pub fn solve(&self) -> Result<ReverseCalculationResult> {
        solver::solve_for_target(&self.config, &self.incomes, &self.expenses, &self.bonuses)
    }

    /// Solve once, then run the full simulation paying the solved amount
    /// each month. Returns both artifacts so callers can show the required
    /// payment next to the schedule it produces.
    pub fn plan_for_target(&self) -> Result<(ReverseCalculationResult, RepaymentSchedule)> {
        let solved = self.solve()?;
        let schedule = engine::simulate_with_rule(
            &self.config,
            &self.incomes,
            &self.expenses,
            &self.bonuses,
            PaymentRule::Target {
                payment: solved.required_monthly_payment,
            },
        );
        Ok((solved, schedule))
    }
}
