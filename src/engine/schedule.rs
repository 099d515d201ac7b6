use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::PlanOutcome;

/// one simulated month, appended once and never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    /// 1-based month counter
    pub sequence: u32,
    /// first day of the simulated month
    pub period_date: NaiveDate,
    /// debt remaining after this month's payment
    pub closing_balance: Money,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub expenses: Money,
    pub income: Money,
    pub bonus_applied: Money,
    /// cash available for debt service; negative in deficit months
    pub surplus: Money,
    /// interest collected up to and including this month
    pub cumulative_interest: Money,
}

/// full output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentSchedule {
    pub principal: Money,
    pub annual_rate: Rate,
    pub start_date: NaiveDate,
    pub periods: Vec<PeriodRecord>,
    pub total_interest: Money,
    pub total_paid: Money,
}

impl RepaymentSchedule {
    pub(crate) fn new(
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
        periods: Vec<PeriodRecord>,
    ) -> Self {
        let total_interest = periods.iter().map(|p| p.interest_portion).sum();
        let total_paid = periods.iter().map(|p| p.payment).sum();

        Self {
            principal,
            annual_rate,
            start_date,
            periods,
            total_interest,
            total_paid,
        }
    }

    pub(crate) fn empty(principal: Money, annual_rate: Rate, start_date: NaiveDate) -> Self {
        Self::new(principal, annual_rate, start_date, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// fetch a period by its 1-based sequence number
    pub fn period(&self, sequence: u32) -> Option<&PeriodRecord> {
        self.periods.get(sequence.checked_sub(1)? as usize)
    }

    /// debt remaining after the last simulated month
    pub fn final_balance(&self) -> Money {
        self.periods
            .last()
            .map(|p| p.closing_balance)
            .unwrap_or(self.principal)
    }

    pub fn is_paid_off(&self) -> bool {
        self.periods
            .last()
            .map(|p| p.closing_balance.is_zero())
            .unwrap_or(false)
    }

    /// month the debt reaches zero, when it does
    pub fn payoff_date(&self) -> Option<NaiveDate> {
        if self.is_paid_off() {
            self.periods.last().map(|p| p.period_date)
        } else {
            None
        }
    }

    pub fn outcome(&self) -> PlanOutcome {
        if self.periods.is_empty() {
            PlanOutcome::Empty
        } else if self.is_paid_off() {
            PlanOutcome::PaidOff
        } else {
            PlanOutcome::HorizonReached
        }
    }

    pub fn total_principal_paid(&self) -> Money {
        self.periods.iter().map(|p| p.principal_portion).sum()
    }

    /// the split behind the classic principal-vs-interest chart
    pub fn principal_vs_interest(&self) -> (Money, Money) {
        (self.total_principal_paid(), self.total_interest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(sequence: u32, closing: i64, interest: i64, cumulative: i64) -> PeriodRecord {
        PeriodRecord {
            sequence,
            period_date: date(2024, sequence, 1),
            closing_balance: Money::from_major(closing),
            payment: Money::from_major(50_000),
            principal_portion: Money::from_major(45_000),
            interest_portion: Money::from_major(interest),
            expenses: Money::from_major(150_000),
            income: Money::from_major(200_000),
            bonus_applied: Money::ZERO,
            surplus: Money::from_major(50_000),
            cumulative_interest: Money::from_major(cumulative),
        }
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = RepaymentSchedule::empty(
            Money::from_major(100_000),
            Rate::ZERO,
            date(2024, 1, 1),
        );

        assert!(schedule.is_empty());
        assert!(!schedule.is_paid_off());
        assert_eq!(schedule.outcome(), PlanOutcome::Empty);
        assert_eq!(schedule.final_balance(), Money::from_major(100_000));
        assert_eq!(schedule.payoff_date(), None);
    }

    #[test]
    fn test_summaries_and_accessors() {
        let schedule = RepaymentSchedule::new(
            Money::from_major(90_000),
            Rate::ZERO,
            date(2024, 1, 1),
            vec![record(1, 45_000, 5_000, 5_000), record(2, 0, 4_500, 9_500)],
        );

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_interest, Money::from_major(9_500));
        assert_eq!(schedule.total_paid, Money::from_major(100_000));
        assert_eq!(schedule.total_principal_paid(), Money::from_major(90_000));
        assert!(schedule.is_paid_off());
        assert_eq!(schedule.outcome(), PlanOutcome::PaidOff);
        assert_eq!(schedule.payoff_date(), Some(date(2024, 2, 1)));

        assert_eq!(schedule.period(1).unwrap().sequence, 1);
        assert_eq!(schedule.period(2).unwrap().sequence, 2);
        assert!(schedule.period(0).is_none());
        assert!(schedule.period(3).is_none());

        let (principal, interest) = schedule.principal_vs_interest();
        assert_eq!(principal, Money::from_major(90_000));
        assert_eq!(interest, Money::from_major(9_500));
    }

    #[test]
    fn test_unfinished_schedule_reports_horizon_reached() {
        let schedule = RepaymentSchedule::new(
            Money::from_major(90_000),
            Rate::ZERO,
            date(2024, 1, 1),
            vec![record(1, 45_000, 5_000, 5_000)],
        );

        assert!(!schedule.is_paid_off());
        assert_eq!(schedule.outcome(), PlanOutcome::HorizonReached);
        assert_eq!(schedule.final_balance(), Money::from_major(45_000));
        assert_eq!(schedule.payoff_date(), None);
    }

    #[test]
    fn test_schedule_json_round_trip() {
        let schedule = RepaymentSchedule::new(
            Money::from_major(90_000),
            Rate::ZERO,
            date(2024, 1, 1),
            vec![record(1, 45_000, 5_000, 5_000)],
        );

        let json = serde_json::to_string(&schedule).unwrap();
        let back: RepaymentSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
