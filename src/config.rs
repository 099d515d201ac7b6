use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::decimal::{Money, Rate};
use crate::errors::{PlanError, Result};
use crate::types::PaymentPolicy;

/// planning window assumed when no target end date is configured
pub const DEFAULT_TARGET_MONTHS: u32 = 24;

/// extra months simulated past the target before the loop gives up; absorbs
/// plans the policy cannot retire on time without looping forever
pub const HORIZON_BUFFER_MONTHS: u32 = 24;

/// Immutable snapshot of the debt being planned against. One config drives
/// one simulation run; recalculation after an input change means building a
/// new snapshot and running again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// outstanding debt at the start of the plan
    pub principal: Money,
    /// annual interest rate
    pub annual_rate: Rate,
    pub start_date: NaiveDate,
    pub target_end_date: Option<NaiveDate>,
    pub payment_policy: PaymentPolicy,
    /// lower bound on the monthly payment regardless of policy
    pub minimum_payment: Money,
}

impl PlanConfig {
    /// auto-repayment plan with no target date and no payment floor
    pub fn new(principal: Money, annual_rate: Rate, start_date: NaiveDate) -> Self {
        Self {
            principal,
            annual_rate,
            start_date,
            target_end_date: None,
            payment_policy: PaymentPolicy::Auto,
            minimum_payment: Money::ZERO,
        }
    }

    /// level-payment plan aimed at a target payoff date
    pub fn fixed(
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
        target_end_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            start_date,
            target_end_date: Some(target_end_date),
            payment_policy: PaymentPolicy::Fixed,
            minimum_payment: Money::ZERO,
        }
    }

    /// plan starting today with the default two-year target window
    pub fn with_defaults(principal: Money, annual_rate: Rate, time: &SafeTimeProvider) -> Self {
        let today = time.now().date_naive();
        Self::new(principal, annual_rate, today)
            .with_target(calendar::add_months(today, DEFAULT_TARGET_MONTHS))
    }

    pub fn with_target(mut self, target_end_date: NaiveDate) -> Self {
        self.target_end_date = Some(target_end_date);
        self
    }

    pub fn with_minimum_payment(mut self, minimum_payment: Money) -> Self {
        self.minimum_payment = minimum_payment;
        self
    }

    pub fn with_policy(mut self, payment_policy: PaymentPolicy) -> Self {
        self.payment_policy = payment_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.principal.is_negative() {
            return Err(PlanError::InvalidAmount {
                amount: self.principal,
            });
        }
        if self.minimum_payment.is_negative() {
            return Err(PlanError::InvalidAmount {
                amount: self.minimum_payment,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(PlanError::InvalidConfiguration {
                message: format!("negative interest rate: {}", self.annual_rate),
            });
        }
        if let Some(target) = self.target_end_date {
            if target < self.start_date {
                return Err(PlanError::TargetBeforeStart {
                    start: self.start_date,
                    target,
                });
            }
        }
        Ok(())
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly()
    }

    /// months from start to target, at least 1; `None` when the target is
    /// absent or precedes the start (treated as unset, not as an error)
    pub fn target_months(&self) -> Option<u32> {
        let target = self.target_end_date?;
        if target < self.start_date {
            return None;
        }
        Some(calendar::months_between(target, self.start_date).max(1) as u32)
    }

    /// the window the level payment is sized over
    pub fn planning_months(&self) -> u32 {
        self.target_months().unwrap_or(DEFAULT_TARGET_MONTHS)
    }

    /// hard cap on simulated periods
    pub fn horizon_months(&self) -> u32 {
        self.planning_months() + HORIZON_BUFFER_MONTHS
    }
}
