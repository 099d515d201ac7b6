use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid amount: {amount}")]
    InvalidAmount { amount: Money },

    #[error("target end date {target} is before start date {start}")]
    TargetBeforeStart { start: NaiveDate, target: NaiveDate },

    #[error("no target end date configured")]
    MissingTargetDate,
}

pub type Result<T> = std::result::Result<T, PlanError>;
