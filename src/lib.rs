pub mod calendar;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod entries;
pub mod errors;
pub mod planner;
pub mod solver;
pub mod types;

// re-export key types
pub use config::{PlanConfig, DEFAULT_TARGET_MONTHS, HORIZON_BUFFER_MONTHS};
pub use decimal::{Money, Rate};
pub use engine::{
    simulate, simulate_with_rule, Allocation, PaymentRule, PeriodFlows, PeriodRecord,
    RepaymentSchedule,
};
pub use entries::{BonusEntry, CashFlowEntry};
pub use errors::{PlanError, Result};
pub use planner::Planner;
pub use solver::{
    level_payment, solve_for_target, ReverseCalculationResult, REQUIRED_PAYMENT_STEP,
};
pub use types::{BonusRecurrence, EntryId, PaymentPolicy, PlanOutcome, Recurrence};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
