use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::engine::aggregator::PeriodFlows;

/// Payment policy resolved for a single run. `Auto` and `Level` come from
/// the configured policy; `Target` carries a reverse-solved payment and is
/// never floored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaymentRule {
    /// pay the whole surplus, floored at `minimum`
    Auto { minimum: Money },
    /// pay a precomputed level amortization amount, floored at `minimum`
    Level { payment: Money, minimum: Money },
    /// pay the solver's required amount
    Target { payment: Money },
}

impl PaymentRule {
    fn floor(&self) -> Money {
        match self {
            PaymentRule::Auto { minimum } | PaymentRule::Level { minimum, .. } => *minimum,
            PaymentRule::Target { .. } => Money::ZERO,
        }
    }
}

/// one month's interest accrual and payment split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub payment: Money,
    pub principal_portion: Money,
    /// interest actually collected this month
    pub interest_portion: Money,
    /// interest charged on the opening balance, collected or not
    pub accrued_interest: Money,
    /// unpaid interest added onto the balance
    pub capitalized: Money,
    pub new_balance: Money,
}

/// Split one month's payment into interest and principal under the active
/// rule. Balance and rate are non-negative by construction; the surplus may
/// be negative.
pub fn allocate(
    balance: Money,
    monthly_rate: Rate,
    flows: &PeriodFlows,
    rule: &PaymentRule,
) -> Allocation {
    let accrued = (balance * monthly_rate).max(Money::ZERO);
    let surplus = flows.surplus();

    // nothing to pay from and no floor forcing a payment: the whole
    // accrual capitalizes and no interest is recorded as collected
    let no_cash = !surplus.is_positive();
    let unfloored = rule.floor().is_zero() && !matches!(rule, PaymentRule::Target { .. });
    if no_cash && unfloored {
        return Allocation {
            payment: Money::ZERO,
            principal_portion: Money::ZERO,
            interest_portion: Money::ZERO,
            accrued_interest: accrued,
            capitalized: accrued,
            new_balance: balance + accrued,
        };
    }

    // never pay beyond what would settle the debt this month
    let settlement = balance + accrued;
    let payment = match *rule {
        PaymentRule::Auto { minimum } => minimum.max(surplus.min(settlement)),
        PaymentRule::Level { payment, minimum } => minimum.max(payment.min(settlement)),
        PaymentRule::Target { payment } => payment.min(settlement),
    }
    .max(Money::ZERO);

    if payment < accrued && balance > payment {
        // payment cannot even cover interest: all of it is interest and
        // the shortfall capitalizes
        Allocation {
            payment,
            principal_portion: Money::ZERO,
            interest_portion: payment,
            accrued_interest: accrued,
            capitalized: accrued - payment,
            new_balance: balance + accrued - payment,
        }
    } else {
        let interest_portion = accrued.min(payment);
        let principal_portion = payment - interest_portion;
        Allocation {
            payment,
            principal_portion,
            interest_portion,
            accrued_interest: accrued,
            capitalized: Money::ZERO,
            new_balance: (balance - principal_portion).max(Money::ZERO),
        }
    }
}
