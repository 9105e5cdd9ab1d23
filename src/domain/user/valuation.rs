//! Tier-based money valuation

use rust_decimal::Decimal;
use thiserror::Error;

use super::tier::UserTier;

/// Balance above which Normal users get the higher rate
const NORMAL_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
/// 1.12
const NORMAL_HIGH_RATE: Decimal = Decimal::from_parts(112, 0, 0, false, 2);
/// 1.08
const NORMAL_LOW_RATE: Decimal = Decimal::from_parts(108, 0, 0, false, 2);
/// 1.00
const NORMAL_FLAT_RATE: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
/// 1.20
const SUPER_USER_RATE: Decimal = Decimal::from_parts(120, 0, 0, false, 2);
/// 3.00
const PREMIUM_RATE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// The adjusted balance does not fit in a `Decimal`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The money value is out of range")]
pub struct ValuationError {
    pub money: Decimal,
}

/// Compute the adjusted balance for a tier.
///
/// Normal balances above 100 grow by 12%, below 100 by 8%, and a balance of
/// exactly 100 is kept as is. SuperUser grows by 20%, Premium triples.
/// Every rate carries two decimal places, so the result does too for whole
/// inputs.
pub fn revalue(tier: UserTier, money: Decimal) -> Result<Decimal, ValuationError> {
    let rate = match tier {
        UserTier::Normal if money > NORMAL_THRESHOLD => NORMAL_HIGH_RATE,
        UserTier::Normal if money < NORMAL_THRESHOLD => NORMAL_LOW_RATE,
        UserTier::Normal => NORMAL_FLAT_RATE,
        UserTier::SuperUser => SUPER_USER_RATE,
        UserTier::Premium => PREMIUM_RATE,
    };

    money.checked_mul(rate).ok_or(ValuationError { money })
}
