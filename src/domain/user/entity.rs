//! User entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::identity::UserIdentity;
use super::tier::UserTier;
use super::valuation::{revalue, ValuationError};

/// An admitted user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    name: String,
    address: String,
    email: String,
    phone: String,
    /// Balance; after admission this holds the tier-adjusted value
    money: Decimal,
    tier: UserTier,
}

impl User {
    /// Create a new user
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        money: Decimal,
        tier: UserTier,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            email: email.into(),
            phone: phone.into(),
            money,
            tier,
        }
    }

    // Getters

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn money(&self) -> Decimal {
        self.money
    }

    pub fn tier(&self) -> UserTier {
        self.tier
    }

    /// Normalized projection used for duplicate detection
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::from(self)
    }

    /// Replace the balance with its tier-adjusted value.
    ///
    /// On overflow the balance is left untouched.
    pub fn revalue(&mut self) -> Result<(), ValuationError> {
        self.money = revalue(self.tier, self.money)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn create_user(money: Decimal, tier: UserTier) -> User {
        User::new(
            "Valeria Arrieta",
            "Pizzurno 763",
            "vale3@gmail.com",
            "1164874553",
            money,
            tier,
        )
    }

    #[test]
    fn test_new_user() {
        let user = create_user(dec!(100), UserTier::Normal);

        assert_eq!(user.name(), "Valeria Arrieta");
        assert_eq!(user.address(), "Pizzurno 763");
        assert_eq!(user.email(), "vale3@gmail.com");
        assert_eq!(user.phone(), "1164874553");
        assert_eq!(user.money(), dec!(100));
        assert_eq!(user.tier(), UserTier::Normal);
    }

    #[test]
    fn test_revalue_in_place() {
        let mut user = create_user(dec!(110), UserTier::Normal);
        user.revalue().unwrap();
        assert_eq!(user.money(), dec!(123.20));

        let mut premium = create_user(dec!(400), UserTier::Premium);
        premium.revalue().unwrap();
        assert_eq!(premium.money(), dec!(1200));
    }

    #[test]
    fn test_revalue_overflow_keeps_balance() {
        let mut user = create_user(Decimal::MAX, UserTier::Premium);

        assert!(user.revalue().is_err());
        assert_eq!(user.money(), Decimal::MAX);
    }

    #[test]
    fn test_identity_is_normalized() {
        let user = User::new(
            "  Valeria Arrieta ",
            "Pizzurno 763",
            "VALE3@gmail.com",
            "1164874553",
            dec!(1),
            UserTier::Normal,
        );

        let identity = user.identity();
        assert_eq!(identity.name, "valeria arrieta");
        assert_eq!(identity.email, "vale3@gmail.com");
        assert_eq!(identity.address, "pizzurno 763");
    }

    #[test]
    fn test_serialization() {
        let user = create_user(dec!(97.20), UserTier::SuperUser);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["name"], "Valeria Arrieta");
        assert_eq!(json["tier"], "SuperUser");
        assert_eq!(json["money"], "97.20");
    }
}
