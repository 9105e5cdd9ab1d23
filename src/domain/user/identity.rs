//! Normalized user identity and duplicate detection

use super::entity::User;

/// Normalize one identity field: surrounding whitespace trimmed, case folded
pub fn normalize_identity_field(value: &str) -> String {
    value.trim().to_lowercase()
}

/// The fields that identify a user for duplicate detection, normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
    pub address: String,
}

impl UserIdentity {
    pub fn new(name: &str, email: &str, address: &str) -> Self {
        Self {
            name: normalize_identity_field(name),
            email: normalize_identity_field(email),
            address: normalize_identity_field(address),
        }
    }
}

impl From<&User> for UserIdentity {
    fn from(user: &User) -> Self {
        Self::new(user.name(), user.email(), user.address())
    }
}

/// Whether `candidate` matches an existing user on name, email and address.
///
/// Stops at the first full match.
pub fn is_duplicate<'a, I>(candidate: &User, existing: I) -> bool
where
    I: IntoIterator<Item = &'a User>,
{
    let identity = UserIdentity::from(candidate);

    existing
        .into_iter()
        .any(|user| UserIdentity::from(user) == identity)
}
