/// Caller identity asserted by the authentication layer in front of the
/// service. The email is trusted as-is and is the only key used for self
/// lookups, so a caller can never reach another account's private view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    email: String,
}

impl AuthenticatedIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
