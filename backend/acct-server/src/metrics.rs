use metrics::counter;

/// Lifecycle counters, recorded through the `metrics` facade
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "acct" }
    }

    pub fn account_created(&self) {
        counter!(format!("{}.accounts.created", self.prefix)).increment(1);
    }

    pub fn account_verified(&self) {
        counter!(format!("{}.accounts.verified", self.prefix)).increment(1);
    }

    pub fn login_recorded(&self) {
        counter!(format!("{}.accounts.logins", self.prefix)).increment(1);
    }

    pub fn profile_updated(&self) {
        counter!(format!("{}.accounts.updated", self.prefix)).increment(1);
    }

    /// `code` is the API error code, e.g. `NOT_FOUND`
    pub fn error_occurred(&self, code: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, code.to_lowercase())).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
