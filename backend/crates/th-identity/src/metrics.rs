use metrics::counter;

/// Counters for account lifecycle events
#[derive(Clone)]
pub struct IdentityMetrics {
    prefix: &'static str,
}

impl IdentityMetrics {
    pub fn new() -> Self {
        Self {
            prefix: "th_identity",
        }
    }

    pub fn token_rotated(&self) {
        counter!(format!("{}.tokens.rotated", self.prefix)).increment(1);
    }

    pub fn token_issued(&self) {
        counter!(format!("{}.tokens.issued", self.prefix)).increment(1);
    }

    /// `outcome` is one of `verified`, `already_verified`, `rejected`
    pub fn verification(&self, outcome: &str) {
        counter!(format!("{}.verifications.{}", self.prefix, outcome)).increment(1);
    }

    pub fn verification_started(&self) {
        counter!(format!("{}.verifications.started", self.prefix)).increment(1);
    }

    pub fn deactivated(&self) {
        counter!(format!("{}.deactivations", self.prefix)).increment(1);
    }

    pub fn reactivated(&self) {
        counter!(format!("{}.reactivations", self.prefix)).increment(1);
    }

    /// `result` is one of `changed`, `unchanged`, `rejected`
    pub fn credential_update(&self, result: &str) {
        counter!(format!("{}.credential_updates.{}", self.prefix, result)).increment(1);
    }

    pub fn notification_enqueued(&self, kind: &str) {
        counter!(format!("{}.notifications.enqueued", self.prefix)).increment(1);
        counter!(format!("{}.notifications.enqueued.{}", self.prefix, kind)).increment(1);
    }
}

impl Default for IdentityMetrics {
    fn default() -> Self {
        Self::new()
    }
}
