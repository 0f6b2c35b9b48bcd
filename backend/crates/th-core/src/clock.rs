//! Timestamps at the precision they are persisted with.
//!
//! Storage keeps milliseconds, so values are truncated here and a saved
//! identity reloads equal to the one in memory.

use chrono::{DateTime, SubsecRound, Utc};

const STORED_SUBSEC_DIGITS: u16 = 3;

pub fn now() -> DateTime<Utc> {
    truncate(Utc::now())
}

pub fn truncate(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(STORED_SUBSEC_DIGITS)
}
