//! Lead identifier synthesis.
//!
//! A lead is ephemeral: its id exists only in the quote confirmation payload
//! and is never persisted. Ids are minted through the narrow [`LeadIdSource`]
//! trait so tests can substitute a fixed source for deterministic output.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix carried by every lead id.
const LEAD_PREFIX: &str = "LEAD-";

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Synthesized identifier for a submitted quote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadId(String);

impl LeadId {
    /// Build a lead id from a millisecond timestamp, encoded as uppercase
    /// base-36 (e.g. `LEAD-MB3K9ZQ1`).
    pub fn from_millis(millis: u128) -> Self {
        Self(format!("{LEAD_PREFIX}{}", encode_base36(millis)))
    }

    /// Parse a lead id from its string form. Accepts only the canonical
    /// `LEAD-` prefix followed by uppercase base-36 digits.
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix(LEAD_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| BASE36_DIGITS.contains(&b)) {
            return None;
        }
        Some(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tracking URL for this lead under the given base.
    pub fn tracking_url(&self, base: &str) -> String {
        format!("{base}/{}", self.0)
    }

    /// Recover a lead id from a tracking URL (the final path segment).
    pub fn from_tracking_url(url: &str) -> Option<Self> {
        Self::parse(url.rsplit('/').next()?)
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn encode_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    // Digits come from BASE36_DIGITS, always valid UTF-8
    String::from_utf8(buf).expect("base36 digits are ASCII")
}

/// Source of lead ids. Implementations must be safe to call from
/// concurrent tool invocations without shared mutable state.
pub trait LeadIdSource: Send + Sync {
    fn mint(&self) -> LeadId;
}

/// Production source: ids derived from the system clock, collision-improbable
/// within a process lifetime.
#[derive(Debug, Default)]
pub struct SystemClockLeadIds;

impl LeadIdSource for SystemClockLeadIds {
    fn mint(&self) -> LeadId {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        LeadId::from_millis(millis)
    }
}
