//! Entry identifiers
//!
//! Ids are v4 UUIDs drawn from the operating system's random source. If that
//! source cannot be read, a time-seeded pseudo-random generator fills the
//! same 16 bytes so the result is still a syntactically valid v4 UUID.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

/// Number of characters shown by [`EntryId::short`]
pub const SHORT_ID_LEN: usize = 8;

/// Unique, stable identifier of a budget entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a new random ID
    pub fn new() -> Self {
        let mut bytes = [0u8; 16];
        if getrandom::fill(&mut bytes).is_err() {
            tracing::debug!("OS random source unavailable, using fallback id generator");
            fallback_fill(&mut bytes);
        }
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Leading characters of the hyphenated form, for compact listings
    pub fn short(&self) -> String {
        self.0.to_string()[..SHORT_ID_LEN].to_string()
    }

    /// Whether the hyphenated form starts with `prefix` (case-insensitive)
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.to_string().starts_with(&prefix.to_ascii_lowercase())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

fn fallback_fill(bytes: &mut [u8; 16]) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let count = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
    let seed = nanos ^ count.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(seed).fill_bytes(bytes);
}
