//! Settable time source for deterministic tests.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::timeline::ports::DateTimeProvider;

/// [`DateTimeProvider`] that returns a fixed, settable instant.
///
/// Clones share the same instant, so a test can keep a handle and move the
/// clock after handing a clone to a service.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use microblog::timeline::adapters::memory::StubDateTimeProvider;
/// use microblog::timeline::ports::DateTimeProvider;
///
/// let noon = Utc.with_ymd_and_hms(2022, 6, 4, 12, 0, 0)
///     .single()
///     .expect("valid timestamp");
/// let clock = StubDateTimeProvider::new(noon);
/// assert_eq!(clock.now(), noon);
/// ```
#[derive(Debug, Clone)]
pub struct StubDateTimeProvider {
    now: Arc<RwLock<DateTime<Utc>>>,
}

impl StubDateTimeProvider {
    /// Creates a provider fixed at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(RwLock::new(now)),
        }
    }

    /// Moves the provider to a new instant.
    pub fn set_now(&self, now: DateTime<Utc>) {
        match self.now.write() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }
}

impl Default for StubDateTimeProvider {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl DateTimeProvider for StubDateTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        match self.now.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
