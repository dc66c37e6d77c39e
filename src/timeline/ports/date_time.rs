//! Time source port used to stamp published and edited messages.

use chrono::{DateTime, Utc};
use mockable::Clock;

/// Provides the current time to the use cases.
///
/// Every [`mockable::Clock`] is a provider, so production code can pass
/// [`mockable::DefaultClock`] directly.
///
/// # Examples
///
/// ```
/// use microblog::timeline::ports::DateTimeProvider;
/// use mockable::DefaultClock;
///
/// let before = chrono::Utc::now();
/// assert!(DefaultClock.now() >= before);
/// ```
pub trait DateTimeProvider: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

impl<C> DateTimeProvider for C
where
    C: Clock + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self.utc()
    }
}
