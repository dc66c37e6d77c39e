//! Shared world state for timeline BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use microblog::timeline::{
    adapters::memory::{InMemoryMessageRepository, StubDateTimeProvider},
    domain::TimelineEntry,
    services::{
        EditMessageUseCase, PostMessageUseCase, TimelineServiceResult, ViewTimelineUseCase,
    },
};
use rstest::fixture;

/// Scenario world for posting, editing and viewing messages.
pub struct TimelineWorld {
    /// Repository shared by every use case in the scenario.
    pub repository: Arc<InMemoryMessageRepository>,
    /// Clock the scenario moves with "now is" steps.
    pub clock: Arc<StubDateTimeProvider>,
    /// Result of the last post or edit command.
    pub last_result: Option<TimelineServiceResult<()>>,
    /// Timeline returned by the last view.
    pub displayed_timeline: Option<Vec<TimelineEntry>>,
}

impl TimelineWorld {
    /// Creates a world with an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryMessageRepository::new()),
            clock: Arc::new(StubDateTimeProvider::default()),
            last_result: None,
            displayed_timeline: None,
        }
    }

    /// Builds the post use case over the world's collaborators.
    pub fn post_use_case(
        &self,
    ) -> PostMessageUseCase<InMemoryMessageRepository, StubDateTimeProvider> {
        PostMessageUseCase::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }

    /// Builds the edit use case over the world's collaborators.
    pub fn edit_use_case(
        &self,
    ) -> EditMessageUseCase<InMemoryMessageRepository, StubDateTimeProvider> {
        EditMessageUseCase::new(Arc::clone(&self.repository), Arc::clone(&self.clock))
    }

    /// Builds the timeline use case over the world's repository.
    pub fn view_use_case(&self) -> ViewTimelineUseCase<InMemoryMessageRepository> {
        ViewTimelineUseCase::new(Arc::clone(&self.repository))
    }
}

impl Default for TimelineWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TimelineWorld {
    TimelineWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a `YYYY-MM-DDTHH:MM:SS` timestamp written in a feature file as UTC.
///
/// # Errors
///
/// Returns an error when the text is not a valid timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, eyre::Report> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|err| eyre::eyre!("invalid timestamp '{raw}': {err}"))
}
