//! Then steps for timeline BDD scenarios.

use super::world::{TimelineWorld, parse_timestamp, run_async};
use microblog::timeline::{
    domain::{Message, MessageId, MessageTextError},
    ports::{MessageRepository, MessageRepositoryError},
    services::{TimelineServiceError, TimelineServiceResult},
};
use rstest_bdd_macros::then;

fn last_result(world: &TimelineWorld) -> Result<&TimelineServiceResult<()>, eyre::Report> {
    world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no command was issued in this scenario"))
}

fn stored_message(world: &TimelineWorld, id: &str) -> Result<Option<Message>, eyre::Report> {
    run_async(world.repository.find_by_id(&MessageId::new(id)))
        .map_err(|err| eyre::eyre!("lookup of '{id}' failed: {err}"))
}

#[then(r#"message "{id}" by "{author}" reads "{text}" published at "{timestamp}""#)]
fn message_reads(
    world: &TimelineWorld,
    id: String,
    author: String,
    text: String,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let expected_time = parse_timestamp(&timestamp)?;
    let message =
        stored_message(world, &id)?.ok_or_else(|| eyre::eyre!("message '{id}' is not stored"))?;
    if message.author().as_str() != author {
        return Err(eyre::eyre!(
            "expected author '{author}', found '{}'",
            message.author()
        ));
    }
    if message.text().as_str() != text {
        return Err(eyre::eyre!(
            "expected text '{text}', found '{}'",
            message.text()
        ));
    }
    if message.published_at() != expected_time {
        return Err(eyre::eyre!(
            "expected publication at {expected_time}, found {}",
            message.published_at()
        ));
    }
    Ok(())
}

#[then(r#"message "{id}" does not exist"#)]
fn message_does_not_exist(world: &TimelineWorld, id: String) -> Result<(), eyre::Report> {
    if let Some(message) = stored_message(world, &id)? {
        return Err(eyre::eyre!("expected no message '{id}', found {message:?}"));
    }
    Ok(())
}

#[then("the command is refused because the text is empty")]
fn refused_as_empty(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TimelineServiceError::Text(MessageTextError::Empty))
    ) {
        return Err(eyre::eyre!("expected empty text error, got {result:?}"));
    }
    Ok(())
}

#[then("the command is refused because the text is too long")]
fn refused_as_too_long(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TimelineServiceError::Text(MessageTextError::TooLong { .. }))
    ) {
        return Err(eyre::eyre!("expected text too long error, got {result:?}"));
    }
    Ok(())
}

#[then("the command is refused because the message was not found")]
fn refused_as_not_found(world: &TimelineWorld) -> Result<(), eyre::Report> {
    let result = last_result(world)?;
    if !matches!(
        result,
        Err(TimelineServiceError::Repository(
            MessageRepositoryError::NotFound(_)
        ))
    ) {
        return Err(eyre::eyre!("expected not found error, got {result:?}"));
    }
    Ok(())
}

#[then("the timeline shows {count:usize} messages")]
fn timeline_shows(world: &TimelineWorld, count: usize) -> Result<(), eyre::Report> {
    let timeline = world
        .displayed_timeline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no timeline was viewed in this scenario"))?;
    if timeline.len() != count {
        return Err(eyre::eyre!(
            "expected {count} timeline entries, found {}",
            timeline.len()
        ));
    }
    Ok(())
}

#[then(r#"timeline entry {position:usize} reads "{text}" published at "{timestamp}""#)]
fn timeline_entry_reads(
    world: &TimelineWorld,
    position: usize,
    text: String,
    timestamp: String,
) -> Result<(), eyre::Report> {
    let expected_time = parse_timestamp(&timestamp)?;
    let entry = world
        .displayed_timeline
        .as_ref()
        .and_then(|timeline| timeline.get(position.saturating_sub(1)))
        .ok_or_else(|| eyre::eyre!("timeline has no entry {position}"))?;
    if entry.text != text {
        return Err(eyre::eyre!(
            "expected entry {position} to read '{text}', found '{}'",
            entry.text
        ));
    }
    if entry.published_at != expected_time {
        return Err(eyre::eyre!(
            "expected entry {position} published at {expected_time}, found {}",
            entry.published_at
        ));
    }
    Ok(())
}
