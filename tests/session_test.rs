//! Tests for session board ownership and restart ordering.

mod common;

use std::sync::Arc;

use common::FakeSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trivia_board::{
    BoardBuildError, BoardBuilder, BoardError, BoardSettings, BuildOutcome, CategoryId, Coord,
    GameSession, RevealState,
};

fn builder(source: FakeSource) -> BoardBuilder<FakeSource> {
    BoardBuilder::new(Arc::new(source), BoardSettings::default())
}

#[test]
fn test_interact_without_board() {
    let mut session = GameSession::new();
    assert_eq!(session.interact(Coord::new(0, 0)), Err(BoardError::NoBoard));
}

#[tokio::test]
async fn test_restart_installs_board() {
    let builder = builder(FakeSource::uniform(10, 5));
    let mut session = GameSession::new();

    let board = session
        .restart(&builder, &mut StdRng::seed_from_u64(0))
        .await
        .expect("Restart should succeed");
    assert_eq!(board.width(), 6);
    assert!(!session.is_building());

    let question = session
        .interact(Coord::new(0, 0))
        .expect("Cell exists")
        .to_string();
    assert!(question.starts_with('Q'));
}

#[tokio::test]
async fn test_failed_restart_keeps_previous_board() {
    let good = builder(FakeSource::uniform(10, 5));
    let mut session = GameSession::new();
    session
        .restart(&good, &mut StdRng::seed_from_u64(0))
        .await
        .expect("First board");
    session.interact(Coord::new(2, 3)).expect("Cell exists");
    let before = session.board().cloned();

    // Every category is short of clues.
    let bad = builder(FakeSource::uniform(10, 3));
    let err = session
        .restart(&bad, &mut StdRng::seed_from_u64(1))
        .await
        .expect_err("Undersized categories");
    assert!(matches!(err, BoardBuildError::CategoryLoad(_)));

    assert_eq!(session.board().cloned(), before);
    assert!(session.last_error().is_some());
    assert!(!session.is_building());
    assert_eq!(
        session
            .board()
            .and_then(|b| b.clue(Coord::new(2, 3)))
            .map(|c| c.reveal_state()),
        Some(RevealState::ShowingQuestion)
    );
}

#[tokio::test]
async fn test_stale_build_is_discarded() {
    let builder = builder(FakeSource::uniform(50, 5));
    let mut session = GameSession::new();

    let old = session.begin_build();
    let new = session.begin_build();
    assert!(new > old);

    let old_board = builder.build(&mut StdRng::seed_from_u64(1)).await.expect("Old board");
    let new_board = builder.build(&mut StdRng::seed_from_u64(2)).await.expect("New board");
    let new_ids = new_board.category_ids();

    // The newer build lands first, then the older one straggles in.
    assert!(matches!(
        session.complete_build(new, Ok(new_board)),
        BuildOutcome::Installed
    ));
    assert!(matches!(
        session.complete_build(old, Ok(old_board)),
        BuildOutcome::Discarded
    ));

    let installed: Vec<CategoryId> = session.board().map(|b| b.category_ids()).unwrap_or_default();
    assert_eq!(installed, new_ids);
}

#[tokio::test]
async fn test_superseded_build_cannot_overwrite_newer_board() {
    let builder = builder(FakeSource::uniform(50, 5));
    let mut session = GameSession::new();

    let old = session.begin_build();
    let old_board = builder.build(&mut StdRng::seed_from_u64(1)).await.expect("Old board");

    let new = session.begin_build();
    assert!(session.is_building());

    // The old build finishes while the new one is still running.
    assert!(matches!(
        session.complete_build(old, Ok(old_board)),
        BuildOutcome::Discarded
    ));
    assert!(session.board().is_none());
    assert!(session.is_building());

    let new_board = builder.build(&mut StdRng::seed_from_u64(2)).await.expect("New board");
    assert!(matches!(
        session.complete_build(new, Ok(new_board)),
        BuildOutcome::Installed
    ));
    assert!(!session.is_building());
}

#[tokio::test]
async fn test_begin_build_clears_last_error() {
    let bad = builder(FakeSource::uniform(3, 5));
    let mut session = GameSession::new();

    let ticket = session.begin_build();
    let result = bad.build(&mut StdRng::seed_from_u64(0)).await;
    assert!(matches!(
        session.complete_build(ticket, result),
        BuildOutcome::Failed(BoardBuildError::NotEnoughCategories(_))
    ));
    assert!(session.last_error().is_some());

    session.begin_build();
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_restart_supersedes_pending_ticket_and_clears_error() {
    let builder = builder(FakeSource::uniform(50, 5));
    let mut session = GameSession::new();

    let failed = session.begin_build();
    session.complete_build(failed, Err(BoardBuildError::Superseded));
    assert!(session.last_error().is_some());
    let pending = session.begin_build();

    let ids = session
        .restart(&builder, &mut StdRng::seed_from_u64(4))
        .await
        .expect("Restart should succeed")
        .category_ids();
    assert!(!session.is_building());
    assert!(session.last_error().is_none());

    // The build started before the restart lands late and is ignored.
    let late = builder.build(&mut StdRng::seed_from_u64(9)).await.expect("Late board");
    assert!(matches!(
        session.complete_build(pending, Ok(late)),
        BuildOutcome::Discarded
    ));
    assert_eq!(session.board().map(|b| b.category_ids()), Some(ids));
}
