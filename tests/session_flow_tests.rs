#![allow(clippy::unwrap_used, clippy::panic)]

use anyhow::Result;
use mind_trainer_bot::bot::screens;
use mind_trainer_bot::content::quiz;
use mind_trainer_bot::database::connection::DatabaseManager;
use mind_trainer_bot::database::models::TestResult;
use mind_trainer_bot::session::{ActivityKind, AnswerOutcome, Run, SessionState, SessionStore, Tier};
use rand::{rngs::StdRng, SeedableRng};
use std::time::{Duration, Instant};
use tempfile::{tempdir, TempDir};

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db = DatabaseManager::new(&database_url).await?;
    db.run_migrations().await?;

    Ok((db, temp_dir))
}

async fn current_correct(sessions: &SessionStore, user_id: i64) -> usize {
    match sessions.get(user_id).await {
        SessionState::QuizInProgress(run) => run.current().unwrap().correct,
        other => panic!("expected a quiz in progress, got {}", other.name()),
    }
}

fn wrong_choice(correct: usize) -> usize {
    if correct == 0 {
        1
    } else {
        0
    }
}

#[tokio::test]
async fn test_quiz_run_is_scored_and_saved() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let sessions = SessionStore::new();
    let user_id = 100;

    let module = quiz::find_module("module1").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let started = Instant::now();
    let run = Run::quiz(module, &mut rng, started);
    assert_eq!(run.total(), 5);
    sessions.set(user_id, SessionState::for_run(run)).await;

    for number in 2..=5 {
        let correct = current_correct(&sessions, user_id).await;
        match sessions
            .submit_answer(user_id, ActivityKind::Quiz, correct, Instant::now())
            .await
        {
            AnswerOutcome::Next { verdict, number: shown, total, .. } => {
                assert!(verdict.correct);
                assert_eq!(shown, number);
                assert_eq!(total, 5);
            }
            _ => panic!("quiz ended early"),
        }
    }

    let correct = current_correct(&sessions, user_id).await;
    let summary = match sessions
        .submit_answer(
            user_id,
            ActivityKind::Quiz,
            wrong_choice(correct),
            started + Duration::from_secs(50),
        )
        .await
    {
        AnswerOutcome::Finished { verdict, summary } => {
            assert!(!verdict.correct);
            summary
        }
        _ => panic!("quiz should be finished"),
    };

    assert_eq!((summary.score, summary.total), (4, 5));
    assert_eq!(summary.tier, Tier::Best);
    assert_eq!(summary.test_type(), "quiz_module1");
    assert!(screens::result(&summary).contains("4/5 (80%)"));

    // The finished run leaves no session behind.
    assert!(sessions.is_empty().await);

    summary.persist(&db.pool, user_id).await?;
    let history = TestResult::find_by_user(&db.pool, user_id, 10).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].test_type, "quiz_module1");
    assert_eq!(history[0].score, 4);
    assert_eq!(history[0].total_questions, 5);
    assert_eq!(history[0].completion_time, None);

    Ok(())
}

#[tokio::test]
async fn test_unsaved_result_still_ends_the_run() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let sessions = SessionStore::new();
    let user_id = 150;

    let mut rng = StdRng::seed_from_u64(11);
    let run = Run::attention(&mut rng, Instant::now());
    let total = run.total();
    sessions.set(user_id, SessionState::for_run(run)).await;

    let mut summary = None;
    for _ in 0..total {
        if let AnswerOutcome::Finished { summary: s, .. } = sessions
            .submit_answer(user_id, ActivityKind::Attention, 0, Instant::now())
            .await
        {
            summary = Some(s);
        }
    }
    let summary = summary.unwrap();

    // The store goes away between the last answer and the write.
    db.pool.close().await;
    assert!(!summary.finalize(&db.pool, user_id).await);

    assert_eq!(sessions.len().await, 0);
    assert!(matches!(
        sessions
            .submit_answer(user_id, ActivityKind::Attention, 0, Instant::now())
            .await,
        AnswerOutcome::AlreadyFinished
    ));
    Ok(())
}

#[tokio::test]
async fn test_finalize_saves_result() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    let module = quiz::find_module("module3").unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let started = Instant::now();
    let summary = Run::quiz(module, &mut rng, started).summary(started);

    assert!(summary.finalize(&db.pool, 160).await);
    let history = TestResult::find_by_user(&db.pool, 160, 10).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].test_type, "quiz_module3");
    assert_eq!(history[0].score, 0);
    Ok(())
}

#[tokio::test]
async fn test_late_answers_are_ignored() -> Result<()> {
    let sessions = SessionStore::new();
    let user_id = 200;

    let module = quiz::find_module("module2").unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    sessions
        .set(user_id, SessionState::for_run(Run::quiz(module, &mut rng, Instant::now())))
        .await;

    // A speed-test button pressed during a quiz does not touch the quiz.
    assert!(matches!(
        sessions.submit_answer(user_id, ActivityKind::Speed, 0, Instant::now()).await,
        AnswerOutcome::AlreadyFinished
    ));

    for _ in 0..5 {
        sessions.submit_answer(user_id, ActivityKind::Quiz, 0, Instant::now()).await;
    }

    // Pressing an old button again after the result screen.
    assert!(matches!(
        sessions.submit_answer(user_id, ActivityKind::Quiz, 0, Instant::now()).await,
        AnswerOutcome::AlreadyFinished
    ));
    assert!(matches!(sessions.get(user_id).await, SessionState::MainMenu));
    Ok(())
}

#[tokio::test]
async fn test_speed_run_records_completion_time() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let sessions = SessionStore::new();
    let user_id = 300;

    let mut rng = StdRng::seed_from_u64(3);
    let started = Instant::now();
    let run = Run::speed(&mut rng, started);
    let total = run.total();
    sessions.set(user_id, SessionState::for_run(run)).await;

    let mut summary = None;
    for i in 0..total {
        let now = started + Duration::from_secs(5 * (i as u64 + 1));
        if let AnswerOutcome::Finished { summary: s, .. } =
            sessions.submit_answer(user_id, ActivityKind::Speed, 0, now).await
        {
            summary = Some(s);
        }
    }

    let summary = summary.unwrap();
    assert!(summary.score <= summary.total);
    assert_eq!(summary.elapsed, Duration::from_secs(5 * total as u64));

    let saved = summary.persist(&db.pool, user_id).await?;
    assert_eq!(saved.test_type, "speed");
    assert_eq!(saved.completion_time, Some(5.0 * total as f64));
    Ok(())
}

#[tokio::test]
async fn test_sessions_are_per_user() {
    let sessions = SessionStore::new();
    sessions.set(1, SessionState::AiChat).await;
    sessions.set(2, SessionState::QuizSelection).await;

    assert!(sessions.get(1).await.accepts_ai_questions());
    assert!(!sessions.get(2).await.accepts_ai_questions());

    sessions.clear(1).await;
    assert!(matches!(sessions.get(1).await, SessionState::MainMenu));
    assert_eq!(sessions.len().await, 1);
}
