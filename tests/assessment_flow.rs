//! Integration tests for the assessment flow.
//!
//! Walks the built-in question bank through the runner, scores the answers
//! and reads them back from history, using in-memory adapters throughout.

use std::sync::Arc;

use trader_psyche::adapters::{
    FileKeyValueStore, InMemoryEventBus, InMemoryKeyValueStore, KeyValueResultRepository,
    ManualClock, SequentialIdGenerator, StaticQuestionCatalog,
};
use trader_psyche::application::{
    AssessmentRunner, ResultHistoryHandler, ScoreAssessmentHandler, StartAssessmentCommand,
    StartAssessmentHandler,
};
use trader_psyche::domain::assessment::{Aspect, AssessmentType, Question};
use trader_psyche::domain::foundation::{Percentage, Timestamp};
use trader_psyche::domain::scoring::ScoreCategory;
use trader_psyche::ports::KeyValueStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct App {
    bus: Arc<InMemoryEventBus>,
    clock: Arc<ManualClock>,
    start: StartAssessmentHandler,
    score: ScoreAssessmentHandler,
    history: ResultHistoryHandler,
}

fn app_with_store(store: Arc<dyn KeyValueStore>) -> App {
    let bus = Arc::new(InMemoryEventBus::new());
    let clock = Arc::new(ManualClock::new(Timestamp::from_unix_secs(1_700_000_000)));
    let repository = Arc::new(KeyValueResultRepository::new(
        store,
        Arc::new(SequentialIdGenerator::new("result")),
        clock.clone(),
    ));

    App {
        start: StartAssessmentHandler::new(
            Arc::new(StaticQuestionCatalog::new()),
            bus.clone(),
            clock.clone(),
        ),
        score: ScoreAssessmentHandler::new(repository.clone(), clock.clone()),
        history: ResultHistoryHandler::new(repository),
        bus,
        clock,
    }
}

fn app() -> App {
    app_with_store(Arc::new(InMemoryKeyValueStore::new()))
}

fn option_with_value(question: &Question, value: u8) -> usize {
    question
        .options
        .iter()
        .position(|o| o.value == value)
        .unwrap()
}

/// Answers every question with the option worth `value`.
async fn complete_with(runner: &mut AssessmentRunner, value: u8) {
    loop {
        let choice = option_with_value(runner.current_question(), value);
        runner.answer(choice).await.unwrap();
        if !runner.next().await.unwrap() {
            break;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn best_answers_score_one_hundred_everywhere() {
    let app = app();
    let mut runner = app
        .start
        .handle(StartAssessmentCommand::new("full"))
        .unwrap();
    assert_eq!(runner.progress().total, 5);

    complete_with(&mut runner, 4).await;
    let cmd = runner.score_command(false).unwrap();
    let represented: Vec<Aspect> = cmd.questions.iter().map(|q| q.aspect).collect();
    let outcome = app.score.handle(cmd).await.unwrap();

    assert_eq!(outcome.result.overall_score, Percentage::new(100));
    assert_eq!(outcome.result.category, ScoreCategory::High);
    for aspect in Aspect::ALL {
        let expected = if represented.contains(&aspect) { 100 } else { 0 };
        assert_eq!(outcome.result.aspect_scores[&aspect], Percentage::new(expected));
    }
}

#[tokio::test]
async fn worst_answers_score_twenty_five() {
    let app = app();
    let mut runner = app
        .start
        .handle(StartAssessmentCommand::new("full"))
        .unwrap();

    complete_with(&mut runner, 1).await;
    let outcome = app
        .score
        .handle(runner.score_command(false).unwrap())
        .await
        .unwrap();

    assert_eq!(outcome.result.overall_score, Percentage::new(25));
    assert_eq!(outcome.result.category, ScoreCategory::Low);
    assert!(!outcome.result.recommendations.is_empty());
}

#[tokio::test]
async fn progress_and_completion_are_published() {
    let app = app();
    let mut runner = app
        .start
        .handle(StartAssessmentCommand::new("full"))
        .unwrap();
    app.clock.advance_secs(90);

    complete_with(&mut runner, 3).await;

    assert_eq!(app.bus.events_of_type("assessment.progressed.v1").len(), 5);
    let completed = app.bus.events_of_type("assessment.completed.v1");
    assert_eq!(completed.len(), 1);
    assert_eq!(
        completed[0].occurred_at,
        Timestamp::from_unix_secs(1_700_000_090)
    );
    assert_eq!(completed[0].payload["assessment_type"], "full");
    assert_eq!(completed[0].payload["answers"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_type_runs_the_quick_assessment() {
    let app = app();
    let runner = app
        .start
        .handle(StartAssessmentCommand::new("weekly"))
        .unwrap();

    assert_eq!(runner.assessment_type(), AssessmentType::Quick);
    assert_eq!(runner.progress().total, 1);
}

#[tokio::test]
async fn saved_results_are_listed_newest_first() {
    let app = app();

    for value in [2, 4] {
        let mut runner = app
            .start
            .handle(StartAssessmentCommand::new("risk"))
            .unwrap();
        complete_with(&mut runner, value).await;
        let outcome = app
            .score
            .handle(runner.score_command(true).unwrap())
            .await
            .unwrap();
        assert!(outcome.saved.is_some());
        app.clock.advance_secs(60);
    }

    let history = app.history.list_score_results().await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].result.overall_score, Percentage::new(100));
    assert_eq!(history[1].result.overall_score, Percentage::new(50));

    let found = app.history.find_score_result(&history[1].id).await.unwrap();
    assert_eq!(found, history[1]);
}

#[tokio::test]
async fn results_survive_in_the_file_store() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = app_with_store(Arc::new(FileKeyValueStore::new(dir.path())));
        let mut runner = app
            .start
            .handle(StartAssessmentCommand::new("quick"))
            .unwrap();
        complete_with(&mut runner, 2).await;
        app.score
            .handle(runner.score_command(true).unwrap())
            .await
            .unwrap();
    }

    let reopened = app_with_store(Arc::new(FileKeyValueStore::new(dir.path())));
    let history = reopened.history.list_score_results().await;

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].assessment_type, AssessmentType::Quick);
    assert_eq!(history[0].result.overall_score, Percentage::new(50));
}
