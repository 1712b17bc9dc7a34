//! `trader-psyche [monitor]` runs one monitoring session until Ctrl+C and
//! prints its report as JSON.
//!
//! `trader-psyche assess [type]` asks the questions on stderr, reads answers
//! from stdin and prints the score as JSON. Without a type the configured
//! default is used.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trader_psyche::adapters::{
    FileKeyValueStore, InMemoryEventBus, InMemoryKeyValueStore, KeyValueResultRepository,
    StaticQuestionCatalog, SystemClock, TelemetryLogHandler, UuidIdGenerator,
    TELEMETRY_LOG_EVENT_TYPES,
};
use trader_psyche::application::{
    LiveMonitor, LiveMonitorConfig, RngSource, ScoreAssessmentHandler, StartAssessmentCommand,
    StartAssessmentHandler,
};
use trader_psyche::config::{AppConfig, LogFormat, RuntimeConfig, StorageBackend, StorageConfig};
use trader_psyche::domain::telemetry::PsychologySimulator;
use trader_psyche::ports::{Clock, EventSubscriber, KeyValueStore, ResultRepository};

fn init_tracing(runtime: &RuntimeConfig) {
    let filter = EnvFilter::try_new(&runtime.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the report; logs go to stderr
    match runtime.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
    }
}

fn build_store(storage: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
        StorageBackend::File => Arc::new(FileKeyValueStore::new(storage.data_path())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.runtime);

    let args: Vec<String> = std::env::args().skip(1).collect();

    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe_all(&TELEMETRY_LOG_EVENT_TYPES, Arc::new(TelemetryLogHandler));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repository: Arc<dyn ResultRepository> = Arc::new(KeyValueResultRepository::new(
        build_store(&config.storage),
        Arc::new(UuidIdGenerator),
        Arc::clone(&clock),
    ));

    match args.first().map(String::as_str) {
        Some("assess") => {
            let assessment_type = config.assessment.resolve(args.get(1).map(String::as_str));
            run_assessment(assessment_type.as_str(), bus, repository, clock).await
        }
        None | Some("monitor") => run_monitor(&config, bus, repository, clock).await,
        Some(other) => Err(format!("unknown command '{}' (expected monitor or assess)", other).into()),
    }
}

async fn run_monitor(
    config: &AppConfig,
    bus: Arc<InMemoryEventBus>,
    repository: Arc<dyn ResultRepository>,
    clock: Arc<dyn Clock>,
) -> Result<(), Box<dyn Error>> {
    let monitor_config = LiveMonitorConfig::default()
        .with_tick_interval(config.monitor.tick_interval())
        .with_simulator(PsychologySimulator::new(
            config.monitor.steps(),
            config.monitor.thresholds(),
        ))
        .with_rng(config.monitor.rng_seed.map_or(RngSource::Entropy, RngSource::Seeded));
    let monitor = LiveMonitor::new(monitor_config, bus, repository, clock);

    let session_id = monitor.start_monitoring().await;
    info!(
        session_id = %session_id,
        storage = ?config.storage.backend,
        "Monitoring; press Ctrl+C to stop"
    );

    tokio::signal::ctrl_c().await?;

    if let Some(report) = monitor.stop_monitoring().await {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

async fn run_assessment(
    assessment_type: &str,
    bus: Arc<InMemoryEventBus>,
    repository: Arc<dyn ResultRepository>,
    clock: Arc<dyn Clock>,
) -> Result<(), Box<dyn Error>> {
    let start = StartAssessmentHandler::new(
        Arc::new(StaticQuestionCatalog::new()),
        bus,
        Arc::clone(&clock),
    );
    let score = ScoreAssessmentHandler::new(repository, clock);

    let mut runner = start.handle(StartAssessmentCommand::new(assessment_type))?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while !runner.is_completed() {
        let progress = runner.progress();
        let question = runner.current_question();
        eprintln!("\n[{}/{}] {}", progress.current, progress.total, question.text);
        for (i, option) in question.options.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, option.text);
        }

        let Some(line) = lines.next_line().await? else {
            info!("Assessment abandoned");
            return Ok(());
        };
        let choice = match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                eprintln!("Enter an option number.");
                continue;
            }
        };
        if let Err(error) = runner.answer(choice).await {
            eprintln!("{}", error);
            continue;
        }
        runner.next().await?;
    }

    let cmd = runner
        .score_command(true)
        .ok_or("assessment finished without completing")?;
    let outcome = score.handle(cmd).await?;
    println!("{}", serde_json::to_string_pretty(&outcome.result)?);

    Ok(())
}
