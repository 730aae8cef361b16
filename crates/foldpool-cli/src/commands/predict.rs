use std::sync::Arc;

use foldpool::core::inference::command::CommandFolder;
use foldpool::engine::config::{PoolConfig, PredictConfigBuilder};
use foldpool::engine::error::EngineError;
use foldpool::engine::pool::WorkerPool;
use foldpool::engine::progress::ProgressReporter;
use foldpool::engine::report;
use foldpool::workflows;
use tracing::info;

use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;

pub async fn run(args: PredictArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output_dir).map_err(|source| CliError::OutputDir {
        path: args.output_dir.clone(),
        source,
    })?;

    info!(
        "Probing the structure-prediction backend at {:?}.",
        args.folder_cmd
    );
    let folder = Arc::new(CommandFolder::probe(&args.folder_cmd)?);

    let config = PredictConfigBuilder::new()
        .input_dir(&args.input_dir)
        .output_dir(&args.output_dir)
        .batch_size(args.batch_size)
        .max_length(args.max_length)
        .build()?;

    let pool = WorkerPool::new(PoolConfig {
        workers: super::resolve_workers(args.workers),
        accelerators: args.gpus,
    })
    .map_err(EngineError::from)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting structure prediction...");
    let summary = workflows::predict::run(&config, folder, &pool, &reporter).await?;

    println!(
        "Prediction run finished: {} sequences, {} succeeded, {} failed, {} skipped.",
        summary.total_items, summary.succeeded, summary.failed, summary.skipped
    );
    println!(
        "Summary written to: {}",
        args.output_dir
            .join(report::PREDICTION_SUMMARY_FILE)
            .display()
    );

    Ok(())
}
