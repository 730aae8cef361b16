use std::sync::Arc;

use foldpool::core::inference::command::CommandDesigner;
use foldpool::engine::config::{DesignConfigBuilder, PoolConfig};
use foldpool::engine::error::EngineError;
use foldpool::engine::pool::WorkerPool;
use foldpool::engine::progress::ProgressReporter;
use foldpool::engine::report;
use foldpool::workflows;
use tracing::info;

use crate::cli::DesignArgs;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;

pub async fn run(args: DesignArgs) -> Result<()> {
    std::fs::create_dir_all(&args.output_dir).map_err(|source| CliError::OutputDir {
        path: args.output_dir.clone(),
        source,
    })?;

    info!(
        "Probing the sequence-design backend at {:?}.",
        args.designer_cmd
    );
    let designer = Arc::new(CommandDesigner::probe(&args.designer_cmd)?);

    let config = DesignConfigBuilder::new()
        .input_dir(&args.input_dir)
        .output_dir(&args.output_dir)
        .sequence_count(args.num_sequences)
        .temperature(args.temperature)
        .seed(args.seed)
        .build()?;

    let pool = WorkerPool::new(PoolConfig {
        workers: super::resolve_workers(args.workers),
        accelerators: 0,
    })
    .map_err(EngineError::from)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Starting sequence design...");
    let summary = workflows::design::run(&config, designer, &pool, &reporter).await?;

    println!(
        "Design run finished: {} structures, {} succeeded, {} failed.",
        summary.total_items, summary.succeeded, summary.failed
    );
    println!(
        "Summary written to: {}",
        args.output_dir.join(report::DESIGN_SUMMARY_FILE).display()
    );

    Ok(())
}
