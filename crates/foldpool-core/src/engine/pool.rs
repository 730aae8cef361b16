use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::{self, JoinHandle};
use tracing::debug;

use crate::core::models::outcome::UnitOutput;
use crate::engine::config::PoolConfig;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Execution pool requires at least one worker")]
    NoWorkers,

    #[error("Unit demands exclusive accelerator access, but the pool has no accelerator slots")]
    NoAccelerators,

    #[error("A worker was lost before its unit completed: {0}")]
    WorkerLost(String),
}

/// Resource requirement a unit declares at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceDemand {
    /// Runs on any free worker slot.
    Shared,
    /// Additionally holds one accelerator slot for the unit's whole
    /// duration.
    ExclusiveAccelerator,
}

/// Handle to one submitted unit; resolves when the unit completes.
pub struct Handle {
    join: JoinHandle<Result<UnitOutput, PoolError>>,
}

impl Handle {
    /// Blocks until the unit completes. A unit body never fails by
    /// contract, so an error here means the pool itself lost the worker.
    pub async fn wait(self) -> Result<UnitOutput, PoolError> {
        match self.join.await {
            Ok(output) => output,
            Err(e) => Err(PoolError::WorkerLost(e.to_string())),
        }
    }
}

/// The run-scoped execution pool.
///
/// Built once at run start and dropped when the run ends; it is never
/// re-initialized behind the caller's back. Unit concurrency is bounded by
/// the worker count; accelerator-exclusive units additionally contend for
/// the accelerator slots, at most one unit per slot at a time. This is the
/// only mutual-exclusion discipline in the system.
///
/// Submission never blocks behind execution: `submit` returns as soon as the
/// unit is queued, and permits are acquired inside the spawned task.
pub struct WorkerPool {
    workers: Arc<Semaphore>,
    accelerators: Arc<Semaphore>,
    accelerator_count: usize,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        if config.workers == 0 {
            return Err(PoolError::NoWorkers);
        }
        debug!(
            workers = config.workers,
            accelerators = config.accelerators,
            "Building execution pool."
        );
        Ok(Self {
            workers: Arc::new(Semaphore::new(config.workers)),
            accelerators: Arc::new(Semaphore::new(config.accelerators)),
            accelerator_count: config.accelerators,
        })
    }

    pub fn accelerator_count(&self) -> usize {
        self.accelerator_count
    }

    /// Submits one unit for asynchronous execution and returns immediately.
    ///
    /// The unit body is synchronous and runs on the blocking thread pool
    /// once it has acquired a worker permit (and an accelerator slot, if
    /// demanded). Demanding an accelerator from a pool configured without
    /// any is rejected here rather than deadlocking the run.
    pub fn submit<F>(&self, demand: ResourceDemand, unit: F) -> Result<Handle, PoolError>
    where
        F: FnOnce() -> UnitOutput + Send + 'static,
    {
        if demand == ResourceDemand::ExclusiveAccelerator && self.accelerator_count == 0 {
            return Err(PoolError::NoAccelerators);
        }

        let workers = Arc::clone(&self.workers);
        let accelerators = Arc::clone(&self.accelerators);
        let join = task::spawn(async move {
            let _worker = workers
                .acquire_owned()
                .await
                .map_err(|e| PoolError::WorkerLost(e.to_string()))?;
            let _slot = match demand {
                ResourceDemand::ExclusiveAccelerator => Some(
                    accelerators
                        .acquire_owned()
                        .await
                        .map_err(|e| PoolError::WorkerLost(e.to_string()))?,
                ),
                ResourceDemand::Shared => None,
            };
            task::spawn_blocking(unit)
                .await
                .map_err(|e| PoolError::WorkerLost(e.to_string()))
        });
        Ok(Handle { join })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::outcome::OutcomeRecord;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn record(id: &str) -> UnitOutput {
        UnitOutput::Single(OutcomeRecord::design_success(
            id,
            PathBuf::from(format!("/out/{id}.fasta")),
            1,
        ))
    }

    #[test]
    fn zero_workers_is_rejected() {
        let result = WorkerPool::new(PoolConfig {
            workers: 0,
            accelerators: 0,
        });
        assert!(matches!(result, Err(PoolError::NoWorkers)));
    }

    #[tokio::test]
    async fn accelerator_demand_without_slots_is_rejected_at_submission() {
        let pool = WorkerPool::new(PoolConfig {
            workers: 2,
            accelerators: 0,
        })
        .unwrap();

        let result = pool.submit(ResourceDemand::ExclusiveAccelerator, || record("a"));
        assert!(matches!(result, Err(PoolError::NoAccelerators)));
    }

    #[tokio::test]
    async fn submitted_units_all_resolve() {
        let pool = WorkerPool::new(PoolConfig {
            workers: 4,
            accelerators: 0,
        })
        .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let id = format!("unit_{i}");
                pool.submit(ResourceDemand::Shared, move || record(&id))
                    .unwrap()
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let output = handle.wait().await.unwrap();
            let UnitOutput::Single(record) = output else {
                panic!("expected a single record");
            };
            assert_eq!(record.id, format!("unit_{i}"));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn one_accelerator_slot_serializes_exclusive_units() {
        let pool = WorkerPool::new(PoolConfig {
            workers: 4,
            accelerators: 1,
        })
        .unwrap();

        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..3)
            .map(|i| {
                let running = Arc::clone(&running);
                let peak = Arc::clone(&peak);
                pool.submit(ResourceDemand::ExclusiveAccelerator, move || {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_millis(30));
                    running.fetch_sub(1, Ordering::SeqCst);
                    record(&format!("gpu_{i}"))
                })
                .unwrap()
            })
            .collect();

        for handle in handles {
            handle.wait().await.unwrap();
        }

        assert_eq!(
            peak.load(Ordering::SeqCst),
            1,
            "two accelerator-exclusive units overlapped on a single slot"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn a_lost_worker_does_not_block_its_siblings() {
        let pool = WorkerPool::new(PoolConfig {
            workers: 4,
            accelerators: 0,
        })
        .unwrap();

        let bad = pool
            .submit(ResourceDemand::Shared, || panic!("unit body exploded"))
            .unwrap();
        let good = pool
            .submit(ResourceDemand::Shared, || record("survivor"))
            .unwrap();

        assert!(matches!(bad.wait().await, Err(PoolError::WorkerLost(_))));

        let output = good.wait().await.unwrap();
        let UnitOutput::Single(record) = output else {
            panic!("expected a single record");
        };
        assert_eq!(record.id, "survivor");
    }
}
