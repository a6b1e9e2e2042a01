//! Fixed-size worker pool fed through bounded tokio channels.
//!
//! Workers share the job receiver and stop once the producer drops its
//! sender and the queue is drained. Each worker reports a `Started` event
//! when it picks up a job and a `Finished` event with the square. The
//! producer drains events until it has one `Finished` per submitted job, so
//! results arrive in completion order rather than submission order.

use crate::core::{JobResult, Practice, Result, Section, SettingsProvider, WorkerEvent};
use crate::utils::error::PracticeError;
use crate::utils::validation::{validate_range, Validate};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_JOBS: u64 = 5;
pub const DEFAULT_JOB_DELAY_MS: u64 = 100;
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

pub const MAX_WORKERS: usize = 64;
pub const MAX_QUEUE_CAPACITY: usize = 4_096;

#[derive(Debug, Clone)]
pub struct WorkerPoolSettings {
    pub workers: usize,
    pub job_delay: Duration,
    pub queue_capacity: usize,
}

impl Default for WorkerPoolSettings {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            job_delay: Duration::from_millis(DEFAULT_JOB_DELAY_MS),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Validate for WorkerPoolSettings {
    fn validate(&self) -> Result<()> {
        validate_range("worker_pool.workers", self.workers, 1, MAX_WORKERS)?;
        validate_range(
            "worker_pool.queue_capacity",
            self.queue_capacity,
            1,
            MAX_QUEUE_CAPACITY,
        )?;
        Ok(())
    }
}

pub struct WorkerPool {
    settings: WorkerPoolSettings,
}

impl WorkerPool {
    pub fn new(settings: WorkerPoolSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WorkerPoolSettings {
        &self.settings
    }

    /// Squares every job on the pool and returns one result per job.
    pub async fn run<I>(&self, jobs: I) -> Result<Vec<JobResult>>
    where
        I: IntoIterator<Item = u64>,
    {
        self.run_with(jobs, |_| Ok(())).await
    }

    /// Like [`WorkerPool::run`], handing every worker event to `on_event` as
    /// it is drained.
    pub async fn run_with<I, F>(&self, jobs: I, mut on_event: F) -> Result<Vec<JobResult>>
    where
        I: IntoIterator<Item = u64>,
        F: FnMut(&WorkerEvent) -> Result<()> + Send,
    {
        self.settings.validate()?;

        let capacity = self.settings.queue_capacity;
        // Pull at most one job past capacity so an oversized batch is never buffered.
        let jobs: Vec<u64> = jobs.into_iter().take(capacity + 1).collect();
        if jobs.len() > capacity {
            return Err(PracticeError::InvalidConfigValueError {
                field: "worker_pool.queue_capacity".to_string(),
                value: capacity.to_string(),
                reason: format!("Job batch exceeds the queue capacity of {}", capacity),
            });
        }

        let (job_tx, job_rx) = mpsc::channel::<u64>(capacity);
        let (event_tx, mut event_rx) = mpsc::channel::<WorkerEvent>(capacity);
        let job_rx = Arc::new(Mutex::new(job_rx));

        let mut handles = Vec::with_capacity(self.settings.workers);
        for worker_id in 1..=self.settings.workers {
            handles.push(tokio::spawn(worker(
                worker_id,
                Arc::clone(&job_rx),
                event_tx.clone(),
                self.settings.job_delay,
            )));
        }
        // Only workers hold event senders now, so the queue closes if they all exit.
        drop(event_tx);

        tracing::debug!(
            workers = self.settings.workers,
            jobs = jobs.len(),
            "worker pool started"
        );

        let submitted = jobs.len();
        for job in jobs {
            job_tx.send(job).await.map_err(|e| PracticeError::WorkerPoolError {
                message: format!("job queue closed before job {} was sent", e.0),
            })?;
        }
        // Closing the job queue ends each worker's receive loop.
        drop(job_tx);

        let mut results = Vec::with_capacity(submitted);
        while results.len() < submitted {
            let Some(event) = event_rx.recv().await else {
                return Err(PracticeError::WorkerPoolError {
                    message: format!(
                        "event queue closed after {} of {} results",
                        results.len(),
                        submitted
                    ),
                });
            };
            on_event(&event)?;
            if let WorkerEvent::Finished(result) = event {
                results.push(result);
            }
        }

        for handle in handles {
            handle.await.map_err(|e| PracticeError::WorkerPoolError {
                message: format!("worker task failed: {}", e),
            })?;
        }

        tracing::debug!(results = results.len(), "worker pool finished");
        Ok(results)
    }
}

async fn worker(
    id: usize,
    jobs: Arc<Mutex<mpsc::Receiver<u64>>>,
    events: mpsc::Sender<WorkerEvent>,
    delay: Duration,
) {
    loop {
        let job = {
            let mut rx = jobs.lock().await;
            rx.recv().await
        };
        let Some(job) = job else {
            break;
        };

        tracing::debug!(worker = id, job, "processing job");
        if events
            .send(WorkerEvent::Started { worker_id: id, job })
            .await
            .is_err()
        {
            break;
        }

        tokio::time::sleep(delay).await;

        let result = JobResult {
            worker_id: id,
            job,
            value: job.saturating_mul(job),
        };
        if events.send(WorkerEvent::Finished(result)).await.is_err() {
            tracing::warn!(worker = id, "event queue closed, stopping");
            break;
        }
    }
    tracing::debug!(worker = id, "worker exiting");
}

pub struct ConcurrencyPractice {
    pool: WorkerPool,
    jobs: u64,
}

impl ConcurrencyPractice {
    pub fn new(pool: WorkerPool, jobs: u64) -> Self {
        Self { pool, jobs }
    }

    pub fn from_settings<S: SettingsProvider + ?Sized>(settings: &S) -> Self {
        let pool = WorkerPool::new(WorkerPoolSettings {
            workers: settings.workers(),
            job_delay: Duration::from_millis(settings.job_delay_ms()),
            queue_capacity: settings.queue_capacity(),
        });
        Self::new(pool, settings.jobs())
    }
}

impl Default for ConcurrencyPractice {
    fn default() -> Self {
        Self::new(WorkerPool::new(WorkerPoolSettings::default()), DEFAULT_JOBS)
    }
}

#[async_trait]
impl Practice for ConcurrencyPractice {
    fn section(&self) -> Section {
        Section::Concurrency
    }

    async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        writeln!(
            out,
            "Starting {} workers for {} jobs",
            self.pool.settings().workers,
            self.jobs
        )?;

        self.pool
            .run_with(1..=self.jobs, |event| {
                match event {
                    WorkerEvent::Started { worker_id, job } => {
                        writeln!(out, "Worker {} processing job {}", worker_id, job)?
                    }
                    WorkerEvent::Finished(result) => writeln!(
                        out,
                        "Worker {} finished job {}, result: {}",
                        result.worker_id, result.job, result.value
                    )?,
                }
                Ok(())
            })
            .await?;
        Ok(())
    }
}
