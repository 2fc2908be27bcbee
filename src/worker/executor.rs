//! Background execution of reply workflows.
//!
//! The request path hands work to a [`BackgroundExecutor`] and never looks at
//! the outcome. Which executor is used depends on the host: a long-running
//! server keeps the process alive and can detach tasks, while a Lambda sandbox
//! is frozen once the response is returned, so work has to finish first.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Environment variable present inside the Lambda execution environment.
pub const LAMBDA_RUNTIME_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

pub type BackgroundTask = BoxFuture<'static, ()>;

#[async_trait]
pub trait BackgroundExecutor: Send + Sync {
    /// Hands `task` off; there is no result channel back to the caller.
    async fn submit(&self, task: BackgroundTask);

    /// Waits for tasks still in flight.
    async fn drain(&self) {}
}

/// Awaits each task in place before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

#[async_trait]
impl BackgroundExecutor for InlineExecutor {
    async fn submit(&self, task: BackgroundTask) {
        task.await;
    }
}

/// Detaches tasks onto the tokio runtime and tracks them for shutdown.
#[derive(Default, Clone)]
pub struct SpawnExecutor {
    tasks: Arc<Mutex<JoinSet<()>>>,
}

impl SpawnExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock().await;
        while tasks.try_join_next().is_some() {}
        tasks.len()
    }
}

#[async_trait]
impl BackgroundExecutor for SpawnExecutor {
    async fn submit(&self, task: BackgroundTask) {
        let mut tasks = self.tasks.lock().await;
        // Reap finished tasks so the set only holds live work.
        while let Some(result) = tasks.try_join_next() {
            if let Err(e) = result {
                error!("Background task ended abnormally: {}", e);
            }
        }
        tasks.spawn(task);
    }

    async fn drain(&self) {
        let mut tasks = self.tasks.lock().await;
        if !tasks.is_empty() {
            info!(pending = tasks.len(), "Waiting for background replies to finish");
        }
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                error!("Background task ended abnormally: {}", e);
            }
        }
    }
}

/// Chooses the executor for the current host.
#[must_use]
pub fn detect_executor<F>(lookup: F) -> Arc<dyn BackgroundExecutor>
where
    F: Fn(&str) -> Option<String>,
{
    if is_lambda_environment(lookup) {
        Arc::new(InlineExecutor)
    } else {
        Arc::new(SpawnExecutor::new())
    }
}

#[must_use]
pub fn is_lambda_environment<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LAMBDA_RUNTIME_ENV).is_some_and(|v| !v.is_empty())
}
