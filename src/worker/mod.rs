//! Background reply processing

pub mod executor;
pub mod reply;

pub use executor::{BackgroundExecutor, InlineExecutor, SpawnExecutor, detect_executor};
pub use reply::{compose_answer, reply_task, run_reply_workflow};
