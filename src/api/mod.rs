//! Inbound request handling for both hosts

pub mod handler;
pub mod helpers;
pub mod lambda;
pub mod parsing;
pub mod server;

// Re-export the main entry points for convenience
pub use handler::{AppState, handle_request};
pub use helpers::{HttpReply, ReplyBody};
