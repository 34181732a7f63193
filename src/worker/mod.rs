//! Fetch worker for provider network calls.
//!
//! The worker is the only component that touches the network. The application
//! layer posts [`WorkerMessage`] requests (via [`crate::app::Action::PostToWorker`])
//! and consumes [`WorkerResponse`] results as events; listing requests carry
//! a sequence token end to end so stale responses can be discarded.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation dispatching to a [`crate::provider::MovieProvider`]

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{WorkerMessage, WorkerResponse};
