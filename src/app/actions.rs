//! Actions representing side effects to be executed by the host runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or worker responses.
//! Actions bridge pure state transformations and effectful operations: fetch
//! dispatch, navigation, and user notifications are all collaborators
//! external to the core, so the handler describes them instead of performing
//! them.

use crate::worker::WorkerMessage;

/// Navigation targets exposed by the external routing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The discover/search listing view.
    Home,

    /// The details view for one movie.
    MovieDetails(u64),

    /// The saved-movies view.
    Watchlist,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Commands representing side effects to be executed by the host runtime.
///
/// Produced by the event handler, executed by whatever hosts the core (the
/// CLI front in this crate, a UI shell elsewhere). They are the boundary
/// between pure state transformations and effectful operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Posts a request to the fetch worker.
    ///
    /// The only path to the network; listing requests carry their sequence
    /// token inside the message.
    PostToWorker(WorkerMessage),

    /// Asks the external navigation service to change views.
    Navigate(Route),

    /// Emits a user-facing notification through the external notify sink.
    Notify {
        kind: NoticeKind,
        message: String,
    },
}
