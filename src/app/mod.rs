//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! host runtime (main.rs or an embedding UI) and the domain/storage/worker
//! layers. It implements the event-driven architecture that powers the
//! listing, details, and watchlist views.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and fetch sequencing

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::{Action, NoticeKind, Route};
pub use handler::{handle_event, Event};
pub use state::{AppState, ListingOutcome};
