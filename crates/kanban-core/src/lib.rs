//! Kanban Board Core
//!
//! Layered the same way as the rest of the board:
//! - domain: cards, stages, per-card metadata
//! - store / allocator / board: in-memory state kept in sync by `state`
//! - render: detail and counter projections
//! - controller: command dispatch binding gestures to mutations

pub mod domain;
pub mod error;
pub mod store;
pub mod allocator;
pub mod board;
pub mod render;
pub mod clock;
pub mod config;
pub mod state;
pub mod controller;

pub use allocator::IdentityAllocator;
pub use board::{Board, CardView, Column};
pub use clock::{Clock, FixedClock, LocalClock};
pub use config::{BoardConfig, Labels, SeedCard};
pub use controller::{Command, DeleteConfirm, DetailModal, DetailView, InteractionController};
pub use domain::{Card, CardId, CardMetadata, Comment, Priority, Stage};
pub use error::{Applied, ConfigError, Outcome, Rejected};
pub use render::{CommentEntry, DetailFragment, Renderer, Section};
pub use state::BoardState;
pub use store::CardStore;
