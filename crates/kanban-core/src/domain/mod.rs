//! Domain Layer
//!
//! Cards, workflow stages and the per-card metadata record.
//! This layer has NO display dependencies (only serde for configuration).

mod card;
mod stage;
mod metadata;

pub use card::{Card, CardId, Priority};
pub use stage::Stage;
pub use metadata::{CardMetadata, Comment};
