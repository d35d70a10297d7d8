//! Data models for the realty gateway.
//!
//! These models match the frontend TypeScript interfaces exactly for seamless interoperability.
//! The upstream listings API emits Mongo-style `_id` on some collections and `id` on others,
//! so every entity id carries a serde alias for `_id`.

mod broker;
mod contact;
mod project;
mod property;
mod requirement;

pub use broker::*;
pub use contact::*;
pub use project::*;
pub use property::*;
pub use requirement::*;

/// Entities that carry an upstream-assigned identifier.
///
/// Cache reconciliation (replace-by-id, remove-by-id) is keyed on this.
pub trait Identified {
    fn id(&self) -> &str;
}
