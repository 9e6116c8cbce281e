//! Search domain: response models, ranking and the provider fan-out.

pub mod actions;
pub mod models;
pub mod ranking;

pub use actions::{search_all, search_places, search_posts};
pub use models::*;
