//! Search domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers. They
//! never fail: a provider that errors or times out contributes an empty list
//! and a `SourceReport` saying why.

mod fanout;
mod search_all;
mod search_places;
mod search_posts;

pub use search_all::search_all;
pub use search_places::search_places;
pub use search_posts::search_posts;
