//! Kernel module - provider adapters and the dependency container.

pub mod deps;
pub mod foursquare;
pub mod instagram;
pub mod test_dependencies;
pub mod traits;
pub mod yelp;

pub use deps::{ProviderTimeouts, ServerDeps};
pub use foursquare::FoursquareAdapter;
pub use instagram::InstagramAdapter;
pub use test_dependencies::{MockPlaceProvider, MockPostProvider, TestDependencies};
pub use traits::*;
pub use yelp::YelpAdapter;
