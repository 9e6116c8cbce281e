// Discover - location search aggregator
//
// Fans a location query out to Instagram, Yelp and Foursquare and merges
// whatever comes back into one response. A provider that fails only empties
// its own slice of the result.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
