// Common types and utilities shared across the application

pub mod secret;
pub mod validation;

pub use secret::SecretString;
pub use validation::ValidationError;
