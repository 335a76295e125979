// Domain layer - Pure data types and functions
pub mod error;
pub mod measurement;
pub mod station;
pub mod view;
