pub mod mapping;
pub mod stats;
