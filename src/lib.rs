pub mod cli;
pub mod config;
pub mod dataset;
pub mod global;
pub mod manifest;
pub mod normalizer;
pub mod schema;
pub mod validate;
