pub mod categories;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod normalize;
pub mod query;
pub mod types;
