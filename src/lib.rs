pub mod apis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod process;
pub mod report;
pub mod search;
pub mod types;
