pub mod cli;
pub mod config;
pub mod error;
pub mod hf_client;
pub mod output;
pub mod progress;
pub mod selector;
