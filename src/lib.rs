pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod selector;
pub mod view;
