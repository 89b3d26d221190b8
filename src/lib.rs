// ABOUTME: Public library API for the wiki page exporter
// ABOUTME: Re-exports core modules for external use

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod render;
pub mod report;
pub mod storage;
pub mod util;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{ChildPage, Page, User};
