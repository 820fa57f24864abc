pub mod config;
pub mod logging;

pub mod downloader;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod storage;
pub mod team;
pub mod url_model;

pub use config::FetchConfig;
pub use error::RunError;
pub use report::{Reporter, RunSummary};
