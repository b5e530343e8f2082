pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{RemoteConfig, ServerConfig, ServiceConfig};
pub use core::{remote::RemoteFortuneClient, service::FortuneService};
pub use domain::model::{FortuneRequest, FortuneResult, Mood, Source, Symbol};
pub use utils::error::{FortuneError, RemoteError, Result};
