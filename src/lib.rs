pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::csv_file::CsvFileSource;
pub use adapters::registry::HttpRegistry;
pub use adapters::remote_list::RemoteListSource;
pub use config::{env::EnvConfig, CliArgs};
pub use crate::core::{engine::SyncEngine, reconciler::Reconciler};
pub use domain::model::{Domain, DomainSet, SyncReport};
pub use domain::ports::{DomainSource, Registry};
pub use utils::error::{Result, SyncError};
