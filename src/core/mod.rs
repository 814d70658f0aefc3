pub mod engine;
pub mod reconciler;

pub use crate::domain::model::{Domain, DomainSet, SyncReport};
pub use crate::domain::ports::{DomainSource, Registry};
pub use crate::utils::error::Result;
