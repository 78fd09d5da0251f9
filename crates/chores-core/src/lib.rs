//! chores-core - Core library for Chores
//!
//! This crate contains the shared models, remote API client, and the task
//! store used by all Chores frontends. The store is the single source of
//! truth for session state: the task list, the transient placeholder row,
//! per-task in-flight marks, and the error banner.

pub mod api;
pub mod banner;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod util;

pub use api::{TaskApiClient, TaskService};
pub use banner::{ErrorBanner, UserError};
pub use config::Config;
pub use error::{Error, Result};
pub use models::{FilterMode, NewTask, Task, TaskId};
pub use store::{RenameOutcome, TaskStore};
