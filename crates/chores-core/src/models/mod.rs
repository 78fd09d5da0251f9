//! Domain models shared across frontends

mod filter;
mod task;

pub use filter::{visible_tasks, FilterMode};
pub use task::{NewTask, Task, TaskId};
