//! Chores CLI - task list frontend over the remote collection API
//!
//! One intent per invocation: the store is loaded, the intent runs, and the
//! resulting list is rendered. Failures surface as the store's banner
//! message on stderr and a non-zero exit code.

use clap::{Parser, Subcommand};
use thiserror::Error;

use chores_core::{
    Config, FilterMode, RenameOutcome, Task, TaskApiClient, TaskId, TaskStore, UserError,
};

#[derive(Parser)]
#[command(name = "chores")]
#[command(about = "Manage your task list from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quick add: chores "buy milk"
    #[arg(trailing_var_arg = true)]
    title: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks
    List {
        /// Show all, active, or completed tasks
        #[arg(long, default_value = "all")]
        filter: FilterMode,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new task
    #[command(alias = "new")]
    Add {
        /// Task title
        title: Vec<String>,
    },
    /// Flip a task between active and completed
    Toggle {
        /// Task id
        id: String,
    },
    /// Complete every active task, or reactivate all when none are active
    ToggleAll,
    /// Change a task's title (an empty title deletes the task)
    Rename {
        /// Task id
        id: String,
        /// New title
        title: Vec<String>,
    },
    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },
    /// Delete every completed task
    ClearCompleted,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Core(#[from] chores_core::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("{0}")]
    Remote(UserError),
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chores=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = TaskApiClient::new(config.api_base_url.as_str())?;
    let mut store = TaskStore::new(client, config.owner_id);

    store.load().await;
    if let Some(error) = store.current_error() {
        return Err(CliError::Remote(error));
    }

    match cli.command {
        Some(Commands::List { filter, json }) => return run_list(&store, filter, json),
        Some(Commands::Add { title }) => {
            store.set_draft(title.join(" "));
            store.add().await;
        }
        Some(Commands::Toggle { id }) => {
            let id = resolve_task_id(&store, &id)?;
            store.toggle(id).await;
        }
        Some(Commands::ToggleAll) => store.toggle_all().await,
        Some(Commands::Rename { id, title }) => {
            let id = resolve_task_id(&store, &id)?;
            match store.rename(id, &title.join(" ")).await {
                RenameOutcome::Deleted => tracing::info!(%id, "empty title, task deleted"),
                RenameOutcome::Renamed | RenameOutcome::Unchanged | RenameOutcome::Failed => {}
            }
        }
        Some(Commands::Delete { id }) => {
            let id = resolve_task_id(&store, &id)?;
            store.remove(id).await;
        }
        Some(Commands::ClearCompleted) => store.clear_completed().await,
        None => {
            // Quick add mode: chores "buy milk"
            if cli.title.is_empty() {
                return run_list(&store, FilterMode::All, false);
            }
            store.set_draft(cli.title.join(" "));
            store.add().await;
        }
    }

    run_list(&store, FilterMode::All, false)?;

    match store.current_error() {
        Some(error) => Err(CliError::Remote(error)),
        None => Ok(()),
    }
}

fn run_list(
    store: &TaskStore<TaskApiClient>,
    filter: FilterMode,
    as_json: bool,
) -> Result<(), CliError> {
    let rows = store.visible(filter);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for line in format_task_lines(&rows) {
        println!("{line}");
    }
    println!("{}", format_summary(store.active_count()));
    Ok(())
}

fn resolve_task_id<S>(store: &TaskStore<S>, raw: &str) -> Result<TaskId, CliError>
where
    S: chores_core::TaskService,
{
    let id = raw
        .parse::<TaskId>()
        .map_err(|_| CliError::InvalidTaskId(raw.to_string()))?;
    if store.tasks().iter().any(|task| task.id == id) {
        Ok(id)
    } else {
        Err(CliError::TaskNotFound(id))
    }
}

fn format_task_lines(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| {
            let checkbox = if task.completed { "[x]" } else { "[ ]" };
            format!("{checkbox} {:>5}  {}", task.id, task.title)
        })
        .collect()
}

fn format_summary(active_count: usize) -> String {
    if active_count == 1 {
        "1 item left".to_string()
    } else {
        format!("{active_count} items left")
    }
}
