//! Session task store and remote synchronization.
//!
//! The store owns the in-memory task list for the current session and keeps
//! it in step with the remote collection through the [`TaskService`] seam.
//! Nothing is mutated optimistically: every list change happens only after
//! the server confirms the request. Failures never leave partial state
//! behind; they surface as a banner message and the list stays as it was.
//!
//! The store is written for a single-threaded event loop. The in-flight set
//! is advisory (it drives per-row loading indicators); re-entrant intents on
//! an id that is already in flight are not blocked.

use std::collections::HashSet;

use futures::future::join_all;
use tracing::warn;

use crate::api::TaskService;
use crate::banner::{ErrorBanner, UserError};
use crate::models::{visible_tasks, FilterMode, NewTask, Task, TaskId};
use crate::util::normalize_title;

/// Result of a rename intent, so the edit UI can decide what to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum RenameOutcome {
    /// Title changed and the server confirmed it.
    Renamed,
    /// Nothing to do: the trimmed title matched the current one
    /// (or the id is unknown).
    Unchanged,
    /// The trimmed title was empty, so the task was deleted instead.
    Deleted,
    /// The request failed; the caller should stay in edit mode.
    Failed,
}

/// In-memory task list synchronized against the remote collection.
pub struct TaskStore<S> {
    service: S,
    owner_id: i64,
    tasks: Vec<Task>,
    placeholder: Option<Task>,
    in_flight: HashSet<TaskId>,
    banner: ErrorBanner,
    draft: String,
    input_locked: bool,
}

impl<S: TaskService> TaskStore<S> {
    #[must_use]
    pub fn new(service: S, owner_id: i64) -> Self {
        Self {
            service,
            owner_id,
            tasks: Vec::new(),
            placeholder: None,
            in_flight: HashSet::new(),
            banner: ErrorBanner::new(),
            draft: String::new(),
            input_locked: false,
        }
    }

    /// Fetch the full task list for the session owner.
    ///
    /// On failure the list stays empty and the banner shows the load
    /// failure. There is no retry.
    pub async fn load(&mut self) {
        match self.service.list_tasks(self.owner_id).await {
            Ok(tasks) => self.tasks = tasks,
            Err(error) => {
                warn!(%error, "failed to load tasks");
                self.banner.show(UserError::LoadFailed);
            }
        }
    }

    /// Submit the current draft as a new task.
    ///
    /// A whitespace-only draft is rejected at the intent boundary without a
    /// request. Otherwise the placeholder row appears, the input locks, and
    /// a create request goes out. Success appends the server's task and
    /// clears the draft; failure preserves the draft so the user can retry.
    /// Either way the placeholder is gone and the input unlocks afterwards.
    pub async fn add(&mut self) -> bool {
        let Some(title) = normalize_title(&self.draft) else {
            self.banner.show(UserError::EmptyTitle);
            return false;
        };

        self.input_locked = true;
        self.placeholder = Some(Task::placeholder(title.clone(), self.owner_id));

        let created = self
            .service
            .create_task(&NewTask::new(title, self.owner_id))
            .await;

        let added = match created {
            Ok(task) => {
                self.tasks.push(task);
                self.draft.clear();
                true
            }
            Err(error) => {
                warn!(%error, "failed to add task");
                self.banner.show(UserError::AddFailed);
                false
            }
        };

        self.placeholder = None;
        self.input_locked = false;
        added
    }

    /// Delete a task. The row stays in the list until the server confirms.
    pub async fn remove(&mut self, id: TaskId) -> bool {
        self.in_flight.insert(id);

        let removed = match self.service.delete_task(id).await {
            Ok(()) => {
                self.tasks.retain(|task| task.id != id);
                true
            }
            Err(error) => {
                warn!(%id, %error, "failed to delete task");
                self.banner.show(UserError::DeleteFailed);
                false
            }
        };

        self.in_flight.remove(&id);
        removed
    }

    /// Delete every completed task with one independent request per task.
    ///
    /// Partial failure leaves the failed rows in place; the banner ends up
    /// showing the last failure.
    pub async fn clear_completed(&mut self) {
        let ids: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|task| task.completed)
            .map(|task| task.id)
            .collect();

        self.in_flight.extend(ids.iter().copied());

        let service = &self.service;
        let outcomes = join_all(
            ids.iter()
                .map(|&id| async move { (id, service.delete_task(id).await) }),
        )
        .await;

        for (id, outcome) in outcomes {
            match outcome {
                Ok(()) => self.tasks.retain(|task| task.id != id),
                Err(error) => {
                    warn!(%id, %error, "failed to delete completed task");
                    self.banner.show(UserError::DeleteFailed);
                }
            }
            self.in_flight.remove(&id);
        }
    }

    /// Flip a task's completion flag, replacing the row in place once the
    /// server confirms.
    pub async fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            return false;
        };
        let flipped = task.toggled();

        self.in_flight.insert(id);

        let toggled = match self.service.update_task(&flipped).await {
            Ok(updated) => {
                self.replace_by_id(updated);
                true
            }
            Err(error) => {
                warn!(%id, %error, "failed to update task");
                self.banner.show(UserError::UpdateFailed);
                false
            }
        };

        self.in_flight.remove(&id);
        toggled
    }

    /// Toggle every active task, or every completed task when none are
    /// active. One independent request per task, no atomicity across them.
    pub async fn toggle_all(&mut self) {
        let any_active = self.tasks.iter().any(|task| !task.completed);
        let targets: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.completed != any_active)
            .map(Task::toggled)
            .collect();

        self.in_flight.extend(targets.iter().map(|task| task.id));

        let service = &self.service;
        let outcomes = join_all(
            targets
                .iter()
                .map(|task| async move { (task.id, service.update_task(task).await) }),
        )
        .await;

        for (id, outcome) in outcomes {
            match outcome {
                Ok(updated) => self.replace_by_id(updated),
                Err(error) => {
                    warn!(%id, %error, "failed to update task");
                    self.banner.show(UserError::UpdateFailed);
                }
            }
            self.in_flight.remove(&id);
        }
    }

    /// Rename a task. An unchanged title issues no request; an empty one
    /// deletes the task instead.
    pub async fn rename(&mut self, id: TaskId, new_title: &str) -> RenameOutcome {
        let Some(task) = self.tasks.iter().find(|task| task.id == id) else {
            return RenameOutcome::Unchanged;
        };

        let Some(title) = normalize_title(new_title) else {
            return if self.remove(id).await {
                RenameOutcome::Deleted
            } else {
                RenameOutcome::Failed
            };
        };

        if title == task.title {
            return RenameOutcome::Unchanged;
        }
        let renamed = task.with_title(title);

        self.in_flight.insert(id);

        let outcome = match self.service.update_task(&renamed).await {
            Ok(updated) => {
                self.replace_by_id(updated);
                RenameOutcome::Renamed
            }
            Err(error) => {
                warn!(%id, %error, "failed to rename task");
                self.banner.show(UserError::UpdateFailed);
                RenameOutcome::Failed
            }
        };

        self.in_flight.remove(&id);
        outcome
    }

    // Position-preserving replacement; ignores unknown ids.
    fn replace_by_id(&mut self, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == updated.id) {
            *slot = updated;
        }
    }

    // ------------------------------------------------------------------
    // Observable state for the presentation layer
    // ------------------------------------------------------------------

    /// Full confirmed list, in server order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Transient placeholder row, present only while a create is pending.
    #[must_use]
    pub fn placeholder(&self) -> Option<&Task> {
        self.placeholder.as_ref()
    }

    /// Visible rows for a filter, with the placeholder as the last row
    /// while a create is pending.
    #[must_use]
    pub fn visible(&self, mode: FilterMode) -> Vec<Task> {
        let mut rows: Vec<Task> = visible_tasks(&self.tasks, mode)
            .into_iter()
            .cloned()
            .collect();
        if let Some(placeholder) = &self.placeholder {
            rows.push(placeholder.clone());
        }
        rows
    }

    /// Whether a mutating request for this id is outstanding.
    #[must_use]
    pub fn is_in_flight(&self, id: TaskId) -> bool {
        self.in_flight.contains(&id)
    }

    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Text of the add-input field.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the add input is disabled (a create request is outstanding).
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    /// Currently visible banner message, if any.
    #[must_use]
    pub fn current_error(&self) -> Option<UserError> {
        self.banner.current()
    }

    /// Dismiss the banner immediately.
    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
    }
}
