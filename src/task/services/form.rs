//! The task draft form and its submission protocol.

use super::payload::TaskPayload;
use crate::submission::domain::{routes, FlightGuard, FlightLock, SubmissionPhase};
use crate::submission::error::{SubmissionError, SubmissionResult};
use crate::submission::ports::{
    AccessTokenProvider, GatewayError, Navigator, NotificationKind, Notifier, SubmitGateway,
};
use crate::task::domain::{
    validation, Label, Priority, ProjectContext, Status, TaskDraft,
};
use mockable::Clock;
use std::sync::{Arc, PoisonError, RwLock};

/// Draft form behind the "create task" view.
///
/// Holds the draft, tracks the submission phase, and orchestrates the
/// protocol: validate the title, acquire a token, POST the payload, then
/// reset + toast + navigate on success. Field edits remain possible while a
/// submission is in flight; the payload is built from a snapshot taken when
/// the gateway call starts, so late edits never leak into an in-flight body.
/// Overlapping submit triggers are rejected by the flight lock.
pub struct TaskDraftForm<A, G, N, T, C>
where
    A: AccessTokenProvider,
    G: SubmitGateway,
    N: Navigator,
    T: Notifier,
    C: Clock + Send + Sync,
{
    draft: RwLock<TaskDraft>,
    flight: FlightLock,
    context: ProjectContext,
    auth: Arc<A>,
    gateway: Arc<G>,
    navigator: Arc<N>,
    notifier: Arc<T>,
    clock: Arc<C>,
}

impl<A, G, N, T, C> TaskDraftForm<A, G, N, T, C>
where
    A: AccessTokenProvider,
    G: SubmitGateway,
    N: Navigator,
    T: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a form with a fresh default draft for the given project.
    #[must_use]
    pub fn new(
        context: ProjectContext,
        auth: Arc<A>,
        gateway: Arc<G>,
        navigator: Arc<N>,
        notifier: Arc<T>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            draft: RwLock::new(TaskDraft::new(&*clock)),
            flight: FlightLock::new(),
            context,
            auth,
            gateway,
            navigator,
            notifier,
            clock,
        }
    }

    /// A snapshot of the current draft.
    #[must_use]
    pub fn draft(&self) -> TaskDraft {
        self.draft
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The currently observable submission phase.
    #[must_use]
    pub fn phase(&self) -> SubmissionPhase {
        self.flight.phase()
    }

    /// The project this form creates tasks under.
    #[must_use]
    pub const fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// Replaces the draft title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.edit(|draft| draft.set_title(title));
    }

    /// Replaces the draft description.
    pub fn set_description(&self, description: impl Into<String>) {
        self.edit(|draft| draft.set_description(description));
    }

    /// Replaces the selected priority.
    pub fn set_priority(&self, priority: Priority) {
        self.edit(|draft| draft.set_priority(priority));
    }

    /// Replaces the selected status.
    pub fn set_status(&self, status: Status) {
        self.edit(|draft| draft.set_status(status));
    }

    /// Replaces the selected label.
    pub fn set_label(&self, label: Label) {
        self.edit(|draft| draft.set_label(label));
    }

    /// Replaces the assignee.
    pub fn set_assignee(&self, assignee: impl Into<String>) {
        self.edit(|draft| draft.set_assignee(assignee));
    }

    /// Replaces the due date.
    pub fn set_due_date(&self, due_date: impl Into<String>) {
        self.edit(|draft| draft.set_due_date(due_date));
    }

    fn edit(&self, apply: impl FnOnce(&mut TaskDraft)) {
        apply(&mut self.draft.write().unwrap_or_else(PoisonError::into_inner));
    }

    /// Submits the current draft.
    ///
    /// On success the draft resets to defaults, a confirmation toast fires
    /// exactly once, and the navigator receives the owning project's task
    /// list route. On every failure the draft is preserved unchanged and the
    /// form returns to idle so the user may retry.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::AlreadyInFlight`] for overlapping triggers,
    /// [`SubmissionError::Validation`] when the title is empty (with a
    /// warning toast, before any async work), [`SubmissionError::Auth`] when
    /// token acquisition fails (no network call is made), and
    /// [`SubmissionError::Gateway`] when the POST fails.
    pub async fn submit(&self) -> SubmissionResult<()> {
        let Some(flight) = self.flight.try_begin() else {
            return Err(SubmissionError::AlreadyInFlight);
        };
        self.run_submission(&flight).await
    }

    async fn run_submission(&self, flight: &FlightGuard<'_>) -> SubmissionResult<()> {
        if let Err(violation) = validation::validate_title(&self.draft()) {
            self.notifier.notify(
                "Please enter a title before submitting",
                "Title required",
                NotificationKind::Warning,
            );
            return Err(SubmissionError::validation(vec![violation]));
        }

        flight.advance(SubmissionPhase::TokenPending);
        let token = match self.auth.access_token().await {
            Ok(token) => token,
            Err(err) => {
                log::error!("task submission aborted: {err}");
                return Err(err.into());
            }
        };

        let snapshot = self.draft();
        let body = serde_json::to_value(TaskPayload::from(&snapshot))
            .map_err(GatewayError::network)?;
        let path = routes::project_tasks_path(self.context.project_id());

        flight.advance(SubmissionPhase::Submitting);
        if let Err(err) = self.gateway.post(&path, body, &token).await {
            log::error!("task creation failed: {err}");
            self.notifier.notify(
                "Your task could not be created. Please try again.",
                "Submission failed",
                NotificationKind::Error,
            );
            return Err(err.into());
        }

        self.edit(|draft| draft.reset(&*self.clock));
        self.notifier
            .notify("You created a new issue.", "Issue created", NotificationKind::Info);
        self.navigator
            .navigate(&routes::task_list_route(self.context.project_id()));
        Ok(())
    }
}
