//! The project draft form and its submission protocol.

use super::payload::ProjectPayload;
use crate::project::domain::{validation, ProjectDraft};
use crate::submission::domain::{routes, FlightGuard, FlightLock, SubmissionPhase};
use crate::submission::error::{SubmissionError, SubmissionResult};
use crate::submission::ports::{AccessTokenProvider, GatewayError, SubmitGateway};
use std::sync::{Arc, PoisonError, RwLock};

/// Draft form behind the "create project" view.
///
/// Unlike the task form, field edits are gated while a submission is in
/// flight: setters report whether the edit was applied. Success resets the
/// form silently; failures are logged and returned to the caller for inline
/// display next to the offending field or form.
pub struct ProjectDraftForm<A, G>
where
    A: AccessTokenProvider,
    G: SubmitGateway,
{
    draft: RwLock<ProjectDraft>,
    flight: FlightLock,
    auth: Arc<A>,
    gateway: Arc<G>,
}

impl<A, G> ProjectDraftForm<A, G>
where
    A: AccessTokenProvider,
    G: SubmitGateway,
{
    /// Creates a form with an empty draft.
    #[must_use]
    pub fn new(auth: Arc<A>, gateway: Arc<G>) -> Self {
        Self {
            draft: RwLock::new(ProjectDraft::new()),
            flight: FlightLock::new(),
            auth,
            gateway,
        }
    }

    /// A snapshot of the current draft.
    #[must_use]
    pub fn draft(&self) -> ProjectDraft {
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

    /// Replaces the draft title.
    ///
    /// Returns `false` without editing when a submission is in flight.
    #[must_use = "the edit is rejected while a submission is in flight"]
    pub fn set_title(&self, title: impl Into<String>) -> bool {
        self.edit(|draft| draft.set_title(title))
    }

    /// Replaces the draft description.
    ///
    /// Returns `false` without editing when a submission is in flight.
    #[must_use = "the edit is rejected while a submission is in flight"]
    pub fn set_description(&self, description: impl Into<String>) -> bool {
        self.edit(|draft| draft.set_description(description))
    }

    fn edit(&self, apply: impl FnOnce(&mut ProjectDraft)) -> bool {
        if self.flight.is_in_flight() {
            log::warn!("project draft edit rejected: submission in flight");
            return false;
        }
        apply(&mut self.draft.write().unwrap_or_else(PoisonError::into_inner));
        true
    }

    /// Submits the current draft.
    ///
    /// On success the form resets to empty and `Ok(())` is the only signal;
    /// there is no success toast in this flow. On every failure the draft is
    /// preserved unchanged and the form returns to idle so the user may
    /// retry without re-entering data.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::AlreadyInFlight`] for overlapping triggers,
    /// [`SubmissionError::Validation`] carrying every violated field when
    /// title or description are empty, [`SubmissionError::Auth`] when token
    /// acquisition fails (no network call is made), and
    /// [`SubmissionError::Gateway`] when the POST fails.
    pub async fn submit(&self) -> SubmissionResult<()> {
        let Some(flight) = self.flight.try_begin() else {
            return Err(SubmissionError::AlreadyInFlight);
        };
        self.run_submission(&flight).await
    }

    async fn run_submission(&self, flight: &FlightGuard<'_>) -> SubmissionResult<()> {
        let violations = validation::validate(&self.draft());
        if !violations.is_empty() {
            return Err(SubmissionError::validation(violations));
        }

        flight.advance(SubmissionPhase::TokenPending);
        let token = match self.auth.access_token().await {
            Ok(token) => token,
            Err(err) => {
                log::error!("project submission aborted: {err}");
                return Err(err.into());
            }
        };

        let snapshot = self.draft();
        let body = serde_json::to_value(ProjectPayload::from(&snapshot))
            .map_err(GatewayError::network)?;

        flight.advance(SubmissionPhase::Submitting);
        if let Err(err) = self
            .gateway
            .post(routes::projects_path(), body, &token)
            .await
        {
            log::error!("project creation failed: {err}");
            return Err(err.into());
        }

        self.draft
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
        Ok(())
    }
}
