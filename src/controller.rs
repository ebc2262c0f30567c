//! Workflow controller.
//!
//! Sequences the page's two operations, the load cycle and meal submission,
//! over a data-access implementation and a notification sink. It is the only
//! place failures are caught: each boundary turns an error into one
//! notification plus one diagnostic, and nothing is retried.

use crate::config::Config;
use crate::models::meal::MealDraft;
use crate::services::api::NutritionApi;
use crate::services::notifier::{NotificationKind, Notifier};
use crate::utils::diagnostics;
use crate::view::render;
use crate::view::state::{SubmitButton, ViewHandle};
use futures_util::future::try_join;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add meal. Please try again.";
pub const SUBMIT_SUCCEEDED_MESSAGE: &str = "Meal added successfully!";

pub struct Controller<A, N> {
    api: A,
    notifier: N,
    user_id: String,
    meals_limit: u32,
}

/// A submission whose draft has been taken from the form.
///
/// Holds the submit control in its busy state; dropping it restores the
/// control, whichever way the submission ends.
#[derive(Debug)]
pub struct PendingSubmission {
    draft: MealDraft,
    _button: ButtonGuard,
}

impl PendingSubmission {
    pub fn draft(&self) -> &MealDraft {
        &self.draft
    }
}

#[derive(Debug)]
struct ButtonGuard {
    view: ViewHandle,
}

impl Drop for ButtonGuard {
    fn drop(&mut self) {
        self.view.update(|v| v.submit = SubmitButton::idle());
    }
}

impl<A: NutritionApi, N: Notifier> Controller<A, N> {
    pub fn new(api: A, notifier: N, user_id: impl Into<String>) -> Self {
        Self {
            api,
            notifier,
            user_id: user_id.into(),
            meals_limit: Config::MEALS_LIMIT,
        }
    }

    /// Overrides how many meals each load cycle asks for.
    pub fn with_meals_limit(mut self, limit: u32) -> Self {
        self.meals_limit = limit;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Initial load once the page is mounted.
    pub async fn init(&self, view: &ViewHandle) {
        diagnostics::info(&format!("Loading diet data for user {}", self.user_id));
        self.load_data(view).await;
    }

    /// Runs one load cycle.
    ///
    /// Stats and meals are fetched concurrently and rendered only if both
    /// succeed. On any failure nothing is rendered and the stat targets keep
    /// the loading placeholder.
    pub async fn load_data(&self, view: &ViewHandle) {
        view.update(|v| render::show_loading(&mut v.stats));

        let result = try_join(
            self.api.fetch_stats(&self.user_id),
            self.api.fetch_meals(&self.user_id, Some(self.meals_limit)),
        )
        .await;

        match result {
            Ok((stats, meals)) => view.update(|v| {
                render::update_stats(&mut v.stats, &stats);
                render::update_meals_list(&mut v.meals, Some(meals.as_slice()));
            }),
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, LOAD_FAILED_MESSAGE);
                diagnostics::error("Error loading data", &e);
            }
        }
    }

    /// Synchronous half of a submission: takes the draft from the form and
    /// puts the submit control into its busy state.
    ///
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submission(&self, view: &ViewHandle) -> Option<PendingSubmission> {
        view.update(|v| {
            if v.submit.is_busy() {
                return None;
            }
            v.submit = SubmitButton::busy();
            Some(v.form.to_draft(&self.user_id))
        })
        .map(|draft| PendingSubmission {
            draft,
            _button: ButtonGuard { view: view.clone() },
        })
    }

    /// Creates the meal, resets the form, reloads, and reports the outcome.
    /// The submit control is restored when `pending` is dropped at the end.
    pub async fn complete_submission(&self, view: &ViewHandle, pending: PendingSubmission) {
        match self.api.create_meal(&pending.draft).await {
            Ok(_) => {
                view.update(|v| v.form.reset());
                self.load_data(view).await;
                self.notifier
                    .notify(NotificationKind::Success, SUBMIT_SUCCEEDED_MESSAGE);
            }
            Err(e) => {
                self.notifier
                    .notify(NotificationKind::Error, SUBMIT_FAILED_MESSAGE);
                diagnostics::error("Error creating meal", &e);
            }
        }
    }

    /// Handles one form submission end to end.
    pub async fn submit(&self, view: &ViewHandle) {
        if let Some(pending) = self.begin_submission(view) {
            self.complete_submission(view, pending).await;
        }
    }
}
