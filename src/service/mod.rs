//! Goal service: the tracker plus wholesale persistence.
//!
//! [`GoalService`] is what the client holds. Every mutating operation applies the change to
//! the in-memory [`GoalTracker`] and then saves the whole collection to the store. Storage
//! failures are logged and never undo the in-memory change, so the UI keeps working when
//! persistence does not.

use dioxus_logger::tracing;

use crate::{
    error::InputError,
    model::{ChartPoint, Direction, Filter, Goal, GoalDraft, GoalId},
    storage::GoalStore,
    tracker::{GoalTracker, ProgressOutcome, SubmitOutcome},
};

pub struct GoalService<S: GoalStore> {
    tracker: GoalTracker,
    store: S,
}

impl<S: GoalStore> GoalService<S> {
    /// Rehydrates the goal list from `store`.
    ///
    /// A store that cannot be read, or holds a malformed blob, is logged and treated as empty;
    /// the next mutation overwrites it.
    pub fn load(store: S) -> Self {
        let goals = match store.load() {
            Ok(goals) => {
                tracing::info!("Loaded {} goal(s)", goals.len());
                goals
            }
            Err(e) => {
                tracing::error!("Failed to load stored goals, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            tracker: GoalTracker::new(goals),
            store,
        }
    }

    pub fn tracker(&self) -> &GoalTracker {
        &self.tracker
    }

    pub fn goals(&self) -> &[Goal] {
        self.tracker.goals()
    }

    pub fn editing(&self) -> Option<GoalId> {
        self.tracker.editing()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Goal> {
        self.tracker.filtered(filter)
    }

    pub fn delayed(&self) -> Vec<&Goal> {
        self.tracker.delayed()
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        self.tracker.chart_points()
    }

    pub fn summary(&self) -> (usize, usize) {
        self.tracker.summary()
    }

    /// Adds or updates a goal from the form.
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome)` - The list changed and was saved
    /// - `Err(InputError)` - The draft was invalid; nothing changed and nothing was saved
    pub fn submit(&mut self, draft: &GoalDraft) -> Result<SubmitOutcome, InputError> {
        let outcome = self.tracker.submit(draft).inspect_err(|e| {
            tracing::debug!("Skipping goal submission: {}", e);
        })?;

        match outcome {
            SubmitOutcome::Added(id) => tracing::debug!("Added goal {}", id),
            SubmitOutcome::Updated(id) => tracing::debug!("Updated goal {}", id),
        }
        self.persist();

        Ok(outcome)
    }

    /// Loads a goal into the form, resetting its click counter.
    pub fn start_editing(&mut self, id: GoalId) -> Option<GoalDraft> {
        let draft = self.tracker.start_editing(id)?;
        self.persist();
        Some(draft)
    }

    pub fn cancel_editing(&mut self) {
        self.tracker.cancel_editing();
    }

    /// Applies one progress click and saves.
    pub fn update_progress(
        &mut self,
        id: GoalId,
        direction: Direction,
    ) -> Option<ProgressOutcome> {
        let outcome = self.tracker.update_progress(id, direction)?;
        if outcome.completed {
            tracing::info!("Goal {} completed", id);
        }
        self.persist();
        Some(outcome)
    }

    /// Removes a goal and saves.
    ///
    /// # Returns
    /// `true` if a goal was removed; nothing is saved otherwise.
    pub fn delete(&mut self, id: GoalId) -> bool {
        if !self.tracker.delete(id) {
            return false;
        }
        tracing::debug!("Deleted goal {}", id);
        self.persist();
        true
    }

    /// Saves the whole collection, logging instead of failing.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(self.tracker.goals()) {
            tracing::error!("Failed to save goals: {}", e);
        }
    }
}
