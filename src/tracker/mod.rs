//! In-memory goal list and the operations the UI performs on it.
//!
//! [`GoalTracker`] owns the goal collection and the editing cursor. It knows nothing about
//! persistence; [`crate::service::GoalService`] wraps it and saves after every mutation.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    error::InputError,
    model::{
        chart, ChartPoint, Direction, Filter, Goal, GoalDraft, GoalId, GoalInput, Reward,
    },
};

pub mod progress;

#[cfg(test)]
mod tests;

pub use self::progress::{next_delta, ProgressOutcome};

/// What a successful form submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(GoalId),
    Updated(GoalId),
}

/// State container for the goal list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalTracker {
    goals: Vec<Goal>,
    editing: Option<GoalId>,
}

impl GoalTracker {
    /// Creates a tracker over previously stored goals.
    pub fn new(goals: Vec<Goal>) -> Self {
        Self {
            goals,
            editing: None,
        }
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Goal currently loaded into the form, if any.
    pub fn editing(&self) -> Option<GoalId> {
        self.editing
    }

    /// Appends a new goal stamped with the current time.
    pub fn add(&mut self, input: GoalInput) -> GoalId {
        self.add_at(input, Utc::now().timestamp_millis())
    }

    /// Appends a new goal with an id derived from `now_millis`.
    ///
    /// Two goals created within the same millisecond (or after a clock step backwards) would
    /// share an id, so the id is bumped past the largest one in the list when needed.
    pub fn add_at(&mut self, input: GoalInput, now_millis: i64) -> GoalId {
        let id = match self.goals.iter().map(|goal| goal.id).max() {
            Some(max) if max >= now_millis => max.saturating_add(1),
            _ => now_millis,
        };

        self.goals.push(Goal {
            id,
            text: input.text,
            progress: 0,
            target: input.target,
            level: input.level,
            reward: input.reward,
            click_count: 0,
        });

        id
    }

    /// Validates `draft` and either updates the goal being edited or adds a new one.
    ///
    /// # Returns
    /// - `Ok(SubmitOutcome::Updated)` - The goal under edit was updated, editing has ended
    /// - `Ok(SubmitOutcome::Added)` - A new goal was appended
    /// - `Err(InputError)` - Draft was invalid, nothing changed
    pub fn submit(&mut self, draft: &GoalDraft) -> Result<SubmitOutcome, InputError> {
        let input = draft.validate()?;

        if let Some(id) = self.editing.take() {
            if self.update(id, input.clone()) {
                return Ok(SubmitOutcome::Updated(id));
            }
            tracing::debug!("Goal {} under edit no longer exists, adding instead", id);
        }

        Ok(SubmitOutcome::Added(self.add(input)))
    }

    /// Loads a goal into the form for editing.
    ///
    /// Resets the goal's click counter so the next progress click starts from the smallest
    /// step again.
    ///
    /// # Returns
    /// - `Some(GoalDraft)` - Draft pre-filled with the goal's values
    /// - `None` - No goal with this id
    pub fn start_editing(&mut self, id: GoalId) -> Option<GoalDraft> {
        let goal = self.goals.iter_mut().find(|goal| goal.id == id)?;
        goal.click_count = 0;
        self.editing = Some(id);

        Some(GoalDraft::from(&*goal))
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// Replaces a goal's editable fields, keeping its id and progress.
    ///
    /// Progress is clamped when the new target is lower than the current progress. The click
    /// counter starts over.
    ///
    /// # Returns
    /// `true` if a goal with `id` exists and was updated.
    pub fn update(&mut self, id: GoalId, input: GoalInput) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|goal| goal.id == id) else {
            return false;
        };

        goal.text = input.text;
        goal.target = input.target;
        goal.progress = goal.progress.min(input.target);
        goal.level = input.level;
        goal.reward = input.reward;
        goal.click_count = 0;

        true
    }

    /// Applies one progress click in `direction`.
    ///
    /// # Returns
    /// - `Some(ProgressOutcome)` - The click was applied
    /// - `None` - No goal with this id
    pub fn update_progress(
        &mut self,
        id: GoalId,
        direction: Direction,
    ) -> Option<ProgressOutcome> {
        let goal = self.goals.iter_mut().find(|goal| goal.id == id)?;
        Some(progress::apply(goal, direction))
    }

    /// Removes a goal. Ends editing if the removed goal was loaded into the form.
    ///
    /// # Returns
    /// `true` if a goal was removed.
    pub fn delete(&mut self, id: GoalId) -> bool {
        let before = self.goals.len();
        self.goals.retain(|goal| goal.id != id);

        if self.editing == Some(id) {
            self.editing = None;
        }

        self.goals.len() != before
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Goal> {
        self.goals.iter().filter(|goal| filter.matches(goal)).collect()
    }

    /// Goals whose completion is reviewed in the analysis view.
    pub fn delayed(&self) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.reward == Reward::Delayed)
            .collect()
    }

    pub fn chart_points(&self) -> Vec<ChartPoint> {
        chart::chart_points(&self.goals)
    }

    /// Number of completed goals and total number of goals.
    pub fn summary(&self) -> (usize, usize) {
        let completed = self.goals.iter().filter(|goal| goal.is_completed()).count();
        (completed, self.goals.len())
    }
}
