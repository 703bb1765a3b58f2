//! Escalating progress arithmetic.
//!
//! Each press of a progress button moves a goal further than the previous one: the Nth click
//! since creation or the last edit moves it by `(2N - 1)` steps, and expert goals take double
//! steps. Both buttons share the click counter, so alternating directions still escalates.

use crate::model::{Direction, Goal, GoalId, Level, Reward};

/// Result of a single progress click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressOutcome {
    pub id: GoalId,
    pub previous: u32,
    pub progress: u32,
    /// Signed amount requested by the click, before clamping.
    pub delta: i64,
    /// The click moved the goal from below its target to at or above it.
    pub completed: bool,
    /// The completion should be celebrated right away (immediate reward goals only).
    pub celebrate: bool,
}

/// Size of the `click`th step (1-based) for a goal of the given level.
pub fn step_delta(click: u32, level: Level) -> u64 {
    let click = u64::from(click.max(1));
    (2 * click - 1) * u64::from(level.base_increment())
}

/// Size of the step the next click on `goal` will apply, as shown on its buttons.
pub fn next_delta(goal: &Goal) -> u64 {
    step_delta(goal.click_count.saturating_add(1), goal.level)
}

/// Applies one progress click to `goal` in place.
///
/// Increments the click counter, moves progress by the escalated step in `direction` and
/// clamps the result into `0..=target`.
pub fn apply(goal: &mut Goal, direction: Direction) -> ProgressOutcome {
    let click_count = goal.click_count.saturating_add(1);
    let step = i64::try_from(step_delta(click_count, goal.level)).unwrap_or(i64::MAX);
    let delta = step.saturating_mul(direction.sign());

    let previous = goal.progress;
    let target = i64::from(goal.target);
    let progress = i64::from(previous).saturating_add(delta).clamp(0, target) as u32;

    let completed = previous < goal.target && progress >= goal.target;

    goal.click_count = click_count;
    goal.progress = progress;

    ProgressOutcome {
        id: goal.id,
        previous,
        progress,
        delta,
        completed,
        celebrate: completed && goal.reward == Reward::Immediate,
    }
}
