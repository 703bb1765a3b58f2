use serde::{Deserialize, Serialize};

use crate::model::goal::{Goal, GoalId, Level, Reward};

/// Persisted shape of a goal.
///
/// Field names follow the stored blob layout (`clickCount` in camel case). `increment` is
/// written for readers of the blob but recomputed from `level` on load. Numeric fields accept
/// `null`, which older blobs hold where a target failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDto {
    pub id: GoalId,
    pub text: String,
    #[serde(default)]
    pub progress: Option<i64>,
    #[serde(default)]
    pub target: Option<i64>,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub reward: Reward,
    #[serde(default)]
    pub increment: u32,
    #[serde(default)]
    pub click_count: Option<u32>,
}

impl From<&Goal> for GoalDto {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id,
            text: goal.text.clone(),
            progress: Some(i64::from(goal.progress)),
            target: Some(i64::from(goal.target)),
            level: goal.level,
            reward: goal.reward,
            increment: goal.level.base_increment(),
            click_count: Some(goal.click_count),
        }
    }
}

impl GoalDto {
    /// Converts a stored record back into a [`Goal`].
    ///
    /// # Returns
    /// - `Some(Goal)` - Record is usable, progress clamped into `0..=target`
    /// - `None` - Record has blank text or a missing target, or a target outside `1..=u32::MAX`
    pub fn into_goal(self) -> Option<Goal> {
        if self.text.trim().is_empty() {
            return None;
        }
        let target = self
            .target
            .and_then(|target| u32::try_from(target).ok())
            .filter(|target| *target > 0)?;
        let progress = self.progress.unwrap_or(0).clamp(0, i64::from(target)) as u32;

        Some(Goal {
            id: self.id,
            text: self.text,
            progress,
            target,
            level: self.level,
            reward: self.reward,
            click_count: self.click_count.unwrap_or(0),
        })
    }
}
