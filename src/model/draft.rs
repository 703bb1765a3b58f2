use crate::{
    error::InputError,
    model::goal::{Goal, GoalInput, Level, Reward},
};

/// Raw goal form values as typed by the user.
///
/// The target is kept as the entered string so the form can hold partially typed or invalid
/// values; [`GoalDraft::validate`] decides whether a submission goes through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalDraft {
    pub text: String,
    pub target: String,
    pub level: Level,
    pub reward: Reward,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            target: "1".to_string(),
            level: Level::default(),
            reward: Reward::default(),
        }
    }
}

impl GoalDraft {
    /// Validates the draft into a [`GoalInput`].
    ///
    /// The target takes the leading integer of the typed text, so `"2.5"` reads as 2 and
    /// `"3 laps"` as 3.
    ///
    /// # Returns
    /// - `Ok(GoalInput)` - Text is not blank and target is a positive whole number
    /// - `Err(InputError::EmptyText)` - Text is empty or whitespace only
    /// - `Err(InputError::InvalidTarget)` - Target has no leading digits or is too large
    /// - `Err(InputError::NonPositiveTarget)` - Target is zero or negative
    pub fn validate(&self) -> Result<GoalInput, InputError> {
        if self.text.trim().is_empty() {
            return Err(InputError::EmptyText);
        }

        let raw = self.target.trim();
        let target = leading_integer(raw).ok_or_else(|| InputError::InvalidTarget(raw.to_string()))?;
        if target <= 0 {
            return Err(InputError::NonPositiveTarget(target));
        }
        let target =
            u32::try_from(target).map_err(|_| InputError::InvalidTarget(raw.to_string()))?;

        Ok(GoalInput {
            text: self.text.clone(),
            target,
            level: self.level,
            reward: self.reward,
        })
    }
}

/// Parses an optional sign followed by the leading run of ASCII digits.
fn leading_integer(raw: &str) -> Option<i64> {
    let (sign, rest) = match raw.as_bytes().first() {
        Some(b'-') => (-1, &raw[1..]),
        Some(b'+') => (1, &raw[1..]),
        _ => (1, raw),
    };
    let digits = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|value| sign * value)
}

impl From<&Goal> for GoalDraft {
    fn from(goal: &Goal) -> Self {
        Self {
            text: goal.text.clone(),
            target: goal.target.to_string(),
            level: goal.level,
            reward: goal.reward,
        }
    }
}
