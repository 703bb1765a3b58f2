use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Goal identifier, milliseconds since the Unix epoch at creation time.
pub type GoalId = i64;

/// Difficulty level of a goal, scales every progress step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Expert,
}

impl Level {
    /// Multiplier applied to every progress step.
    pub fn base_increment(self) -> u32 {
        match self {
            Self::Beginner => 1,
            Self::Expert => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "expert" => Ok(Self::Expert),
            other => Err(format!("unknown level {other:?}")),
        }
    }
}

/// When the completion of a goal is rewarded.
///
/// Immediate goals celebrate the moment they cross their target, delayed goals are reviewed in
/// the analysis view instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reward {
    #[default]
    Immediate,
    Delayed,
}

impl Reward {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Delayed => "delayed",
        }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reward {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Self::Immediate),
            "delayed" => Ok(Self::Delayed),
            other => Err(format!("unknown reward {other:?}")),
        }
    }
}

/// Which of the two progress buttons was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn sign(self) -> i64 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

/// A trackable numeric objective.
///
/// `progress` always stays within `0..=target`; every mutation in the tracker clamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub id: GoalId,
    pub text: String,
    pub progress: u32,
    pub target: u32,
    pub level: Level,
    pub reward: Reward,
    /// Number of progress clicks since creation or the last edit.
    pub click_count: u32,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.progress >= self.target
    }

    /// Progress as a percentage of the target, for the progress bar width.
    pub fn percent(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        (f64::from(self.progress) / f64::from(self.target) * 100.0).min(100.0)
    }
}

/// Validated form values for creating or updating a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalInput {
    pub text: String,
    pub target: u32,
    pub level: Level,
    pub reward: Reward,
}
