//! JSON encoding of the goal collection.
//!
//! The blob is a JSON array of [`GoalDto`] records. Decoding is lenient about individual
//! records so that one bad entry does not cost the user every other goal: unusable records are
//! dropped with a warning and progress is clamped back into range.

use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{
    error::Error,
    model::{Goal, GoalDto},
};

pub fn encode(goals: &[Goal]) -> Result<String, Error> {
    let records: Vec<GoalDto> = goals.iter().map(GoalDto::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes a stored blob into goals.
///
/// # Returns
/// - `Ok(Vec<Goal>)` - Usable goals in stored order; records that do not parse, have blank
///   text, a missing or non-positive target, or an id already seen are skipped
/// - `Err(Error::Serialization)` - The blob is not a JSON array
pub fn decode(blob: &str) -> Result<Vec<Goal>, Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(blob)?;
    let mut seen = HashSet::new();
    let mut goals = Vec::with_capacity(values.len());

    for (index, value) in values.into_iter().enumerate() {
        let record = match serde_json::from_value::<GoalDto>(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping unreadable stored goal at index {}: {}", index, e);
                continue;
            }
        };
        let id = record.id;
        if !seen.insert(id) {
            tracing::warn!("Skipping stored goal with duplicate id {}", id);
            continue;
        }
        match record.into_goal() {
            Some(goal) => goals.push(goal),
            None => tracing::warn!("Skipping invalid stored goal {}", id),
        }
    }

    Ok(goals)
}
