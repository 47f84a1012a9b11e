//! Daily stat progression.

use crate::env::{RngSource, TrainingModel};
use crate::fighter::{Fighter, TrainingFocus};

/// Rolls one day of training.
///
/// Only fighters with a focus that are able to train roll (one draw each);
/// a success raises the focused stat unless it already sits at the cap.
/// Returns the new snapshot and the stat gained, if any.
pub fn roll_training_gain(
    fighter: &Fighter,
    rng: &mut impl RngSource,
    model: &TrainingModel,
) -> (Fighter, Option<TrainingFocus>) {
    let Some(focus) = fighter.training() else {
        return (fighter.clone(), None);
    };
    if !fighter.can_train() || !rng.chance(model.gain_chance) {
        return (fighter.clone(), None);
    }
    match fighter.stats().raised(focus, model.stat_cap) {
        Some(stats) => (fighter.with_stats(stats), Some(focus)),
        None => (fighter.clone(), None),
    }
}
