//! Alternating-turn fight engine.

use crate::env::{CombatModel, ConditionModel, RngSource};
use crate::fighter::Fighter;

use super::CombatError;
use super::event::{CombatEvent, EventKind};
use super::result::resolve_attack;

/// Outcome of a finished fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightResult {
    /// Survivor snapshot at the end of the fight.
    pub winner: Fighter,
    /// Loser snapshot, always at 0 health.
    pub loser: Fighter,
    pub rounds: u32,
    /// Ordered event sequence; ends with `Kill`, `FightEnd`.
    pub log: Vec<CombatEvent>,
}

/// Runs a fight to the finish.
///
/// Round numbering starts at 1. In odd rounds `first` attacks `second`; in
/// even rounds the roles swap, so `first` always strikes first. The fight
/// continues while both sides are alive; a draw is impossible.
///
/// Termination relies on a positive hit floor and a non-zero damage floor.
/// Both are checked here as well as in
/// [`ArenaConfig::validate`](crate::env::ArenaConfig::validate).
///
/// # Errors
///
/// [`CombatError::SameFighter`] if both sides share an id,
/// [`CombatError::DeadCombatant`] if either side starts dead,
/// [`CombatError::NoProgress`] if `combat` could never end the fight.
pub fn simulate_fight(
    first: &Fighter,
    second: &Fighter,
    rng: &mut impl RngSource,
    combat: &CombatModel,
    condition: &ConditionModel,
) -> Result<FightResult, CombatError> {
    if first.id() == second.id() {
        return Err(CombatError::SameFighter(first.id()));
    }
    if !can_finish(combat) {
        return Err(CombatError::NoProgress);
    }
    for fighter in [first, second] {
        if !fighter.is_alive() {
            return Err(CombatError::DeadCombatant {
                fighter: fighter.id(),
                round: 1,
            });
        }
    }

    let mut a = first.clone();
    let mut b = second.clone();
    let mut log = Vec::new();
    let mut round = 0u32;

    while a.is_alive() && b.is_alive() {
        round += 1;
        let first_attacks = round % 2 == 1;
        let (attacker, defender) = if first_attacks { (&a, &b) } else { (&b, &a) };

        let outcome = resolve_attack(attacker, defender, round, rng, combat, condition)?;
        let attacker_name = attacker.name().to_owned();
        let defender_name = defender.name().to_owned();
        let damage = outcome.damage;
        let killed = !outcome.defender.is_alive();

        log.extend(outcome.events);
        if first_attacks {
            b = outcome.defender;
        } else {
            a = outcome.defender;
        }

        if killed {
            log.push(CombatEvent::new(
                round,
                attacker_name.clone(),
                defender_name.clone(),
                EventKind::Kill,
                damage,
            ));
            log.push(CombatEvent::new(
                round,
                attacker_name,
                defender_name,
                EventKind::FightEnd,
                round,
            ));
        }
    }

    let (winner, loser) = if a.is_alive() { (a, b) } else { (b, a) };
    tracing::debug!(
        winner = %winner.id(),
        loser = %loser.id(),
        rounds = round,
        events = log.len(),
        "fight resolved"
    );

    Ok(FightResult {
        winner,
        loser,
        rounds: round,
        log,
    })
}

fn can_finish(combat: &CombatModel) -> bool {
    combat.hit_min > 0.0 && combat.hit_min <= combat.hit_max && combat.min_damage > 0
}
