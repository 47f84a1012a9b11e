//! Attack resolution.

use crate::condition::fighter_efficiency;
use crate::env::{CombatModel, ConditionModel, RngSource};
use crate::fighter::Fighter;

use super::CombatError;
use super::damage::{calculate_defense, critical_damage, mitigated_damage, modified_damage};
use super::event::{CombatEvent, EventKind};
use super::hit::{calculate_crit_chance, calculate_hit_chance};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Attack hit and was critical.
    Critical,
}

/// Result of one attack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// Defender snapshot after damage.
    pub defender: Fighter,
    /// Final damage dealt (0 on a miss).
    pub damage: u32,
    /// `Miss`, or `Hit`, optional `Crit`, `DamageApplied`.
    pub events: Vec<CombatEvent>,
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }

    pub fn is_crit(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Critical)
    }
}

/// Resolve a single attack.
///
/// The step order fixes how many draws the attack consumes, and therefore the
/// rest of the stream:
///
/// 1. hit roll (one double); a miss stops here
/// 2. damage variance (one double), scaled by the attacker's efficiency
/// 3. crit roll (one double)
/// 4. defense and damage floor (no draws)
/// 5. damage application
///
/// # Errors
///
/// [`CombatError::DeadCombatant`] when either side is already at 0 health.
pub fn resolve_attack(
    attacker: &Fighter,
    defender: &Fighter,
    round: u32,
    rng: &mut impl RngSource,
    combat: &CombatModel,
    condition: &ConditionModel,
) -> Result<AttackResult, CombatError> {
    for fighter in [attacker, defender] {
        if !fighter.is_alive() {
            return Err(CombatError::DeadCombatant {
                fighter: fighter.id(),
                round,
            });
        }
    }

    let event =
        |kind, value| CombatEvent::new(round, attacker.name(), defender.name(), kind, value);

    // 1. Hit check
    let hit_chance = calculate_hit_chance(attacker.stats(), defender.stats(), combat);
    if !rng.chance(hit_chance) {
        return Ok(AttackResult {
            outcome: AttackOutcome::Miss,
            defender: defender.clone(),
            damage: 0,
            events: vec![event(EventKind::Miss, 0)],
        });
    }

    // 2. Variance and efficiency
    let variance =
        combat.variance_min + rng.next_f64() * (combat.variance_max - combat.variance_min);
    let efficiency = fighter_efficiency(attacker, condition);
    let mut damage = modified_damage(attacker.stats(), variance, efficiency);

    // 3. Critical, rolled only after a confirmed hit
    let crit = rng.chance(calculate_crit_chance(attacker.stats(), combat));
    if crit {
        damage = critical_damage(damage, combat);
    }

    // 4. Defense
    let defense = calculate_defense(defender.stats(), combat);
    let damage = mitigated_damage(damage, defense, combat);

    // 5. Apply
    let defender = defender.damaged(damage);

    let mut events = Vec::with_capacity(3);
    events.push(event(EventKind::Hit, damage));
    if crit {
        events.push(event(EventKind::Crit, damage));
    }
    events.push(event(EventKind::DamageApplied, defender.health()));

    Ok(AttackResult {
        outcome: if crit {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        defender,
        damage,
        events,
    })
}
