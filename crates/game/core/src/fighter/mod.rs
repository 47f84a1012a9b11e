//! Fighter entity model.
//!
//! Fighters are immutable values: every change (damage, healing, training,
//! morale) returns a new `Fighter`. The state aggregate swaps snapshots rather
//! than editing them in place.
mod contract;
mod injury;
mod stats;

pub use contract::{ContractState, ContractTerms};
pub use injury::{Injury, InjuryKind};
pub use stats::{HEALTH_PER_STAMINA, STAT_MAX, STAT_MIN, Stats, StatsError, TrainingFocus};

/// Upper bound of the morale and fatigue meters.
pub const METER_MAX: u8 = 100;

/// Unique roster identifier. Allocated monotonically, never reused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterId(pub u32);

impl core::fmt::Display for FighterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Clamps a signed meter value into `0..=100`.
#[inline]
pub(crate) fn clamp_meter(value: i32) -> u8 {
    value.clamp(0, METER_MAX as i32) as u8
}

/// A gladiator on the roster.
///
/// Invariants: `0 <= health <= max_health`; alive iff `health > 0`;
/// fightable iff alive and uninjured; morale and fatigue stay in `0..=100`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    id: FighterId,
    name: String,
    stats: Stats,
    health: u32,
    max_health: u32,
    training: Option<TrainingFocus>,
    injury: Option<Injury>,
    morale: u8,
    fatigue: u8,
    contract: ContractState,
}

impl Fighter {
    /// Morale of a freshly signed fighter.
    pub const STARTING_MORALE: u8 = 50;

    /// Factory: full health, neutral morale, no fatigue, fresh contract.
    pub fn new(id: FighterId, name: impl Into<String>, stats: Stats, terms: ContractTerms) -> Self {
        let max_health = stats.max_health();
        Self {
            id,
            name: name.into(),
            stats,
            health: max_health,
            max_health,
            training: None,
            injury: None,
            morale: Self::STARTING_MORALE,
            fatigue: 0,
            contract: ContractState::signed(terms),
        }
    }

    #[inline]
    pub const fn id(&self) -> FighterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[inline]
    pub const fn health(&self) -> u32 {
        self.health
    }

    #[inline]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    #[inline]
    pub const fn training(&self) -> Option<TrainingFocus> {
        self.training
    }

    #[inline]
    pub const fn injury(&self) -> Option<&Injury> {
        self.injury.as_ref()
    }

    #[inline]
    pub const fn morale(&self) -> u8 {
        self.morale
    }

    #[inline]
    pub const fn fatigue(&self) -> u8 {
        self.fatigue
    }

    #[inline]
    pub const fn contract(&self) -> &ContractState {
        &self.contract
    }

    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub const fn is_injured(&self) -> bool {
        self.injury.is_some()
    }

    /// Alive and uninjured.
    pub const fn is_fightable(&self) -> bool {
        self.is_alive() && !self.is_injured()
    }

    /// Training requires the same condition as fighting.
    pub const fn can_train(&self) -> bool {
        self.is_fightable()
    }

    /// Health reduced by `damage`, floored at 0.
    #[must_use]
    pub fn damaged(&self, damage: u32) -> Self {
        Self {
            health: self.health.saturating_sub(damage),
            ..self.clone()
        }
    }

    /// Health raised by `amount`, capped at max. The dead stay dead.
    #[must_use]
    pub fn healed(&self, amount: u32) -> Self {
        if !self.is_alive() {
            return self.clone();
        }
        Self {
            health: self.health.saturating_add(amount).min(self.max_health),
            ..self.clone()
        }
    }

    /// New attributes; a max-health change moves current health by the same delta.
    #[must_use]
    pub fn with_stats(&self, stats: Stats) -> Self {
        let max_health = stats.max_health();
        let health = if self.is_alive() {
            (self.health as i64 + max_health as i64 - self.max_health as i64)
                .clamp(1, max_health as i64) as u32
        } else {
            0
        };
        Self {
            stats,
            health,
            max_health,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_training(&self, training: Option<TrainingFocus>) -> Self {
        Self {
            training,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_injury(&self, injury: Option<Injury>) -> Self {
        Self {
            injury,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_contract(&self, contract: ContractState) -> Self {
        Self {
            contract,
            ..self.clone()
        }
    }

    /// Morale shifted by `delta`, clamped to `0..=100`.
    #[must_use]
    pub fn morale_adjusted(&self, delta: i32) -> Self {
        Self {
            morale: clamp_meter(self.morale as i32 + delta),
            ..self.clone()
        }
    }

    /// Fatigue shifted by `delta`, clamped to `0..=100`.
    #[must_use]
    pub fn fatigue_adjusted(&self, delta: i32) -> Self {
        Self {
            fatigue: clamp_meter(self.fatigue as i32 + delta),
            ..self.clone()
        }
    }

    /// Explicit meter values, clamped to `0..=100`.
    #[must_use]
    pub fn with_condition(&self, morale: u8, fatigue: u8) -> Self {
        Self {
            morale: morale.min(METER_MAX),
            fatigue: fatigue.min(METER_MAX),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(stats: (u8, u8, u8)) -> Fighter {
        Fighter::new(
            FighterId(1),
            "Varro",
            Stats::new(stats.0, stats.1, stats.2).unwrap(),
            ContractTerms::default(),
        )
    }

    #[test]
    fn factory_starts_at_full_health() {
        let f = fighter((8, 5, 6));
        assert_eq!(f.health(), 60);
        assert_eq!(f.max_health(), 60);
        assert!(f.is_fightable());
        assert_eq!(f.morale(), Fighter::STARTING_MORALE);
        assert_eq!(f.contract().days_remaining(), 30);
    }

    #[test]
    fn damage_floors_at_zero() {
        let f = fighter((5, 5, 2)).damaged(500);
        assert_eq!(f.health(), 0);
        assert!(!f.is_alive());
        assert!(!f.is_fightable());
    }

    #[test]
    fn healing_caps_and_skips_the_dead() {
        let f = fighter((5, 5, 5)).damaged(7).healed(100);
        assert_eq!(f.health(), 50);
        let dead = f.damaged(50).healed(10);
        assert_eq!(dead.health(), 0);
    }

    #[test]
    fn stamina_gain_moves_health() {
        let f = fighter((5, 5, 5)).damaged(20);
        let trained = f.with_stats(Stats::new(5, 5, 6).unwrap());
        assert_eq!(trained.max_health(), 60);
        assert_eq!(trained.health(), 40);
    }

    #[test]
    fn injured_fighter_cannot_fight() {
        let f = fighter((5, 5, 5)).with_injury(Some(Injury::new(InjuryKind::Bruise, 2)));
        assert!(f.is_alive());
        assert!(!f.is_fightable());
        assert!(!f.can_train());
    }

    #[test]
    fn meters_clamp() {
        let f = fighter((5, 5, 5)).morale_adjusted(500).fatigue_adjusted(-40);
        assert_eq!(f.morale(), 100);
        assert_eq!(f.fatigue(), 0);
        let f = f.morale_adjusted(-250).fatigue_adjusted(130);
        assert_eq!(f.morale(), 0);
        assert_eq!(f.fatigue(), 100);
    }
}
