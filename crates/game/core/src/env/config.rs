//! Aggregate balance configuration.

use crate::error::{ErrorSeverity, GameError};
use crate::fighter::ContractTerms;

use super::tables::{
    CombatModel, ConditionModel, DailyEventModel, EconomyModel, InjuryModel, RosterLimits,
    TournamentModel, TrainingModel,
};

/// Every tunable the simulation reads.
///
/// The configuration is never stored in [`ArenaState`](crate::state::ArenaState);
/// transitions receive it by reference, so the same snapshot can be replayed
/// under different balance tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ArenaConfig {
    pub combat: CombatModel,
    pub condition: ConditionModel,
    pub injury: InjuryModel,
    pub tournament: TournamentModel,
    pub economy: EconomyModel,
    pub training: TrainingModel,
    pub roster: RosterLimits,
    pub events: DailyEventModel,
    /// Terms offered to newly signed fighters.
    pub contract: ContractTerms,
}

/// A balance parameter outside its legal range.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a probability in [0, 1] (got {value})")]
    NotProbability { field: &'static str, value: f64 },

    #[error("{field}: lower bound {low} exceeds upper bound {high}")]
    InvertedBand {
        field: &'static str,
        low: f64,
        high: f64,
    },

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("tournament needs at least 2 participants (got {0})")]
    TooFewParticipants(usize),

    #[error("prize shares sum to {0}, more than the whole pool")]
    SharesExceedPool(f64),

    #[error("stat {field} = {value} is outside 1..=10")]
    StatOutOfRange { field: &'static str, value: u8 },

    #[error("{field} overflows its integer range")]
    Overflow { field: &'static str },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotProbability { .. } => "CONFIG_NOT_PROBABILITY",
            Self::InvertedBand { .. } => "CONFIG_INVERTED_BAND",
            Self::NotPositive { .. } => "CONFIG_NOT_POSITIVE",
            Self::TooFewParticipants(_) => "CONFIG_TOO_FEW_PARTICIPANTS",
            Self::SharesExceedPool(_) => "CONFIG_SHARES_EXCEED_POOL",
            Self::StatOutOfRange { .. } => "CONFIG_STAT_OUT_OF_RANGE",
            Self::Overflow { .. } => "CONFIG_OVERFLOW",
        }
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::NotProbability { field, value })
    }
}

fn band(field: &'static str, low: f64, high: f64) -> Result<(), ConfigError> {
    if low <= high {
        Ok(())
    } else {
        Err(ConfigError::InvertedBand { field, low, high })
    }
}

fn stat(field: &'static str, value: u8) -> Result<(), ConfigError> {
    if (1..=10).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::StatOutOfRange { field, value })
    }
}

impl ArenaConfig {
    /// Rejects parameter combinations that would break an invariant.
    ///
    /// A positive hit floor and a non-zero damage floor together guarantee that
    /// every fight terminates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.combat;
        probability("combat.hit_base", c.hit_base)?;
        probability("combat.hit_min", c.hit_min)?;
        probability("combat.hit_max", c.hit_max)?;
        band("combat.hit", c.hit_min, c.hit_max)?;
        if c.hit_min <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "combat.hit_min",
            });
        }
        band("combat.variance", c.variance_min, c.variance_max)?;
        if c.variance_min <= 0.0 {
            return Err(ConfigError::NotPositive {
                field: "combat.variance_min",
            });
        }
        probability("combat.crit_base", c.crit_base)?;
        probability("combat.crit_max", c.crit_max)?;
        if c.crit_multiplier < 1.0 {
            return Err(ConfigError::InvertedBand {
                field: "combat.crit_multiplier",
                low: 1.0,
                high: c.crit_multiplier,
            });
        }
        if c.min_damage == 0 {
            return Err(ConfigError::NotPositive {
                field: "combat.min_damage",
            });
        }

        let i = &self.injury;
        probability("injury.winner_chance", i.winner_chance)?;
        probability("injury.loser_chance", i.loser_chance)?;
        band("injury.thresholds", i.sprain_threshold, i.fracture_threshold)?;
        for (field, days) in [
            ("injury.bruise_days", i.bruise_days),
            ("injury.sprain_days", i.sprain_days),
            ("injury.fracture_days", i.fracture_days),
        ] {
            if days == 0 {
                return Err(ConfigError::NotPositive { field });
            }
        }

        let t = &self.tournament;
        if t.min_participants < 2 {
            return Err(ConfigError::TooFewParticipants(t.min_participants));
        }
        probability("tournament.champion_share", t.champion_share)?;
        probability("tournament.runner_up_share", t.runner_up_share)?;
        let shares = t.champion_share + t.runner_up_share;
        if shares > 1.0 {
            return Err(ConfigError::SharesExceedPool(shares));
        }

        probability("training.gain_chance", self.training.gain_chance)?;
        stat("training.stat_cap", self.training.stat_cap)?;

        let r = &self.roster;
        if r.max_fighters == 0 {
            return Err(ConfigError::NotPositive {
                field: "roster.max_fighters",
            });
        }
        stat("roster.recruit_stat_min", r.recruit_stat_min)?;
        stat("roster.recruit_stat_max", r.recruit_stat_max)?;
        band(
            "roster.recruit_stats",
            r.recruit_stat_min as f64,
            r.recruit_stat_max as f64,
        )?;

        let e = &self.events;
        probability("events.chance", e.chance)?;
        e.sponsor_step
            .checked_mul(e.sponsor_steps)
            .and_then(|spread| spread.checked_add(e.sponsor_base))
            .ok_or(ConfigError::Overflow {
                field: "events.sponsor_offer",
            })?;

        if self.contract.duration_days == 0 {
            return Err(ConfigError::NotPositive {
                field: "contract.duration_days",
            });
        }
        if self.contract.max_overdue_days == 0 {
            return Err(ConfigError::NotPositive {
                field: "contract.max_overdue_days",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ArenaConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_hit_floor() {
        let mut config = ArenaConfig::default();
        config.combat.hit_min = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "combat.hit_min"
            })
        );
    }

    #[test]
    fn rejects_inverted_variance() {
        let mut config = ArenaConfig::default();
        config.combat.variance_min = 1.2;
        config.combat.variance_max = 0.9;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedBand {
                field: "combat.variance",
                ..
            })
        ));
    }

    #[test]
    fn rejects_generous_prize_split() {
        let mut config = ArenaConfig::default();
        config.tournament.champion_share = 0.8;
        config.tournament.runner_up_share = 0.3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SharesExceedPool(_))
        ));
    }

    #[test]
    fn rejects_single_entrant_tournaments() {
        let mut config = ArenaConfig::default();
        config.tournament.min_participants = 1;
        assert_eq!(config.validate(), Err(ConfigError::TooFewParticipants(1)));
    }

    #[test]
    fn rejects_sponsor_offers_past_u32() {
        let mut config = ArenaConfig::default();
        config.events.sponsor_step = u32::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Overflow {
                field: "events.sponsor_offer"
            })
        );

        config.events.sponsor_step = 1;
        config.events.sponsor_steps = 1;
        config.events.sponsor_base = u32::MAX;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_errors_are_validation() {
        let err = ConfigError::TooFewParticipants(0);
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
