//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic: the only source of variation is the
//! [`RngSource`](crate::env::RngSource) passed in by the caller.
//!
//! # Core Functions
//!
//! - `resolve_attack`: one attack (hit check, damage, crit, defense)
//! - `simulate_fight`: alternating attacks until one side drops
//! - `settle_fight`: post-fight injuries and morale/fatigue shifts

pub mod aftermath;
pub mod damage;
pub mod event;
pub mod fight;
pub mod hit;
pub mod result;

pub use aftermath::{Aftermath, settle_fight};
pub use damage::{base_damage, calculate_defense, mitigated_damage, modified_damage};
pub use event::{CombatEvent, EventKind};
pub use fight::{FightResult, simulate_fight};
pub use hit::{calculate_crit_chance, calculate_hit_chance};
pub use result::{AttackOutcome, AttackResult, resolve_attack};

use crate::error::{ErrorSeverity, GameError};
use crate::fighter::FighterId;

/// Broken combat preconditions. These are caller bugs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("fighter {fighter} is dead and cannot take part in round {round}")]
    DeadCombatant { fighter: FighterId, round: u32 },

    #[error("fighter {0} cannot fight itself")]
    SameFighter(FighterId),

    /// The hit band or damage floor lets a fight go on forever.
    #[error("combat model cannot finish a fight (needs 0 < hit_min <= hit_max and min_damage > 0)")]
    NoProgress,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoProgress => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DeadCombatant { .. } => "COMBAT_DEAD_COMBATANT",
            Self::SameFighter(_) => "COMBAT_SAME_FIGHTER",
            Self::NoProgress => "COMBAT_NO_PROGRESS",
        }
    }
}
