//! Errors raised by state transitions.
//!
//! A failed transition leaves the caller's snapshot untouched.

use crate::combat::CombatError;
use crate::env::ConfigError;
use crate::error::{ErrorSeverity, GameError};
use crate::fighter::{FighterId, StatsError};
use crate::names::NameError;
use crate::tournament::TournamentError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StateError {
    /// No fighter with this id is on the roster.
    #[error("fighter {0} is not on the roster")]
    UnknownFighter(FighterId),

    /// A fighter with this id is already on the roster.
    #[error("fighter {0} is already on the roster")]
    DuplicateFighter(FighterId),

    #[error("roster is full ({max} fighters)")]
    RosterFull { max: usize },

    #[error("fighter {0} cannot fight itself")]
    SameFighter(FighterId),

    /// Dead or injured fighters cannot be sent into the arena.
    #[error("fighter {0} is not fit to fight")]
    NotFightable(FighterId),

    #[error("fighter {0} cannot train while dead or injured")]
    NotTrainable(FighterId),

    /// The current daily event must be resolved before the next day.
    #[error("a daily event is waiting for a decision")]
    PendingEvent,

    #[error("there is no daily event to resolve")]
    NoPendingEvent,

    /// The pending event targets this fighter.
    #[error("fighter {0} is referenced by the pending event")]
    FighterReferenced(FighterId),

    #[error("fighter id space exhausted")]
    IdOverflow,

    #[error("failed to encode state: {0}")]
    Encoding(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Tournament(#[from] TournamentError),

    #[error(transparent)]
    Names(#[from] NameError),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            IdOverflow | Encoding(_) => ErrorSeverity::Internal,
            Config(err) => err.severity(),
            Combat(err) => err.severity(),
            Tournament(err) => err.severity(),
            Names(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            UnknownFighter(_) => "STATE_UNKNOWN_FIGHTER",
            DuplicateFighter(_) => "STATE_DUPLICATE_FIGHTER",
            RosterFull { .. } => "STATE_ROSTER_FULL",
            SameFighter(_) => "STATE_SAME_FIGHTER",
            NotFightable(_) => "STATE_NOT_FIGHTABLE",
            NotTrainable(_) => "STATE_NOT_TRAINABLE",
            PendingEvent => "STATE_PENDING_EVENT",
            NoPendingEvent => "STATE_NO_PENDING_EVENT",
            FighterReferenced(_) => "STATE_FIGHTER_REFERENCED",
            IdOverflow => "STATE_ID_OVERFLOW",
            Encoding(_) => "STATE_ENCODING",
            Stats(_) => "STATE_INVALID_STATS",
            Config(err) => err.error_code(),
            Combat(err) => err.error_code(),
            Tournament(err) => err.error_code(),
            Names(err) => err.error_code(),
        }
    }
}
