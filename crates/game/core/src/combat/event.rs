//! Combat log entries.
//!
//! The log is append-only: presentation replays it as an animation and must
//! never re-derive outcomes from it.

/// What happened in one log entry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EventKind {
    /// The attack landed. Value: final damage.
    Hit,
    /// The attack missed. Value: 0.
    Miss,
    /// The landed attack was critical. Value: final damage.
    Crit,
    /// Damage was subtracted. Value: defender health afterwards.
    DamageApplied,
    /// The defender dropped to 0 health. Value: the killing blow's damage.
    Kill,
    /// The fight is over. Value: number of rounds fought.
    FightEnd,
}

/// One entry of a fight log.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEvent {
    pub round: u32,
    pub attacker: String,
    pub defender: String,
    pub kind: EventKind,
    pub value: u32,
}

impl CombatEvent {
    pub fn new(
        round: u32,
        attacker: impl Into<String>,
        defender: impl Into<String>,
        kind: EventKind,
        value: u32,
    ) -> Self {
        Self {
            round,
            attacker: attacker.into(),
            defender: defender.into(),
            kind,
            value,
        }
    }
}

impl core::fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[r{}] {} -> {}: {} ({})",
            self.round, self.attacker, self.defender, self.kind, self.value
        )
    }
}
