//! Injury value types.

/// Severity of a post-fight injury.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InjuryKind {
    Bruise,
    Sprain,
    Fracture,
}

/// An injury with at least one recovery day left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Injury {
    kind: InjuryKind,
    recovery_days_left: u32,
}

impl Injury {
    /// Creates an injury; a zero recovery period is raised to one day.
    pub fn new(kind: InjuryKind, recovery_days: u32) -> Self {
        Self {
            kind,
            recovery_days_left: recovery_days.max(1),
        }
    }

    #[inline]
    pub const fn kind(&self) -> InjuryKind {
        self.kind
    }

    #[inline]
    pub const fn recovery_days_left(&self) -> u32 {
        self.recovery_days_left
    }

    /// One day of recovery. `None` once healed.
    pub fn tick(&self) -> Option<Self> {
        let left = self.recovery_days_left.saturating_sub(1);
        (left > 0).then_some(Self {
            kind: self.kind,
            recovery_days_left: left,
        })
    }
}
