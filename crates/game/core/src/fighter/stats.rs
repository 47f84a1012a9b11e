//! Core attributes.

/// Lowest legal attribute value.
pub const STAT_MIN: u8 = 1;
/// Highest legal attribute value.
pub const STAT_MAX: u8 = 10;

/// Health granted per point of stamina.
pub const HEALTH_PER_STAMINA: u32 = 10;

/// Attribute a fighter can train.
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
pub enum TrainingFocus {
    Strength,
    Agility,
    Stamina,
}

/// Invalid attribute value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{stat} = {value} is outside {STAT_MIN}..={STAT_MAX}")]
pub struct StatsError {
    pub stat: TrainingFocus,
    pub value: u8,
}

/// Strength, agility and stamina, each in `1..=10`.
///
/// Values never change except through training, which produces a new `Stats`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    strength: u8,
    agility: u8,
    stamina: u8,
}

impl Stats {
    pub fn new(strength: u8, agility: u8, stamina: u8) -> Result<Self, StatsError> {
        for (stat, value) in [
            (TrainingFocus::Strength, strength),
            (TrainingFocus::Agility, agility),
            (TrainingFocus::Stamina, stamina),
        ] {
            if !(STAT_MIN..=STAT_MAX).contains(&value) {
                return Err(StatsError { stat, value });
            }
        }
        Ok(Self {
            strength,
            agility,
            stamina,
        })
    }

    #[inline]
    pub const fn strength(&self) -> u8 {
        self.strength
    }

    #[inline]
    pub const fn agility(&self) -> u8 {
        self.agility
    }

    #[inline]
    pub const fn stamina(&self) -> u8 {
        self.stamina
    }

    pub const fn get(&self, stat: TrainingFocus) -> u8 {
        match stat {
            TrainingFocus::Strength => self.strength,
            TrainingFocus::Agility => self.agility,
            TrainingFocus::Stamina => self.stamina,
        }
    }

    /// Maximum health: stamina × 10.
    pub const fn max_health(&self) -> u32 {
        self.stamina as u32 * HEALTH_PER_STAMINA
    }

    /// Raises one attribute by a point, or `None` when it already sits at `cap`.
    pub fn raised(&self, stat: TrainingFocus, cap: u8) -> Option<Self> {
        let cap = cap.min(STAT_MAX);
        if self.get(stat) >= cap {
            return None;
        }
        let mut next = *self;
        match stat {
            TrainingFocus::Strength => next.strength += 1,
            TrainingFocus::Agility => next.agility += 1,
            TrainingFocus::Stamina => next.stamina += 1,
        }
        Some(next)
    }
}
