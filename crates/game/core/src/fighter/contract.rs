//! Contract value types.

/// What a fighter signed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ContractTerms {
    pub daily_wage: u32,
    pub duration_days: u32,
    pub auto_renew: bool,
    /// Consecutive insolvent days after which the fighter walks out.
    pub max_overdue_days: u32,
}

impl ContractTerms {
    pub const DEFAULT_DAILY_WAGE: u32 = 5;
    pub const DEFAULT_DURATION_DAYS: u32 = 30;
    pub const DEFAULT_MAX_OVERDUE_DAYS: u32 = 3;
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self {
            daily_wage: Self::DEFAULT_DAILY_WAGE,
            duration_days: Self::DEFAULT_DURATION_DAYS,
            auto_renew: true,
            max_overdue_days: Self::DEFAULT_MAX_OVERDUE_DAYS,
        }
    }
}

/// Live contract of one fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContractState {
    pub(crate) terms: ContractTerms,
    pub(crate) days_remaining: u32,
    pub(crate) overdue_days: u32,
}

impl ContractState {
    /// A freshly signed contract running for the full duration.
    pub fn signed(terms: ContractTerms) -> Self {
        Self {
            terms,
            days_remaining: terms.duration_days,
            overdue_days: 0,
        }
    }

    #[inline]
    pub const fn terms(&self) -> &ContractTerms {
        &self.terms
    }

    #[inline]
    pub const fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    #[inline]
    pub const fn overdue_days(&self) -> u32 {
        self.overdue_days
    }
}
