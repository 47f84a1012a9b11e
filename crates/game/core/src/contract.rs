//! Contract lifecycle: duration countdown, renewal, overdue wages.

use crate::fighter::ContractState;

/// Result of one day on a contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractStatus {
    /// Days remain.
    Active,
    /// Hit zero and restarted for the full duration.
    Renewed,
    /// Hit zero without auto-renew; the fighter leaves at end of day.
    Expired,
}

/// Counts one day down, renewing when the terms allow.
pub fn tick_contract(contract: &ContractState) -> (ContractState, ContractStatus) {
    let mut next = *contract;
    next.days_remaining = contract.days_remaining.saturating_sub(1);
    if next.days_remaining > 0 {
        return (next, ContractStatus::Active);
    }
    if contract.terms.auto_renew {
        next.days_remaining = contract.terms.duration_days;
        (next, ContractStatus::Renewed)
    } else {
        (next, ContractStatus::Expired)
    }
}

/// Updates the overdue counter from the post-wage balance.
///
/// A negative balance adds an overdue day; a solvent one clears the counter.
pub fn track_overdue(contract: &ContractState, balance: i64) -> ContractState {
    let mut next = *contract;
    next.overdue_days = if balance < 0 {
        contract.overdue_days.saturating_add(1)
    } else {
        0
    };
    next
}

/// Whether unpaid wages have reached the walk-out limit.
pub fn is_terminated(contract: &ContractState) -> bool {
    contract.overdue_days >= contract.terms.max_overdue_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::ContractTerms;

    fn contract(duration: u32, auto_renew: bool) -> ContractState {
        ContractState::signed(ContractTerms {
            duration_days: duration,
            auto_renew,
            ..ContractTerms::default()
        })
    }

    #[test]
    fn counts_down_then_renews() {
        let c = contract(2, true);
        let (c, status) = tick_contract(&c);
        assert_eq!(status, ContractStatus::Active);
        assert_eq!(c.days_remaining(), 1);
        let (c, status) = tick_contract(&c);
        assert_eq!(status, ContractStatus::Renewed);
        assert_eq!(c.days_remaining(), 2);
    }

    #[test]
    fn expires_without_renewal_and_stays_at_zero() {
        let (c, status) = tick_contract(&contract(1, false));
        assert_eq!(status, ContractStatus::Expired);
        assert_eq!(c.days_remaining(), 0);
        let (c, status) = tick_contract(&c);
        assert_eq!(status, ContractStatus::Expired);
        assert_eq!(c.days_remaining(), 0);
    }

    #[test]
    fn overdue_accumulates_and_resets() {
        let c = contract(30, true);
        let c = track_overdue(&c, -1);
        let c = track_overdue(&c, -20);
        assert_eq!(c.overdue_days(), 2);
        assert!(!is_terminated(&c));
        let c = track_overdue(&c, 0);
        assert_eq!(c.overdue_days(), 0);
    }

    #[test]
    fn termination_at_limit() {
        let mut c = contract(30, true);
        for _ in 0..ContractTerms::DEFAULT_MAX_OVERDUE_DAYS {
            c = track_overdue(&c, -5);
        }
        assert!(is_terminated(&c));
    }
}
