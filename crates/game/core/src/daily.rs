//! Narrative day events.
//!
//! At most one event is rolled per day. The player must pick one of its two
//! options before the next day can start; each option has a fixed effect on
//! money and on the morale/fatigue of the whole living roster or one target.

use crate::env::{DailyEventModel, RngSource};
use crate::fighter::FighterId;

/// An event awaiting the player's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DailyEvent {
    /// A patron offers coin for the right to parade the stable.
    SponsorDeal { offer: u32 },
    /// Gossip in the tavern about the stable's reputation.
    TavernRumor,
    /// The lanista wants to drive one fighter through a brutal drill.
    HarshDrill { target: FighterId },
}

/// Which of the two options the player picked.
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
pub enum EventOption {
    First,
    Second,
}

/// Morale/fatigue change for a single fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetEffect {
    pub fighter: FighterId,
    pub morale: i32,
    pub fatigue: i32,
}

/// Everything an option changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventEffect {
    pub money: i64,
    /// Morale change for every living fighter.
    pub roster_morale: i32,
    pub target: Option<TargetEffect>,
}

/// An event together with the option that settled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedEvent {
    pub event: DailyEvent,
    pub option: EventOption,
    /// Day on which the event was resolved.
    pub day: u32,
}

impl DailyEvent {
    /// Short title for prompts and logs.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SponsorDeal { .. } => "Sponsor deal",
            Self::TavernRumor => "Tavern rumor",
            Self::HarshDrill { .. } => "Harsh drill",
        }
    }

    /// Labels of the two options, in [`EventOption`] order.
    pub const fn option_labels(&self) -> [&'static str; 2] {
        match self {
            Self::SponsorDeal { .. } => ["Accept", "Decline"],
            Self::TavernRumor => ["Investigate", "Ignore"],
            Self::HarshDrill { .. } => ["Push", "Rest"],
        }
    }

    /// The fighter this event singles out, if any.
    pub const fn target(&self) -> Option<FighterId> {
        match self {
            Self::HarshDrill { target } => Some(*target),
            _ => None,
        }
    }

    /// Fixed effect of picking `option`.
    pub fn effect(&self, option: EventOption, model: &DailyEventModel) -> EventEffect {
        match (*self, option) {
            (Self::SponsorDeal { offer }, EventOption::First) => EventEffect {
                money: offer as i64,
                roster_morale: model.sponsor_accept_morale,
                target: None,
            },
            (Self::SponsorDeal { .. }, EventOption::Second) => EventEffect {
                roster_morale: model.sponsor_decline_morale,
                ..EventEffect::default()
            },
            (Self::TavernRumor, EventOption::First) => EventEffect {
                money: -(model.rumor_cost as i64),
                roster_morale: model.rumor_investigate_morale,
                target: None,
            },
            (Self::TavernRumor, EventOption::Second) => EventEffect {
                roster_morale: model.rumor_ignore_morale,
                ..EventEffect::default()
            },
            (Self::HarshDrill { target }, EventOption::First) => EventEffect {
                target: Some(TargetEffect {
                    fighter: target,
                    morale: model.drill_push_morale,
                    fatigue: model.drill_push_fatigue,
                }),
                ..EventEffect::default()
            },
            (Self::HarshDrill { target }, EventOption::Second) => EventEffect {
                target: Some(TargetEffect {
                    fighter: target,
                    morale: model.drill_rest_morale,
                    fatigue: 0,
                }),
                ..EventEffect::default()
            },
        }
    }
}

/// Rolls today's event.
///
/// One draw decides whether anything happens. If so, a second picks the
/// event; a drill is only possible when someone is alive to drill, and then
/// a third draw picks the target (a sponsor offer likewise draws its amount).
pub fn roll_daily_event(
    living: &[FighterId],
    rng: &mut impl RngSource,
    model: &DailyEventModel,
) -> Option<DailyEvent> {
    if !rng.chance(model.chance) {
        return None;
    }
    let kinds = if living.is_empty() { 2 } else { 3 };
    let event = match rng.next_below(kinds) {
        0 => DailyEvent::SponsorDeal {
            offer: model
                .sponsor_step
                .saturating_mul(rng.next_range(0, model.sponsor_steps))
                .saturating_add(model.sponsor_base),
        },
        1 => DailyEvent::TavernRumor,
        _ => DailyEvent::HarshDrill {
            target: living[rng.next_below(living.len() as u32) as usize],
        },
    };
    tracing::debug!(event = event.title(), "daily event rolled");
    Some(event)
}
