//! End-to-end scenarios across the combat, injury, condition and bracket
//! modules.

use arena_core::condition::efficiency_multiplier;
use arena_core::env::ConditionModel;
use arena_core::injury::roll_injury;
use arena_core::tournament::{MatchResolution, run_tournament};
use arena_core::{
    ArenaConfig, ArenaState, ContractTerms, EventKind, Fighter, FighterId, InjuryKind, PcgRng,
    Stats,
};

fn fighter(id: u32, name: &str, stats: (u8, u8, u8)) -> Fighter {
    Fighter::new(
        FighterId(id),
        name,
        Stats::new(stats.0, stats.1, stats.2).unwrap(),
        ContractTerms::default(),
    )
}

fn duel_state(seed: u64, config: &ArenaConfig) -> ArenaState {
    let state = ArenaState::new(seed, config).unwrap();
    let state = state
        .insert_fighter(fighter(1, "Verus", (8, 5, 6)), config)
        .unwrap();
    state
        .insert_fighter(fighter(2, "Priscus", (7, 6, 7)), config)
        .unwrap()
}

#[test]
fn seeded_duel_is_reproducible() {
    let config = ArenaConfig::default();
    let (state_a, fight_a) = duel_state(2026, &config)
        .apply_fight(FighterId(1), FighterId(2), &config)
        .unwrap();
    let (state_b, fight_b) = duel_state(2026, &config)
        .apply_fight(FighterId(1), FighterId(2), &config)
        .unwrap();

    assert_eq!(fight_a.winner.id(), fight_b.winner.id());
    assert_eq!(fight_a.log.len(), fight_b.log.len());
    assert_eq!(fight_a, fight_b);
    assert_eq!(state_a, state_b);

    let tail: Vec<EventKind> = fight_a.log.iter().rev().take(2).map(|e| e.kind).collect();
    assert_eq!(tail, vec![EventKind::FightEnd, EventKind::Kill]);
    assert_eq!(fight_a.log.first().map(|e| e.round), Some(1));
    assert_eq!(fight_a.log.first().map(|e| e.attacker.as_str()), Some("Verus"));
}

#[test]
fn heavy_damage_means_fracture() {
    let config = ArenaConfig {
        injury: arena_core::env::InjuryModel {
            loser_chance: 1.0,
            ..Default::default()
        },
        ..ArenaConfig::default()
    };
    // 50 max health, 10 left: 80% lost.
    let beaten = fighter(3, "Flamma", (5, 5, 5)).damaged(40);
    let injury = roll_injury(&beaten, 50, false, &mut PcgRng::new(1), &config.injury).unwrap();
    assert_eq!(injury.kind(), InjuryKind::Fracture);
    assert_eq!(injury.recovery_days_left(), config.injury.fracture_days);
}

#[test]
fn five_entrants_bracket() {
    let config = ArenaConfig::default();
    let pool: Vec<Fighter> = (1..=5)
        .map(|i| fighter(i, &format!("F{i}"), (5, 5, 5)))
        .collect();
    let ids: Vec<FighterId> = pool.iter().map(Fighter::id).collect();
    let run = run_tournament(&pool, &ids, 100, &mut PcgRng::new(8), &config).unwrap();

    let first = &run.result.rounds[0];
    assert_eq!(run.result.bracket_size, 8);
    assert_eq!(first.matches.len(), 4);
    let byes = first
        .matches
        .iter()
        .filter(|m| m.resolution == MatchResolution::Bye)
        .count();
    assert_eq!(byes, 3);
}

#[test]
fn peak_condition_efficiency() {
    let multiplier = efficiency_multiplier(100, 0, &ConditionModel::default());
    assert!((multiplier - 1.20).abs() < 1e-9);
}

#[test]
fn season_with_events_and_a_tournament() {
    let config = ArenaConfig::default();
    let mut state = ArenaState::new(99, &config).unwrap();
    for name in ["Verus", "Priscus", "Flamma", "Spiculus"] {
        state = state.recruit_fighter(name, &config).unwrap().0;
    }

    for _ in 0..10 {
        if state.pending_event().is_some() {
            state = state
                .resolve_daily_event(arena_core::EventOption::First, &config)
                .unwrap();
        }
        state = state.advance_day(&config).unwrap().0;
    }
    assert_eq!(state.day(), 11);

    if state.pending_event().is_some() {
        state = state
            .resolve_daily_event(arena_core::EventOption::Second, &config)
            .unwrap();
    }
    let entrants: Vec<FighterId> = state
        .roster()
        .iter()
        .filter(|f| f.is_fightable())
        .map(Fighter::id)
        .collect();
    if entrants.len() >= 2 {
        let before = state.money();
        let (after, result) = state.run_tournament(&entrants, 300, &config).unwrap();
        assert_eq!(after.money(), before + result.total_payout() as i64);
        assert!(after.fighter(result.champion).unwrap().is_alive());
    }
}
