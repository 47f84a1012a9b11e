//! Single-elimination bracket construction.

use crate::env::RngSource;
use crate::fighter::FighterId;

/// Smallest power of two that fits `participants` (1 for an empty field).
pub fn bracket_size(participants: usize) -> usize {
    participants.max(1).next_power_of_two()
}

/// Number of byes in the first round.
pub fn bye_count(participants: usize) -> usize {
    bracket_size(participants) - participants
}

/// A first-round pairing. `None` in the second slot is a bye.
pub type Pairing = (Option<FighterId>, Option<FighterId>);

/// Shuffles the entrants and fills first-round slots left to right.
///
/// Real pairings come first; the trailing pairs hold one entrant and a bye in
/// the second slot. A bye never meets a bye.
pub fn draw_first_round(participants: &[FighterId], rng: &mut impl RngSource) -> Vec<Pairing> {
    let mut order = participants.to_vec();
    rng.shuffle(&mut order);

    let size = bracket_size(order.len());
    let matches = size / 2;
    let byes = size - order.len();
    let real = matches - byes;

    let mut entrants = order.into_iter();
    let mut pairings = Vec::with_capacity(matches);
    for _ in 0..real {
        pairings.push((entrants.next(), entrants.next()));
    }
    for _ in 0..byes {
        pairings.push((entrants.next(), None));
    }
    pairings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn ids(n: u32) -> Vec<FighterId> {
        (1..=n).map(FighterId).collect()
    }

    #[test]
    fn sizes_round_up_to_powers_of_two() {
        assert_eq!(bracket_size(2), 2);
        assert_eq!(bracket_size(3), 4);
        assert_eq!(bracket_size(5), 8);
        assert_eq!(bracket_size(8), 8);
        assert_eq!(bracket_size(9), 16);
        assert_eq!(bye_count(5), 3);
    }

    #[test]
    fn five_entrants_get_three_byes_at_the_end() {
        let mut rng = PcgRng::new(2026);
        let pairings = draw_first_round(&ids(5), &mut rng);
        assert_eq!(pairings.len(), 4);
        assert!(pairings[0].0.is_some() && pairings[0].1.is_some());
        for pairing in &pairings[1..] {
            assert!(pairing.0.is_some());
            assert!(pairing.1.is_none());
        }
    }

    #[test]
    fn every_entrant_appears_once() {
        let mut rng = PcgRng::new(77);
        let entrants = ids(11);
        let pairings = draw_first_round(&entrants, &mut rng);
        let mut seen: Vec<FighterId> = pairings
            .iter()
            .flat_map(|(a, b)| [*a, *b])
            .flatten()
            .collect();
        seen.sort();
        assert_eq!(seen, entrants);
    }

    #[test]
    fn full_bracket_has_no_byes() {
        let mut rng = PcgRng::new(1);
        let pairings = draw_first_round(&ids(8), &mut rng);
        assert!(pairings.iter().all(|(a, b)| a.is_some() && b.is_some()));
    }
}
