//! Draft class generation: 7 rounds, 32 picks per round.

use crate::archetype::ArchetypeRegistry;
use crate::error::Result;
use crate::generation::generator::{GenerationRequest, PlayerGenerator};
use crate::models::{GeneratedPlayer, GenerationContext, Position};
use crate::sampling::weighted_choice;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ROUNDS: u8 = 7;
pub const PICKS_PER_ROUND: u16 = 32;

/// Position quotas per round. Rows may sum short of 32; the remainder is
/// padded by a weighted random position before the round is shuffled.
const ROUND_QUOTAS: [&[(Position, u8)]; ROUNDS as usize] = [
    &[
        (Position::QB, 3),
        (Position::RB, 2),
        (Position::WR, 5),
        (Position::TE, 2),
        (Position::OL, 6),
        (Position::DL, 5),
        (Position::LB, 4),
        (Position::DB, 5),
    ],
    &[
        (Position::QB, 2),
        (Position::RB, 3),
        (Position::WR, 5),
        (Position::TE, 2),
        (Position::OL, 6),
        (Position::DL, 5),
        (Position::LB, 4),
        (Position::DB, 5),
    ],
    &[
        (Position::QB, 2),
        (Position::RB, 3),
        (Position::WR, 4),
        (Position::TE, 3),
        (Position::OL, 6),
        (Position::DL, 5),
        (Position::LB, 4),
        (Position::DB, 5),
    ],
    &[
        (Position::QB, 2),
        (Position::RB, 3),
        (Position::WR, 4),
        (Position::TE, 2),
        (Position::OL, 6),
        (Position::DL, 5),
        (Position::LB, 5),
        (Position::DB, 5),
    ],
    &[
        (Position::QB, 1),
        (Position::RB, 3),
        (Position::WR, 4),
        (Position::TE, 3),
        (Position::OL, 6),
        (Position::DL, 4),
        (Position::LB, 4),
        (Position::DB, 5),
        (Position::K, 1),
        (Position::P, 1),
    ],
    &[
        (Position::QB, 1),
        (Position::RB, 3),
        (Position::WR, 4),
        (Position::TE, 2),
        (Position::OL, 5),
        (Position::DL, 4),
        (Position::LB, 4),
        (Position::DB, 5),
        (Position::K, 1),
        (Position::P, 1),
    ],
    &[
        (Position::QB, 1),
        (Position::RB, 2),
        (Position::WR, 4),
        (Position::TE, 2),
        (Position::OL, 5),
        (Position::DL, 4),
        (Position::LB, 4),
        (Position::DB, 5),
        (Position::K, 1),
        (Position::P, 1),
    ],
];

/// Padding weights lean toward the positions teams hoard depth at.
const PAD_WEIGHTS: [(Position, f32); 6] = [
    (Position::WR, 0.22),
    (Position::DB, 0.22),
    (Position::OL, 0.20),
    (Position::DL, 0.14),
    (Position::LB, 0.12),
    (Position::RB, 0.10),
];

/// A finished draft class for one league year.
#[derive(Debug, Clone)]
pub struct DraftClass {
    pub season: u16,
    pub players: Vec<GeneratedPlayer>,
}

pub fn generate_draft_class<R: Rng + ?Sized>(
    rng: &mut R,
    registry: &ArchetypeRegistry,
    season: u16,
) -> Result<DraftClass> {
    let generator = PlayerGenerator::new(registry);
    let mut players = Vec::with_capacity((ROUNDS as usize) * (PICKS_PER_ROUND as usize));

    for round in 1..=ROUNDS {
        let mut slots: Vec<Position> = Vec::with_capacity(PICKS_PER_ROUND as usize);
        for (position, count) in ROUND_QUOTAS[(round - 1) as usize] {
            for _ in 0..*count {
                slots.push(*position);
            }
        }
        while slots.len() < PICKS_PER_ROUND as usize {
            let position = weighted_choice(rng, &PAD_WEIGHTS).copied().unwrap_or(Position::WR);
            slots.push(position);
        }
        slots.shuffle(rng);

        for (index, position) in slots.into_iter().enumerate() {
            let request = GenerationRequest::for_position(
                position,
                GenerationContext::DraftProspect { round },
            );
            let mut player = generator.generate(rng, &request)?;
            player.draft_round = Some(round);
            player.draft_pick =
                Some((round as u16 - 1) * PICKS_PER_ROUND + index as u16 + 1);
            players.push(player);
        }
    }

    Ok(DraftClass { season, players })
}
