//! Property tests over deals, legality and whole rounds.

use domino_engine::rules::legal_move_count;
use domino_engine::tiles::{hand_size, needs_redeal, TileSet, DRAW_POOL_SIZE};
use domino_engine::{
    deal_round, legal_sides, Board, GameEvent, GameRng, GameSession, PlayerId, Ply, SessionConfig, Side, Tile,
    TurnPhase,
};
use proptest::prelude::*;

fn tile_strategy() -> impl Strategy<Value = Tile> {
    (0u8..=6, 0u8..=6).prop_map(|(a, b)| Tile::new(a, b))
}

/// Play a round to the end, the human taking the first playable tile.
///
/// Returns the session and every event it emitted.
fn play_out(player_count: usize, seed: u64) -> (GameSession, Vec<GameEvent>) {
    let mut session = GameSession::new(SessionConfig::new(player_count).with_seed(seed)).unwrap();
    let mut events = session.drain_events();

    for _ in 0..200 {
        session.advance_bots();
        events.extend(session.drain_events());
        if session.phase().is_terminal() {
            return (session, events);
        }

        let hand = session.hand(PlayerId::HUMAN);
        let playable = hand
            .iter()
            .position(|tile| legal_move_count(tile, session.board()) > 0);
        match playable {
            Some(position) => {
                if let Ply::Proposed { .. } = session.submit_human_move(position, None).unwrap() {
                    session.choose_side(Side::Left).unwrap();
                }
            }
            None => {
                session.draw_from_pool().unwrap();
            }
        }
        events.extend(session.drain_events());
    }
    panic!("round with seed {} did not finish", seed);
}

proptest! {
    #[test]
    fn deal_conserves_tiles(seed in any::<u64>(), player_count in 2usize..=4) {
        let deal = deal_round(player_count, &mut GameRng::new(seed)).unwrap();

        let mut all: Vec<Tile> = deal.hands.iter().flat_map(|(_, h)| h.iter()).collect();
        for (_, hand) in deal.hands.iter() {
            prop_assert_eq!(hand.len(), hand_size(player_count));
            prop_assert!(!needs_redeal(hand));
        }
        match &deal.pool {
            Some(pool) => {
                prop_assert_eq!(player_count, 2);
                prop_assert_eq!(pool.len(), DRAW_POOL_SIZE);
                all.extend(pool.iter());
            }
            None => prop_assert_ne!(player_count, 2),
        }

        let expected = if player_count == 3 { 27 } else { 28 };
        let before = all.len();
        all.sort();
        all.dedup();
        prop_assert_eq!(before, expected);
        prop_assert_eq!(all.len(), expected);
        if player_count == 3 {
            prop_assert!(!all.contains(&Tile::new(0, 0)));
        }
    }

    #[test]
    fn legal_count_matches_sides(tile in tile_strategy(), a in 0u8..=6, b in 0u8..=6, c in 0u8..=6) {
        let board = Board::from_chain(vec![Tile::new(a, b), Tile::new(b, c)]).unwrap();
        let count = legal_move_count(tile, &board);

        prop_assert!(count <= 2);
        prop_assert_eq!(count, legal_sides(tile, &board).len());
        prop_assert_eq!(count > 0, tile.contains(a) || tile.contains(c));
    }

    #[test]
    fn any_tile_opens_empty_board(tile in tile_strategy()) {
        prop_assert_eq!(legal_move_count(tile, &Board::new()), 1);
    }

    #[test]
    fn rounds_end_once_with_a_consistent_board(seed in any::<u64>(), player_count in 2usize..=4) {
        let (session, events) = play_out(player_count, seed);

        let ends = events.iter().filter(|e| matches!(e, GameEvent::RoundEnded { .. })).count();
        prop_assert_eq!(ends, 1);
        prop_assert!(matches!(session.phase(), TurnPhase::RoundEnded(_)));
        prop_assert_eq!(session.results().len(), 1);

        let board = session.board();
        prop_assert!(board.is_consistent());
        let chain: Vec<Tile> = board.tiles().collect();
        for pair in chain.windows(2) {
            prop_assert_eq!(pair[0].b(), pair[1].a());
        }
        prop_assert_eq!(board.iter().filter(|p| p.is_last_played).count(), 1);

        let expected = if player_count == 3 { 27 } else { 28 };
        prop_assert_eq!(session.table().tile_count(), expected);
        prop_assert_eq!(session.table().census().len(), expected);
    }
}

#[test]
fn test_shuffle_is_unbiased() {
    const SAMPLES: u32 = 2800;
    let reference = TileSet::generate(2).unwrap();
    let n = reference.len();
    // counts[tile][slot]
    let mut counts = vec![vec![0u32; n]; n];

    for seed in 0..u64::from(SAMPLES) {
        let mut set = reference.clone();
        set.shuffle(&mut GameRng::new(seed));
        for (slot, tile) in set.tiles().iter().enumerate() {
            let index = reference.tiles().iter().position(|t| t == tile).unwrap();
            counts[index][slot] += 1;
        }
    }

    let expected = f64::from(SAMPLES) / n as f64;
    let chi_square: f64 = counts
        .iter()
        .flatten()
        .map(|&observed| (f64::from(observed) - expected).powi(2) / expected)
        .sum();

    // (28 - 1)^2 = 729 degrees of freedom: mean 729, standard deviation ~38.
    // Six standard deviations either side.
    assert!(
        (500.0..960.0).contains(&chi_square),
        "chi-square {:.1} outside the uniform range",
        chi_square
    );
}

#[test]
fn test_same_seed_same_round() {
    let (a, a_events) = play_out(3, 1234);
    let (b, b_events) = play_out(3, 1234);

    assert_eq!(a.table(), b.table());
    assert_eq!(a.outcome(), b.outcome());
    assert_eq!(a_events, b_events);
}
