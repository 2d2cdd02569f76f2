//! Property tests for deck bookkeeping and scoring.

use std::collections::HashSet;

use hilo::{Card, DECK_SIZE, Game, GameOptions, Guess, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
enum Op {
    Play,
    Guess(Guess),
    Shuffle,
}

fn guess_strategy() -> impl Strategy<Value = Guess> {
    prop_oneof![Just(Guess::Higher), Just(Guess::Lower), Just(Guess::Equal)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Play),
        3 => guess_strategy().prop_map(Op::Guess),
        1 => Just(Op::Shuffle),
    ]
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (0usize..4, 1u8..=13).prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], rank))
}

fn sorted(cards: Vec<Card>) -> Vec<(u8, u8)> {
    let mut keys: Vec<(u8, u8)> = cards.into_iter().map(|c| (c.suit as u8, c.rank)).collect();
    keys.sort_unstable();
    keys
}

proptest! {
    /// Property: piles always partition the initial deck.
    #[test]
    fn prop_piles_partition_deck(
        seed in any::<u64>(),
        shuffle in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..120),
    ) {
        let mut game = Game::new(GameOptions::default().with_shuffle(shuffle), seed);

        for op in ops {
            match op {
                Op::Play => {
                    game.play_next_card();
                }
                Op::Guess(guess) => {
                    game.submit_guess(guess);
                }
                Op::Shuffle => game.shuffle(),
            }

            prop_assert_eq!(game.cards_remaining() + game.cards_played(), DECK_SIZE);

            let remaining: HashSet<Card> = game.remaining().copied().collect();
            let played: HashSet<Card> = game.played().iter().copied().collect();
            prop_assert_eq!(remaining.len() + played.len(), DECK_SIZE);
            prop_assert!(remaining.is_disjoint(&played));
        }
    }

    /// Property: shuffling with an injected RNG keeps the same cards and
    /// leaves the played pile alone.
    #[test]
    fn prop_shuffle_preserves_multiset(
        cards in prop::collection::vec(card_strategy(), 1..60),
        dealt in 0usize..10,
        seed in any::<u64>(),
    ) {
        let mut game = Game::with_cards(cards, 0);
        for _ in 0..dealt {
            game.play_next_card();
        }
        let played = game.played().to_vec();
        let before = sorted(game.remaining().copied().collect());

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        game.shuffle_with(&mut rng);

        prop_assert_eq!(sorted(game.remaining().copied().collect()), before);
        prop_assert_eq!(game.played(), played.as_slice());
    }

    /// Property: the score grows by at most one per card dealt, and only
    /// when the pending guess matches the rank comparison.
    #[test]
    fn prop_score_matches_rank_comparison(
        cards in prop::collection::vec(card_strategy(), 1..30),
        guesses in prop::collection::vec(prop::option::of(guess_strategy()), 30),
    ) {
        let mut game = Game::with_cards(cards, 0);
        let mut expected = 0;

        for guess in guesses {
            let before = game.correct_guesses();
            let last = game.current_card();
            let accepted = guess.is_some_and(|g| game.submit_guess(g));

            let Some(dealt) = game.play_next_card() else {
                prop_assert_eq!(game.correct_guesses(), before);
                break;
            };

            if accepted {
                let (Some(g), Some(last)) = (guess, last) else {
                    return Err(TestCaseError::fail("accepted guess without a dealt card"));
                };
                if Guess::between(dealt, last) == g {
                    expected += 1;
                }
            }

            prop_assert!(game.correct_guesses() - before <= 1);
            prop_assert_eq!(game.correct_guesses(), expected);
        }
    }
}
