//! Game integration tests.

use std::collections::HashSet;

use golfrs::{
    Card, DECK_SIZE, DealError, Deck, DrawError, FlipError, Game, GameOptions, GamePhase,
    LineRead, LineWrite, Outcome, ParseCardError, PlayError, Rank, RevealError, RoundResult,
    ShowdownError, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards = draws.to_vec();
    cards.reverse();
    game.deck = Deck::from_cards(cards);
}

struct ScriptedInput {
    /// Pending lines, last to be read first.
    lines: Vec<String>,
}

impl ScriptedInput {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(ToString::to_string).collect(),
        }
    }
}

impl LineRead for ScriptedInput {
    fn read_line(&mut self) -> Option<String> {
        self.lines.pop()
    }
}

#[derive(Default)]
struct RecordedOutput {
    lines: Vec<String>,
}

impl LineWrite for RecordedOutput {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

fn run_scripted(game: &mut Game, inputs: &[&str]) -> (Result<RoundResult, PlayError>, Vec<String>) {
    let mut input = ScriptedInput::new(inputs);
    let mut output = RecordedOutput::default();
    let result = game.play(&mut input, &mut output);
    (result, output.lines)
}

/// Deck rigged so Player 1 draws hearts A..6 and Player 2 diamonds A..6.
fn rig_tie_deck(game: &mut Game) {
    let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];
    let mut draws = Vec::new();
    for rank in ranks {
        draws.push(card(rank, Suit::Hearts));
        draws.push(card(rank, Suit::Diamonds));
    }
    set_deck_from_draws(game, &draws);
}

#[test]
fn card_values_match_the_scoring_table() {
    let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];
    for (rank, value) in Rank::ALL.into_iter().zip(expected) {
        assert_eq!(rank.value(), value, "{rank:?}");
        assert_eq!(card(rank, Suit::Clubs).value(), value);
    }
}

#[test]
fn rank_symbols_round_trip() {
    for rank in Rank::ALL {
        assert_eq!(Rank::from_symbol(rank.symbol()).unwrap(), rank);
    }
    // Lower case is accepted too.
    assert_eq!(Rank::from_symbol('a').unwrap(), Rank::Ace);
    assert_eq!(Rank::from_symbol('t').unwrap(), Rank::Ten);
}

#[test]
fn unknown_rank_and_suit_are_rejected() {
    assert_eq!(
        Rank::from_symbol('X').unwrap_err(),
        ParseCardError::InvalidRank('X')
    );
    assert_eq!(
        Card::from_symbols('1', "hearts").unwrap_err(),
        ParseCardError::InvalidRank('1')
    );
    assert_eq!(
        Card::from_symbols('A', "stars").unwrap_err(),
        ParseCardError::InvalidSuit
    );

    let parsed = Card::from_symbols('q', "Spades").unwrap();
    assert_eq!(parsed.rank, Rank::Queen);
    assert_eq!(parsed.suit, Suit::Spades);
}

#[test]
fn fresh_deck_has_52_unique_face_up_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let pairs: HashSet<(Rank, Suit)> = deck.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(pairs.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(Card::is_face_up));
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    use rand::SeedableRng;

    let reference = Deck::new();
    let mut shuffled = Deck::new();
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    shuffled.shuffle(&mut rng);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_ne!(shuffled.cards(), reference.cards());

    let before: HashSet<(Rank, Suit)> = reference.cards().iter().map(|c| (c.rank, c.suit)).collect();
    let after: HashSet<(Rank, Suit)> = shuffled.cards().iter().map(|c| (c.rank, c.suit)).collect();
    assert_eq!(before, after);
}

#[test]
fn draw_deals_face_down_and_shrinks_the_deck() {
    let mut deck = Deck::new();

    let drawn = deck.draw().unwrap();
    assert!(!drawn.is_face_up());
    assert_eq!(deck.len(), DECK_SIZE - 1);

    let face_up = deck.draw_face_up().unwrap();
    assert!(face_up.is_face_up());
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn drawing_from_an_empty_deck_fails() {
    let mut deck = Deck::from_cards(Vec::new());
    assert_eq!(deck.draw().unwrap_err(), DrawError::EmptyDeck);
    assert_eq!(deck.draw_face_up().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn dealing_fills_both_hands_face_down() {
    let mut game = Game::new(GameOptions::default(), 42);
    game.deal().unwrap();

    assert_eq!(game.phase(), GamePhase::Dealt);
    assert_eq!(game.deck.len(), DECK_SIZE - 12);
    for player in &game.players {
        assert_eq!(player.hand().len(), 6);
        assert!(player.hand().iter().all(|c| !c.is_face_up()));
    }
}

#[test]
fn score_is_invariant_to_orientation() {
    let mut game = Game::new(GameOptions::default(), 9);
    game.deal().unwrap();

    let before = game.players[0].score();
    game.players[0].reveal_all();
    assert_eq!(game.players[0].score(), before);
}

#[test]
fn hand_renders_in_rows_of_three() {
    let mut game = Game::new(GameOptions::default(), 0);
    rig_tie_deck(&mut game);
    game.deal().unwrap();

    let back = golfrs::FACE_DOWN_GLYPH;
    let hidden_row = format!("{back} {back} {back}");
    assert_eq!(game.players[0].hand_rows(), vec![hidden_row.clone(), hidden_row]);

    game.players[0].reveal_all();
    assert_eq!(
        game.players[0].hand_rows(),
        vec![
            "A\u{2661} 2\u{2661} 3\u{2661}".to_string(),
            "4\u{2661} 5\u{2661} 6\u{2661}".to_string(),
        ]
    );
}

#[test]
fn phase_guards_reject_out_of_order_operations() {
    let mut game = Game::new(GameOptions::default(), 3);

    assert_eq!(game.flip(0, 1).unwrap_err(), FlipError::InvalidState);
    assert_eq!(game.start_round().unwrap_err(), RevealError::InvalidState);
    assert_eq!(game.reveal_all().unwrap_err(), RevealError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    // Final reveal is only allowed after the last round.
    assert_eq!(game.reveal_all().unwrap_err(), RevealError::InvalidState);

    assert_eq!(game.start_round().unwrap(), 1);
    assert_eq!(game.flip(5, 1).unwrap_err(), FlipError::PlayerNotFound);
    assert_eq!(game.start_round().unwrap(), 2);
    assert_eq!(game.start_round().unwrap_err(), RevealError::InvalidState);

    game.reveal_all().unwrap();
    assert_eq!(game.phase(), GamePhase::FinalReveal);
    game.showdown().unwrap();
    assert_eq!(game.phase(), GamePhase::Scored);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn rejected_flips_leave_the_hand_unchanged() {
    let mut game = Game::new(GameOptions::default(), 11);
    game.deal().unwrap();
    game.start_round().unwrap();

    assert_eq!(game.flip(0, 0).unwrap_err(), FlipError::OutOfRange);
    assert_eq!(game.flip(0, 7).unwrap_err(), FlipError::OutOfRange);
    assert!(game.players[0].hand().iter().all(|c| !c.is_face_up()));

    game.flip(0, 1).unwrap();
    assert_eq!(game.flip(0, 1).unwrap_err(), FlipError::AlreadyFaceUp);

    let face_up = game.players[0]
        .hand()
        .iter()
        .filter(|c| c.is_face_up())
        .count();
    assert_eq!(face_up, 1);
}

#[test]
fn dealing_requires_enough_cards() {
    let options = GameOptions::default().with_hand_size(30);
    let mut game = Game::new(options, 1);
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_hand_size(4)
        .with_reveal_rounds(3)
        .with_flips_per_turn(1);

    assert_eq!(options.hand_size, 4);
    assert_eq!(options.reveal_rounds, 3);
    assert_eq!(options.flips_per_turn, 1);
}

#[test]
fn scripted_game_ends_in_a_tie() {
    let mut game = Game::new(GameOptions::default(), 5);
    rig_tie_deck(&mut game);

    let inputs = ["1", "2", "1", "2", "3", "4", "3", "4"];
    let (result, output) = run_scripted(&mut game, &inputs);

    let result = result.unwrap();
    assert_eq!(result.scores, [21, 21]);
    assert_eq!(result.outcome, Outcome::Tie);
    assert_eq!(game.phase(), GamePhase::Terminal);

    assert!(output.contains(&"Player 1's score: 21".to_string()));
    assert!(output.contains(&"Player 2's score: 21".to_string()));
    assert_eq!(output.last().unwrap(), "It's a tie!");
}

#[test]
fn lower_score_wins() {
    let mut game = Game::new(GameOptions::default(), 5);
    // Player 1 totals 18, Player 2 totals 20.
    let draws = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Two, Suit::Hearts),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Three, Suit::Diamonds),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Four, Suit::Diamonds),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Five, Suit::Clubs),
    ];
    set_deck_from_draws(&mut game, &draws);

    let inputs = ["1", "2", "1", "2", "3", "4", "3", "4"];
    let (result, output) = run_scripted(&mut game, &inputs);

    let result = result.unwrap();
    assert_eq!(result.scores, [18, 20]);
    assert_eq!(result.outcome, Outcome::PlayerOne);
    assert_eq!(output.last().unwrap(), "Player 1 wins!");
}

#[test]
fn invalid_prompt_input_reprompts_instead_of_crashing() {
    let mut game = Game::new(GameOptions::default(), 5);
    rig_tie_deck(&mut game);

    // "abc" is not a number, "9" is out of range, and the repeated "1"
    // names a card that is already face up.
    let inputs = [
        "abc", "9", "1", "1", "2", "1", "2", "3", "4", "3", "4",
    ];
    let (result, output) = run_scripted(&mut game, &inputs);

    assert_eq!(result.unwrap().outcome, Outcome::Tie);
    assert!(output.contains(&"Please enter a number.".to_string()));
    assert!(output.contains(&"Invalid choice. Choose a number between 1 and 6.".to_string()));
    assert!(output.contains(&"Card is already face up. Choose another card.".to_string()));
}

#[test]
fn closed_input_aborts_the_game() {
    let mut game = Game::new(GameOptions::default(), 5);
    let (result, _) = run_scripted(&mut game, &[]);
    assert_eq!(result.unwrap_err(), PlayError::InputClosed);
}

#[test]
fn same_seed_deals_the_same_hands() {
    let mut first = Game::new(GameOptions::default(), 1234);
    let mut second = Game::new(GameOptions::default(), 1234);
    first.deal().unwrap();
    second.deal().unwrap();

    for (a, b) in first.players.iter().zip(second.players.iter()) {
        assert_eq!(a.hand(), b.hand());
    }
}
