use hilo::{Card, Game, GameOptions, Guess, Snapshot};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Starts a shuffled game with the first card already dealt.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::new_game(), seed as u64),
        }
    }

    /// Discards the current game and starts a fresh one.
    pub fn new_game(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::new_game(), seed as u64);
    }

    /// Records a guess (`"Higher"`, `"Lower"`, `"Equal"` or `h`/`l`/`e`).
    ///
    /// Returns whether the guess was recorded.
    pub fn guess(&mut self, guess: &str) -> Result<bool, JsValue> {
        let guess = guess.parse::<Guess>().map_err(js_err)?;
        Ok(self.game.submit_guess(guess))
    }

    /// Deals the next card. Returns `undefined` once the deck is exhausted.
    pub fn play_card(&mut self) -> Result<JsValue, JsValue> {
        match self.game.play_next_card() {
            Some(card) => to_js_value(&card_to_js(card)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    pub fn is_done(&self) -> bool {
        self.game.is_done()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&JsSnapshot::from(self.game.snapshot()))
    }
}

#[derive(Serialize)]
struct JsSnapshot {
    state: &'static str,
    current_card: Option<JsCard>,
    right_guesses: u32,
    current_guess: Option<&'static str>,
    game_done: bool,
    cards_remaining: u32,
    cards_played: u32,
}

impl From<Snapshot> for JsSnapshot {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            state: snapshot.state.as_str(),
            current_card: snapshot.current_card.map(card_to_js),
            right_guesses: snapshot.correct_guesses as u32,
            current_guess: snapshot.pending_guess.map(Guess::label),
            game_done: snapshot.is_done(),
            cards_remaining: snapshot.cards_remaining as u32,
            cards_played: snapshot.cards_played as u32,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: &'static str,
    symbol: String,
    color: &'static str,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.rank_label(),
        symbol: card.suit.symbol().to_string(),
        color: color_to_str(card.color()),
    }
}

fn suit_to_str(suit: hilo::Suit) -> &'static str {
    match suit {
        hilo::Suit::Spades => "Spades",
        hilo::Suit::Hearts => "Hearts",
        hilo::Suit::Diamonds => "Diamonds",
        hilo::Suit::Clubs => "Clubs",
    }
}

fn color_to_str(color: hilo::Color) -> &'static str {
    match color {
        hilo::Color::Black => "black",
        hilo::Color::Red => "red",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
