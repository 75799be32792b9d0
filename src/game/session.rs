//! One ladder in progress
//!
//! A guess goes through the move rule, then the dictionary (loaded buckets
//! first, loading on a miss), and only then extends the path. A rejected
//! guess leaves the session untouched.

use crate::core::{Word, is_one_morph, normalize};
use crate::dictionary::DictionaryCache;
use crate::puzzle::Puzzle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// The target was reached; no guesses until reset or a new ladder
    Won,
}

/// What happened to a submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not one add, drop, change, or swap away from the current word
    InvalidMove,
    /// Legal move, but not a known word
    ///
    /// `dictionary_error` is set when the word list could not be loaded and
    /// the word was rejected by default.
    NotInDictionary { dictionary_error: Option<String> },
    /// Added to the path
    Accepted { word: Word },
    /// Added to the path and equal to the target
    Solved { moves: usize },
    /// The ladder is already solved
    NotPlaying,
}

impl GuessOutcome {
    /// Status line for a rejected or accepted guess
    ///
    /// Solves return `None`: their message depends on the mode.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::InvalidMove => {
                Some("Move must add one, drop one, change one, or swap two letters.".to_string())
            }
            Self::NotInDictionary {
                dictionary_error: None,
            } => Some("Not in dictionary.".to_string()),
            Self::NotInDictionary {
                dictionary_error: Some(_),
            } => Some("Not in dictionary (word list unavailable).".to_string()),
            Self::Accepted { .. } => Some(String::new()),
            Self::NotPlaying => Some("Already solved. Reset or start a new ladder.".to_string()),
            Self::Solved { .. } => None,
        }
    }
}

/// Path and state for the current puzzle
#[derive(Debug, Clone)]
pub struct GameSession {
    puzzle: Puzzle,
    path: Vec<Word>,
    state: GameState,
}

impl GameSession {
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let path = vec![puzzle.start.clone()];
        Self {
            puzzle,
            path,
            state: GameState::Playing,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Words played so far, starting with the start word
    #[must_use]
    pub fn path(&self) -> &[Word] {
        &self.path
    }

    /// Last word on the path
    #[must_use]
    pub fn current(&self) -> &Word {
        self.path.last().unwrap_or(&self.puzzle.start)
    }

    #[must_use]
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Back to the start word of the same puzzle
    pub fn reset(&mut self) {
        self.path.truncate(1);
        self.state = GameState::Playing;
    }

    /// Switch to a different puzzle
    pub fn restart(&mut self, puzzle: Puzzle) {
        *self = Self::new(puzzle);
    }

    /// Try to extend the path with `raw`
    pub async fn submit(&mut self, raw: &str, cache: &DictionaryCache) -> GuessOutcome {
        if self.state != GameState::Playing {
            return GuessOutcome::NotPlaying;
        }

        let guess = normalize(raw);
        if !is_one_morph(self.current().text(), &guess) {
            debug!(from = %self.current(), to = %guess, "illegal move");
            return GuessOutcome::InvalidMove;
        }

        if !cache.contains_sync(&guess) {
            let found = cache.contains_async(&guess).await;
            if !*found.value() {
                return GuessOutcome::NotInDictionary {
                    dictionary_error: found.reason().map(str::to_owned),
                };
            }
        }

        // Dictionary words are always well-formed
        let Ok(word) = Word::new(&guess) else {
            return GuessOutcome::NotInDictionary {
                dictionary_error: None,
            };
        };

        self.path.push(word.clone());
        if word == self.puzzle.target {
            self.state = GameState::Won;
            GuessOutcome::Solved {
                moves: self.moves(),
            }
        } else {
            GuessOutcome::Accepted { word }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryError, WordSource};
    use async_trait::async_trait;

    fn session(start: &str, target: &str) -> GameSession {
        GameSession::new(Puzzle::new(start, target).unwrap())
    }

    struct OfflineSource;

    #[async_trait]
    impl WordSource for OfflineSource {
        fn describe(&self) -> String {
            "offline".to_string()
        }

        async fn fetch(&self, length: usize) -> Result<String, DictionaryError> {
            Err(DictionaryError::Unavailable(length))
        }
    }

    #[tokio::test]
    async fn solves_fool_to_four() {
        let cache = DictionaryCache::embedded();
        let mut game = session("fool", "four");

        assert_eq!(
            game.submit("foul", &cache).await,
            GuessOutcome::Accepted {
                word: Word::new("FOUL").unwrap()
            }
        );
        assert_eq!(game.submit(" four ", &cache).await, GuessOutcome::Solved { moves: 2 });
        assert_eq!(game.state(), GameState::Won);

        let path: Vec<&str> = game.path().iter().map(Word::text).collect();
        assert_eq!(path, ["FOOL", "FOUL", "FOUR"]);
    }

    #[tokio::test]
    async fn illegal_move_leaves_path_unchanged() {
        let cache = DictionaryCache::embedded();
        let mut game = session("cold", "warm");

        assert_eq!(game.submit("warm", &cache).await, GuessOutcome::InvalidMove);
        assert_eq!(game.submit("cold", &cache).await, GuessOutcome::InvalidMove);
        assert_eq!(game.path().len(), 1);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[tokio::test]
    async fn unknown_word_is_rejected() {
        let cache = DictionaryCache::embedded();
        let mut game = session("cold", "warm");

        let outcome = game.submit("cxld", &cache).await;
        assert_eq!(
            outcome,
            GuessOutcome::NotInDictionary {
                dictionary_error: None
            }
        );
        assert_eq!(outcome.message().as_deref(), Some("Not in dictionary."));
        assert_eq!(game.moves(), 0);
    }

    #[tokio::test]
    async fn length_changing_moves_use_other_buckets() {
        let cache = DictionaryCache::embedded();
        let mut game = session("cold", "warm");

        assert!(matches!(
            game.submit("colds", &cache).await,
            GuessOutcome::Accepted { .. }
        ));
        assert!(matches!(
            game.submit("cold", &cache).await,
            GuessOutcome::Accepted { .. }
        ));
        assert_eq!(game.current().text(), "COLD");
        assert_eq!(game.moves(), 2);
    }

    #[tokio::test]
    async fn unavailable_dictionary_fails_open_as_rejection() {
        let cache = DictionaryCache::new(OfflineSource);
        let mut game = session("cold", "warm");

        let outcome = game.submit("gold", &cache).await;
        let GuessOutcome::NotInDictionary {
            dictionary_error: Some(_),
        } = &outcome
        else {
            panic!("expected a dictionary failure, got {outcome:?}");
        };
        assert_eq!(
            outcome.message().as_deref(),
            Some("Not in dictionary (word list unavailable).")
        );
        assert_eq!(game.path().len(), 1);
    }

    #[tokio::test]
    async fn won_session_refuses_guesses_until_reset() {
        let cache = DictionaryCache::embedded();
        let mut game = session("code", "rode");

        assert_eq!(game.submit("rode", &cache).await, GuessOutcome::Solved { moves: 1 });
        assert_eq!(game.submit("rods", &cache).await, GuessOutcome::NotPlaying);

        game.reset();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.path().len(), 1);
        assert_eq!(game.current().text(), "CODE");
    }

    #[tokio::test]
    async fn restart_switches_puzzle() {
        let cache = DictionaryCache::embedded();
        let mut game = session("code", "rode");
        game.submit("rode", &cache).await;

        game.restart(Puzzle::new("cat", "dog").unwrap());
        assert_eq!(game.current().text(), "CAT");
        assert_eq!(game.puzzle().target.text(), "DOG");
        assert_eq!(game.state(), GameState::Playing);
    }
}
