use rand::Rng;
use thiserror::Error;

/// Words the secret is drawn from unless a game is built with its own list.
pub const WORDS: [&str; 10] = [
    "PYTHON", "GEMINI", "PROGRAMMING", "COMPUTER", "ALGORITHM",
    "KEYBOARD", "FUNCTION", "VARIABLE", "MODULAR", "DEVELOPER",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("vocabulary must contain at least one word")]
    Empty,
    #[error("word {0:?} must only contain the letters A-Z")]
    InvalidWord(String),
}

/// Ordered, never-empty list of uppercase A-Z candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                let word = w.as_ref().trim().to_ascii_uppercase();
                if !word.is_empty() && word.chars().all(|c| c.is_ascii_uppercase()) {
                    Ok(word)
                } else {
                    Err(VocabularyError::InvalidWord(w.as_ref().to_string()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Uniformly random word
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
