/// Hangman-specific renderer
use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::HangmanState;

/// One frame per miss count, from an empty gallows to the full figure.
pub const STAGES: [&str; 7] = [
    r"
   -----
   |   |
       |
       |
       |
       -
",
    r"
   -----
   |   |
   O   |
       |
       |
       -
",
    r"
   -----
   |   |
   O   |
   |   |
       |
       -
",
    r"
   -----
   |   |
   O   |
  /|   |
       |
       -
",
    r"
   -----
   |   |
   O   |
  /|\  |
       |
       -
",
    r"
   -----
   |   |
   O   |
  /|\  |
  /    |
       -
",
    r"
   -----
   |   |
   O   |
  /|\  |
  / \  |
       -
",
];

/// Wrong guesses allowed before the round is lost
pub const MAX_MISSES: u8 = (STAGES.len() - 1) as u8;

/// Stands in for a letter that has not been guessed yet
pub const PLACEHOLDER: char = '_';

const RULE: &str = "---------------------------------";

/// Frame for the given number of misses, pinned to the last one.
pub fn stage(misses_used: u8) -> &'static str {
    STAGES[usize::from(misses_used.min(MAX_MISSES))]
}

/// "C _ T" style rendering of `word`
pub fn masked_word(word: &str, guessed: &BTreeSet<char>) -> String {
    word.chars()
        .map(|c| if guessed.contains(&c) { c } else { PLACEHOLDER })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in alphabetical order, space separated
pub fn guessed_listing(guessed: &BTreeSet<char>) -> String {
    guessed.iter().map(char::to_string).collect::<Vec<_>>().join(" ")
}

/// Draw the full board and hand back the masked word.
pub fn render<W: Write>(
    ctx: &mut TerminalContext<W>,
    word: &str,
    guessed: &BTreeSet<char>,
    misses_remaining: u8,
) -> io::Result<String> {
    let misses_remaining = misses_remaining.min(MAX_MISSES);
    let misses_used = MAX_MISSES - misses_remaining;
    let masked = masked_word(word, guessed);

    ctx.empty_line()?;
    ctx.empty_line()?;
    ctx.print_line(RULE)?;
    for line in stage(misses_used).lines() {
        ctx.print_line(line)?;
    }
    let color = match misses_remaining {
        0..=1 => TerminalColor::Red,
        2..=3 => TerminalColor::Yellow,
        _ => TerminalColor::Default,
    };
    ctx.print_colored_line(
        &format!("Misses Left: {}/{}", misses_remaining, MAX_MISSES),
        color,
    )?;
    ctx.print_line(RULE)?;
    ctx.empty_line()?;
    ctx.print_colored_line(&format!("Word: {}", masked), TerminalColor::Cyan)?;
    ctx.print_line(&format!("Guessed Letters: {}", guessed_listing(guessed)))?;
    ctx.empty_line()?;

    Ok(masked)
}

pub struct HangmanRenderer;

impl GameRenderer<HangmanState> for HangmanRenderer {
    fn render<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        render(ctx, state.word(), state.guessed(), state.misses_remaining()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letters(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    fn rendered(word: &str, guessed: &str, remaining: u8) -> (String, String) {
        let mut ctx = TerminalContext::plain(Vec::new());
        let masked = render(&mut ctx, word, &letters(guessed), remaining).unwrap();
        (masked, String::from_utf8(ctx.into_inner()).unwrap())
    }

    #[test]
    fn max_misses_follows_stage_count() {
        assert_eq!(MAX_MISSES, 6);
        assert_eq!(STAGES.len(), usize::from(MAX_MISSES) + 1);
    }

    #[test]
    fn first_and_last_stage() {
        assert_eq!(stage(0), STAGES[0]);
        assert!(!stage(0).contains('O'));
        assert_eq!(stage(MAX_MISSES), STAGES[6]);
        assert!(stage(MAX_MISSES).contains(r"/ \"));
    }

    #[test]
    fn each_miss_adds_to_the_figure() {
        for pair in STAGES.windows(2) {
            let ink = |s: &str| s.chars().filter(|c| !c.is_whitespace()).count();
            assert!(ink(pair[1]) > ink(pair[0]));
        }
    }

    #[test]
    fn masked_word_hides_unguessed_letters() {
        assert_eq!(masked_word("CAT", &letters("")), "_ _ _");
        assert_eq!(masked_word("CAT", &letters("C")), "C _ _");
        assert_eq!(masked_word("CAT", &letters("CAZ")), "C A _");
        assert_eq!(masked_word("CAT", &letters("TAC")), "C A T");
    }

    #[test]
    fn repeated_letters_are_all_revealed() {
        assert_eq!(masked_word("KEYBOARD", &letters("EO")), "_ E _ _ O _ _ _");
        assert_eq!(masked_word("GEMINI", &letters("I")), "_ _ _ I _ I");
    }

    #[test]
    fn listing_is_sorted_regardless_of_guess_order() {
        let mut guessed = BTreeSet::new();
        guessed.insert('Z');
        guessed.insert('A');
        assert_eq!(guessed_listing(&guessed), "A Z");
        assert_eq!(guessed_listing(&BTreeSet::new()), "");
    }

    #[test]
    fn render_returns_fully_revealed_word_on_win() {
        let (masked, out) = rendered("CAT", "CAT", 6);
        assert_eq!(masked, "C A T");
        assert!(!masked.contains(PLACEHOLDER));
        assert!(out.contains("Word: C A T"));
        assert!(out.contains("Guessed Letters: A C T"));
        assert!(out.contains("Misses Left: 6/6"));
    }

    #[test]
    fn render_draws_stage_for_misses_used() {
        let (_, out) = rendered("CAT", "XYZ", 3);
        assert!(out.contains("Misses Left: 3/6"));
        assert!(out.contains("  /|   |"));
        assert!(!out.contains(r"/|\"));
    }

    #[test]
    fn render_clamps_out_of_range_counter() {
        let (_, out) = rendered("CAT", "", 200);
        assert!(out.contains("Misses Left: 6/6"));
    }

    #[test]
    fn renderer_trait_matches_free_function() {
        let mut state = HangmanState::new("CAT");
        state.apply_guess('A');
        let mut ctx = TerminalContext::plain(Vec::new());
        HangmanRenderer.render(&state, &mut ctx).unwrap();
        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.contains("Word: _ A _"));
    }

    proptest! {
        #[test]
        fn stage_never_out_of_range(misses in any::<u8>()) {
            let frame = stage(misses);
            prop_assert!(STAGES.contains(&frame));
        }

        #[test]
        fn listing_always_sorted(guesses in proptest::collection::vec(b'A'..=b'Z', 0..26)) {
            let set: BTreeSet<char> = guesses.iter().map(|&b| char::from(b)).collect();
            let listing = guessed_listing(&set);
            let parts: Vec<&str> = listing.split_whitespace().collect();
            let mut sorted = parts.clone();
            sorted.sort_unstable();
            prop_assert_eq!(parts, sorted);
        }
    }
}
