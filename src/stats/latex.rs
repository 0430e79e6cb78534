//! LaTeX-aware statistics — a modified Kile-style word count.
//!
//! A small deterministic state machine classifies every codepoint of a
//! LaTeX-flavoured stream into word, command/environment, or white-space
//! characters, and counts words, commands, and environment openings. The
//! state lives in [`LatexState`] and each state has its own transition
//! method, so the machine is testable without any I/O around it.
//!
//! Two quirks are load-bearing:
//!
//! - `\end` does **not** increment the environment counter. Only `\begin`
//!   does, so counting a selection that starts inside an environment cannot
//!   drift negative.
//! - After a backslash, `%` is a percent-sign control symbol, not the start
//!   of a comment.

use crate::error::{Result, TextError};
use crate::scan::{decode_codepoint, is_alphabetic, is_decimal_digit, is_punctuation};
use crate::types::LatexStats;

/// Tokenizer state.
///
/// The machine starts in `Standard` for every element; state never carries
/// across elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatexState {
    /// Running text.
    #[default]
    Standard,
    /// Between `%` and the end of the element.
    Comment,
    /// Just consumed a backslash; the next codepoint decides what follows.
    ControlSequence,
    /// A backslash followed by a single non-letter (e.g. `\%`, `\"`).
    /// Classified by the [`ControlSequence`](LatexState::ControlSequence)
    /// transition; the distinct state is part of the classification but has
    /// no transitions of its own.
    ControlSymbol,
    /// Inside a multi-letter control word.
    Command,
    /// Inside `\begin{...}` / `\end{...}` up to the closing brace.
    Environment,
}

/// The LaTeX tokenizer: current state plus the open-word flag.
///
/// Counters accumulate into a caller-owned [`LatexStats`], shared across
/// all elements of a call; the machine itself resets per element.
#[derive(Debug, Clone, Default)]
pub struct LatexTokenizer {
    state: LatexState,
    word_open: bool,
}

impl LatexTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize one non-missing element, folding counts into `stats`.
    ///
    /// `index` tags errors with the element's position in the input vector.
    pub fn accumulate(
        &mut self,
        index: usize,
        bytes: &[u8],
        stats: &mut LatexStats,
    ) -> Result<()> {
        self.state = LatexState::Standard;
        self.word_open = false;

        let mut cursor = 0;
        while cursor < bytes.len() {
            let decoded = decode_codepoint(bytes, cursor).map_err(|e| {
                TextError::MalformedEncoding {
                    index,
                    offset: e.offset,
                }
            })?;
            cursor += decoded.len;

            // A line feed is rejected in every state, comments included.
            if decoded.value == '\n' {
                return Err(TextError::EmbeddedNewline {
                    index,
                    offset: decoded.offset,
                });
            }

            cursor += self.step(decoded.value, bytes, cursor, stats);
        }
        Ok(())
    }

    /// Advance the machine by one codepoint `c`, whose encoding ends at
    /// `cursor`. Returns how many lookahead bytes were consumed (only the
    /// ASCII `egin` / `nd` checks ever skip ahead).
    fn step(&mut self, c: char, bytes: &[u8], cursor: usize, stats: &mut LatexStats) -> usize {
        match self.state {
            LatexState::Standard => self.on_standard(c, bytes, cursor, stats),
            LatexState::ControlSequence | LatexState::ControlSymbol => {
                self.on_control_sequence(c, bytes, cursor, stats)
            }
            LatexState::Command => {
                self.on_command(c, stats);
                0
            }
            LatexState::Environment => {
                self.on_environment(c, stats);
                0
            }
            // Everything up to the end of the element is ignored; a newline
            // is caught before dispatch.
            LatexState::Comment => 0,
        }
    }

    fn on_standard(
        &mut self,
        c: char,
        bytes: &[u8],
        cursor: usize,
        stats: &mut LatexStats,
    ) -> usize {
        if c == '\\' {
            stats.chars_cmd_envir += 1;
            // One codepoint of lookahead: an accent-like control symbol
            // (\" and friends) continues the current word, so K\"ahler is
            // one word, not two. A decode failure here is left for the main
            // loop to report.
            if let Ok(next) = decode_codepoint(bytes, cursor) {
                if !is_punctuation(next.value) || next.value == '~' || next.value == '^' {
                    self.word_open = false;
                }
            }
            self.state = LatexState::ControlSequence;
        } else if c == '%' {
            self.state = LatexState::Comment;
        } else {
            let letter = is_alphabetic(c);
            if letter || is_decimal_digit(c) {
                // Only a letter opens a word: "42test" is one word,
                // "42.2" is none.
                if letter && !self.word_open {
                    self.word_open = true;
                    stats.words += 1;
                }
                stats.chars_word += 1;
            } else {
                stats.chars_white += 1;
                self.word_open = false;
            }
        }
        0
    }

    fn on_control_sequence(
        &mut self,
        c: char,
        bytes: &[u8],
        cursor: usize,
        stats: &mut LatexStats,
    ) -> usize {
        if is_alphabetic(c) {
            // `\begin{...}` opens an environment; you cannot define a
            // command named \begin. Plain ASCII compare is fine here.
            if c == 'b' && bytes[cursor..].starts_with(b"egin") {
                stats.environments += 1;
                stats.chars_cmd_envir += 5;
                self.state = LatexState::Environment;
                return 4;
            }
            if c == 'e' && bytes[cursor..].starts_with(b"nd") {
                // Not counted as an environment — see the module docs.
                stats.chars_cmd_envir += 3;
                self.state = LatexState::Environment;
                return 2;
            }
            stats.commands += 1;
            stats.chars_cmd_envir += 1;
            self.state = LatexState::Command;
        } else {
            // Control symbol, e.g. \% (a literal percent sign, not a
            // comment opener).
            stats.commands += 1;
            stats.chars_cmd_envir += 1;
            self.state = LatexState::Standard;
        }
        0
    }

    fn on_command(&mut self, c: char, stats: &mut LatexStats) {
        if c == '\\' {
            stats.chars_cmd_envir += 1;
            self.state = LatexState::ControlSequence;
        } else if c == '%' {
            self.state = LatexState::Comment;
        } else if is_alphabetic(c) {
            stats.chars_cmd_envir += 1;
        } else {
            stats.chars_white += 1;
            self.state = LatexState::Standard;
        }
    }

    fn on_environment(&mut self, c: char, stats: &mut LatexStats) {
        if c == '}' {
            stats.chars_cmd_envir += 1;
            self.state = LatexState::Standard;
        } else if c == '%' {
            self.state = LatexState::Comment;
        } else {
            stats.chars_cmd_envir += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(elements: &[&str]) -> Result<LatexStats> {
        let mut stats = LatexStats::default();
        let mut tokenizer = LatexTokenizer::new();
        for (i, text) in elements.iter().enumerate() {
            tokenizer.accumulate(i, text.as_bytes(), &mut stats)?;
        }
        Ok(stats)
    }

    #[test]
    fn test_plain_words() {
        let stats = stats_of(&["alpha beta  gamma"]).unwrap();
        assert_eq!(stats.words, 3);
        assert_eq!(stats.chars_word, 14);
        assert_eq!(stats.chars_white, 3);
        assert_eq!(stats.commands, 0);
        assert_eq!(stats.environments, 0);
    }

    #[test]
    fn test_environment_counted_once() {
        let stats = stats_of(&[r"\begin{equation}x\end{equation}"]).unwrap();
        assert_eq!(stats.environments, 1, "\\end must not count");
        assert_eq!(stats.words, 1);
        assert_eq!(stats.chars_word, 1);
        assert_eq!(stats.chars_cmd_envir, 30);
        assert_eq!(stats.chars_white, 0);
        assert_eq!(stats.commands, 0);
    }

    #[test]
    fn test_control_symbol_accent_keeps_word_open() {
        // K\"ahler is a single word; the accent is one command.
        let stats = stats_of(&["K\\\"ahler"]).unwrap();
        assert_eq!(stats.words, 1);
        assert_eq!(stats.commands, 1);
        assert_eq!(stats.chars_word, 6);
        assert_eq!(stats.chars_cmd_envir, 2);
    }

    #[test]
    fn test_backslash_before_letter_closes_word() {
        // \textit is a command; "ab" and "cd" stay separate words.
        let stats = stats_of(&[r"ab\textit cd"]).unwrap();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.commands, 1);
        // \ + "textit" = 7 command chars; trailing space after the command
        // is white, "abcd" are word chars.
        assert_eq!(stats.chars_cmd_envir, 7);
        assert_eq!(stats.chars_white, 1);
        assert_eq!(stats.chars_word, 4);
    }

    #[test]
    fn test_comment_swallows_rest_of_element() {
        let stats = stats_of(&["a% all of this is ignored"]).unwrap();
        assert_eq!(stats.words, 1);
        assert_eq!(stats.chars_word, 1);
        assert_eq!(stats.chars_white, 0);
    }

    #[test]
    fn test_escaped_percent_is_not_a_comment() {
        let stats = stats_of(&[r"a\%b"]).unwrap();
        // The punctuation lookahead keeps the word open across \%, so
        // "a\%b" reads as a single word.
        assert_eq!(stats.words, 1);
        assert_eq!(stats.commands, 1);
        assert_eq!(stats.chars_word, 2);
        assert_eq!(stats.chars_cmd_envir, 2);
    }

    #[test]
    fn test_digits_do_not_open_words() {
        let stats = stats_of(&["42test"]).unwrap();
        assert_eq!(stats.words, 1);
        assert_eq!(stats.chars_word, 6);

        let stats = stats_of(&["42.2"]).unwrap();
        assert_eq!(stats.words, 0);
        assert_eq!(stats.chars_word, 3);
        assert_eq!(stats.chars_white, 1);
    }

    #[test]
    fn test_state_resets_between_elements() {
        // Element 0 ends inside a comment; element 1 must still be counted.
        let stats = stats_of(&["x% tail", "y"]).unwrap();
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_newline_fails_even_inside_comment() {
        let mut stats = LatexStats::default();
        let mut tokenizer = LatexTokenizer::new();
        let err = tokenizer
            .accumulate(0, b"a% comment\nb", &mut stats)
            .unwrap_err();
        assert_eq!(err, TextError::EmbeddedNewline { index: 0, offset: 10 });
    }

    #[test]
    fn test_malformed_utf8_fails() {
        let mut stats = LatexStats::default();
        let mut tokenizer = LatexTokenizer::new();
        let err = tokenizer.accumulate(2, &[0xC3], &mut stats).unwrap_err();
        assert_eq!(err, TextError::MalformedEncoding { index: 2, offset: 0 });
    }

    #[test]
    fn test_command_followed_by_command() {
        let stats = stats_of(&[r"\alpha\beta"]).unwrap();
        assert_eq!(stats.commands, 2);
        // \alpha = 6, then the second backslash and "beta" = 5.
        assert_eq!(stats.chars_cmd_envir, 11);
        assert_eq!(stats.words, 0);
    }

    #[test]
    fn test_unicode_letters_count_as_words() {
        let stats = stats_of(&["zażółć gęślą"]).unwrap();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.chars_word, 11);
        assert_eq!(stats.chars_white, 1);
    }
}
