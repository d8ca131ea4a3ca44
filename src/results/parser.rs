//! Submission text parser.
//!
//! Extracts structured guess data from the free-form share text players paste
//! into the chat. Parsing is strictly read-only: it either produces a
//! [`ParsedSubmission`] or a typed [`SubmissionRejection`], and no player
//! state may be touched before a parse fully succeeds.

use crate::results::structs::{Category, GuessResult, ParsedSubmission};

/// Line marker preceding the puzzle number in a share text.
pub const PUZZLE_MARKER: &str = "Puzzle #";

/// Reasons a submission is rejected without mutating any state.
///
/// Rejections are normal outcomes, not errors: they are reported back to the
/// sender and never logged above debug level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionRejection {
    /// The submission cites a puzzle number other than the active one.
    WrongPuzzle {
        /// Puzzle number found in the submission
        submitted: u32,
        /// Puzzle number of the active round
        expected: u32,
    },
    /// The message looked like a submission but its structure could not be
    /// parsed (missing or malformed puzzle number).
    InvalidSyntax,
}

/// Returns whether a message body should be treated as a puzzle submission.
///
/// A message triggers submission handling only when it contains all three of
/// the game-name marker, the puzzle-number marker, and at least one category
/// tile. Anything else is ignored entirely, it is not an error.
///
/// # Examples
///
/// ```
/// # use grouper::results::is_submission;
/// let body = "Connections\nPuzzle #123\n🟨🟨🟨🟨";
/// assert!(is_submission(body, "Connections"));
/// assert!(!is_submission("good morning", "Connections"));
/// ```
pub fn is_submission(body: &str, game_name: &str) -> bool {
    body.contains(game_name)
        && body.contains(PUZZLE_MARKER)
        && Category::ALL.iter().any(|c| body.contains(c.marker()))
}

/// Parses a share text into a [`ParsedSubmission`].
///
/// Scans the message line by line:
///
/// - A line containing `Puzzle #<N>` yields the submitted puzzle number. If
///   it does not match `expected_puzzle`, parsing aborts with
///   [`SubmissionRejection::WrongPuzzle`].
/// - A line containing any category tile is a guess line. A four-in-a-row
///   run of a single category makes the guess a clean match of that
///   category; any other tile mix is a miss. Runs are checked in the fixed
///   yellow, green, blue, purple order.
/// - Every other line is noise or commentary and is skipped.
///
/// A missing or unparseable puzzle number yields
/// [`SubmissionRejection::InvalidSyntax`].
///
/// # Arguments
///
/// * `body` - The raw message text
/// * `expected_puzzle` - The active round's puzzle number
///
/// # Examples
///
/// ```
/// # use grouper::results::{parse, GuessResult, Category};
/// let body = "Connections\nPuzzle #42\n🟩🟩🟩🟩\n🟪🟨🟦🟩";
/// let parsed = parse(body, 42).unwrap();
/// assert_eq!(parsed.puzzle_number, 42);
/// assert_eq!(parsed.guesses[0], GuessResult::Clean(Category::Green));
/// assert_eq!(parsed.guesses[1], GuessResult::Miss);
/// ```
pub fn parse(body: &str, expected_puzzle: u32) -> Result<ParsedSubmission, SubmissionRejection> {
    let mut puzzle_number = None;
    let mut guesses = Vec::new();

    for line in body.lines() {
        if let Some((_, after)) = line.split_once(PUZZLE_MARKER) {
            let number: u32 = after
                .trim()
                .parse()
                .map_err(|_| SubmissionRejection::InvalidSyntax)?;
            if number != expected_puzzle {
                return Err(SubmissionRejection::WrongPuzzle {
                    submitted: number,
                    expected: expected_puzzle,
                });
            }
            puzzle_number.get_or_insert(number);
        } else if Category::ALL.iter().any(|c| line.contains(c.marker())) {
            let result = Category::ALL
                .iter()
                .find(|c| line.contains(c.run()))
                .map(|c| GuessResult::Clean(*c))
                .unwrap_or(GuessResult::Miss);
            guesses.push(result);
        }
    }

    let puzzle_number = puzzle_number.ok_or(SubmissionRejection::InvalidSyntax)?;

    Ok(ParsedSubmission {
        puzzle_number,
        guesses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_NAME: &str = "Connections";

    fn share_text(puzzle: u32, lines: &[&str]) -> String {
        let mut body = format!("Connections\nPuzzle #{}\n", puzzle);
        body.push_str(&lines.join("\n"));
        body
    }

    #[test]
    fn test_is_submission_requires_all_three_markers() {
        assert!(is_submission(
            "Connections\nPuzzle #5\n🟦🟦🟦🟦",
            GAME_NAME
        ));
        // missing game name
        assert!(!is_submission("Puzzle #5\n🟦🟦🟦🟦", GAME_NAME));
        // missing puzzle marker
        assert!(!is_submission("Connections\n🟦🟦🟦🟦", GAME_NAME));
        // missing category tiles
        assert!(!is_submission("Connections\nPuzzle #5", GAME_NAME));
    }

    #[test]
    fn test_is_submission_ignores_plain_chat() {
        assert!(!is_submission("did everyone do the puzzle today?", GAME_NAME));
    }

    #[test]
    fn test_parse_perfect_submission() {
        let body = share_text(7, &["🟨🟨🟨🟨", "🟩🟩🟩🟩", "🟦🟦🟦🟦", "🟪🟪🟪🟪"]);
        let parsed = parse(&body, 7).unwrap();

        assert_eq!(parsed.puzzle_number, 7);
        assert_eq!(
            parsed.guesses,
            vec![
                GuessResult::Clean(Category::Yellow),
                GuessResult::Clean(Category::Green),
                GuessResult::Clean(Category::Blue),
                GuessResult::Clean(Category::Purple),
            ]
        );
    }

    #[test]
    fn test_parse_mixed_line_is_miss() {
        let body = share_text(7, &["🟨🟩🟦🟪", "🟨🟨🟨🟨"]);
        let parsed = parse(&body, 7).unwrap();

        assert_eq!(
            parsed.guesses,
            vec![GuessResult::Miss, GuessResult::Clean(Category::Yellow)]
        );
    }

    #[test]
    fn test_parse_ignores_noise_lines() {
        let body = "Connections\nPuzzle #7\nso close today!\n🟪🟪🟪🟪\nsee you tomorrow";
        let parsed = parse(body, 7).unwrap();

        assert_eq!(parsed.guesses, vec![GuessResult::Clean(Category::Purple)]);
    }

    #[test]
    fn test_parse_wrong_puzzle_number() {
        let body = share_text(6, &["🟨🟨🟨🟨"]);
        let result = parse(&body, 7);

        assert_eq!(
            result,
            Err(SubmissionRejection::WrongPuzzle {
                submitted: 6,
                expected: 7
            })
        );
    }

    #[test]
    fn test_parse_unparseable_number_is_invalid_syntax() {
        let body = "Connections\nPuzzle #abc\n🟨🟨🟨🟨";
        assert_eq!(parse(body, 7), Err(SubmissionRejection::InvalidSyntax));
    }

    #[test]
    fn test_parse_missing_number_is_invalid_syntax() {
        let body = "Connections\n🟨🟨🟨🟨";
        assert_eq!(parse(body, 7), Err(SubmissionRejection::InvalidSyntax));
    }

    #[test]
    fn test_parse_guess_lines_before_number_line() {
        let body = "🟦🟦🟦🟦\nConnections Puzzle #7";
        let parsed = parse(body, 7).unwrap();

        assert_eq!(parsed.guesses, vec![GuessResult::Clean(Category::Blue)]);
    }

    #[test]
    fn test_parse_empty_guess_list_is_valid() {
        // The trigger check guarantees at least one tile in practice, but the
        // parser itself accepts a bare header.
        let parsed = parse("Puzzle #7", 7).unwrap();
        assert!(parsed.guesses.is_empty());
    }
}
