//! Internal data structures for representing parsed puzzle submissions.
//!
//! This module defines the core data structures produced by the result parser
//! and consumed by the scoring engine: puzzle categories, per-guess outcomes,
//! and the parsed submission itself.

use std::fmt;

/// One of the four fixed groupings a guess can cleanly match.
///
/// The categories mirror the colored tiles of the daily Connections share
/// text. Each category carries a fixed point weight, strictly ordered by
/// difficulty: yellow is the easiest group and purple the hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Easiest group, worth 1 point
    Yellow,
    /// Worth 2 points
    Green,
    /// Worth 3 points
    Blue,
    /// Hardest group, worth 4 points
    Purple,
}

impl Category {
    /// All categories, in the order guess lines are matched against them.
    pub const ALL: [Category; 4] = [
        Category::Yellow,
        Category::Green,
        Category::Blue,
        Category::Purple,
    ];

    /// The single tile emoji marking this category in a share text.
    pub fn marker(&self) -> &'static str {
        match self {
            Category::Yellow => "🟨",
            Category::Green => "🟩",
            Category::Blue => "🟦",
            Category::Purple => "🟪",
        }
    }

    /// The four-in-a-row tile run identifying a clean match of this category.
    pub fn run(&self) -> &'static str {
        match self {
            Category::Yellow => "🟨🟨🟨🟨",
            Category::Green => "🟩🟩🟩🟩",
            Category::Blue => "🟦🟦🟦🟦",
            Category::Purple => "🟪🟪🟪🟪",
        }
    }

    /// Fixed point weight of a clean match of this category.
    ///
    /// The weights are per-category constants (yellow 1, green 2, blue 3,
    /// purple 4), summed over all categories achieved in a submission. A
    /// perfect submission is therefore worth 10 points.
    pub fn points(&self) -> u32 {
        match self {
            Category::Yellow => 1,
            Category::Green => 2,
            Category::Blue => 3,
            Category::Purple => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Yellow => "yellow",
            Category::Green => "green",
            Category::Blue => "blue",
            Category::Purple => "purple",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single guess line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// All four tiles on the line belong to the same category.
    Clean(Category),
    /// Mixed tiles; the guess counts as a mistake.
    Miss,
}

/// A fully parsed puzzle submission.
///
/// Produced by [`parse`](crate::results::parse) only after the whole message
/// validated, so holding one of these is proof the submission targets the
/// active puzzle and has a well-formed structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubmission {
    /// Puzzle number cited by the submission, already validated against the
    /// active round.
    pub puzzle_number: u32,
    /// Per-guess category results, in submission order.
    pub guesses: Vec<GuessResult>,
}
