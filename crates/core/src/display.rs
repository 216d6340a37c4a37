//! Pure display projections.
//!
//! Everything here maps state or static tables to display strings. No state,
//! no I/O; the terminal view and the controller both build on these.

use crate::content::LeaderboardEntry;
use crate::types::SCORE_TOKEN;

const IMAGE_BASE: &str = "https://via.placeholder.com/300x300/FF0040/000000";

pub fn level_label(level: u32) -> String {
    format!("LEVEL {level}")
}

/// Placeholder image reference for a level.
///
/// ```
/// use trader_quiz_core::display::image_ref;
///
/// assert_eq!(
///     image_ref(7),
///     "https://via.placeholder.com/300x300/FF0040/000000?text=LEVEL+7"
/// );
/// ```
pub fn image_ref(level: u32) -> String {
    format!("{IMAGE_BASE}?text=LEVEL+{level}")
}

pub fn image_alt(level: u32) -> String {
    format!("Guess the trader - Level {level}")
}

/// Text on the back of the card once a guess is correct.
pub fn result_text(name: &str) -> String {
    format!("CORRECT! It's {name}")
}

/// Group digits in threes with commas (en-US style).
///
/// ```
/// use trader_quiz_core::display::format_thousands;
///
/// assert_eq!(format_thousands(0), "0");
/// assert_eq!(format_thousands(999), "999");
/// assert_eq!(format_thousands(1_250_000), "1,250,000");
/// ```
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rank marker: a medal for the podium, `#n` for everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankMarker {
    Gold,
    Silver,
    Bronze,
    Plain(u32),
}

impl RankMarker {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => RankMarker::Gold,
            2 => RankMarker::Silver,
            3 => RankMarker::Bronze,
            n => RankMarker::Plain(n),
        }
    }

    pub fn is_podium(&self) -> bool {
        !matches!(self, RankMarker::Plain(_))
    }

    /// Marker text. Medals are spelled out so every glyph is one column wide.
    ///
    /// ```
    /// use trader_quiz_core::RankMarker;
    ///
    /// assert_eq!(RankMarker::for_rank(2).label(), "SILVER");
    /// assert_eq!(RankMarker::for_rank(7).label(), "#7");
    /// ```
    pub fn label(&self) -> String {
        match self {
            RankMarker::Gold => "GOLD".to_string(),
            RankMarker::Silver => "SILVER".to_string(),
            RankMarker::Bronze => "BRONZE".to_string(),
            RankMarker::Plain(n) => format!("#{n}"),
        }
    }
}

/// One display-ready leaderboard line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub marker: RankMarker,
    pub name: String,
    pub score_text: String,
}

/// Project the leaderboard table into rows, ordered by rank ascending.
pub fn leaderboard_rows(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRow> {
    let mut sorted: Vec<&LeaderboardEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.rank);
    sorted
        .into_iter()
        .map(|e| LeaderboardRow {
            rank: e.rank,
            marker: RankMarker::for_rank(e.rank),
            name: e.name.to_string(),
            score_text: format!("{} {}", format_thousands(e.score), SCORE_TOKEN),
        })
        .collect()
}
