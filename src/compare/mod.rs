//! Head-to-head movie comparison
//!
//! Owns the two selections the left and right search widgets report,
//! replacing the module-level left/right globals of the original widget
//! with coordinator-scoped state, and scores the fight stat by stat.

mod stats;

pub use stats::{parse_awards, parse_count, parse_dollars, parse_number};

use crate::omdb::MovieDetail;
use std::fmt;
use tracing::info;

/// Which search widget a selection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The five stats the fight is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Awards,
    BoxOffice,
    Metascore,
    ImdbRating,
    ImdbVotes,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Awards,
        Stat::BoxOffice,
        Stat::Metascore,
        Stat::ImdbRating,
        Stat::ImdbVotes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Awards => "Awards",
            Stat::BoxOffice => "Box Office",
            Stat::Metascore => "Metascore",
            Stat::ImdbRating => "IMDB Rating",
            Stat::ImdbVotes => "IMDB Votes",
        }
    }

    fn extract(&self, movie: &MovieDetail) -> StatValue {
        let (display, score) = match self {
            Stat::Awards => (movie.awards.clone(), parse_awards(&movie.awards)),
            Stat::BoxOffice => (movie.box_office.clone(), parse_dollars(&movie.box_office)),
            Stat::Metascore => (movie.metascore.clone(), parse_number(&movie.metascore)),
            Stat::ImdbRating => (movie.imdb_rating.clone(), parse_number(&movie.imdb_rating)),
            Stat::ImdbVotes => (movie.imdb_votes.clone(), parse_count(&movie.imdb_votes)),
        };
        StatValue { display, score }
    }
}

/// One side's value for a stat: the display string plus its numeric score
#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub display: String,
    /// `None` when the display string does not parse ("N/A")
    pub score: Option<f64>,
}

/// Outcome of one scored row, or of the whole fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Left,
    Right,
    Tie,
}

/// One scored row of the scoreboard
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub stat: Stat,
    pub left: StatValue,
    pub right: StatValue,
    pub winner: Winner,
}

impl StatRow {
    fn score(stat: Stat, left: &MovieDetail, right: &MovieDetail) -> Self {
        let left = stat.extract(left);
        let right = stat.extract(right);
        // A parsable value beats an absent one; two absent values tie.
        let winner = match (left.score, right.score) {
            (Some(a), Some(b)) if a > b => Winner::Left,
            (Some(a), Some(b)) if b > a => Winner::Right,
            (Some(_), Some(_)) => Winner::Tie,
            (Some(_), None) => Winner::Left,
            (None, Some(_)) => Winner::Right,
            (None, None) => Winner::Tie,
        };
        Self {
            stat,
            left,
            right,
            winner,
        }
    }
}

/// Full scoreboard for two selected movies
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub left_title: String,
    pub right_title: String,
    pub rows: Vec<StatRow>,
}

impl Scoreboard {
    /// Overall winner by rows won
    pub fn overall(&self) -> Winner {
        let left = self.rows.iter().filter(|r| r.winner == Winner::Left).count();
        let right = self
            .rows
            .iter()
            .filter(|r| r.winner == Winner::Right)
            .count();
        match left.cmp(&right) {
            std::cmp::Ordering::Greater => Winner::Left,
            std::cmp::Ordering::Less => Winner::Right,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}", self.left_title, self.right_title)?;
        for row in &self.rows {
            let marker = match row.winner {
                Winner::Left => "<",
                Winner::Right => ">",
                Winner::Tie => "=",
            };
            writeln!(
                f,
                "  {:<12} {} {} {}",
                row.stat.label(),
                row.left.display,
                marker,
                row.right.display
            )?;
        }
        let verdict = match self.overall() {
            Winner::Left => format!("winner: {}", self.left_title),
            Winner::Right => format!("winner: {}", self.right_title),
            Winner::Tie => "it's a tie".to_string(),
        };
        write!(f, "  {verdict}")
    }
}

/// Coordinator both autocomplete instances report selections to
#[derive(Debug, Default)]
pub struct Comparison {
    left: Option<MovieDetail>,
    right: Option<MovieDetail>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection; returns the scoreboard once both sides are in.
    ///
    /// A repeated selection on one side replaces its previous movie and
    /// rescores against the other side.
    pub fn report(&mut self, side: Side, movie: MovieDetail) -> Option<Scoreboard> {
        info!(?side, title = %movie.title, "movie selected");
        match side {
            Side::Left => self.left = Some(movie),
            Side::Right => self.right = Some(movie),
        }
        self.scoreboard()
    }

    /// Scoreboard if both sides have reported
    pub fn scoreboard(&self) -> Option<Scoreboard> {
        let (left, right) = (self.left.as_ref()?, self.right.as_ref()?);
        let rows = Stat::ALL
            .iter()
            .map(|&stat| StatRow::score(stat, left, right))
            .collect();
        Some(Scoreboard {
            left_title: left.title.clone(),
            right_title: right.title.clone(),
            rows,
        })
    }

    pub fn left(&self) -> Option<&MovieDetail> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&MovieDetail> {
        self.right.as_ref()
    }

    /// Forget both selections
    pub fn clear(&mut self) {
        self.left = None;
        self.right = None;
    }
}
