//! Chapter progress and stage indices.
//!
//! Campaign content is authored in fixed blocks of four rows per chapter: one
//! quest row followed by three investigation rows. A [`StageIndex`] is the
//! zero-based position of a row across all chapters:
//!
//! ```text
//! chapter 1: 0 Quest | 1 Investigation 1 | 2 Investigation 2 | 3 Investigation 3
//! chapter 2: 4 Quest | 5 Investigation 1 | ...
//! ```
//!
//! [`stage_index_from_progress`] is the one place that turns human-facing
//! progress (chapter, investigations completed) into that index. It accepts
//! any input: values are floored, the chapter is clamped to at least 1 and
//! the investigation count to `0..=3`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CampaignError;

/// Rows per chapter: one quest plus the investigations.
pub const ROWS_PER_CHAPTER: u64 = 4;

/// Investigations in every chapter.
pub const INVESTIGATIONS_PER_CHAPTER: u8 = 3;

// ---------------------------------------------------------------------------
// stage_index_from_progress
// ---------------------------------------------------------------------------

/// Map a chapter and the number of investigations completed in it to a
/// stage index: `(chapter - 1) * 4 + investigations`.
///
/// NaN counts as the lower bound of its range and results saturate at
/// `u64::MAX`.
///
/// ```
/// use chapterhouse_campaign::progress::{stage_index_from_progress, StageIndex};
///
/// assert_eq!(stage_index_from_progress(2.0, 0.0), StageIndex::new(4));
/// assert_eq!(stage_index_from_progress(0.0, -5.0), StageIndex::new(0));
/// assert_eq!(stage_index_from_progress(2.9, 1.9), StageIndex::new(5));
/// ```
pub fn stage_index_from_progress(chapter: f64, investigations_completed: f64) -> StageIndex {
    Progress {
        chapter: normalize_chapter(chapter),
        investigations_completed: normalize_investigations(investigations_completed),
    }
    .stage_index()
}

fn normalize_chapter(chapter: f64) -> u64 {
    // f64::max returns the non-NaN operand; the cast saturates.
    chapter.floor().max(1.0) as u64
}

fn normalize_investigations(completed: f64) -> u8 {
    completed
        .floor()
        .max(0.0)
        .min(f64::from(INVESTIGATIONS_PER_CHAPTER)) as u8
}

// ---------------------------------------------------------------------------
// StageIndex
// ---------------------------------------------------------------------------

/// Zero-based row index across all chapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageIndex(u64);

impl StageIndex {
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The chapter this row belongs to (1-based).
    pub const fn chapter(self) -> u64 {
        self.0 / ROWS_PER_CHAPTER + 1
    }

    /// The row within its chapter.
    pub fn row(self) -> StageRow {
        match (self.0 % ROWS_PER_CHAPTER) as u8 {
            0 => StageRow::Quest,
            n => StageRow::Investigation(n),
        }
    }
}

impl fmt::Display for StageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// StageRow
// ---------------------------------------------------------------------------

/// One of the four rows of a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageRow {
    Quest,
    /// Investigation number, `1..=3`.
    Investigation(u8),
}

impl StageRow {
    pub fn investigation(number: u8) -> Result<Self, CampaignError> {
        if (1..=INVESTIGATIONS_PER_CHAPTER).contains(&number) {
            Ok(Self::Investigation(number))
        } else {
            Err(CampaignError::InvalidInvestigation { number })
        }
    }

    /// Offset of this row inside its chapter block.
    pub fn offset(self) -> u8 {
        match self {
            StageRow::Quest => 0,
            StageRow::Investigation(n) => n,
        }
    }
}

impl fmt::Display for StageRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageRow::Quest => f.write_str("Quest"),
            StageRow::Investigation(n) => write!(f, "Investigation {n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Normalized campaign progress: a chapter `>= 1` and `0..=3` investigations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawProgress")]
pub struct Progress {
    chapter: u64,
    investigations_completed: u8,
}

impl Progress {
    /// Build progress from integer inputs, clamping the same way
    /// [`stage_index_from_progress`] does.
    pub fn new(chapter: u64, investigations_completed: u8) -> Self {
        Self {
            chapter: chapter.max(1),
            investigations_completed: investigations_completed.min(INVESTIGATIONS_PER_CHAPTER),
        }
    }

    /// Inverse of [`stage_index`](Self::stage_index).
    pub fn from_stage_index(index: StageIndex) -> Self {
        Self {
            chapter: index.chapter(),
            investigations_completed: index.row().offset(),
        }
    }

    pub fn chapter(self) -> u64 {
        self.chapter
    }

    pub fn investigations_completed(self) -> u8 {
        self.investigations_completed
    }

    pub fn stage_index(self) -> StageIndex {
        StageIndex(
            self.chapter
                .saturating_sub(1)
                .saturating_mul(ROWS_PER_CHAPTER)
                .saturating_add(u64::from(self.investigations_completed)),
        )
    }

    /// The row the player is currently on.
    pub fn row(self) -> StageRow {
        self.stage_index().row()
    }
}

/// Unnormalized progress as stored by the player-state layer. Any JSON
/// number is accepted and normalized like [`stage_index_from_progress`]
/// input.
#[derive(Deserialize)]
struct RawProgress {
    chapter: f64,
    investigations_completed: f64,
}

impl From<RawProgress> for Progress {
    fn from(raw: RawProgress) -> Self {
        Self {
            chapter: normalize_chapter(raw.chapter),
            investigations_completed: normalize_investigations(raw.investigations_completed),
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
