//! Run shapes and the beats rule.
//!
//! A playable run is either a *set* (every active face equal) or an
//! *ascending run* (active faces strictly increasing). A single card is a set.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::ShowRanking;

/// Shape of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunKind {
    Set,
    Ascending,
}

/// What the beats rule needs to know about a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Run {
    pub kind: RunKind,
    pub len: usize,
    /// Highest active face.
    pub max: u8,
}

impl Run {
    /// Classify a candidate show. `None` if empty or not a well-formed run.
    pub fn classify<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Run> {
        let mut iter = cards.into_iter().map(|c| c.value());
        let first = iter.next()?;

        let mut run = Run {
            kind: RunKind::Set,
            len: 1,
            max: first,
        };
        let mut prev = first;
        for value in iter {
            let kind = match value {
                v if v == prev => RunKind::Set,
                v if v > prev => RunKind::Ascending,
                _ => return None,
            };
            if run.len > 1 && kind != run.kind {
                return None;
            }
            run.kind = kind;
            run.len += 1;
            run.max = run.max.max(value);
            prev = value;
        }
        Some(run)
    }

    /// Measure the table show for comparison. Table composition is not
    /// re-validated: anything that is not a set counts as ascending.
    pub fn measure<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<Run> {
        let values: Vec<u8> = cards.into_iter().map(|c| c.value()).collect();
        let first = *values.first()?;
        let kind = if values.iter().all(|&v| v == first) {
            RunKind::Set
        } else {
            RunKind::Ascending
        };
        Some(Run {
            kind,
            len: values.len(),
            max: values.iter().copied().max().unwrap_or(first),
        })
    }

    /// Does this run beat `table` (`None` for an empty table)?
    #[must_use]
    pub fn beats(&self, table: Option<&Run>, ranking: ShowRanking) -> bool {
        let Some(table) = table else {
            return true;
        };
        if self.len != table.len {
            return self.len > table.len;
        }
        match ranking {
            ShowRanking::LengthThenMax => self.max > table.max,
            ShowRanking::SetsOverRuns => match (self.kind, table.kind) {
                (RunKind::Set, RunKind::Ascending) => true,
                (RunKind::Ascending, RunKind::Set) => false,
                _ => self.max > table.max,
            },
        }
    }
}
