//! Legal-move generation, validation and resolution.
//!
//! Every move is judged by one pure function, [`resolve`], which evaluates
//! it on scratch copies of the acting hand and the table and returns either
//! the full outcome or the violated constraint. The round engine commits a
//! [`Resolution`] only after it is produced, and the generator filters its
//! candidates through the same checks, so a generated move always applies
//! and a move outside the generated set is always rejected.
//!
//! Candidate order is the derived `Ord` of [`Move`]: shows by
//! `(start_pos, length)`, then scouts by `(first, flip, insert_pos)`, then
//! scout-and-shows by `(scout, show)`.

use im::Vector;
use log::trace;

use crate::cards::{Card, Hand, Table};
use crate::core::{IllegalMoveReason, Move, PlayerId, ScoutMove, ShowMove, ShowRanking};

use super::run::Run;

/// What the rules see of the seat to act.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub player: PlayerId,
    pub hand: &'a Hand,
    pub table: &'a Table,
    pub can_scout_and_show: bool,
    pub ranking: ShowRanking,
}

/// Where a scouted card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoutSource {
    /// Owner of the show the card was taken from.
    pub owner: PlayerId,
    /// No card had been taken from that show before.
    pub first_from_show: bool,
}

/// The complete effect of a legal move, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub hand: Hand,
    pub table: Table,
    /// Table cards displaced by a show; they go to the mover's pile.
    pub captured: Vector<Card>,
    pub scouted_from: Option<ScoutSource>,
    pub uses_combo: bool,
}

/// Evaluate `mv` for the seat described by `view` without touching it.
pub fn resolve(view: &TurnView<'_>, mv: &Move) -> Result<Resolution, IllegalMoveReason> {
    match *mv {
        Move::Show(show) => {
            let (hand, table, captured) = resolve_show(view.hand, view.table, show, view)?;
            Ok(Resolution {
                hand,
                table,
                captured,
                scouted_from: None,
                uses_combo: false,
            })
        }
        Move::Scout(scout) => {
            let (hand, table, source) = resolve_scout(view.hand, view.table, scout)?;
            Ok(Resolution {
                hand,
                table,
                captured: Vector::new(),
                scouted_from: Some(source),
                uses_combo: false,
            })
        }
        Move::ScoutAndShow { scout, show } => {
            if !view.can_scout_and_show {
                return Err(IllegalMoveReason::ComboSpent);
            }
            let (hand, table, source) = resolve_scout(view.hand, view.table, scout)?;
            let (hand, table, captured) = resolve_show(&hand, &table, show, view)?;
            Ok(Resolution {
                hand,
                table,
                captured,
                scouted_from: Some(source),
                uses_combo: true,
            })
        }
    }
}

/// Check `mv` without building the outcome.
pub fn check_move(view: &TurnView<'_>, mv: &Move) -> Result<(), IllegalMoveReason> {
    resolve(view, mv).map(|_| ())
}

fn resolve_scout(
    hand: &Hand,
    table: &Table,
    scout: ScoutMove,
) -> Result<(Hand, Table, ScoutSource), IllegalMoveReason> {
    let owner = table.owner().ok_or(IllegalMoveReason::EmptyTable)?;
    if scout.insert_pos > hand.len() {
        return Err(IllegalMoveReason::InsertOutOfRange {
            insert_pos: scout.insert_pos,
            hand_len: hand.len(),
        });
    }
    let first_from_show = !table.was_scouted();
    let (table, card) = table
        .without_end(scout.first)
        .ok_or(IllegalMoveReason::EmptyTable)?;
    let card = if scout.flip { card.flipped() } else { card };

    Ok((
        hand.with_inserted(scout.insert_pos, card),
        table,
        ScoutSource {
            owner,
            first_from_show,
        },
    ))
}

fn resolve_show(
    hand: &Hand,
    table: &Table,
    show: ShowMove,
    view: &TurnView<'_>,
) -> Result<(Hand, Table, Vector<Card>), IllegalMoveReason> {
    if show.length == 0 {
        return Err(IllegalMoveReason::EmptyShow);
    }
    let in_range = show
        .start_pos
        .checked_add(show.length)
        .is_some_and(|end| end <= hand.len());
    if !in_range {
        return Err(IllegalMoveReason::ShowOutOfRange {
            start_pos: show.start_pos,
            end_pos: show.end_pos(),
            hand_len: hand.len(),
        });
    }
    let run = Run::classify(hand.run(show.start_pos, show.length))
        .ok_or(IllegalMoveReason::MalformedRun)?;
    let table_run = Run::measure(table.iter());
    if !run.beats(table_run.as_ref(), view.ranking) {
        let (table_len, table_max) = table_run.map_or((0, 0), |t| (t.len, t.max));
        return Err(IllegalMoveReason::DoesNotBeatTable {
            length: run.len,
            max: run.max,
            table_len,
            table_max,
        });
    }

    let (rest, played) = hand.without_run(show.start_pos, show.length);
    Ok((rest, Table::shown(played, view.player), table.cards().clone()))
}

/// Every show in `hand` that beats `table`, ordered by `(start_pos, length)`.
#[must_use]
pub fn legal_shows(hand: &Hand, table: &Table, ranking: ShowRanking) -> Vec<ShowMove> {
    let table_run = Run::measure(table.iter());
    let mut shows = Vec::new();

    for start in 0..hand.len() {
        for length in 1..=hand.len() - start {
            // Extending a malformed run never repairs it.
            let Some(run) = Run::classify(hand.run(start, length)) else {
                break;
            };
            if run.beats(table_run.as_ref(), ranking) {
                shows.push(ShowMove::new(start, length));
            }
        }
    }
    shows
}

/// Every scout from `table` into a hand of `hand_len` cards, ordered by
/// `(first, flip, insert_pos)`.
#[must_use]
pub fn legal_scouts(hand_len: usize, table: &Table) -> Vec<ScoutMove> {
    if table.is_empty() {
        return Vec::new();
    }
    let mut scouts = Vec::with_capacity(4 * (hand_len + 1));
    for first in [false, true] {
        for flip in [false, true] {
            for insert_pos in 0..=hand_len {
                scouts.push(ScoutMove::new(first, flip, insert_pos));
            }
        }
    }
    scouts
}

/// Whether `view` has any legal move, without enumerating combos.
#[must_use]
pub fn has_legal_move(view: &TurnView<'_>) -> bool {
    !view.table.is_empty() || !legal_shows(view.hand, view.table, view.ranking).is_empty()
}

/// The complete, ordered legal-move set for the seat described by `view`.
#[must_use]
pub fn legal_moves(view: &TurnView<'_>) -> Vec<Move> {
    let shows = legal_shows(view.hand, view.table, view.ranking);
    let scouts = legal_scouts(view.hand.len(), view.table);

    let mut moves: Vec<Move> = shows.into_iter().map(Move::Show).collect();
    moves.extend(scouts.iter().copied().map(Move::Scout));

    if view.can_scout_and_show {
        for &scout in &scouts {
            let Ok((hand, table, _)) = resolve_scout(view.hand, view.table, scout) else {
                continue;
            };
            moves.extend(
                legal_shows(&hand, &table, view.ranking)
                    .into_iter()
                    .map(|show| Move::ScoutAndShow { scout, show }),
            );
        }
    }

    trace!(
        "{}: {} legal moves (hand {}, table {})",
        view.player,
        moves.len(),
        view.hand.len(),
        view.table.len()
    );
    moves
}
