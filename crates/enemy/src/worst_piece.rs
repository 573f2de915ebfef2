//! Worst-piece selection: send whatever leaves the player's best
//! placement as bad as possible.

use hate_core::{CoreState, PieceId, Well};
use hate_engine::Engine;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::{Enemy, EnemyError};

/// How many times each well has been seen with a piece about to arrive.
pub type VisitCounts = FxHashMap<Well, u32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rating {
    id: PieceId,
    priority: usize,
    /// Most visits among this piece's outcomes; 0 if none was seen before.
    max_loops: u32,
    /// Best (largest) peak index the player can reach with this piece.
    highest_peak: usize,
}

fn rate(
    engine: &Engine,
    core: &CoreState,
    priority: usize,
    id: PieceId,
    counts: Option<&VisitCounts>,
) -> Rating {
    let outcomes = engine.next_core_states(core, id);
    let max_loops = counts.map_or(0, |counts| {
        outcomes
            .iter()
            .map(|next| counts.get(&next.well).copied().unwrap_or(0))
            .max()
            .unwrap_or(0)
    });
    let highest_peak = outcomes
        .iter()
        .map(|next| next.well.highest_peak())
        .max()
        .unwrap_or(0);
    Rating {
        id,
        priority,
        max_loops,
        highest_peak,
    }
}

/// Rate every piece in priority order. Pieces are independent, so the
/// searches run on the rayon pool; `collect` keeps the order.
fn rate_all(engine: &Engine, core: &CoreState, counts: Option<&VisitCounts>) -> Vec<Rating> {
    let ids: Vec<PieceId> = engine.rotation_system().piece_ids().collect();
    ids.par_iter()
        .enumerate()
        .map(|(priority, &id)| rate(engine, core, priority, id, counts))
        .collect()
}

fn no_pieces() -> EnemyError {
    EnemyError::Failed("rotation system has no pieces".to_string())
}

/// HATETRIS. Prefers pieces that cannot bring the well back to a
/// configuration seen before, then pieces whose best placement leaves
/// the tallest stack, then the earlier piece in priority order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorstPiece;

impl Enemy for WorstPiece {
    type State = VisitCounts;

    fn initial_state(&self) -> VisitCounts {
        VisitCounts::default()
    }

    fn next_piece(
        &self,
        core: &CoreState,
        state: &VisitCounts,
        engine: &Engine,
    ) -> Result<(PieceId, VisitCounts), EnemyError> {
        let mut counts = state.clone();
        *counts.entry(core.well.clone()).or_insert(0) += 1;

        let worst = rate_all(engine, core, Some(&counts))
            .into_iter()
            .min_by_key(|r| (r.max_loops, r.highest_peak, r.priority))
            .ok_or_else(no_pieces)?;
        log::debug!(
            "worst piece {} (loops {}, peak {})",
            worst.id,
            worst.max_loops,
            worst.highest_peak
        );

        Ok((worst.id, counts))
    }
}

/// Worst-piece search without loop memory. A cooperative player can
/// cycle it forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopNaiveWorstPiece;

impl Enemy for LoopNaiveWorstPiece {
    type State = ();

    fn initial_state(&self) {}

    fn next_piece(
        &self,
        core: &CoreState,
        _state: &(),
        engine: &Engine,
    ) -> Result<(PieceId, ()), EnemyError> {
        let worst = rate_all(engine, core, None)
            .into_iter()
            .min_by_key(|r| (r.highest_peak, r.priority))
            .ok_or_else(no_pieces)?;
        Ok((worst.id, ()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hate_core::{RotationSystem, WellConfig};

    #[test]
    fn test_first_piece_on_empty_well_is_s() {
        // S and Z both leave a two-row stack at best; S comes first
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        let (id, counts) = WorstPiece
            .next_piece(&core, &WorstPiece.initial_state(), &engine)
            .expect("piece");
        assert_eq!(id, PieceId::S);
        assert_eq!(counts.get(&core.well), Some(&1));
    }

    #[test]
    fn test_ratings_on_empty_well() {
        let engine = Engine::hatetris();
        let ratings = rate_all(&engine, &engine.empty_core(), None);
        let peaks: Vec<(char, usize)> = ratings.iter().map(|r| (r.id.0, r.highest_peak)).collect();
        assert_eq!(
            peaks,
            vec![
                ('S', 18),
                ('Z', 18),
                ('O', 18),
                ('I', 19),
                ('L', 18),
                ('J', 18),
                ('T', 18),
            ]
        );
    }

    #[test]
    fn test_naive_matches_on_fresh_well() {
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        let (naive, ()) = LoopNaiveWorstPiece
            .next_piece(&core, &(), &engine)
            .expect("piece");
        assert_eq!(naive, PieceId::S);
    }

    #[test]
    fn test_visits_accumulate() {
        let engine = Engine::hatetris();
        let core = engine.empty_core();
        let (_, once) = WorstPiece
            .next_piece(&core, &VisitCounts::default(), &engine)
            .expect("piece");
        let (_, twice) = WorstPiece.next_piece(&core, &once, &engine).expect("piece");
        assert_eq!(twice.get(&core.well), Some(&2));
    }

    #[test]
    fn test_prefers_piece_that_avoids_a_loop() {
        let rs = RotationSystem::from_shapes(&[
            (PieceId::I, ["....", "####", "....", "...."]),
            (PieceId::O, ["##..", "##..", "....", "...."]),
        ])
        .expect("valid");
        let engine = Engine::new(
            rs,
            WellConfig {
                width: 4,
                depth: 8,
                bar: 4,
            },
        )
        .expect("valid");
        let mut core = engine.empty_core();
        core.well.rows_mut()[6] = 0b0011;
        core.well.rows_mut()[7] = 0b0011;

        // a flat I clears row 5 and leaves this exact well again (peak 6);
        // O can clear both rows (peak 8), so I is the nastier piece
        let (naive, ()) = LoopNaiveWorstPiece
            .next_piece(&core, &(), &engine)
            .expect("piece");
        assert_eq!(naive, PieceId::I);

        // crediting the current well makes I a loop, so O wins instead
        let (avoiding, counts) = WorstPiece
            .next_piece(&core, &VisitCounts::default(), &engine)
            .expect("piece");
        assert_eq!(avoiding, PieceId::O);
        assert_eq!(counts.get(&core.well), Some(&1));
    }
}
