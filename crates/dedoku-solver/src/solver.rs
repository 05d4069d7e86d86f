//! The fixed-point driver and its usage statistics.

use dedoku_core::Board;

use crate::technique::{self, BoxedTechnique, TechniqueId};

/// Per-technique application counts for one or more solves.
///
/// A technique counts once per successful application: a placement, or
/// a pattern instance that removed at least one candidate.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Board, DigitGrid};
/// use dedoku_solver::{Solver, TechniqueId};
///
/// let solver = Solver::with_default_techniques();
/// let mut board = Board::from_grid(DigitGrid::new());
/// let counts = solver.solve(&mut board);
/// assert_eq!(counts.get(TechniqueId::NakedSingle), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechniqueCounts {
    counts: [usize; TechniqueId::COUNT],
}

impl TechniqueCounts {
    /// Creates an all-zero counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count recorded for `id`.
    #[must_use]
    #[inline]
    pub fn get(&self, id: TechniqueId) -> usize {
        self.counts[id.index()]
    }

    /// Adds `n` applications to the count for `id`.
    #[inline]
    pub fn add(&mut self, id: TechniqueId, n: usize) {
        self.counts[id.index()] += n;
    }

    /// Accumulates another counter into this one.
    pub fn merge(&mut self, other: &Self) {
        for id in TechniqueId::ALL {
            self.counts[id.index()] += other.counts[id.index()];
        }
    }

    /// Returns the sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns `true` if any technique was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total() > 0
    }

    /// Returns all `(id, count)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (TechniqueId, usize)> + '_ {
        TechniqueId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// Returns the `(id, count)` pairs with a non-zero count, in
    /// identifier order.
    pub fn used(&self) -> impl Iterator<Item = (TechniqueId, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 0)
    }
}

/// The strict-order, short-circuit, fixed-point driver.
///
/// Techniques run in list order; the first one that makes progress
/// ends the pass, and the next pass restarts from the cheapest
/// technique. The driver stops when a full pass changes nothing. It
/// never verifies the final grid and never aborts on an inconsistent
/// board; callers inspect [`Board::empty_candidate_cells`],
/// `is_valid`, and `is_filled` afterwards.
///
/// # Examples
///
/// ```
/// use dedoku_core::{Board, DigitGrid};
/// use dedoku_solver::Solver;
///
/// let grid: DigitGrid =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()?;
/// let mut board = Board::from_grid(grid);
/// let counts = Solver::with_default_techniques().solve(&mut board);
///
/// assert!(board.grid().is_filled());
/// assert!(board.grid().is_valid());
/// assert!(counts.has_progress());
/// # Ok::<(), dedoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    techniques: Vec<BoxedTechnique>,
}

impl Solver {
    /// Creates a solver running the given techniques in order.
    ///
    /// Combine with [`technique::technique_for`] to enable individual
    /// techniques beyond the default set.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a solver with the default technique list
    /// ([`technique::default_techniques`]).
    #[must_use]
    pub fn with_default_techniques() -> Self {
        Self::new(technique::default_techniques())
    }

    /// Creates a solver with every implemented technique
    /// ([`technique::all_techniques`]).
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs one pass: applies the first technique that makes progress.
    ///
    /// Returns `true` if some technique changed the board, recording
    /// its applications in `counts`.
    pub fn step(&self, board: &mut Board, counts: &mut TechniqueCounts) -> bool {
        for technique in &self.techniques {
            let applications = technique.apply(board);
            if applications > 0 {
                counts.add(technique.id(), applications);
                log::debug!("{}: {applications} application(s)", technique.name());
                return true;
            }
        }
        false
    }

    /// Runs passes until no technique makes progress.
    ///
    /// Termination is guaranteed: every successful application either
    /// places a digit or shrinks a candidate set.
    pub fn solve(&self, board: &mut Board) -> TechniqueCounts {
        let mut counts = TechniqueCounts::new();
        self.solve_with_counts(board, &mut counts);
        counts
    }

    /// Like [`solve`](Self::solve), but accumulates into an existing
    /// counter, so statistics can span several puzzles.
    pub fn solve_with_counts(&self, board: &mut Board, counts: &mut TechniqueCounts) {
        while self.step(board, counts) {}
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_default_techniques()
    }
}
