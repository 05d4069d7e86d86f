//! Deduction techniques and the technique registry.
//!
//! Each technique is a pure pattern search over a [`Board`]: it either
//! places digits or removes candidates through the board's two mutation
//! paths, and reports how many pattern instances it applied. The driver
//! in [`crate::Solver`] runs techniques in difficulty order and restarts
//! from the cheapest after any progress.

use std::fmt::Debug;

use dedoku_core::Board;

pub use self::{
    basic_elimination::BasicElimination,
    box_line::BoxLineReduction,
    coloring::SingleColoring,
    fish::Fish,
    hidden_set::HiddenSet,
    hidden_single::HiddenSingle,
    naked_set::NakedSet,
    naked_single::NakedSingle,
    pointing_pairs::PointingPairs,
    rectangle::RectangleElimination,
    x_chain::XChain,
    xy_chain::XyChain,
    xyz_wing::XyzWing,
    y_wing::YWing,
};

mod basic_elimination;
mod box_line;
mod coloring;
mod combos;
mod fish;
mod hidden_set;
mod hidden_single;
mod links;
mod naked_set;
mod naked_single;
mod pointing_pairs;
mod rectangle;
mod x_chain;
mod xy_chain;
mod xyz_wing;
mod y_wing;

/// Identifier of a deduction technique.
///
/// The enumeration covers every technique the engine knows by name,
/// including ones with no registered implementation (see
/// [`technique_for`]); usage counters are keyed by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum TechniqueId {
    /// Candidate pruning against already-placed peer digits.
    BasicElimination,
    /// A cell with a single remaining candidate.
    NakedSingle,
    /// A digit with a single remaining cell in a house.
    HiddenSingle,
    /// Two cells in a house sharing the same two candidates.
    NakedPair,
    /// Two digits confined to the same two cells of a house.
    HiddenPair,
    /// Three cells in a house covering exactly three candidates.
    NakedTriple,
    /// Three digits confined to the same three cells of a house.
    HiddenTriple,
    /// Four cells in a house covering exactly four candidates.
    NakedQuad,
    /// Four digits confined to the same four cells of a house.
    HiddenQuad,
    /// Box candidates confined to one line, pruning the line outside.
    PointingPairs,
    /// Line candidates confined to one box, pruning the box outside.
    BoxLineReduction,
    /// A size-2 fish: two lines covering two crossing lines.
    XWing,
    /// Remote pair propagation along a chute (not registered).
    ChuteRemotePairs,
    /// A size-3 fish.
    Swordfish,
    /// A bent triple of bivalue cells around a bivalue pivot.
    YWing,
    /// Hinge-and-wings elimination across four boxes.
    RectangleElimination,
    /// A bent triple around a trivalue pivot.
    XyzWing,
    /// A size-4 fish.
    Jellyfish,
    /// Two-colour cluster analysis (not registered).
    SimpleColoring,
    /// Single-digit alternating cycles (not registered).
    XCycle,
    /// Single-digit placement hypothesis testing.
    SingleColoring,
    /// Alternating strong/weak single-digit chains.
    XChain,
    /// Bivalue-cell chains switching candidates per cell.
    XyChain,
    /// Discontinuous nice loops (not registered).
    DiscontinuousNiceLoop,
    /// Continuous nice loops (not registered).
    ContinuousNiceLoop,
}

/// Display names of all techniques, indexed by [`TechniqueId::index`].
const NAMES: [&str; TechniqueId::COUNT] = [
    "Basic Elimination",
    "Naked Single",
    "Hidden Single",
    "Naked Pair",
    "Hidden Pair",
    "Naked Triple",
    "Hidden Triple",
    "Naked Quad",
    "Hidden Quad",
    "Pointing Pairs",
    "Box-Line Reduction",
    "X-Wing",
    "Chute Remote Pairs",
    "Swordfish",
    "Y-Wing",
    "Rectangle Elimination",
    "XYZ-Wing",
    "Jellyfish",
    "Simple Coloring",
    "X-Cycles",
    "Single Coloring",
    "X-Chain",
    "XY-Chain",
    "Discontinuous Nice Loop",
    "Continuous Nice Loop",
];

impl TechniqueId {
    /// Number of technique identifiers.
    pub const COUNT: usize = 25;

    /// All identifiers in difficulty order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BasicElimination,
        Self::NakedSingle,
        Self::HiddenSingle,
        Self::NakedPair,
        Self::HiddenPair,
        Self::NakedTriple,
        Self::HiddenTriple,
        Self::NakedQuad,
        Self::HiddenQuad,
        Self::PointingPairs,
        Self::BoxLineReduction,
        Self::XWing,
        Self::ChuteRemotePairs,
        Self::Swordfish,
        Self::YWing,
        Self::RectangleElimination,
        Self::XyzWing,
        Self::Jellyfish,
        Self::SimpleColoring,
        Self::XCycle,
        Self::SingleColoring,
        Self::XChain,
        Self::XyChain,
        Self::DiscontinuousNiceLoop,
        Self::ContinuousNiceLoop,
    ];

    /// Returns the position of this identifier in [`Self::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the display name of the technique.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self.index()]
    }
}

/// A deduction technique over the shared board state.
///
/// `apply` searches the whole board for the technique's pattern and
/// performs every elimination or placement it finds, returning the
/// number of successful applications (pattern instances that changed
/// the state). A return of `0` means the board is unchanged.
pub trait Technique: Debug {
    /// Returns the identifier this technique counts under.
    fn id(&self) -> TechniqueId;

    /// Returns the display name of the technique.
    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique to the board, returning the number of
    /// successful applications.
    fn apply(&self, board: &mut Board) -> usize;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns the default technique list in application order.
///
/// This is the cheapest-to-strongest progression the driver runs when
/// no explicit configuration is given. Techniques beyond XYZ-Wing are
/// disabled by default; enable them individually via [`technique_for`]
/// and [`crate::Solver::new`], or wholesale via [`all_techniques`].
#[must_use]
pub fn default_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(BasicElimination::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedSet::pair()),
        Box::new(HiddenSet::pair()),
        Box::new(NakedSet::triple()),
        Box::new(NakedSet::quad()),
        Box::new(PointingPairs::new()),
        Box::new(BoxLineReduction::new()),
        Box::new(Fish::x_wing()),
        Box::new(YWing::new()),
        Box::new(RectangleElimination::new()),
        Box::new(XyzWing::new()),
    ]
}

/// Returns every implemented technique in difficulty order.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(BasicElimination::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedSet::pair()),
        Box::new(HiddenSet::pair()),
        Box::new(NakedSet::triple()),
        Box::new(HiddenSet::triple()),
        Box::new(NakedSet::quad()),
        Box::new(HiddenSet::quad()),
        Box::new(PointingPairs::new()),
        Box::new(BoxLineReduction::new()),
        Box::new(Fish::x_wing()),
        Box::new(Fish::swordfish()),
        Box::new(YWing::new()),
        Box::new(RectangleElimination::new()),
        Box::new(XyzWing::new()),
        Box::new(Fish::jellyfish()),
        Box::new(XChain::new()),
        Box::new(XyChain::new()),
        Box::new(SingleColoring::new()),
    ]
}

/// Returns the technique registered under `id`, if any.
///
/// Identifiers with no implementation (experimental or stubbed
/// techniques) return `None`.
#[must_use]
pub fn technique_for(id: TechniqueId) -> Option<BoxedTechnique> {
    let technique: BoxedTechnique = match id {
        TechniqueId::BasicElimination => Box::new(BasicElimination::new()),
        TechniqueId::NakedSingle => Box::new(NakedSingle::new()),
        TechniqueId::HiddenSingle => Box::new(HiddenSingle::new()),
        TechniqueId::NakedPair => Box::new(NakedSet::pair()),
        TechniqueId::HiddenPair => Box::new(HiddenSet::pair()),
        TechniqueId::NakedTriple => Box::new(NakedSet::triple()),
        TechniqueId::HiddenTriple => Box::new(HiddenSet::triple()),
        TechniqueId::NakedQuad => Box::new(NakedSet::quad()),
        TechniqueId::HiddenQuad => Box::new(HiddenSet::quad()),
        TechniqueId::PointingPairs => Box::new(PointingPairs::new()),
        TechniqueId::BoxLineReduction => Box::new(BoxLineReduction::new()),
        TechniqueId::XWing => Box::new(Fish::x_wing()),
        TechniqueId::Swordfish => Box::new(Fish::swordfish()),
        TechniqueId::YWing => Box::new(YWing::new()),
        TechniqueId::RectangleElimination => Box::new(RectangleElimination::new()),
        TechniqueId::XyzWing => Box::new(XyzWing::new()),
        TechniqueId::Jellyfish => Box::new(Fish::jellyfish()),
        TechniqueId::SingleColoring => Box::new(SingleColoring::new()),
        TechniqueId::XChain => Box::new(XChain::new()),
        TechniqueId::XyChain => Box::new(XyChain::new()),
        TechniqueId::ChuteRemotePairs
        | TechniqueId::SimpleColoring
        | TechniqueId::XCycle
        | TechniqueId::DiscontinuousNiceLoop
        | TechniqueId::ContinuousNiceLoop => return None,
    };
    Some(technique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_index_matches_all_order() {
        for (i, id) in TechniqueId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        for (i, a) in NAMES.iter().enumerate() {
            for b in &NAMES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_order_starts_cheap() {
        let techniques = default_techniques();
        assert_eq!(techniques[0].id(), TechniqueId::BasicElimination);
        assert_eq!(techniques[1].id(), TechniqueId::NakedSingle);
        assert_eq!(techniques[2].id(), TechniqueId::HiddenSingle);
        assert_eq!(
            techniques.last().map(|technique| technique.id()),
            Some(TechniqueId::XyzWing)
        );
        assert_eq!(techniques.len(), 13);
    }

    #[test]
    fn test_all_techniques_superset_of_default() {
        let default_ids: Vec<_> = default_techniques()
            .iter()
            .map(|technique| technique.id())
            .collect();
        let all_ids: Vec<_> = all_techniques()
            .iter()
            .map(|technique| technique.id())
            .collect();
        for id in default_ids {
            assert!(all_ids.contains(&id), "{id:?} missing from all_techniques");
        }
    }

    #[test]
    fn test_registry_covers_implemented_ids() {
        for technique in all_techniques() {
            let registered = technique_for(technique.id());
            assert!(registered.is_some());
        }
        assert!(technique_for(TechniqueId::ChuteRemotePairs).is_none());
        assert!(technique_for(TechniqueId::SimpleColoring).is_none());
        assert!(technique_for(TechniqueId::XCycle).is_none());
    }

    #[test]
    fn test_technique_names() {
        assert_eq!(TechniqueId::BasicElimination.name(), "Basic Elimination");
        assert_eq!(TechniqueId::BoxLineReduction.name(), "Box-Line Reduction");
        assert_eq!(TechniqueId::XyzWing.name(), "XYZ-Wing");
        assert_eq!(
            TechniqueId::ContinuousNiceLoop.name(),
            "Continuous Nice Loop"
        );
    }
}
