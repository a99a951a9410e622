//! Depth-limited alpha-beta search and root move selection

use log::{debug, trace};
use serde::Serialize;

use super::{
    config::{RootWindow, SearchConfig},
    deadline::Deadline,
    evaluate::evaluate,
    ordering::{SortDirection, order_successors},
};
use crate::{
    Error, Result,
    adapters::StandardRules,
    ports::MoveGenerator,
    tictactoe::{BoardState, GameStatus, Player},
};

/// Value of a finished game won by the maximizer
pub const WIN_SCORE: i32 = i32::MAX;
/// Value of a finished game won by the minimizer
pub const LOSS_SCORE: i32 = i32::MIN;
/// Value of any other finished game
pub const DRAW_SCORE: i32 = 0;

/// Which side a node is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Max,
    Min,
}

impl Role {
    pub fn opposite(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    /// Order successors so the most promising move for this role comes first
    pub fn sort_direction(self) -> SortDirection {
        match self {
            Role::Max => SortDirection::Descending,
            Role::Min => SortDirection::Ascending,
        }
    }
}

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Calls to [`Searcher::search`]
    pub nodes: u64,
    /// Heuristic evaluations, for leaves and for move ordering
    pub evaluations: u64,
    /// Nodes with no successors, scored by a sentinel
    pub terminal_leaves: u64,
    /// Nodes past the depth bound, scored by the heuristic
    pub depth_leaves: u64,
    /// Sibling loops cut short by the alpha-beta window
    pub cutoffs: u64,
}

impl SearchStats {
    fn absorb(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.evaluations += other.evaluations;
        self.terminal_leaves += other.terminal_leaves;
        self.depth_leaves += other.depth_leaves;
        self.cutoffs += other.cutoffs;
    }
}

/// A root successor and the value the search assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootCandidate<const N: usize> {
    pub position: BoardState<N>,
    pub value: i32,
}

/// Result of [`Engine::choose_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<const N: usize> {
    /// The position to move to
    pub position: BoardState<N>,
    /// Value of the chosen successor, `None` when the root had to pass
    pub value: Option<i32>,
    /// The root had no successors and the pass position was returned
    pub passed: bool,
    /// Root successors searched, in generation order. The list stops at the
    /// first successor valued [`WIN_SCORE`].
    pub candidates: Vec<RootCandidate<N>>,
    pub stats: SearchStats,
}

/// Recursive alpha-beta searcher for one maximizing player.
///
/// Holds nothing but the fixed search parameters and its counters; every
/// call owns its own window.
pub struct Searcher<G, const N: usize> {
    generator: G,
    maximizer: Player,
    max_depth: usize,
    stats: SearchStats,
}

impl<G: MoveGenerator<N>, const N: usize> Searcher<G, N> {
    pub fn new(generator: G, maximizer: Player, max_depth: usize) -> Self {
        Self {
            generator,
            maximizer,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of `position` for the maximizer, searched within `(alpha, beta)`.
    ///
    /// Nodes deeper than the depth bound get the raw heuristic. Nodes with no
    /// successors get [`WIN_SCORE`], [`LOSS_SCORE`] or [`DRAW_SCORE`]. When
    /// the window contains the depth-limited minimax value the result is
    /// exactly that value; the widest window (`LOSS_SCORE`, `WIN_SCORE`)
    /// always does.
    pub fn search(
        &mut self,
        position: &BoardState<N>,
        mut alpha: i32,
        mut beta: i32,
        role: Role,
        depth: usize,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth > self.max_depth {
            self.stats.depth_leaves += 1;
            self.stats.evaluations += 1;
            return evaluate(position, self.maximizer);
        }

        let successors = self.generator.successors(position);
        if successors.is_empty() {
            self.stats.terminal_leaves += 1;
            return self.terminal_value(position);
        }

        self.stats.evaluations += successors.len() as u64;
        let ordered = order_successors(successors, self.maximizer, role.sort_direction());
        let child_role = role.opposite();

        match role {
            Role::Max => {
                let mut value = LOSS_SCORE;
                for candidate in &ordered {
                    value = value.max(self.search(
                        &candidate.position,
                        alpha,
                        beta,
                        child_role,
                        depth + 1,
                    ));
                    alpha = alpha.max(value);
                    if value >= beta {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
            Role::Min => {
                let mut value = WIN_SCORE;
                for candidate in &ordered {
                    value = value.min(self.search(
                        &candidate.position,
                        alpha,
                        beta,
                        child_role,
                        depth + 1,
                    ));
                    beta = beta.min(value);
                    if value <= alpha {
                        self.stats.cutoffs += 1;
                        break;
                    }
                }
                value
            }
        }
    }

    fn terminal_value(&self, position: &BoardState<N>) -> i32 {
        match position.status() {
            GameStatus::Won(player) if player == self.maximizer => WIN_SCORE,
            GameStatus::Won(_) => LOSS_SCORE,
            GameStatus::Draw | GameStatus::InProgress => DRAW_SCORE,
        }
    }
}

/// Move-selection engine: validates the root, then searches each root
/// successor on the minimizer's turn.
///
/// # Examples
///
/// ```
/// use noughts::{
///     search::{Deadline, Engine, SearchConfig},
///     tictactoe::Board3,
/// };
///
/// let engine = Engine::new(SearchConfig::new().with_max_depth(2));
/// // X to move completes the top row.
/// let board = Board3::from_string("XX.OO....").unwrap();
/// let outcome = engine.choose_move(&board, Deadline::none()).unwrap();
/// assert_eq!(outcome.position.encode(), "XXXOO...._O");
/// ```
#[derive(Debug, Clone)]
pub struct Engine<G = StandardRules> {
    config: SearchConfig,
    generator: G,
}

impl Engine<StandardRules> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_generator(config, StandardRules)
    }
}

impl Default for Engine<StandardRules> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<G> Engine<G> {
    /// Create an engine driven by a custom move generator.
    pub fn with_generator(config: SearchConfig, generator: G) -> Self {
        Self { config, generator }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Choose the successor of `position` that is best for the player to
    /// move.
    ///
    /// Every root successor is searched with [`Role::Min`] at depth 0. The
    /// first successor is kept unless a later one scores strictly higher, and
    /// the loop stops at the first forced win since nothing can beat it.
    /// When the generator offers no successors the pass position is
    /// returned. `deadline` is logged but never cuts the search short.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPosition`] if `position` could not arise in play.
    /// - [`Error::IllegalSuccessor`] if root successor checks are enabled
    ///   and the generator returns a position that is not one ply ahead.
    pub fn choose_move<const N: usize>(
        &self,
        position: &BoardState<N>,
        deadline: Deadline,
    ) -> Result<SearchOutcome<N>>
    where
        G: MoveGenerator<N>,
    {
        position.validate()?;

        let successors = self.generator.successors(position);
        if self.config.check_root_successors
            && let Some(bad) = successors.iter().find(|next| !position.is_one_ply_successor(next))
        {
            return Err(Error::IllegalSuccessor {
                position: position.encode(),
                successor: bad.encode(),
            });
        }

        if successors.is_empty() {
            debug!("no successors for {}; passing", position.encode());
            return Ok(SearchOutcome {
                position: self.generator.pass(position),
                value: None,
                passed: true,
                candidates: Vec::new(),
                stats: SearchStats::default(),
            });
        }

        let maximizer = position.to_move;
        let mut stats = SearchStats::default();
        let mut candidates = Vec::with_capacity(successors.len());
        let mut best_index = 0;
        let mut best_value = LOSS_SCORE;

        for (index, next) in successors.iter().enumerate() {
            let alpha = match self.config.root_window {
                RootWindow::Full => LOSS_SCORE,
                RootWindow::Seeded => best_value,
            };
            let mut searcher = Searcher::new(&self.generator, maximizer, self.config.max_depth);
            let value = searcher.search(next, alpha, WIN_SCORE, Role::Min, 0);
            stats.absorb(&searcher.stats());

            trace!("root candidate {} = {value}", next.encode());
            candidates.push(RootCandidate {
                position: *next,
                value,
            });

            if index == 0 || value > best_value {
                best_index = index;
                best_value = value;
            }
            if best_value == WIN_SCORE {
                break;
            }
        }

        debug!(
            "chose {} for {} (value {best_value}, depth {}, {} nodes, {} cutoffs, deadline remaining {:?})",
            successors[best_index].encode(),
            maximizer,
            self.config.max_depth,
            stats.nodes,
            stats.cutoffs,
            deadline.remaining(),
        );

        Ok(SearchOutcome {
            position: successors[best_index],
            value: Some(best_value),
            passed: false,
            candidates,
            stats,
        })
    }
}
