/*!
Running totals kept alongside a context, together with its source of randomness.
*/

/// Counters and the source of randomness used for decisions.
///
/// Parameterised over the randomness source so [GenericContext](super::GenericContext) can be
/// generic over it too; [Context](super::Context) fixes it to
/// [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32).
pub struct Counters<R> {
    /// Total decisions made across every `solve` call on this context.
    pub decisions: usize,

    /// Total conflicts analyzed.
    pub conflicts: usize,

    /// Total restarts raised.
    pub restarts: usize,

    /// Total `solve`/`solve_assuming` calls made.
    pub solves: usize,

    /// The context's source of randomness, used for decision polarity.
    pub rng: R,
}

impl<R: Default> Default for Counters<R> {
    fn default() -> Self {
        Self {
            decisions: 0,
            conflicts: 0,
            restarts: 0,
            solves: 0,
            rng: R::default(),
        }
    }
}
