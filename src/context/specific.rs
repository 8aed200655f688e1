use rand::SeedableRng;

use crate::{config::Config, generic::minimal_pcg::MinimalPCG32};

use super::GenericContext;

/// A context using [MinimalPCG32] as its source of randomness, the ordinary entry point to the
/// library.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from a given configuration, seeded with a fixed default seed.
    ///
    /// Kept on `Context` rather than `GenericContext` so a caller supplying only a [Config] never
    /// has to also name a source of randomness. `GenericContext::new` alone would leave the rng at
    /// `MinimalPCG32::default()`, a degenerate all-zero generator rather than a proper seed.
    pub fn from_config(config: Config) -> Self {
        let mut context = Self::new(config);
        context.counters.rng = MinimalPCG32::from_seed(0_u64.to_le_bytes());
        context
    }
}
