/*!
Configuration specific to the atom and clause databases.
*/

use super::{config_option::ConfigOption, lbd::LBD};
use crate::context::ContextState;

/// Activity bump/decay parameters local to the atom database.
#[derive(Clone)]
pub struct AtomDBConfig {
    /// The amount by which an atom's activity is increased when bumped.
    pub bump: ConfigOption<f64>,

    /// The multiplicative decay applied to `bump` after every conflict.
    ///
    /// Chosen so repeated division by `decay` implements the standard additive-bump,
    /// exponential-decay VSIDS scheme without rescaling `bump` itself.
    pub decay: ConfigOption<f64>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        Self {
            bump: ConfigOption {
                name: "atom_bump",
                min: 0.0,
                max: f64::MAX,
                max_state: ContextState::Configuration,
                value: 1.0,
            },
            decay: ConfigOption {
                name: "atom_decay",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 1.0 / 0.95,
            },
        }
    }
}

/// Activity bump/decay parameters local to the clause database, together with the (unused,
/// documented) LBD bound consulted by `reduce_db`.
#[derive(Clone)]
pub struct ClauseDBConfig {
    /// The amount by which a clause's activity is increased when bumped.
    pub bump: ConfigOption<f64>,

    /// The multiplicative decay applied to `bump` after every conflict.
    pub decay: ConfigOption<f64>,

    /// The LBD at or below which a learnt clause would be considered 'glue' and exempt from
    /// reduction, were `reduce_db` ever invoked from the search loop.
    pub lbd_bound: ConfigOption<LBD>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        Self {
            bump: ConfigOption {
                name: "clause_bump",
                min: 0.0,
                max: f64::MAX,
                max_state: ContextState::Configuration,
                value: 1.0,
            },
            decay: ConfigOption {
                name: "clause_decay",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 1.0 / 0.999,
            },
            lbd_bound: ConfigOption {
                name: "clause_lbd_bound",
                min: 0,
                max: LBD::MAX,
                max_state: ContextState::Configuration,
                value: 2,
            },
        }
    }
}
