/*!
Configuration of a context.

A [Config] is a bag of [ConfigOption]s, each recording a name, bounds, the state of the context
up to which the option may still be changed, and a current value. Defaults match the constants
named for the restart scheduler and activity decay in the search procedures.
*/

pub mod config_option;
pub use config_option::ConfigOption;

pub mod lbd;
pub use lbd::LBD;

pub mod vsids;
pub use vsids::VSIDS;

pub mod dbs;
pub use dbs::{AtomDBConfig, ClauseDBConfig};

use crate::context::ContextState;

/// The lean applied to a random polarity choice, as a probability in `[0.0, 1.0]`.
pub type PolarityLean = f64;

/// Parameters of the restart scheduler (see [solve](crate::procedures::solve)).
#[derive(Clone)]
pub struct RestartConfig {
    /// The initial number of conflicts permitted before a restart is raised.
    pub initial_budget: ConfigOption<u32>,

    /// The factor by which the conflict budget is multiplied after each restart.
    pub budget_factor: ConfigOption<f64>,

    /// The factor by which the learnt-clause size cap is multiplied after each restart.
    ///
    /// `reduce_db` is never invoked, so this has no observable effect; it is kept because the
    /// cap itself is threaded through the scheduler for when reduction is implemented.
    pub learnt_size_increase: ConfigOption<f64>,

    /// The fraction of the initial clause count used as the starting learnt-clause size cap.
    pub learnt_size_factor: ConfigOption<f64>,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            initial_budget: ConfigOption {
                name: "restart_initial_budget",
                min: 1,
                max: u32::MAX,
                max_state: ContextState::Configuration,
                value: 100,
            },
            budget_factor: ConfigOption {
                name: "restart_budget_factor",
                min: 1.0,
                max: f64::MAX,
                max_state: ContextState::Configuration,
                value: 1.5,
            },
            learnt_size_increase: ConfigOption {
                name: "restart_learnt_size_increase",
                min: 1.0,
                max: f64::MAX,
                max_state: ContextState::Configuration,
                value: 1.1,
            },
            learnt_size_factor: ConfigOption {
                name: "restart_learnt_size_factor",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 1.0 / 3.0,
            },
        }
    }
}

/// The configuration of a context.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the atom database's activity heap.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database's activity heap and (unused) reduction bound.
    pub clause_db: ClauseDBConfig,

    /// Configuration of the restart scheduler.
    pub restart: RestartConfig,

    /// The variant of VSIDS used when bumping activity during conflict analysis.
    pub vsids_variant: ConfigOption<VSIDS>,

    /// The lean applied to a randomly-chosen polarity, as opposed to the saved phase.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability with which a decision ignores the activity heap and picks at random.
    pub random_decision_bias: ConfigOption<PolarityLean>,

    /// Whether a decision defaults to an atom's last assigned polarity.
    pub phase_saving: ConfigOption<bool>,

    /// Whether restarts are scheduled at all.
    pub restart_enabled: ConfigOption<bool>,

    /// Whether multiple `solve` calls accumulate their assumptions (stacked) or each call starts
    /// from a clean assumption set.
    pub stacked_assumptions: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),
            restart: RestartConfig::default(),
            vsids_variant: ConfigOption {
                name: "vsids_variant",
                min: VSIDS::Chaff,
                max: VSIDS::MiniSAT,
                max_state: ContextState::Configuration,
                value: VSIDS::MiniSAT,
            },
            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },
            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Configuration,
                value: 0.0,
            },
            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },
            restart_enabled: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: true,
            },
            stacked_assumptions: ConfigOption {
                name: "stacked_assumptions",
                min: false,
                max: true,
                max_state: ContextState::Configuration,
                value: false,
            },
        }
    }
}
