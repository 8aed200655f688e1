/*!
A library for determining the satisfiability of boolean formulas written in conjunctive normal form.

cdcl_core is a conflict-driven clause-learning SAT core, using a variety of techniques from the
literature on CDCL solving, and with support for incremental solves, interleaved theory
propagation, and extraction of a resolution proof from an unsatisfiable core.

cdcl_core is developed to help researchers, developers, or anyone curious, to investigate
satisfiability solvers, whether as a novice or through implementing novel ideas.

Some guiding principles of cdcl_core are (see [below](#guiding-principles) for further details):
- [Modularity](#modularity).
- Documentation, of both implementation and theory.
- [Simple efficiency](#simple-efficiency).

# Orientation

The library is designed around the core structure of a [context].

Clauses are added [programmatically](crate::context::GenericContext::add_clause).

Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships
between, a handful of databases which instantiate core theoretical objects.
Notably:
- A formula is stored in a [clause database](crate::db::clause).
- A valuation and activity-ordered decision heap are stored in an [atom database](crate::db::atom).
- The sequence of assigned literals is recorded on a [trail](crate::db::trail), which separates
  what BCP has propagated from (optionally) what an attached theory has been shown.

Consequences follow a current valuation and formula, which in turn lead to a revised valuation
and/or formula, from which further consequences follow.

Useful starting points, then, may be:
- The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
- The [database module](crate::db) to inspect the data considered during a solve.
- The [structures] to familiarise yourself with the abstract elements of a solve and their
  representation (formulas, clauses, etc.)
- The [configuration](crate::config) to see what features are supported.
- The [theory] module to attach a decision procedure that interleaves with propagation.
- The [proof] module to extract and check a resolution derivation of the empty clause.

# Examples

+ Find a count of all valuations of some collection of atoms, while printing a representation of each model.

```rust
# use cdcl_core::{
#    config::Config,
#    context::Context,
#    reports::Report,
#    structures::{
#        atom::Atom,
#        literal::{CLiteral, Literal},
#        valuation::Valuation,
#    },
# };
// The context in which a solve takes place.
let mut context: Context = Context::from_config(Config::default());

// Atoms will be represented by characters of some string.
let characters = "model".chars().collect::<Vec<_>>();
let mut atom_count: u32 = 0;

// Each call to fresh_atom expands the context to include a fresh (new) atom.
// Atoms form a contiguous range from 1 to some limit.
for _character in &characters {
    match context.fresh_atom() {
        Ok(_) => atom_count += 1,
        Err(_) => {
            panic!("Atom limit exhausted.")
        }
    }
}
let mut model_count = 0;

while let Ok(Report::Satisfiable) = context.solve() {
    model_count += 1;

    let mut valuation_representation = String::new();

    // To exclude the current valuation, the negation of the current valuation is added as a clause.
    // As valuations are conjunctions and clauses disjunctions, this may be done by negating each literal.
    let mut exclusion_clause = Vec::new();

    // The context provides an iterator over (atom, value) pairs.
    // Though every non-constant atom has a value in this model, this avoids handling the no value option.
    for (atom, value) in context.valuation().atom_valued_pairs() {
        // As atoms begin at 1, a step back is required to find the appropriate character.
        match value {
            true => valuation_representation.push(' '),
            false => valuation_representation.push('-'),
        }
        valuation_representation.push(characters[(atom as usize) - 1]);
        valuation_representation.push(' ');

        exclusion_clause.push(CLiteral::new(atom as Atom, !value));
    }

    valuation_representation.pop();
    println!("{model_count}\t {}", valuation_representation);

    // After a solve, the context is refreshed to clear any decisions made.
    // Learnt clauses remain, though any assumptions made are also removed.
    context.refresh();

    match context.add_clause(exclusion_clause) {
        Ok(_) => {}
        Err(_) => break,
    };
}

assert_eq!(model_count, 2_usize.pow(atom_count));
```

# Guiding principles

## Modularity

  + A solver is built of many interconnected parts, but where possible (and reasonable) interaction between parts happens through documented access points. For example:
    - Clauses are stored in a [clause database](db::clause), and are accessed through [keys](db::ClauseKey).
      An internal distinction is made between unit clauses, binary clauses, and long(er) clauses.
      This distinction is encoded in the clause keys, and supports a variety of methods, but the internal structure of the clause database is private.
    - Things such as [literals](structures::literal) and [clauses](structures::clause) are defined first as traits whose canonical instantiations are used only when there is 'good reason' to do so.
    - The algorithm for determining satisfiability is factored into a collection of [procedures].
    - A theory is attached through the [theory] trait, and never needs to know how BCP, decisions, or backtracking are implemented.
    - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).

## Simple efficiency

The solver is efficient in most operations, and known inefficiencies are often noted.
Still, while compromises are made for the sake of efficiency, overall the library is written using mostly simple Rust, with annotated uses of unsafe, notes on when using a function would be unsound, and fights with the borrow checker explained.
  + The library makes free use of unsafe so long as some reason is given for why safety is maintained.
  + Though, many relevant invariants escape the borrow checker, and for this purpose 'soundness' notes are made where relevant.
  + In addition, there are times when some not-so-simple Rust is required to appease the borrow checker (notably [BCP](crate::procedures::bcp)) and explanations are given of these.

# Logs

To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
As logging is only built on request, and further can be requested by level, logs are verbose.

The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
- Logs of the restart scheduler can be found with `RUST_LOG=restart=info …`

*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::single_match)]
#![allow(mixed_script_confusables)]
#![allow(unused_labels)]
// #![allow(unused_imports)]
// #![warn(missing_docs)]

pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod reports;

pub mod db;

pub mod misc;

pub mod proof;
pub mod theory;
