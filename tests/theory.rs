use cdcl_core::{
    config::Config,
    context::Context,
    db::LevelIndex,
    reports::Report,
    structures::{
        atom::Atom,
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    theory::{Theory, TheoryResult},
};

/// A theory rejecting any assignment making more than one of a fixed set of atoms true,
/// independent of whatever boolean clauses the core already knows about.
struct AtMostOneTrue {
    watched: Vec<Atom>,
    true_count: usize,
    local_true_count: Option<usize>,
}

impl AtMostOneTrue {
    fn new(watched: Vec<Atom>) -> Self {
        Self {
            watched,
            true_count: 0,
            local_true_count: None,
        }
    }
}

impl Theory for AtMostOneTrue {
    fn push_local(&mut self) {
        self.local_true_count = Some(self.true_count);
    }

    fn push_persistent(&mut self) {
        self.local_true_count = None;
    }

    fn propagate(&mut self, trail: &[CLiteral]) -> TheoryResult {
        let mut newly_true = Vec::new();
        for literal in trail {
            if literal.polarity() && self.watched.contains(&literal.atom()) {
                newly_true.push(*literal);
            }
        }

        if newly_true.is_empty() {
            return TheoryResult::Consistent;
        }

        if self.true_count + newly_true.len() > 1 {
            let mut conflict: CClause = self
                .watched
                .iter()
                .map(|atom| CLiteral::new(*atom, false))
                .collect();
            conflict.retain(|literal| {
                newly_true.contains(&CLiteral::new(literal.atom(), true))
                    || self.true_count > 0 && self.watched.contains(&literal.atom())
            });
            return TheoryResult::Conflict(conflict);
        }

        self.true_count += newly_true.len();
        TheoryResult::Consistent
    }

    fn on_backtrack(&mut self, level: LevelIndex) {
        if level == 0 {
            if let Some(persisted) = self.local_true_count {
                self.true_count = persisted;
            }
        }
    }

    fn at_level_0(&self) -> bool {
        true
    }

    fn if_sat(&mut self, _trail: &[CLiteral]) -> bool {
        true
    }

    fn add_formula(&mut self, _clause: &CClause) {}
}

#[test]
fn a_theory_conflict_blocks_an_otherwise_satisfiable_formula() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_atom();
    let q = ctx.fresh_or_max_atom();

    ctx.attach_theory(Box::new(AtMostOneTrue::new(vec![p, q])));

    assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());
    assert!(ctx.add_clause(CLiteral::new(q, true)).is_ok());

    let result = ctx.solve();

    assert!(result.is_ok());
    assert_eq!(ctx.report(), Report::Unsatisfiable);
}

#[test]
fn a_theory_consistent_with_the_formula_is_satisfiable() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_atom();
    let q = ctx.fresh_or_max_atom();

    ctx.attach_theory(Box::new(AtMostOneTrue::new(vec![p, q])));

    assert!(ctx
        .add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)])
        .is_ok());
    assert!(ctx.add_clause(CLiteral::new(q, false)).is_ok());

    let result = ctx.solve();

    assert_eq!(result, Ok(Report::Satisfiable));
    assert_eq!(ctx.eval(p), Some(true));
    assert_eq!(ctx.eval(q), Some(false));
}
