use cdcl_core::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

/// A small pigeonhole-style instance: four atoms forced into contradictory chains, enough to
/// force several conflicts (and, with a tight budget, several restarts) before either outcome.
fn chain_of_implications(ctx: &mut Context, atoms: &[cdcl_core::structures::atom::Atom]) {
    for pair in atoms.windows(2) {
        ctx.add_clause(vec![CLiteral::new(pair[0], false), CLiteral::new(pair[1], true)])
            .unwrap();
        ctx.add_clause(vec![CLiteral::new(pair[0], true), CLiteral::new(pair[1], false)])
            .unwrap();
    }
}

#[test]
fn restarts_do_not_change_the_answer() {
    let mut tight = Config::default();
    tight.restart.initial_budget.value = 1;
    tight.restart.budget_factor.value = 1.0;

    let mut ctx = Context::from_config(tight);
    let atoms: Vec<_> = (0..8).map(|_| ctx.fresh_or_max_atom()).collect();
    chain_of_implications(&mut ctx, &atoms);

    assert!(ctx
        .add_clause(vec![CLiteral::new(atoms[0], true)])
        .is_ok());
    assert!(ctx
        .add_clause(vec![CLiteral::new(*atoms.last().unwrap(), false)])
        .is_ok());

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn disabling_restarts_still_solves_correctly() {
    let mut no_restarts = Config::default();
    no_restarts.restart_enabled.value = false;

    let mut ctx = Context::from_config(no_restarts);
    let atoms: Vec<_> = (0..8).map(|_| ctx.fresh_or_max_atom()).collect();
    chain_of_implications(&mut ctx, &atoms);

    assert!(ctx
        .add_clause(vec![CLiteral::new(atoms[0], true)])
        .is_ok());

    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    assert_eq!(ctx.counters.restarts, 0);
}

#[test]
fn counters_track_decisions_and_conflicts() {
    let mut ctx = Context::from_config(Config::default());
    let p = ctx.fresh_or_max_atom();
    let q = ctx.fresh_or_max_atom();

    assert!(ctx
        .add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)])
        .is_ok());
    assert!(ctx
        .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, false)])
        .is_ok());
    assert!(ctx
        .add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, false)])
        .is_ok());
    assert!(ctx
        .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
        .is_ok());

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    assert_eq!(ctx.counters.solves, 1);
    assert!(ctx.counters.conflicts >= 1);
}
