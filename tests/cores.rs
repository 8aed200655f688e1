use cdcl_core::{
    config::Config,
    context::Context,
    db::ClauseKey,
    reports::Report,
    structures::{clause::Premise, literal::CLiteral, literal::Literal},
};

mod unsat_cores {
    use super::*;

    fn core_contains_assumption(ctx: &Context, core: &[ClauseKey], literal: CLiteral) -> bool {
        core.iter().any(|key| {
            let Ok(db_clause) = ctx.clause_db.get(*key) else {
                return false;
            };
            matches!(db_clause.premise(), Premise::LocalAssumption)
                && db_clause.clause().first() == Some(&literal)
        })
    }

    #[test]
    fn direct_failure() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx.add_clause(CLiteral::new(q, false)).is_ok());

        let p_true = CLiteral::new(p, true);
        let result = ctx.solve_assuming(vec![p_true]);

        assert!(result.is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));

        let core = ctx.unsat_core().expect("a falsified clause was identified");
        assert!(core_contains_assumption(&ctx, &core, p_true));
    }

    #[test]
    fn multiple_failures_only_relevant_assumptions_survive() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();
        let r = ctx.fresh_or_max_atom();
        let s = ctx.fresh_or_max_atom();
        let t = ctx.fresh_or_max_atom();
        let u = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(r, false), CLiteral::new(s, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(s, false), CLiteral::new(t, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(q, false), CLiteral::new(t, false)])
            .is_ok());

        let p_true = CLiteral::new(p, true);
        let r_true = CLiteral::new(r, true);
        let u_true = CLiteral::new(u, true);

        let result = ctx.solve_assuming(vec![p_true, r_true, u_true]);

        assert!(result.is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable));

        let core = ctx.unsat_core().expect("a falsified clause was identified");
        assert!(core_contains_assumption(&ctx, &core, p_true));
        assert!(core_contains_assumption(&ctx, &core, r_true));
        assert!(!core_contains_assumption(&ctx, &core, u_true));
    }

    #[test]
    fn structural_contradiction_has_an_empty_core() {
        let mut ctx = Context::from_config(Config::default());
        let empty: Vec<CLiteral> = Vec::new();

        assert!(ctx.add_clause(empty).is_err());
        assert_eq!(ctx.unsat_core(), Ok(Vec::new()));
    }
}
