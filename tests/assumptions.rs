use cdcl_core::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

mod basic_assumptions {
    use super::*;

    #[test]
    fn direct_conflict() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx.add_clause(CLiteral::new(q, false)).is_ok());

        let result = ctx.solve_assuming(vec![CLiteral::new(p, true)]);

        assert!(result.is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn small_chain() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();
        let r = ctx.fresh_or_max_atom();
        let s = ctx.fresh_or_max_atom();
        let t = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(q, false), CLiteral::new(r, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(r, false), CLiteral::new(s, true)])
            .is_ok());
        assert!(ctx
            .add_clause(vec![CLiteral::new(s, false), CLiteral::new(t, true)])
            .is_ok());
        assert!(ctx.add_clause(CLiteral::new(t, false)).is_ok());

        let result = ctx.solve_assuming(vec![CLiteral::new(p, true)]);

        assert!(result.is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn toggling_assumptions_across_calls() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );
        assert_eq!(ctx.eval(q.clone()), Some(true));

        ctx.refresh();

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, false)]),
            Ok(Report::Satisfiable)
        );
        assert_eq!(ctx.eval(p), Some(false));
    }

    #[test]
    fn satisfied_assumption_is_a_no_op() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();

        assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );
    }
}
