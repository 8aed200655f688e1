use cdcl_core::{
    config::Config,
    context::Context,
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

mod decision_levels {
    use super::*;

    #[test]
    fn propagation_at_the_base_level_stays_there() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());

        assert_eq!(ctx.atom_db.level_of(p), 0);
        assert_eq!(ctx.atom_db.level_of(q), 0);
        assert_eq!(ctx.eval(q), Some(true));
    }

    #[test]
    fn an_assumption_opens_exactly_one_level() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();
        let r = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, false), CLiteral::new(q, true)])
            .is_ok());

        let result = ctx.solve_assuming(vec![CLiteral::new(p, true), CLiteral::new(r, true)]);

        assert_eq!(result, Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.level_of(p), 1);
        assert_eq!(ctx.atom_db.level_of(r), 1);
        assert_eq!(ctx.atom_db.level_of(q), 1);
    }

    #[test]
    fn refresh_undoes_every_level_above_base() {
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
        assert!(!ctx.trail().is_empty());

        ctx.refresh();

        assert!(ctx.trail().is_empty());
        assert_eq!(ctx.eval(p), None);
        assert_eq!(ctx.eval(q), None);
    }

    #[test]
    fn a_unit_clause_added_after_a_decision_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)])
            .is_ok());

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );

        assert!(ctx.add_clause(CLiteral::new(q, true)).is_err());
    }

    #[test]
    fn assuming_again_without_a_refresh_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();

        assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );

        assert!(matches!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Err(ErrorKind::State(_))
        ));

        ctx.refresh();

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );
    }
}
