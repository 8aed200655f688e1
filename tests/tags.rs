use cdcl_core::{
    config::Config,
    context::Context,
    db::ClauseKey,
    reports::Report,
    structures::literal::{CLiteral, Literal},
    types::err::{ClauseDBError, ErrorKind, StateError},
};

mod tags_and_permanence {
    use super::*;

    #[test]
    fn a_permanent_clause_round_trips_its_tag() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let literal = CLiteral::new(p, true);

        assert!(ctx.assume(literal, true, Some(7)).is_ok());

        let key = ClauseKey::OriginalUnit(literal);
        assert_eq!(ctx.clause_db.get(key).unwrap().tag(), Some(7));
        assert!(ctx.clause_db.get(key).unwrap().is_permanent());
    }

    #[test]
    fn a_non_permanent_clause_is_undone_by_refresh() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );

        let literal = CLiteral::new(q, true);
        assert!(ctx.assume(literal, false, Some(3)).is_ok());

        let key = ClauseKey::AdditionUnit(literal);
        assert_eq!(ctx.clause_db.get(key).unwrap().tag(), Some(3));
        assert!(!ctx.clause_db.get(key).unwrap().is_permanent());
        assert_eq!(ctx.eval(q), Some(true));

        ctx.refresh();

        assert_eq!(ctx.eval(q), None);
    }

    #[test]
    fn a_non_permanent_clause_of_two_literals_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert_eq!(
            ctx.solve_assuming(vec![CLiteral::new(p, true)]),
            Ok(Report::Satisfiable)
        );

        let clause = vec![CLiteral::new(p, false), CLiteral::new(q, true)];
        assert_eq!(
            ctx.assume(clause, false, None),
            Err(ErrorKind::ClauseDB(ClauseDBError::NonPermanentClauseTooLong))
        );
    }

    #[test]
    fn a_non_permanent_clause_at_the_base_level_is_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();

        assert_eq!(
            ctx.assume(CLiteral::new(p, true), false, None),
            Err(ErrorKind::State(StateError::NoOpenScope))
        );
    }
}
