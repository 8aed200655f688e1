use cdcl_core::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();

        assert!(ctx.add_clause(CLiteral::new(p, true)).is_ok());
        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Satisfiable);
    }

    #[test]
    fn conflict() {
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

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![CLiteral::new(p, true), CLiteral::new(q, true)])
            .is_ok());
        assert!(ctx.add_clause(CLiteral::new(p, false)).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.eval(p), Some(false));
        assert_eq!(ctx.eval(q), Some(true));
    }

    #[test]
    fn duplicates_and_tautologies_are_not_stored() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_atom();
        let q = ctx.fresh_or_max_atom();

        assert!(ctx
            .add_clause(vec![
                CLiteral::new(p, true),
                CLiteral::new(p, true),
                CLiteral::new(q, true),
                CLiteral::new(q, true),
            ])
            .is_ok());
        assert!(ctx
            .add_clause(vec![
                CLiteral::new(p, true),
                CLiteral::new(q, false),
                CLiteral::new(p, false),
            ])
            .is_ok());

        assert!(ctx.solve().is_ok());
        assert!(ctx.check_model().is_ok());
    }

    #[test]
    fn empty_clause_is_immediately_unsatisfiable() {
        let mut ctx = Context::from_config(Config::default());
        let empty: Vec<CLiteral> = Vec::new();

        assert!(ctx.add_clause(empty).is_err());
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn model_count_via_blocking_clauses() {
        let mut ctx = Context::from_config(Config::default());
        let characters: Vec<Atom> = (0..3).map(|_| ctx.fresh_or_max_atom()).collect();

        let mut model_count = 0;
        while let Ok(Report::Satisfiable) = ctx.solve() {
            model_count += 1;

            let mut blocking_clause = Vec::new();
            for (atom, value) in ctx.valuation().atom_valued_pairs() {
                blocking_clause.push(CLiteral::new(atom, !value));
            }

            ctx.refresh();
            if ctx.add_clause(blocking_clause).is_err() {
                break;
            }
        }

        assert_eq!(model_count, 2_usize.pow(characters.len() as u32));
    }
}
