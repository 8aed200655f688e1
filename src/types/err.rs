/*!
Error types used in the library.

- Most of these are very unlikely to occur during use.
- Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
- Others are external --- e.g. a context may return an `AssumptionConflict` error to highlight a
  request to assume a literal would result in an unsatisfiable formula.
  In this case information about satisfiability is obtained and the solver may (if satisfiable)
  continue to be used for further queries.

Names of the error enums --- for the most part --- overlap with corresponding structs.
*/

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// An error when building a context.
    Build(BuildError),

    /// An error in the clause database.
    ClauseDB(ClauseDBError),

    /// An error in the atom database.
    AtomDB(AtomDBError),

    /// An error during BCP.
    BCP(BCPError),

    /// An error in the resolution buffer used during conflict analysis.
    ResolutionBuffer(ResolutionBufferError),

    /// An error related to the state of the context.
    State(StateError),

    /// An error raised by (or about) an attached theory.
    Theory(TheoryError),

    /// An error while expanding or checking a proof.
    Proof(ProofError),

    /// An error related to backjumping.
    Backjump,

    /// The attempted action could not be completed given the state of the context.
    InvalidState,

    /// The attempted action could not be completed given the valuation of the context.
    ValuationConflict,

    /// The attempted action could not be completed given the valuation of the context, specifically due to the noted literal.
    SpecificValuationConflict(CLiteral),

    /// The assumption conflicts with a proven literal.
    AssumptionConflict(CLiteral),

    /// A fundamental conflict has been observed (and recorded), i.e. the formula is unsatisfiable
    /// independent of any assumption or decision.
    FundamentalConflict,
}

/// An error during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,

    /// Resolution failed to stop at the required criteria (first unique implication point).
    FailedStoppingCriteria,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// An error from the atom database.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
///
/// [BCPError::Conflict] is not a defect: it is the routine signal that hands control to conflict
/// analysis, and is expected on close to every conflicting solve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
///
/// These are general errors which wrap specific errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clear instance of an unsatisfiable clause (e.g. the empty clause, or a clause falsified
    /// at the base level as soon as it is added).
    Unsatisfiable,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Attempt to get a unit clause by a key (the key is the literal).
    GetOriginalUnitKey,

    /// Attempt to transfer a unit clause.
    TransferUnit,

    /// Attempt to transfer a binary clause.
    TransferBinary,

    /// A unit or binary clause was found in a long watch list.
    /// Perhaps an issue during addition or transfer of a clause.
    CorruptList,

    /// A learnt clause is missing.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// An invalid key index.
    InvalidKeyIndex,

    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// All possible keys have been used for some clause type (formula/binary/long etc).
    StorageExhausted,

    /// A unit clause was added after some decision has been made.
    ///
    /// Ideally, this case could be handled and this error removed.
    DecisionMade,

    /// A non-permanent clause of two or more literals was added.
    ///
    /// Once attached, such a clause is registered in two watch lists; safely unregistering those
    /// watches when its scope ends is unimplemented (the same gap documented on
    /// [ClauseDB::mark_dead](crate::db::clause::ClauseDB::mark_dead) and
    /// [ClauseDB::remove_addition](crate::db::clause::ClauseDB::remove_addition)). A non-permanent
    /// unit clause is unaffected: units are asserted directly on the trail and never attached.
    NonPermanentClauseTooLong,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during resolution (conflict analysis).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolutionBufferError {
    /// A clause could not be found.
    LostClause,

    /// Somehow the resolved clause is satisfied on the valuation used for assertion checking.
    /// This is quite serious, unless the wrong valuation has been used.
    SatisfiedClause,

    /// A key failed to unlock a clause.
    MissingClause,

    /// The trail was exhausted without finding a unique implication point.
    Exhausted,
}

impl From<ResolutionBufferError> for ErrorKind {
    fn from(e: ResolutionBufferError) -> Self {
        ErrorKind::ResolutionBuffer(e)
    }
}

/// Errors due to the state of the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// A solve is in progress.
    SolveInProgress,

    /// A solve already reached a conclusive report; `refresh` is required before assuming again.
    SolveConcluded,

    /// A non-permanent clause was added at the base level, where nothing ever backtracks to
    /// retract it; open a local scope (e.g. via `solve_assuming`) first.
    NoOpenScope,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

/// Errors raised by (or about) an attached theory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TheoryError {
    /// A theory reported a conflict that does not correspond to any literal actually on the trail.
    SpuriousExplanation,

    /// A theory's `propagate` call returned a literal already falsified on the trail.
    InconsistentPropagation,
}

impl From<TheoryError> for ErrorKind {
    fn from(e: TheoryError) -> Self {
        ErrorKind::Theory(e)
    }
}

/// Errors while expanding a [Premise](crate::structures::clause::premise::Premise) into a proof
/// step, or while checking a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofError {
    /// A [History](crate::structures::clause::premise::Premise::History) chain could not be
    /// linearised into a sequence of pairwise resolutions with a unique pivot.
    NoPivot,

    /// A key referenced by a premise is not present in the clause database.
    MissingParent(ClauseKey),

    /// A cycle was found while expanding a proof node.
    Cycle,
}

impl From<ProofError> for ErrorKind {
    fn from(e: ProofError) -> Self {
        ErrorKind::Proof(e)
    }
}
