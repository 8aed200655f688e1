/*!
Expanding a stored clause's [Premise] into a single derivation step, and walking the resulting
graph to extract an unsat core or check a proof's validity.

The DAG is never built and kept as its own structure: nodes are reconstructed from [ClauseDB] on
demand, keyed by [ClauseKey], so a proof costs nothing during search and only as much as is
actually inspected afterwards.
*/

use std::collections::HashSet;

use crate::{
    db::{clause::ClauseDB, ClauseKey},
    structures::{
        atom::Atom,
        clause::{CClause, Clause, LemmaTag, Premise},
        literal::Literal,
    },
    types::err::ProofError,
};

/// A single derivation step, the normal form of a [Premise].
pub enum Step {
    /// A formula clause, given directly to the solver.
    Hypothesis,

    /// A unit clause local to one `solve` call, recording one of its assumptions.
    Assumption,

    /// A clause asserted by a theory.
    Lemma(LemmaTag),

    /// Identical to `parent` up to removed duplicate literals.
    Duplicate(ClauseKey),

    /// A chain of pairwise resolutions: `parents[0]` resolved against `parents[1]` on
    /// `pivots[0]`, the result resolved against `parents[2]` on `pivots[1]`, and so on.
    Resolution {
        parents: Vec<ClauseKey>,
        pivots: Vec<Atom>,
    },
}

/// A clause's key paired with its normalized derivation step.
pub struct ProofNode {
    pub key: ClauseKey,
    pub step: Step,
}

/// Normalizes the premise of `key` into a single [ProofNode].
///
/// For a [History](Premise::History) chain, re-derives the pivot atom resolved away at each step
/// by finding the unique atom present with opposite polarity in the running resolvent and the
/// next parent; a step with no such atom, or more than one, fails as [ProofError::NoPivot].
pub fn expand(key: ClauseKey, clause_db: &ClauseDB) -> Result<ProofNode, ProofError> {
    let db_clause = clause_db
        .get(key)
        .map_err(|_| ProofError::MissingParent(key))?;

    let step = match db_clause.premise() {
        Premise::Hypothesis => Step::Hypothesis,
        Premise::LocalAssumption => Step::Assumption,
        Premise::TheoryLemma(tag) => Step::Lemma(*tag),
        Premise::Simplified(parent) => Step::Duplicate(*parent),
        Premise::History(chain) => {
            let [first, rest @ ..] = chain.as_slice() else {
                return Err(ProofError::NoPivot);
            };

            let mut running = clause_db
                .get(*first)
                .map_err(|_| ProofError::MissingParent(*first))?
                .clause()
                .clone();
            let mut pivots = Vec::with_capacity(rest.len());

            for &next_key in rest {
                let next_clause = clause_db
                    .get(next_key)
                    .map_err(|_| ProofError::MissingParent(next_key))?
                    .clause();

                let pivot = find_pivot(&running, next_clause).ok_or(ProofError::NoPivot)?;
                running = resolve_on(&running, next_clause, pivot);
                pivots.push(pivot);
            }

            Step::Resolution {
                parents: chain.clone(),
                pivots,
            }
        }
    };

    Ok(ProofNode { key, step })
}

/// The unique atom occurring with opposite polarity in `left` and `right`, or `None` if no such
/// atom exists or more than one does.
fn find_pivot(left: &CClause, right: &CClause) -> Option<Atom> {
    let mut pivot = None;
    for l in left.literals() {
        for r in right.literals() {
            if l.atom() == r.atom() && l.polarity() != r.polarity() {
                match pivot {
                    Some(existing) if existing != l.atom() => return None,
                    _ => pivot = Some(l.atom()),
                }
            }
        }
    }
    pivot
}

/// The resolvent of `left` and `right` on `pivot`: every literal of either side except the two
/// occurrences of `pivot`, deduplicated.
fn resolve_on(left: &CClause, right: &CClause, pivot: Atom) -> CClause {
    let mut result: CClause = left.iter().copied().filter(|l| l.atom() != pivot).collect();
    for literal in right.iter().copied() {
        if literal.atom() != pivot && !result.contains(&literal) {
            result.push(literal);
        }
    }
    result
}

/// Reverse-BFS from `root`, collecting every leaf (hypothesis, local assumption, or theory lemma)
/// reachable by walking `Duplicate`/`Resolution` parents, each visited once.
pub fn unsat_core(root: ClauseKey, clause_db: &ClauseDB) -> Result<Vec<ClauseKey>, ProofError> {
    let mut visited = HashSet::new();
    let mut stack = vec![root];
    let mut leaves = Vec::new();

    while let Some(key) = stack.pop() {
        if !visited.insert(key) {
            continue;
        }

        match expand(key, clause_db)?.step {
            Step::Hypothesis | Step::Assumption | Step::Lemma(_) => leaves.push(key),
            Step::Duplicate(parent) => stack.push(parent),
            Step::Resolution { parents, .. } => stack.extend(parents),
        }
    }

    Ok(leaves)
}

/// Walks the full derivation of `root`, checking every resolution step resolves to a unique
/// pivot. Returns the first [ProofError] encountered, if any.
pub fn check(root: ClauseKey, clause_db: &ClauseDB) -> Result<(), ProofError> {
    let mut visited = HashSet::new();
    let mut stack = vec![root];

    while let Some(key) = stack.pop() {
        if !visited.insert(key) {
            continue;
        }

        match expand(key, clause_db)?.step {
            Step::Hypothesis | Step::Assumption | Step::Lemma(_) => {}
            Step::Duplicate(parent) => stack.push(parent),
            Step::Resolution { parents, .. } => stack.extend(parents),
        }
    }

    Ok(())
}
