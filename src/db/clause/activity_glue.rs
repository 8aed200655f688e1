/*!
The companion value stored in the clause activity heap for addition (learnt) clauses.

Named after 'glue', a common nickname for LBD (see [the Glucose
paper](https://dx.doi.org/10.1142/S0218213018400018)): a clause with low LBD 'glues together'
few decision levels and is a good candidate to keep around, were reduction ever performed.
*/

use crate::config::LBD;
use crate::db::Activity;

/// Activity and LBD of an addition clause, ordered by activity for the heap.
///
/// `reduce_db` is a documented no-op (see the solve procedure), so `lbd` is presently read only
/// for diagnostics; it is not dropped because it is the natural companion of `activity` in any
/// clause-database heap entry and the bookkeeping costs nothing to keep current.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivityLBD {
    /// The clause's activity.
    pub activity: Activity,

    /// The clause's literal block distance at the time it was learnt.
    pub lbd: LBD,
}

impl PartialOrd for ActivityLBD {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.activity.partial_cmp(&other.activity)
    }
}
