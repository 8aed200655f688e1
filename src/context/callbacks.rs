/*!
Optional hooks a caller may register on a context, run as a `solve` call concludes.

Kept deliberately small: a single hook fired once per `solve`/`solve_assuming` call with the
[Report] it produced, rather than a hook per internal event (decision, conflict, learnt clause).
Wiring a hook into the search loop itself would mean threading a callback through every procedure
in [procedures](crate::procedures), which otherwise has no reason to know a context exists.
*/

use crate::reports::Report;

/// Hooks registered on a context.
#[derive(Default)]
pub struct Callbacks {
    on_solve_complete: Option<Box<dyn FnMut(Report)>>,
}

impl Callbacks {
    /// Registers a hook run with the report of every future `solve`/`solve_assuming` call,
    /// replacing any hook already registered.
    pub fn set_on_solve_complete(&mut self, hook: impl FnMut(Report) + 'static) {
        self.on_solve_complete = Some(Box::new(hook));
    }

    /// Removes any registered hook.
    pub fn clear_on_solve_complete(&mut self) {
        self.on_solve_complete = None;
    }

    /// Runs the registered hook, if any.
    pub(super) fn notify_solve_complete(&mut self, report: Report) {
        if let Some(hook) = self.on_solve_complete.as_mut() {
            hook(report);
        }
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_solve_complete", &self.on_solve_complete.is_some())
            .finish()
    }
}
