//! Deferred, argument-bound units of work.
//!
//! A generator declares the work it needs around generation as a list of
//! [`StepDefinition`]s. Each definition owns every argument its operation will
//! receive: the values are evaluated and moved in when the definition is built,
//! so running it later never re-reads configuration or any other outside
//! state. An action runs each definition exactly once; `exec` consumes it.

use std::fmt;

use crate::error::Result;

type Task = Box<dyn FnOnce() -> Result<()>>;

/// A described operation together with its captured arguments.
pub struct StepDefinition {
    description: String,
    task: Task,
}

impl StepDefinition {
    /// Bind `operation` to `args`.
    ///
    /// `args` is moved into the definition now; `operation` receives exactly
    /// that value when [`exec`](Self::exec) runs. An owner, if the operation
    /// needs one, is simply part of `args`.
    pub fn new<A, F>(description: impl Into<String>, args: A, operation: F) -> Self
    where
        A: 'static,
        F: FnOnce(A) -> Result<()> + 'static,
    {
        Self {
            description: description.into(),
            task: Box::new(move || operation(args)),
        }
    }

    /// Wrap a closure that already captured what it needs.
    pub fn from_fn<F>(description: impl Into<String>, task: F) -> Self
    where
        F: FnOnce() -> Result<()> + 'static,
    {
        Self {
            description: description.into(),
            task: Box::new(task),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the operation. Errors are returned untouched.
    pub fn exec(self) -> Result<()> {
        (self.task)()
    }
}

impl fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
