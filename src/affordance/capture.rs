use std::fmt;

use crate::affordance::ports::AffordanceHandler;

/// Stand-in for a handler of type `C`. Invoking an operation on it records the
/// operation instead of running it.
pub struct MethodInvocation<C: AffordanceHandler> {
    captured: Vec<C::Operation>,
}

impl<C: AffordanceHandler> MethodInvocation<C> {
    pub(crate) fn new() -> Self {
        Self {
            captured: Vec::new(),
        }
    }

    pub fn invoke(&mut self, operation: C::Operation) -> &mut Self {
        self.captured.push(operation);
        self
    }

    pub fn captured(&self) -> &[C::Operation] {
        &self.captured
    }

    pub(crate) fn into_captured(self) -> Vec<C::Operation> {
        self.captured
    }
}

impl<C: AffordanceHandler> fmt::Debug for MethodInvocation<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInvocation")
            .field("handler", &C::handler_name())
            .field("captured", &self.captured.len())
            .finish()
    }
}
