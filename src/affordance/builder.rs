use crate::affordance::{
    capture::MethodInvocation, error::AffordanceError, ports::AffordanceHandler,
    resolver::AffordanceResolver, types::Affordance,
};

/// Collects affordances in declaration order for a single configure scope.
#[derive(Debug)]
pub struct AffordanceBuilder<'r> {
    resolver: &'r AffordanceResolver,
    affordances: Vec<Affordance>,
}

impl<'r> AffordanceBuilder<'r> {
    pub fn new(resolver: &'r AffordanceResolver) -> Self {
        Self {
            resolver,
            affordances: Vec::new(),
        }
    }

    /// Resolves one operation on `C` and appends it. On error nothing is appended.
    pub fn declare<C, F>(&mut self, block: F) -> Result<(), AffordanceError>
    where
        C: AffordanceHandler,
        F: FnOnce(&mut MethodInvocation<C>),
    {
        let affordance = self.resolver.resolve::<C, F>(block)?;
        self.affordances.push(affordance);
        Ok(())
    }

    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    pub fn len(&self) -> usize {
        self.affordances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.affordances.is_empty()
    }

    pub fn build(&self) -> Vec<Affordance> {
        self.affordances.clone()
    }

    pub fn into_affordances(self) -> Vec<Affordance> {
        self.affordances
    }
}
