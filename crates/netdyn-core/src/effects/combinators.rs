//! Effect functions composed of other effect functions.
//!
//! Combinators own their children exclusively (`Box<dyn EffectFunction>`,
//! taken by the constructor), so a child cannot be shared between two
//! combinators and destruction releases the whole tree. `initialize` and
//! `preprocess_ego` forward to the children in declaration order.

use super::{EffectFunction, EvalContext, InitContext};
use crate::errors::EffectError;
use crate::network::ActorId;

/// A constant-valued effect function.
#[derive(Debug, Clone, Copy)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl EffectFunction for Constant {
    fn initialize(&mut self, _ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        Ok(())
    }

    fn preprocess_ego(&mut self, _ctx: &EvalContext<'_>, _ego: ActorId) {}

    fn value(&self, _ctx: &EvalContext<'_>, _alter: ActorId) -> f64 {
        self.value
    }
}

/// The absolute difference of two effect functions.
pub struct AbsDiff {
    first: Box<dyn EffectFunction>,
    second: Box<dyn EffectFunction>,
}

impl AbsDiff {
    pub fn new(first: Box<dyn EffectFunction>, second: Box<dyn EffectFunction>) -> Self {
        Self { first, second }
    }
}

impl EffectFunction for AbsDiff {
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        self.first.initialize(ctx)?;
        self.second.initialize(ctx)
    }

    fn preprocess_ego(&mut self, ctx: &EvalContext<'_>, ego: ActorId) {
        self.first.preprocess_ego(ctx, ego);
        self.second.preprocess_ego(ctx, ego);
    }

    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64 {
        (self.first.value(ctx, alter) - self.second.value(ctx, alter)).abs()
    }
}

/// The sum of one or more effect functions.
pub struct Sum {
    terms: Vec<Box<dyn EffectFunction>>,
}

impl Sum {
    pub fn new(terms: Vec<Box<dyn EffectFunction>>) -> Self {
        Self { terms }
    }
}

impl EffectFunction for Sum {
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        for term in &mut self.terms {
            term.initialize(ctx)?;
        }
        Ok(())
    }

    fn preprocess_ego(&mut self, ctx: &EvalContext<'_>, ego: ActorId) {
        for term in &mut self.terms {
            term.preprocess_ego(ctx, ego);
        }
    }

    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64 {
        self.terms.iter().map(|t| t.value(ctx, alter)).sum()
    }
}

/// The product of two effect functions.
pub struct Product {
    first: Box<dyn EffectFunction>,
    second: Box<dyn EffectFunction>,
}

impl Product {
    pub fn new(first: Box<dyn EffectFunction>, second: Box<dyn EffectFunction>) -> Self {
        Self { first, second }
    }
}

impl EffectFunction for Product {
    fn initialize(&mut self, ctx: &mut InitContext<'_>) -> Result<(), EffectError> {
        self.first.initialize(ctx)?;
        self.second.initialize(ctx)
    }

    fn preprocess_ego(&mut self, ctx: &EvalContext<'_>, ego: ActorId) {
        self.first.preprocess_ego(ctx, ego);
        self.second.preprocess_ego(ctx, ego);
    }

    fn value(&self, ctx: &EvalContext<'_>, alter: ActorId) -> f64 {
        self.first.value(ctx, alter) * self.second.value(ctx, alter)
    }
}
