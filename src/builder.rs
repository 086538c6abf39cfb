//! Builder for configuring a [`FloydWarshall`] engine.

use crate::engine::{CycleCheck, FloydWarshall};

/// Step-by-step configuration of a [`FloydWarshall`] engine.
#[derive(Debug, Clone, Default)]
pub struct FloydWarshallBuilder {
    cycle_check: Option<CycleCheck>,
}

impl FloydWarshallBuilder {
    pub fn new() -> Self {
        Self { cycle_check: None }
    }
    pub fn with_cycle_check(mut self, cycle_check: CycleCheck) -> Self {
        self.cycle_check = Some(cycle_check);
        self
    }
    pub fn build(self) -> FloydWarshall {
        match self.cycle_check {
            Some(strategy) => FloydWarshall::with_cycle_check(strategy),
            None => FloydWarshall::new(),
        }
    }
}
