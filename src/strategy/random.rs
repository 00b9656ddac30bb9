use alloc::vec::Vec;

use log::trace;
use rand::{seq::SliceRandom, Rng};

use crate::common::Coordinate;

use super::TargetingStrategy;

/// Baseline strategy: every coordinate once, in one random order fixed at
/// construction. Outcomes are ignored.
pub struct RandomStrategy {
    remaining: Vec<Coordinate>,
}

impl RandomStrategy {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut remaining: Vec<Coordinate> = Coordinate::all().collect();
        remaining.shuffle(rng);
        Self { remaining }
    }

    /// Coordinates not yet fired at.
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }
}

impl TargetingStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_target(&mut self) -> Option<Coordinate> {
        let target = self.remaining.pop()?;
        trace!("random strategy fires at {}", target);
        Some(target)
    }
}
