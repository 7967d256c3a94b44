use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Observation;
use crate::streams::stream::ObservationStream;

/// Synthetic logged-bandit stream for off-policy evaluation.
///
/// A uniform logging policy picks one of `k` actions; action `a` pays a
/// Bernoulli reward with probability `reward_probabilities[a]`. The evaluated
/// policy always plays `target_action`, so each observation carries the
/// importance weight `k * 1[a == target_action]`. The weighted mean of the
/// rewards is an unbiased estimate of [`OffPolicyGenerator::target_value`].
#[derive(Debug)]
pub struct OffPolicyGenerator {
    seed: u64,
    rng: StdRng,
    reward_probabilities: Vec<f64>,
    target_action: usize,
    max_observations: Option<usize>,
    produced: usize,
}

impl OffPolicyGenerator {
    pub fn new(
        reward_probabilities: Vec<f64>,
        target_action: usize,
        max_observations: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if reward_probabilities.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "At least one action is required",
            ));
        }
        if reward_probabilities
            .iter()
            .any(|p| !(0.0..=1.0).contains(p))
        {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Reward probabilities must be in [0, 1]",
            ));
        }
        if target_action >= reward_probabilities.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Target action must index one of the actions",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            reward_probabilities,
            target_action,
            max_observations,
            produced: 0,
        })
    }

    pub fn num_actions(&self) -> usize {
        self.reward_probabilities.len()
    }

    /// True mean reward of the evaluated policy.
    pub fn target_value(&self) -> f64 {
        self.reward_probabilities[self.target_action]
    }
}

impl ObservationStream for OffPolicyGenerator {
    fn has_more_observations(&self) -> bool {
        self.max_observations.map_or(true, |max| self.produced < max)
    }

    fn next_observation(&mut self) -> Option<Observation> {
        if !self.has_more_observations() {
            return None;
        }

        let k = self.num_actions();
        let action = self.rng.random_range(0..k);
        let reward = if self.rng.random_bool(self.reward_probabilities[action]) {
            1.0
        } else {
            0.0
        };
        let weight = if action == self.target_action {
            k as f64
        } else {
            0.0
        };

        self.produced += 1;
        Some(Observation::new(weight, reward))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
