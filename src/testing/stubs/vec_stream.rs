use crate::core::Observation;
use crate::streams::ObservationStream;
use std::io::Error;

pub struct VecObservationStream {
    pub observations: Vec<Observation>,
    idx: usize,
}

impl VecObservationStream {
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self {
            observations: pairs.into_iter().map(Observation::from).collect(),
            idx: 0,
        }
    }
}

impl ObservationStream for VecObservationStream {
    fn has_more_observations(&self) -> bool {
        self.idx < self.observations.len()
    }

    fn next_observation(&mut self) -> Option<Observation> {
        if !self.has_more_observations() {
            return None;
        }

        let obs = self.observations[self.idx];
        self.idx += 1;
        Some(obs)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
