use crate::evaluation::{BoundSnapshot, BoundTrace};
use crate::sequences::IntervalEstimator;
use crate::streams::ObservationStream;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::debug;

/// Feeds a stream into a confidence sequence and records its bounds.
///
/// A snapshot is taken every `sample_frequency` accepted observations and once
/// more when the run ends, unless the last periodic one already covers the
/// final count. Rejected observations are counted and skipped.
pub struct SequentialMonitor {
    estimator: Box<dyn IntervalEstimator>,
    stream: Box<dyn ObservationStream>,

    trace: BoundTrace,

    alpha: f64,
    max_observations: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    rejected: u64,
    start_time: Instant,

    progress_tx: Option<Sender<BoundSnapshot>>,
}

impl SequentialMonitor {
    pub fn new(
        estimator: Box<dyn IntervalEstimator>,
        stream: Box<dyn ObservationStream>,
        alpha: f64,
        max_observations: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "alpha must lie in (0, 1)",
            ));
        }

        Ok(Self {
            estimator,
            stream,
            trace: BoundTrace::default(),
            alpha,
            max_observations,
            sample_frequency,
            processed: 0,
            rejected: 0,
            start_time: Instant::now(),
            progress_tx: None,
        })
    }
}

impl SequentialMonitor {
    pub fn with_progress(mut self, tx: Sender<BoundSnapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        self.start_time = Instant::now();

        while self.stream.has_more_observations() {
            if let Some(n) = self.max_observations {
                if self.processed >= n {
                    break;
                }
            }
            let Some(obs) = self.stream.next_observation() else {
                break;
            };

            if let Err(e) = self.estimator.add_obs(obs.weight, obs.value) {
                self.rejected += 1;
                debug!(error = %e, "skipping observation");
                continue;
            }
            self.processed += 1;

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        if self.trace.latest().map(|s| s.observations_seen) != Some(self.processed) {
            self.push_snapshot();
        }
        Ok(())
    }

    pub fn trace(&self) -> &BoundTrace {
        &self.trace
    }

    pub fn estimator(&self) -> &dyn IntervalEstimator {
        self.estimator.as_ref()
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    fn push_snapshot(&mut self) {
        let interval = match self.estimator.get_ci(self.alpha) {
            Ok(ci) => Some(ci),
            Err(e) => {
                debug!(seen = self.processed, error = %e, "no bound at snapshot");
                None
            }
        };

        let snapshot = BoundSnapshot {
            observations_seen: self.processed,
            estimate: self.estimator.estimate(),
            interval,
            seconds: self.start_time.elapsed().as_secs_f64(),
        };
        debug!(%snapshot, "snapshot");

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.trace.push(snapshot);
    }
}
