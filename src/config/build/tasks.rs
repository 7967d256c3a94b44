use crate::config::build::{BuildError, build_sequence, build_stream};
use crate::config::choices::TaskChoice;
use crate::tasks::SequentialMonitor;

pub fn build_task(choice: TaskChoice) -> Result<SequentialMonitor, BuildError> {
    match choice {
        TaskChoice::MonitorSequential(p) => {
            let estimator = build_sequence(p.sequence)?;
            let stream = build_stream(p.stream)?;
            let monitor = SequentialMonitor::new(
                estimator,
                stream,
                p.alpha,
                p.max_observations,
                p.sample_frequency,
            )?;
            Ok(monitor)
        }
    }
}
