use crate::config::build::BuildError;
use crate::config::choices::{OffPolicyParameters, StreamChoice};
use crate::streams::{ObservationStream, OffPolicyGenerator};

impl TryFrom<OffPolicyParameters> for OffPolicyGenerator {
    type Error = BuildError;

    fn try_from(parameters: OffPolicyParameters) -> Result<Self, Self::Error> {
        let max_observations = parameters
            .max_observations
            .map(|v| {
                usize::try_from(v).map_err(|_| {
                    BuildError::InvalidParameter("max_observations too large for usize".into())
                })
            })
            .transpose()?;

        OffPolicyGenerator::new(
            parameters.reward_probabilities,
            parameters.target_action,
            max_observations,
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}

pub fn build_stream(choice: StreamChoice) -> Result<Box<dyn ObservationStream>, BuildError> {
    match choice {
        StreamChoice::OffPolicyGenerator(p) => {
            let s = OffPolicyGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}
