mod off_policy;

pub use off_policy::OffPolicyGenerator;
