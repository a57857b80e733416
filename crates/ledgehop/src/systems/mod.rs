pub mod kinematics;

pub use kinematics::{probe_supported, KinematicBody, StepReport};
