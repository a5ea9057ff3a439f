//! Questions asked of an [`Observation`](crate::cards::observation::Observation):
//! how often it wins, and which cards improve it.
pub mod outs;
pub mod simulation;
