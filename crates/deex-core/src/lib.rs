//! Statistical de-excitation of hot nuclei.
//!
//! Channels and widths: probability, channel, multifrag
//! Selection and decay: registry, decay, engine

pub mod channel;
pub mod decay;
pub mod engine;
pub mod kinematics;
pub mod model;
pub mod multifrag;
pub mod probability;
pub mod random;
pub mod registry;
