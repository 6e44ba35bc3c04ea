pub mod ease;
pub mod rng;
pub mod spring;
pub mod timer;
pub mod variants;
