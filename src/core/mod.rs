//! Core building blocks shared by the deck and dice components.

pub mod rng;

pub use rng::GameRng;
