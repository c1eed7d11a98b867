//! Инфраструктурный слой вокруг движка: реализации RandomSource.

pub mod rng;

pub use rng::*;
