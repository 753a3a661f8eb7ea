//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка (системная и воспроизводимая по seed).

pub mod rng;

pub use rng::*;
