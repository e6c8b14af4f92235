// Adapters layer: concrete random sources and race observers.

pub mod console;
pub mod random;
