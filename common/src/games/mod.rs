mod session_rng;

pub mod serpent;

pub use session_rng::SessionRng;
