//! Shared simulation skeleton
//!
//! Both games are built on the same pieces. This module must stay pure and
//! deterministic:
//! - Frame-counted cadence only (no wall clock)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod cadence;
pub mod phase;

pub use cadence::FrameCadence;
pub use phase::{Phase, PhaseTag, Transition};

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Build the session RNG for a seed
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}
