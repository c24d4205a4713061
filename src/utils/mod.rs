#[cfg(feature = "progressbar")]
use std::io::Stdout;
use std::time::Duration;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::mst::Algorithm;

pub mod logging;
pub mod stats;

pub trait Tolerance {
    fn tol() -> Self;
}

impl Tolerance for f64 {
    fn tol() -> Self {
        0.001
    }
}

pub type Random = Pcg64Mcg;

pub fn create_seeded_rng(seed: i128) -> Random {
    let mut rng = Pcg64Mcg::from_seed(seed.to_le_bytes());
    // discard the first three
    rng.next_u64();
    rng.next_u64();
    rng.next_u64();
    rng
}

/// Receives a notification for every timed algorithm run of a benchmark.
pub trait RunTracker {
    fn update(&mut self, algorithm: &Algorithm, run: usize, elapsed: &Duration);
    fn inc(&mut self);
}

pub struct DisabledRunTracker {}

impl DisabledRunTracker {
    pub fn new(_total: u64) -> Self {
        Self {}
    }
}

impl RunTracker for DisabledRunTracker {
    fn update(&mut self, _: &Algorithm, _: usize, _: &Duration) {}
    fn inc(&mut self) {}
}

#[cfg(feature = "progressbar")]
pub struct PBRRunTracker {
    progressbar: pbr::ProgressBar<Stdout>,
}

#[cfg(feature = "progressbar")]
impl PBRRunTracker {
    pub fn new(total: u64) -> Self {
        Self {
            progressbar: pbr::ProgressBar::new(total),
        }
    }
}

#[cfg(feature = "progressbar")]
impl Drop for PBRRunTracker {
    fn drop(&mut self) {
        self.progressbar.finish_println("");
    }
}

#[cfg(feature = "progressbar")]
impl RunTracker for PBRRunTracker {
    fn update(&mut self, algorithm: &Algorithm, run: usize, elapsed: &Duration) {
        self.progressbar.message(
            format!(
                "{} run {} | {:.3} ms | ",
                algorithm,
                run + 1,
                stats::millis(elapsed)
            )
            .as_str(),
        );
    }

    fn inc(&mut self) {
        self.progressbar.inc();
    }
}

#[cfg(feature = "progressbar")]
pub type DefaultRunTracker = PBRRunTracker;

#[cfg(not(feature = "progressbar"))]
pub type DefaultRunTracker = DisabledRunTracker;

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn seeded_rngs_repeat() {
        let mut a = create_seeded_rng(-17);
        let mut b = create_seeded_rng(-17);
        let mut c = create_seeded_rng(18);
        let xs: Vec<u32> = (0..8).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen()).collect();
        let zs: Vec<u32> = (0..8).map(|_| c.gen()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }
}
