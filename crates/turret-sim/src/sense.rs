//! Nearest-target scan.

use glam::Vec3;

use crate::host::Candidate;

/// Result of scanning for the nearest candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting<H> {
    pub target: Option<H>,
    /// Distance to `target`, infinite if there is none.
    pub distance: f32,
}

impl<H> Default for Sighting<H> {
    fn default() -> Self {
        Self {
            target: None,
            distance: f32::INFINITY,
        }
    }
}

/// Scan every candidate and keep the closest to `origin`.
/// Ties go to the first one encountered. Candidates at a non-finite
/// distance are never selected.
pub fn nearest<H: Copy>(origin: Vec3, candidates: &[Candidate<H>]) -> Sighting<H> {
    let mut best = Sighting::default();
    for candidate in candidates {
        let distance = origin.distance(candidate.position);
        if distance < best.distance {
            best = Sighting {
                target: Some(candidate.handle),
                distance,
            };
        }
    }
    best
}
