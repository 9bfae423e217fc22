// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Emission Kinematics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::random::{draw, RandomSource};
use deex_types::error::DeexResult;
use deex_types::state::FourMomentum;
use std::f64::consts::PI;

/// Momentum of either product in the rest frame of a two-body decay
/// M -> m1 + m2 [MeV]. Zero at or below threshold.
pub fn two_body_momentum(parent_mass: f64, m1: f64, m2: f64) -> f64 {
    let sum = m1 + m2;
    let diff = m1 - m2;
    let m2p = parent_mass * parent_mass;
    let lambda = (m2p - sum * sum) * (m2p - diff * diff);
    if lambda <= 0.0 || parent_mass <= 0.0 {
        return 0.0;
    }
    lambda.sqrt() / (2.0 * parent_mass)
}

/// Isotropic unit vector from two draws (cos θ = 1 - 2u₁, φ = 2πu₂).
pub fn isotropic_direction(rng: &mut dyn RandomSource) -> DeexResult<[f64; 3]> {
    let cos_theta = 1.0 - 2.0 * draw(rng)?;
    let phi = 2.0 * PI * draw(rng)?;
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    Ok([sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta])
}

pub fn scale(v: [f64; 3], k: f64) -> [f64; 3] {
    [v[0] * k, v[1] * k, v[2] * k]
}

pub fn norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

/// Back-to-back products of a two-body decay at rest, the first along
/// `direction`.
pub fn split_at_rest(
    parent_mass: f64,
    m1: f64,
    m2: f64,
    direction: [f64; 3],
) -> (FourMomentum, FourMomentum) {
    let p = two_body_momentum(parent_mass, m1, m2);
    let p1 = scale(direction, p);
    let p2 = scale(direction, -p);
    (
        FourMomentum::from_momentum(p1, m1),
        FourMomentum::from_momentum(p2, m2),
    )
}

/// Unit direction of a three-vector; +z for a null vector.
pub fn unit(v: [f64; 3]) -> [f64; 3] {
    let n = norm(v);
    if n > 0.0 {
        scale(v, 1.0 / n)
    } else {
        [0.0, 0.0, 1.0]
    }
}
