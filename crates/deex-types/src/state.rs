// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{DeexError, DeexResult};
use std::ops::{Add, Sub};

/// Relativistic four-momentum [MeV], metric (+,-,-,-).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FourMomentum {
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub e: f64,
}

impl FourMomentum {
    pub fn new(px: f64, py: f64, pz: f64, e: f64) -> Self {
        FourMomentum { px, py, pz, e }
    }

    /// Particle of the given mass at rest.
    pub fn at_rest(mass_mev: f64) -> Self {
        FourMomentum::new(0.0, 0.0, 0.0, mass_mev)
    }

    /// On-shell four-momentum from a three-momentum and a rest mass.
    pub fn from_momentum(p: [f64; 3], mass_mev: f64) -> Self {
        let p2 = p[0] * p[0] + p[1] * p[1] + p[2] * p[2];
        FourMomentum::new(p[0], p[1], p[2], (p2 + mass_mev * mass_mev).sqrt())
    }

    pub fn momentum(&self) -> [f64; 3] {
        [self.px, self.py, self.pz]
    }

    pub fn momentum_magnitude(&self) -> f64 {
        (self.px * self.px + self.py * self.py + self.pz * self.pz).sqrt()
    }

    /// Invariant mass, clamped at zero for slightly space-like round-off.
    pub fn invariant_mass(&self) -> f64 {
        let p = self.momentum_magnitude();
        ((self.e - p) * (self.e + p)).max(0.0).sqrt()
    }

    pub fn kinetic_energy(&self) -> f64 {
        (self.e - self.invariant_mass()).max(0.0)
    }

    /// Velocity β = p/E of the frame in which this vector is at rest.
    pub fn velocity(&self) -> [f64; 3] {
        if self.e <= 0.0 {
            return [0.0; 3];
        }
        [self.px / self.e, self.py / self.e, self.pz / self.e]
    }

    /// Pure Lorentz boost by velocity `beta` (|β| < 1).
    pub fn boost(&self, beta: [f64; 3]) -> Self {
        let b2 = beta[0] * beta[0] + beta[1] * beta[1] + beta[2] * beta[2];
        if b2 <= 0.0 {
            return *self;
        }
        debug_assert!(b2 < 1.0, "boost requires |beta| < 1, got {b2}");
        let gamma = 1.0 / (1.0 - b2).sqrt();
        let bp = beta[0] * self.px + beta[1] * self.py + beta[2] * self.pz;
        let gamma2 = (gamma - 1.0) / b2;
        let k = gamma2 * bp + gamma * self.e;
        FourMomentum::new(
            self.px + k * beta[0],
            self.py + k * beta[1],
            self.pz + k * beta[2],
            gamma * (self.e + bp),
        )
    }
}

impl Add for FourMomentum {
    type Output = FourMomentum;

    fn add(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.px + rhs.px,
            self.py + rhs.py,
            self.pz + rhs.pz,
            self.e + rhs.e,
        )
    }
}

impl Sub for FourMomentum {
    type Output = FourMomentum;

    fn sub(self, rhs: FourMomentum) -> FourMomentum {
        FourMomentum::new(
            self.px - rhs.px,
            self.py - rhs.py,
            self.pz - rhs.pz,
            self.e - rhs.e,
        )
    }
}

/// Excited nucleus under de-excitation.
///
/// A and Z are fixed at construction; a new `Fragment` is built for every
/// daughter, so an instance never changes identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    a: u32,
    z: u32,
    excitation_mev: f64,
    ground_state_mass_mev: f64,
    momentum: FourMomentum,
}

impl Fragment {
    /// Build a fragment, rejecting illegal states.
    pub fn new(
        a: u32,
        z: u32,
        excitation_mev: f64,
        ground_state_mass_mev: f64,
        momentum: FourMomentum,
    ) -> DeexResult<Self> {
        let fragment = Fragment {
            a,
            z,
            excitation_mev,
            ground_state_mass_mev,
            momentum,
        };
        fragment.validate()?;
        Ok(fragment)
    }

    /// Fragment at rest in the lab frame.
    pub fn at_rest(
        a: u32,
        z: u32,
        excitation_mev: f64,
        ground_state_mass_mev: f64,
    ) -> DeexResult<Self> {
        Fragment::new(
            a,
            z,
            excitation_mev,
            ground_state_mass_mev,
            FourMomentum::at_rest(ground_state_mass_mev + excitation_mev),
        )
    }

    /// Check the construction-time contract again.
    pub fn validate(&self) -> DeexResult<()> {
        let invalid = |message: &str| DeexError::InvalidFragment {
            a: self.a,
            z: self.z,
            message: message.to_string(),
        };
        if self.a < 1 {
            return Err(invalid("mass number must be >= 1"));
        }
        if self.z > self.a {
            return Err(invalid("charge must not exceed mass number"));
        }
        if !self.excitation_mev.is_finite() || self.excitation_mev < 0.0 {
            return Err(invalid("excitation energy must be finite and >= 0"));
        }
        if !self.ground_state_mass_mev.is_finite() || self.ground_state_mass_mev <= 0.0 {
            return Err(invalid("ground-state mass must be finite and > 0"));
        }
        let p = self.momentum;
        if !(p.px.is_finite() && p.py.is_finite() && p.pz.is_finite() && p.e.is_finite()) {
            return Err(invalid("four-momentum components must be finite"));
        }
        Ok(())
    }

    pub fn a(&self) -> u32 {
        self.a
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    /// Neutron number N = A - Z.
    pub fn n(&self) -> u32 {
        self.a - self.z
    }

    pub fn excitation_mev(&self) -> f64 {
        self.excitation_mev
    }

    pub fn excitation_per_nucleon(&self) -> f64 {
        self.excitation_mev / self.a as f64
    }

    pub fn ground_state_mass_mev(&self) -> f64 {
        self.ground_state_mass_mev
    }

    /// Rest mass including excitation.
    pub fn excited_mass_mev(&self) -> f64 {
        self.ground_state_mass_mev + self.excitation_mev
    }

    pub fn momentum(&self) -> FourMomentum {
        self.momentum
    }

    /// Same nucleus with its excitation dropped to exactly zero; the
    /// three-momentum is kept and the energy put back on shell.
    pub fn quenched(&self) -> Fragment {
        Fragment {
            excitation_mev: 0.0,
            momentum: FourMomentum::from_momentum(
                self.momentum.momentum(),
                self.ground_state_mass_mev,
            ),
            ..self.clone()
        }
    }
}

/// How an emitted particle left the decay chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmissionOrigin {
    /// Single ejectile from an evaporation/GEM channel.
    Evaporation,
    /// Final residue of a multifragmentation partner's own decay chain.
    BreakUpResidue,
}

/// Particle leaving the decay chain.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedParticle {
    pub a: u32,
    pub z: u32,
    /// Kinetic energy in the rest frame of the emitting nucleus [MeV].
    pub kinetic_energy_mev: f64,
    /// Unit direction in the rest frame of the emitting nucleus.
    pub direction: [f64; 3],
    /// Lab-frame four-momentum [MeV].
    pub momentum: FourMomentum,
    /// Residual excitation left for gamma de-excitation [MeV].
    pub excitation_mev: f64,
    pub origin: EmissionOrigin,
}
