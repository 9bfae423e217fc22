// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Nuclear Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclear inputs to the decay-width calculation.
//!
//! Masses, pairing/shell corrections, level densities, Coulomb barriers
//! and inverse cross sections.

pub mod barrier;
pub mod corrections;
pub mod cross_section;
pub mod level_density;
pub mod nuclide;
