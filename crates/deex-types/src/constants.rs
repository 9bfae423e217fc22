// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in the MeV / fm unit system used throughout.

/// ħc [MeV·fm] (CODATA 2018).
pub const HBARC_MEV_FM: f64 = 197.326_980_4;

/// e²/(4πε₀) [MeV·fm].
pub const ELEMENTARY_CHARGE_SQ_MEV_FM: f64 = 1.439_964_547;

/// Proton rest mass [MeV].
pub const PROTON_MASS_MEV: f64 = 938.272_088_16;

/// Neutron rest mass [MeV].
pub const NEUTRON_MASS_MEV: f64 = 939.565_420_52;

/// Atomic mass unit [MeV].
pub const AMU_MEV: f64 = 931.494_102_42;

/// √π / 12, common prefactor of the Fermi-gas and constant-temperature
/// level densities.
pub const LEVEL_DENSITY_PREFACTOR: f64 = 0.147_704_487_575_459_65;
