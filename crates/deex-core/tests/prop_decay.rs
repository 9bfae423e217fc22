// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Property-Based Tests (proptest) for deex-core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for deex-core using proptest.
//!
//! Covers: selection rule, width sign and closure, per-emission
//! conservation, termination, reproducibility.

use deex_core::decay::DecayStep;
use deex_core::engine::DeexcitationEngine;
use deex_core::random::{RngSource, SequenceSource};
use deex_core::registry::select_index;
use deex_types::config::DeexcitationConfig;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn engine() -> DeexcitationEngine {
    DeexcitationEngine::new(DeexcitationConfig::default()).unwrap()
}

// ── Selection Rule ───────────────────────────────────────────────────

proptest! {
    /// The chosen channel is always open and satisfies the cumulative rule.
    #[test]
    fn selection_picks_first_open_crossing(
        gammas in prop::collection::vec(prop_oneof![Just(0.0f64), 0.0f64..10.0], 1..40),
        u in 0.0f64..1.0,
    ) {
        let total: f64 = gammas.iter().sum();
        match select_index(&gammas, u) {
            None => prop_assert!(total <= 0.0),
            Some(i) => {
                prop_assert!(gammas[i] > 0.0);
                let before: f64 = gammas[..i].iter().sum();
                let through = before + gammas[i];
                let target = u * total;
                // No earlier open channel already reached the target.
                prop_assert!(before < target || gammas[..i].iter().all(|&g| g <= 0.0) || target <= 0.0);
                prop_assert!(through >= target || gammas[i + 1..].iter().all(|&g| g <= 0.0));
            }
        }
    }

    /// Same widths and same draw give the same index.
    #[test]
    fn selection_deterministic(
        gammas in prop::collection::vec(0.0f64..5.0, 1..70),
        u in 0.0f64..1.0,
    ) {
        prop_assert_eq!(select_index(&gammas, u), select_index(&gammas, u));
    }
}

// ── Widths ───────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Γ is never negative and the table total equals the sum.
    #[test]
    fn widths_nonnegative(
        a in 12u32..220,
        z_frac in 0.38f64..0.46,
        e_per_a in 0.0f64..4.0,
    ) {
        let e = engine();
        let z = ((a as f64) * z_frac).round() as u32;
        let f = e.fragment(a, z, e_per_a * a as f64).unwrap();
        let table = e.widths(&f).unwrap();
        let mut sum = 0.0;
        for w in table.widths() {
            prop_assert!(w.gamma >= 0.0 && w.gamma.is_finite());
            sum += w.gamma;
        }
        prop_assert!((sum - table.total()).abs() <= 1e-9 * sum.max(1.0));
    }

    /// An ejectile at least as heavy as the fragment never opens.
    #[test]
    fn heavy_ejectile_always_closed(a in 2u32..12, excitation in 0.0f64..5000.0) {
        let e = engine();
        let f = e.fragment(a, a / 2, excitation).unwrap();
        let id = e.channel_id("C12").unwrap();
        let w = e.channel_width(id, &f).unwrap();
        prop_assert_eq!(w.gamma, 0.0);
        prop_assert!(w.converged);
    }
}

// ── Decay Chains ─────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Every step conserves A and Z and lowers A; the chain terminates.
    #[test]
    fn chain_conserves_and_terminates(
        a in 20u32..140,
        z_frac in 0.4f64..0.46,
        e_per_a in 0.2f64..2.5,
        seed in 0u64..1000,
    ) {
        let e = engine();
        let z = ((a as f64) * z_frac).round() as u32;
        let mut chain = e.decay_loop(e.fragment(a, z, e_per_a * a as f64).unwrap());
        let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
        let (mut cur_a, mut cur_z) = (a, z);
        for _ in 0..a {
            match chain.next_step(&mut rng).unwrap() {
                DecayStep::Emission(em) => {
                    let out_a: u32 = em.emitted.iter().map(|p| p.a).sum::<u32>()
                        + em.hot_fragments.iter().map(|f| f.a()).sum::<u32>();
                    let out_z: u32 = em.emitted.iter().map(|p| p.z).sum::<u32>()
                        + em.hot_fragments.iter().map(|f| f.z()).sum::<u32>();
                    prop_assert_eq!(em.daughter.a() + out_a, cur_a);
                    prop_assert_eq!(em.daughter.z() + out_z, cur_z);
                    prop_assert!(em.daughter.a() < cur_a);
                    prop_assert!(em.daughter.excitation_mev() >= 0.0);
                    cur_a = em.daughter.a();
                    cur_z = em.daughter.z();
                }
                DecayStep::Terminal { .. } => break,
            }
        }
        prop_assert!(chain.is_terminal());
    }

    /// Whole events conserve A and Z and replay exactly for a fixed seed.
    #[test]
    fn event_conserves_and_replays(
        a in 20u32..120,
        e_per_a in 0.5f64..8.0,
        seed in 0u64..1000,
    ) {
        let e = engine();
        let z = (a as f64 * 0.44).round() as u32;
        let f = e.fragment(a, z, e_per_a * a as f64).unwrap();
        let first = e.decay(f.clone(), &mut RngSource::new(StdRng::seed_from_u64(seed))).unwrap();
        let second = e.decay(f, &mut RngSource::new(StdRng::seed_from_u64(seed))).unwrap();
        prop_assert_eq!(first.total_mass_number(), a);
        prop_assert_eq!(first.total_charge(), z);
        prop_assert_eq!(first, second);
    }
}

// ── Ground State ─────────────────────────────────────────────────────

proptest! {
    /// A cold fragment terminates without drawing a single variate.
    #[test]
    fn cold_fragment_emits_nothing(a in 1u32..250, z_frac in 0.0f64..=1.0) {
        let e = engine();
        let z = ((a as f64) * z_frac).floor() as u32;
        let f = e.fragment(a, z, 0.0).unwrap();
        let mut src = SequenceSource::new(Vec::new());
        let out = e.decay(f, &mut src).unwrap();
        prop_assert!(out.emitted.is_empty());
        prop_assert_eq!(out.fragment.excitation_mev(), 0.0);
        prop_assert_eq!(src.consumed(), 0);
    }
}
