// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

/// Fatal conditions of the de-excitation engine.
///
/// Closed channels, out-of-table corrections and quadrature non-convergence
/// are ordinary outcomes and never surface here.
#[derive(Error, Debug)]
pub enum DeexError {
    #[error("Illegal fragment state A={a}, Z={z}: {message}")]
    InvalidFragment { a: u32, z: u32, message: String },

    #[error("Random source contract violated: {0}")]
    RandomSource(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown decay channel: {0}")]
    UnknownChannel(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DeexResult<T> = Result<T, DeexError>;
