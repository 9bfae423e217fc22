//! Numerical kernels for the SCPN de-excitation engine.

pub mod interp;
pub mod quadrature;
pub mod roots;
