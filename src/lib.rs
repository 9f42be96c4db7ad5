//! bn254-glv: GLV-endomorphism scalar multiplication on BN254
//!
//! Given a scalar `α` and a point `P` on the BN254 curve, `glv_multiply`
//! returns `[α]P` by exploiting an efficiently computable endomorphism `φ`
//! with `φ(P) = [λ]P`, decomposing `α` into two half-size scalars `k1, k2`
//! and combining `[k1]P + [k2]φ(P)` with a single windowed joint
//! double-and-add ("Shamir's trick").
//!
//! # Overview
//!
//! This is a pedagogical, correctness-oriented implementation: no
//! constant-time guarantees, no optimized coordinate systems, no pairings.
pub mod curve;
pub mod decomposition;
pub mod endomorphism;
pub mod error;
pub mod field;
pub mod glv;
pub mod params;
pub mod simul;

// Re-export the public surface named in the specification's interface section.
pub use curve::Point;
pub use error::{GlvError, Result};
pub use glv::glv_multiply;
pub use params::CurveParams;
