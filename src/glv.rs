//! GLV orchestrator: composes endomorphism discovery, scalar decomposition,
//! and simultaneous multiplication into `[α]P`.

use crate::curve::Point;
use crate::decomposition::decompose_alpha;
use crate::endomorphism::{self, bn254_endomorphism};
use crate::error::GlvError;
use crate::params::CurveParams;
use crate::simul::simul_mult;
use ibig::IBig;

/// Default window width for the simultaneous-multiplication table.
pub const DEFAULT_WINDOW_WIDTH: u32 = 2;

/// `[α]P` via the GLV method: decompose α into half-size (k1, k2), compute
/// `φ(P)`, and combine `[k1]P + [k2]φ(P)` with one windowed joint
/// double-and-add.
///
/// `params` is expected to be the BN254 curve parameters; the memoized
/// endomorphism cache in `endomorphism.rs` assumes a single fixed curve.
pub fn glv_multiply(alpha: &IBig, p: &Point, params: &CurveParams) -> Result<Point, GlvError> {
    let (omega, lambda) = bn254_endomorphism();

    let phi_p = endomorphism::apply(&omega, p, params);
    if !phi_p.is_on_curve(params) {
        return Err(GlvError::InvalidPoint);
    }

    let (k1, k2) = decompose_alpha(alpha, &lambda, &params.q);
    simul_mult(&k1, &k2, p, &phi_p, DEFAULT_WINDOW_WIDTH, params)
}
