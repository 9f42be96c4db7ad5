//! BN254 curve parameters.
//!
//! The base-field prime `P`, the prime subgroup order `Q`, and the curve
//! coefficient `B` for `y² = x³ + B` over `𝔽_P`.

use ibig::{ibig, IBig};
use lazy_static::lazy_static;

lazy_static! {
    /// BN254 base-field modulus.
    pub static ref P: IBig = IBig::from_str_radix(
        "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47",
        16,
    )
    .unwrap();

    /// BN254 prime subgroup order (cofactor 1, so this is also the curve order).
    pub static ref Q: IBig = IBig::from_str_radix(
        "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
        16,
    )
    .unwrap();
}

/// An immutable (P, Q, B) triple describing a short Weierstrass curve
/// `y² = x³ + B` over `𝔽_P` with prime subgroup order `Q`.
///
/// Values flow explicitly through the API as a `CurveParams` rather than as
/// process-wide globals (the only global state this crate keeps is the
/// memoized endomorphism cache described in `endomorphism.rs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    pub p: IBig,
    pub q: IBig,
    pub b: IBig,
}

impl CurveParams {
    /// The BN254 curve parameters.
    pub fn bn254() -> Self {
        CurveParams {
            p: P.clone(),
            q: Q.clone(),
            b: ibig!(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bn254_constants_parse() {
        let params = CurveParams::bn254();
        assert_eq!(params.b, ibig!(3));
        assert!(params.p > ibig!(0));
        assert!(params.q > ibig!(0));
        assert!(params.q < params.p);
    }
}
