//! Affine points and the group law on BN254, `y² = x³ + B (mod P)`.

use crate::field;
use crate::params::CurveParams;
use ibig::{ibig, IBig};

/// A point on the curve in affine coordinates, or the point at infinity.
///
/// Every infinity representation compares equal to every other, and two
/// non-infinity points compare equal componentwise — which is precisely
/// what deriving `PartialEq` on this two-variant enum gives for free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Point {
    Infinity,
    Affine { x: IBig, y: IBig },
}

impl Point {
    /// Construct an affine (non-infinity) point.
    pub fn new(x: IBig, y: IBig) -> Self {
        Point::Affine { x, y }
    }

    /// The point at infinity (identity element).
    pub fn new_infinity() -> Self {
        Point::Infinity
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// The fixed BN254 generator G₁ = (1, 2).
    pub fn generator() -> Self {
        Point::new(ibig!(1), ibig!(2))
    }

    /// `y² ≡ x³ + B (mod P)`. True for the point at infinity.
    pub fn is_on_curve(&self, params: &CurveParams) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let y_sq = field::mul(y, y, &params.p);
                let x_cubed = field::mul(&field::mul(x, x, &params.p), x, &params.p);
                let rhs = field::add(&x_cubed, &params.b, &params.p);
                y_sq == rhs
            }
        }
    }

    /// `-P`: negate the y-coordinate. Infinity negates to itself.
    pub fn negate(&self, params: &CurveParams) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::new(x.clone(), field::neg(y, &params.p)),
        }
    }

    /// `P₁ + P₂` using the affine chord-and-tangent group law.
    pub fn add(&self, other: &Self, params: &CurveParams) -> Self {
        let (x1, y1) = match self {
            Point::Infinity => return other.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Infinity => return self.clone(),
            Point::Affine { x, y } => (x, y),
        };

        if self == other {
            return self.double(params);
        }
        if x1 == x2 && field::add(y1, y2, &params.p) == ibig!(0) {
            return Point::Infinity;
        }

        let delta_y = field::sub(y2, y1, &params.p);
        let delta_x = field::sub(x2, x1, &params.p);
        let slope = field::mul(&delta_y, &field::inv(&delta_x, &params.p), &params.p);

        let x3 = field::sub(
            &field::sub(&field::mul(&slope, &slope, &params.p), x1, &params.p),
            x2,
            &params.p,
        );
        let y3 = field::sub(
            &field::mul(&slope, &field::sub(x1, &x3, &params.p), &params.p),
            y1,
            &params.p,
        );
        Point::new(x3, y3)
    }

    /// `[2]P` using the textbook tangent-line slope `(3x² )/(2y)`.
    ///
    /// A reference implementation of this system is known to use
    /// `(3x² + B)/(2y)` instead, which is not the group law's tangent slope
    /// (it happens to coincide with it only when `B == 0`). This crate
    /// always uses the correct `3x²` numerator; see DESIGN.md.
    pub fn double(&self, params: &CurveParams) -> Self {
        let (x, y) = match self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if *y == ibig!(0) {
            return Point::Infinity;
        }

        let numerator = field::mul(&ibig!(3), &field::mul(x, x, &params.p), &params.p);
        let denominator = field::mul(&ibig!(2), y, &params.p);
        let slope = field::mul(&numerator, &field::inv(&denominator, &params.p), &params.p);

        let two_x = field::mul(&ibig!(2), x, &params.p);
        let x3 = field::sub(&field::mul(&slope, &slope, &params.p), &two_x, &params.p);
        let y3 = field::sub(
            &field::mul(&slope, &field::sub(x, &x3, &params.p), &params.p),
            y,
            &params.p,
        );
        Point::new(x3, y3)
    }

    /// Binary double-and-add, LSB to MSB. Negative `k` negates the result.
    pub fn scalar_mult(k: &IBig, p: &Point, params: &CurveParams) -> Self {
        use num_traits::sign::Signed;
        use std::ops::ShrAssign;

        if k.is_negative() {
            let abs_result = Self::scalar_mult(&-k, p, params);
            return abs_result.negate(params);
        }
        if *k == ibig!(0) {
            return Point::Infinity;
        }

        let mut result = Point::Infinity;
        let mut addend = p.clone();
        let mut exponent = k.clone();
        while exponent != ibig!(0) {
            if (&exponent & 1_u8) != 0 {
                result = result.add(&addend, params);
            }
            addend = addend.double(params);
            exponent.shr_assign(1);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CurveParams {
        CurveParams::bn254()
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(Point::generator().is_on_curve(&params()));
    }

    #[test]
    fn infinity_is_on_curve() {
        assert!(Point::Infinity.is_on_curve(&params()));
    }

    #[test]
    fn double_matches_self_addition() {
        let g = Point::generator();
        let params = params();
        assert_eq!(g.double(&params), g.add(&g, &params));
    }

    #[test]
    fn double_g_is_on_curve_and_not_infinity() {
        let g = Point::generator();
        let params = params();
        let doubled = g.double(&params);
        assert!(doubled.is_on_curve(&params));
        assert!(!doubled.is_infinity());
    }

    #[test]
    fn triple_g_via_scalar_mult_matches_add_chain() {
        let g = Point::generator();
        let params = params();
        let triple = Point::scalar_mult(&IBig::from(3), &g, &params);
        let expected = g.double(&params).add(&g, &params);
        assert_eq!(triple, expected);
    }

    #[test]
    fn scalar_mult_zero_is_infinity() {
        let g = Point::generator();
        let params = params();
        assert_eq!(Point::scalar_mult(&ibig!(0), &g, &params), Point::Infinity);
    }

    #[test]
    fn scalar_mult_one_is_identity() {
        let g = Point::generator();
        let params = params();
        assert_eq!(Point::scalar_mult(&ibig!(1), &g, &params), g);
    }

    #[test]
    fn scalar_mult_negative_one_is_negation() {
        let g = Point::generator();
        let params = params();
        assert_eq!(
            Point::scalar_mult(&IBig::from(-1), &g, &params),
            g.negate(&params)
        );
    }

    #[test]
    fn add_with_infinity_is_identity() {
        let g = Point::generator();
        let params = params();
        assert_eq!(g.add(&Point::Infinity, &params), g);
        assert_eq!(Point::Infinity.add(&g, &params), g);
    }

    #[test]
    fn add_point_and_its_negation_is_infinity() {
        let g = Point::generator();
        let params = params();
        assert_eq!(g.add(&g.negate(&params), &params), Point::Infinity);
    }

    #[test]
    fn add_is_commutative() {
        let g = Point::generator();
        let params = params();
        let h = Point::scalar_mult(&IBig::from(7), &g, &params);
        assert_eq!(g.add(&h, &params), h.add(&g, &params));
    }

    #[test]
    fn add_is_associative() {
        let g = Point::generator();
        let params = params();
        let a = Point::scalar_mult(&IBig::from(2), &g, &params);
        let b = Point::scalar_mult(&IBig::from(3), &g, &params);
        let c = Point::scalar_mult(&IBig::from(5), &g, &params);
        assert_eq!(
            a.add(&b, &params).add(&c, &params),
            a.add(&b.add(&c, &params), &params)
        );
    }

    #[test]
    fn scalar_mult_is_linear() {
        let g = Point::generator();
        let params = params();
        let alpha = IBig::from(11);
        let beta = IBig::from(13);
        let sum = Point::scalar_mult(&(&alpha + &beta), &g, &params);
        let expected = Point::scalar_mult(&alpha, &g, &params)
            .add(&Point::scalar_mult(&beta, &g, &params), &params);
        assert_eq!(sum, expected);
    }

    #[test]
    fn scalar_mult_preserves_on_curve() {
        let g = Point::generator();
        let params = params();
        let k = IBig::from(123456789);
        assert!(Point::scalar_mult(&k, &g, &params).is_on_curve(&params));
    }
}
