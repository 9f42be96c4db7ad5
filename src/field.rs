//! Modular arithmetic over an explicit prime modulus.
//!
//! Generalizes the teacher's `P`-only `rem`/`invert` helpers to take the
//! modulus as a parameter, since both `𝔽_P` (curve arithmetic) and `ℤ_Q`
//! (scalar arithmetic) need the same operations in this crate.

use ibig::{ibig, IBig};

/// Reduce `a` into the canonical representative `[0, m)`.
pub fn modulo(a: &IBig, m: &IBig) -> IBig {
    let r = a % m;
    if r < ibig!(0) {
        r + m
    } else {
        r
    }
}

/// `(a + b) mod m`
pub fn add(a: &IBig, b: &IBig, m: &IBig) -> IBig {
    modulo(&(a + b), m)
}

/// `(a - b) mod m`, normalized into `[0, m)`.
pub fn sub(a: &IBig, b: &IBig, m: &IBig) -> IBig {
    modulo(&(a - b), m)
}

/// `(a * b) mod m`
pub fn mul(a: &IBig, b: &IBig, m: &IBig) -> IBig {
    modulo(&(a * b), m)
}

/// `(-a) mod m`
pub fn neg(a: &IBig, m: &IBig) -> IBig {
    modulo(&(-a), m)
}

/// `(a^e) mod m` via square-and-multiply, for non-negative exponent `e`.
pub fn exp(a: &IBig, e: &IBig, m: &IBig) -> IBig {
    assert!(*e >= ibig!(0), "field::exp requires a non-negative exponent");
    let mut base = modulo(a, m);
    let mut exponent = e.clone();
    let mut result = ibig!(1);
    while exponent > ibig!(0) {
        if &exponent % &ibig!(2) == ibig!(1) {
            result = mul(&result, &base, m);
        }
        base = mul(&base, &base, m);
        exponent = &exponent / &ibig!(2);
    }
    result
}

/// `a^(-1) mod m` via the extended Euclidean algorithm.
///
/// # Panics
///
/// Panics if `a mod m == 0`: inverting zero is a fatal precondition
/// violation, not a recoverable runtime condition.
pub fn inv(a: &IBig, m: &IBig) -> IBig {
    let mut t = modulo(a, m);
    assert!(t != ibig!(0), "modular inverse of 0 mod {} does not exist", m);

    let mut r0 = m.clone();
    let mut r1 = t.clone();
    let mut s0 = ibig!(0);
    let mut s1 = ibig!(1);

    while r1 != ibig!(0) {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        let s2 = &s0 - &q * &s1;
        r0 = r1;
        r1 = r2;
        s0 = s1;
        s1 = s2;
    }
    t = modulo(&s0, m);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> IBig {
        IBig::from(101)
    }

    #[test]
    fn add_wraps_around_modulus() {
        assert_eq!(add(&IBig::from(90), &IBig::from(20), &p()), IBig::from(9));
    }

    #[test]
    fn sub_normalizes_negative() {
        assert_eq!(sub(&IBig::from(5), &IBig::from(10), &p()), IBig::from(96));
    }

    #[test]
    fn neg_of_zero_is_zero() {
        assert_eq!(neg(&ibig!(0), &p()), ibig!(0));
    }

    #[test]
    fn inv_round_trips_with_mul() {
        let a = IBig::from(37);
        let inv_a = inv(&a, &p());
        assert_eq!(mul(&a, &inv_a, &p()), ibig!(1));
    }

    #[test]
    #[should_panic]
    fn inv_of_zero_panics() {
        inv(&ibig!(0), &p());
    }

    #[test]
    fn exp_matches_repeated_mul() {
        let a = IBig::from(7);
        let e = IBig::from(5);
        let direct = mul(&mul(&mul(&mul(&a, &a, &p()), &a, &p()), &a, &p()), &a, &p());
        assert_eq!(exp(&a, &e, &p()), direct);
    }
}
