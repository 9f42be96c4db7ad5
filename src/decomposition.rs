//! Lattice-based scalar decomposition (Gallant–Lambert–Vanstone).
//!
//! Given `α ∈ ℤ`, find `k₁, k₂` with `α ≡ k₁ + k₂·λ (mod Q)` and
//! `|kᵢ| ≲ √Q`, by running the extended Euclidean algorithm on `(Q, λ)` and
//! picking a short lattice basis from the remainder sequence it produces.
//!
//! Transliterated from `internal/glv/glv.go` (`DecomposeAlpha`) and
//! `internal/glv/utils.go` (`roundDiv`) in the Go program this system is
//! based on — the largest-index scan in step 2 below is the one subtlety
//! that determines whether the resulting basis vectors are actually short.

use ibig::{ibig, IBig};

struct EuclidStep {
    r: IBig,
    t: IBig,
}

/// Run the extended Euclidean algorithm on `(q, lambda)`, retaining the full
/// sequence of remainders `rᵢ` and Bézout coefficients `tᵢ` (with
/// `rᵢ = sᵢ·q + tᵢ·λ`; only `tᵢ` is needed downstream, so `sᵢ` is not kept).
fn extended_euclid_sequence(q: &IBig, lambda: &IBig) -> Vec<EuclidStep> {
    let mut seq = vec![
        EuclidStep { r: q.clone(), t: ibig!(0) },
        EuclidStep { r: lambda.clone(), t: ibig!(1) },
    ];

    loop {
        let last_r = seq[seq.len() - 1].r.clone();
        if last_r == ibig!(0) {
            break;
        }
        let prev_r = seq[seq.len() - 2].r.clone();
        let prev_t = seq[seq.len() - 2].t.clone();
        let last_t = seq[seq.len() - 1].t.clone();

        let quotient = &prev_r / &last_r;
        let r_next = &prev_r - &(&quotient * &last_r);
        let t_next = &prev_t - &(&quotient * &last_t);
        seq.push(EuclidStep { r: r_next, t: t_next });
    }
    seq
}

/// Round-half-away-from-zero division of `num` by `den` (`den > 0`).
fn round_div(num: &IBig, den: &IBig) -> IBig {
    let quotient = num / den;
    let remainder = num - &(&quotient * den);
    let half_den = den / &ibig!(2);
    let abs_remainder = if remainder < ibig!(0) { -&remainder } else { remainder.clone() };

    if abs_remainder >= half_den {
        if *num >= ibig!(0) {
            &quotient + &ibig!(1)
        } else {
            &quotient - &ibig!(1)
        }
    } else {
        quotient
    }
}

/// `(a₁, b₁)` and `(a₂, b₂)`: a short basis for the lattice
/// `{(a, b) ∈ ℤ² : a + b·λ ≡ 0 (mod q)}`, derived from the extended-Euclid
/// sequence on `(q, λ)`.
fn short_basis(q: &IBig, lambda: &IBig) -> ((IBig, IBig), (IBig, IBig)) {
    let seq = extended_euclid_sequence(q, lambda);

    // The LARGEST index ℓ with r_ℓ ≥ √q (not the first).
    let sqrt_q = isqrt(q);
    let mut l = 0usize;
    for (i, step) in seq.iter().enumerate() {
        if step.r >= sqrt_q {
            l = i;
        }
    }

    let v1 = (seq[l + 1].r.clone(), -&seq[l + 1].t);

    let norm_of = |r: &IBig, t: &IBig| -> IBig { &(r * r) + &(t * t) };
    let norm_l = norm_of(&seq[l].r, &seq[l].t);
    let v2 = if l + 2 < seq.len() {
        let norm_l2 = norm_of(&seq[l + 2].r, &seq[l + 2].t);
        if norm_l <= norm_l2 {
            (seq[l].r.clone(), -&seq[l].t)
        } else {
            (seq[l + 2].r.clone(), -&seq[l + 2].t)
        }
    } else {
        (seq[l].r.clone(), -&seq[l].t)
    };

    (v1, v2)
}

/// Integer square root via Newton's method (`n >= 0`).
fn isqrt(n: &IBig) -> IBig {
    if *n == ibig!(0) {
        return ibig!(0);
    }
    let mut x = n.clone();
    let mut y = &(&x + &ibig!(1)) / &ibig!(2);
    while y < x {
        x = y.clone();
        y = &(&x + &(n / &x)) / &ibig!(2);
    }
    x
}

/// Decompose `alpha` into `(k1, k2)` with `alpha ≡ k1 + k2·λ (mod q)`,
/// reduced into the canonical representatives `[0, q)`.
pub fn decompose_alpha(alpha: &IBig, lambda: &IBig, q: &IBig) -> (IBig, IBig) {
    let ((a1, b1), (a2, b2)) = short_basis(q, lambda);

    let c1 = round_div(&(&b2 * alpha), q);
    let c2 = round_div(&(&(-&b1) * alpha), q);

    let k1 = &(alpha - &(&c1 * &a1)) - &(&c2 * &a2);
    let k2 = -&(&(&c1 * &b1) + &(&c2 * &b2));

    (reduce(&k1, q), reduce(&k2, q))
}

fn reduce(a: &IBig, q: &IBig) -> IBig {
    let r = a % q;
    if r < ibig!(0) {
        r + q
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endomorphism::find_lambda_bn254;
    use crate::params::CurveParams;

    #[test]
    fn decomposition_is_sound_for_fixed_alpha() {
        let params = CurveParams::bn254();
        let lambda = find_lambda_bn254(&params.q);
        let alpha = IBig::from(1_234_567_890);
        let (k1, k2) = decompose_alpha(&alpha, &lambda, &params.q);

        let reconstructed = reduce(&(&k1 + &(&k2 * &lambda)), &params.q);
        assert_eq!(reconstructed, reduce(&alpha, &params.q));
    }

    #[test]
    fn decomposed_scalars_are_roughly_half_size() {
        let params = CurveParams::bn254();
        let lambda = find_lambda_bn254(&params.q);
        let alpha = IBig::from(1_234_567_890);
        let (k1, k2) = decompose_alpha(&alpha, &lambda, &params.q);

        let sqrt_q = isqrt(&params.q);
        // k1, k2 are canonicalized into [0, q); a short lattice vector
        // reduced mod q can sit near either end of that range, so bound the
        // distance to the nearer endpoint rather than the raw magnitude.
        let dist_to_zero = |k: &IBig| -> IBig {
            let from_top = &params.q - k;
            if k < &from_top { k.clone() } else { from_top }
        };
        let bound = &sqrt_q * &ibig!(4);
        assert!(dist_to_zero(&k1) < bound);
        assert!(dist_to_zero(&k2) < bound);
    }

    #[test]
    fn decomposition_is_sound_for_q_minus_one() {
        let params = CurveParams::bn254();
        let lambda = find_lambda_bn254(&params.q);
        let alpha = &params.q - &ibig!(1);
        let (k1, k2) = decompose_alpha(&alpha, &lambda, &params.q);
        let reconstructed = reduce(&(&k1 + &(&k2 * &lambda)), &params.q);
        assert_eq!(reconstructed, reduce(&alpha, &params.q));
    }

    #[test]
    fn round_div_rounds_half_away_from_zero() {
        assert_eq!(round_div(&IBig::from(5), &IBig::from(2)), IBig::from(3));
        assert_eq!(round_div(&IBig::from(-5), &IBig::from(2)), IBig::from(-3));
        assert_eq!(round_div(&IBig::from(3), &IBig::from(2)), IBig::from(2));
    }

    #[test]
    fn isqrt_matches_known_squares() {
        assert_eq!(isqrt(&IBig::from(100)), IBig::from(10));
        assert_eq!(isqrt(&IBig::from(99)), IBig::from(9));
        assert_eq!(isqrt(&IBig::from(0)), IBig::from(0));
    }
}
