//! Simultaneous multi-scalar multiplication ("Shamir's trick").
//!
//! Computes `[k1]P1 + [k2]P2` in a single joint double-and-add loop, using a
//! dense `2ʷ × 2ʷ` precomputed table. This is the routine the GLV
//! orchestrator (`glv.rs`) uses to combine `[k1]P` and `[k2]φ(P)` into one
//! pass instead of two independent scalar multiplications.
//!
//! Both scalars are normalized into `[0, Q)` up front and the result is
//! never negated afterwards — two independently-reduced mod-Q
//! representatives already encode the correct point, so no sign-tracking is
//! needed (see DESIGN.md).

use crate::curve::Point;
use crate::error::GlvError;
use crate::field;
use crate::params::CurveParams;
use ibig::{ibig, IBig};

/// `[k1]p1 + [k2]p2` via a windowed joint double-and-add with window width
/// `w` (typically 2 or 3).
pub fn simul_mult(
    k1: &IBig,
    k2: &IBig,
    p1: &Point,
    p2: &Point,
    w: u32,
    params: &CurveParams,
) -> Result<Point, GlvError> {
    if w == 0 {
        return Err(GlvError::InvalidWindowWidth(w as i64));
    }

    let k1 = field::modulo(k1, &params.q);
    let k2 = field::modulo(k2, &params.q);
    if k1 == ibig!(0) && k2 == ibig!(0) {
        return Ok(Point::Infinity);
    }

    let table = build_table(p1, p2, w, params);

    let digits1 = window_digits(&k1, w);
    let digits2 = window_digits(&k2, w);
    let d = digits1.len().max(digits2.len());

    let mut result = Point::Infinity;
    for i in (0..d).rev() {
        for _ in 0..w {
            result = result.double(params);
        }
        let digit1 = digits1.get(i).copied().unwrap_or(0);
        let digit2 = digits2.get(i).copied().unwrap_or(0);
        if digit1 != 0 || digit2 != 0 {
            let entry = &table[table_index(digit1, digit2, w)];
            result = result.add(entry, params);
        }
    }
    Ok(result)
}

/// `T[i, j] = [i]p1 + [j]p2` for `0 <= i, j < 2^w`, flattened row-major
/// (`i * 2^w + j`). The `(0, 0)` entry is the point at infinity and is
/// never consulted by the main loop, but storing it keeps indexing direct.
fn build_table(p1: &Point, p2: &Point, w: u32, params: &CurveParams) -> Vec<Point> {
    let size = 1usize << w;
    let mut table = vec![Point::Infinity; size * size];

    // T[i, 0] = [i]p1 by repeated addition.
    let mut row_base = Point::Infinity;
    for i in 0..size {
        table[table_index(i as u32, 0, w)] = row_base.clone();
        row_base = row_base.add(p1, params);
    }
    // T[i, j] = T[i, 0] + [j]p2, each row built by repeated addition of p2.
    for i in 0..size {
        let mut entry = table[table_index(i as u32, 0, w)].clone();
        for j in 0..size {
            table[table_index(i as u32, j as u32, w)] = entry.clone();
            entry = entry.add(p2, params);
        }
    }
    table
}

fn table_index(i: u32, j: u32, w: u32) -> usize {
    (i as usize) * (1usize << w) + (j as usize)
}

/// Expand `k` into base-`2^w` digits, least-significant digit first.
fn window_digits(k: &IBig, w: u32) -> Vec<u32> {
    let mut digits = Vec::new();
    let mut remaining = k.clone();
    while remaining != ibig!(0) {
        let mut digit = 0u32;
        for bit in 0..w {
            if (&remaining & 1_u8) != 0 {
                digit |= 1 << bit;
            }
            use std::ops::ShrAssign;
            remaining.shr_assign(1);
        }
        digits.push(digit);
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}
