//! Thin CLI wrapper around the BN254 GLV core.
//!
//! Reads three hex strings — a point's x and y coordinates and a scalar α —
//! validates the point is on-curve, then runs both classical double-and-add
//! and the GLV path and compares their results and timings. This binary is
//! not part of the specified core; it only has to feed well-formed inputs
//! into it and reject malformed ones before calling.

use bn254_glv::curve::Point;
use bn254_glv::{glv_multiply, CurveParams, GlvError};
use ibig::IBig;
use std::env;
use std::process::ExitCode;
use std::time::Instant;

fn parse_hex(label: &str, s: &str) -> Result<IBig, GlvError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    IBig::from_str_radix(s, 16).map_err(|e| GlvError::InvalidHex(format!("{}: {}", label, e)))
}

fn run(args: &[String]) -> Result<(), GlvError> {
    if args.len() != 3 {
        return Err(GlvError::InvalidHex(
            "usage: bn254-glv-cli <x-hex> <y-hex> <alpha-hex>".to_string(),
        ));
    }

    let x = parse_hex("x", &args[0])?;
    let y = parse_hex("y", &args[1])?;
    let alpha = parse_hex("alpha", &args[2])?;

    let params = CurveParams::bn254();
    let p = Point::new(x, y);
    if !p.is_on_curve(&params) {
        return Err(GlvError::InvalidPoint);
    }

    println!("=== BN254 GLV scalar multiplication ===\n");
    println!("P is on the curve.");

    println!("\nClassical double-and-add...");
    let start = Instant::now();
    let classical = Point::scalar_mult(&alpha, &p, &params);
    let classical_time = start.elapsed();
    println!("  done in {:?}", classical_time);

    println!("\nGLV endomorphism method...");
    let start = Instant::now();
    let glv = glv_multiply(&alpha, &p, &params)?;
    let glv_time = start.elapsed();
    println!("  done in {:?}", glv_time);

    match (&classical, &glv) {
        (Point::Affine { x: cx, y: cy }, Point::Affine { x: gx, y: gy }) => {
            println!("\n[α]P (classical): x = {:x}", cx);
            println!("                  y = {:x}", cy);
            println!("[α]P (GLV):       x = {:x}", gx);
            println!("                  y = {:x}", gy);
        }
        (Point::Infinity, Point::Infinity) => println!("\n[α]P is the point at infinity."),
        _ => println!("\n[α]P: classical and GLV results have different shapes!"),
    }

    if classical == glv {
        println!("\n[+] Classical and GLV results agree.");
    } else {
        println!("\n[-] Classical and GLV results DISAGREE!");
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {}", msg);
            ExitCode::FAILURE
        }
    }
}
