//! Rotates a sample point by a quarter turn about each axis.
//!
//! Run with `RUST_LOG=gyre=trace` to see the rotation events.

use gyre::prelude::*;
use std::f64::consts::FRAC_PI_2;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("gyre rotation sample");
    println!("====================");

    let point = Point3::new(1.0, 0.6, 0.4);
    let angle = FRAC_PI_2; // 90 degrees

    for label in ["x", "y", "z"] {
        let rotated = rotate(point, angle, label)?;
        println!(
            "Rotation about {}: [{:.6}, {:.6}, {:.6}]",
            label.to_uppercase(),
            rotated.x,
            rotated.y,
            rotated.z
        );
    }

    Ok(())
}
