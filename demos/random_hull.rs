//! Computes the convex hull of a random point set and prints it.
//!
//! Run with `cargo run --example random_hull --features rand [-- <count> [seed]]`.
//! Set `RUST_LOG=debug` (or `trace`) to see the hull construction steps.

use std::{str::FromStr, time::Instant};

use anyhow::{anyhow, bail, Context, Result};
use quickhull2d::{compute_hull, random::random_point_set};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

const USAGE: &str = "usage: random_hull [count] [seed]";

/// Parses an optional positional argument, falling back to `default` when it is absent.
fn parse_arg<T>(arg: Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match arg {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid {name} {arg:?}; {USAGE}")),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let count: usize = parse_arg(args.next(), "count", 20)?;
    let seed: u64 = parse_arg(args.next(), "seed", 0)?;
    if args.next().is_some() {
        bail!("too many arguments; {USAGE}");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let set = random_point_set(&mut rng, count, 0..=100)?;

    println!("Solving...");
    let start = Instant::now();
    let hull = compute_hull(&set).map_err(|err| anyhow!("{err}; {USAGE}"))?;
    let elapsed = start.elapsed();

    println!();
    println!("Convex Hull Points:");
    for point in hull.points_ref() {
        println!("({}, {})", point.x, point.y);
    }
    println!();
    println!("Area: {}", hull.area());
    println!("Solved in {} seconds.", elapsed.as_secs_f64());

    Ok(())
}
