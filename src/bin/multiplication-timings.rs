//! Timing harness for the multiplication strategies
//!
//! For each algorithm and operand sizes 2^1 through 2^14 digits, times
//! a batch of 1000 multiplications over freshly drawn random operand
//! pairs. Each batch runs on a worker thread under a wall-clock limit;
//! once a batch exceeds the limit, larger sizes are skipped for that
//! algorithm, since they can only be slower.
//!
//! Results are written to `execution-times.csv`: one row per operand
//! size, one column per algorithm, microseconds per batch, `null`
//! where the time limit was hit.

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use bignat::{Algorithm, BigNat};

const BATCH_SIZE: u32 = 1000;
// operand sizes 2^1 ..= 2^14 digits
const MAX_SIZE_EXPONENT: u32 = 14;
const OUTPUT_FILE: &str = "execution-times.csv";
const DEFAULT_BATCH_LIMIT: Duration = Duration::from_secs(30 * 60);

fn main() -> io::Result<()> {
    let limit = batch_limit();

    let results: Vec<Vec<u128>> = Algorithm::ALL
        .iter()
        .map(|&algorithm| run_algorithm(algorithm, limit))
        .collect();

    write_table(OUTPUT_FILE, &results)?;
    println!("wrote {}", OUTPUT_FILE);
    Ok(())
}

/// Per-batch wall-clock limit, overridable through
/// `BIGNAT_TIMING_BATCH_LIMIT_SECS`.
fn batch_limit() -> Duration {
    env::var("BIGNAT_TIMING_BATCH_LIMIT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_BATCH_LIMIT)
}

/// Time one batch of multiplications, returning elapsed microseconds.
fn time_batch(algorithm: Algorithm, size: usize, seed: u64) -> u128 {
    let mut rng = oorandom::Rand32::new(seed);

    let start = Instant::now();
    for _ in 0..BATCH_SIZE {
        let a = BigNat::random(size, &mut rng);
        let b = BigNat::random(size, &mut rng);
        algorithm.multiply(&a, &b);
    }
    start.elapsed().as_micros()
}

/// Run batches of increasing operand size until done or over budget.
fn run_algorithm(algorithm: Algorithm, limit: Duration) -> Vec<u128> {
    let mut timings = Vec::new();

    for exponent in 1..=MAX_SIZE_EXPONENT {
        let size = 1usize << exponent;
        println!("{}: size {}", algorithm.name(), size);

        let (sender, receiver) = mpsc::channel();
        let seed = u64::from(exponent);
        thread::spawn(move || {
            // the send fails only if the driver stopped waiting
            let _ = sender.send(time_batch(algorithm, size, seed));
        });

        match receiver.recv_timeout(limit) {
            Ok(elapsed) => timings.push(elapsed),
            Err(_) => {
                // the abandoned worker is left to finish on its own
                println!("{}: size {} took too long, stopping", algorithm.name(), size);
                break;
            }
        }
    }
    timings
}

fn write_table(path: &str, results: &[Vec<u128>]) -> io::Result<()> {
    let mut out = File::create(path)?;

    write!(out, "digits")?;
    for algorithm in Algorithm::ALL.iter() {
        write!(out, ",{}", algorithm.name())?;
    }
    writeln!(out)?;

    for row in 0..MAX_SIZE_EXPONENT as usize {
        write!(out, "{}", 1u32 << (row + 1))?;
        for timings in results {
            match timings.get(row) {
                Some(elapsed) => write!(out, ",{}", elapsed)?,
                None => write!(out, ",null")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
