//! Benchmark for guard configuration serialization.
//!
//! Builds synthetic configurations with increasing group counts and times
//! encoding, decoding and size computation.
//!
//! Usage: `bench-guards [iterations]` (default 1000). Set `RUST_LOG` to see
//! codec events; `debug` is very chatty here.

use std::hint::black_box;
use std::time::{Duration, Instant};

use guard_codec::model::format_pubkey;
use guard_codec::{
    config_size, deserialize_config, serialize_config, ConfigBuilder, GuardConfiguration,
    GuardSetBuilder, Pubkey,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const GROUP_COUNTS: [usize; 5] = [0, 1, 10, 100, 1000];

/// Deterministic key from a seed.
fn make_key(seed: u32) -> Pubkey {
    let mut key = [0u8; 32];
    for (i, chunk) in key.chunks_mut(4).enumerate() {
        chunk.copy_from_slice(&seed.wrapping_mul(2654435761).wrapping_add(i as u32).to_le_bytes());
    }
    key
}

/// Guards for group `i`, cycling through a few realistic mixes.
fn group_guards(i: usize, g: GuardSetBuilder) -> GuardSetBuilder {
    let n = i as u32;
    match i % 4 {
        0 => g.sol_payment(1_000_000 + n as u64, make_key(n)).mint_limit(i as u8, 3),
        1 => g
            .token_payment(50, make_key(n), make_key(n + 1))
            .start_date(1_700_000_000 + n as i64)
            .end_date(1_800_000_000),
        2 => g
            .allow_list([i as u8; 32])
            .bot_tax(10_000_000, true)
            .program_gate([make_key(n), make_key(n + 2)]),
        _ => g
            .nft_gate(make_key(n))
            .freeze_sol_payment(5_000, make_key(n + 3))
            .allocation(i as u8, 100),
    }
}

fn build_config(groups: usize) -> GuardConfiguration {
    let mut builder = ConfigBuilder::new()
        .default_guards(|g| g.bot_tax(10_000_000, true).start_date(1_662_394_820));
    for i in 0..groups {
        // labels must fit six bytes
        builder = builder.group(format!("g{}", i), |g| group_guards(i, g));
    }
    builder.build()
}

fn per_op(total: Duration, iterations: u32) -> Duration {
    total / iterations.max(1)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let iterations: u32 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1000);

    info!(iterations, "starting guard codec benchmark");
    println!("Sample destination key: {}", format_pubkey(&make_key(0)));

    println!(
        "\n{:>7} {:>10} {:>12} {:>12} {:>12} {:>10}",
        "groups", "bytes", "size()", "encode", "decode", "MB/s"
    );

    for &groups in GROUP_COUNTS.iter() {
        let config = build_config(groups);
        let bytes = serialize_config(&config).expect("Failed to encode");
        assert_eq!(bytes.len(), config_size(&config));
        let decoded = deserialize_config(&bytes).expect("Failed to decode");
        assert_eq!(decoded, config.clone().normalized());

        let start = Instant::now();
        for _ in 0..iterations {
            black_box(config_size(black_box(&config)));
        }
        let size_time = start.elapsed();

        let start = Instant::now();
        for _ in 0..iterations {
            black_box(serialize_config(black_box(&config)).expect("Failed to encode"));
        }
        let encode_time = start.elapsed();

        let start = Instant::now();
        for _ in 0..iterations {
            black_box(deserialize_config(black_box(&bytes)).expect("Failed to decode"));
        }
        let decode_time = start.elapsed();

        let throughput = (bytes.len() as f64 * iterations as f64)
            / decode_time.as_secs_f64().max(f64::EPSILON)
            / 1_000_000.0;

        println!(
            "{:>7} {:>10} {:>12?} {:>12?} {:>12?} {:>10.1}",
            groups,
            bytes.len(),
            per_op(size_time, iterations),
            per_op(encode_time, iterations),
            per_op(decode_time, iterations),
            throughput
        );
    }

    println!("\n=== Summary ===");
    println!("Iterations per configuration: {}", iterations);
    println!("MB/s is decode throughput.");
}
