//! Decodes a guard configuration from an account dump and prints it.
//!
//! Usage: `inspect_account <path> [header_len]`
//!
//! `header_len` is the number of account bytes preceding the configuration
//! (defaults to 0). Set `RUST_LOG=guard_codec=trace` to see per-set events.

use std::fs;

use guard_codec::model::{format_pubkey, GuardSet};
use guard_codec::util::format_timestamp;
use guard_codec::{deserialize_config_at, validate_config};
use tracing_subscriber::EnvFilter;

fn describe(set: &GuardSet) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(g) = &set.bot_tax {
        lines.push(format!("botTax: {} lamports, last instruction: {}", g.lamports, g.last_instruction));
    }
    if let Some(g) = &set.sol_payment {
        lines.push(format!("solPayment: {} lamports -> {}", g.lamports, format_pubkey(&g.destination)));
    }
    if let Some(g) = &set.token_payment {
        lines.push(format!(
            "tokenPayment: {} of {} -> {}",
            g.amount,
            format_pubkey(&g.mint),
            format_pubkey(&g.destination_ata)
        ));
    }
    if let Some(g) = &set.start_date {
        lines.push(format!("startDate: {}", format_timestamp(g.date)));
    }
    if let Some(g) = &set.third_party_signer {
        lines.push(format!("thirdPartySigner: {}", format_pubkey(&g.signer_key)));
    }
    if let Some(g) = &set.token_gate {
        lines.push(format!("tokenGate: {} of {}", g.amount, format_pubkey(&g.mint)));
    }
    if let Some(g) = &set.gatekeeper {
        lines.push(format!(
            "gatekeeper: network {}, expire on use: {}",
            format_pubkey(&g.gatekeeper_network),
            g.expire_on_use
        ));
    }
    if let Some(g) = &set.end_date {
        lines.push(format!("endDate: {}", format_timestamp(g.date)));
    }
    if let Some(g) = &set.allow_list {
        let root: String = g.merkle_root.iter().map(|b| format!("{:02x}", b)).collect();
        lines.push(format!("allowList: root {}", root));
    }
    if let Some(g) = &set.mint_limit {
        lines.push(format!("mintLimit: id {}, limit {}", g.id, g.limit));
    }
    if let Some(g) = &set.nft_payment {
        lines.push(format!(
            "nftPayment: collection {} -> {}",
            format_pubkey(&g.required_collection),
            format_pubkey(&g.destination)
        ));
    }
    if let Some(g) = &set.redeemed_amount {
        lines.push(format!("redeemedAmount: maximum {}", g.maximum));
    }
    if let Some(g) = &set.address_gate {
        lines.push(format!("addressGate: {}", format_pubkey(&g.address)));
    }
    if let Some(g) = &set.nft_gate {
        lines.push(format!("nftGate: collection {}", format_pubkey(&g.required_collection)));
    }
    if let Some(g) = &set.nft_burn {
        lines.push(format!("nftBurn: collection {}", format_pubkey(&g.required_collection)));
    }
    if let Some(g) = &set.token_burn {
        lines.push(format!("tokenBurn: {} of {}", g.amount, format_pubkey(&g.mint)));
    }
    if let Some(g) = &set.freeze_sol_payment {
        lines.push(format!(
            "freezeSolPayment: {} lamports -> {}",
            g.lamports,
            format_pubkey(&g.destination)
        ));
    }
    if let Some(g) = &set.freeze_token_payment {
        lines.push(format!(
            "freezeTokenPayment: {} of {} -> {}",
            g.amount,
            format_pubkey(&g.mint),
            format_pubkey(&g.destination_ata)
        ));
    }
    if let Some(g) = &set.program_gate {
        let programs: Vec<String> = g.additional.iter().map(format_pubkey).collect();
        lines.push(format!("programGate: [{}]", programs.join(", ")));
    }
    if let Some(g) = &set.allocation {
        lines.push(format!("allocation: id {}, limit {}", g.id, g.limit));
    }
    if let Some(g) = &set.token2022_payment {
        lines.push(format!(
            "token2022Payment: {} of {} -> {}",
            g.amount,
            format_pubkey(&g.mint),
            format_pubkey(&g.destination_ata)
        ));
    }
    lines
}

fn print_set(title: &str, set: &GuardSet) {
    println!("\n=== {} (mask {:#x}) ===", title, set.mask());
    let lines = describe(set);
    if lines.is_empty() {
        println!("  (no guards)");
    }
    for line in lines {
        println!("  {}", line);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().expect("usage: inspect_account <path> [header_len]");
    let header_len: usize = args
        .next()
        .map(|s| s.parse().expect("header_len must be a number"))
        .unwrap_or(0);

    let data = fs::read(&path).expect("Failed to read file");
    println!("Reading: {} ({} bytes, header {})", path, data.len(), header_len);

    let config = deserialize_config_at(&data, header_len).expect("Failed to decode");

    print_set("default", &config.default);
    for group in config.groups() {
        print_set(&format!("group {:?}", group.label.trimmed()), &group.guards);
    }

    match validate_config(&config) {
        Ok(()) => println!("\nValidation: ok"),
        Err(e) => println!("\nValidation: {}", e),
    }
}
