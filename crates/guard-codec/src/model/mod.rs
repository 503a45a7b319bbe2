//! Data model types for guard configurations.
//!
//! - Public keys
//! - The guard catalog (kinds, bit indices, widths)
//! - Guard payloads
//! - Guard sets, groups and the top-level configuration
//! - Builders (ergonomic construction)

pub mod builder;
pub mod catalog;
pub mod config;
pub mod guard_set;
pub mod guards;
pub mod pubkey;

pub use builder::{ConfigBuilder, GuardSetBuilder};
pub use catalog::{width_of, CatalogEntry, GuardKind, CATALOG};
pub use config::{Group, GroupLabel, GuardConfiguration};
pub use guard_set::GuardSet;
pub use guards::{
    AddressGate, Allocation, AllowList, BotTax, EndDate, FreezeSolPayment, FreezeTokenPayment,
    Gatekeeper, Guard, MintLimit, NftBurn, NftGate, NftPayment, ProgramGate, RedeemedAmount,
    SolPayment, StartDate, ThirdPartySigner, Token2022Payment, TokenBurn, TokenGate, TokenPayment,
};
pub use pubkey::{format_pubkey, parse_pubkey, Pubkey, DEFAULT_PUBKEY};
