//! Builder API for ergonomic configuration construction.
//!
//! # Example
//!
//! ```rust
//! use guard_codec::model::builder::ConfigBuilder;
//!
//! let treasury = [7u8; 32];
//! let config = ConfigBuilder::new()
//!     .default_guards(|g| g.start_date(1662394820))
//!     .group("VIP", |g| g.sol_payment(500, treasury))
//!     .group("OGs", |g| g.sol_payment(1000, treasury).mint_limit(1, 3))
//!     .build();
//!
//! assert_eq!(config.groups().len(), 2);
//! ```

use crate::model::guards::{
    AddressGate, Allocation, AllowList, BotTax, EndDate, FreezeSolPayment, FreezeTokenPayment,
    Gatekeeper, Guard, MintLimit, NftBurn, NftGate, NftPayment, ProgramGate, RedeemedAmount,
    SolPayment, StartDate, ThirdPartySigner, Token2022Payment, TokenBurn, TokenGate, TokenPayment,
};
use crate::model::{Group, GroupLabel, GuardConfiguration, GuardSet, Pubkey};

/// Builder for a [`GuardConfiguration`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    default: GuardSet,
    groups: Vec<Group>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the default guard set.
    pub fn default_guards<F>(mut self, f: F) -> Self
    where
        F: FnOnce(GuardSetBuilder) -> GuardSetBuilder,
    {
        self.default = f(GuardSetBuilder::from(self.default)).build();
        self
    }

    /// Appends a group. Groups keep insertion order.
    pub fn group<F>(mut self, label: impl Into<GroupLabel>, f: F) -> Self
    where
        F: FnOnce(GuardSetBuilder) -> GuardSetBuilder,
    {
        self.groups.push(Group {
            label: label.into(),
            guards: f(GuardSetBuilder::new()).build(),
        });
        self
    }

    /// Builds the configuration. No groups yields `groups: None`.
    pub fn build(self) -> GuardConfiguration {
        GuardConfiguration {
            default: self.default,
            groups: if self.groups.is_empty() {
                None
            } else {
                Some(self.groups)
            },
        }
    }
}

/// Builder for a [`GuardSet`].
#[derive(Debug, Clone, Default)]
pub struct GuardSetBuilder {
    set: GuardSet,
}

impl From<GuardSet> for GuardSetBuilder {
    fn from(set: GuardSet) -> Self {
        Self { set }
    }
}

impl GuardSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables any guard payload.
    pub fn guard<G: Guard>(mut self, guard: G) -> Self {
        self.set.insert(guard);
        self
    }

    pub fn bot_tax(self, lamports: u64, last_instruction: bool) -> Self {
        self.guard(BotTax {
            lamports,
            last_instruction,
        })
    }

    pub fn sol_payment(self, lamports: u64, destination: Pubkey) -> Self {
        self.guard(SolPayment {
            lamports,
            destination,
        })
    }

    pub fn token_payment(self, amount: u64, mint: Pubkey, destination_ata: Pubkey) -> Self {
        self.guard(TokenPayment {
            amount,
            mint,
            destination_ata,
        })
    }

    pub fn start_date(self, date: i64) -> Self {
        self.guard(StartDate { date })
    }

    pub fn third_party_signer(self, signer_key: Pubkey) -> Self {
        self.guard(ThirdPartySigner { signer_key })
    }

    pub fn token_gate(self, amount: u64, mint: Pubkey) -> Self {
        self.guard(TokenGate { amount, mint })
    }

    pub fn gatekeeper(self, gatekeeper_network: Pubkey, expire_on_use: bool) -> Self {
        self.guard(Gatekeeper {
            gatekeeper_network,
            expire_on_use,
        })
    }

    pub fn end_date(self, date: i64) -> Self {
        self.guard(EndDate { date })
    }

    pub fn allow_list(self, merkle_root: [u8; 32]) -> Self {
        self.guard(AllowList { merkle_root })
    }

    pub fn mint_limit(self, id: u8, limit: u16) -> Self {
        self.guard(MintLimit { id, limit })
    }

    pub fn nft_payment(self, required_collection: Pubkey, destination: Pubkey) -> Self {
        self.guard(NftPayment {
            required_collection,
            destination,
        })
    }

    pub fn redeemed_amount(self, maximum: u64) -> Self {
        self.guard(RedeemedAmount { maximum })
    }

    pub fn address_gate(self, address: Pubkey) -> Self {
        self.guard(AddressGate { address })
    }

    pub fn nft_gate(self, required_collection: Pubkey) -> Self {
        self.guard(NftGate {
            required_collection,
        })
    }

    pub fn nft_burn(self, required_collection: Pubkey) -> Self {
        self.guard(NftBurn {
            required_collection,
        })
    }

    pub fn token_burn(self, amount: u64, mint: Pubkey) -> Self {
        self.guard(TokenBurn { amount, mint })
    }

    pub fn freeze_sol_payment(self, lamports: u64, destination: Pubkey) -> Self {
        self.guard(FreezeSolPayment {
            lamports,
            destination,
        })
    }

    pub fn freeze_token_payment(self, amount: u64, mint: Pubkey, destination_ata: Pubkey) -> Self {
        self.guard(FreezeTokenPayment {
            amount,
            mint,
            destination_ata,
        })
    }

    /// Enables ProgramGate. The list length is checked when encoding.
    pub fn program_gate(self, additional: impl IntoIterator<Item = Pubkey>) -> Self {
        self.guard(ProgramGate {
            additional: additional.into_iter().collect(),
        })
    }

    pub fn allocation(self, id: u8, limit: u32) -> Self {
        self.guard(Allocation { id, limit })
    }

    pub fn token2022_payment(self, amount: u64, mint: Pubkey, destination_ata: Pubkey) -> Self {
        self.guard(Token2022Payment {
            amount,
            mint,
            destination_ata,
        })
    }

    pub fn build(self) -> GuardSet {
        self.set
    }
}
