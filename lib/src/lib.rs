#![no_std]

pub mod deploy;
pub mod descriptor;
pub mod errors;
pub mod types;
pub mod units;
pub mod validation;

pub use deploy::{deploy, ArtifactResolver, Submitter};
pub use descriptor::{build_module, ModuleBuilder};
pub use errors::DeployError;
pub use types::*;
pub use units::{parse_ether, parse_units};

// Limits
pub const MAX_NAME_LENGTH: u32 = 32; // Soroban symbol limit
pub const MAX_PARAMETERS: u32 = 32;
pub const MAX_CONSTRUCTOR_ARGS: u32 = 16;

// Amounts are fixed-point with 18 decimals, matching ether denominated defaults
pub const AMOUNT_DECIMALS: u32 = 18;
pub const MAX_AMOUNT_DECIMALS: u32 = 38; // 10^38 still fits in i128

// Time
pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_DAY: u64 = 86400;
