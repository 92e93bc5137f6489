use crate::{errors::DeployError, AMOUNT_DECIMALS, MAX_AMOUNT_DECIMALS};

/// Scale a whole-unit amount to its fixed-point representation with
/// `decimals` places. Overflow is an error, never a wrap.
pub fn parse_units(whole: i128, decimals: u32) -> Result<i128, DeployError> {
    if decimals > MAX_AMOUNT_DECIMALS {
        return Err(DeployError::AmountOverflow);
    }
    let scale = 10i128.checked_pow(decimals).ok_or(DeployError::AmountOverflow)?;
    whole.checked_mul(scale).ok_or(DeployError::AmountOverflow)
}

pub fn parse_ether(whole: i128) -> Result<i128, DeployError> {
    parse_units(whole, AMOUNT_DECIMALS)
}
