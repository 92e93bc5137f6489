use soroban_sdk::Vec;

use crate::{errors::DeployError, ParamKind, ParamValue, MAX_NAME_LENGTH};

/// Names must be valid Soroban symbols: 1..=32 chars of `[A-Za-z0-9_]`.
pub fn validate_name(name: &str) -> Result<(), DeployError> {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH as usize {
        return Err(DeployError::InvalidName);
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        return Err(DeployError::InvalidName);
    }
    Ok(())
}

/// Override values must carry the same kind as the declared default.
pub fn validate_override(
    default: &ParamValue,
    override_value: &ParamValue,
) -> Result<(), DeployError> {
    if default.kind() != override_value.kind() {
        return Err(DeployError::ParameterTypeMismatch);
    }
    Ok(())
}

/// Positional check of resolved arguments against a constructor signature.
pub fn validate_constructor_args(
    inputs: &Vec<ParamKind>,
    args: &Vec<ParamValue>,
) -> Result<(), DeployError> {
    if inputs.len() != args.len() {
        return Err(DeployError::ArityMismatch);
    }

    for i in 0..args.len() {
        let expected = inputs.get(i).ok_or(DeployError::ArityMismatch)?;
        let actual = args.get(i).ok_or(DeployError::ArityMismatch)?;
        if actual.kind() != expected {
            return Err(DeployError::ArgumentTypeMismatch);
        }
    }

    Ok(())
}
