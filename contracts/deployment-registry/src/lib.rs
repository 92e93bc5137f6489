#![no_std]

mod storage;
#[cfg(test)]
mod test;

use deploy_lib::{DeployError, DeploymentResult};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

use storage::*;

/// Holds each module's deployment result. A module id is recorded once and
/// never rewritten, so downstream modules can rely on the addresses.
#[contract]
pub struct DeploymentRegistry;

#[contractimpl]
impl DeploymentRegistry {
    pub fn init_contract(env: Env, admin: Address) -> Result<(), DeployError> {
        if has_admin(&env) {
            return Err(DeployError::AlreadyInitialized);
        }

        admin.require_auth();
        set_admin(&env, &admin);
        Ok(())
    }

    pub fn record_result(
        env: Env,
        caller: Address,
        result: DeploymentResult,
    ) -> Result<(), DeployError> {
        caller.require_auth();
        require_admin(&env, &caller)?;

        if has_result(&env, &result.module_id) {
            return Err(DeployError::ResultAlreadyRecorded);
        }

        set_result(&env, &result);
        append_module(&env, &result.module_id);

        env.events().publish(
            (Symbol::new(&env, "result_recorded"),),
            (result.module_id, result.instances.len()),
        );
        Ok(())
    }

    pub fn get_result(env: Env, module_id: Symbol) -> Option<DeploymentResult> {
        storage::get_result(&env, &module_id)
    }

    pub fn get_instance(env: Env, module_id: Symbol, name: Symbol) -> Result<Address, DeployError> {
        storage::get_result(&env, &module_id)
            .and_then(|result| result.instances.get(name))
            .ok_or(DeployError::UnknownResult)
    }

    pub fn modules(env: Env) -> Vec<Symbol> {
        get_modules(&env)
    }
}
