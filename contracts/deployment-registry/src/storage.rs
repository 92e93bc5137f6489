use deploy_lib::{DeployError, DeploymentResult};
use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address allowed to record results
    Admin,
    /// Module ids in recording order
    Modules,
    /// Result by module id
    Result(Symbol),
}

/* ---------------- ADMIN ---------------- */

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), DeployError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(DeployError::NotInitialized)?;
    if caller != &admin {
        return Err(DeployError::Unauthorized);
    }
    Ok(())
}

/* ---------------- RESULTS ---------------- */

pub fn has_result(env: &Env, module_id: &Symbol) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Result(module_id.clone()))
}

pub fn set_result(env: &Env, result: &DeploymentResult) {
    env.storage()
        .persistent()
        .set(&DataKey::Result(result.module_id.clone()), result);
}

pub fn get_result(env: &Env, module_id: &Symbol) -> Option<DeploymentResult> {
    env.storage()
        .persistent()
        .get(&DataKey::Result(module_id.clone()))
}

pub fn get_modules(env: &Env) -> Vec<Symbol> {
    env.storage()
        .instance()
        .get(&DataKey::Modules)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn append_module(env: &Env, module_id: &Symbol) {
    let mut modules = get_modules(env);
    modules.push_back(module_id.clone());
    env.storage().instance().set(&DataKey::Modules, &modules);
}
