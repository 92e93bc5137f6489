use deploy_lib::ContractArtifact;
use soroban_sdk::{Env, Map, Symbol};

/// Every contract the modules in this crate instantiate, keyed by name.
pub fn artifacts(env: &Env) -> Map<Symbol, ContractArtifact> {
    let mut artifacts = Map::new(env);
    let car_rental = car_rental::artifact(env);
    artifacts.set(car_rental.name.clone(), car_rental);
    artifacts
}
