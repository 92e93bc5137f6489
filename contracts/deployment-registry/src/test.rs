#![cfg(test)]

use super::*;
use deploy_lib::DeploymentResult;
use soroban_sdk::{testutils::Address as _, Address, Env, Map, Symbol};

fn setup(env: &Env) -> (DeploymentRegistryClient<'_>, Address) {
    env.mock_all_auths();
    let contract_id = env.register(DeploymentRegistry, ());
    let client = DeploymentRegistryClient::new(env, &contract_id);
    let admin = Address::generate(env);
    client.init_contract(&admin);
    (client, admin)
}

fn result_for(env: &Env, module_id: &str, name: &str, instance: &Address) -> DeploymentResult {
    let mut instances = Map::new(env);
    instances.set(Symbol::new(env, name), instance.clone());
    DeploymentResult {
        module_id: Symbol::new(env, module_id),
        instances,
    }
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    let res = client.try_init_contract(&admin);
    assert!(matches!(res, Err(Ok(DeployError::AlreadyInitialized))));
}

#[test]
fn test_record_and_lookup() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let instance = Address::generate(&env);

    client.record_result(&admin, &result_for(&env, "CarRentalModule", "carRental", &instance));

    let module_id = Symbol::new(&env, "CarRentalModule");
    let stored = client.get_result(&module_id).unwrap();
    assert_eq!(stored.instances.len(), 1);
    assert_eq!(
        client.get_instance(&module_id, &Symbol::new(&env, "carRental")),
        instance
    );
    assert_eq!(client.modules().len(), 1);
    assert_eq!(client.modules().get(0), Some(module_id));
}

#[test]
fn test_result_is_write_once() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.record_result(&admin, &result_for(&env, "CarRentalModule", "carRental", &first));
    let res =
        client.try_record_result(&admin, &result_for(&env, "CarRentalModule", "carRental", &second));
    assert!(matches!(res, Err(Ok(DeployError::ResultAlreadyRecorded))));

    // Original mapping untouched
    assert_eq!(
        client.get_instance(
            &Symbol::new(&env, "CarRentalModule"),
            &Symbol::new(&env, "carRental")
        ),
        first
    );
    assert_eq!(client.modules().len(), 1);
}

#[test]
fn test_only_admin_records() {
    let env = Env::default();
    let (client, _admin) = setup(&env);
    let stranger = Address::generate(&env);
    let instance = Address::generate(&env);

    let res = client.try_record_result(
        &stranger,
        &result_for(&env, "CarRentalModule", "carRental", &instance),
    );
    assert!(matches!(res, Err(Ok(DeployError::Unauthorized))));
    assert!(client.get_result(&Symbol::new(&env, "CarRentalModule")).is_none());
}

#[test]
fn test_record_before_init_fails() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(DeploymentRegistry, ());
    let client = DeploymentRegistryClient::new(&env, &contract_id);
    let caller = Address::generate(&env);
    let instance = Address::generate(&env);

    let res = client.try_record_result(
        &caller,
        &result_for(&env, "CarRentalModule", "carRental", &instance),
    );
    assert!(matches!(res, Err(Ok(DeployError::NotInitialized))));
}

#[test]
fn test_unknown_instance() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let instance = Address::generate(&env);
    client.record_result(&admin, &result_for(&env, "CarRentalModule", "carRental", &instance));

    let missing_name = client.try_get_instance(
        &Symbol::new(&env, "CarRentalModule"),
        &Symbol::new(&env, "other"),
    );
    assert!(matches!(missing_name, Err(Ok(DeployError::UnknownResult))));

    let missing_module =
        client.try_get_instance(&Symbol::new(&env, "OtherModule"), &Symbol::new(&env, "carRental"));
    assert!(matches!(missing_module, Err(Ok(DeployError::UnknownResult))));
}
