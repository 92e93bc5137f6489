#![cfg(test)]

use super::*;
use soroban_sdk::Env;

#[test]
fn test_constructor_stores_terms() {
    let env = Env::default();
    let contract_id = env.register(CarRental, (10i128, 100i128, 86400u64, 3600u64));
    let client = CarRentalClient::new(&env, &contract_id);

    let terms = client.terms();
    assert_eq!(terms.rental_amount, 10);
    assert_eq!(terms.security_deposit, 100);
    assert_eq!(terms.rental_duration, 86400);
    assert_eq!(terms.payment_frequency, 3600);
}

#[test]
fn test_artifact_matches_constructor() {
    let env = Env::default();
    let artifact = artifact(&env);

    assert_eq!(artifact.name, Symbol::new(&env, "CarRental"));
    assert_eq!(artifact.arity(), 4);
    assert_eq!(artifact.inputs.get(0), Some(ParamKind::Amount));
    assert_eq!(artifact.inputs.get(3), Some(ParamKind::Duration));
}
