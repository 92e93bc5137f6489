#![no_std]

#[cfg(test)]
mod test;

use deploy_lib::{ContractArtifact, ParamKind};
use soroban_sdk::{contract, contractimpl, contracttype, Env, Symbol, Vec};

pub const CONTRACT_NAME: &str = "CarRental";

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Terms,
}

/// Terms fixed at construction. Amounts are in the smallest token unit,
/// durations in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentalTerms {
    pub rental_amount: i128,
    pub security_deposit: i128,
    pub rental_duration: u64,
    pub payment_frequency: u64,
}

#[contract]
pub struct CarRental;

#[contractimpl]
impl CarRental {
    pub fn __constructor(
        env: Env,
        rental_amount: i128,
        security_deposit: i128,
        rental_duration: u64,
        payment_frequency: u64,
    ) {
        let terms = RentalTerms {
            rental_amount,
            security_deposit,
            rental_duration,
            payment_frequency,
        };
        env.storage().instance().set(&DataKey::Terms, &terms);

        env.events().publish(
            (Symbol::new(&env, "rental_configured"),),
            (rental_amount, security_deposit, rental_duration, payment_frequency),
        );
    }

    pub fn terms(env: Env) -> RentalTerms {
        env.storage()
            .instance()
            .get(&DataKey::Terms)
            .unwrap_or_else(|| panic!("Contract not constructed"))
    }
}

/// Constructor signature, in declaration order, for deployment resolvers
pub fn artifact(env: &Env) -> ContractArtifact {
    ContractArtifact {
        name: Symbol::new(env, CONTRACT_NAME),
        inputs: Vec::from_array(
            env,
            [
                ParamKind::Amount,
                ParamKind::Amount,
                ParamKind::Duration,
                ParamKind::Duration,
            ],
        ),
    }
}
