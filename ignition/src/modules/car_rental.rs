use car_rental::CONTRACT_NAME as CAR_RENTAL_CONTRACT;
use deploy_lib::{build_module, parse_ether, DeployError, DeploymentDescriptor, ParamValue};
use soroban_sdk::{Env, Map, Symbol};

pub const MODULE_ID: &str = "CarRentalModule";
pub const RESULT_NAME: &str = "carRental";

pub const RENTAL_AMOUNT: &str = "rentalAmount";
pub const SECURITY_DEPOSIT: &str = "securityDeposit";
pub const RENTAL_DURATION: &str = "rentalDuration";
pub const PAYMENT_FREQUENCY: &str = "paymentFrequency";

// Defaults: amounts in whole ether, durations in seconds
pub const DEFAULT_RENTAL_AMOUNT: i128 = 10;
pub const DEFAULT_SECURITY_DEPOSIT: i128 = 100;
pub const DEFAULT_RENTAL_DURATION: u64 = deploy_lib::SECONDS_PER_DAY;
pub const DEFAULT_PAYMENT_FREQUENCY: u64 = deploy_lib::SECONDS_PER_HOUR;

/// One CarRental instance, constructed with
/// `(rentalAmount, securityDeposit, rentalDuration, paymentFrequency)` and
/// returned as `carRental`.
pub fn car_rental_module(
    env: &Env,
    overrides: Map<Symbol, ParamValue>,
) -> Result<DeploymentDescriptor, DeployError> {
    build_module(env, MODULE_ID, overrides, |m| {
        let rental_amount = m.declare_parameter(
            RENTAL_AMOUNT,
            ParamValue::Amount(parse_ether(DEFAULT_RENTAL_AMOUNT)?),
        )?;
        let security_deposit = m.declare_parameter(
            SECURITY_DEPOSIT,
            ParamValue::Amount(parse_ether(DEFAULT_SECURITY_DEPOSIT)?),
        )?;
        let rental_duration =
            m.declare_parameter(RENTAL_DURATION, ParamValue::Duration(DEFAULT_RENTAL_DURATION))?;
        let payment_frequency = m.declare_parameter(
            PAYMENT_FREQUENCY,
            ParamValue::Duration(DEFAULT_PAYMENT_FREQUENCY),
        )?;

        m.declare_instantiation(
            CAR_RENTAL_CONTRACT,
            &[
                rental_amount,
                security_deposit,
                rental_duration,
                payment_frequency,
            ],
        )?;
        m.declare_result(RESULT_NAME)
    })
}
