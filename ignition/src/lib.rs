#![no_std]

pub mod artifacts;
pub mod modules;

pub use artifacts::artifacts;
pub use modules::car_rental::car_rental_module;
