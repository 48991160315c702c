//! A module to encapsulate all things related to radio operation.
pub mod prelude;

pub(crate) mod nrf24;
pub use nrf24::{
    commands, fields, mnemonics, registers, BusLock, Field, Nrf24, Nrf24Error, MAX_PAYLOAD,
};

mod config;
pub use config::RadioConfig;
