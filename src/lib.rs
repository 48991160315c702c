//! A register-level driver for the nRF24L01 2.4 GHz packet-radio transceiver.
//!
//! The driver talks to the radio over an [`embedded_hal::spi::SpiDevice`]. The
//! `SpiDevice` implementation owns the chip-select line, so every command sent to the
//! radio is framed as a single SPI transaction. Every transaction (and every
//! read-modify-write sequence) runs inside a [`critical_section`], so an interrupt
//! handler that also uses the radio can never split a command in half.
//!
//! ## Basic API
//!
//! - [`Nrf24::new()`](fn@crate::radio::Nrf24::new)
//! - [`Nrf24::init()`](radio/struct.Nrf24.html#method.init)
//! - [`Nrf24::with_config()`](radio/struct.Nrf24.html#method.with_config)
//! - [`Nrf24::start_listening()`](radio/struct.Nrf24.html#method.start_listening)
//! - [`Nrf24::stop_listening()`](radio/struct.Nrf24.html#method.stop_listening)
//! - [`Nrf24::transmit()`](radio/struct.Nrf24.html#method.transmit)
//! - [`Nrf24::read_rx_payload()`](radio/struct.Nrf24.html#method.read_rx_payload)
//! - [`Nrf24::write_tx_payload()`](radio/struct.Nrf24.html#method.write_tx_payload)
//! - [`Nrf24::handle_irq()`](radio/struct.Nrf24.html#method.handle_irq)
//!
//! ## Configuration API
//!
//! - [`Nrf24::set_channel()`](radio/struct.Nrf24.html#method.set_channel)
//! - [`Nrf24::set_data_rate()`](radio/struct.Nrf24.html#method.set_data_rate)
//! - [`Nrf24::set_tx_power()`](radio/struct.Nrf24.html#method.set_tx_power)
//! - [`Nrf24::set_continuous_carrier()`](radio/struct.Nrf24.html#method.set_continuous_carrier)
//! - [`Nrf24::set_crc_enabled()`](radio/struct.Nrf24.html#method.set_crc_enabled)
//! - [`Nrf24::set_crc_width()`](radio/struct.Nrf24.html#method.set_crc_width)
//! - [`Nrf24::set_address_width()`](radio/struct.Nrf24.html#method.set_address_width)
//! - [`Nrf24::set_retransmit_count()`](radio/struct.Nrf24.html#method.set_retransmit_count)
//! - [`Nrf24::set_retransmit_delay()`](radio/struct.Nrf24.html#method.set_retransmit_delay)
//! - [`Nrf24::enable_rx_pipe()`](radio/struct.Nrf24.html#method.enable_rx_pipe)
//! - [`Nrf24::enable_auto_ack()`](radio/struct.Nrf24.html#method.enable_auto_ack)
//! - [`Nrf24::set_rx_address()`](radio/struct.Nrf24.html#method.set_rx_address)
//! - [`Nrf24::set_tx_address()`](radio/struct.Nrf24.html#method.set_tx_address)
//! - [`Nrf24::set_rx_payload_width()`](radio/struct.Nrf24.html#method.set_rx_payload_width)
//! - [`Nrf24::set_power()`](radio/struct.Nrf24.html#method.set_power)
//! - [`Nrf24::set_rx_mode()`](radio/struct.Nrf24.html#method.set_rx_mode)
//! - [`Nrf24::set_rx_ready_irq()`](radio/struct.Nrf24.html#method.set_rx_ready_irq)
//! - [`Nrf24::set_tx_sent_irq()`](radio/struct.Nrf24.html#method.set_tx_sent_irq)
//! - [`Nrf24::set_max_retransmit_irq()`](radio/struct.Nrf24.html#method.set_max_retransmit_irq)
//!
//! ## Low level API
//!
//! - [`Nrf24::with_bus()`](fn@crate::radio::Nrf24::with_bus)
//! - [`BusLock`](struct@crate::radio::BusLock)
//!
#![no_std]

mod types;
pub use types::{AddressWidth, CrcWidth, DataRate, FifoState, StatusFlags, TxPower};
pub mod radio;
