//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::types::{AddressWidth, CrcWidth, DataRate, FifoState, StatusFlags, TxPower};

use super::RadioConfig;

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// The default channel is 76 (2400 + 76 = 2.476 GHz).
    ///
    /// Only the 7 LSBs of `channel` are used.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Set the radio's data rate setting.
    ///
    /// The rate is split across two (non-adjacent) bits of the RF_SETUP register.
    /// Both are updated in one read-modify-write.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the radio's data rate setting.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the power amplifier
/// for an ESB capable transceiver.
pub trait EsbTxPower {
    type TxPowerErrorType;

    /// Set the radio's transmit power.
    ///
    /// See [`TxPower`] for the effective output of each level.
    fn set_tx_power(&mut self, power: TxPower) -> Result<(), Self::TxPowerErrorType>;

    /// Get the radio's transmit power.
    fn get_tx_power(&mut self) -> Result<TxPower, Self::TxPowerErrorType>;

    /// Enable or disable the continuous carrier test mode.
    ///
    /// While enabled, the radio outputs an unmodulated carrier whenever it is in active TX mode.
    fn set_continuous_carrier(&mut self, enable: bool) -> Result<(), Self::TxPowerErrorType>;

    /// Is the continuous carrier test mode enabled?
    fn is_continuous_carrier(&mut self) -> Result<bool, Self::TxPowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrc {
    type CrcErrorType;

    /// Enable or disable the CRC check of every packet.
    ///
    /// This does not change the configured [`CrcWidth`].
    fn set_crc_enabled(&mut self, enable: bool) -> Result<(), Self::CrcErrorType>;

    /// Is the CRC check enabled?
    fn is_crc_enabled(&mut self) -> Result<bool, Self::CrcErrorType>;

    /// Set the number of bytes used for the CRC.
    ///
    /// This does not enable or disable the CRC check.
    fn set_crc_width(&mut self, width: CrcWidth) -> Result<(), Self::CrcErrorType>;

    /// Get the number of bytes used for the CRC.
    fn get_crc_width(&mut self) -> Result<CrcWidth, Self::CrcErrorType>;
}

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
pub trait EsbPipe {
    type PipeErrorType;

    /// Enable a specified `pipe` for receiving data when radio is in RX mode.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    /// All other pipes keep their current state.
    fn enable_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Disable a specified `pipe` from receiving data when radio is in RX mode.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn disable_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Is the specified `pipe` enabled for receiving?
    ///
    /// Returns `false` for any `pipe` not in range [0, 5].
    fn is_rx_pipe_enabled(&mut self, pipe: u8) -> Result<bool, Self::PipeErrorType>;

    /// Set the 5 byte RX address of pipe 0.
    ///
    /// The address is written LSB first. Only the first
    /// [`get_address_width()`](fn@EsbPipe::get_address_width) bytes are used by the radio.
    fn set_rx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Get the 5 byte RX address of pipe 0.
    fn get_rx_address(&mut self, address: &mut [u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Set the 5 byte TX address.
    ///
    /// To receive auto-ack packets, pipe 0 needs the same RX address.
    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Get the 5 byte TX address.
    fn get_tx_address(&mut self, address: &mut [u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Set the address width (applies to all pipes).
    fn set_address_width(&mut self, width: AddressWidth) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address width (applied to all pipes).
    fn get_address_width(&mut self) -> Result<AddressWidth, Self::PipeErrorType>;
}

/// A trait to represent manipulation of the automatic acknowledgement feature
/// for an ESB capable transceiver.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable the auto-ack feature for the specified `pipe`.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    /// All other pipes keep their current state.
    fn enable_auto_ack(&mut self, pipe: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Disable the auto-ack feature for the specified `pipe`.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn disable_auto_ack(&mut self, pipe: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Is the auto-ack feature enabled for the specified `pipe`?
    fn is_auto_ack_enabled(&mut self, pipe: u8) -> Result<bool, Self::AutoAckErrorType>;

    /// Set the maximum number of retransmit attempts for each payload.
    ///
    /// Only the 4 LSBs of `count` are used. `0` disables automatic retransmission.
    fn set_retransmit_count(&mut self, count: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Get the maximum number of retransmit attempts for each payload.
    fn get_retransmit_count(&mut self) -> Result<u8, Self::AutoAckErrorType>;

    /// Set the delay between retransmit attempts.
    ///
    /// The effective delay is `delay * 250 + 250` microseconds.
    /// Only the 4 LSBs of `delay` are used.
    fn set_retransmit_delay(&mut self, delay: u8) -> Result<(), Self::AutoAckErrorType>;

    /// Get the delay between retransmit attempts.
    ///
    /// See [`EsbAutoAck::set_retransmit_delay()`] about the value's units.
    fn get_retransmit_delay(&mut self) -> Result<u8, Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the power state and operating mode
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power the radio up (`true`) or down (`false`).
    ///
    /// The radio needs about 1.5 milliseconds after powering up
    /// before it can enter an active RX or TX mode.
    fn set_power(&mut self, enable: bool) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;

    /// Select the primary receiver role (`true`) or primary transmitter role (`false`).
    ///
    /// This only sets the PRIM_RX bit. The radio is not active until the CE pin is high.
    fn set_rx_mode(&mut self, enable: bool) -> Result<(), Self::PowerErrorType>;

    /// Is the radio configured as a primary receiver?
    fn is_rx(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`] and the IRQ pin's
/// event mask for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Allow (`true`) or mask (`false`) the "RX data ready" event on the IRQ pin.
    fn set_rx_ready_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType>;

    /// Allow (`true`) or mask (`false`) the "TX data sent" event on the IRQ pin.
    fn set_tx_sent_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType>;

    /// Allow (`true`) or mask (`false`) the "max retransmits reached" event on the IRQ pin.
    fn set_max_retransmit_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType>;

    /// Configure which status flags trigger the radio's IRQ pin.
    ///
    /// Set any event of [`StatusFlags`] to `false` to have the
    /// IRQ pin ignore the corresponding event.
    /// By default, all events are enabled and will trigger the IRQ pin,
    /// a behavior equivalent to `set_irq_events(StatusFlags::new())`.
    fn set_irq_events(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Get which status flags trigger the radio's IRQ pin.
    fn get_irq_events(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Get a fresh [`StatusFlags`] snapshot with a 1 byte NOP command.
    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Get the STATUS byte that was clocked out by the latest SPI transaction.
    ///
    /// This is not a poll. It may be stale if the radio raised events since that
    /// transaction; use [`EsbStatus::get_status()`] for a fresh value.
    fn last_status(&self) -> StatusFlags;

    /// Clear all three IRQ events, regardless of which ones are asserted.
    fn clear_interrupts(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// Callbacks for the events found by [`EsbIrq::handle_irq_with()`].
///
/// All methods do nothing by default.
pub trait IrqListener {
    /// A payload arrived on `pipe` (`7` if the RX FIFO was already empty).
    fn on_rx_ready(&mut self, pipe: u8) {
        let _ = pipe;
    }

    /// A payload was transmitted (and acknowledged, if auto-ack is enabled).
    fn on_tx_sent(&mut self) {}

    /// A payload was not acknowledged after the maximum number of retransmits.
    fn on_max_retransmits(&mut self) {}
}

/// A trait to represent the interrupt handler
/// for an ESB capable transceiver.
pub trait EsbIrq {
    type IrqErrorType;

    /// Service the radio's IRQ pin.
    ///
    /// Reads the STATUS register and writes back every asserted event flag (which
    /// clears them). Both commands run in one critical section.
    ///
    /// Returns the [`StatusFlags`] that were read. Fetching a received payload is left
    /// to the caller.
    fn handle_irq(&mut self) -> Result<StatusFlags, Self::IrqErrorType>;

    /// Same as [`EsbIrq::handle_irq()`], then notify `listener` of each event
    /// that was cleared.
    ///
    /// The listener is called after the bus is released, so it may use the radio.
    fn handle_irq_with<L: IrqListener>(
        &mut self,
        listener: &mut L,
    ) -> Result<StatusFlags, Self::IrqErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent manipulation of static payload widths
/// and payload transfers for an ESB capable transceiver.
pub trait EsbPayload {
    type PayloadErrorType;

    /// Set the payload width used by this driver and by pipe 0.
    ///
    /// `width` is clamped to the range [1, 32].
    fn set_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadErrorType>;

    /// Get the payload width used by [`EsbPayload::read_rx_payload()`] and
    /// [`EsbPayload::write_tx_payload()`].
    fn get_payload_width(&self) -> u8;

    /// Overwrite the RX_PW_P0 register.
    ///
    /// Only the 6 LSBs of `width` are used. Unlike [`EsbPayload::set_payload_width()`],
    /// this does not change the width used for payload transfers.
    fn set_rx_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadErrorType>;

    /// Read the RX_PW_P0 register.
    fn get_rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType>;

    /// Read the payload at the top of the RX FIFO into `buf`.
    ///
    /// The SPI transaction always moves [`EsbPayload::get_payload_width()`] bytes.
    /// If `buf` is shorter, the remaining bytes are discarded; if it is longer,
    /// the excess is left untouched.
    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType>;

    /// Put `buf` into the TX FIFO.
    ///
    /// The SPI transaction always moves [`EsbPayload::get_payload_width()`] bytes.
    /// A shorter `buf` is padded with zeros; a longer `buf` is truncated.
    fn write_tx_payload(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType>;
}

/// A trait to represent the CE-driven operating modes
/// of an ESB capable transceiver.
pub trait EsbRadio: EsbPower + EsbPayload {
    type RadioErrorType;

    /// Put the radio into active RX mode.
    ///
    /// Sets the PRIM_RX bit, then drives the CE pin high.
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Leave active RX mode.
    ///
    /// Drives the CE pin low, then clears the PRIM_RX bit.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put `buf` into the TX FIFO and pulse the CE pin to send it.
    ///
    /// The radio must be powered up in TX mode. This does not wait for the
    /// transmission to finish; use the IRQ events to find out how it ended.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;
}

/// A trait to represent the whole-radio configuration
/// of an ESB capable transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio with the [`RadioConfig::default()`] settings.
    ///
    /// This waits 5 milliseconds for the radio to settle after a power-on-reset.
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// The CE pin is driven low, all IRQ events are cleared and both FIFOs
    /// are flushed before the configuration is written.
    ///
    /// See [`RadioConfig`] for more detail.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent debug output
/// for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This function uses [`defmt::println`](https://docs.rs/defmt/latest/defmt/macro.println.html)
    /// if the `defmt` feature is enabled (for bare-metal targets).
    /// Otherwise, [`std::println`](https://doc.rust-lang.org/std/macro.println.html)
    /// is used if the `std` feature is enabled.
    /// Without either feature, this does nothing.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
