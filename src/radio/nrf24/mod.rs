use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_ack;
pub(crate) mod bit_fields;
mod bus;
mod channel;
mod constants;
mod crc;
mod data_rate;
mod details;
mod fifo;
mod init;
mod irq;
mod payload;
mod pipe;
mod power;
mod radio;
mod status;
mod tx_power;
pub use bit_fields::{fields, Field};
pub use bus::{BusLock, MAX_PAYLOAD};
pub use constants::{commands, mnemonics, registers};

use crate::StatusFlags;

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error (the exchange failed or timed out).
    Spi(SPI),
    /// Represents a DigitalOutput error (from the CE pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
}

impl<SPI: Debug, DO: Debug> Display for Nrf24Error<SPI, DO> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Nrf24Error::Spi(e) => write!(f, "SPI transaction failed: {e:?}"),
            Nrf24Error::Gpo(e) => write!(f, "CE pin failed: {e:?}"),
            Nrf24Error::BinaryCorruption => write!(f, "corrupted register value"),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "Spi"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "Gpo"),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "BinaryCorruption"),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// It is the only handle to one radio. Apart from the payload width,
/// no register state is cached; every getter is a live read.
///
/// The STATUS byte clocked out by the latest exchange is kept only so that
/// [`last_status()`](fn@crate::radio::prelude::EsbStatus::last_status) can return it.
/// Each exchange overwrites it, and nothing in the driver reads it back.
pub struct Nrf24<SPI, DO, DELAY> {
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is recommended to use [`start_listening()`](fn@crate::radio::prelude::EsbRadio::start_listening),
    /// [`stop_listening()`](fn@crate::radio::prelude::EsbRadio::stop_listening), and
    /// [`transmit()`](fn@crate::radio::prelude::EsbRadio::transmit) instead.
    pub ce_pin: DO,
    _spi: SPI,
    _delay_impl: DELAY,
    _buf: [u8; MAX_PAYLOAD + 1],
    _status: StatusFlags,
    _payload_width: u8,
}

impl<SPI, DO, DELAY> Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Nrf24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter). Any transaction timeout is also
    /// the responsibility of that object.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24<SPI, DO, DELAY> {
        Nrf24 {
            ce_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _buf: [0u8; MAX_PAYLOAD + 1],
            _status: StatusFlags::from_bits(0),
            _payload_width: 32,
        }
    }

    /// Run `f` with exclusive access to the radio's SPI bus.
    ///
    /// The whole closure executes inside a [`critical_section`], so an interrupt
    /// handler that uses this radio cannot run between two of the closure's commands.
    /// The critical section is released when `f` returns, whether it succeeded or not.
    ///
    /// ```ignore
    /// // set bits 4 and 5 of RF_SETUP without any interruption
    /// radio.with_bus(|bus| bus.modify_register(registers::RF_SETUP, |v| v | 0x30))?;
    /// ```
    pub fn with_bus<T, F>(&mut self, f: F) -> Result<T, Nrf24Error<SPI::Error, DO::Error>>
    where
        F: FnOnce(&mut BusLock<'_, SPI>) -> Result<T, SPI::Error>,
    {
        let (spi, buf, status) = (&mut self._spi, &mut self._buf, &mut self._status);
        let result = critical_section::with(|cs| f(&mut BusLock::new(spi, buf, status, cs)));
        result.map_err(Nrf24Error::Spi)
    }

    /// Read the value of a single register.
    pub fn read_register(
        &mut self,
        register: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.with_bus(|bus| bus.read_register(register))
    }

    /// Overwrite the value of a single register.
    pub fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.with_bus(|bus| bus.write_register(register, value))
    }

    fn modify_fields(
        &mut self,
        changes: &[(Field, u8)],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.with_bus(|bus| bus.modify_fields(changes)).map(|_| ())
    }

    fn read_field(&mut self, field: Field) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.with_bus(|bus| bus.read_field(field))
    }

    fn read_flag(&mut self, field: Field) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.read_field(field)? == 1)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, Nrf24Error};
    use crate::{
        radio::nrf24::bit_fields::fields,
        spi_test_expects,
        test::{mk_radio, mk_register_radio, RegisterFile},
    };
    use embedded_hal::spi::ErrorKind;
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::{format, vec};

    #[test]
    fn error_display() {
        let err: Nrf24Error<ErrorKind, ()> = Nrf24Error::Spi(ErrorKind::Other);
        assert_eq!(format!("{err}"), "SPI transaction failed: Other");
        let err: Nrf24Error<ErrorKind, ()> = Nrf24Error::BinaryCorruption;
        assert_eq!(format!("{err}"), "corrupted register value");
    }

    #[test]
    fn read_flag() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Au8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Au8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.read_flag(fields::PWR_UP).unwrap());
        assert!(!radio.read_flag(fields::PRIM_RX).unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn empty_modify_is_a_no_op() {
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        radio.modify_fields(&[]).unwrap();
        assert!(radio._spi.log.is_empty());
        ce_pin.done();
    }

    #[test]
    fn spi_error_is_wrapped() {
        let mut file = RegisterFile::new();
        file.fail_on = Some(1);
        let (mut radio, mut ce_pin) = mk_register_radio(file);
        assert_eq!(
            radio.write_register(registers::RF_CH, 1),
            Err(Nrf24Error::Spi(ErrorKind::Other))
        );
        let status = radio.with_bus(|bus| bus.read_status()).unwrap();
        assert_eq!(status.into_bits(), 0);
        assert_eq!(radio._spi.log, vec![(commands::NOP, 1)]);
        ce_pin.done();
    }
}
