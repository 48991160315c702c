use super::bit_fields::fields;
use crate::radio::{prelude::EsbPower, Nrf24, Nrf24Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPower for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_power(&mut self, enable: bool) -> Result<(), Self::PowerErrorType> {
        self.modify_fields(&[(fields::PWR_UP, enable as u8)])
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.read_flag(fields::PWR_UP)
    }

    fn set_rx_mode(&mut self, enable: bool) -> Result<(), Self::PowerErrorType> {
        self.modify_fields(&[(fields::PRIM_RX, enable as u8)])
    }

    fn is_rx(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.read_flag(fields::PRIM_RX)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbPower;
    use crate::radio::nrf24::{commands, registers};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn power_up_and_down() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Cu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Eu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Eu8]),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x0Eu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Cu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_power(true).unwrap();
        assert!(radio.is_powered().unwrap());
        radio.set_power(false).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn rx_mode() {
        let spi_expectations = spi_test_expects![
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Eu8]),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x7Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::CONFIG, 0u8], vec![0xEu8, 0x7Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_rx_mode(true).unwrap();
        assert!(radio.is_rx().unwrap());
        spi.done();
        ce_pin.done();
    }
}
