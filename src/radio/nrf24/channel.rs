use super::bit_fields::fields;
use crate::radio::{prelude::EsbChannel, Nrf24, Nrf24Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbChannel for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The channel replaces the previous one; bit 7 of RF_CH is preserved.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.modify_fields(&[(fields::RF_CH, channel)])
    }

    /// See also [`Nrf24::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_field(fields::RF_CH)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbChannel;
    use crate::radio::nrf24::{commands, registers};
    use crate::{
        spi_test_expects,
        test::{mk_radio, mk_register_radio, RegisterFile},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_channel() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 0x80u8]),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 0xFFu8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_channel(0xFF).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_channel() {
        let spi_expectations = spi_test_expects![
            // get the RF_CH register value
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 76u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_channel().unwrap(), 76u8);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn channel_overwrites() {
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        radio.set_channel(40).unwrap();
        assert_eq!(radio._spi.regs[registers::RF_CH as usize], 0x28);
        radio.set_channel(1).unwrap();
        assert_eq!(radio._spi.regs[registers::RF_CH as usize], 0x01);
        ce_pin.done();
    }
}
