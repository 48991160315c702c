use super::bit_fields::fields;
use crate::radio::{prelude::EsbCrc, Nrf24, Nrf24Error};
use crate::CrcWidth;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbCrc for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type CrcErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_crc_enabled(&mut self, enable: bool) -> Result<(), Self::CrcErrorType> {
        self.modify_fields(&[(fields::EN_CRC, enable as u8)])
    }

    fn is_crc_enabled(&mut self) -> Result<bool, Self::CrcErrorType> {
        self.read_flag(fields::EN_CRC)
    }

    fn set_crc_width(&mut self, width: CrcWidth) -> Result<(), Self::CrcErrorType> {
        self.modify_fields(&[(fields::CRCO, width.into_bits())])
    }

    fn get_crc_width(&mut self) -> Result<CrcWidth, Self::CrcErrorType> {
        Ok(CrcWidth::from_bits(self.read_field(fields::CRCO)?))
    }
}
