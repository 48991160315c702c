use super::bit_fields::fields;
use super::registers;
use crate::radio::{prelude::EsbDataRate, Nrf24, Nrf24Error};
use crate::DataRate;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbDataRate for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let bits = data_rate.into_bits();
        self.modify_fields(&[
            (fields::RF_DR_LOW, bits & 1),
            (fields::RF_DR_HIGH, bits >> 1),
        ])
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if both rate bits are set (reserved).
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        let low = fields::RF_DR_LOW.extract(rf_setup);
        let high = fields::RF_DR_HIGH.extract(rf_setup);
        let bits = low | (high << 1);
        DataRate::from_bits(bits).ok_or(Nrf24Error::BinaryCorruption)
    }
}
