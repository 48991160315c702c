use super::bit_fields::fields;
use crate::radio::{prelude::EsbTxPower, Nrf24, Nrf24Error};
use crate::TxPower;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbTxPower for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type TxPowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_tx_power(&mut self, power: TxPower) -> Result<(), Self::TxPowerErrorType> {
        self.modify_fields(&[(fields::RF_PWR, power.into_bits())])
    }

    fn get_tx_power(&mut self) -> Result<TxPower, Self::TxPowerErrorType> {
        Ok(TxPower::from_bits(self.read_field(fields::RF_PWR)?))
    }

    fn set_continuous_carrier(&mut self, enable: bool) -> Result<(), Self::TxPowerErrorType> {
        self.modify_fields(&[(fields::CONT_WAVE, enable as u8)])
    }

    fn is_continuous_carrier(&mut self) -> Result<bool, Self::TxPowerErrorType> {
        self.read_flag(fields::CONT_WAVE)
    }
}
