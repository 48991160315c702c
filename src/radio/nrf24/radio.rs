use super::{Nrf24, Nrf24Error};
use crate::radio::prelude::{EsbPayload, EsbPower, EsbRadio};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbRadio for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.set_rx_mode(true)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.set_rx_mode(false)
    }

    /// <div class="warning">
    ///
    /// This blocks for the 10 microsecond CE pulse that starts the transmission.
    ///
    /// </div>
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        self.write_tx_payload(buf)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(10);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }
}
