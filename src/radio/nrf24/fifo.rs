use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbFifo, Nrf24, Nrf24Error};
use crate::FifoState;

use super::{bit_fields::fields, commands, registers};

impl<SPI, DO, DELAY> EsbFifo for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.with_bus(|bus| bus.send_command(commands::FLUSH_RX, &[], &mut []))?;
        Ok(())
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.with_bus(|bus| bus.send_command(commands::FLUSH_TX, &[], &mut []))?;
        Ok(())
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let field = if about_tx {
            fields::TX_FIFO
        } else {
            fields::RX_FIFO
        };
        let fifo_status = self.read_register(registers::FIFO_STATUS)?;
        Ok(FifoState::from_bits(field.extract(fifo_status)))
    }
}
