use crate::radio::{prelude::EsbPayload, Nrf24, Nrf24Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::fields, commands, registers, MAX_PAYLOAD};

impl<SPI, DO, DELAY> EsbPayload for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadErrorType> {
        let width = width.clamp(1, MAX_PAYLOAD as u8);
        self.write_register(registers::RX_PW_P0, width)?;
        self._payload_width = width;
        Ok(())
    }

    fn get_payload_width(&self) -> u8 {
        self._payload_width
    }

    fn set_rx_payload_width(&mut self, width: u8) -> Result<(), Self::PayloadErrorType> {
        self.write_register(registers::RX_PW_P0, fields::RX_PW.insert(0, width))
    }

    fn get_rx_payload_width(&mut self) -> Result<u8, Self::PayloadErrorType> {
        self.read_field(fields::RX_PW)
    }

    fn read_rx_payload(&mut self, buf: &mut [u8]) -> Result<(), Self::PayloadErrorType> {
        let width = self._payload_width as usize;
        let mut payload = [0u8; MAX_PAYLOAD];
        self.with_bus(|bus| bus.send_command(commands::R_RX_PAYLOAD, &[], &mut payload[..width]))?;
        let len = buf.len().min(width);
        buf[..len].copy_from_slice(&payload[..len]);
        Ok(())
    }

    fn write_tx_payload(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType> {
        let width = self._payload_width as usize;
        let len = buf.len().min(width);
        let mut payload = [0u8; MAX_PAYLOAD];
        payload[..len].copy_from_slice(&buf[..len]);
        self.with_bus(|bus| bus.send_command(commands::W_TX_PAYLOAD, &payload[..width], &mut []))?;
        Ok(())
    }
}
