use super::{bit_fields::fields, registers};
use crate::radio::{prelude::EsbPipe, Nrf24, Nrf24Error};
use crate::AddressWidth;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPipe for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn enable_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.modify_fields(&[(fields::en_rxaddr(pipe), 1)])
    }

    fn disable_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.modify_fields(&[(fields::en_rxaddr(pipe), 0)])
    }

    fn is_rx_pipe_enabled(&mut self, pipe: u8) -> Result<bool, Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(false);
        }
        self.read_flag(fields::en_rxaddr(pipe))
    }

    fn set_rx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.with_bus(|bus| bus.write_registers(registers::RX_ADDR_P0, address))
    }

    fn get_rx_address(&mut self, address: &mut [u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.with_bus(|bus| bus.read_registers(registers::RX_ADDR_P0, address))
    }

    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.with_bus(|bus| bus.write_registers(registers::TX_ADDR, address))
    }

    fn get_tx_address(&mut self, address: &mut [u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.with_bus(|bus| bus.read_registers(registers::TX_ADDR, address))
    }

    fn set_address_width(&mut self, width: AddressWidth) -> Result<(), Self::PipeErrorType> {
        self.modify_fields(&[(fields::AW, width.into_bits())])
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] for the illegal setting `0b00`.
    fn get_address_width(&mut self) -> Result<AddressWidth, Self::PipeErrorType> {
        AddressWidth::from_bits(self.read_field(fields::AW)?).ok_or(Nrf24Error::BinaryCorruption)
    }
}
