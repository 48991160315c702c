use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Nrf24, Nrf24Error},
    types::StatusFlags,
};

use super::{bit_fields::fields, registers};

impl<SPI, DO, DELAY> EsbStatus for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_rx_ready_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType> {
        self.modify_fields(&[(fields::MASK_RX_DR, !enable as u8)])
    }

    fn set_tx_sent_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType> {
        self.modify_fields(&[(fields::MASK_TX_DS, !enable as u8)])
    }

    fn set_max_retransmit_irq(&mut self, enable: bool) -> Result<(), Self::StatusErrorType> {
        self.modify_fields(&[(fields::MASK_MAX_RT, !enable as u8)])
    }

    fn set_irq_events(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.modify_fields(&[
            (fields::MASK_RX_DR, !flags.rx_dr() as u8),
            (fields::MASK_TX_DS, !flags.tx_ds() as u8),
            (fields::MASK_MAX_RT, !flags.max_rt() as u8),
        ])
    }

    fn get_irq_events(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        let config = self.read_register(registers::CONFIG)?;
        Ok(StatusFlags::from_bits(!config & StatusFlags::IRQ_MASK))
    }

    fn get_status(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.with_bus(|bus| bus.read_status())
    }

    fn last_status(&self) -> StatusFlags {
        self._status
    }

    fn clear_interrupts(&mut self) -> Result<(), Self::StatusErrorType> {
        self.with_bus(|bus| bus.clear_events(StatusFlags::new()))
    }
}
