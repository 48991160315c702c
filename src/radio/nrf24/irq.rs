use crate::radio::{
    prelude::{EsbIrq, IrqListener},
    Nrf24, Nrf24Error,
};
use crate::StatusFlags;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbIrq for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type IrqErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn handle_irq(&mut self) -> Result<StatusFlags, Self::IrqErrorType> {
        let status = self.with_bus(|bus| {
            let status = bus.read_status()?;
            // write-1-to-clear: only the asserted events are written back
            bus.clear_events(status)?;
            Ok(status)
        })?;
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::trace!("IRQ serviced: {}", status);
        Ok(status)
    }

    fn handle_irq_with<L: IrqListener>(
        &mut self,
        listener: &mut L,
    ) -> Result<StatusFlags, Self::IrqErrorType> {
        let status = self.handle_irq()?;
        if status.rx_dr() {
            listener.on_rx_ready(status.rx_pipe());
        }
        if status.tx_ds() {
            listener.on_tx_sent();
        }
        if status.max_rt() {
            listener.on_max_retransmits();
        }
        Ok(status)
    }
}
