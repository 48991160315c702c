use super::{Nrf24, Nrf24Error};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::registers;
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::radio::prelude::{
    EsbAutoAck, EsbChannel, EsbCrc, EsbDataRate, EsbFifo, EsbPayload, EsbPipe, EsbPower, EsbStatus,
    EsbTxPower,
};

#[cfg(feature = "std")]
extern crate std;

/// Reorder an address (stored LSB first) into one printable number.
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
fn address_as_u64(address: &[u8; 5]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes[..5].copy_from_slice(address);
    u64::from_le_bytes(bytes)
}

impl<SPI, DO, DELAY> EsbDetails for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("TX Power__________________{}", self.get_tx_power()?);
        defmt::println!(
            "Continuous carrier________{=bool}",
            self.is_continuous_carrier()?
        );
        defmt::println!("CRC enabled_______________{=bool}", self.is_crc_enabled()?);
        defmt::println!("CRC width_________________{}", self.get_crc_width()?);
        defmt::println!("Address width_____________{}", self.get_address_width()?);
        defmt::println!(
            "Payload width_____________{=u8} bytes (RX_PW_P0 = {=u8})",
            self.get_payload_width(),
            self.get_rx_payload_width()?
        );
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            self.get_retransmit_delay()? as u16 * 250 + 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            self.get_retransmit_count()?
        );

        let irq_events = self.get_irq_events()?;
        let status = self.get_status()?;
        defmt::println!("IRQ on Data Ready_________{=bool}", irq_events.rx_dr());
        defmt::println!("    Data Ready triggered__{=bool}", status.rx_dr());
        defmt::println!("IRQ on Data Sent__________{=bool}", irq_events.tx_ds());
        defmt::println!("    Data Sent triggered___{=bool}", status.tx_ds());
        defmt::println!("IRQ on Max Retransmit_____{=bool}", irq_events.max_rt());
        defmt::println!("    Max Retransmit trig.__{=bool}", status.max_rt());

        defmt::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        defmt::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);

        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_register(registers::EN_AA)?
        );
        defmt::println!(
            "RX pipes enabled__________0b{=0..8}",
            self.read_register(registers::EN_RXADDR)?
        );
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self.is_rx()? { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered()?);

        let mut address = [0u8; 5];
        self.get_tx_address(&mut address)?;
        defmt::println!(
            "TX address________________{=u64:#012X}",
            address_as_u64(&address)
        );
        self.get_rx_address(&mut address)?;
        defmt::println!(
            "Pipe 0 RX address_________{=u64:#012X}",
            address_as_u64(&address)
        );
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("TX Power__________________{}", self.get_tx_power()?);
        std::println!(
            "Continuous carrier________{}",
            self.is_continuous_carrier()?
        );
        std::println!("CRC enabled_______________{}", self.is_crc_enabled()?);
        std::println!("CRC width_________________{}", self.get_crc_width()?);
        std::println!("Address width_____________{}", self.get_address_width()?);
        std::println!(
            "Payload width_____________{} bytes (RX_PW_P0 = {})",
            self.get_payload_width(),
            self.get_rx_payload_width()?
        );
        std::println!(
            "Auto retry delay__________{} microseconds",
            self.get_retransmit_delay()? as u16 * 250 + 250
        );
        std::println!(
            "Auto retry attempts_______{} maximum",
            self.get_retransmit_count()?
        );

        let irq_events = self.get_irq_events()?;
        let status = self.get_status()?;
        std::println!("IRQ on Data Ready_________{}", irq_events.rx_dr());
        std::println!("    Data Ready triggered__{}", status.rx_dr());
        std::println!("IRQ on Data Sent__________{}", irq_events.tx_ds());
        std::println!("    Data Sent triggered___{}", status.tx_ds());
        std::println!("IRQ on Max Retransmit_____{}", irq_events.max_rt());
        std::println!("    Max Retransmit trig.__{}", status.max_rt());

        std::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        std::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);

        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_register(registers::EN_AA)?
        );
        std::println!(
            "RX pipes enabled__________{:#010b}",
            self.read_register(registers::EN_RXADDR)?
        );
        std::println!(
            "Primary Mode______________{}X",
            if self.is_rx()? { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", self.is_powered()?);

        let mut address = [0u8; 5];
        self.get_tx_address(&mut address)?;
        std::println!(
            "TX address________________{:#012X}",
            address_as_u64(&address)
        );
        self.get_rx_address(&mut address)?;
        std::println!(
            "Pipe 0 RX address_________{:#012X}",
            address_as_u64(&address)
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::EsbDetails;

    #[cfg(not(feature = "std"))]
    #[test]
    fn print_nothing() {
        let mocks = crate::test::mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.print_details().is_ok());
        spi.done();
        ce_pin.done();
    }

    #[cfg(feature = "std")]
    #[test]
    fn print_from_register_file() {
        use crate::radio::nrf24::registers;
        use crate::test::{mk_register_radio, RegisterFile};

        let mut file = RegisterFile::new();
        file.regs[registers::SETUP_AW as usize] = 3;
        file.regs[registers::RF_CH as usize] = 76;
        file.wide[registers::TX_ADDR as usize] = *b"1Node";
        let (mut radio, mut ce_pin) = mk_register_radio(file);
        assert!(radio.print_details().is_ok());
        ce_pin.done();
    }
}
