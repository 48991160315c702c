use super::{commands, registers, Nrf24, Nrf24Error};
use crate::{
    radio::{prelude::EsbInit, RadioConfig},
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbInit for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`Nrf24::new()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        // The radio needs up to 4.5 ms after a power-on-reset before
        // configuration bits reliably stick.
        self._delay_impl.delay_ms(5);
        self.with_config(&RadioConfig::default())
    }

    /// Every register is overwritten (not read-modify-write) in one critical section.
    ///
    /// Returns [`Nrf24Error::BinaryCorruption`] if the CONFIG register does not read
    /// back as written, which usually means the radio is absent or miswired.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;

        let config_reg = self.with_bus(|bus| {
            bus.clear_events(StatusFlags::new())?;
            bus.send_command(commands::FLUSH_RX, &[], &mut [])?;
            bus.send_command(commands::FLUSH_TX, &[], &mut [])?;

            bus.write_register(registers::SETUP_AW, config.setup_aw)?;
            bus.write_register(registers::SETUP_RETR, config.setup_retr)?;
            bus.write_register(registers::RF_CH, config.channel())?;
            bus.write_register(registers::RF_SETUP, config.rf_setup)?;
            bus.write_register(registers::EN_AA, config.auto_ack())?;
            bus.write_register(registers::EN_RXADDR, config.rx_pipes())?;
            bus.write_registers(registers::RX_ADDR_P0, &config.rx_address())?;
            bus.write_registers(registers::TX_ADDR, &config.tx_address())?;
            bus.write_register(registers::RX_PW_P0, config.payload_width())?;

            // CONFIG last, so powering up happens with everything else in place
            bus.write_register(registers::CONFIG, config.config_reg)?;
            bus.read_register(registers::CONFIG)
        })?;
        if config_reg != config.config_reg {
            return Err(Nrf24Error::BinaryCorruption);
        }
        self._payload_width = config.payload_width();
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, EsbInit};
    use crate::radio::{
        nrf24::mnemonics,
        prelude::{EsbChannel, EsbPayload},
        Nrf24, Nrf24Error, RadioConfig,
    };
    use crate::{
        spi_test_expects,
        test::{mk_radio, RegisterFile},
        AddressWidth, DataRate,
    };
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    fn init_parametrized(corrupted_binary: bool) {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let mut address = vec![0xE7u8; 6];
        address[0] = registers::RX_ADDR_P0 | commands::W_REGISTER;
        let mut tx_address = vec![0xE7u8; 6];
        tx_address[0] = registers::TX_ADDR | commands::W_REGISTER;

        let spi_expectations = spi_test_expects![
            // clear_interrupts()
            (
                vec![
                    registers::STATUS | commands::W_REGISTER,
                    mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT,
                ],
                vec![0xEu8, 0u8],
            ),
            // flush_rx()
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            // flush_tx()
            (vec![commands::FLUSH_TX], vec![0xEu8]),
            (
                vec![registers::SETUP_AW | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 76u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::RF_SETUP | commands::W_REGISTER, 0x06u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_AA | commands::W_REGISTER, 0x3Fu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::EN_RXADDR | commands::W_REGISTER, 3u8],
                vec![0xEu8, 0u8],
            ),
            (address, vec![0u8; 6]),
            (tx_address, vec![0u8; 6]),
            (
                vec![registers::RX_PW_P0 | commands::W_REGISTER, 32u8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::CONFIG | commands::W_REGISTER, 0x0Cu8],
                vec![0xEu8, 0u8],
            ),
            (
                vec![registers::CONFIG, 0u8],
                vec![0xEu8, if corrupted_binary { 0xFFu8 } else { 0x0Cu8 }],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let result = radio.init();
        if corrupted_binary {
            assert_eq!(result, Err(Nrf24Error::BinaryCorruption));
        } else {
            assert!(result.is_ok());
        }
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn init_bin_corrupt() {
        init_parametrized(true);
    }

    #[test]
    fn init() {
        init_parametrized(false);
    }

    #[test]
    fn with_config_writes_every_register() {
        let mut file = RegisterFile::new();
        file.regs[registers::RF_CH as usize] = 0x7F;
        let mut ce_pin = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let mut radio = Nrf24::new(ce_pin.clone(), file, NoopDelay);
        let config = RadioConfig::default()
            .with_channel(2)
            .with_data_rate(DataRate::Kbps250)
            .with_address_width(AddressWidth::Bytes4)
            .with_payload_width(8)
            .with_rx_pipe(2, true)
            .with_auto_ack(0, false)
            .with_tx_address(*b"2Node")
            .with_power(true)
            .with_rx_mode(true);
        radio.with_config(&config).unwrap();
        let regs = radio._spi.regs;
        assert_eq!(regs[registers::CONFIG as usize], 0x0F);
        assert_eq!(regs[registers::RF_CH as usize], 2);
        assert_eq!(regs[registers::RF_SETUP as usize], 0x26);
        assert_eq!(regs[registers::SETUP_AW as usize], 2);
        assert_eq!(regs[registers::EN_AA as usize], 0x3E);
        assert_eq!(regs[registers::EN_RXADDR as usize], 0x07);
        assert_eq!(regs[registers::RX_PW_P0 as usize], 8);
        assert_eq!(&radio._spi.wide[registers::TX_ADDR as usize], b"2Node");
        assert_eq!(radio.get_payload_width(), 8);
        assert_eq!(radio.get_channel().unwrap(), 2);
        ce_pin.done();
    }
}
