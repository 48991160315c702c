use super::bit_fields::fields;
use crate::radio::{prelude::EsbAutoAck, Nrf24, Nrf24Error};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbAutoAck for Nrf24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn enable_auto_ack(&mut self, pipe: u8) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.modify_fields(&[(fields::en_aa(pipe), 1)])
    }

    fn disable_auto_ack(&mut self, pipe: u8) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.modify_fields(&[(fields::en_aa(pipe), 0)])
    }

    fn is_auto_ack_enabled(&mut self, pipe: u8) -> Result<bool, Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(false);
        }
        self.read_flag(fields::en_aa(pipe))
    }

    fn set_retransmit_count(&mut self, count: u8) -> Result<(), Self::AutoAckErrorType> {
        self.modify_fields(&[(fields::ARC, count)])
    }

    fn get_retransmit_count(&mut self) -> Result<u8, Self::AutoAckErrorType> {
        self.read_field(fields::ARC)
    }

    fn set_retransmit_delay(&mut self, delay: u8) -> Result<(), Self::AutoAckErrorType> {
        self.modify_fields(&[(fields::ARD, delay)])
    }

    fn get_retransmit_delay(&mut self) -> Result<u8, Self::AutoAckErrorType> {
        self.read_field(fields::ARD)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::EsbAutoAck;
    use crate::radio::nrf24::{commands, registers};
    use crate::{
        spi_test_expects,
        test::{mk_radio, mk_register_radio, RegisterFile},
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn enable_each_pipe() {
        for pipe in 0..=5u8 {
            for initial in [0x00u8, 0xC0, 0x15, 0x2A, 0x3F] {
                let mut file = RegisterFile::new();
                file.regs[registers::EN_AA as usize] = initial;
                let (mut radio, mut ce_pin) = mk_register_radio(file);
                radio.enable_auto_ack(pipe).unwrap();
                assert_eq!(
                    radio._spi.regs[registers::EN_AA as usize],
                    initial | (1 << pipe)
                );
                assert!(radio.is_auto_ack_enabled(pipe).unwrap());
                radio.disable_auto_ack(pipe).unwrap();
                assert_eq!(
                    radio._spi.regs[registers::EN_AA as usize],
                    initial & !(1 << pipe)
                );
                ce_pin.done();
            }
        }
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        radio.enable_auto_ack(6).unwrap();
        assert!(!radio.is_auto_ack_enabled(6).unwrap());
        assert!(radio._spi.log.is_empty());
        ce_pin.done();
    }

    #[test]
    fn retransmit_fields_share_register() {
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        radio.set_retransmit_count(5).unwrap();
        assert_eq!(radio._spi.regs[registers::SETUP_RETR as usize], 0x05);
        radio.set_retransmit_delay(3).unwrap();
        assert_eq!(radio._spi.regs[registers::SETUP_RETR as usize], 0x35);
        assert_eq!(radio.get_retransmit_count().unwrap(), 5);
        assert_eq!(radio.get_retransmit_delay().unwrap(), 3);
        ce_pin.done();
    }

    #[test]
    pub fn retransmit_values_are_masked() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x5Fu8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x51u8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x51u8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0xF1u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_retransmit_count(0x11).unwrap();
        radio.set_retransmit_delay(0xFF).unwrap();
        spi.done();
        ce_pin.done();
    }
}
