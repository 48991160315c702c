use critical_section::CriticalSection;
use embedded_hal::spi::SpiDevice;

use super::{bit_fields::Field, commands, registers};
use crate::StatusFlags;

/// The largest payload (in bytes) that can follow a command's opcode.
pub const MAX_PAYLOAD: usize = 32;

/// Exclusive use of the radio's SPI bus.
///
/// A `BusLock` only exists inside [`Nrf24::with_bus()`](fn@crate::radio::Nrf24::with_bus),
/// which holds a [`critical_section`] for the lock's entire lifetime. Any sequence of
/// commands issued through the same lock (like a read-modify-write of a register) can
/// therefore not be interleaved with commands issued from an interrupt handler.
///
/// Each command is one SPI transaction. The [`SpiDevice`] asserts the radio's CSN line
/// for the duration of the transaction and releases it afterward.
pub struct BusLock<'a, SPI> {
    spi: &'a mut SPI,
    buf: &'a mut [u8; MAX_PAYLOAD + 1],
    status: &'a mut StatusFlags,
    _cs: CriticalSection<'a>,
}

impl<'a, SPI> BusLock<'a, SPI>
where
    SPI: SpiDevice,
{
    pub(super) fn new(
        spi: &'a mut SPI,
        buf: &'a mut [u8; MAX_PAYLOAD + 1],
        status: &'a mut StatusFlags,
        cs: CriticalSection<'a>,
    ) -> Self {
        Self {
            spi,
            buf,
            status,
            _cs: cs,
        }
    }

    /// Send a single command to the radio.
    ///
    /// The transaction is `1 + n` bytes long, where `n` is the longer of `tx` and `rx`
    /// (at most [`MAX_PAYLOAD`]). The first byte sent is `opcode`, followed by `tx`
    /// padded with zeros. The bytes received after the leading status byte are copied
    /// into `rx`.
    ///
    /// Returns the STATUS register value that the radio clocked out while
    /// receiving the `opcode`.
    pub fn send_command(
        &mut self,
        opcode: u8,
        tx: &[u8],
        rx: &mut [u8],
    ) -> Result<StatusFlags, SPI::Error> {
        let len = tx.len().max(rx.len()).min(MAX_PAYLOAD);
        let tx_len = tx.len().min(len);
        self.buf[0] = opcode;
        self.buf[1..=tx_len].copy_from_slice(&tx[..tx_len]);
        self.buf[(tx_len + 1)..=len].fill(0);
        self.spi.transfer_in_place(&mut self.buf[..=len])?;
        *self.status = StatusFlags::from_bits(self.buf[0]);
        let rx_len = rx.len().min(len);
        rx[..rx_len].copy_from_slice(&self.buf[1..=rx_len]);
        Ok(*self.status)
    }

    /// Get the STATUS register with a 1 byte NOP command.
    pub fn read_status(&mut self) -> Result<StatusFlags, SPI::Error> {
        self.send_command(commands::NOP, &[], &mut [])
    }

    /// Read the value of a single register.
    ///
    /// Only the 5 LSBs of `register` are used.
    pub fn read_register(&mut self, register: u8) -> Result<u8, SPI::Error> {
        let mut value = [0u8];
        self.send_command(
            commands::R_REGISTER | (register & commands::REGISTER_MASK),
            &[],
            &mut value,
        )?;
        Ok(value[0])
    }

    /// Read a multi-byte register (like a pipe address) into `buf`.
    pub fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), SPI::Error> {
        self.send_command(
            commands::R_REGISTER | (register & commands::REGISTER_MASK),
            &[],
            buf,
        )?;
        Ok(())
    }

    /// Overwrite the value of a single register.
    ///
    /// Only the 5 LSBs of `register` are used.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), SPI::Error> {
        self.write_registers(register, &[value])
    }

    /// Write all of `buf` to a multi-byte register (like a pipe address).
    pub fn write_registers(&mut self, register: u8, buf: &[u8]) -> Result<(), SPI::Error> {
        self.send_command(
            commands::W_REGISTER | (register & commands::REGISTER_MASK),
            buf,
            &mut [],
        )?;
        Ok(())
    }

    /// Read a register, pass its value through `f`, and write the result back.
    ///
    /// Returns the value written.
    pub fn modify_register<F>(&mut self, register: u8, f: F) -> Result<u8, SPI::Error>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = f(self.read_register(register)?);
        self.write_register(register, value)?;
        Ok(value)
    }

    /// Update one or more fields of the same register in a single read-modify-write.
    ///
    /// All bits not owned by the given fields keep their current value.
    /// The register is the one of the first field; fields of any other register are skipped.
    pub fn modify_fields(&mut self, changes: &[(Field, u8)]) -> Result<u8, SPI::Error> {
        let Some((first, _)) = changes.first() else {
            return Ok(0);
        };
        let register = first.register;
        self.modify_register(register, |reg_val| {
            changes
                .iter()
                .filter(|(field, _)| field.register == register)
                .fold(reg_val, |acc, (field, value)| field.insert(acc, *value))
        })
    }

    /// Read the current value of a single field.
    pub fn read_field(&mut self, field: Field) -> Result<u8, SPI::Error> {
        Ok(field.extract(self.read_register(field.register)?))
    }

    /// Acknowledge the given events in the STATUS register.
    ///
    /// Writing a 1 to an event bit clears it; other bits in `flags` are ignored.
    pub fn clear_events(&mut self, flags: StatusFlags) -> Result<(), SPI::Error> {
        self.write_register(registers::STATUS, flags.events())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::radio::nrf24::bit_fields::fields;
    use crate::radio::prelude::EsbStatus;
    use crate::test::{mk_radio, mk_register_radio, RegisterFile};
    use crate::{radio::Nrf24Error, spi_test_expects};
    use embedded_hal::spi::ErrorKind;
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::{sync::atomic::{AtomicBool, Ordering}, sync::Arc, thread, time::Duration, vec};

    #[test]
    fn register_round_trip() {
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        for register in 0..=0x1Fu8 {
            for value in 0..=0xFFu8 {
                radio.write_register(register, value).unwrap();
                assert_eq!(radio.read_register(register).unwrap(), value);
            }
        }
        ce_pin.done();
    }

    #[test]
    fn exchange_length_and_opcode() {
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        radio
            .with_bus(|bus| {
                bus.send_command(commands::FLUSH_TX, &[], &mut [])?;
                bus.read_register(registers::RF_CH)?;
                bus.write_registers(registers::TX_ADDR, &[1, 2, 3, 4, 5])?;
                let mut payload = [0u8; 32];
                bus.send_command(commands::R_RX_PAYLOAD, &[], &mut payload)?;
                // oversized requests are capped
                bus.send_command(commands::W_TX_PAYLOAD, &[0xAA; 40], &mut [])?;
                Ok(())
            })
            .unwrap();
        assert_eq!(
            radio._spi.log,
            vec![
                (commands::FLUSH_TX, 1),
                (registers::RF_CH, 2),
                (registers::TX_ADDR | commands::W_REGISTER, 6),
                (commands::R_RX_PAYLOAD, 33),
                (commands::W_TX_PAYLOAD, 33),
            ]
        );
        ce_pin.done();
    }

    #[test]
    fn status_from_every_transaction() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_CH, 0u8], vec![0x4Eu8, 76u8]),
            (vec![commands::NOP], vec![0x2Eu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.read_register(registers::RF_CH).unwrap(), 76);
        assert!(radio.last_status().rx_dr());
        let status = radio.with_bus(|bus| bus.read_status()).unwrap();
        assert!(status.tx_ds());
        assert!(!status.rx_dr());
        assert_eq!(status.rx_pipe(), 7);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn register_address_is_masked() {
        let spi_expectations = spi_test_expects![
            // the 3 high bits of the address are dropped
            (
                vec![registers::RF_CH | commands::W_REGISTER, 5u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.write_register(0xE0 | registers::RF_CH, 5).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn modify_multiple_fields() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0xFFu8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x21u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let written = radio
            .with_bus(|bus| bus.modify_fields(&[(fields::ARD, 2), (fields::ARC, 1)]))
            .unwrap();
        assert_eq!(written, 0x21);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn modify_skips_fields_of_other_registers() {
        let mut file = RegisterFile::new();
        file.regs[registers::RF_CH as usize] = 76;
        let (mut radio, mut ce_pin) = mk_register_radio(file);
        let written = radio
            .with_bus(|bus| bus.modify_fields(&[(fields::ARC, 3), (fields::RF_CH, 5)]))
            .unwrap();
        assert_eq!(written, 0x03);
        assert_eq!(radio._spi.regs[registers::SETUP_RETR as usize], 0x03);
        assert_eq!(radio._spi.regs[registers::RF_CH as usize], 76);
        assert_eq!(
            radio._spi.log,
            vec![
                (registers::SETUP_RETR, 2),
                (registers::SETUP_RETR | commands::W_REGISTER, 2),
            ]
        );
        ce_pin.done();
    }

    #[test]
    fn read_modify_write_excludes_other_contexts() {
        let entered = Arc::new(AtomicBool::new(false));
        let (mut radio, mut ce_pin) = mk_register_radio(RegisterFile::new());
        let mut other = None;
        radio
            .with_bus(|bus| {
                let value = bus.read_register(registers::CONFIG)?;
                let flag = Arc::clone(&entered);
                other = Some(thread::spawn(move || {
                    critical_section::with(|_| flag.store(true, Ordering::SeqCst))
                }));
                thread::sleep(Duration::from_millis(50));
                // the other context is still waiting between the read and the write
                assert!(!entered.load(Ordering::SeqCst));
                bus.write_register(registers::CONFIG, value | 2)
            })
            .unwrap();
        if let Some(handle) = other {
            handle.join().unwrap();
        }
        assert!(entered.load(Ordering::SeqCst));
        assert_eq!(radio._spi.regs[registers::CONFIG as usize], 2);
        ce_pin.done();
    }

    #[test]
    fn error_releases_critical_section() {
        let mut file = RegisterFile::new();
        file.fail_on = Some(2);
        let (mut radio, mut ce_pin) = mk_register_radio(file);
        let result = radio.with_bus(|bus| bus.modify_register(registers::CONFIG, |v| v | 2));
        assert_eq!(result, Err(Nrf24Error::Spi(ErrorKind::Other)));
        assert_eq!(radio._spi.regs[registers::CONFIG as usize], 0);
        // another thread can only enter if the critical section was restored
        let entered = thread::spawn(|| critical_section::with(|_| true))
            .join()
            .unwrap();
        assert!(entered);
        ce_pin.done();
    }
}
