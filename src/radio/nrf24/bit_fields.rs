use super::{mnemonics, registers};

/// A contiguous group of bits inside one 8-bit register.
///
/// Every configuration setter in this crate is described by one or more `Field`s,
/// so the bit arithmetic lives here and nowhere else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Field {
    /// The register address holding this field.
    pub register: u8,
    /// Position of the field's least significant bit.
    pub offset: u8,
    /// Number of bits in the field.
    pub width: u8,
}

impl Field {
    pub const fn new(register: u8, offset: u8, width: u8) -> Self {
        Self {
            register,
            offset,
            width,
        }
    }

    /// The field's bits, in register position.
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.offset
    }

    /// Replace this field within `reg_val` with `value`.
    ///
    /// `value` is truncated to the field's width; all other bits are left untouched.
    pub const fn insert(&self, reg_val: u8, value: u8) -> u8 {
        (reg_val & !self.mask()) | ((value << self.offset) & self.mask())
    }

    /// Get this field's value out of `reg_val`.
    pub const fn extract(&self, reg_val: u8) -> u8 {
        (reg_val & self.mask()) >> self.offset
    }
}

/// The 1-bit CONFIG field at the position of an IRQ mnemonic.
const fn mask_bit(mnemonic: u8) -> Field {
    Field::new(registers::CONFIG, mnemonic.trailing_zeros() as u8, 1)
}

/// The register fields this driver manages.
pub mod fields {
    use super::{mask_bit, mnemonics, registers, Field};

    // CONFIG
    pub const PRIM_RX: Field = Field::new(registers::CONFIG, 0, 1);
    pub const PWR_UP: Field = Field::new(registers::CONFIG, 1, 1);
    pub const CRCO: Field = Field::new(registers::CONFIG, 2, 1);
    pub const EN_CRC: Field = Field::new(registers::CONFIG, 3, 1);
    pub const MASK_MAX_RT: Field = mask_bit(mnemonics::MASK_MAX_RT);
    pub const MASK_TX_DS: Field = mask_bit(mnemonics::MASK_TX_DS);
    pub const MASK_RX_DR: Field = mask_bit(mnemonics::MASK_RX_DR);

    // SETUP_AW
    pub const AW: Field = Field::new(registers::SETUP_AW, 0, 2);

    // SETUP_RETR
    pub const ARC: Field = Field::new(registers::SETUP_RETR, 0, 4);
    pub const ARD: Field = Field::new(registers::SETUP_RETR, 4, 4);

    // RF_CH
    pub const RF_CH: Field = Field::new(registers::RF_CH, 0, 7);

    // RF_SETUP
    pub const RF_PWR: Field = Field::new(registers::RF_SETUP, 1, 2);
    pub const RF_DR_HIGH: Field = Field::new(registers::RF_SETUP, 3, 1);
    pub const RF_DR_LOW: Field = Field::new(registers::RF_SETUP, 5, 1);
    pub const CONT_WAVE: Field = Field::new(registers::RF_SETUP, 7, 1);

    // RX_PW_P0
    pub const RX_PW: Field = Field::new(registers::RX_PW_P0, 0, 6);

    // FIFO_STATUS; bit 0 is EMPTY and bit 1 is FULL in both pairs
    pub const RX_FIFO: Field = Field::new(registers::FIFO_STATUS, 0, 2);
    pub const TX_FIFO: Field = Field::new(registers::FIFO_STATUS, 4, 2);

    /// The auto-ack enable bit for `pipe` in EN_AA.
    pub const fn en_aa(pipe: u8) -> Field {
        Field::new(registers::EN_AA, pipe, 1)
    }

    /// The RX enable bit for `pipe` in EN_RXADDR.
    pub const fn en_rxaddr(pipe: u8) -> Field {
        Field::new(registers::EN_RXADDR, pipe, 1)
    }
}
