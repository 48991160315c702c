//! Plain values exchanged with the radio: settings, FIFO levels and the STATUS byte.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

use crate::radio::mnemonics;

/// Output power of the transmitter's amplifier, in dBm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TxPower {
    /// -18 dBm
    Min,
    /// -12 dBm
    Low,
    /// -6 dBm
    High,
    /// 0 dBm
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for TxPower {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TxPower::Min => defmt::write!(fmt, "-18 dBm"),
            TxPower::Low => defmt::write!(fmt, "-12 dBm"),
            TxPower::High => defmt::write!(fmt, "-6 dBm"),
            TxPower::Max => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl TxPower {
    /// The raw 2-bit value stored in the `RF_PWR` field.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            TxPower::Min => 0,
            TxPower::Low => 1,
            TxPower::High => 2,
            TxPower::Max => 3,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            0 => TxPower::Min,
            1 => TxPower::Low,
            2 => TxPower::High,
            _ => TxPower::Max,
        }
    }
}

impl Display for TxPower {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            TxPower::Min => write!(f, "-18 dBm"),
            TxPower::Low => write!(f, "-12 dBm"),
            TxPower::High => write!(f, "-6 dBm"),
            TxPower::Max => write!(f, "0 dBm"),
        }
    }
}

/// The on-air bit rate.
///
/// 250 kbps is not available on the original nRF24L01 (only on the `+` variant).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    Mbps1,
    Mbps2,
    Kbps250,
}

impl DataRate {
    /// The raw 2-bit rate value.
    ///
    /// Bit 0 lands in `RF_DR_LOW` and bit 1 lands in `RF_DR_HIGH`.
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Kbps250 => 1,
            DataRate::Mbps2 => 2,
        }
    }

    /// Returns [`None`] for the reserved value `0b11`.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value {
            0 => Some(DataRate::Mbps1),
            1 => Some(DataRate::Kbps250),
            2 => Some(DataRate::Mbps2),
            _ => None,
        }
    }

    /// The rate in kilobits per second.
    pub const fn kbps(self) -> u16 {
        match self {
            DataRate::Mbps1 => 1000,
            DataRate::Mbps2 => 2000,
            DataRate::Kbps250 => 250,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u16} kbps", self.kbps())
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{} kbps", self.kbps())
    }
}

/// The width of the CRC appended to each packet when CRC is enabled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcWidth {
    /// 1 byte
    Bit8,
    /// 2 bytes
    Bit16,
}

impl CrcWidth {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcWidth::Bit8 => 0,
            CrcWidth::Bit16 => 1,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            0 => CrcWidth::Bit8,
            _ => CrcWidth::Bit16,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcWidth {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcWidth::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcWidth::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcWidth::Bit8 => write!(f, "8 bit"),
            CrcWidth::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The length of the addresses used on all pipes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AddressWidth {
    Bytes3,
    Bytes4,
    Bytes5,
}

impl AddressWidth {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AddressWidth::Bytes3 => 1,
            AddressWidth::Bytes4 => 2,
            AddressWidth::Bytes5 => 3,
        }
    }

    /// Returns [`None`] for the illegal value `0b00`.
    pub(crate) const fn from_bits(value: u8) -> Option<Self> {
        match value {
            1 => Some(AddressWidth::Bytes3),
            2 => Some(AddressWidth::Bytes4),
            3 => Some(AddressWidth::Bytes5),
            _ => None,
        }
    }

    /// The number of bytes in an address.
    pub const fn bytes(self) -> usize {
        self.into_bits() as usize + 2
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for AddressWidth {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=usize} bytes", self.bytes())
    }
}

impl Display for AddressWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} bytes", self.bytes())
    }
}

/// How many payloads sit in one of the radio's 3-level FIFOs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// All 3 levels hold a payload.
    Full,
    /// No payload is queued.
    Empty,
    /// 1 or 2 payloads are queued.
    Occupied,
}

impl FifoState {
    /// Decode an `(FULL << 1) | EMPTY` bit pair from FIFO_STATUS.
    ///
    /// Both bits set cannot happen on a working radio; it reads as [`FifoState::Occupied`].
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            1 => FifoState::Empty,
            2 => FifoState::Full,
            _ => FifoState::Occupied,
        }
    }

    const fn as_str(&self) -> &'static str {
        match self {
            FifoState::Full => "full",
            FifoState::Empty => "empty",
            FifoState::Occupied => "occupied",
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str())
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot of the STATUS register.
///
/// The radio returns this as the first byte of every SPI transaction.
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all event flags set to true.
#[bitfield(u8, new = false, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// `7` means the RX FIFO is empty.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 =
        mnemonics::MASK_RX_DR | mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all event flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// Only the event flags, as they would be written back to clear them.
    pub const fn events(&self) -> u8 {
        self.into_bits() & Self::IRQ_MASK
    }

    /// Is any event flag asserted?
    pub const fn any(&self) -> bool {
        self.events() != 0
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if the maximum number of retransmits was reached.
    pub fn with_max_rt(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::MAX_RT_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::MAX_RT_OFFSET))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}
