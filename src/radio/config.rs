use crate::radio::nrf24::bit_fields::{fields, Field};
use crate::{AddressWidth, CrcWidth, DataRate, TxPower};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Every setting is stored as the register image that
/// [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config) writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioConfig {
    pub(crate) config_reg: u8,
    pub(crate) setup_retr: u8,
    pub(crate) rf_setup: u8,
    pub(crate) setup_aw: u8,
    channel: u8,
    payload_width: u8,
    auto_ack: u8,
    rx_pipes: u8,
    rx_address: [u8; 5],
    tx_address: [u8; 5],
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::tx_power()`] | [`TxPower::Max`] |
    /// | [`RadioConfig::continuous_carrier()`] | `false` |
    /// | [`RadioConfig::crc_enabled()`] | `true` |
    /// | [`RadioConfig::crc_width()`] | [`CrcWidth::Bit16`] |
    /// | [`RadioConfig::address_width()`] | [`AddressWidth::Bytes5`] |
    /// | [`RadioConfig::retransmit_delay()`] | `5` |
    /// | [`RadioConfig::retransmit_count()`] | `15` |
    /// | [`RadioConfig::payload_width()`] | `32` |
    /// | [`RadioConfig::is_rx_pipe_enabled()`] | pipes 0 and 1 |
    /// | [`RadioConfig::is_auto_ack_enabled()`] | pipes 0 - 5 |
    /// | [`RadioConfig::rx_address()`] | `[0xE7; 5]` |
    /// | [`RadioConfig::tx_address()`] | `[0xE7; 5]` |
    /// | [`RadioConfig::rx_ready_irq()`] | `true` |
    /// | [`RadioConfig::tx_sent_irq()`] | `true` |
    /// | [`RadioConfig::max_retransmit_irq()`] | `true` |
    /// | [`RadioConfig::power()`] | `false` |
    /// | [`RadioConfig::rx_mode()`] | `false` |
    fn default() -> Self {
        Self {
            /*
               - all events enabled for IRQ pin
               - CRC enabled, 2 bytes
               - powered down
               - TX role
            */
            config_reg: 0x0C,
            // 5 * 250 + 250 = 1500 us delay between 15 attempts
            setup_retr: 0x5F,
            // 1 Mbps at 0 dBm
            rf_setup: 0x06,
            setup_aw: AddressWidth::Bytes5.into_bits(),
            channel: 76,
            payload_width: 32,
            auto_ack: 0x3F,
            rx_pipes: 0x03,
            rx_address: [0xE7; 5],
            tx_address: [0xE7; 5],
        }
    }
}

impl RadioConfig {
    const fn flag(reg_val: u8, field: Field) -> bool {
        field.extract(reg_val) == 1
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// Only the 7 LSBs of `channel` are used.
    ///
    /// See [`EsbChannel::set_channel()`](fn@crate::radio::prelude::EsbChannel::set_channel).
    pub const fn with_channel(self, channel: u8) -> Self {
        Self {
            channel: fields::RF_CH.insert(0, channel),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub fn data_rate(&self) -> DataRate {
        let bits = fields::RF_DR_LOW.extract(self.rf_setup)
            | (fields::RF_DR_HIGH.extract(self.rf_setup) << 1);
        DataRate::from_bits(bits).unwrap_or(DataRate::Mbps1)
    }

    /// Set the Data Rate.
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        let bits = data_rate.into_bits();
        let rf_setup = fields::RF_DR_LOW.insert(self.rf_setup, bits & 1);
        Self {
            rf_setup: fields::RF_DR_HIGH.insert(rf_setup, bits >> 1),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_tx_power()`].
    pub const fn tx_power(&self) -> TxPower {
        TxPower::from_bits(fields::RF_PWR.extract(self.rf_setup))
    }

    /// Set the transmit power.
    ///
    /// See [`EsbTxPower::set_tx_power()`](fn@crate::radio::prelude::EsbTxPower::set_tx_power).
    pub const fn with_tx_power(self, power: TxPower) -> Self {
        Self {
            rf_setup: fields::RF_PWR.insert(self.rf_setup, power.into_bits()),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_continuous_carrier()`].
    pub const fn continuous_carrier(&self) -> bool {
        Self::flag(self.rf_setup, fields::CONT_WAVE)
    }

    /// Enable or disable the continuous carrier test mode.
    pub const fn with_continuous_carrier(self, enable: bool) -> Self {
        Self {
            rf_setup: fields::CONT_WAVE.insert(self.rf_setup, enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_crc_enabled()`].
    pub const fn crc_enabled(&self) -> bool {
        Self::flag(self.config_reg, fields::EN_CRC)
    }

    /// Enable or disable the CRC check.
    ///
    /// See [`EsbCrc::set_crc_enabled()`](fn@crate::radio::prelude::EsbCrc::set_crc_enabled).
    pub const fn with_crc_enabled(self, enable: bool) -> Self {
        Self {
            config_reg: fields::EN_CRC.insert(self.config_reg, enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_crc_width()`].
    pub const fn crc_width(&self) -> CrcWidth {
        CrcWidth::from_bits(fields::CRCO.extract(self.config_reg))
    }

    /// The Cyclical Redundancy Checksum (CRC) width.
    ///
    /// See [`EsbCrc::set_crc_width()`](fn@crate::radio::prelude::EsbCrc::set_crc_width).
    pub const fn with_crc_width(self, width: CrcWidth) -> Self {
        Self {
            config_reg: fields::CRCO.insert(self.config_reg, width.into_bits()),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_address_width()`].
    pub fn address_width(&self) -> AddressWidth {
        AddressWidth::from_bits(fields::AW.extract(self.setup_aw)).unwrap_or(AddressWidth::Bytes5)
    }

    /// Set the address width (applies to all pipes).
    ///
    /// See [`EsbPipe::set_address_width()`](fn@crate::radio::prelude::EsbPipe::set_address_width).
    pub const fn with_address_width(self, width: AddressWidth) -> Self {
        Self {
            setup_aw: fields::AW.insert(0, width.into_bits()),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_retransmit_count()`].
    pub const fn retransmit_count(&self) -> u8 {
        fields::ARC.extract(self.setup_retr)
    }

    /// Set the maximum number of retransmit attempts (only the 4 LSBs are used).
    ///
    /// See [`EsbAutoAck::set_retransmit_count()`](fn@crate::radio::prelude::EsbAutoAck::set_retransmit_count).
    pub const fn with_retransmit_count(self, count: u8) -> Self {
        Self {
            setup_retr: fields::ARC.insert(self.setup_retr, count),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_retransmit_delay()`].
    pub const fn retransmit_delay(&self) -> u8 {
        fields::ARD.extract(self.setup_retr)
    }

    /// Set the delay between retransmit attempts (only the 4 LSBs are used).
    ///
    /// See [`EsbAutoAck::set_retransmit_delay()`](fn@crate::radio::prelude::EsbAutoAck::set_retransmit_delay).
    pub const fn with_retransmit_delay(self, delay: u8) -> Self {
        Self {
            setup_retr: fields::ARD.insert(self.setup_retr, delay),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_payload_width()`].
    pub const fn payload_width(&self) -> u8 {
        self.payload_width
    }

    /// Set the static payload width.
    ///
    /// `width` is clamped to the range [1, 32].
    pub fn with_payload_width(self, width: u8) -> Self {
        Self {
            payload_width: width.clamp(1, 32),
            ..self
        }
    }

    /// Is the specified `pipe` enabled for receiving?
    pub const fn is_rx_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && Self::flag(self.rx_pipes, fields::en_rxaddr(pipe))
    }

    /// Enable or disable the specified `pipe` for receiving.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this does nothing.
    pub const fn with_rx_pipe(self, pipe: u8, enable: bool) -> Self {
        if pipe > 5 {
            return self;
        }
        Self {
            rx_pipes: fields::en_rxaddr(pipe).insert(self.rx_pipes, enable as u8),
            ..self
        }
    }

    /// Is the auto-ack feature enabled on the specified `pipe`?
    pub const fn is_auto_ack_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && Self::flag(self.auto_ack, fields::en_aa(pipe))
    }

    /// Enable or disable the auto-ack feature on the specified `pipe`.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this does nothing.
    pub const fn with_auto_ack(self, pipe: u8, enable: bool) -> Self {
        if pipe > 5 {
            return self;
        }
        Self {
            auto_ack: fields::en_aa(pipe).insert(self.auto_ack, enable as u8),
            ..self
        }
    }

    pub(crate) const fn rx_pipes(&self) -> u8 {
        self.rx_pipes
    }

    pub(crate) const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// Returns the value set by [`RadioConfig::with_rx_address()`].
    pub const fn rx_address(&self) -> [u8; 5] {
        self.rx_address
    }

    /// Set the RX address of pipe 0.
    pub const fn with_rx_address(self, address: [u8; 5]) -> Self {
        Self {
            rx_address: address,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_tx_address()`].
    pub const fn tx_address(&self) -> [u8; 5] {
        self.tx_address
    }

    /// Set the TX address.
    pub const fn with_tx_address(self, address: [u8; 5]) -> Self {
        Self {
            tx_address: address,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_rx_ready_irq()`].
    pub const fn rx_ready_irq(&self) -> bool {
        !Self::flag(self.config_reg, fields::MASK_RX_DR)
    }

    /// Allow or mask the "RX data ready" event on the IRQ pin.
    pub const fn with_rx_ready_irq(self, enable: bool) -> Self {
        Self {
            config_reg: fields::MASK_RX_DR.insert(self.config_reg, !enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_tx_sent_irq()`].
    pub const fn tx_sent_irq(&self) -> bool {
        !Self::flag(self.config_reg, fields::MASK_TX_DS)
    }

    /// Allow or mask the "TX data sent" event on the IRQ pin.
    pub const fn with_tx_sent_irq(self, enable: bool) -> Self {
        Self {
            config_reg: fields::MASK_TX_DS.insert(self.config_reg, !enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_max_retransmit_irq()`].
    pub const fn max_retransmit_irq(&self) -> bool {
        !Self::flag(self.config_reg, fields::MASK_MAX_RT)
    }

    /// Allow or mask the "max retransmits reached" event on the IRQ pin.
    pub const fn with_max_retransmit_irq(self, enable: bool) -> Self {
        Self {
            config_reg: fields::MASK_MAX_RT.insert(self.config_reg, !enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_power()`].
    pub const fn power(&self) -> bool {
        Self::flag(self.config_reg, fields::PWR_UP)
    }

    /// Leave the radio powered up (`true`) or down (`false`) after configuring.
    pub const fn with_power(self, enable: bool) -> Self {
        Self {
            config_reg: fields::PWR_UP.insert(self.config_reg, enable as u8),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_rx_mode()`].
    pub const fn rx_mode(&self) -> bool {
        Self::flag(self.config_reg, fields::PRIM_RX)
    }

    /// Select the primary receiver (`true`) or primary transmitter (`false`) role.
    pub const fn with_rx_mode(self, enable: bool) -> Self {
        Self {
            config_reg: fields::PRIM_RX.insert(self.config_reg, enable as u8),
            ..self
        }
    }
}
