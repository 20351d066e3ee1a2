use crate::types::{
    AcquisitionMode, ConfigOptions, Configuration, HumidityResolution, TemperatureResolution,
};

// Register pointers, section 8.6 of the datasheet.
pub(crate) const TEMPERATURE_REGISTER: u8 = 0x00;
pub(crate) const HUMIDITY_REGISTER: u8 = 0x01;
pub(crate) const CONFIGURATION_REGISTER: u8 = 0x02;
pub(crate) const SERIAL_ID_REGISTERS: [u8; 3] = [0xFB, 0xFC, 0xFD];
pub(crate) const MANUFACTURER_ID_REGISTER: u8 = 0xFE;
pub(crate) const DEVICE_ID_REGISTER: u8 = 0xFF;

/// The configuration byte sits in the high half of the 16-bit register.
pub(crate) fn configuration_from_register(word: u16) -> Configuration {
    let [high, _reserved] = word.to_be_bytes();
    Configuration::from_bits(high)
}

/// The full register word for a configuration byte. The reserved low byte
/// is always zero.
pub(crate) fn configuration_to_register(config: Configuration) -> u16 {
    u16::from(config.into_bits()) << 8
}

/// Bytes for a configuration register write: register pointer, then the
/// value high byte first.
pub(crate) fn configuration_write_bytes(word: u16) -> [u8; 3] {
    let [high, low] = word.to_be_bytes();
    [CONFIGURATION_REGISTER, high, low]
}

/// Assemble the 40-bit serial number from the three serial ID words.
///
/// The low byte of the last word is not part of the serial number.
pub(crate) fn serial_number_from_words([id0, id1, id2]: [u16; 3]) -> u64 {
    (u64::from(id0) << 24) | (u64::from(id1) << 8) | u64::from(id2 >> 8)
}

/// Configuration options after validation, ready to apply to the byte
/// read back from the sensor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConfigChanges {
    humidity_resolution: Option<HumidityResolution>,
    temperature_resolution: Option<TemperatureResolution>,
    mode: Option<AcquisitionMode>,
    heater: Option<bool>,
}

impl ConfigChanges {
    /// Check every option up front, so an invalid one is rejected before
    /// anything else happens.
    pub(crate) fn validate(options: &ConfigOptions) -> Result<Self, &'static str> {
        Ok(Self {
            humidity_resolution: options
                .humidity_resolution
                .map(HumidityResolution::try_from)
                .transpose()?,
            temperature_resolution: options
                .temperature_resolution
                .map(TemperatureResolution::try_from)
                .transpose()?,
            mode: options.mode.map(AcquisitionMode::try_from).transpose()?,
            heater: options
                .heater
                .map(|heater| match heater {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err("heater must be 0 or 1"),
                })
                .transpose()?,
        })
    }

    /// Apply the changes on top of `config`, leaving other bits alone.
    pub(crate) fn apply(&self, mut config: Configuration) -> Configuration {
        if let Some(resolution) = self.humidity_resolution {
            config.set_humidity_resolution(resolution);
        }
        if let Some(resolution) = self.temperature_resolution {
            config.set_temperature_resolution(resolution);
        }
        if let Some(mode) = self.mode {
            config.set_mode(mode);
        }
        if let Some(heater) = self.heater {
            config.set_heater(heater);
        }
        config
    }
}
