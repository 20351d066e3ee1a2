use bitfield_struct::bitfield;
use embedded_hal::i2c::SevenBitAddress;

/// The HDC1080's I2C address, fixed in silicon.
pub const DEFAULT_ADDRESS: SevenBitAddress = 0x40;

/// Manufacturer ID register contents, "TI" in ASCII.
///
/// The driver does not check this; compare against
/// [`Hdc1080::manufacturer_id`] if you want to.
///
/// [`Hdc1080::manufacturer_id`]: crate::blocking::Hdc1080::manufacturer_id
pub const MANUFACTURER_ID: u16 = 0x5449;

/// Device ID register contents for the HDC1080. Not checked by the driver.
pub const DEVICE_ID: u16 = 0x1050;

/// Delay between writing a register pointer and reading the register back.
///
/// 20ms covers the slowest conversion (14-bit temperature plus 14-bit
/// humidity, see section 7.5 of the [datasheet]) so the same delay is used
/// for every register, not just the measurement ones.
///
/// [datasheet]: https://www.ti.com/lit/ds/symlink/hdc1080.pdf
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 20;

/// Measurement resolution for relative humidity, bits 0 and 1 of the
/// configuration byte.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityResolution {
    /// 14 bits, 6.5ms conversion time.
    FourteenBit,
    /// 11 bits, 3.85ms conversion time.
    ElevenBit,
    /// 8 bits, 2.5ms conversion time.
    EightBit,
    /// `0b11`, which the datasheet leaves undefined. Only ever seen when the
    /// configuration byte was written raw.
    Reserved,
}

impl HumidityResolution {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            HumidityResolution::FourteenBit => 0b00,
            HumidityResolution::ElevenBit => 0b01,
            HumidityResolution::EightBit => 0b10,
            HumidityResolution::Reserved => 0b11,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => HumidityResolution::FourteenBit,
            0b01 => HumidityResolution::ElevenBit,
            0b10 => HumidityResolution::EightBit,
            _ => HumidityResolution::Reserved,
        }
    }
}

/// Look up the resolution from its size in bits (8, 11 or 14).
impl TryFrom<u8> for HumidityResolution {
    type Error = &'static str;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            14 => Ok(HumidityResolution::FourteenBit),
            11 => Ok(HumidityResolution::ElevenBit),
            8 => Ok(HumidityResolution::EightBit),
            _ => Err("humidity resolution must be 8, 11 or 14"),
        }
    }
}

/// Measurement resolution for temperature, bit 2 of the configuration byte.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureResolution {
    /// 14 bits, 6.35ms conversion time.
    FourteenBit,
    /// 11 bits, 3.65ms conversion time.
    ElevenBit,
}

impl TemperatureResolution {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            TemperatureResolution::FourteenBit => 0,
            TemperatureResolution::ElevenBit => 1,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 1 {
            0 => TemperatureResolution::FourteenBit,
            _ => TemperatureResolution::ElevenBit,
        }
    }
}

/// Look up the resolution from its size in bits (11 or 14).
impl TryFrom<u8> for TemperatureResolution {
    type Error = &'static str;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            14 => Ok(TemperatureResolution::FourteenBit),
            11 => Ok(TemperatureResolution::ElevenBit),
            _ => Err("temperature resolution must be 11 or 14"),
        }
    }
}

/// Acquisition mode, bit 4 of the configuration byte.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionMode {
    /// Mode 0: temperature or humidity is acquired, depending on the
    /// register read.
    Single,
    /// Mode 1: temperature and humidity are acquired in sequence,
    /// temperature first. This is the power-on setting.
    Sequential,
}

impl AcquisitionMode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            AcquisitionMode::Single => 0,
            AcquisitionMode::Sequential => 1,
        }
    }

    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits & 1 {
            0 => AcquisitionMode::Single,
            _ => AcquisitionMode::Sequential,
        }
    }
}

impl TryFrom<u8> for AcquisitionMode {
    type Error = &'static str;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(AcquisitionMode::Single),
            1 => Ok(AcquisitionMode::Sequential),
            _ => Err("mode must be 0 or 1"),
        }
    }
}

/// The meaningful byte of the configuration register (0x02).
///
/// On the wire the register is 16 bits wide with this byte in the high
/// position; the low byte is reserved and always zero. See section 8.6.3 of
/// the [datasheet].
///
/// [datasheet]: https://www.ti.com/lit/ds/symlink/hdc1080.pdf
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(PartialEq, Eq)]
pub struct Configuration {
    #[bits(2)]
    pub humidity_resolution: HumidityResolution,
    #[bits(1)]
    pub temperature_resolution: TemperatureResolution,
    /// Set when the supply voltage is below 2.8V.
    #[bits(1, access = RO)]
    pub battery_low: bool,
    #[bits(1)]
    pub mode: AcquisitionMode,
    pub heater: bool,
    #[bits(1)]
    __: u8,
    /// Software reset. Self-clearing once the reset completes.
    pub reset: bool,
}

impl Configuration {
    /// Register contents after power-on or software reset: 14-bit
    /// resolutions, heater off, sequential acquisition.
    pub const POWER_ON: Configuration = Configuration::from_bits(0x10);

    /// Only the reset bit set, as written to trigger a software reset.
    pub(crate) const SOFT_RESET: Configuration = Configuration::from_bits(0x80);
}

/// Settings fixed at construction.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub address: SevenBitAddress,
    /// Milliseconds to wait between pointing at a register and reading it.
    pub settle_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

/// Changes to apply with [`Hdc1080::configure`].
///
/// Options left as `None` keep whatever value the sensor currently holds.
/// Setting `raw_config` replaces the whole configuration byte and the other
/// options are ignored.
///
/// Values are checked when `configure` is called, before any bus traffic:
///
/// - `humidity_resolution`: 8, 11 or 14
/// - `temperature_resolution`: 11 or 14
/// - `mode`: 0 (single) or 1 (sequential)
/// - `heater`: 0 (off) or 1 (on)
///
/// [`Hdc1080::configure`]: crate::blocking::Hdc1080::configure
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOptions {
    pub raw_config: Option<u8>,
    pub humidity_resolution: Option<u8>,
    pub temperature_resolution: Option<u8>,
    pub mode: Option<u8>,
    pub heater: Option<u8>,
}

impl ConfigOptions {
    pub fn with_raw_config(mut self, config: u8) -> Self {
        self.raw_config = Some(config);
        self
    }

    pub fn with_humidity_resolution(mut self, bits: u8) -> Self {
        self.humidity_resolution = Some(bits);
        self
    }

    pub fn with_temperature_resolution(mut self, bits: u8) -> Self {
        self.temperature_resolution = Some(bits);
        self
    }

    pub fn with_mode(mut self, mode: u8) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_heater(mut self, heater: u8) -> Self {
        self.heater = Some(heater);
        self
    }
}

/// Raw temperature and humidity words read from the sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub raw_temperature_reading: u16,
    pub raw_humidity_reading: u16,
}

impl Measurement {
    pub fn celsius(&self) -> f64 {
        crate::conversions::temperature_reading_to_celsius(self.raw_temperature_reading)
    }

    pub fn fahrenheit(&self) -> f64 {
        crate::conversions::temperature_reading_to_fahrenheit(self.raw_temperature_reading)
    }

    pub fn humidity(&self) -> f64 {
        crate::conversions::humidity_reading_to_percent_rh(self.raw_humidity_reading)
    }

    #[cfg(feature = "fixed")]
    pub fn celsius_fixed_point(&self) -> fixed::types::I16F16 {
        crate::conversions::fixed_point::temperature_reading_to_celsius(
            self.raw_temperature_reading,
        )
    }

    #[cfg(feature = "fixed")]
    pub fn fahrenheit_fixed_point(&self) -> fixed::types::I16F16 {
        crate::conversions::fixed_point::temperature_reading_to_fahrenheit(
            self.raw_temperature_reading,
        )
    }

    #[cfg(feature = "fixed")]
    pub fn humidity_fixed_point(&self) -> fixed::types::I16F16 {
        crate::conversions::fixed_point::humidity_reading_to_percent_rh(self.raw_humidity_reading)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn power_on_configuration_decodes() {
        let config = Configuration::POWER_ON;
        assert_eq!(config.humidity_resolution(), HumidityResolution::FourteenBit);
        assert_eq!(
            config.temperature_resolution(),
            TemperatureResolution::FourteenBit
        );
        assert_eq!(config.mode(), AcquisitionMode::Sequential);
        assert!(!config.heater());
        assert!(!config.battery_low());
        assert!(!config.reset());
    }

    #[test]
    fn fields_sit_at_datasheet_bit_positions() {
        let config = Configuration::new()
            .with_humidity_resolution(HumidityResolution::EightBit)
            .with_temperature_resolution(TemperatureResolution::ElevenBit)
            .with_heater(true);
        assert_eq!(config.into_bits(), 0b0010_0110);

        let config = Configuration::from_bits(0b0000_1000);
        assert!(config.battery_low());
        assert_eq!(Configuration::SOFT_RESET.into_bits(), 0x80);
        assert!(Configuration::SOFT_RESET.reset());
    }

    #[test]
    fn raw_bits_survive_unchanged() {
        for raw in [0x00, 0x34, 0x5B, 0xFF] {
            assert_eq!(Configuration::from_bits(raw).into_bits(), raw);
        }
    }

    #[test]
    fn resolutions_from_bit_counts() {
        assert_eq!(
            HumidityResolution::try_from(11),
            Ok(HumidityResolution::ElevenBit)
        );
        assert!(HumidityResolution::try_from(12).is_err());
        assert_eq!(
            TemperatureResolution::try_from(14),
            Ok(TemperatureResolution::FourteenBit)
        );
        assert!(TemperatureResolution::try_from(8).is_err());
        assert!(AcquisitionMode::try_from(2).is_err());
    }

    #[test]
    fn measurement_conversions() {
        let m = Measurement {
            raw_temperature_reading: 0x8000,
            raw_humidity_reading: 0x8000,
        };
        assert_eq!(m.celsius(), 42.5);
        assert_eq!(m.fahrenheit(), 108.5);
        assert_eq!(m.humidity(), 50.0);
    }
}
