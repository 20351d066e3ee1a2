use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c, SevenBitAddress};

use crate::common::{
    CONFIGURATION_REGISTER, ConfigChanges, DEVICE_ID_REGISTER, HUMIDITY_REGISTER,
    MANUFACTURER_ID_REGISTER, SERIAL_ID_REGISTERS, TEMPERATURE_REGISTER,
    configuration_from_register, configuration_to_register, configuration_write_bytes,
    serial_number_from_words,
};
use crate::conversions::{humidity_reading_to_percent_rh, temperature_reading_to_celsius};
use crate::error::Error;
use crate::types::{Config, ConfigOptions, Configuration, Measurement};

/// Driver for the HDC1080.
///
/// Every register read is a pointer write, a fixed settle delay (20ms by
/// default) and a two-byte read, so each call blocks for at least that long.
///
/// The driver keeps a copy of the configuration byte. It is updated whenever
/// the driver writes or reads the configuration register, but is not
/// invalidated if the sensor resets by other means (a power cycle, say).
/// Call [`refresh_config`](Self::refresh_config) to bring it back in sync.
///
/// The bus and delay are taken by value. Pass `&mut` references if you want
/// to keep using them elsewhere, or use a bus-sharing crate to put several
/// devices on one bus.
pub struct Hdc1080<I: I2c, D: DelayNs> {
    i2c: I,
    delay: D,
    read_buffer: [u8; 2],
    address: SevenBitAddress,
    settle_delay_ms: u32,
    config: Configuration,
}

impl<I: I2c, D: DelayNs> Hdc1080<I, D> {
    /// Create the driver. No bus traffic happens here, so this succeeds
    /// whether or not the sensor is attached.
    ///
    /// The cached configuration starts at the sensor's power-on value.
    pub fn new(i2c: I, delay: D, settings: Config) -> Self {
        Self {
            i2c,
            delay,
            read_buffer: [0u8; 2],
            address: settings.address,
            settle_delay_ms: settings.settle_delay_ms,
            config: Configuration::POWER_ON,
        }
    }

    /// Release the bus and delay.
    pub fn destroy(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// The configuration byte as last written to or read from the sensor.
    pub fn config(&self) -> Configuration {
        self.config
    }

    /// Check that something acknowledges the sensor's address.
    ///
    /// This is an empty write, so no register is touched. A NACK is
    /// reported as [`Error::DeviceNotFound`]; any other bus failure is
    /// passed through as [`Error::I2c`].
    pub fn presence_check(&mut self) -> Result<bool, Error<I::Error>> {
        match self.i2c.write(self.address, &[]) {
            Ok(()) => Ok(true),
            Err(e) if matches!(e.kind(), ErrorKind::NoAcknowledge(_)) => {
                debug!("no device at {=u8:#x}", self.address);
                Err(Error::DeviceNotFound(self.address))
            }
            Err(e) => Err(Error::I2c(e)),
        }
    }

    /// Read a 16-bit register.
    ///
    /// The register pointer is written, then after the settle delay the two
    /// data bytes are read, most significant first. Reading the temperature
    /// or humidity register starts a conversion, which the delay covers.
    pub fn read_register16(&mut self, register: u8) -> Result<u16, Error<I::Error>> {
        self.i2c.write(self.address, &[register])?;
        self.delay.delay_ms(self.settle_delay_ms);
        self.i2c.read(self.address, &mut self.read_buffer)?;

        let value = u16::from_be_bytes(self.read_buffer);
        trace!("read {=u8:#x} -> {=u16:#x}", register, value);
        Ok(value)
    }

    /// Write the 16-bit configuration register.
    ///
    /// Only the high byte means anything to the sensor, and it becomes the
    /// new cached configuration.
    pub fn write_config_register(&mut self, value: u16) -> Result<(), Error<I::Error>> {
        trace!("write {=u8:#x} <- {=u16:#x}", CONFIGURATION_REGISTER, value);
        self.i2c
            .write(self.address, &configuration_write_bytes(value))?;
        self.config = configuration_from_register(value);
        Ok(())
    }

    /// Read the configuration register back into the cached copy.
    pub fn refresh_config(&mut self) -> Result<Configuration, Error<I::Error>> {
        let word = self.read_register16(CONFIGURATION_REGISTER)?;
        self.config = configuration_from_register(word);
        Ok(self.config)
    }

    /// Change the sensor configuration.
    ///
    /// With `raw_config` set, that byte is written as-is and nothing else in
    /// `options` is looked at. Otherwise every option is validated first,
    /// then the current configuration is read from the sensor, the requested
    /// changes are applied on top of it, and the result is written in a
    /// single transaction.
    ///
    /// An invalid option fails with [`Error::InvalidArgument`] before any
    /// bus traffic, leaving the cached configuration untouched.
    pub fn configure(&mut self, options: ConfigOptions) -> Result<(), Error<I::Error>> {
        if let Some(raw) = options.raw_config {
            return self.write_configuration(Configuration::from_bits(raw));
        }

        let changes = ConfigChanges::validate(&options).map_err(Error::InvalidArgument)?;
        let current = self.refresh_config()?;
        self.write_configuration(changes.apply(current))
    }

    /// Software reset.
    ///
    /// The reset bit clears itself, so the configuration read back afterwards
    /// is the power-on value rather than what was written.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.write_configuration(Configuration::SOFT_RESET)?;
        self.refresh_config()?;
        Ok(())
    }

    /// Returns `true` if the supply voltage is below 2.8V.
    ///
    /// Always reads the configuration register first.
    pub fn battery_status(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.refresh_config()?.battery_low())
    }

    pub fn read_raw_temperature(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_register16(TEMPERATURE_REGISTER)
    }

    pub fn read_raw_humidity(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_register16(HUMIDITY_REGISTER)
    }

    /// Measure the temperature in °C.
    pub fn temperature(&mut self) -> Result<f64, Error<I::Error>> {
        Ok(temperature_reading_to_celsius(self.read_raw_temperature()?))
    }

    /// Measure the relative humidity in percent.
    pub fn humidity(&mut self) -> Result<f64, Error<I::Error>> {
        Ok(humidity_reading_to_percent_rh(self.read_raw_humidity()?))
    }

    /// Measure temperature and then humidity.
    pub fn measure(&mut self) -> Result<Measurement, Error<I::Error>> {
        Ok(Measurement {
            raw_temperature_reading: self.read_raw_temperature()?,
            raw_humidity_reading: self.read_raw_humidity()?,
        })
    }

    /// The sensor's 40-bit factory-programmed unique ID.
    pub fn serial_number(&mut self) -> Result<u64, Error<I::Error>> {
        let mut words = [0u16; 3];
        for (word, register) in words.iter_mut().zip(SERIAL_ID_REGISTERS) {
            *word = self.read_register16(register)?;
        }
        Ok(serial_number_from_words(words))
    }

    /// Should read [`MANUFACTURER_ID`](crate::types::MANUFACTURER_ID).
    pub fn manufacturer_id(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_register16(MANUFACTURER_ID_REGISTER)
    }

    /// Should read [`DEVICE_ID`](crate::types::DEVICE_ID).
    pub fn device_id(&mut self) -> Result<u16, Error<I::Error>> {
        self.read_register16(DEVICE_ID_REGISTER)
    }

    fn write_configuration(&mut self, config: Configuration) -> Result<(), Error<I::Error>> {
        self.write_config_register(configuration_to_register(config))
    }
}
