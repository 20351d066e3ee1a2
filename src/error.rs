use embedded_hal::i2c::SevenBitAddress;

#[derive(Debug)]
pub enum Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    /// Nothing acknowledged the probe at the given address.
    DeviceNotFound(SevenBitAddress),
    /// A configuration option was outside the values the sensor supports.
    ///
    /// Raised before any bus traffic for the call, and before the cached
    /// configuration is touched.
    InvalidArgument(&'static str),
    I2c(I2cError),
}

impl<I2cError> From<I2cError> for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn from(value: I2cError) -> Self {
        Error::I2c(value)
    }
}

impl<I2cError> core::fmt::Display for Error<I2cError>
where
    I2cError: embedded_hal::i2c::Error,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::DeviceNotFound(address) => {
                write!(f, "HDC1080 not found at I2C address {address:#04x}")
            }
            Error::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Error::I2c(e) => write!(f, "Received I2C error: {:?}", e),
        }
    }
}

impl<I> core::error::Error for Error<I> where I: embedded_hal::i2c::Error {}

#[cfg(test)]
mod test {
    use embedded_hal::i2c::ErrorKind;

    use super::Error;

    #[test]
    fn display_device_not_found() {
        let e: Error<ErrorKind> = Error::DeviceNotFound(0x40);
        assert_eq!(e.to_string(), "HDC1080 not found at I2C address 0x40");
    }

    #[test]
    fn bus_errors_convert_with_question_mark() {
        fn fails() -> Result<(), Error<ErrorKind>> {
            Err(ErrorKind::Bus)?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::I2c(ErrorKind::Bus))));
    }
}
