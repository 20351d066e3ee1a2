use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use embedded_hal_mock::eh1::delay::{CheckedDelay, NoopDelay, Transaction as DelayTx};
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTx};
use hdc1080_rjw::{ConfigOptions, Error, Hdc1080};

const ADDR: u8 = 0x40;

fn read(register: u8, value: u16) -> [I2cTx; 2] {
    [
        I2cTx::write(ADDR, vec![register]),
        I2cTx::read(ADDR, value.to_be_bytes().to_vec()),
    ]
}

/// A typical session: probe, identify, configure, measure.
#[test]
fn session() -> anyhow::Result<()> {
    let mut expectations = vec![I2cTx::write(ADDR, vec![])];
    expectations.extend(read(0xFE, 0x5449));
    expectations.extend(read(0xFF, 0x1050));
    expectations.extend(read(0xFB, 0x0102));
    expectations.extend(read(0xFC, 0x0304));
    expectations.extend(read(0xFD, 0x0580));
    expectations.extend(read(0x02, 0x1000));
    expectations.push(I2cTx::write(ADDR, vec![0x02, 0x06, 0x00]));
    expectations.extend(read(0x00, 0x8000));
    expectations.extend(read(0x01, 0x4000));

    let mut i2c = I2cMock::new(&expectations);
    let delays = vec![DelayTx::delay_ms(20); 8];
    let mut delay = CheckedDelay::new(&delays);

    let mut sensor = Hdc1080::new(&mut i2c, &mut delay, Default::default());
    assert!(sensor.presence_check()?);
    assert_eq!(sensor.manufacturer_id()?, hdc1080_rjw::types::MANUFACTURER_ID);
    assert_eq!(sensor.device_id()?, hdc1080_rjw::types::DEVICE_ID);
    assert_eq!(sensor.serial_number()?, 0x01_0203_0405);

    sensor.configure(
        ConfigOptions::default()
            .with_humidity_resolution(8)
            .with_temperature_resolution(11)
            .with_mode(0),
    )?;
    assert_eq!(sensor.config().into_bits(), 0x06);

    let m = sensor.measure()?;
    assert_eq!(m.celsius(), 42.5);
    assert_eq!(m.humidity(), 25.0);

    drop(sensor);
    i2c.done();
    delay.done();
    Ok(())
}

#[test]
fn missing_sensor() {
    let mut i2c = I2cMock::new(&[I2cTx::write(ADDR, vec![])
        .with_error(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address))]);
    let mut sensor = Hdc1080::new(&mut i2c, NoopDelay, Default::default());

    let err = sensor.presence_check().unwrap_err();
    assert!(matches!(err, Error::DeviceNotFound(0x40)));
    assert_eq!(err.to_string(), "HDC1080 not found at I2C address 0x40");

    drop(sensor);
    i2c.done();
}

/// Writing a raw configuration and reading it back gives the same byte.
#[test]
fn raw_config_round_trip() -> anyhow::Result<()> {
    let mut expectations = vec![I2cTx::write(ADDR, vec![0x02, 0x34, 0x00])];
    expectations.extend(read(0x02, 0x3400));
    let mut i2c = I2cMock::new(&expectations);

    let mut sensor = Hdc1080::new(&mut i2c, NoopDelay, Default::default());
    sensor.configure(ConfigOptions::default().with_raw_config(0x34))?;
    let config = sensor.refresh_config()?;
    assert_eq!(config.into_bits(), 0x34);
    assert_eq!(sensor.config(), config);

    drop(sensor);
    i2c.done();
    Ok(())
}

#[test]
fn invalid_resolution_is_rejected() {
    let mut i2c = I2cMock::new(&[]);
    let mut sensor = Hdc1080::new(&mut i2c, NoopDelay, Default::default());

    let result = sensor.configure(ConfigOptions::default().with_temperature_resolution(8));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    drop(sensor);
    i2c.done();
}
