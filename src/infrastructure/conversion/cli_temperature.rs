use crate::domain::ports::temperature_converter::TemperatureConverter;

/// Climate-report conversion: `C * 9/5 + 32`, rounded half away from zero to a
/// whole degree Fahrenheit.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliTemperatureConverter;

pub fn cli_temp_f(celsius: f64) -> i64 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i64
}

impl TemperatureConverter for CliTemperatureConverter {
    fn to_fahrenheit(&self, celsius: f64) -> i64 {
        cli_temp_f(celsius)
    }
}
