/// Celsius to whole-degree Fahrenheit conversion, using the settlement rounding
/// rule. The same converter must serve both the reported maximum and the
/// rule-adjusted temperatures.
pub trait TemperatureConverter: Send + Sync {
    fn to_fahrenheit(&self, celsius: f64) -> i64;
}

impl<F> TemperatureConverter for F
where
    F: Fn(f64) -> i64 + Send + Sync,
{
    fn to_fahrenheit(&self, celsius: f64) -> i64 {
        self(celsius)
    }
}
