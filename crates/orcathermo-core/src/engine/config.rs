use crate::core::models::temperature::Temperature;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid reference temperature: {0} K (must be finite and positive)")]
    InvalidTemperature(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExtractionConfig {
    pub temperature: Temperature,
    pub ir_spectrum: bool,
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    temperature: Option<f64>,
    ir_spectrum: Option<bool>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }
    pub fn ir_spectrum(mut self, enabled: bool) -> Self {
        self.ir_spectrum = Some(enabled);
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        let defaults = ExtractionConfig::default();
        let temperature = match self.temperature {
            Some(kelvin) => {
                let temperature = Temperature::new(kelvin);
                if !temperature.is_valid() {
                    return Err(ConfigError::InvalidTemperature(kelvin));
                }
                temperature
            }
            None => defaults.temperature,
        };
        Ok(ExtractionConfig {
            temperature,
            ir_spectrum: self.ir_spectrum.unwrap_or(defaults.ir_spectrum),
        })
    }
}
