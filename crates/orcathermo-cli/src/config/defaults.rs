use orcathermo::core::models::temperature::DEFAULT_TEMPERATURE_K;

/// Placeholder in output templates replaced by the integer part of the temperature.
pub const TEMPERATURE_PLACEHOLDER: &str = "{T}";

pub struct DefaultsConfig {
    pub temperature: f64,
    pub output_template: String,
    pub ir_spectrum: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_K,
            output_template: format!("thermodata_at_{TEMPERATURE_PLACEHOLDER}K.csv"),
            ir_spectrum: false,
        }
    }
}
