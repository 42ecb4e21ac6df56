use super::defaults::{DefaultsConfig, TEMPERATURE_PLACEHOLDER};
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::Result;
use orcathermo::core::models::temperature::Temperature;
use orcathermo::engine::config::ExtractionConfigBuilder;
use orcathermo::engine::error::EngineError;
use std::path::PathBuf;

pub fn build_config(args: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let fallback = file_config.temperature.unwrap_or(defaults.temperature);
    let mut notices = Vec::new();
    let temperature = match args.temperature.as_deref() {
        Some(raw) => match parse_temperature(raw) {
            Some(kelvin) => kelvin,
            None => {
                notices.push(format!(
                    "Could not use '{}' as temperature. Using {} K instead.",
                    raw, fallback
                ));
                fallback
            }
        },
        None => fallback,
    };

    let ir_spectrum =
        args.ir_spectrum || file_config.ir_spectrum.unwrap_or(defaults.ir_spectrum);

    let extraction = ExtractionConfigBuilder::new()
        .temperature(temperature)
        .ir_spectrum(ir_spectrum)
        .build()
        .map_err(EngineError::from)?;

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            let template = file_config
                .output_template
                .unwrap_or(defaults.output_template);
            render_output_template(&template, extraction.temperature)
        }
    };

    Ok(AppConfig {
        filename: args.filename.clone(),
        root: args.root.clone(),
        output_path,
        extraction,
        notices,
    })
}

fn parse_temperature(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|&kelvin| Temperature::new(kelvin).is_valid())
}

fn render_output_template(template: &str, temperature: Temperature) -> PathBuf {
    PathBuf::from(template.replace(TEMPERATURE_PLACEHOLDER, &temperature.label().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use orcathermo::engine::config::ConfigError;
    use std::fs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["orcathermo"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn defaults_apply_without_arguments_or_file() {
        let app = build_config(&parse(&["orca.out", "runs"])).unwrap();
        assert_eq!(app.filename, "orca.out");
        assert_eq!(app.root, PathBuf::from("runs"));
        assert_eq!(app.extraction.temperature.kelvin(), 298.15);
        assert!(!app.extraction.ir_spectrum);
        assert_eq!(app.output_path, PathBuf::from("thermodata_at_298K.csv"));
        assert!(app.notices.is_empty());
    }

    #[test]
    fn temperature_argument_names_the_output() {
        let app = build_config(&parse(&["orca.out", "runs", "310.5"])).unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 310.5);
        assert_eq!(app.output_path, PathBuf::from("thermodata_at_310K.csv"));
    }

    #[test]
    fn unparsable_temperature_falls_back_with_notice() {
        let app = build_config(&parse(&["orca.out", "runs", "hot"])).unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 298.15);
        assert_eq!(app.notices.len(), 1);
        assert!(app.notices[0].contains("'hot'"));
    }

    #[test]
    fn non_physical_temperature_falls_back_with_notice() {
        let app = build_config(&parse(&["orca.out", "runs", "0"])).unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 298.15);
        assert_eq!(app.notices.len(), 1);
    }

    #[test]
    fn file_values_fill_in_missing_arguments() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("thermo.toml");
        fs::write(
            &cfg,
            "temperature = 350.0\noutput-template = \"data/thermo_{T}.csv\"\nir-spectrum = true\n",
        )
        .unwrap();

        let app = build_config(&parse(&["-c", cfg.to_str().unwrap(), "orca.out", "."])).unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 350.0);
        assert!(app.extraction.ir_spectrum);
        assert_eq!(app.output_path, PathBuf::from("data/thermo_350.csv"));
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("thermo.toml");
        fs::write(&cfg, "temperature = 350.0\noutput-template = \"t_{T}.csv\"\n").unwrap();

        let app = build_config(&parse(&[
            "-c",
            cfg.to_str().unwrap(),
            "-o",
            "custom.csv",
            "orca.out",
            ".",
            "400",
        ]))
        .unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 400.0);
        assert_eq!(app.output_path, PathBuf::from("custom.csv"));
    }

    #[test]
    fn invalid_argument_falls_back_to_file_temperature() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("thermo.toml");
        fs::write(&cfg, "temperature = 350.0\n").unwrap();

        let app =
            build_config(&parse(&["-c", cfg.to_str().unwrap(), "orca.out", ".", "x"])).unwrap();
        assert_eq!(app.extraction.temperature.kelvin(), 350.0);
        assert!(app.notices[0].contains("350"));
    }

    #[test]
    fn invalid_file_temperature_is_an_error() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("thermo.toml");
        fs::write(&cfg, "temperature = -1.0\n").unwrap();

        let result = build_config(&parse(&["-c", cfg.to_str().unwrap(), "orca.out", "."]));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config(
                ConfigError::InvalidTemperature(_)
            )))
        ));
    }
}
