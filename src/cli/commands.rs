//! Subcommand implementations for the `geonames-conf` binary
//!
//! Each command writes to the given sink so the output can be tested without
//! spawning the binary.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::Settings;
use crate::geonames::countries::COUNTRY_CODES;
use crate::types::ImportStage;

/// Serialization format for `show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

/// Print the resolved settings
pub fn show(settings: &Settings, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, settings)?;
            writeln!(out)?;
        }
        OutputFormat::Toml => {
            let rendered = toml::to_string_pretty(settings)?;
            write!(out, "{}", rendered)?;
        }
    }
    Ok(())
}

/// Print one download URL per line for the datasets `stages` read
pub fn urls(settings: &Settings, stages: &[ImportStage], out: &mut impl Write) -> Result<()> {
    let stages = if stages.is_empty() {
        &[ImportStage::All][..]
    } else {
        stages
    };

    for (dataset, url) in settings.stage_urls(stages)? {
        writeln!(out, "{}\t{}", dataset, url)?;
    }
    Ok(())
}

/// Print active country codes, or the withdrawn ones with `retired`
pub fn countries(settings: &Settings, retired: bool, out: &mut impl Write) -> Result<()> {
    if retired {
        for code in &settings.no_longer_existent_country_codes {
            writeln!(out, "{}", code)?;
        }
    } else {
        for code in COUNTRY_CODES {
            writeln!(out, "{}", code)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_show_json() {
        let settings = Settings::default();
        let output = render(|out| show(&settings, OutputFormat::Json, out));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["files"]["region"]["filename"], "admin1CodesASCII.txt");
        assert_eq!(value["ignore_empty_regions"], false);
    }

    #[test]
    fn test_show_toml() {
        let settings = Settings::default();
        let output = render(|out| show(&settings, OutputFormat::Toml, out));

        let table: toml::Table = toml::from_str(&output).unwrap();
        assert_eq!(
            table["files"]["postal_code"]["filename"].as_str(),
            Some("allCountries.zip")
        );
    }

    #[test]
    fn test_urls_default_to_all_stages() {
        let settings = Settings::default();
        let output = render(|out| urls(&settings, &[], out));

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "country\thttp://download.geonames.org/export/dump/countryInfo.txt"
        );
        assert!(!output.contains("hierarchy"));
    }

    #[test]
    fn test_countries_active_and_retired() {
        let settings = Settings::default();

        let active = render(|out| countries(&settings, false, out));
        assert_eq!(active.lines().count(), COUNTRY_CODES.len());

        let retired = render(|out| countries(&settings, true, out));
        assert_eq!(retired, "CS\nAN\n");
    }
}
