//! Offline subcommands: catalog listing and config checks.

use std::path::Path;

use mergington_config::{Config, ConfigValidator};
use mergington_registry::{ActivityListing, Catalog};

use crate::cli::OutputFormat;
use crate::server::build_registry;

/// Print the activities the server would start with.
pub(crate) fn list_activities(
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let listing = build_registry(config)?.list_activities();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        OutputFormat::Table => print!("{}", render_table(&listing)),
    }
    Ok(())
}

fn render_table(listing: &ActivityListing) -> String {
    if listing.is_empty() {
        return "No activities found.\n".to_string();
    }

    let mut out = format!(
        "{:<20} {:<45} {:>8}\n{}\n",
        "ACTIVITY",
        "SCHEDULE",
        "SIGNED",
        "-".repeat(75)
    );
    for activity in listing.iter() {
        let signed = format!(
            "{}/{}",
            activity.participants.len(),
            activity.max_participants
        );
        out.push_str(&format!(
            "{:<20} {:<45} {:>8}\n",
            activity.name, activity.schedule, signed
        ));
    }
    out
}

/// Validate config and catalog, printing every finding.
///
/// Returns an error when anything would stop the server from starting.
pub(crate) fn check_config(
    config_path: &Path,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Checking {}", config_path.display());

    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        println!("  warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("  error: {}: {}", error.path, error.message);
    }

    if let Some(ref path) = config.catalog.path {
        if path.exists() {
            match Catalog::load(path).and_then(|c| c.validate().map(|_| c)) {
                Ok(catalog) => println!("  catalog: {} activities", catalog.len()),
                Err(e) => {
                    println!("  error: catalog: {}", e);
                    return Err(e.into());
                }
            }
        }
    } else {
        println!("  catalog: built-in ({} activities)", Catalog::default_school().len());
    }

    result.into_result()?;
    println!("OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergington_config::ConfigLoader;
    use mergington_registry::ActivityRegistry;

    #[test]
    fn test_render_table() {
        let listing = ActivityRegistry::default().list_activities();
        let table = render_table(&listing);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("ACTIVITY"));
        assert_eq!(lines.len(), 2 + listing.len());
        assert!(lines[2].starts_with("Chess Club"));
        assert!(lines[2].ends_with("2/12"));
    }

    #[test]
    fn test_render_empty_table() {
        let listing = ActivityListing::default();
        assert_eq!(render_table(&listing), "No activities found.\n");
    }

    #[test]
    fn test_check_default_config() {
        let config = Config::default();
        assert!(check_config(Path::new("config/default.toml"), &config).is_ok());
    }

    #[test]
    fn test_shipped_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(check_config(&path, &config).is_ok());
    }

    #[test]
    fn test_check_config_reports_errors() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(check_config(Path::new("config/default.toml"), &config).is_err());
    }
}
