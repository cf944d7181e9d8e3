use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg.redacted())?);
        }

        if *check {
            let missing = cfg.missing_fields();
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                warning(format!("Missing values: {}", missing.join(", ")));
                cfg.validate("configuration")?;
            }
        }
    }

    Ok(())
}
