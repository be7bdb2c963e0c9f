use clap::Subcommand;
use offscreen_core::storage::Config;
use offscreen_core::Palette;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a config value by dot-separated key
    Get { key: String },
    /// Set a config value and persist
    Set { key: String, value: String },
    /// Print the full configuration as TOML
    List,
    /// Print the resolved color palette for the configured theme
    Theme,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Theme => {
            let config = Config::load_or_default();
            let palette = Palette::for_mode(config.ui.theme, config.ui.prefer_dark);
            println!("{}", serde_json::to_string_pretty(&palette)?);
        }
    }
    Ok(())
}
