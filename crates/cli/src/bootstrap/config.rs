use ferrous_mdns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}
