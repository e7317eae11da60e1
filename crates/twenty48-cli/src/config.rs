use std::io::Read;

/// Runtime configuration for the terminal game.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub spawn: Spawn,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Spawn {
    /// Percent chance that a spawned tile is a 2; the rest are 4s.
    #[serde(default = "defaults::low_rate")]
    pub low_rate: u8,
}

impl Default for Spawn {
    fn default() -> Self {
        Self {
            low_rate: defaults::low_rate(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg: Self = toml::from_str(&contents)?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn low_rate() -> u8 {
        90
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_are_omitted() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.spawn.low_rate, 90);
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn spawn_rate_overrides() {
        let cfg: Config = toml::from_str("[spawn]\nlow_rate = 75\n").unwrap();
        assert_eq!(cfg.spawn.low_rate, 75);
    }
}
