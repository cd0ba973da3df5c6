use one_err::OneErr;
use seed_codec::{error::*, NetworkFlag, SeedResult};
use std::path::Path;
use std::sync::Arc;

/// File name of the config file inside the root directory.
pub const CONFIG_N: &str = "seed-conv-config.yaml";

/// Seed conv configuration, as stored in `seed-conv-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedConvConfigInner {
    /// network flag embedded in newly generated seeds
    pub network: NetworkFlag,

    /// number of subkeys to print
    pub key_count: usize,

    /// size of each printed subkey in bytes
    pub key_size: usize,
}

/// Shared seed conv configuration.
pub type SeedConvConfig = Arc<SeedConvConfigInner>;

impl Default for SeedConvConfigInner {
    fn default() -> Self {
        Self {
            network: NetworkFlag::Live,
            key_count: 10,
            key_size: 32,
        }
    }
}

impl std::fmt::Display for SeedConvConfigInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_yaml::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl SeedConvConfigInner {
    /// Parse and validate a yaml encoded config.
    pub fn from_bytes(bytes: &[u8]) -> SeedResult<Self> {
        let config: Self =
            serde_yaml::from_slice(bytes).map_err(OneErr::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config values are usable.
    pub fn validate(&self) -> SeedResult<()> {
        if self.network == NetworkFlag::Invalid {
            return Err(OneErr::with_message(
                INVALID_FLAG_ERROR,
                "config network should be live or test",
            ));
        }
        if self.key_count == 0 || self.key_size == 0 {
            return Err(OneErr::with_message(
                INVALID_ARGUMENT_ERROR,
                format!(
                    "config keyCount and keySize must be positive, got {} and {}",
                    self.key_count, self.key_size,
                ),
            ));
        }
        Ok(())
    }
}

/// Load the config file from the root directory.
/// A missing file yields the default config.
pub async fn load_config(root: &Path) -> SeedResult<SeedConvConfig> {
    let config_n = root.join(CONFIG_N);

    let config = match tokio::fs::read(&config_n).await {
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::trace!(?config_n, "no config file, using defaults");
            SeedConvConfigInner::default()
        }
        Err(e) => {
            return Err(format!(
                "Could not read config file {config_n:?} - {e}"
            )
            .into());
        }
        Ok(bytes) => {
            tracing::trace!(?config_n, "loading config file");
            SeedConvConfigInner::from_bytes(&bytes)?
        }
    };

    Ok(Arc::new(config))
}
