//! Console rendering of a seed.

use seed_codec::{Seed, SeedResult};

/// Render every representation of a seed plus `key_count` derived
/// subkeys of `key_size` bytes, one `label: value` pair per line.
pub fn render(seed: &Seed, key_count: usize, key_size: usize) -> SeedResult<String> {
    let keys = seed.derive_subkeys_hex(key_count, key_size)?;

    let mut out = String::new();
    out.push_str(&format!("phrase: {}\n", seed.to_phrase().join(" ")));
    out.push_str(&format!("base58: {}\n", seed.to_container_text()));
    out.push_str(&format!("hex: {}\n", seed.to_hex()));
    out.push_str(&format!("network: {}\n", seed.network_flag()));
    for (i, key) in keys.iter().enumerate() {
        out.push_str(&format!("key{}: {}\n", i + 1, key));
    }
    Ok(out)
}
