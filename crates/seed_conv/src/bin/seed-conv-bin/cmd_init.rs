use super::*;
use tokio::io::AsyncWriteExt;

pub(crate) async fn exec(root: std::path::PathBuf) -> SeedResult<()> {
    tokio::fs::DirBuilder::new()
        .recursive(true)
        .create(&root)
        .await?;
    let root = dunce::canonicalize(&root)?;

    let config_n = root.join(CONFIG_N);

    if tokio::fs::metadata(&config_n).await.is_ok() {
        return Err(format!(
            "{:?} already exists - refusing to overwrite existing config",
            config_n
        )
        .into());
    }

    let config = SeedConvConfigInner::default();

    let mut config_f = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&config_n)
        .await?;

    config_f.write_all(config.to_string().as_bytes()).await?;
    config_f.shutdown().await?;
    drop(config_f);

    tracing::debug!(?config_n, "wrote default config");
    println!("# seed-conv init config:\n{:?}", config_n);

    Ok(())
}
