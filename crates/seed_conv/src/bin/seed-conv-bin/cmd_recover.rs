use super::*;

pub(crate) async fn exec(
    config: SeedConvConfig,
    opt: OptRecover,
) -> SeedResult<()> {
    let (key_count, key_size) = opt.keys.resolve(&config);

    let input = opt.input.read().await?;
    let seed = opt.input.form.recover(&input)?;
    drop(input);

    let out = Zeroizing::new(report::render(&seed, key_count, key_size)?);
    print!("{}", *out);

    Ok(())
}
