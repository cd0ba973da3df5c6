use super::*;
use seed_codec::Seed;

pub(crate) async fn exec(
    config: SeedConvConfig,
    opt: OptGenerate,
) -> SeedResult<()> {
    let network = opt.network(&config);
    let (key_count, key_size) = opt.keys.resolve(&config);

    let seed = Seed::generate(network)?;
    let out = Zeroizing::new(report::render(&seed, key_count, key_size)?);
    print!("{}", *out);

    Ok(())
}
