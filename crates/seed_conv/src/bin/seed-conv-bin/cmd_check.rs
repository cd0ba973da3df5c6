use super::*;

pub(crate) async fn exec(opt: OptInput) -> SeedResult<()> {
    let input = opt.read().await?;
    let seed = opt.form.recover(&input)?;
    drop(input);

    let network = seed.network_flag();
    println!("network: {network}");

    if network == NetworkFlag::Invalid {
        return Err(one_err::OneErr::with_message(
            seed_codec::error::INVALID_FLAG_ERROR,
            "seed network flag bits match neither live nor test",
        ));
    }

    Ok(())
}
