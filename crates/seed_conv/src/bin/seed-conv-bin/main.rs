#![deny(missing_docs)]
#![deny(unsafe_code)]

//! seed conversion command line tool

use seed_codec::{NetworkFlag, SeedResult};
use seed_conv::input::{self, InputForm};
use seed_conv::*;
use structopt::StructOpt;
use zeroize::Zeroizing;

mod cmd_check;
mod cmd_generate;
mod cmd_init;
mod cmd_recover;

pub(crate) async fn read_interactive_input(
    prompt: &str,
) -> SeedResult<Zeroizing<String>> {
    let prompt = prompt.to_owned();
    let input = tokio::task::spawn_blocking(move || {
        rpassword::prompt_password(prompt).map_err(one_err::OneErr::new)
    })
    .await
    .map_err(one_err::OneErr::new)??;

    Ok(Zeroizing::new(input))
}

pub(crate) async fn read_piped_input() -> SeedResult<Zeroizing<String>> {
    let mut stdin = tokio::io::stdin();
    let mut input_tmp = Zeroizing::new(Vec::new());

    use tokio::io::AsyncReadExt;
    stdin.read_to_end(&mut input_tmp).await?;

    input::trim_line_ending(&mut input_tmp);

    let input = std::str::from_utf8(&input_tmp)
        .map_err(one_err::OneErr::new)?
        .to_owned();
    Ok(Zeroizing::new(input))
}

#[derive(Debug, StructOpt)]
pub(crate) struct OptInput {
    /// The form the secret input is given in:
    /// "hex", "phrase" or "base58".
    #[structopt(verbatim_doc_comment)]
    pub form: InputForm,

    /// The secret input. A phrase may be given as separate
    /// words. If omitted, the input is read from an
    /// interactive prompt that does not echo, keeping it
    /// out of your `~/.bash_history`.
    #[structopt(verbatim_doc_comment)]
    pub input: Vec<String>,

    /// Instead of the normal "interactive" method of input
    /// retrieval, read the secret input from stdin.
    #[structopt(short = "p", long, verbatim_doc_comment)]
    pub piped: bool,
}

impl OptInput {
    /// Get the secret input from the command line, stdin or a prompt.
    pub(crate) async fn read(&self) -> SeedResult<Zeroizing<String>> {
        if !self.input.is_empty() {
            if self.piped {
                return Err("--piped conflicts with a command line input".into());
            }
            return Ok(Zeroizing::new(self.input.join(" ")));
        }
        if self.piped {
            read_piped_input().await
        } else {
            read_interactive_input(&format!("\n# {}> ", self.form)).await
        }
    }
}

#[derive(Debug, StructOpt)]
pub(crate) struct OptKeys {
    /// Number of subkeys to derive and print.
    /// Overrides `keyCount` in the config file.
    #[structopt(short = "k", long, verbatim_doc_comment)]
    pub key_count: Option<usize>,

    /// Size in bytes of each derived subkey.
    /// Overrides `keySize` in the config file.
    #[structopt(short = "s", long, verbatim_doc_comment)]
    pub key_size: Option<usize>,
}

impl OptKeys {
    pub(crate) fn resolve(&self, config: &SeedConvConfig) -> (usize, usize) {
        (
            self.key_count.unwrap_or(config.key_count),
            self.key_size.unwrap_or(config.key_size),
        )
    }
}

#[derive(Debug, StructOpt)]
pub(crate) struct OptGenerate {
    /// Generate a test network seed.
    #[structopt(short = "t", long, verbatim_doc_comment)]
    pub test: bool,

    /// Generate a live network seed.
    #[structopt(short = "l", long, conflicts_with = "test", verbatim_doc_comment)]
    pub live: bool,

    #[structopt(flatten)]
    pub keys: OptKeys,
}

impl OptGenerate {
    pub(crate) fn network(&self, config: &SeedConvConfig) -> NetworkFlag {
        if self.test {
            NetworkFlag::Test
        } else if self.live {
            NetworkFlag::Live
        } else {
            config.network
        }
    }
}

#[derive(Debug, StructOpt)]
pub(crate) struct OptRecover {
    #[structopt(flatten)]
    pub input: OptInput,

    #[structopt(flatten)]
    pub keys: OptKeys,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Write a default seed-conv-config.yaml into the root
    /// directory. Refuses to overwrite an existing config.
    #[structopt(verbatim_doc_comment)]
    Init,

    /// Generate a new random seed and print all of its
    /// representations and derived subkeys.
    #[structopt(verbatim_doc_comment)]
    Generate(OptGenerate),

    /// Recover a seed from hex, phrase or base58 input and
    /// print all of its representations and derived subkeys.
    #[structopt(verbatim_doc_comment)]
    Recover(OptRecover),

    /// Recover a seed and print only its network flag.
    /// Exits with an error if the flag bits are inconsistent.
    #[structopt(verbatim_doc_comment)]
    Check(OptInput),
}

#[derive(Debug, StructOpt)]
#[structopt(about = "seed conversion tool")]
struct Opt {
    /// Root directory holding the config file.
    #[structopt(short = "r", long, default_value = ".", env = "SEED_CONV_ROOT")]
    root: std::path::PathBuf,

    /// The subcommand to execute
    #[structopt(subcommand)]
    cmd: Cmd,
}

fn init_tracing() {
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish(),
    );
}

async fn exec() -> SeedResult<()> {
    let opt = Opt::from_args();
    let Opt { root, cmd } = opt;
    match cmd {
        Cmd::Init => cmd_init::exec(root).await,
        Cmd::Generate(opt) => {
            let config = load_config(&dunce::canonicalize(&root)?).await?;
            cmd_generate::exec(config, opt).await
        }
        Cmd::Recover(opt) => {
            let config = load_config(&dunce::canonicalize(&root)?).await?;
            cmd_recover::exec(config, opt).await
        }
        Cmd::Check(opt) => cmd_check::exec(opt).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    if let Err(e) = exec().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
