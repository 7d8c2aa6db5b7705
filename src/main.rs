use std::io;
use std::path::PathBuf;

use bank_commands::bank_account::DEFAULT_OVERDRAFT_LIMIT;
use bank_commands::OutputFormat;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "bank_commands",
    about = "Runs deposit, withdraw and transfer commands against bank accounts and undoes them"
)]
struct Opt {
    /// CSV script with a `type,name,account,to,amount` header. Runs the built-in demo when omitted.
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>,

    /// Lowest balance a withdrawal may leave behind [default: -500]
    #[structopt(long, allow_hyphen_values = true)]
    overdraft_limit: Option<f64>,

    /// Output format: text, csv or json
    #[structopt(long, default_value = "text", possible_values = &["text", "csv", "json"])]
    format: OutputFormat,

    /// Log each step to stderr
    #[structopt(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let mut debug_logger: Box<dyn io::Write> = if opt.debug {
        Box::new(io::stderr())
    } else {
        Box::new(io::sink())
    };
    let stdout = io::stdout();
    let mut output = stdout.lock();

    bank_commands::cli(
        opt.script,
        opt.overdraft_limit.unwrap_or(DEFAULT_OVERDRAFT_LIMIT),
        opt.format,
        &mut output,
        &mut *debug_logger,
    )
}
