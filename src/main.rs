use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{debug, error};

use randapi::config::{
  self, AppConfig, DEFAULT_API_PATH, DEFAULT_SEPARATOR, EMBEDDED_API_KEY
};
use randapi::operations::{
  BlobFormat, BlobParams, CoinFace, CoinParams, DecimalParams,
  GaussianParams, IntegerParams, Operation, StringParams, UuidParams,
};
use randapi::operations::string::DEFAULT_CHARSET;
use randapi::{Error, OutputProcessor, RandClient};

#[derive(Parser)]
#[command(name = "randapi")]
#[command(about = "cli program to retrieve values from random.org", long_about = None)]
#[command(version)]
struct Cli
{   #[arg(long, global = true, default_value = DEFAULT_API_PATH, help = "random api path")]
    api_path: String
  , #[arg(long, global = true, env = "RANDAPI_API_KEY", hide_env_values = true, help = "specify custom apikey [default: embedded resource]")]
    apikey: Option<String>
  , #[arg(long = "pr-id", global = true, help = "pregenerated randomization by id string")]
    pr_id: Option<String>
  , #[arg(long = "pr-date", global = true, help = "pregenerated randomization by date (YYYY-MM-DD)")]
    pr_date: Option<String>
  , #[arg(short, long, global = true, help = "make verbose output after completion")]
    verbose: bool
  , #[arg(short, long, global = true, conflicts_with = "verbose", help = "suppress all warnings")]
    quiet: bool
  , #[arg(short, long, global = true, default_value_t = 5, help = "randomness server response timeout in seconds")]
    timeout: u64
  , #[arg(long, visible_alias = "sep", global = true, default_value = DEFAULT_SEPARATOR, help = "string to separate output")]
    separator: String
  , #[arg(short = 'o', long = "file", global = true, help = "save output to specified file")]
    file: Option<PathBuf>
  , #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands
{   /// generate random integers in a range
    #[command(visible_alias = "int")]
    Integer
    {   #[arg(long, default_value_t = 1, allow_hyphen_values = true, help = "lower bound [-1e9, 1e9]")]
        from: i64
      , #[arg(long, default_value_t = 100, allow_hyphen_values = true, help = "upper bound [-1e9, 1e9]")]
        to: i64
      , #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
      , #[arg(short, long, help = "values are unique")]
        unique: bool
    }
  , /// generate random coinflip result (two values possible)
    Coin
    {   #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
      , #[arg(short, long, default_value = "eng", help = "format of printed result. One of 'eng' 'ukr' 'num'")]
        format: CoinFace
    }
  , /// generate random decimal fractions in [0, 1) times base
    #[command(visible_alias = "dec")]
    Decimal
    {   #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true, help = "multiplier applied to every value")]
        base: f64
      , #[arg(short, long, default_value_t = 2, help = "decimal places [1, 14]")]
        places: u32
      , #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
      , #[arg(short, long, help = "values are unique")]
        unique: bool
    }
  , /// generate values from a gaussian distribution
    #[command(visible_alias = "gauss")]
    Gaussian
    {   #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true, help = "distribution mean [-1e6, 1e6]")]
        mean: f64
      , #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true, help = "standard deviation [-1e6, 1e6]")]
        deviation: f64
      , #[arg(short, long, default_value_t = 8, help = "significant digits [2, 14]")]
        signdig: u32
      , #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
    }
  , /// generate random string of given characters
    #[command(visible_alias = "str")]
    String
    {   #[arg(short, long, default_value_t = 1, help = "length of generated strings [1, 32]")]
        length: u32
      , #[arg(short, long, default_value = DEFAULT_CHARSET, hide_default_value = true, help = "characters to be used in generation. Max len - 128 [default: [A-Za-z0-9_]]")]
        charset: String
      , #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
      , #[arg(short, long, help = "strings are unique, characters may repeat")]
        unique: bool
    }
  , /// generate random version 4 UUIDs
    Uuid
    {   #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
    }
  , /// generate random binary blobs
    Blob
    {   #[arg(short, long, default_value_t = 8, help = "size of each blob in bits, divisible by 8")]
        size: u64
      , #[arg(short = 'N', long, default_value_t = 1, help = "number of values returned [1, 10000]")]
        number: u32
      , #[arg(long, help = "hex output instead of base64")]
        hex: bool
    }
  , /// get current apiKey usage
    #[command(visible_alias = "st")]
    Status
  , /// get randapi basic info
    Version
}

#[tokio::main]
async fn main() -> ExitCode
{   let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("{}", e);
          ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool, quiet: bool)
{   let level = if quiet
    {   "error"
    } else if verbose
    {   "info"
    } else
    {   "warn"
    };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(level)
    )
    .format_target(false)
    .format_timestamp(None)
    .init();
}

async fn run(cli: Cli) -> Result<(), Error>
{   if let Commands::Version = cli.command
    {   return print_version(cli.apikey.as_deref());
    }

    let cfg = resolve_config(&cli)?;
    debug!("Config resolved: timeout {:?}", cfg.timeout);

    let client = RandClient::new(&cfg.api_path, cfg.timeout)?;
    let mut output = OutputProcessor::new(
      cfg.verbose
    , cfg.quiet
    , cfg.separator.clone()
    , open_writer(&cfg)?
    );
    let key = cfg.api_key.clone();
    let pregen = cfg.pregen.clone();

    match cli.command
    {   Commands::Integer { from, to, number, unique } => {
          let op = IntegerParams::new(key, from, to, number, unique, pregen);
          generate(&client, &mut output, &op).await
        }
      , Commands::Coin { number, format } => {
          let op = CoinParams::new(key, number, format, pregen);
          generate(&client, &mut output, &op).await
        }
      , Commands::Decimal { base, places, number, unique } => {
          let op = DecimalParams::new(
            key, base, places, number, unique, pregen
          );
          generate(&client, &mut output, &op).await
        }
      , Commands::Gaussian { mean, deviation, signdig, number } => {
          let op = GaussianParams::new(
            key, mean, deviation, signdig, number, pregen
          );
          generate(&client, &mut output, &op).await
        }
      , Commands::String { length, charset, number, unique } => {
          let op = StringParams::new(
            key, length, &charset, number, unique, pregen
          );
          generate(&client, &mut output, &op).await
        }
      , Commands::Uuid { number } => {
          let op = UuidParams::new(key, number, pregen);
          generate(&client, &mut output, &op).await
        }
      , Commands::Blob { size, number, hex } => {
          let format = if hex { BlobFormat::Hex } else { BlobFormat::Base64 };
          let op = BlobParams::new(key, size, number, format, pregen);
          generate(&client, &mut output, &op).await
        }
      , Commands::Status => {
          let usage = client.get_usage(&cfg.api_key).await?;
          output.generate_usage_output(&usage)
        }
      , Commands::Version => Ok(())
    }
}

async fn generate<O: Operation>(
  client: &RandClient
, output: &mut OutputProcessor
, op: &O
) -> Result<(), Error>
{   let generated = client.generate(op).await?;
    output.generate_rand_output(&generated.values, &generated.api_info)
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, Error>
{   let api_key = config::resolve_api_key(
      cli.apikey.as_deref()
    , EMBEDDED_API_KEY
    )?;
    let pregen = config::resolve_pregen(
      cli.pr_id.clone()
    , cli.pr_date.clone()
    , chrono::Utc::now().date_naive()
    )?;

    Ok(AppConfig
    {   api_path: cli.api_path.clone()
      , api_key
      , timeout: Duration::from_secs(cli.timeout)
      , pregen
      , verbose: cli.verbose
      , quiet: cli.quiet
      , separator: cli.separator.clone()
      , output_file: cli.file.clone()
    })
}

fn open_writer(cfg: &AppConfig) -> Result<Box<dyn Write + Send>, Error>
{   match &cfg.output_file
    {   Some(path) => {
          debug!("Writing output to {}", path.display());
          Ok(Box::new(File::create(path)?))
        }
      , None => Ok(Box::new(std::io::stdout()))
    }
}

fn print_version(explicit_key: Option<&str>) -> Result<(), Error>
{   let key = explicit_key.or(EMBEDDED_API_KEY).unwrap_or_default();
    let mut out = std::io::stdout();
    writeln!(out, "RandAPI:")?;
    writeln!(out, "  version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "  api_key: {}", config::mask_api_key(key))?;
    Ok(())
}
