use clap::Parser;
use stegano_delta_core::SteganoError;

mod cli;
mod commands;

pub type CliResult<T> = Result<T, SteganoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = cli::CliArgs::parse();
    let options = args.codec_options();
    log::debug!("running {:?} with {:?}", args.command, options);

    match args.command {
        cli::Commands::Encode(encode) => encode.run(options),
        cli::Commands::Decode(decode) => decode.run(options),
        cli::Commands::DecodeRaw(decode_raw) => decode_raw.run(),
    }
}
