use clap::{Parser, Subcommand};
use stegano_delta_core::{CapacityPolicy, CodecOptions, LinearIndex};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct CliArgs {
    /// Experimental: how pixels are mapped to message characters (diagonal, row-major)
    #[arg(long = "x-linear-index", default_value_t = LinearIndex::Diagonal, global = true)]
    pub linear_index: LinearIndex,

    /// Experimental: fail instead of truncating messages that do not fit into the image
    #[arg(long = "x-strict-capacity", global = true)]
    pub strict_capacity: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions::default()
            .with_linear_index(self.linear_index)
            .with_capacity_policy(if self.strict_capacity {
                CapacityPolicy::Reject
            } else {
                CapacityPolicy::Truncate
            })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    DecodeRaw(decode_raw::DecodeRawArgs),
}
