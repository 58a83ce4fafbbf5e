use crate::core::DigestEncoding;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "typechain")]
pub struct Opt {
    #[arg(long = "config", global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,
    #[arg(
        long = "encoding",
        global = true,
        help = "Digest encoding (concatenated, delimited)"
    )]
    pub encoding: Option<DigestEncoding>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "append", about = "Append payloads to a new chain and print each block")]
    Append {
        #[arg(required = true, help = "Block payloads, oldest first")]
        payloads: Vec<String>,
    },
    #[command(name = "printchain", about = "Print all blocks in the chain")]
    Printchain {
        #[arg(help = "Block payloads, oldest first")]
        payloads: Vec<String>,
        #[arg(long = "json", help = "Print the blocks as a JSON array")]
        json: bool,
    },
    #[command(name = "getblock", about = "Print the block at a 0-based index")]
    GetBlock {
        #[arg(help = "Index of the block")]
        index: usize,
        #[arg(help = "Block payloads, oldest first")]
        payloads: Vec<String>,
    },
    #[command(name = "digest", about = "Compute a single block digest")]
    Digest {
        #[arg(help = "Hash of the previous block (\"\" for the first block)")]
        previous_hash: String,
        #[arg(help = "1-based height of the block")]
        height: usize,
        #[arg(help = "Block payload")]
        payload: String,
    },
    #[command(name = "verify", about = "Verify a JSON array of blocks")]
    Verify {
        #[arg(help = "File written by 'printchain --json'")]
        file: PathBuf,
    },
    #[command(name = "demo", about = "Show that listed copies cannot alter the chain")]
    Demo,
}
