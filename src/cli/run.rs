// Handlers for each CLI subcommand
// Everything is written to `out` so the binary prints to stdout and tests read a buffer

use crate::cli::{Command, Opt};
use crate::config::Config;
use crate::core::{digest_with, verify_blocks, Block, BlockRecord, Blockchain, DigestEncoding};
use crate::error::{ChainError, Result};
use crate::utils::{deserialize, serialize_pretty};
use log::{info, LevelFilter};
use std::fs;
use std::io::Write;

// The four payloads the demo chain starts with
const DEMO_PAYLOADS: [&str; 4] = ["first block", "second block", "third block", "fourth block"];

/// Apply `--config` then `--encoding` to `config` and return the log level to use.
///
/// The flag beats the file, which beats env vars, which beat the defaults.
pub fn load_settings(opt: &Opt, config: &Config) -> Result<LevelFilter> {
    if let Some(path) = &opt.config {
        config.load_file(path)?;
    }
    if let Some(encoding) = opt.encoding {
        config.set_digest_encoding(encoding);
    }
    config.get_log_level()
}

pub fn run_command<W: Write>(
    command: Command,
    encoding: DigestEncoding,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Append { payloads } => {
            let blockchain = build_chain(&payloads, encoding);
            for block in blockchain.list() {
                writeln!(out, "Appended block {} at height {}", block.get_hash(), block.get_height())?;
            }
        }
        Command::Printchain { payloads, json } => {
            let blockchain = build_chain(&payloads, encoding);
            if json {
                writeln!(out, "{}", serialize_pretty(&blockchain.list())?)?;
            } else {
                // newest first, like walking back from the tip
                for block in blockchain.iterator() {
                    print_block(out, &block)?;
                }
            }
        }
        Command::GetBlock { index, payloads } => {
            let blockchain = build_chain(&payloads, encoding);
            let block = blockchain
                .get_block(index)
                .ok_or(ChainError::BlockNotFound {
                    index,
                    length: blockchain.len(),
                })?;
            print_block(out, &block)?;
        }
        Command::Digest {
            previous_hash,
            height,
            payload,
        } => {
            writeln!(out, "{}", digest_with(encoding, &previous_hash, height, &payload))?;
        }
        Command::Verify { file } => {
            let text = fs::read_to_string(&file)?;
            let blocks: Vec<BlockRecord> = deserialize(&text)?;
            verify_blocks(&blocks, encoding)?;
            info!("Verified {} blocks from {}", blocks.len(), file.display());
            writeln!(out, "Chain of {} blocks is valid", blocks.len())?;
        }
        Command::Demo => run_demo(encoding, out)?,
    }
    Ok(())
}

fn build_chain(payloads: &[String], encoding: DigestEncoding) -> Blockchain {
    let blockchain = Blockchain::with_encoding(encoding);
    for payload in payloads {
        blockchain.append(payload.as_str());
    }
    blockchain
}

fn print_block<W: Write>(out: &mut W, block: &Block) -> Result<()> {
    writeln!(out, "Height: {}", block.get_height())?;
    writeln!(out, "Prev block hash: {}", block.get_previous_hash())?;
    writeln!(out, "Cur block hash: {}", block.get_hash())?;
    writeln!(out, "Payload: {}", block.get_payload())?;
    writeln!(out)?;
    Ok(())
}

// Pushes a forged block into a listed copy and shows the chain never sees it
fn run_demo<W: Write>(encoding: DigestEncoding, out: &mut W) -> Result<()> {
    let blockchain = Blockchain::with_encoding(encoding);
    for payload in DEMO_PAYLOADS {
        blockchain.append(payload);
    }

    let mut copy = blockchain.list();
    copy.push(Block::new_block(
        "hacking test".to_string(),
        11111,
        "hacking data".to_string(),
        encoding,
    ));

    writeln!(out, "Listed copy now holds {} blocks", copy.len())?;
    match verify_blocks(&copy, encoding) {
        Ok(()) => writeln!(out, "Forged copy unexpectedly verified")?,
        Err(e) => writeln!(out, "Forged copy rejected: {e}")?,
    }

    writeln!(out, "Chain still holds {} blocks", blockchain.len())?;
    blockchain.verify_chain()?;
    writeln!(out, "Chain verified")?;
    writeln!(out, "{}", serialize_pretty(&blockchain.list())?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digest;
    use crate::testnet::{create_test_blockchain, SAMPLE_PAYLOADS};
    use clap::Parser;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run_command(command, DigestEncoding::Concatenated, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn payloads(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_append_prints_each_block() {
        let output = run(Command::Append {
            payloads: payloads(&["a", "b"]),
        })
        .unwrap();
        let first = digest("", 1, "a");
        assert!(output.contains(&format!("Appended block {first} at height 1")));
        assert!(output.contains(&format!(
            "Appended block {} at height 2",
            digest(&first, 2, "b")
        )));
    }

    #[test]
    fn test_printchain_json_matches_chain() {
        let output = run(Command::Printchain {
            payloads: payloads(&["a", "b", "c"]),
            json: true,
        })
        .unwrap();
        let records: Vec<BlockRecord> = deserialize(&output).unwrap();
        let expected: Vec<BlockRecord> = create_test_blockchain(&["a", "b", "c"])
            .list()
            .iter()
            .map(BlockRecord::from)
            .collect();
        assert_eq!(records, expected);
    }

    #[test]
    fn test_printchain_newest_first() {
        let output = run(Command::Printchain {
            payloads: payloads(&["a", "b"]),
            json: false,
        })
        .unwrap();
        let second = output.find("Payload: b").unwrap();
        let first = output.find("Payload: a").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_getblock_out_of_range() {
        let result = run(Command::GetBlock {
            index: 5,
            payloads: payloads(&["a", "b", "c"]),
        });
        assert!(matches!(
            result,
            Err(ChainError::BlockNotFound {
                index: 5,
                length: 3
            })
        ));
    }

    #[test]
    fn test_getblock_in_range() {
        let output = run(Command::GetBlock {
            index: 1,
            payloads: payloads(&["a", "b", "c"]),
        })
        .unwrap();
        assert!(output.contains("Height: 2"));
        assert!(output.contains("Payload: b"));
    }

    #[test]
    fn test_digest_command() {
        let output = run(Command::Digest {
            previous_hash: String::new(),
            height: 1,
            payload: "a".to_string(),
        })
        .unwrap();
        assert_eq!(output.trim(), digest("", 1, "a"));
    }

    #[test]
    fn test_verify_file() {
        let blocks = create_test_blockchain(&SAMPLE_PAYLOADS).list();
        let file = write_file(&serialize_pretty(&blocks).unwrap());

        let output = run(Command::Verify {
            file: file.path().to_path_buf(),
        })
        .unwrap();
        assert_eq!(output.trim(), "Chain of 4 blocks is valid");
    }

    #[test]
    fn test_verify_rejects_tampered_file() {
        let blocks = create_test_blockchain(&["a", "b"]).list();
        let json = serialize_pretty(&blocks)
            .unwrap()
            .replace("\"payload\": \"b\"", "\"payload\": \"B\"");
        assert!(json.contains("\"B\""));
        let file = write_file(&json);

        let result = run(Command::Verify {
            file: file.path().to_path_buf(),
        });
        assert!(matches!(result, Err(ChainError::InvalidBlock(_))));
    }

    #[test]
    fn test_verify_rejects_forged_hash() {
        let file = write_file(r#"[{"hash":"forged","previous_hash":"","height":1,"payload":"a"}]"#);
        let result = run(Command::Verify {
            file: file.path().to_path_buf(),
        });
        assert!(matches!(result, Err(ChainError::InvalidBlock(msg)) if msg.contains("forged")));
    }

    #[test]
    fn test_verify_missing_file() {
        let result = run(Command::Verify {
            file: "/nonexistent/chain.json".into(),
        });
        assert!(matches!(result, Err(ChainError::Io(_))));
    }

    #[test]
    fn test_demo_rejects_forged_copy() {
        let output = run(Command::Demo).unwrap();
        assert!(output.contains("Listed copy now holds 5 blocks"));
        assert!(output.contains("Forged copy rejected"));
        assert!(output.contains("Chain still holds 4 blocks"));
        assert!(output.contains("Chain verified"));
    }

    #[test]
    fn test_encoding_flag_beats_config_file() {
        let file = write_file("digest_encoding = \"delimited\"\nlog_level = \"warn\"\n");
        let path = file.path().to_str().unwrap();
        let opt = Opt::try_parse_from([
            "typechain",
            "demo",
            "--config",
            path,
            "--encoding",
            "concatenated",
        ])
        .unwrap();

        let config = Config::new();
        let level = load_settings(&opt, &config).unwrap();
        assert_eq!(level, LevelFilter::Warn);
        assert_eq!(
            config.get_digest_encoding().unwrap(),
            DigestEncoding::Concatenated
        );
    }

    #[test]
    fn test_config_file_applies_without_flag() {
        let file = write_file("digest_encoding = \"delimited\"\nlog_level = \"error\"\n");
        let path = file.path().to_str().unwrap();
        let opt = Opt::try_parse_from(["typechain", "demo", "--config", path]).unwrap();

        let config = Config::new();
        assert_eq!(load_settings(&opt, &config).unwrap(), LevelFilter::Error);
        assert_eq!(config.get_digest_encoding().unwrap(), DigestEncoding::Delimited);
    }

    #[test]
    fn test_bad_config_file_fails_settings() {
        let file = write_file("log_level = \"loud\"\n");
        let path = file.path().to_str().unwrap();
        let opt = Opt::try_parse_from(["typechain", "demo", "--config", path]).unwrap();
        assert!(matches!(
            load_settings(&opt, &Config::new()),
            Err(ChainError::Config(_))
        ));
    }
}
