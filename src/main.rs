// Entry point for the typechain CLI
use clap::Parser;
use log::{error, LevelFilter};
use std::io;
use std::process;
use typechain::{load_settings, run_command, Opt, GLOBAL_CONFIG};

fn main() {
    let opt = Opt::parse();

    // A settings file can change the log level, so I load it before logging starts
    let level = match load_settings(&opt, &GLOBAL_CONFIG) {
        Ok(level) => level,
        Err(e) => {
            env_logger::builder().filter_level(LevelFilter::Info).init();
            error!("Error: {e}");
            process::exit(1);
        }
    };
    env_logger::builder().filter_level(level).init();

    let result = GLOBAL_CONFIG
        .get_digest_encoding()
        .and_then(|encoding| run_command(opt.command, encoding, &mut io::stdout().lock()));
    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}
