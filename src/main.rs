// std imports
use std::{
    io::{BufRead, stdin, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wildrank::{App, Options, PatternStore, cli, config, error::*};

const WILDRANK_DEBUG_LOG: &str = "WILDRANK_DEBUG_LOG";
const WILDRANK_DEBUG_LOG_STYLE: &str = "WILDRANK_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WILDRANK_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WILDRANK_DEBUG_LOG)
                .write_style(WILDRANK_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());

    let (configs, no_default) = opt.configs();
    let settings = config::at(configs).no_default(no_default).load()?;

    let patterns = if opt.patterns.is_empty() {
        settings.patterns
    } else {
        opt.patterns
    };
    let store = PatternStore::new(patterns);
    log::debug!("pattern store ready with {} patterns", store.len());

    let candidates = if opt.stdin {
        stdin().lock().lines().collect::<std::io::Result<Vec<_>>>()?
    } else if opt.candidates.is_empty() {
        settings.samples
    } else {
        opt.candidates
    };

    let options = Options {
        stats: opt.stats || settings.stats,
    };

    let mut app = App::new(store, options);
    app.run(candidates, &mut stdout().lock())?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log();
        process::exit(1);
    }
}
