use std::{env, process::ExitCode, time::Instant};

use log::{error, info};
use nj_scanner::{format_error, scanner::scanner::scan, source::source::SourceUnit};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let paths: Vec<String> = env::args().skip(1).collect();

    if paths.is_empty() {
        eprintln!("usage: nj-scanner <file.nj>...");
        return ExitCode::from(2);
    }

    let mut units = Vec::with_capacity(paths.len());
    for path in &paths {
        match SourceUnit::read(path) {
            Ok(unit) => units.push(unit),
            Err(err) => {
                error!("{}", err);
                eprint!("{}", format_error(&err, &units));
                return ExitCode::FAILURE;
            }
        }
    }

    let start = Instant::now();

    let tokens = match scan(&units) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", format_error(&err, &units));
            return ExitCode::FAILURE;
        }
    };

    info!("Scanned {} tokens in {:?}", tokens.len(), start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    ExitCode::SUCCESS
}
