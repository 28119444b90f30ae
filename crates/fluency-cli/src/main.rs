//! `fluency` binary

use fluency_cli::{cli, init_tracing, run, FluencyConfig};
use fluency_path::SystemClock;
use std::path::PathBuf;

fn main() {
    let matches = cli().get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    let config = match FluencyConfig::load(config_path.map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };
    init_tracing(&config, matches.get_flag("verbose"));

    match run(&matches, &config, &SystemClock) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}
