/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// The level picked by the logging flags, the most verbose one wins
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        // also --warn
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }
    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use log::Level;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::log_level;

    fn level_for(args: &[&str]) -> Level {
        let matches = create_cmd_args()
            .try_get_matches_from(["textpix", "algorithms"].iter().chain(args))
            .unwrap();
        log_level(&matches)
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(level_for(&[]), Level::Warn);
        assert_eq!(level_for(&["--warn"]), Level::Warn);
        assert_eq!(level_for(&["--info"]), Level::Info);
        assert_eq!(level_for(&["--debug"]), Level::Debug);
        assert_eq!(level_for(&["--debug", "--trace"]), Level::Trace);
    }
}
