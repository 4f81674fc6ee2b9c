use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Log level for the verbosity flags; `quiet` wins over the default, `verbose`
/// over both
pub fn log_level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging with the level for the given flags.
///
/// A second initialization is ignored, so the first logger stays in place.
pub fn init_logging(verbose: bool, quiet: bool) -> LevelFilter {
    let level = log_level(verbose, quiet);

    if SimpleLogger::new().with_level(level).init().is_err() {
        log::set_max_level(level);
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, false), LevelFilter::Info);
        assert_eq!(log_level(true, false), LevelFilter::Debug);
        assert_eq!(log_level(false, true), LevelFilter::Error);
    }
}
