use env_logger::{fmt::Color, Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;

/// Thin wrapper around `env_logger`, matching the CLI's `-v`/`-q` flags to
/// a log level and applying a custom, level-colored formatter.
///
/// `-v` raises verbosity one step at a time (warn -> info -> debug ->
/// trace); `-q` silences even warnings. An `ARV_LOG` environment variable
/// overrides the computed level for ad hoc debugging, without recompiling.
pub struct Logger;

impl Logger {
    /// Initialize the global logger. `verbose` is the number of `-v`
    /// occurrences; `quiet` is the `-q` flag.
    ///
    /// # Panics
    /// If a logger has already been installed in this process.
    pub fn init(verbose: u8, quiet: bool) {
        let log_level = Self::verbosity_to_level(verbose, quiet);
        let env = Env::default().filter("ARV_LOG");

        Builder::new()
            .filter_level(log_level)
            .format(|buf, record| {
                let traceback = if record.level() == Level::Error {
                    format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0))
                } else {
                    String::new()
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(record.level() == Level::Error);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn => Color::Yellow,
                    Level::Info => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan,
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .try_init()
            .expect("Failed to install logger");
    }

    fn verbosity_to_level(verbose: u8, quiet: bool) -> LevelFilter {
        if quiet {
            return LevelFilter::Error;
        }
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            3..=u8::MAX => LevelFilter::Trace,
        }
    }

    pub fn set_level(verbose: u8, quiet: bool) {
        log::set_max_level(Self::verbosity_to_level(verbose, quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_expected_level() {
        assert_eq!(Logger::verbosity_to_level(0, false), LevelFilter::Warn);
        assert_eq!(Logger::verbosity_to_level(1, false), LevelFilter::Info);
        assert_eq!(Logger::verbosity_to_level(2, false), LevelFilter::Debug);
        assert_eq!(Logger::verbosity_to_level(10, false), LevelFilter::Trace);
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(Logger::verbosity_to_level(3, true), LevelFilter::Error);
    }
}
