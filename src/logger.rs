use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::env;
use std::io::Write;

/// Install the process logger.
///
/// Logs go to stderr so generated SQL on stdout stays pipeable. `verbose`
/// forces debug output; otherwise `level` (from the config file) applies and
/// `RUST_LOG` overrides both.
pub fn setup_logger(level: &str, verbose: bool) {
    let filter = if verbose {
        LevelFilter::Debug
    } else {
        level.parse().unwrap_or(LevelFilter::Info)
    };

    let mut builder = Builder::new();
    builder.filter(None, filter);
    builder.target(Target::Stderr);

    builder.format(|buf, record| {
        let prefix = match record.level() {
            Level::Error => "error: ",
            Level::Warn => "warning: ",
            Level::Info | Level::Debug | Level::Trace => "",
        };
        writeln!(buf, "{}{}", prefix, record.args())
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    // A second call (e.g. from tests) keeps the first logger
    let _ = builder.try_init();
}
