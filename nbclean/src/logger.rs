// nbclean/src/logger.rs
//! Logger initialisation for the `nbclean` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger`.
///
/// `RUST_LOG` is honoured (defaulting to `warn`) unless `level` is given, in
/// which case `RUST_LOG` is ignored entirely and `level` applies to every
/// module. Calling this more than once is a no-op.
pub fn init_logger(level: Option<LevelFilter>) {
    let _ = builder_for(level, Env::default().default_filter_or("warn")).try_init();
}

fn builder_for(level: Option<LevelFilter>, env: Env<'_>) -> Builder {
    // Per-module directives from the environment would outrank `filter_level`.
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(env),
    };
    builder.format_timestamp(None).format_target(true);
    builder
}

/// Maps the global `--quiet` / `--debug` flags onto a level override.
pub fn level_for_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
