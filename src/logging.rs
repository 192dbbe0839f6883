//! Logger initialisation
//!
//! Logs go to stderr so stdout carries only the game itself. `RUST_LOG`
//! overrides the level picked from `-v` flags.

use env_logger::Env;

/// Map the `-v` count to a default filter level
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global logger; later calls are ignored
pub fn init(verbose: u8) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level_for(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        assert_eq!(level_for(0), "warn");
    }

    #[test]
    fn each_flag_raises_level() {
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
