use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Directives are read from `env_var`. Without it everything at info and above is logged.
pub fn env_filter(env_var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(env_var)
        .from_env_lossy()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_info_so_warnings_show() {
        let filter = env_filter("SHIKI_LOG_NEVER_SET");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn directives_from_env_var() {
        std::env::set_var("SHIKI_LOG_FILTER_TEST", "debug,hyper=info");
        let filter = env_filter("SHIKI_LOG_FILTER_TEST");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
