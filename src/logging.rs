use std::sync::Once;

static INIT: Once = Once::new();

/// Sets up `env_logger` once. `RUST_LOG` wins over the `info` default.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.format_timestamp(None).init();
    });
}
