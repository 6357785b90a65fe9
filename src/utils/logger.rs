use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "course_ender=debug,info"
    } else {
        "course_ender=info"
    }
}

/// Installs the global subscriber. Diagnostics go to stderr so they never mix
/// with messages a `ConsoleLogger` prints on stdout.
pub fn init_cli_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 兩種輸出格式的型別不同，用 Option 讓未選用的那層成為 no-op
    let (compact, json_layer) = if json {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .json();
        (None, Some(layer))
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();
        (Some(layer), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json_layer)
        .init();
}
