use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
fn default_directives(verbose: bool, with_http_layer: bool) -> String {
    let mut directives = vec![if verbose {
        "courier_tracker=debug"
    } else {
        "courier_tracker=info"
    }];
    if with_http_layer {
        directives.push("tower_http=info");
    }
    // 第三方 crate (reqwest, hyper) 只在 verbose 時輸出 info
    directives.push(if verbose { "info" } else { "warn" });
    directives.join(",")
}

fn env_filter(verbose: bool, with_http_layer: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, with_http_layer)))
}

/// Compact human readable logs on stderr, keeping stdout for results.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

pub fn init_server_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false, true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                // 伺服器輸出 JSON，方便日誌收集
                .json()
                .with_current_span(true),
        )
        .init();
}
