use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output.
///
/// `RUST_LOG` still wins when set; otherwise the crate logs at `info`,
/// or `debug` when the CLI was invoked with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "anno_qc=debug"
    } else {
        "anno_qc=info"
    };

    let filter = EnvFilter::from_default_env().add_directive(default_directive.parse().unwrap());

    let console_layer = fmt::layer().with_target(false).with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}
