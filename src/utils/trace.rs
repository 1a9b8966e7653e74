pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // committed transaction lines go to stdout; keep diagnostics quiet
        // so they do not interleave with the interactive menu.
        .with_writer(std::io::stderr)
        .init();
}
