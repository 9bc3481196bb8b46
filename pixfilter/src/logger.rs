use std::io::Write;

/// Install the process logger.
///
/// Records are printed as `[time LEVEL file line] message` on stderr. The
/// level defaults to `warn` and can be changed with `RUST_LOG`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = buf.timestamp_seconds();

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
