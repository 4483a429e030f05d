use std::io;
use std::process::ExitCode;

use hget_probe::{fetch, output, FetchConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 標準出力は結果行だけに使うため、ログは標準エラーに書く。
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = FetchConfig::default();
    debug!(?config, "starting fetch");

    let value = match fetch(&config).await {
        Ok(value) => value,
        Err(err) => {
            eprintln!("hget-probe: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = output::write_line(&mut io::stdout().lock(), &value) {
        eprintln!("hget-probe: failed to write result: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
