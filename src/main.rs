// src/main.rs

use nanoshell::errors::ShellError;
use nanoshell::{cli, logging, run};

#[tokio::main]
async fn main() {
    let code = match run_main().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("nanoshell error: {err:#}");
            err.downcast_ref::<ShellError>()
                .map_or(1, ShellError::exit_code)
        }
    };
    // A pending stdin read would otherwise keep the runtime from shutting down.
    std::process::exit(code);
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let exit = run(args).await?;
    tracing::debug!(?exit, "nanoshell finished");
    Ok(())
}
