// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, open the terminal console and
//   hand it to the UI loop.
// - Returns `anyhow::Result` so a failure the loop cannot recover from
//   still reaches the user.

use booklist_cli::{
    config::{init_logging, AppInfo},
    console::TerminalConsole,
    ui::run,
};

fn main() -> anyhow::Result<()> {
    // Let anyhow capture a trace at the point of failure for the crash report.
    if std::env::var_os("RUST_LIB_BACKTRACE").is_none() {
        std::env::set_var("RUST_LIB_BACKTRACE", "1");
    }
    init_logging();
    tracing::info!(name = AppInfo::NAME, version = AppInfo::VERSION, "Starting");

    let mut console = TerminalConsole::new();

    // Blocks until the user types /exit or input is closed.
    run(&mut console)?;
    Ok(())
}
