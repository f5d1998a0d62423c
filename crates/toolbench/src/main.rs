//! Main entry point for toolbench
//!
//! This binary supports both CLI and GUI modes:
//! - CLI mode: When any command-line argument is provided
//! - GUI mode: When started without arguments

use anyhow::Result;

fn main() -> Result<()> {
    if toolbench_cli::should_run_cli_mode() {
        // CLI mode
        toolbench_cli::run().map_err(|e| anyhow::anyhow!(e))?;
    } else {
        // GUI mode
        if let Err(e) = toolbench_gui::run() {
            eprintln!("GUI error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
