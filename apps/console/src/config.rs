//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Args;
use client::DEFAULT_BASE_URL;

/// Flags shared by every mode.
#[derive(Args, Clone, Debug)]
pub struct FetchOpts {
    /// Employee id to look up
    pub employee_id: String,
    /// Base URL of the Employee Manager service
    #[arg(long, env = "EMPLOYEE_MANAGER_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Interactive-mode flags.
#[derive(Args, Clone, Debug)]
pub struct ShowOpts {
    #[command(flatten)]
    pub fetch: FetchOpts,
    /// Directory downloaded documents are saved into
    #[arg(long, env = "EMPLOYEE_CONSOLE_DOWNLOAD_DIR", default_value = ".")]
    pub download_dir: PathBuf,
    /// Directory diagnostics are written to while the screen owns the terminal
    #[arg(long, env = "EMPLOYEE_CONSOLE_LOG_DIR", default_value = ".employee-console")]
    pub log_dir: PathBuf,
}
