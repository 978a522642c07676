use std::path::PathBuf;

use clap::Parser;

/// LMS backend API server
#[derive(Debug, Parser)]
#[command(name = "lms", about = "Learning management system backend")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lms.toml", env = "LMS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LMS_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter directive, e.g. `info` or `lms_server=debug,info`
    #[arg(long, default_value = "info", env = "LMS_LOG")]
    pub log: String,
}
