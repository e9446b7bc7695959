use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "clinicpulse", version, about = "Digital health audit engine for medical practices")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a digital biopsy for one practice
    Scan(ScanArgs),
    /// List persisted audit records (admin view)
    Records(RecordsArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Name of the practice or hospital
    #[arg(short, long)]
    pub name: String,

    /// Practice website URL
    #[arg(short, long)]
    pub website: String,

    /// Google Maps / Business Profile link
    #[arg(long)]
    pub gmb: Option<String>,

    /// Facebook page URL
    #[arg(long)]
    pub facebook: Option<String>,

    /// Instagram profile URL or @handle
    #[arg(long)]
    pub instagram: Option<String>,

    /// Contact mobile number
    #[arg(long)]
    pub mobile: Option<String>,

    /// Contact email address
    #[arg(long)]
    pub email: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the structured record as JSON to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Run the audit without persisting the record
    #[arg(long)]
    pub no_save: bool,
}

#[derive(Args, Clone)]
pub struct RecordsArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write the full record database as JSON to this path
    #[arg(long)]
    pub export: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
