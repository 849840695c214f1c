// CLI definitions using clap

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, Parser};

use crate::address;
use crate::config::parse_pid;
use crate::error::PairError;
use crate::session::Action;

#[derive(Parser, Debug)]
#[command(name = "ds4-pair")]
#[command(version, about = "Read or set the paired host Bluetooth address of a DualShock 4")]
#[command(after_help = "Examples:\n  ds4-pair -r\n  ds4-pair -w AA:BB:CC:DD:EE:FF\n  ds4-pair -p 0x05c4 -w aabbccddeeff")]
#[command(group(ArgGroup::new("mode").required(true).args(["read", "write"])))]
pub struct Cli {
    /// Print the controller address (UID) and the paired host address
    #[arg(short, long)]
    pub read: bool,

    /// Store a new paired host address (AA:BB:CC:DD:EE:FF, dashes or bare hex)
    #[arg(short, long, value_name = "ADDR")]
    pub write: Option<String>,

    /// Read the report back after writing and check it stuck
    #[arg(long, requires = "write")]
    pub verify: bool,

    /// USB product ID in hex (default 09cc; 05c4 for the first revision)
    #[arg(short, long, value_name = "PID", value_parser = parse_pid)]
    pub pid: Option<u16>,

    /// Config file path (default: ~/.config/ds4-pair/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Invocation {
    /// Talk to the controller
    Run(Cli),
    /// Help or version text for stdout; nothing else happens
    Info(String),
}

/// Parse arguments without exiting the process
///
/// Usage errors carry clap's message followed by the full help text.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, PairError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e.render().to_string()))
        }
        Err(e) => Err(PairError::Usage(format!(
            "{}\n{}",
            e.render().to_string().trim_end(),
            Cli::command().render_help()
        ))),
    }
}

impl Cli {
    /// Turn the selected mode into an action. A bad address fails here,
    /// before any device is touched.
    pub fn action(&self) -> Result<Action, PairError> {
        match &self.write {
            Some(text) => Ok(Action::Write {
                wire: address::parse(text)?,
                verify: self.verify,
            }),
            None => Ok(Action::Read),
        }
    }
}
