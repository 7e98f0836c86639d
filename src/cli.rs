use std::path::PathBuf;

use clap::{ArgAction, Parser};
use hostlist::LoadOptions;

use crate::VERSION;

/// Default cap on concurrent ssh sessions.
pub const DEFAULT_PROCS: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "mpssh", version = VERSION, about = "Mass parallel ssh host list")]
pub struct Arguments {
    /// Host list file [default: ~/.mpssh/hosts]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Login for hosts listed without `login@`
    #[arg(short, long, value_name = "LOGIN")]
    pub user: Option<String>,

    /// Only use hosts under the `%NAME` label
    #[arg(short = 'L', long, value_name = "NAME")]
    pub label: Option<String>,

    /// Maximum number of concurrent sessions
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_PROCS)]
    pub procs: usize,

    /// Print the host table and exit
    #[arg(short, long)]
    pub list: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Arguments {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            path: self.file.clone(),
            default_login: self.user.clone(),
            label: self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Arguments::try_parse_from(["mpssh"]).unwrap();
        assert_eq!(args.procs, DEFAULT_PROCS);
        assert!(!args.list);
        assert_eq!(args.verbose, 0);
        assert_eq!(args.load_options(), LoadOptions::default());
    }

    #[test]
    fn test_load_options_from_flags() {
        let args =
            Arguments::try_parse_from(["mpssh", "-f", "/tmp/hosts", "-u", "root", "-L", "db"])
                .unwrap();
        let options = args.load_options();

        assert_eq!(options.path, Some(PathBuf::from("/tmp/hosts")));
        assert_eq!(options.default_login.as_deref(), Some("root"));
        assert_eq!(options.label.as_deref(), Some("db"));
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Arguments::try_parse_from(["mpssh", "-vvv", "--list", "-p", "8"]).unwrap();
        assert_eq!(args.verbose, 3);
        assert!(args.list);
        assert_eq!(args.procs, 8);
    }

    #[test]
    fn test_rejects_non_numeric_procs() {
        assert!(Arguments::try_parse_from(["mpssh", "-p", "lots"]).is_err());
    }
}
