//! Host list loading for mpssh.
//!
//! A host file is line oriented:
//!
//! ```text
//! # anything not starting with a host character is ignored
//! %web
//! deploy@web1.example.com
//! web2.example.com:2222
//! %db
//! db1
//! ```
//!
//! `%name` lines start a label section; host lines are `[login@]hostname[:port]`.
//!
//! ```rust
//! let input = "%web\nroot@web1:2222\nweb2\n";
//! let list = hostlist::load_from_str(input, Some("ops"), Some("web")).unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.entries()[1].login.as_deref(), Some("ops"));
//! assert_eq!(list.stats().max_hostname_len, 4);
//! ```

mod error;
mod filter;
mod host;
mod label;
mod list;
mod loader;
mod parser;
mod stats;

pub use error::{ErrorKind, HostListError};
pub use host::{DEFAULT_PORT, HostEntry, Position};
pub use list::HostList;
pub use loader::{
    LoadOptions, hosts_path, load, load_from_path, load_from_reader, load_from_str,
};
pub use stats::LoadStats;
