use crate::error::HostListError;
use crate::filter;
use crate::label::LabelContext;
use crate::list::{HostList, HostListBuilder};
use crate::parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Inputs to [`load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Host file to read. `None` means [`hosts_path`].
    pub path: Option<PathBuf>,
    /// Login for lines that don't carry `login@`.
    pub default_login: Option<String>,
    /// Only keep hosts listed under `%label`.
    pub label: Option<String>,
}

impl LoadOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_default_login(mut self, login: impl Into<String>) -> Self {
        self.default_login = Some(login.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Returns the default host file path (~/.mpssh/hosts).
pub fn hosts_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| hosts_path_in(&home))
}

fn hosts_path_in(home: &Path) -> PathBuf {
    home.join(".mpssh").join("hosts")
}

/// Picks the file to read: the explicit path if any, else the default under
/// `home`.
fn resolve_path(
    options: &LoadOptions,
    home: Option<PathBuf>,
) -> Result<PathBuf, HostListError> {
    match &options.path {
        Some(path) => Ok(path.clone()),
        None => home
            .map(|home| hosts_path_in(&home))
            .ok_or(HostListError::NoHomeDir),
    }
}

/// Loads the host list described by `options`.
///
/// # Errors
///
/// Returns an error if:
/// - No path was given and the home directory cannot be determined
/// - The host file cannot be opened or read
/// - Memory for the list cannot be reserved
pub fn load(options: &LoadOptions) -> Result<HostList, HostListError> {
    let path = resolve_path(options, dirs::home_dir())?;

    load_from_path(
        &path,
        options.default_login.as_deref(),
        options.label.as_deref(),
    )
}

/// Loads a host list from a specific file.
///
/// # Errors
///
/// Returns `HostListError::Open` if the file cannot be opened and
/// `HostListError::Read` if reading it fails part way through.
pub fn load_from_path(
    path: &Path,
    default_login: Option<&str>,
    label: Option<&str>,
) -> Result<HostList, HostListError> {
    let file = File::open(path).map_err(|source| HostListError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?label, "loading host list");

    load_from_reader(BufReader::new(file), default_login, label).map_err(|e| match e {
        HostListError::Io(source) => HostListError::Read {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Loads a host list from a string (useful for testing).
///
/// # Errors
///
/// Only fails if memory for the list cannot be reserved.
pub fn load_from_str(
    s: &str,
    default_login: Option<&str>,
    label: Option<&str>,
) -> Result<HostList, HostListError> {
    load_from_reader(s.as_bytes(), default_login, label)
}

/// Loads a host list from any buffered reader.
///
/// Lines are read whole regardless of length. Blank lines, comment lines and
/// lines without a hostname are skipped; none of them is an error.
///
/// # Errors
///
/// Returns `HostListError::Io` if the reader fails and `HostListError::Alloc`
/// if the list cannot grow. Nothing read before the failure is returned.
pub fn load_from_reader<R: BufRead>(
    mut reader: R,
    default_login: Option<&str>,
    label: Option<&str>,
) -> Result<HostList, HostListError> {
    let mut builder = HostListBuilder::new();
    let mut labels = LabelContext::new();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let Some(line) = filter::sanitize(&buf) else {
            continue;
        };

        if labels.observe(line) {
            trace!(line = line_no, label = labels.current(), "entering label");
            continue;
        }

        if !labels.accepts(label) {
            continue;
        }

        let Some(parsed) = parser::parse_line(line, default_login) else {
            trace!(line = line_no, content = line, "skipping line without hostname");
            builder.skip();
            continue;
        };

        builder.push(parsed, line_no)?;
    }

    let list = builder.finish();
    let stats = list.stats();
    debug!(
        count = stats.count,
        skipped = stats.skipped,
        "host list loaded"
    );
    Ok(list)
}
