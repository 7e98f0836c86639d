use hostlist::HostList;

/// Renders one row per host with logins right-aligned against the `@` and
/// hostnames left-aligned, using the widths gathered during loading.
pub fn render(hosts: &HostList) -> String {
    let stats = hosts.stats();
    let login_width = stats.max_login_len;
    let host_width = stats.max_hostname_len;
    let mut out = String::new();

    for entry in hosts {
        if login_width > 0 {
            let login = entry.login.as_deref().unwrap_or_default();
            let sep = if login.is_empty() { ' ' } else { '@' };
            out.push_str(&format!("{login:>login_width$}{sep}"));
        }
        out.push_str(&format!("{:<host_width$} {:>5}\n", entry.hostname, entry.port));
    }

    out
}
