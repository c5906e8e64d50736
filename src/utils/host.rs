//! Host identity lookup.

use tracing::debug;

/// Name of the host running the collector, or an empty string when the
/// kernel refuses to tell us.
pub fn host_name() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            debug!(error = %e, "gethostname failed, using empty host name");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_name_matches_proc() {
        // Only comparable where procfs exposes the UTS name
        if let Ok(expected) = std::fs::read_to_string("/proc/sys/kernel/hostname") {
            assert_eq!(host_name(), expected.trim());
        }
    }
}
