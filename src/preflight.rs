//! Prerequisite checks.
//!
//! Everything here runs before the privilege keeper starts and before the
//! first step; a failure aborts the whole program with a clear message
//! and exit code 2.

use std::time::Duration;

use crate::error::{Result, RigupError};
use crate::shell;

/// Endpoint probed for connectivity; also hosts the Homebrew installer,
/// so reaching it means the bootstrap step can too.
pub const NETWORK_PROBE_URL: &str = "https://raw.githubusercontent.com";

const NETWORK_TIMEOUT: Duration = Duration::from_secs(8);

/// Verify the host is a macOS machine.
pub fn ensure_macos() -> Result<()> {
    if cfg!(target_os = "macos") {
        return Ok(());
    }
    if shell::command_exists("sw_vers") {
        return Ok(());
    }
    Err(RigupError::UnsupportedPlatform {
        message: "rigup provisions macOS machines (sw_vers not found)".to_string(),
    })
}

/// Verify network reachability with a short-timeout HEAD request.
///
/// Any HTTP response counts as reachable; only transport failures
/// (DNS, TLS, timeout) mean we are offline.
pub fn ensure_network() -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(NETWORK_TIMEOUT)
        .build()
        .map_err(|e| RigupError::NoNetwork {
            message: e.to_string(),
        })?;

    client
        .head(NETWORK_PROBE_URL)
        .send()
        .map(|_| ())
        .map_err(|e| RigupError::NoNetwork {
            message: format!("could not reach {}: {}", NETWORK_PROBE_URL, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_is_prerequisite() {
        let err = RigupError::NoNetwork {
            message: "dns failure".into(),
        };
        assert!(err.is_prerequisite());
        assert!(err.to_string().contains("dns failure"));
    }

    #[test]
    fn probe_url_is_https() {
        assert!(NETWORK_PROBE_URL.starts_with("https://"));
    }
}
