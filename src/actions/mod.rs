//! Adapters from configuration sections to provisioning steps.
//!
//! Each module knows one external tool's command surface and produces
//! [`Step`](crate::pipeline::Step)s for the pipeline. Bulk actions keep
//! going past individual package failures and report an aggregated error
//! naming what failed; the pipeline only sees one result per step.

pub mod brew;
pub mod defaults;
pub mod dock;
pub mod git;
pub mod macos;
pub mod mas;
pub mod runtime;
pub mod vscode;

use anyhow::anyhow;

use crate::error::Result;

/// Turn a list of failed item names into a single step error.
///
/// `Ok(())` when nothing failed.
pub(crate) fn aggregate_failures(what: &str, failed: Vec<String>) -> Result<()> {
    if failed.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("failed to install {}: {}", what, failed.join(", ")).into())
    }
}
