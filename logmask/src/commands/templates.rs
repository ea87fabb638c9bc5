//! `templates` command implementation: lists the predefined templates.

use anyhow::Result;
use std::io::Write;

use logmask_core::PredefinedTemplate;

/// Writes one `NAME<TAB>PATTERN` line per predefined template.
pub fn run_templates<W: Write>(out: &mut W) -> Result<()> {
    for template in PredefinedTemplate::ALL {
        writeln!(out, "{}\t{}", template.name(), template.template())?;
    }
    Ok(())
}
