use crate::error::Result;
use crate::pattern::Plan;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Write the plan as pretty JSON, via a temporary file and a rename.
pub fn save_plan(plan: &Plan, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "creating directory");
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = output_path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(plan)?;

    fs::write(&temp_path, &json)?;
    fs::rename(&temp_path, output_path)?;

    println!(
        "Saved plan with {} commits ({} bytes) to {}",
        plan.total(),
        json.len(),
        output_path.display()
    );

    Ok(())
}
