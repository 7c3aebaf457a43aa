// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Release tags are embedded so the action log shows which build ran.
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_describe(false, true, Some("v*"))
        .emit()?;
    Ok(())
}
