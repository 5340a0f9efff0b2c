//
//  tc-goggles
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output helpers.
//!
//! Records are streamed as JSON Lines so that results appear as soon as the
//! lazy search produces them.

use std::io::Write;

use serde::Serialize;

/// Writes one value as a single JSON line.
///
/// The value is serialized before anything is written, so a failing writer
/// surfaces as a plain [`std::io::Error`].
///
/// # Example
///
/// ```rust
/// use tc_goggles::output::write_json_line;
///
/// let mut buffer = Vec::new();
/// write_json_line(&mut buffer, &serde_json::json!({"id": "bt1"}))?;
/// write_json_line(&mut buffer, &serde_json::json!({"id": "bt2"}))?;
///
/// assert_eq!(String::from_utf8(buffer)?, "{\"id\":\"bt1\"}\n{\"id\":\"bt2\"}\n");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    let line = serde_json::to_string(value)?;
    writeln!(writer, "{line}")?;
    Ok(())
}
