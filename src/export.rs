//! YAML serialization of the converted block sequence.

use std::fs;
use std::path::Path;

use crate::document::models::Block;
use crate::error::Result;

/// Serializes blocks to a YAML string. Mapping keys follow the struct
/// declaration order (`type` first) and non-ASCII text stays literal.
pub fn to_yaml(blocks: &[Block]) -> Result<String> {
    Ok(serde_yaml::to_string(blocks)?)
}

/// Serializes blocks and writes them to `path` as UTF-8.
pub fn write_yaml(blocks: &[Block], path: &Path) -> Result<()> {
    let yaml = to_yaml(blocks)?;
    fs::write(path, yaml)?;
    Ok(())
}
