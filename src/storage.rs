//! Collection file loading

use std::fs;
use std::path::Path;

use crate::error::CollectionError;
use crate::models::Collection;

/// Read and parse a collection file. The whole file loads or nothing does.
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    let content = fs::read_to_string(path).map_err(|source| CollectionError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    parse_collection(&content)
}

/// Parse collection YAML, rejecting documents without any requests
pub fn parse_collection(content: &str) -> Result<Collection, CollectionError> {
    let collection: Collection = serde_yaml::from_str(content)?;

    if collection.is_empty() {
        return Err(CollectionError::Empty);
    }

    Ok(collection)
}
