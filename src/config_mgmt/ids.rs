use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("ID '{0}' redefined, IDs must be unique within the configuration")]
    Redefined(String),
}

/// Hands out component identifiers, keeping them unique across the whole
/// configuration.
///
/// Identifiers declared by other components are reserved, then those written
/// on climate entries are claimed. Generated ones are derived from the driver
/// class name and suffixed `_2`, `_3`, ... until they no longer clash with
/// anything already taken.
#[derive(Debug)]
pub struct IdAllocator {
    base: String,
    claimed: HashSet<String>,
}

impl IdAllocator {
    pub fn new(class_name: &str) -> Self {
        IdAllocator {
            base: generated_base(class_name),
            claimed: HashSet::new(),
        }
    }

    /// Mark `id` as taken by a component outside this platform
    pub fn reserve(&mut self, id: &str) {
        self.claimed.insert(id.to_string());
    }

    pub fn claim(&mut self, id: &str) -> Result<(), IdError> {
        if self.claimed.insert(id.to_string()) {
            Ok(())
        } else {
            Err(IdError::Redefined(id.to_string()))
        }
    }

    pub fn generate(&mut self) -> String {
        let mut candidate = self.base.clone();
        let mut suffix = 1;
        while self.claimed.contains(&candidate) {
            suffix += 1;
            candidate = format!("{}_{}", self.base, suffix);
        }
        self.claimed.insert(candidate.clone());
        log::debug!("Generated ID '{}'", candidate);
        candidate
    }
}

// "mhi_multi_ir::MhiClimate" -> "mhi_multi_ir_mhiclimate"
fn generated_base(class_name: &str) -> String {
    class_name
        .replace("::", "_")
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::platforms;

    #[test]
    fn base_name_from_class() {
        assert_eq!(
            generated_base(platforms::DRIVER_CLASS),
            "mhi_multi_ir_mhiclimate"
        );
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut ids = IdAllocator::new(platforms::DRIVER_CLASS);
        let generated: Vec<_> = (0..3).map(|_| ids.generate()).collect();
        assert_eq!(
            generated,
            [
                "mhi_multi_ir_mhiclimate",
                "mhi_multi_ir_mhiclimate_2",
                "mhi_multi_ir_mhiclimate_3"
            ]
        );
    }

    #[test]
    fn generated_ids_skip_claimed_ones() {
        let mut ids = IdAllocator::new(platforms::DRIVER_CLASS);
        ids.claim("mhi_multi_ir_mhiclimate").unwrap();
        assert_eq!(ids.generate(), "mhi_multi_ir_mhiclimate_2");
        assert_eq!(ids.generate(), "mhi_multi_ir_mhiclimate_3");
    }

    #[test]
    fn reserved_ids_cannot_be_claimed_or_generated() {
        let mut ids = IdAllocator::new(platforms::DRIVER_CLASS);
        ids.reserve("ir_rx");
        ids.reserve("mhi_multi_ir_mhiclimate");
        assert_eq!(
            ids.claim("ir_rx"),
            Err(IdError::Redefined("ir_rx".to_string()))
        );
        assert_eq!(ids.generate(), "mhi_multi_ir_mhiclimate_2");
    }

    #[test]
    fn duplicate_claim_fails() {
        let mut ids = IdAllocator::new(platforms::DRIVER_CLASS);
        assert!(ids.claim("ac").is_ok());
        assert_eq!(ids.claim("ac"), Err(IdError::Redefined("ac".to_string())));
    }
}
