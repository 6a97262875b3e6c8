//! Family list offered by the chooser

use std::collections::BTreeSet;

use crate::constants::LOGICAL_FAMILIES;
use crate::error::ChooserResult;
use crate::traits::FontCatalog;

/// Sorted, deduplicated set of family names the selector may offer
///
/// Built once per dialog. The selector is a closed choice over this list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableFamilies {
    families: Vec<String>,
}

impl AvailableFamilies {
    /// Query the catalog and merge in the logical aliases
    pub fn discover(catalog: &dyn FontCatalog) -> ChooserResult<Self> {
        let installed = catalog.families()?;
        tracing::debug!("Font catalog reported {} families", installed.len());

        Ok(Self::from_names(
            installed
                .into_iter()
                .chain(LOGICAL_FAMILIES.iter().map(|name| name.to_string())),
        ))
    }

    /// Build from arbitrary names; duplicates and blank names are dropped
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .collect();

        Self { families: set.into_iter().collect() }
    }

    pub fn contains(&self, family: &str) -> bool {
        self.families
            .binary_search_by(|name| name.as_str().cmp(family))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.families
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy_backend::StaticCatalog;
    use crate::error::ChooserError;

    #[test]
    fn test_sorted_and_deduplicated() {
        let families = AvailableFamilies::from_names(["Serif", "Arial", "Courier", "Arial", " "]);
        assert_eq!(families.as_slice(), ["Arial", "Courier", "Serif"]);
        assert_eq!(families.len(), 3);
    }

    #[test]
    fn test_discover_merges_logical_families() {
        let catalog = StaticCatalog::new(["DejaVu Sans", "Sans", "Cantarell"]);
        let families = AvailableFamilies::discover(&catalog).unwrap();

        assert_eq!(
            families.iter().collect::<Vec<_>>(),
            vec!["Cantarell", "DejaVu Sans", "Monospace", "Sans", "Serif"]
        );
    }

    #[test]
    fn test_contains() {
        let families = AvailableFamilies::from_names(["Arial", "Courier"]);
        assert!(families.contains("Arial"));
        assert!(!families.contains("arial"));
        assert!(!families.contains("Helvetica"));
    }

    #[test]
    fn test_catalog_failure_propagates() {
        let catalog = StaticCatalog::failing("no font map");
        let err = AvailableFamilies::discover(&catalog).unwrap_err();
        assert_eq!(err, ChooserError::CatalogUnavailable { message: "no font map".to_string() });
    }
}
