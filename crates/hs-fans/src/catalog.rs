//! Read-only fan catalog shared by every evaluation of a study.

use crate::curve::FanCurve;
use crate::error::{FanError, FanResult};
use std::collections::HashSet;
use std::sync::Arc;

/// Ordered, name-unique collection of fan curves.
///
/// Built once when a study is loaded and never mutated afterwards. Curves are
/// held behind `Arc` so design points can refer to their fan without copying
/// sample tables.
#[derive(Debug, Clone, Default)]
pub struct FanCatalog {
    fans: Vec<Arc<FanCurve>>,
}

impl FanCatalog {
    pub fn new(fans: impl IntoIterator<Item = FanCurve>) -> FanResult<Self> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for fan in fans {
            if !seen.insert(fan.name().to_string()) {
                return Err(FanError::DuplicateName {
                    name: fan.name().to_string(),
                });
            }
            out.push(Arc::new(fan));
        }
        Ok(Self { fans: out })
    }

    pub fn len(&self) -> usize {
        self.fans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fans.is_empty()
    }

    /// Fan at catalog position `index`.
    pub fn fan(&self, index: usize) -> Option<&Arc<FanCurve>> {
        self.fans.get(index)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<FanCurve>> {
        self.fans.iter().find(|f| f.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<FanCurve>> {
        self.fans.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.fans.iter().map(|f| f.name()).collect()
    }

    /// Catalog restricted to the named fans, keeping catalog order.
    pub fn subset(&self, names: &[&str]) -> Self {
        Self {
            fans: self
                .fans
                .iter()
                .filter(|f| names.contains(&f.name()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(name: &str, shutoff: f64) -> FanCurve {
        FanCurve::new(name, &[(0.0, shutoff), (0.01, 0.0)]).unwrap()
    }

    #[test]
    fn lookup_by_name_and_index() {
        let catalog = FanCatalog::new([fan("a", 50.0), fan("b", 80.0)]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["a", "b"]);
        assert_eq!(catalog.get("b").unwrap().shutoff_pressure().value, 80.0);
        assert_eq!(catalog.fan(0).unwrap().name(), "a");
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = FanCatalog::new([fan("a", 50.0), fan("a", 60.0)]).unwrap_err();
        assert_eq!(err, FanError::DuplicateName { name: "a".into() });
    }

    #[test]
    fn subset_shares_curves() {
        let catalog = FanCatalog::new([fan("a", 50.0), fan("b", 80.0), fan("c", 20.0)]).unwrap();
        let sub = catalog.subset(&["c", "a"]);
        assert_eq!(sub.names(), vec!["a", "c"]);
        assert!(Arc::ptr_eq(sub.get("a").unwrap(), catalog.get("a").unwrap()));
    }

    #[test]
    fn empty_catalog_is_allowed_here() {
        let catalog = FanCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
