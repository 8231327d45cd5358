//! Classification results

use super::Module;

/// Modules that need to be reported, grouped by reason
///
/// The buckets are disjoint and keep the order in which the modules were
/// classified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Results<'a> {
    /// Modules with an available update
    pub updated: Vec<&'a Module>,
    /// Modules replaced by another module
    pub replaced: Vec<&'a Module>,
    /// Modules that have not been updated for a long time
    pub old: Vec<&'a Module>,
}

impl<'a> Results<'a> {
    /// Creates an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any bucket contains a module
    pub fn has_modules(&self) -> bool {
        !self.updated.is_empty() || !self.replaced.is_empty() || !self.old.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_modules_empty() {
        let results = Results::new();
        assert!(!results.has_modules());
        assert!(results.updated.is_empty());
    }

    #[test]
    fn test_has_modules_per_bucket() {
        let module = Module::default();

        let results = Results {
            updated: vec![&module],
            ..Results::default()
        };
        assert!(results.has_modules());

        let results = Results {
            replaced: vec![&module],
            ..Results::default()
        };
        assert!(results.has_modules());

        let results = Results {
            old: vec![&module],
            ..Results::default()
        };
        assert!(results.has_modules());
    }
}
