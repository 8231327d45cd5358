//! Module classification
//!
//! This module provides:
//! - Check policy configuration from CLI args
//! - The checker deciding, for every module, whether and why it is reported
//! - Age helpers shared with the report output

mod policy;

pub use policy::CheckPolicy;

use crate::domain::{Module, Results};
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tracing::{debug, trace, warn};

/// Length of the synthetic month used for staleness, in days
pub const DAYS_PER_MONTH: i64 = 30;

/// Number of synthetic months after which a module is considered old
pub const OLD_AFTER_MONTHS: i64 = 6;

/// What the checker decided for a single module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Path matches an ignored prefix
    Ignored,
    /// Indirect module while indirect checking is disabled
    IndirectSkipped,
    /// Replaced by another module
    Replaced,
    /// An update is available
    Updated,
    /// An update is listed but is older than the current version
    UpdateSuppressed,
    /// No update for at least six months
    Old,
    /// Nothing to report
    UpToDate,
}

/// Decides which modules need to be reported
pub struct ModuleChecker {
    /// Policy configuration
    policy: CheckPolicy,
    /// Current time for age calculations
    now: DateTime<Utc>,
}

impl ModuleChecker {
    /// Create a new ModuleChecker with the given policy
    pub fn new(policy: CheckPolicy) -> Self {
        Self {
            policy,
            now: Utc::now(),
        }
    }

    /// Create a new ModuleChecker with a custom current time (for testing)
    pub fn with_time(policy: CheckPolicy, now: DateTime<Utc>) -> Self {
        Self { policy, now }
    }

    /// Decide what to do with a single module.
    ///
    /// Rules are evaluated in order and the first one matching wins.
    pub fn disposition(&self, module: &Module) -> Disposition {
        if self.policy.is_ignored(&module.path) {
            return Disposition::Ignored;
        }

        if module.indirect && !self.policy.check_indirect {
            return Disposition::IndirectSkipped;
        }

        if module.replace.is_some() {
            return Disposition::Replaced;
        }

        if let Some(update) = &module.update {
            // A tag can be older than the commit currently in use
            return match (module.time, update.time) {
                (Some(current), Some(latest)) if current > latest => {
                    Disposition::UpdateSuppressed
                }
                _ => Disposition::Updated,
            };
        }

        if self.policy.check_old {
            if let Some(time) = module.time {
                if is_old(time, self.now) {
                    return Disposition::Old;
                }
            }
        }

        Disposition::UpToDate
    }

    /// Sort the modules into the report buckets, keeping their order
    pub fn classify<'a>(&self, modules: &'a [Module]) -> Results<'a> {
        let mut results = Results::new();

        for module in modules {
            if let Some(error) = &module.error {
                warn!(module = %module.path, error = %error.err, "module metadata failed to load");
            }

            let disposition = self.disposition(module);
            match disposition {
                Disposition::Replaced => results.replaced.push(module),
                Disposition::Updated => results.updated.push(module),
                Disposition::Old => results.old.push(module),
                Disposition::UpdateSuppressed => {
                    debug!(module = %module.path, "update is older than the current version")
                }
                Disposition::Ignored | Disposition::IndirectSkipped | Disposition::UpToDate => {}
            }
            trace!(module = %module, ?disposition, "classified module");
        }

        debug!(
            updated = results.updated.len(),
            replaced = results.replaced.len(),
            old = results.old.len(),
            "classification done"
        );
        results
    }
}

/// Classify modules against the current time
pub fn classify<'a>(policy: &CheckPolicy, modules: &'a [Module]) -> Results<'a> {
    ModuleChecker::new(policy.clone()).classify(modules)
}

/// Classify modules against a fixed time
pub fn classify_at<'a>(
    policy: &CheckPolicy,
    modules: &'a [Module],
    now: DateTime<Utc>,
) -> Results<'a> {
    ModuleChecker::with_time(policy.clone(), now).classify(modules)
}

/// Time elapsed between `time` and `now`
pub fn elapsed(time: DateTime<FixedOffset>, now: DateTime<Utc>) -> TimeDelta {
    now.signed_duration_since(time.with_timezone(&Utc))
}

/// Whole synthetic months elapsed since `time`
pub fn months_since(time: DateTime<FixedOffset>, now: DateTime<Utc>) -> i64 {
    elapsed(time, now).num_days() / DAYS_PER_MONTH
}

/// Returns true if at least six synthetic months have elapsed since `time`
pub fn is_old(time: DateTime<FixedOffset>, now: DateTime<Utc>) -> bool {
    elapsed(time, now) >= TimeDelta::days(OLD_AFTER_MONTHS * DAYS_PER_MONTH)
}
