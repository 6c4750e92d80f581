//! Report result caching using Moka.
//!
//! Cached figures are never adjusted in place: any data change invalidates
//! the whole cache and reports are recomputed from the full record set.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use qist_shared::config::CacheConfig;

use crate::account::{Account, Expense, Investor};
use crate::sale::Sale;

use super::service::ReportService;
use super::types::{ReportFilter, ReportSummary};

/// Cache for computed reports, keyed by filter.
#[derive(Clone)]
pub struct ReportCache {
    cache: Cache<String, Arc<ReportSummary>>,
}

impl ReportCache {
    /// Creates a cache with the configured capacity and TTL.
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(Duration::from_secs(config.ttl_secs))
            .build();
        Self { cache }
    }

    /// Returns the cached report for the filter, computing and storing it
    /// on a miss.
    #[must_use]
    pub fn get_or_compute(
        &self,
        sales: &[Sale],
        accounts: &[Account],
        investors: &[Investor],
        expenses: &[Expense],
        filter: &ReportFilter,
    ) -> Arc<ReportSummary> {
        let key = Self::cache_key(filter);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let report = Arc::new(ReportService::compute_report(
            sales, accounts, investors, expenses, filter,
        ));
        self.cache.insert(key, Arc::clone(&report));
        report
    }

    /// Drops every cached report. Called after any sale, account, or
    /// expense mutation; entries are never patched incrementally.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Number of cached reports.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    fn cache_key(filter: &ReportFilter) -> String {
        let investor = filter
            .investor_id
            .map_or_else(|| "all".to_string(), |id| id.to_string());
        format!("{investor}|{}|{}", filter.range.start, filter.range.end)
    }
}
