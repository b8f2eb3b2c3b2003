//! Historical index fixings.
//!
//! A lookup distinguishes three outcomes with [`FixingLookup`]: the rate was
//! found, it is simply not there, or the source itself could not be read.
//! Callers decide per situation which outcomes are fatal.
//!
//! [`IndexHistory`] is a thread-safe in-memory store keyed by index name;
//! [`IndexManager`] exposes one process-wide instance of it, which is where
//! indexes publish their fixings.

use pc_core::errors::{Error, Result};
use pc_core::Rate;
use pc_time::Date;
use std::collections::{BTreeMap, HashMap};
use std::sync::{OnceLock, RwLock};
use tracing::debug;

/// Outcome of a single fixing lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum FixingLookup {
    /// The fixing is recorded.
    Found(Rate),
    /// No fixing is recorded for this index and date.
    NotFound,
    /// The history source could not be read.
    Fault(String),
}

impl FixingLookup {
    /// The rate, if found.
    pub fn rate(&self) -> Option<Rate> {
        match self {
            FixingLookup::Found(r) => Some(*r),
            _ => None,
        }
    }
}

/// A read-only source of historical fixings.
pub trait FixingHistory: Send + Sync {
    /// Look up the fixing of `index_name` on `date`.
    fn lookup(&self, index_name: &str, date: Date) -> FixingLookup;
}

impl<H: FixingHistory + ?Sized> FixingHistory for std::sync::Arc<H> {
    fn lookup(&self, index_name: &str, date: Date) -> FixingLookup {
        (**self).lookup(index_name, date)
    }
}

/// One realized fixing, as loaded from an external feed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixing {
    /// Index name (case-insensitive).
    pub index: String,
    /// Fixing date.
    pub date: Date,
    /// Realized rate as a decimal.
    pub rate: Rate,
}

type Series = BTreeMap<Date, Rate>;

/// Thread-safe store of fixings, keyed by (case-insensitive) index name.
#[derive(Debug, Default)]
pub struct IndexHistory {
    series: RwLock<HashMap<String, Series>>,
}

fn key(index_name: &str) -> String {
    index_name.to_uppercase()
}

impl IndexHistory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the fixing of `index_name` on `date`.
    pub fn add_fixing(&self, index_name: &str, date: Date, rate: Rate) -> Result<()> {
        if !rate.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "non-finite {index_name} fixing ({rate}) for {date}"
            )));
        }
        let mut series = self.write()?;
        let previous = series.entry(key(index_name)).or_default().insert(date, rate);
        debug!(index = index_name, %date, rate, overwritten = previous.is_some(), "fixing recorded");
        Ok(())
    }

    /// Record a batch of fixings; stops at the first invalid one.
    pub fn add_fixings(&self, fixings: impl IntoIterator<Item = Fixing>) -> Result<()> {
        for f in fixings {
            self.add_fixing(&f.index, f.date, f.rate)?;
        }
        Ok(())
    }

    /// The fixing of `index_name` on `date`, if recorded.
    pub fn fixing(&self, index_name: &str, date: Date) -> Result<Option<Rate>> {
        Ok(self
            .read()?
            .get(&key(index_name))
            .and_then(|s| s.get(&date).copied()))
    }

    /// All fixings of `index_name` in date order.
    pub fn history(&self, index_name: &str) -> Result<Vec<(Date, Rate)>> {
        Ok(self
            .read()?
            .get(&key(index_name))
            .map(|s| s.iter().map(|(d, r)| (*d, *r)).collect())
            .unwrap_or_default())
    }

    /// Whether any fixing is recorded for `index_name`.
    pub fn has_history(&self, index_name: &str) -> Result<bool> {
        Ok(self
            .read()?
            .get(&key(index_name))
            .is_some_and(|s| !s.is_empty()))
    }

    /// Forget all fixings of `index_name`.
    pub fn clear_history(&self, index_name: &str) -> Result<()> {
        self.write()?.remove(&key(index_name));
        Ok(())
    }

    /// Forget everything.
    pub fn clear_all(&self) -> Result<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Series>>> {
        self.series
            .read()
            .map_err(|_| Error::LookupFault("fixing history lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Series>>> {
        self.series
            .write()
            .map_err(|_| Error::LookupFault("fixing history lock poisoned".into()))
    }
}

impl FixingHistory for IndexHistory {
    fn lookup(&self, index_name: &str, date: Date) -> FixingLookup {
        match self.fixing(index_name, date) {
            Ok(Some(rate)) => FixingLookup::Found(rate),
            Ok(None) => FixingLookup::NotFound,
            Err(e) => FixingLookup::Fault(e.to_string()),
        }
    }
}

static MANAGER: OnceLock<IndexHistory> = OnceLock::new();

/// The process-wide fixing history shared by all indexes.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexManager;

impl IndexManager {
    /// The global store.
    pub fn instance() -> &'static IndexHistory {
        MANAGER.get_or_init(IndexHistory::new)
    }
}

impl FixingHistory for IndexManager {
    fn lookup(&self, index_name: &str, date: Date) -> FixingLookup {
        Self::instance().lookup(index_name, date)
    }
}
