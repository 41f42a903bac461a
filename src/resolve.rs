use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::pair::canonical_pair;
use crate::record::{CleanedRecord, ResolvedRecord};

/// `mainstreet_id -> mainstreet_name`, built once over every cleaned record.
#[derive(Debug, Default)]
pub struct StreetIdLookup {
    names: HashMap<i64, String>,
}

impl StreetIdLookup {
    /// When several records share an id with different names, the last one
    /// seen wins.
    pub fn build(records: &[CleanedRecord]) -> Self {
        let mut names: HashMap<i64, String> = HashMap::with_capacity(records.len());
        for record in records {
            if let Some(previous) =
                names.insert(record.mainstreet_id, record.mainstreet_name.clone())
            {
                if previous != record.mainstreet_name {
                    debug!(
                        street_id = record.mainstreet_id,
                        previous = %previous,
                        name = %record.mainstreet_name,
                        "street id rebound to a different name"
                    );
                }
            }
        }
        Self { names }
    }

    /// An id bound to an empty name counts as missing.
    pub fn get(&self, street_id: i64) -> Option<&str> {
        self.names
            .get(&street_id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Attaches the cross-street name and canonical pair. `Ok(None)` when the
/// cross-street id is not a known street.
pub fn resolve_record(
    record: CleanedRecord,
    lookup: &StreetIdLookup,
) -> Result<Option<ResolvedRecord>> {
    let Some(xstreet_name) = lookup.get(record.xstreet_id) else {
        debug!(
            row_id = %record.object_id,
            xstreet_id = record.xstreet_id,
            "cross street id not in lookup"
        );
        return Ok(None);
    };
    let pair = canonical_pair(&record.mainstreet_name, xstreet_name)?;
    Ok(Some(ResolvedRecord {
        xstreet_name: xstreet_name.to_string(),
        street_1: pair.street_1,
        street_2: pair.street_2,
        pair_key: pair.pair_key,
        cleaned: record,
    }))
}

/// Builds the lookup, then resolves every record against it. Returns the
/// resolved records and the number of cross-street misses.
pub fn resolve_records(records: Vec<CleanedRecord>) -> Result<(Vec<ResolvedRecord>, usize)> {
    let lookup = StreetIdLookup::build(&records);
    debug!(streets = lookup.len(), "built street id lookup");

    let mut resolved = Vec::with_capacity(records.len());
    let mut unresolved = 0;
    for record in records {
        match resolve_record(record, &lookup)? {
            Some(record) => resolved.push(record),
            None => unresolved += 1,
        }
    }
    Ok((resolved, unresolved))
}
