use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::Result;
use crate::pair::sort_key;
use crate::record::{IntersectionRecord, ResolvedRecord};

/// Most recently updated first, then the longest segment.
fn preference(a: &ResolvedRecord, b: &ResolvedRecord) -> Ordering {
    b.cleaned
        .updated_at
        .cmp(&a.cleaned.updated_at)
        .then_with(|| b.cleaned.shape_length.total_cmp(&a.cleaned.shape_length))
}

/// Picks the preferred record of a group. Full ties keep whichever came first,
/// as a stable sort would.
pub fn select_representative(group: Vec<ResolvedRecord>) -> Option<ResolvedRecord> {
    group.into_iter().reduce(|best, candidate| {
        if preference(&candidate, &best) == Ordering::Less {
            candidate
        } else {
            best
        }
    })
}

pub fn group_by_pair(records: Vec<ResolvedRecord>) -> Vec<(String, Vec<ResolvedRecord>)> {
    let mut grouped: Vec<(String, Vec<ResolvedRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        if let Some(&position) = index.get(&record.pair_key) {
            grouped[position].1.push(record);
        } else {
            index.insert(record.pair_key.clone(), grouped.len());
            grouped.push((record.pair_key.clone(), vec![record]));
        }
    }
    grouped
}

/// One intersection per pair key, ordered by the pair's cardinal sort key.
pub fn dedupe(records: Vec<ResolvedRecord>) -> Result<Vec<IntersectionRecord>> {
    let mut keyed = Vec::new();
    for (pair_key, group) in group_by_pair(records) {
        if let Some(best) = select_representative(group) {
            keyed.push((sort_key(&pair_key)?.0, best));
        }
    }
    keyed.sort_by(|(rank_a, a), (rank_b, b)| {
        rank_a.cmp(rank_b).then_with(|| a.pair_key.cmp(&b.pair_key))
    });
    Ok(keyed
        .into_iter()
        .map(|(_, record)| IntersectionRecord::from(record))
        .collect())
}
