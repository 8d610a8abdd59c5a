//! Concurrent upserts against one file-backed database lose no fold.

use std::sync::Arc;
use std::thread;

use lore_core::pattern::{ApplicableContexts, Pattern, RulePayload};
use lore_core::traits::IPatternStorage;
use lore_storage::StorageEngine;

fn candidate(frequency: u64) -> Pattern {
    Pattern::new(
        "shared",
        RulePayload::GenericStrategy {
            guidance: vec!["g".into()],
        },
        ApplicableContexts::unrestricted(),
        0.8,
        frequency,
    )
}

fn sum_frequencies(existing: &Pattern, candidate: &Pattern) -> Pattern {
    let mut merged = existing.clone();
    merged.usage_frequency = existing.usage_frequency + candidate.usage_frequency;
    merged
}

#[test]
fn parallel_upserts_accumulate_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(StorageEngine::open(&dir.path().join("lore.db")).unwrap());

    let handles: Vec<_> = (1..=8u64)
        .map(|i| {
            let storage = Arc::clone(&storage);
            thread::spawn(move || {
                for _ in 0..10 {
                    storage.upsert_with(&candidate(i), &sum_frequencies).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    // 10 * (1 + 2 + ... + 8)
    let stored = storage.get_pattern("shared").unwrap().unwrap();
    assert_eq!(stored.usage_frequency, 360);
}

#[test]
fn two_engines_on_one_file_accumulate_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lore.db");
    let a = Arc::new(StorageEngine::open(&path).unwrap());
    let b = Arc::new(StorageEngine::open(&path).unwrap());

    let handles: Vec<_> = [a.clone(), b.clone()]
        .into_iter()
        .map(|storage| {
            thread::spawn(move || {
                for _ in 0..25 {
                    storage.upsert_with(&candidate(2), &sum_frequencies).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(a.get_pattern("shared").unwrap().unwrap().usage_frequency, 100);
}
