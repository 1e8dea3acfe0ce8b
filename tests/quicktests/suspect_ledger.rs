use std::collections::HashMap;

use detective_quest::clue::Clue;
use detective_quest::suspect::{bucket_of, SuspectLedger, SuspectName};

use crate::Sighting;

fn fill(sightings: &[Sighting]) -> (SuspectLedger, HashMap<String, usize>) {
    let mut ledger = SuspectLedger::new();
    let mut counts = HashMap::new();

    for sighting in sightings {
        ledger.record_clue(
            Clue::new(&sighting.clue).unwrap(),
            SuspectName::new(&sighting.suspect).unwrap(),
        );
        *counts.entry(sighting.suspect.clone()).or_insert(0) += 1;
    }

    (ledger, counts)
}

#[quickcheck]
fn tally_is_clue_count(sightings: Vec<Sighting>) -> bool {
    let (ledger, counts) = fill(&sightings);

    ledger.len() == counts.len()
        && ledger
            .list_all()
            .all(|record| record.tally() == record.clues().count())
        && counts
            .iter()
            .all(|(name, count)| ledger.get(name).map(|r| r.tally()) == Some(*count))
}

#[quickcheck]
fn most_likely_is_the_first_maximum(sightings: Vec<Sighting>) -> bool {
    let (ledger, counts) = fill(&sightings);
    let max = counts.values().copied().max();

    match (ledger.most_likely_suspect(), max) {
        (None, None) => true,
        (Some(best), Some(max)) => {
            let first = ledger.list_all().find(|r| r.tally() == max);
            best.tally() == max && first.map(|r| r.name()) == Some(best.name())
        }
        _ => false,
    }
}

#[quickcheck]
fn list_all_follows_bucket_order(sightings: Vec<Sighting>) -> bool {
    let (ledger, _) = fill(&sightings);
    let buckets: Vec<usize> = ledger
        .list_all()
        .map(|r| bucket_of(r.name().as_str()))
        .collect();

    buckets.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn hashing_is_deterministic(name: String) -> bool {
    bucket_of(&name) == bucket_of(&name.clone()) && bucket_of(&name) < 10
}
