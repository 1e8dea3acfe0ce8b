#[macro_use]
extern crate quickcheck_macros;

mod clue_index;
mod suspect_ledger;

use quickcheck::{Arbitrary, Gen};

/// A clue and the suspect it points at, drawn from small pools so that
/// repeats and bucket collisions are common.
#[derive(Clone, Debug)]
pub(crate) struct Sighting {
    pub(crate) clue: String,
    pub(crate) suspect: String,
}

impl Arbitrary for Sighting {
    fn arbitrary(g: &mut Gen) -> Self {
        let clue = *g.choose(&["a", "b", "c", "Faca", "faca", "Carta anonima", "Z"]).unwrap();
        let suspect = *g
            .choose(&["ab", "ba", "Senhorita Violet", "Jardineiro Brown", "k"])
            .unwrap();

        Sighting {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        }
    }
}
