use detective_quest::clue::{Clue, ClueIndex};

/// Short printable strings that always fit the clue limit.
fn texts(xs: &[String]) -> Vec<String> {
    xs.iter()
        .map(|x| x.chars().filter(|c| !c.is_control()).take(20).collect())
        .collect()
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<String>) -> bool {
    let xs = texts(&xs);
    let index = xs
        .iter()
        .fold(ClueIndex::new(), |index, x| index.insert(Clue::new(x).unwrap()));

    let listed = index.list_in_order();
    listed.windows(2).all(|w| w[0] < w[1]) && xs.iter().all(|x| index.contains(x))
}

#[quickcheck]
fn second_insert_changes_nothing(xs: Vec<String>, pick: usize) -> bool {
    let xs = texts(&xs);
    if xs.is_empty() {
        return true;
    }

    let index = xs
        .iter()
        .fold(ClueIndex::new(), |index, x| index.insert(Clue::new(x).unwrap()));
    let before: Vec<String> = index.list_in_order().into_iter().map(String::from).collect();

    let again = &xs[pick % xs.len()];
    let index = index.insert(Clue::new(again).unwrap());

    index.list_in_order() == before
}

#[quickcheck]
fn order_of_insertion_does_not_matter(xs: Vec<String>) -> bool {
    let xs = texts(&xs);
    let forwards = xs
        .iter()
        .fold(ClueIndex::new(), |index, x| index.insert(Clue::new(x).unwrap()));
    let backwards = xs
        .iter()
        .rev()
        .fold(ClueIndex::new(), |index, x| index.insert(Clue::new(x).unwrap()));

    forwards.list_in_order() == backwards.list_in_order()
}
