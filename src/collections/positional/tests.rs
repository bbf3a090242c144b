#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_index_of_single_element() {
    let mut list = PositionalList::new();
    let first = list.add_first("Rust is great!");
    assert_eq!(list.index_of(Some(&first)), Some(0));
}

#[test]
fn test_index_of_multiple_elements() {
    let mut list = PositionalList::new();
    let first = list.add_first("Hello");
    let second = list.add_last("World");
    let third = list.add_last("How are you?");

    assert_eq!(list.index_of(Some(&first)), Some(0));
    assert_eq!(list.index_of(Some(&second)), Some(1));
    assert_eq!(list.index_of(Some(&third)), Some(2));

    list.remove(&first);
    list.remove(&second);
    assert_eq!(
        list.index_of(Some(&third)),
        Some(0),
        "Removing every element before a Position should move it to the front."
    );
    list.verify_double_links();
}

#[test]
fn test_index_of_with_elements_removed_before() {
    let mut list = PositionalList::new();
    let javascript = list.add_first("JavaScript is bad!");
    let python = list.add_last("Python is bad!");
    let rust = list.add_last("Rust is good!");
    assert_eq!(list.index_of(Some(&rust)), Some(2));

    list.remove(&javascript);
    assert_eq!(list.index_of(Some(&rust)), Some(1));

    list.remove(&python);
    assert_eq!(list.index_of(Some(&rust)), Some(0));
}

#[test]
fn test_index_of_with_elements_added_before() {
    let mut list = PositionalList::new();
    let rust = list.add_first("Rust is good!");
    assert_eq!(list.index_of(Some(&rust)), Some(0));

    list.add_first("JavaScript is bad!");
    assert_eq!(list.index_of(Some(&rust)), Some(1));

    list.add_first("Python is bad!");
    assert_eq!(list.index_of(Some(&rust)), Some(2));

    list.add_last("C is fine.");
    assert_eq!(
        list.index_of(Some(&rust)),
        Some(2),
        "Adding after a Position shouldn't change its index."
    );
}

#[test]
fn test_index_of_removed_position() {
    let mut list = PositionalList::new();
    let hello = list.add_first("Hello");
    list.add_last("World");

    assert_eq!(list.remove(&hello), "Hello");
    assert_eq!(list.try_index_of(Some(&hello)), Err(InvalidPosition));
    assert!(!hello.is_linked());

    assert_panics!({
        let mut list = PositionalList::new();
        let hello = list.add_first("Hello");
        list.remove(&hello);
        list.index_of(Some(&hello))
    });
}

#[test]
fn test_index_of_missing_position() {
    let mut list = PositionalList::<&str>::new();
    assert_eq!(list.index_of(None), None);
    assert_eq!(list.try_index_of(None), Ok(None));

    list.add_first("Hello");
    assert_eq!(list.index_of(None), None, "A missing Position is never found.");
}

#[test]
fn test_index_of_matches_walk() {
    let mut list = PositionalList::new();
    let mut positions = Vec::new();
    for i in 0..20 {
        if i % 3 == 0 {
            positions.insert(0, list.add_first(i));
        } else {
            positions.push(list.add_last(i));
        }
    }
    for i in (0..positions.len()).rev().step_by(4) {
        list.remove(&positions.remove(i));
    }

    for (expected, position) in positions.iter().enumerate() {
        assert_eq!(list.index_of(Some(position)), Some(expected));
    }
    assert_eq!(list.len(), positions.len());
    list.verify_double_links();
}

#[test]
fn test_add_before_and_after() {
    let mut list = PositionalList::new();
    let middle = list.add_first(2);
    let before = list.add_before(&middle, 1);
    let after = list.add_after(&middle, 4);
    list.add_before(&after, 3);
    list.add_after(&after, 5);
    list.add_before(&before, 0);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(list.index_of(Some(&after)), Some(4));
    assert_eq!(list.len(), 6);
    list.verify_double_links();
}

#[test]
fn test_navigation() {
    let mut list = PositionalList::new();
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);

    let a = list.add_last('a');
    let b = list.add_last('b');
    let c = list.add_last('c');

    assert_eq!(list.first(), Some(a.clone()));
    assert_eq!(list.last(), Some(c.clone()));
    assert_eq!(list.before(&a), None, "Sentinels shouldn't be exposed as Positions.");
    assert_eq!(list.after(&c), None, "Sentinels shouldn't be exposed as Positions.");
    assert_eq!(list.after(&a), Some(b.clone()));
    assert_eq!(list.before(&c), Some(b.clone()));

    list.remove(&b);
    assert_eq!(list.after(&a), Some(c.clone()));
    assert_eq!(list.try_before(&b), Err(InvalidPosition));
}

#[test]
fn test_get_and_set() {
    let mut list = PositionalList::new();
    let position = list.add_first(String::from("old"));
    assert_eq!(list.get(&position), "old");

    assert_eq!(list.set(&position, String::from("new")), "old");
    list.get_mut(&position).push('!');
    assert_eq!(list.get(&position), "new!");

    list.remove(&position);
    assert!(list.try_get(&position).is_err());
    assert!(list.try_set(&position, String::from("gone")).is_err());
}

#[test]
fn test_removed_position_rejected_everywhere() {
    let mut list = PositionalList::new();
    let kept = list.add_first(1);
    let removed = list.add_last(2);
    let copy = removed.clone();
    list.remove(&removed);

    assert_eq!(copy, removed, "Clones should refer to the same element.");
    assert_eq!(list.try_remove(&copy), Err(InvalidPosition));
    assert_eq!(list.try_add_before(&copy, 3).map(|_| ()), Err(InvalidPosition));
    assert_eq!(list.try_add_after(&copy, 3).map(|_| ()), Err(InvalidPosition));
    assert_eq!(list.try_after(&copy), Err(InvalidPosition));
    assert!(!list.contains(&copy));
    assert!(list.contains(&kept));
    assert_eq!(list.len(), 1, "Failed operations shouldn't mutate the list.");
}

#[test]
fn test_position_from_other_list() {
    let mut list = PositionalList::new();
    let mut other = PositionalList::new();
    list.add_first(1);
    let foreign = other.add_first(1);

    assert!(!list.contains(&foreign));
    assert_eq!(list.try_index_of(Some(&foreign)), Err(InvalidPosition));
    assert_eq!(list.try_remove(&foreign), Err(InvalidPosition));
    assert_eq!(other.index_of(Some(&foreign)), Some(0));
}

#[test]
fn test_position_outlives_list() {
    let position = {
        let mut list = PositionalList::new();
        list.add_first(String::from("short lived"))
    };
    assert!(!position.is_linked(), "Dropping a list should invalidate its Positions.");
}

#[test]
fn test_positions_survive_move() {
    let mut list = PositionalList::new();
    let position = list.add_first(7);
    let moved = Box::new(list);
    assert_eq!(moved.index_of(Some(&position)), Some(0));
    assert_eq!(*moved.get(&position), 7);
}

#[test]
fn test_positions_iter() {
    let list: PositionalList<_> = (0..5).collect();
    let positions: Vec<_> = list.positions().collect();
    assert_eq!(positions.len(), 5);
    for (index, position) in positions.iter().enumerate() {
        assert_eq!(*list.get(position), index);
        assert_eq!(list.index_of(Some(position)), Some(index));
    }
    assert_eq!(list.positions().next_back(), list.last());
}

#[test]
fn test_iter() {
    let mut list: PositionalList<_> = (1..=4).collect();
    assert_eq!(list.iter().len(), 4);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);

    for item in list.iter_mut() {
        *item *= 10;
    }
    assert_eq!(list.into_iter().collect::<Vec<_>>(), [10, 20, 30, 40]);

    let empty = PositionalList::<u8>::new();
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_into_iter_both_ends() {
    let list: PositionalList<_> = "abcde".chars().collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some('a'));
    assert_eq!(iter.next_back(), Some('e'));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<String>(), "bcd");
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new();
    let mut list = PositionalList::new();
    let positions: Vec<_> = (0..6).map(|_| list.add_last(counter.clone())).collect();

    drop(list.remove(&positions[2]));
    assert_eq!(counter.drops(), 1);

    drop(list);
    assert_eq!(counter.drops(), 6, "Every element should be dropped exactly once.");

    let mut list = PositionalList::new();
    for _ in 0..4 {
        list.add_first(counter.clone());
    }
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 10, "Partially consumed iterators should drop the rest.");
}

#[test]
fn test_fmt() {
    let list: PositionalList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list}"), "(1) <-> (2) <-> (3)");
    assert_eq!(
        format!("{list:?}"),
        "PositionalList { contents: [1, 2, 3], len: 3 }"
    );
    assert_eq!(list, [1, 2, 3].into_iter().collect::<PositionalList<_>>());
}

#[test]
fn test_errors_convert() {
    let mut list = PositionalList::new();
    let position = list.add_first(0);
    list.remove(&position);

    let error: crate::error::CollectionError = list.try_remove(&position).unwrap_err().into();
    assert!(error.is_invalid_position());
    assert_eq!(error.to_string(), "Position is not linked into this list!");
}
