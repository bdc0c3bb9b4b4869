#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::Thing;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn list_of(size: i32) -> SinglyLinkedList<Thing> {
    (0..size).map(|i| Thing(i * 10)).collect()
}

fn link_addresses<T>(list: &SinglyLinkedList<T>) -> Vec<*const Link<T>> {
    let mut addresses = Vec::new();
    let mut curr = list.head.as_deref();
    while let Some(link) = curr {
        addresses.push(link as *const Link<T>);
        curr = link.next();
    }
    addresses
}

fn values(list: &SinglyLinkedList<Thing>) -> Vec<i32> {
    list.iter().map(|t| t.value()).collect()
}

#[test]
fn test_new_is_empty() {
    let list = SinglyLinkedList::<Thing>::new();
    assert!(list.is_empty());
    assert!(list.head.is_none());
    assert_eq!(list.size(), 0);
    assert_eq!(list.begin(), list.end(), "An empty list should begin at its end.");
}

#[test]
fn test_push_front() {
    let mut list = SinglyLinkedList::<Thing>::new();
    for i in 0..10 {
        let prev_head = list.head.as_deref().map(|link| link as *const Link<Thing>);
        list.push_front(Thing(i));

        assert_eq!(*list.front(), Thing(i), "The new value should be at the front.");
        assert_eq!(
            list.get_link(0).next().map(|link| link as *const Link<Thing>),
            prev_head,
            "The old first link should be the second link now."
        );
    }
    assert_eq!(list.size(), 10);
    assert_eq!(values(&list), [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_pop_front() {
    let counter = CountedDrop::new();
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(15).collect();

    for i in 1..=15 {
        drop(list.pop_front());
        assert_eq!(counter.count(), i, "Each pop should release exactly one element.");
        assert_eq!(list.size(), 15 - i);
    }
    assert!(list.head.is_none(), "The list should be empty.");
    assert_eq!(list.try_pop_front().map(|_| ()), Err(EmptyCollection));

    assert_panics!({
        SinglyLinkedList::<Thing>::new().pop_front();
    });
}

#[test]
fn test_push_back() {
    let mut list = SinglyLinkedList::<Thing>::new();
    list.push_back(Thing(0));
    let first = link_addresses(&list)[0];
    assert!(!list.get_link(0).has_next(), "A single link should have no successor.");

    for i in 1..10 {
        list.push_back(Thing(i));
        assert_eq!(link_addresses(&list)[0], first, "The head shouldn't change.");
        assert_eq!(*list.back(), Thing(i), "The new value should be at the back.");
        assert_eq!(list.size(), i as usize + 1);
    }
    assert_eq!(values(&list), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_pop_back() {
    let mut list = list_of(15);
    let head = link_addresses(&list)[0];

    for i in (1..15).rev() {
        assert_eq!(list.pop_back(), Thing(i * 10));
        assert_eq!(link_addresses(&list)[0], head, "The head shouldn't change.");
        assert_eq!(*list.back(), Thing((i - 1) * 10), "The second last value is now last.");
        assert!(!list.get_link(i as isize - 1).has_next());
    }

    assert_eq!(list.pop_back(), Thing(0));
    assert!(list.head.is_none(), "Popping the only element should empty the list.");
    assert_eq!(list.try_pop_back(), Err(EmptyCollection));

    assert_panics!({
        SinglyLinkedList::<Thing>::new().pop_back();
    });
}

#[test]
fn test_size_follows_operations() {
    let mut list = list_of(15);
    assert_eq!(list.size(), 15);
    list.push_front(Thing(42));
    assert_eq!(list.size(), 16);
    list.push_back(Thing(42));
    assert_eq!(list.len(), 17);
    list.pop_front();
    list.pop_back();
    list.pop_back();
    assert_eq!(list.size(), 14);
}

#[test]
fn test_front_and_back() {
    let mut list = list_of(3);
    assert_eq!(*list.front(), Thing(0));
    assert_eq!(*list.back(), Thing(20));

    *list.front_mut() = Thing(1);
    *list.back_mut() = Thing(2);
    assert_eq!(values(&list), [1, 10, 2]);

    let mut empty = SinglyLinkedList::<Thing>::new();
    assert_eq!(empty.try_front(), Err(EmptyCollection));
    assert_eq!(empty.try_back(), Err(EmptyCollection));
    assert!(empty.try_front_mut().is_err());
    assert!(empty.try_back_mut().is_err());
    assert_panics!({
        SinglyLinkedList::<Thing>::new().back();
    });
}

#[test]
fn test_indexed_access() {
    let mut list = list_of(5);

    for i in 0..5 {
        assert_eq!(*list.at(i), Thing(i as i32 * 10));
        assert_eq!(list[i as usize], Thing(i as i32 * 10));
    }

    assert_eq!(
        list.try_get_link(-1).map(|_| ()),
        Err(IndexOutOfBounds { index: -1, len: None }),
        "Negative indices should be out of bounds without walking the list."
    );
    assert_eq!(
        list.try_get_link(5).map(|_| ()),
        Err(IndexOutOfBounds { index: 5, len: Some(5) }),
        "An index equal to the size should be out of bounds."
    );
    assert!(list.try_at(6).is_err());
    assert!(list.try_at(isize::MIN).is_err());
    assert!(list.try_at_mut(5).is_err());

    *list.at_mut(2) = Thing(-5);
    list[3] = Thing(-6);
    assert_eq!(values(&list), [0, 10, -5, -6, 40]);

    assert_panics!({
        list_of(5).at(5);
    });
    assert_panics!({
        list_of(5).get_link(-1);
    });
    assert_panics!({
        let _value = list_of(5)[5];
    });
    assert!(SinglyLinkedList::<Thing>::new().try_at(0).is_err());
}

#[test]
fn test_copy_is_independent() {
    let counter = CountedDrop::new();
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let copy = list.copy();
    assert_eq!(copy.size(), 10);
    drop(copy);
    assert_eq!(counter.count(), 10, "The copy should own exactly n new elements.");
    drop(list);
    assert_eq!(counter.count(), 20);

    let original = list_of(10);
    let mut copy = original.copy();
    assert_eq!(copy, original, "The copy should have equal values in the same order.");

    let original_links = link_addresses(&original);
    for link in link_addresses(&copy) {
        assert!(!original_links.contains(&link), "The copy shouldn't share any links.");
    }

    *copy.front_mut() = Thing(99);
    copy.push_back(Thing(100));
    copy.reverse();
    assert_eq!(values(&original), [0, 10, 20, 30, 40, 50, 60, 70, 80, 90]);

    let empty = SinglyLinkedList::<Thing>::new();
    assert!(empty.copy().is_empty());
}

#[test]
fn test_reverse() {
    let mut list = list_of(6);
    let before = link_addresses(&list);

    list.reverse();
    assert_eq!(values(&list), [50, 40, 30, 20, 10, 0]);

    let after = link_addresses(&list);
    assert_eq!(after.len(), before.len(), "Reversing shouldn't allocate or free links.");
    for (a, b) in before.iter().zip(after.iter().rev()) {
        assert_eq!(a, b, "Links should be relinked, not copied or swapped.");
    }

    list.reverse();
    assert_eq!(values(&list), [0, 10, 20, 30, 40, 50], "Reversing twice should restore order.");
    assert_eq!(link_addresses(&list), before);

    let mut single = list_of(1);
    single.reverse();
    assert_eq!(values(&single), [0]);

    let mut empty = SinglyLinkedList::<Thing>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_reverse_keeps_values_in_place() {
    let counter = CountedDrop::new();
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(8).collect();
    list.reverse();
    assert_eq!(counter.count(), 0, "No value should be dropped or replaced by a reverse.");
    drop(list);
    assert_eq!(counter.count(), 8);
}

#[test]
fn test_positions() {
    let list = list_of(3);
    let mut pos = list.begin();
    assert_eq!(pos.get(), Some(&Thing(0)));

    let start = pos;
    pos.advance();
    assert_ne!(pos, start, "Advancing should move to another link.");
    assert_eq!(pos.get(), Some(&Thing(10)));
    pos.advance();
    pos.advance();
    assert!(pos.is_end());
    assert_eq!(pos, list.end(), "Running off the end should reach the end position.");
    pos.advance();
    assert_eq!(pos, list.end(), "The end position should stay at the end.");

    let same_values = list_of(3);
    assert_ne!(
        list.begin(),
        same_values.begin(),
        "Positions compare links, not the values in them."
    );

    let mut list = list_of(3);
    let mut pos = list.begin_mut();
    while !pos.is_end() {
        if let Some(value) = pos.get_mut() {
            value.0 += 1;
        }
        pos.advance();
    }
    assert_eq!(values(&list), [1, 11, 21], "Mutable positions should edit values in place.");

    let first = list.begin_mut().into_mut();
    if let Some(value) = first {
        *value = Thing(7);
    }
    assert_eq!(*list.front(), Thing(7));
}

#[test]
fn test_iterators() {
    let mut list = list_of(5);
    for value in list.iter_mut() {
        value.0 /= 10;
    }
    assert_eq!(values(&list), [0, 1, 2, 3, 4]);

    let doubled: SinglyLinkedList<_> = list.iter().map(|t| Thing(t.0 * 2)).collect();
    assert_eq!(values(&doubled), [0, 2, 4, 6, 8], "Collecting should preserve order.");

    let mut extended = list_of(2);
    extended.extend([Thing(1), Thing(2)]);
    assert_eq!(values(&extended), [0, 10, 1, 2]);

    let mut owned = list.into_iter();
    assert_eq!(owned.next(), Some(Thing(0)));
    assert_eq!(owned.next(), Some(Thing(1)));

    let counter = CountedDrop::new();
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(6).collect();
    let mut owned = list.into_iter();
    drop(owned.next());
    drop(owned);
    assert_eq!(counter.count(), 6, "Dropping an owned iterator should drop the rest.");
}

#[test]
fn test_contains_and_equality() {
    let list = list_of(4);
    assert!(list.contains(&Thing(30)));
    assert!(!list.contains(&Thing(31)));

    assert_eq!(list, list_of(4));
    assert_ne!(list, list_of(3), "Lists of different sizes shouldn't be equal.");
    assert_eq!(list.clone(), list);
}

#[test]
fn test_formatting() {
    let list = list_of(3);
    assert_eq!(list.to_string(), "(0) -> (10) -> (20)");
    assert_eq!(format!("{list:?}"), "[Thing(0), Thing(10), Thing(20)]");
    assert_eq!(SinglyLinkedList::<Thing>::new().to_string(), "");
}

#[test]
fn test_long_list_drop() {
    let mut list = SinglyLinkedList::new();
    for i in 0..1_000_000 {
        list.push_front(i);
    }
    // Recursively dropping a chain this long would overflow the stack.
    drop(list);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(counter.count(), 4);
}
