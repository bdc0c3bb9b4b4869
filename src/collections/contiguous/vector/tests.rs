#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::Thing;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_growth_doubles_from_one() {
    let mut vec = Vector::<Thing>::new();
    assert_eq!(vec.cap(), 0, "A new Vector shouldn't allocate.");

    let mut caps = [0; 9];
    for (i, cap) in caps.iter_mut().enumerate() {
        vec.push_back(Thing(i as i32));
        *cap = vec.cap();
    }

    assert_eq!(
        caps,
        [1, 2, 4, 4, 8, 8, 8, 8, 16],
        "Capacity should start at 1 and double each time it is exceeded."
    );
    assert_eq!(vec.len(), 9);
    for i in 0..9 {
        assert_eq!(vec[i], Thing(i as i32), "Growth should preserve order.");
    }
}

#[test]
fn test_shrink_halves_capacity_once() {
    let mut vec: Vector<_> = (0..16).map(Thing).collect();
    assert_eq!(vec.cap(), 16);

    // 4 of 16 is exactly a quarter, so no shrink yet.
    while vec.len() > 4 {
        vec.pop_back();
        assert_eq!(vec.cap(), 16, "Capacity shouldn't change at or above a quarter full.");
    }

    assert_eq!(vec.pop_back(), Thing(3));
    assert_eq!(vec.len(), 3);
    assert_eq!(
        vec.cap(),
        8,
        "Dropping below a quarter should halve the capacity, not fit it to the length."
    );

    // 3 of 8 is above a quarter again.
    assert_eq!(vec.pop_back(), Thing(2));
    assert_eq!(vec.cap(), 8);

    assert_eq!(vec.pop_back(), Thing(1));
    assert_eq!(vec.cap(), 4, "1 of 8 is below a quarter, so the capacity halves once.");
    assert_eq!(&*vec, &[Thing(0)], "Shrinking should keep the surviving items.");
}

#[test]
fn test_push_then_pop_returns_to_empty() {
    let mut vec = Vector::new();
    vec.push_back(Thing(1));
    assert_eq!(vec.pop_back(), Thing(1));
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 0, "A single push and pop should release the buffer entirely.");

    for i in 0..4 {
        vec.push_back(Thing(i));
    }
    for i in (0..4).rev() {
        assert_eq!(vec.pop_back(), Thing(i));
    }
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), 2, "The final pop only halves the capacity once.");
}

#[test]
fn test_pop_on_empty() {
    let mut vec = Vector::<Thing>::new();
    assert_eq!(vec.try_pop_back(), Err(EmptyCollection));
    assert_eq!(vec.len(), 0, "A failed pop shouldn't wrap the length around.");
    assert_eq!(vec.cap(), 0);

    assert_panics!({
        Vector::<Thing>::new().pop_back();
    });
}

#[test]
fn test_bounds_checked_access() {
    let mut vec: Vector<_> = (10..15).map(Thing).collect();

    for i in 0..5 {
        assert_eq!(*vec.at(i), Thing(10 + i as i32));
    }

    assert_eq!(
        vec.try_at(5),
        Err(IndexOutOfBounds { index: 5, len: Some(5) }),
        "An index equal to the length should be out of bounds."
    );
    assert!(vec.try_at(6).is_err());
    assert!(vec.try_at(usize::MAX).is_err());

    *vec.at_mut(0) = Thing(99);
    assert_eq!(vec[0], Thing(99), "at_mut should modify the item in place.");
    assert!(vec.try_at_mut(5).is_err());

    assert_panics!({
        let vec: Vector<_> = (0..3).map(Thing).collect();
        vec.at(3);
    });
}

#[test]
fn test_front_and_back() {
    let mut vec = Vector::<Thing>::new();
    assert_eq!(vec.try_front(), Err(EmptyCollection));
    assert_eq!(vec.try_back(), Err(EmptyCollection));

    vec.push_back(Thing(1));
    assert_eq!(vec.front(), vec.back(), "A single item is both the front and the back.");

    vec.push_back(Thing(2));
    vec.push_back(Thing(3));
    assert_eq!(*vec.front(), Thing(1));
    assert_eq!(*vec.back(), Thing(3));
    assert_eq!(vec.cap(), 4, "The back isn't the last slot of the buffer.");

    *vec.front_mut() = Thing(10);
    *vec.back_mut() = Thing(30);
    assert_eq!(&*vec, &[Thing(10), Thing(2), Thing(30)]);

    assert_panics!({
        Vector::<Thing>::new().front();
    });
    assert_panics!({
        Vector::<Thing>::new().back();
    });
}

#[test]
fn test_begin_end_range() {
    let vec: Vector<_> = (0..5).map(Thing).collect();
    let (begin, end) = (vec.begin(), vec.end());

    // SAFETY: Both pointers are derived from the same live range.
    let distance = unsafe { end.offset_from(begin) };
    assert_eq!(distance, 5, "end should be one past the last item.");

    let mut walked = Vector::new();
    let mut pos = begin;
    while pos != end {
        // SAFETY: pos is within begin..end, which covers the initialized items.
        unsafe {
            walked.push_back(*pos);
            pos = pos.add(1);
        }
    }
    assert_eq!(walked, vec, "Walking from begin to end should visit every item in order.");

    let empty = Vector::<Thing>::new();
    assert_eq!(empty.begin(), empty.end(), "An empty Vector has an empty range.");
}

#[test]
fn test_reallocate() {
    let mut vec: Vector<_> = (0..3).map(Thing).collect();
    vec.reallocate(10);
    assert_eq!(vec.cap(), 10);
    assert_eq!(&*vec, &[Thing(0), Thing(1), Thing(2)]);

    vec.reallocate(3);
    assert_eq!(vec.cap(), 3, "Reallocating to the length should leave no spare slots.");

    assert_panics!({
        let mut vec: Vector<_> = (0..3).map(Thing).collect();
        vec.reallocate(2);
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for item in iter::repeat_with(|| counter.clone()).take(10) {
        vec.push_back(item);
    }
    assert_eq!(counter.count(), 0, "Growing shouldn't drop any items.");

    let popped = vec.pop_back();
    assert_eq!(counter.count(), 0, "Popping should move the item out, not drop it.");
    drop(popped);
    assert_eq!(counter.count(), 1);

    drop(vec);
    assert_eq!(counter.count(), 10, "10 elements should have been dropped.");

    let counter = CountedDrop::new();
    let mut vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    vec.clear();
    assert_eq!(counter.count(), 5, "Clearing should drop every item.");
    assert_eq!(vec.cap(), 0, "Clearing should release the buffer.");
}

#[test]
fn test_iterators() {
    let mut vec: Vector<_> = (0..5).collect::<Vector<i32>>();

    for i in vec.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*vec, [0, 2, 4, 6, 8], "Vector mutated by iterator should equal this slice.");

    let collected: Vector<_> = vec.iter().copied().collect();
    assert_eq!(vec, collected, "Collected iter should be equal.");

    let mut iter = vec.clone().into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new();
    let vec: Vector<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = vec.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    assert_eq!(counter.count(), 2);
    drop(iter);
    assert_eq!(
        counter.count(),
        10,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_clone_is_independent() {
    let mut vec: Vector<_> = (0..5).map(Thing).collect();
    let copy = vec.clone();
    assert_eq!(copy.cap(), vec.cap(), "A clone should have the same capacity.");

    vec[0] = Thing(42);
    assert_eq!(copy[0], Thing(0), "Changing the original shouldn't affect the clone.");
    assert_ne!(vec, copy);
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..5 {
        vec.push_back(());
    }
    assert_eq!(vec.len(), 5);
    assert_eq!(vec.cap(), 8, "ZSTs should follow the same capacity policy.");

    for _ in 0..5 {
        vec.pop_back();
    }
    assert!(vec.is_empty());
}

#[test]
fn test_capacity_overflow() {
    assert_eq!(CapacityOverflow.to_string(), "Capacity overflow!");

    assert_panics!({
        Vector::<u64>::with_cap(usize::MAX);
    });
    assert_panics!({
        let mut vec = Vector::<u64>::new();
        vec.reallocate(usize::MAX / 2);
    });
}
