use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{DisjointSet, UnknownVertex};

fn with_labels(labels: impl IntoIterator<Item = u32>) -> DisjointSet<u32> {
    let mut set = DisjointSet::new();
    for label in labels {
        set.make_set(label);
    }
    set
}

#[test]
fn registered_labels_are_their_own_representative() {
    let mut set = with_labels(1..=5);
    for label in 1..=5 {
        assert_eq!(set.find(label), Ok(label));
        assert_eq!(set.rank(&label), Some(0));
    }
    assert_eq!(set.num_sets(), 5);
    assert_eq!(set.len(), 5);
}

#[test]
fn make_set_is_a_no_op_for_known_labels() {
    let mut set = with_labels(1..=3);
    set.union(1, 2).unwrap();
    set.make_set(2);
    set.make_set(1);

    assert_eq!(set.len(), 3);
    assert_eq!(set.num_sets(), 2);
    assert_eq!(set.find(2).unwrap(), set.find(1).unwrap());
}

#[test]
fn unknown_labels_are_rejected() {
    let mut set = with_labels(1..=2);
    assert_eq!(set.find(7), Err(UnknownVertex(7)));
    assert_eq!(set.union(1, 7), Err(UnknownVertex(7)));
    assert_eq!(set.union(9, 1), Err(UnknownVertex(9)));
    assert_eq!(set.num_sets(), 2);
}

#[test]
fn union_by_rank_keeps_first_root_on_ties() {
    let mut set = with_labels(1..=4);

    set.union(1, 2).unwrap();
    assert_eq!(set.parent(&2), Some(1));
    assert_eq!(set.rank(&1), Some(1));

    // rank 0 tree goes below the rank 1 tree, whatever the argument order
    set.union(3, 1).unwrap();
    assert_eq!(set.parent(&3), Some(1));
    assert_eq!(set.rank(&1), Some(1));

    set.union(4, 4).unwrap();
    assert_eq!(set.parent(&4), Some(4));
    assert_eq!(set.num_sets(), 2);
}

#[test]
fn union_closure() {
    let mut set = with_labels(1..=6);
    set.union(1, 2).unwrap();
    set.union(2, 3).unwrap();
    set.union(5, 6).unwrap();

    assert_eq!(set.find(1).unwrap(), set.find(3).unwrap());
    assert!(set.same_set(3, 1).unwrap());
    assert!(!set.same_set(1, 5).unwrap());
    assert!(!set.same_set(4, 6).unwrap());
    assert_eq!(set.num_sets(), 3);
}

#[test]
fn find_compresses_the_path_and_is_idempotent() {
    let mut set = with_labels(1..=4);
    set.union(1, 2).unwrap();
    set.union(3, 4).unwrap();
    set.union(1, 3).unwrap();

    // 4 -> 3 -> 1 before compression
    assert_eq!(set.parent(&4), Some(3));
    assert_eq!(set.rank(&1), Some(2));

    let first = set.find(4).unwrap();
    assert_eq!(first, 1);
    assert_eq!(set.parent(&4), Some(1));

    let second = set.find(4).unwrap();
    assert_eq!(first, second);
    assert_eq!(set.parent(&4), Some(1));
}

#[test]
fn agrees_with_naive_component_labels() {
    let n = 200_u32;
    let mut rng = Pcg64::seed_from_u64(842);
    let mut set = with_labels(0..n);
    // naive relabelling: every member carries the id of its component
    let mut component: Vec<u32> = (0..n).collect();

    for _ in 0..150 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        set.union(a, b).unwrap();

        let (keep, replace) = (component[a as usize], component[b as usize]);
        for it in component.iter_mut() {
            if *it == replace {
                *it = keep;
            }
        }
    }

    for _ in 0..1000 {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        assert_eq!(
            set.same_set(a, b).unwrap(),
            component[a as usize] == component[b as usize],
            "disagreement for {} and {}",
            a,
            b
        );
    }

    let mut distinct = component.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(set.num_sets(), distinct.len());
}

#[test]
fn merged_trees_are_flattened_by_find() {
    let n = 1_u32 << 17;
    let mut set = with_labels(0..n);
    let mut step = 1;
    while step < n {
        for label in (0..n).step_by(2 * step as usize) {
            set.union(label, label + step).unwrap();
        }
        step *= 2;
    }
    assert_eq!(set.rank(&0), Some(17));
    assert_eq!(set.parent(&(n - 1)), Some(n - 2));
    assert_eq!(set.num_sets(), 1);

    for label in (0..n).rev() {
        assert_eq!(set.find(label), Ok(0));
        assert_eq!(set.parent(&label), Some(0));
    }
}
