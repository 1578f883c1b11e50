mod common;
use common::*;

#[derive(Clone, Debug, PartialEq)]
enum Json {
    Leaf(i64),
    Node(Vec<Json>),
}

fn depth(value: &Json) -> usize {
    match value {
        Json::Leaf(_) => 0,
        Json::Node(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
    }
}

fn node_count(value: &Json) -> usize {
    match value {
        Json::Leaf(_) => 1,
        Json::Node(children) => 1 + children.iter().map(node_count).sum::<usize>(),
    }
}

fn json_generator() -> Generator<Json> {
    tree(|sub| list_of(sub).map(Json::Node), integer_in_range(-50..=50).map(Json::Leaf))
}

#[test]
fn s5_tree_depth_stays_bounded_across_many_seeds() {
    let generator = json_generator();
    for seed in 0..SEEDS {
        let value = run(&generator, Seed::new(seed), 30).unwrap().into_root();
        assert!(depth(&value) <= 30, "depth {} too large for seed {seed}", depth(&value));
    }
}

#[test]
fn tree_at_size_zero_is_always_a_leaf() {
    let generator = json_generator();
    for seed in 0..SEEDS {
        let value = run(&generator, Seed::new(seed), 0).unwrap().into_root();
        assert_eq!(depth(&value), 0);
    }
}

#[test]
fn tree_grows_richer_structure_as_size_grows() {
    let generator = json_generator();
    let mut saw_recursion = false;
    for seed in 0..SEEDS {
        let value = run(&generator, Seed::new(seed), 200).unwrap().into_root();
        if node_count(&value) > 1 {
            saw_recursion = true;
            break;
        }
    }
    assert!(saw_recursion, "a size of 200 should admit at least one recursive node somewhere");
}

#[test]
fn tree_shrinks_without_ever_panicking_or_growing_without_bound() {
    let generator = json_generator();
    for seed in 0..64u64 {
        let root = run(&generator, Seed::new(seed), 40).unwrap();
        assert_all_descendants(root, |value| depth(value) <= 40, 1000);
    }
}
