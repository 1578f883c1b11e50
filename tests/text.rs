mod common;
use common::*;

#[test]
fn byte_string_never_exceeds_the_requested_size() {
    let generator = byte_string();
    for seed in 0..SEEDS {
        let tree = run(&generator, Seed::new(seed), 16).unwrap();
        assert!(tree.root().len() <= 16);
    }
}

#[test]
fn char_in_range_stays_within_its_bounds() {
    let generator = char_in_range('g', 'k');
    for seed in 0..SEEDS {
        let c = run(&generator, Seed::new(seed), 0).unwrap().into_root();
        assert!(('g'..='k').contains(&c));
    }
}

#[test]
#[should_panic]
fn char_in_range_panics_on_an_empty_range() {
    char_in_range('z', 'a');
}

#[test]
fn digit_is_always_an_ascii_digit() {
    let generator = digit();
    for seed in 0..SEEDS {
        let c = run(&generator, Seed::new(seed), 0).unwrap().into_root();
        assert!(c.is_ascii_digit());
    }
}

#[test]
fn ascii_string_contains_only_ascii_characters() {
    let generator = ascii_string();
    for seed in 0..64u64 {
        let value = run(&generator, Seed::new(seed), 30).unwrap().into_root();
        assert!(value.chars().all(|c| c.is_ascii()));
    }
}

#[test]
fn word_contains_only_letters() {
    let generator = word();
    for seed in 0..64u64 {
        let value = run(&generator, Seed::new(seed), 20).unwrap().into_root();
        assert!(value.chars().all(|c| c.is_ascii_alphabetic()));
    }
}

#[test]
fn atom_is_never_empty() {
    let generator = atom();
    for seed in 0..SEEDS {
        let value = run(&generator, Seed::new(seed), 10).unwrap().into_root();
        assert!(!value.is_empty());
    }
}

#[test]
fn keyword_of_values_match_the_paired_generator() {
    let generator = keyword_of(boolean());
    let tree = run(&generator, Seed::new(6), 10).unwrap();
    for (key, _) in tree.root() {
        assert!(key.chars().next().is_some());
    }
}
