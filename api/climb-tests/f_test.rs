use super::TrailName;
use climb_api::climb::TrailPathSupport;
use climb_api::types::{Mountain, TrailLike};

#[path = "utils.rs"]
mod utils;
use utils::*;

#[test]
fn collect_all() {
    let trail: TrailName = example_trail();
    assert_eq!(
        trail.collect_all_mountains(),
        vec![top_mid(), top_top(), top_bot(), bot_one(), bot_two(), bot_three(), final_mountain()]
    );
    assert!(TrailName::empty().collect_all_mountains().is_empty());
}

#[test]
fn collect_nested_follow() {
    let m = |n: &str| Mountain::new(n, 1, 1);
    let inner = TrailName::split(single(m("a")), single(m("b")), single(m("c")));
    let trail = TrailName::series(m("start"), TrailName::split(inner, single(m("d")), single(m("e"))));
    let names: Vec<String> = trail.collect_all_mountains().into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["start", "a", "b", "c", "d", "e"]);
}

#[test]
fn paths_of_length_three() {
    let trail: TrailName = example_trail();
    assert_eq!(
        trail.length_k_paths(3),
        vec![
            vec![top_mid(), top_top(), final_mountain()],
            vec![top_mid(), top_bot(), final_mountain()],
            vec![bot_one(), bot_three(), final_mountain()],
        ]
    );
}

#[test]
fn paths_of_other_lengths() {
    let trail: TrailName = example_trail();
    assert_eq!(
        trail.length_k_paths(4),
        vec![vec![bot_one(), bot_two(), bot_three(), final_mountain()]]
    );
    assert!(trail.length_k_paths(2).is_empty());
    assert!(trail.length_k_paths(5).is_empty());
    assert!(trail.length_k_paths(0).is_empty());
}

#[test]
fn empty_trail_has_one_empty_path() {
    let empty = TrailName::empty();
    assert_eq!(empty.length_k_paths(0), vec![Vec::<Mountain>::new()]);
    assert!(empty.length_k_paths(1).is_empty());

    //Two empty branches are two different walks
    let fork = TrailName::split(TrailName::empty(), TrailName::empty(), TrailName::empty());
    assert_eq!(fork.length_k_paths(0).len(), 2);
}

#[test]
fn many_branches() {
    //Ten splits in a row, each with one mountain on top and none below
    let mut trail = TrailName::empty();
    for i in 0..10u32 {
        trail = TrailName::split(
            single(Mountain::new(format!("m{}", i), 1, i)),
            TrailName::empty(),
            trail,
        );
    }
    let counts: Vec<usize> = (0..=10).map(|k| trail.length_k_paths(k).len()).collect();
    //Binomial coefficients: choose which k splits go over the top
    assert_eq!(counts, vec![1, 10, 45, 120, 210, 252, 210, 120, 45, 10, 1]);
    assert_eq!(trail.collect_all_mountains().len(), 10);
}

#[test]
fn long_and_deep_trails() {
    let mut long = TrailName::empty();
    for i in 0..200_000u32 {
        long = long.add_mountain_before(Mountain::new("m", 1, i));
    }
    let paths = long.length_k_paths(200_000);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0][0].length, 199_999);
    assert!(long.length_k_paths(199_999).is_empty());
    assert_eq!(long.collect_all_mountains().len(), 200_000);

    //Splits nested in the top branch: every level adds one way out through the bottom
    let nested = |depth: u32| {
        let mut deep = TrailName::empty();
        for i in 0..depth {
            deep = TrailName::split(deep, single(Mountain::new("b", 1, i)), TrailName::empty());
        }
        deep
    };
    assert_eq!(nested(100_000).length_k_paths(0).len(), 1);
    let shallow = nested(1_000);
    assert_eq!(shallow.length_k_paths(1).len(), 1_000);
    assert!(shallow.length_k_paths(2).is_empty());
}
