use super::TrailName;
use climb_api::climb::TrailWalkSupport;
use climb_api::personality::{BottomWalker, LazyWalker, TopWalker, WalkerPersonality};
use climb_api::types::{Mountain, TrailLike};

#[path = "utils.rs"]
mod utils;

fn walk<P: WalkerPersonality + Default>(trail: &TrailName) -> Vec<Mountain> {
    let mut walker = P::default();
    trail.follow_path(&mut walker);
    walker.mountains().to_vec()
}

#[test]
fn top_walker() {
    let trail: TrailName = utils::example_trail();
    assert_eq!(
        walk::<TopWalker>(&trail),
        vec![utils::top_mid(), utils::top_top(), utils::final_mountain()]
    );
}

#[test]
fn bottom_walker() {
    let trail: TrailName = utils::example_trail();
    assert_eq!(
        walk::<BottomWalker>(&trail),
        vec![
            utils::bot_one(),
            utils::bot_two(),
            utils::bot_three(),
            utils::final_mountain()
        ]
    );
}

#[test]
fn lazy_walker() {
    let trail: TrailName = utils::example_trail();
    //bot-one is easier than top-mid, then the empty top branch is free
    assert_eq!(
        walk::<LazyWalker>(&trail),
        vec![utils::bot_one(), utils::bot_three(), utils::final_mountain()]
    );
}

#[test]
fn nested_follow_paths() {
    let m = |n: &str| Mountain::new(n, 1, 1);
    let inner = TrailName::split(
        utils::single(m("a")),
        utils::single(m("b")),
        utils::single(m("c")),
    );
    let trail = TrailName::split(inner, utils::single(m("d")), utils::single(m("e")));
    let names: Vec<String> = walk::<TopWalker>(&trail).into_iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["a", "c", "e"]);
}

#[test]
fn empty_and_long_trails() {
    assert!(walk::<TopWalker>(&TrailName::empty()).is_empty());

    let mut trail = TrailName::empty();
    for i in 0..250_000u32 {
        trail = trail.add_mountain_before(Mountain::new("m", 1, i));
    }
    trail = trail.add_empty_branch_before();
    let walked = walk::<BottomWalker>(&trail);
    assert_eq!(walked.len(), 250_000);
    assert_eq!(walked[0].length, 249_999);
    //The trail is dropped here, one store at a time
}
