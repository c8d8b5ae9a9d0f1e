#![allow(dead_code)]
//Helpers shared by the tests of several parts

use climb_api::types::{Mountain, TrailLike};

//Code point of the first character, 0 for the empty key
pub fn ord_first(key: &str) -> usize {
    key.chars().next().map_or(0, |c| c as usize)
}

//Code point of the last character, 0 for the empty key
pub fn ord_last(key: &str) -> usize {
    key.chars().last().map_or(0, |c| c as usize)
}

pub fn top_top() -> Mountain {
    Mountain::new("top-top", 5, 3)
}
pub fn top_bot() -> Mountain {
    Mountain::new("top-bot", 3, 5)
}
pub fn top_mid() -> Mountain {
    Mountain::new("top-mid", 4, 7)
}
pub fn bot_one() -> Mountain {
    Mountain::new("bot-one", 2, 5)
}
pub fn bot_two() -> Mountain {
    Mountain::new("bot-two", 0, 0)
}
pub fn bot_three() -> Mountain {
    Mountain::new("bot-three", 1, 1)
}
pub fn final_mountain() -> Mountain {
    Mountain::new("final", 4, 4)
}

//A trail with a single mountain
pub fn single<T: TrailLike>(mountain: Mountain) -> T {
    T::series(mountain, T::empty())
}

//The example trail:
//
//            top-top
//   top-mid <       >
//  /         top-bot \
// <                   > final
//  \         _______ /
//   bot-one <       > bot-three
//            bot-two
pub fn example_trail<T: TrailLike>() -> T {
    let top_middle = T::series(
        top_mid(),
        T::split(single(top_top()), single(top_bot()), T::empty()),
    );
    let bottom = T::series(
        bot_one(),
        T::split(T::empty(), single(bot_two()), single(bot_three())),
    );
    T::split(top_middle, bottom, single(final_mountain()))
}

//Mountains with the given lengths and names "m0", "m1", ...
pub fn numbered(lengths: &[u32]) -> Vec<Mountain> {
    lengths
        .iter()
        .enumerate()
        .map(|(i, &l)| Mountain::new(format!("m{}", i), 1, l))
        .collect()
}
