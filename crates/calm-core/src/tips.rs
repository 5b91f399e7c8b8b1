use rand::prelude::*;

pub const TIPS: [&str; 5] = [
    "Place your phone face down; breathe in for 4, out for 6.",
    "Unfollow one noisy account after this breath.",
    "Turn brightness down a notch—your eyes will thank you.",
    "Stand up, roll your shoulders, then continue.",
    "Move the next app you open to a folder named “Later”.",
];

pub struct TipRotator {
    rng: StdRng,
}

impl TipRotator {
    /// `None` seeds from OS/browser entropy; tests pass a fixed seed.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| thread_rng().gen());
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly random tip; repeats are allowed.
    pub fn next_tip(&mut self) -> &'static str {
        TIPS[self.rng.gen_range(0..TIPS.len())]
    }
}
