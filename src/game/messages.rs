//! Winner messages.

use rand::Rng;
use rand::seq::SliceRandom;

pub const WIN_MESSAGES: &[&str] = &[
    "كفو والله! 🏆",
    "أبطال الديوانية 👑",
    "ما عليكم كلام 🔥",
    "فوز مستحق، عاشت الإيادي 💪",
    "الدومينو إلكم وبس ✨",
    "لعب نظيف ونتيجة أنظف 👏",
];

/// Pick one message uniformly at random. An empty set yields "".
pub fn pick_message<'a, R: Rng + ?Sized>(rng: &mut R, messages: &[&'a str]) -> &'a str {
    messages.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn picks_from_the_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let msg = pick_message(&mut rng, WIN_MESSAGES);
            assert!(WIN_MESSAGES.contains(&msg));
        }
    }

    #[test]
    fn same_seed_same_message() {
        let a = pick_message(&mut StdRng::seed_from_u64(42), WIN_MESSAGES);
        let b = pick_message(&mut StdRng::seed_from_u64(42), WIN_MESSAGES);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_set_gives_empty_message() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_message(&mut rng, &[]), "");
    }

    #[test]
    fn single_message_always_chosen() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_message(&mut rng, &["only"]), "only");
    }
}
