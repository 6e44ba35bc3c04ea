use super::*;

#[test]
fn same_seed_same_stream() {
    let mut a = DecorRng::new(42);
    let mut b = DecorRng::new(42);
    for _ in 0..32 {
        assert_eq!(a.unit(), b.unit());
    }
    assert_ne!(DecorRng::new(1).unit(), DecorRng::new(2).unit());
}

#[test]
fn unit_and_below_stay_in_range() {
    let mut rng = DecorRng::new(7);
    for _ in 0..1000 {
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
        assert!(rng.below(5) < 5);
    }
    assert_eq!(rng.below(0), 0);
    assert_eq!(rng.below(1), 0);
}

#[test]
fn scatter_is_distinct_and_bounded() {
    let mut rng = DecorRng::new(3);
    for _ in 0..200 {
        let picked = rng.scatter(3, 7, 96);
        assert!((3..=7).contains(&picked.len()), "{picked:?}");
        assert!(picked.iter().all(|&i| i < 96));
        for (n, i) in picked.iter().enumerate() {
            assert!(!picked[..n].contains(i));
        }
    }
}

#[test]
fn scatter_never_asks_for_more_than_the_pool() {
    let mut rng = DecorRng::new(9);
    assert_eq!(rng.scatter(3, 7, 1), vec![0]);
    let mut both = rng.scatter(3, 7, 2);
    both.sort_unstable();
    assert_eq!(both, vec![0, 1]);
    assert!(rng.scatter(3, 7, 0).is_empty());
}
