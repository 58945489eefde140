// tests/star_rating_tests.rs - Star glyph counts for display ratings

use business_directory::web_app::model::{StarCounts, MAX_STARS};

#[test]
fn test_counts_always_sum_to_five() {
    for tenth in 0..=50 {
        let rating = f64::from(tenth) / 10.0;
        let counts = StarCounts::from_rating(rating);
        assert_eq!(
            counts.total(),
            usize::from(MAX_STARS),
            "Rating {} produced {:?}",
            rating,
            counts
        );
    }
}

#[test]
fn test_whole_ratings_have_no_half_star() {
    for whole in 0..=5u8 {
        let counts = StarCounts::from_rating(f64::from(whole));
        assert_eq!(counts.full, usize::from(whole));
        assert_eq!(counts.half, 0);
        assert_eq!(counts.empty, usize::from(5 - whole));
    }
}

#[test]
fn test_any_fraction_shows_half_star() {
    assert_eq!(StarCounts::from_rating(4.5), StarCounts { full: 4, half: 1, empty: 0 });
    assert_eq!(StarCounts::from_rating(4.2), StarCounts { full: 4, half: 1, empty: 0 });
    assert_eq!(StarCounts::from_rating(0.1), StarCounts { full: 0, half: 1, empty: 4 });
}

#[test]
fn test_out_of_range_is_clamped() {
    assert_eq!(StarCounts::from_rating(7.3), StarCounts { full: 5, half: 0, empty: 0 });
    assert_eq!(StarCounts::from_rating(-2.0), StarCounts { full: 0, half: 0, empty: 5 });
    assert_eq!(StarCounts::from_rating(f64::NAN), StarCounts { full: 0, half: 0, empty: 5 });
}
