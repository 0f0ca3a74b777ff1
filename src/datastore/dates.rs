//! The synthetic dates stamped onto new posts. These are placeholders, not
//! timestamps: a post's date is drawn at random when it is created and has
//! nothing to do with the submission time.

use chrono::NaiveDate;
use rand::Rng;

/// Produce a random calendar date formatted like "3/14/1987": year in
/// [1960, 2023], month in [1, 12], day in [1, 28]. Days past the 28th are
/// never drawn, so every combination is a real date in every month.
pub fn synthetic_date<R: Rng>(rng: &mut R) -> String {
    let year: i32 = rng.gen_range(1960..=2023);
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .expect("days 1-28 exist in every month of every year");
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_synthetic_dates_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let date = synthetic_date(&mut rng);
            let parts: Vec<i32> = date
                .split('/')
                .map(|part| part.parse().expect("every date part is a number"))
                .collect();
            assert_eq!(parts.len(), 3, "unexpected date shape: {}", date);
            let (month, day, year) = (parts[0], parts[1], parts[2]);
            assert!((1..=12).contains(&month), "month out of bounds: {}", date);
            assert!((1..=28).contains(&day), "day out of bounds: {}", date);
            assert!((1960..=2023).contains(&year), "year out of bounds: {}", date);
        }
    }

    #[test]
    fn test_dates_are_not_zero_padded() {
        // 200 draws are plenty to hit single-digit months and days, which are
        // the only parts padding could touch.
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let date = synthetic_date(&mut rng);
            for part in date.split('/') {
                assert!(!part.starts_with('0'), "zero-padded date: {}", date);
            }
        }
    }
}
