pub const MAX_STARS: u8 = 5;
const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Five glyphs, the first `stars` of them filled.
pub fn star_glyphs(stars: u8) -> String {
    (1..=MAX_STARS)
        .map(|position| if position <= stars { FILLED_STAR } else { EMPTY_STAR })
        .collect()
}

/// Rounds a raw API rating into `0..=5`. Non-finite ratings count as zero.
pub fn normalize_rating(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}

/// The rating line shown in the info block, e.g. `★★★☆☆ (3/5)`.
///
/// Ratings that round to zero produce no line at all.
pub fn rating_line(rating_stars: Option<f64>) -> Option<String> {
    let stars = normalize_rating(rating_stars?);
    if stars == 0 {
        return None;
    }
    Some(format!("{} ({}/{})", star_glyphs(stars), stars, MAX_STARS))
}
