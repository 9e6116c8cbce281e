//! Result ordering.

use super::models::{Place, Post};

/// Rating weighted by how many reviews back it up, so a 5.0 with three
/// reviews doesn't outrank a 4.5 with three thousand.
pub fn review_weighted_score(place: &Place) -> f64 {
    let rating = place.rating().unwrap_or(0.0);
    let reviews = place.review_count().unwrap_or(0) as f64;
    rating * (reviews + 1.0).log10()
}

/// Highest weighted score first; ties keep provider order.
pub fn rank_places(places: &mut [Place]) {
    places.sort_by(|a, b| review_weighted_score(b).total_cmp(&review_weighted_score(a)));
}

/// Most liked first; ties keep fetch order.
pub fn rank_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
}
