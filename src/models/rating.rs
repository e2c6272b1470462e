use std::fmt;

use serde::{Deserialize, Serialize};

pub const EMOJI_SCALE: [&str; 5] = ["🥲", "😕", "😐", "😊", "🤩"];

/// Satisfaction score on the fixed 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub i64);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, RatingOutOfRange> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        EMOJI_SCALE[(self.0 - Self::MIN) as usize]
    }

    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i16> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.0 as i64
    }
}

impl From<Rating> for i16 {
    fn from(rating: Rating) -> Self {
        rating.0 as i16
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-3).is_err());
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
    }

    #[test]
    fn test_emoji_scale_runs_sad_to_ecstatic() {
        let glyphs: Vec<_> = Rating::all().map(Rating::emoji).collect();
        assert_eq!(glyphs, vec!["🥲", "😕", "😐", "😊", "🤩"]);
    }

    #[test]
    fn test_default_is_middle_of_scale() {
        assert_eq!(Rating::default().value(), 3);
        assert_eq!(Rating::default().emoji(), "😐");
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let rating = Rating::new(4).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Rating>("2").unwrap().value(), 2);
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }
}
