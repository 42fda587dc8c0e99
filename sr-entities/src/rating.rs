/// A single star rating as submitted with a comment.
///
/// Valid values are the integers from 1 ("awful") to 5 ("excellent").
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct RatingValue(i8);

impl RatingValue {
    pub fn new<I: Into<i8>>(val: I) -> Self {
        let new = Self(val.into());
        debug_assert!(new.is_valid());
        new
    }

    pub const fn min() -> Self {
        Self(1)
    }

    pub const fn max() -> Self {
        Self(5)
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

impl From<i8> for RatingValue {
    fn from(from: i8) -> Self {
        Self(from)
    }
}

impl From<RatingValue> for i8 {
    fn from(from: RatingValue) -> Self {
        from.0
    }
}

impl From<RatingValue> for f64 {
    fn from(from: RatingValue) -> Self {
        f64::from(from.0)
    }
}

/// The average of all ratings of a streamer, rounded to two decimal places.
///
/// A streamer without any rated comments has the average 0.0.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct AvgRatingValue(f64);

impl From<f64> for AvgRatingValue {
    fn from(from: f64) -> Self {
        Self(from)
    }
}

impl From<AvgRatingValue> for f64 {
    fn from(from: AvgRatingValue) -> Self {
        from.0
    }
}

#[derive(Debug, Default, Clone)]
pub struct AvgRatingValueBuilder {
    acc: i64,
    cnt: usize,
}

impl AvgRatingValueBuilder {
    fn add(&mut self, val: RatingValue) {
        debug_assert!(val.is_valid());
        self.acc += i64::from(val.0);
        self.cnt += 1;
    }

    pub fn count(&self) -> usize {
        self.cnt
    }

    /// Ties are rounded half away from zero, i.e. 3.125 becomes 3.13.
    pub fn build(self) -> AvgRatingValue {
        if self.cnt > 0 {
            let avg = self.acc as f64 / self.cnt as f64;
            AvgRatingValue::from((avg * 100.0).round() / 100.0)
        } else {
            Default::default()
        }
    }
}

impl std::ops::AddAssign<RatingValue> for AvgRatingValueBuilder {
    fn add_assign(&mut self, rhs: RatingValue) {
        self.add(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_bounds() {
        assert!(!RatingValue::from(0).is_valid());
        assert!(RatingValue::from(1).is_valid());
        assert!(RatingValue::from(5).is_valid());
        assert!(!RatingValue::from(6).is_valid());
    }

    #[test]
    fn empty_average_is_zero() {
        assert_eq!(AvgRatingValueBuilder::default().build(), 0.0.into());
    }

    #[test]
    fn average_is_rounded_to_two_decimal_places() {
        let mut builder = AvgRatingValueBuilder::default();
        builder += RatingValue::from(1);
        builder += RatingValue::from(1);
        builder += RatingValue::from(2);
        // 4/3 = 1.333...
        assert_eq!(builder.build(), 1.33.into());

        let mut builder = AvgRatingValueBuilder::default();
        builder += RatingValue::from(2);
        builder += RatingValue::from(3);
        builder += RatingValue::from(5);
        builder += RatingValue::from(5);
        builder += RatingValue::from(5);
        builder += RatingValue::from(5);
        builder += RatingValue::from(5);
        builder += RatingValue::from(2);
        // 32/8 = 4.0
        assert_eq!(builder.build(), 4.0.into());
    }

    #[test]
    fn half_is_rounded_up() {
        // 27/8 = 3.375 -> 3.38
        let mut builder = AvgRatingValueBuilder::default();
        for val in [1, 2, 3, 4, 5, 4, 4, 4] {
            builder += RatingValue::from(val);
        }
        assert_eq!(builder.build(), 3.38.into());
    }
}
