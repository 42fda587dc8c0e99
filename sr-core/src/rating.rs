use crate::entities::*;

pub trait Rated {
    fn avg_rating(&self, _: &[Comment]) -> AvgRatingValue;
}

impl Rated for Streamer {
    fn avg_rating(&self, comments: &[Comment]) -> AvgRatingValue {
        debug_assert_eq!(
            comments.len(),
            comments
                .iter()
                .filter(|c| c.streamer_id == self.id)
                .count()
        );
        comments
            .iter()
            .fold(AvgRatingValueBuilder::default(), |mut acc, c| {
                acc += c.rating;
                acc
            })
            .build()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use sr_entities::builders::*;

    fn new_streamer(id: &str) -> Streamer {
        Streamer::build().id(id).finish()
    }

    fn new_comment(id: &str, streamer_id: &str, rating: i8) -> Comment {
        Comment::build()
            .id(id)
            .streamer_id(streamer_id)
            .rating(rating)
            .finish()
    }

    #[test]
    fn average_rating() {
        let streamer1 = new_streamer("a");
        let streamer2 = new_streamer("b");
        let streamer3 = new_streamer("c");

        let comments1 = [
            new_comment("1", "a", 3),
            new_comment("2", "a", 4),
            new_comment("3", "a", 2),
        ];

        let comments2 = [new_comment("4", "b", 1), new_comment("5", "b", 4)];

        assert_eq!(streamer1.avg_rating(&comments1), 3.0.into());
        assert_eq!(streamer2.avg_rating(&comments2), 2.5.into());
        assert_eq!(streamer3.avg_rating(&[]), 0.0.into());
    }

    #[test]
    fn average_rating_is_rounded() {
        let streamer = new_streamer("a");
        let comments = [
            new_comment("1", "a", 5),
            new_comment("2", "a", 5),
            new_comment("3", "a", 4),
        ];
        // 14/3 = 4.666... -> 4.67
        assert_eq!(streamer.avg_rating(&comments), 4.67.into());
    }
}
