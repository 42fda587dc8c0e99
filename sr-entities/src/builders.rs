pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, streamer_builder::*, sub_comment_builder::*};

pub mod streamer_builder {

    use super::*;
    use crate::{id::*, streamer::*};

    #[derive(Debug)]
    pub struct StreamerBuild {
        streamer: Streamer,
    }

    impl StreamerBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.streamer.id = id.into();
            self
        }
        pub fn category_id(mut self, id: &str) -> Self {
            self.streamer.category_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.streamer.name = name.into();
            self
        }
        pub fn views(mut self, views: u64) -> Self {
            self.streamer.views = views;
            self
        }
        pub fn finish(self) -> Streamer {
            self.streamer
        }
    }

    impl Builder for Streamer {
        type Build = StreamerBuild;
        fn build() -> StreamerBuild {
            StreamerBuild {
                streamer: Streamer {
                    id: Id::new(),
                    category_id: Id::new(),
                    name: "".into(),
                    image_url: None,
                    views: 0,
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn streamer_id(mut self, id: &str) -> Self {
            self.comment.streamer_id = id.into();
            self
        }
        pub fn user_name(mut self, name: &str) -> Self {
            self.comment.user_name = name.into();
            self
        }
        pub fn rating(mut self, rating: i8) -> Self {
            self.comment.rating = RatingValue::new(rating);
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    streamer_id: Id::new(),
                    user_name: "".into(),
                    rating: RatingValue::min(),
                    text: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod sub_comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct SubCommentBuild {
        sub_comment: SubComment,
    }

    impl SubCommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.sub_comment.id = id.into();
            self
        }
        pub fn comment_id(mut self, id: &str) -> Self {
            self.sub_comment.comment_id = id.into();
            self
        }
        pub fn user_name(mut self, name: &str) -> Self {
            self.sub_comment.user_name = name.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.sub_comment.text = text.into();
            self
        }
        pub fn finish(self) -> SubComment {
            self.sub_comment
        }
    }

    impl Builder for SubComment {
        type Build = SubCommentBuild;
        fn build() -> SubCommentBuild {
            SubCommentBuild {
                sub_comment: SubComment {
                    id: Id::new(),
                    comment_id: Id::new(),
                    user_name: "".into(),
                    text: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
