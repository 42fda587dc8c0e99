use super::*;

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        unreachable!();
    }

    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_streamer(&self, streamer_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_streamer(&mut self.conn.borrow_mut(), streamer_id)
    }
}

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }

    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&mut self.conn.borrow_mut(), id)
    }
    fn load_comments_of_streamer(&self, streamer_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_streamer(&mut self.conn.borrow_mut(), streamer_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: Comment) -> Result<()> {
    let Comment {
        id,
        streamer_id,
        user_name,
        rating,
        text,
        created_at,
    } = comment;
    let parent_rowid = resolve_streamer_rowid(conn, streamer_id.as_ref())?;
    let new_comment = models::NewComment {
        parent_rowid,
        id: id.into(),
        created_at: created_at.as_millis(),
        created_by: user_name,
        rating: i8::from(rating).into(),
        text,
    };
    let _count = diesel::insert_into(schema::comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comment(conn: &mut SqliteConnection, id: &str) -> Result<Comment> {
    use schema::{comment::dsl as comment_dsl, streamer::dsl as streamer_dsl};
    Ok(schema::comment::table
        .inner_join(schema::streamer::table)
        .select((
            comment_dsl::rowid,
            comment_dsl::id,
            comment_dsl::created_at,
            comment_dsl::created_by,
            comment_dsl::rating,
            comment_dsl::text,
            streamer_dsl::id,
        ))
        .filter(comment_dsl::id.eq(id))
        .first::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into())
}

// In creation order, oldest first
fn load_comments_of_streamer(
    conn: &mut SqliteConnection,
    streamer_id: &str,
) -> Result<Vec<Comment>> {
    use schema::{comment::dsl as comment_dsl, streamer::dsl as streamer_dsl};
    Ok(schema::comment::table
        .inner_join(schema::streamer::table)
        .select((
            comment_dsl::rowid,
            comment_dsl::id,
            comment_dsl::created_at,
            comment_dsl::created_by,
            comment_dsl::rating,
            comment_dsl::text,
            streamer_dsl::id,
        ))
        .filter(streamer_dsl::id.eq(streamer_id))
        .order_by(comment_dsl::rowid.asc())
        .load::<models::JoinedComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
