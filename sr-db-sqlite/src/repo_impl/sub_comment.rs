use super::*;

impl<'a> SubCommentRepository for DbReadOnly<'a> {
    fn create_sub_comment(&self, _sub_comment: SubComment) -> Result<()> {
        unreachable!();
    }

    fn load_sub_comments_of_comment(&self, comment_id: &str) -> Result<Vec<SubComment>> {
        load_sub_comments_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

impl<'a> SubCommentRepository for DbReadWrite<'a> {
    fn create_sub_comment(&self, sub_comment: SubComment) -> Result<()> {
        create_sub_comment(&mut self.conn.borrow_mut(), sub_comment)
    }

    fn load_sub_comments_of_comment(&self, comment_id: &str) -> Result<Vec<SubComment>> {
        load_sub_comments_of_comment(&mut self.conn.borrow_mut(), comment_id)
    }
}

fn create_sub_comment(conn: &mut SqliteConnection, sub_comment: SubComment) -> Result<()> {
    let SubComment {
        id,
        comment_id,
        user_name,
        text,
        created_at,
    } = sub_comment;
    let parent_rowid = resolve_comment_rowid(conn, comment_id.as_ref())?;
    let new_sub_comment = models::NewSubComment {
        parent_rowid,
        id: id.into(),
        created_at: created_at.as_millis(),
        created_by: user_name,
        text,
    };
    let _count = diesel::insert_into(schema::sub_comment::table)
        .values(&new_sub_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

// In creation order, oldest first
fn load_sub_comments_of_comment(
    conn: &mut SqliteConnection,
    comment_id: &str,
) -> Result<Vec<SubComment>> {
    use schema::{comment::dsl as comment_dsl, sub_comment::dsl as sub_comment_dsl};
    Ok(schema::sub_comment::table
        .inner_join(schema::comment::table)
        .select((
            sub_comment_dsl::rowid,
            sub_comment_dsl::id,
            sub_comment_dsl::created_at,
            sub_comment_dsl::created_by,
            sub_comment_dsl::text,
            comment_dsl::id,
        ))
        .filter(comment_dsl::id.eq(comment_id))
        .order_by(sub_comment_dsl::rowid.asc())
        .load::<models::JoinedSubComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
