use super::*;

impl<'a> StreamerRepo for DbReadOnly<'a> {
    fn create_streamer(&self, _streamer: &Streamer) -> Result<()> {
        unreachable!();
    }

    fn get_streamer_by_name(&self, name: &str) -> Result<Streamer> {
        get_streamer_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn streamers_of_category(&self, category_id: &str) -> Result<Vec<Streamer>> {
        streamers_of_category(&mut self.conn.borrow_mut(), category_id)
    }
}

impl<'a> StreamerRepo for DbReadWrite<'a> {
    fn create_streamer(&self, streamer: &Streamer) -> Result<()> {
        create_streamer(&mut self.conn.borrow_mut(), streamer)
    }

    fn get_streamer_by_name(&self, name: &str) -> Result<Streamer> {
        get_streamer_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn streamers_of_category(&self, category_id: &str) -> Result<Vec<Streamer>> {
        streamers_of_category(&mut self.conn.borrow_mut(), category_id)
    }
}

fn create_streamer(conn: &mut SqliteConnection, s: &Streamer) -> Result<()> {
    let parent_rowid = resolve_category_rowid(conn, s.category_id.as_ref())?;
    let new_streamer = models::NewStreamer {
        parent_rowid,
        id: s.id.as_ref(),
        name: &s.name,
        image_url: s.image_url.as_deref(),
        views: s.views as i64,
    };
    let _count = diesel::insert_into(schema::streamer::table)
        .values(&new_streamer)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_streamer_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Streamer> {
    use schema::{category::dsl as category_dsl, streamer::dsl as streamer_dsl};
    Ok(schema::streamer::table
        .inner_join(schema::category::table)
        .select((
            streamer_dsl::rowid,
            streamer_dsl::id,
            streamer_dsl::name,
            streamer_dsl::image_url,
            streamer_dsl::views,
            category_dsl::id,
        ))
        .filter(streamer_dsl::name.eq(name))
        .first::<models::JoinedStreamer>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn streamers_of_category(conn: &mut SqliteConnection, category_id: &str) -> Result<Vec<Streamer>> {
    use schema::{category::dsl as category_dsl, streamer::dsl as streamer_dsl};
    Ok(schema::streamer::table
        .inner_join(schema::category::table)
        .select((
            streamer_dsl::rowid,
            streamer_dsl::id,
            streamer_dsl::name,
            streamer_dsl::image_url,
            streamer_dsl::views,
            category_dsl::id,
        ))
        .filter(category_dsl::id.eq(category_id))
        .order_by(streamer_dsl::rowid.asc())
        .load::<models::JoinedStreamer>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
