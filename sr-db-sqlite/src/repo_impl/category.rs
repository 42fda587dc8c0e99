use super::*;

impl<'a> CategoryRepo for DbReadOnly<'a> {
    fn create_category(&self, _category: &Category) -> Result<()> {
        unreachable!();
    }

    fn get_category_by_slug(&self, slug: &str) -> Result<Category> {
        get_category_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn count_categories(&self) -> Result<usize> {
        count_categories(&mut self.conn.borrow_mut())
    }
}

impl<'a> CategoryRepo for DbReadWrite<'a> {
    fn create_category(&self, category: &Category) -> Result<()> {
        create_category(&mut self.conn.borrow_mut(), category)
    }

    fn get_category_by_slug(&self, slug: &str) -> Result<Category> {
        get_category_by_slug(&mut self.conn.borrow_mut(), slug)
    }
    fn all_categories(&self) -> Result<Vec<Category>> {
        all_categories(&mut self.conn.borrow_mut())
    }
    fn count_categories(&self) -> Result<usize> {
        count_categories(&mut self.conn.borrow_mut())
    }
}

fn create_category(conn: &mut SqliteConnection, c: &Category) -> Result<()> {
    let new_category = models::NewCategory {
        id: c.id.as_ref(),
        name: &c.name,
        slug: &c.slug,
        image_url: c.image_url.as_deref(),
    };
    let _count = diesel::insert_into(schema::category::table)
        .values(&new_category)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_category_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Category> {
    use schema::category::dsl;
    Ok(schema::category::table
        .filter(dsl::slug.eq(slug))
        .first::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::category::dsl;
    Ok(schema::category::table
        .order_by(dsl::rowid.asc())
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_categories(conn: &mut SqliteConnection) -> Result<usize> {
    use diesel::dsl::count_star;
    Ok(schema::category::table
        .select(count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
