use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }

    fn get_user_by_name(&self, name: &str) -> Result<User> {
        get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        try_get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.conn.borrow_mut(), user)
    }

    fn get_user_by_name(&self, name: &str) -> Result<User> {
        get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn try_get_user_by_name(&self, name: &str) -> Result<Option<User>> {
        try_get_user_by_name(&mut self.conn.borrow_mut(), name)
    }
    fn count_users(&self) -> Result<usize> {
        count_users(&mut self.conn.borrow_mut())
    }
}

impl<'a> ProfileRepo for DbReadOnly<'a> {
    fn create_profile(&self, _profile: &UserProfile) -> Result<()> {
        unreachable!();
    }
    fn update_profile(&self, _profile: &UserProfile) -> Result<()> {
        unreachable!();
    }

    fn get_profile_of_user(&self, user_name: &str) -> Result<UserProfile> {
        get_profile_of_user(&mut self.conn.borrow_mut(), user_name)
    }
}

impl<'a> ProfileRepo for DbReadWrite<'a> {
    fn create_profile(&self, profile: &UserProfile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &UserProfile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }

    fn get_profile_of_user(&self, user_name: &str) -> Result<UserProfile> {
        get_profile_of_user(&mut self.conn.borrow_mut(), user_name)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser {
        name: &u.name,
        email: &u.email,
        password: u.password.as_ref(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    use schema::users::dsl;
    let new_user = models::NewUser {
        name: &u.name,
        email: &u.email,
        password: u.password.as_ref(),
    };
    diesel::update(dsl::users.filter(dsl::name.eq(new_user.name)))
        .set(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user_by_name(conn: &mut SqliteConnection, name: &str) -> Result<User> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::name.eq(name))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_user_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::name.eq(name))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn count_users(conn: &mut SqliteConnection) -> Result<usize> {
    use diesel::dsl::count_star;
    Ok(schema::users::table
        .select(count_star())
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn create_profile(conn: &mut SqliteConnection, profile: &UserProfile) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, &profile.user_name)?;
    let new_profile = models::NewUserProfile {
        user_rowid,
        bio: &profile.bio,
        picture_url: profile.picture_url.as_deref(),
    };
    diesel::insert_into(schema::user_profiles::table)
        .values(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_profile(conn: &mut SqliteConnection, profile: &UserProfile) -> Result<()> {
    use schema::user_profiles::dsl;
    let user_rowid = resolve_user_rowid(conn, &profile.user_name)?;
    let new_profile = models::NewUserProfile {
        user_rowid,
        bio: &profile.bio,
        picture_url: profile.picture_url.as_deref(),
    };
    diesel::update(dsl::user_profiles.filter(dsl::user_rowid.eq(user_rowid)))
        .set(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_profile_of_user(conn: &mut SqliteConnection, user_name: &str) -> Result<UserProfile> {
    use schema::{user_profiles::dsl as profile_dsl, users::dsl as user_dsl};
    Ok(schema::user_profiles::table
        .inner_join(schema::users::table)
        .select((
            profile_dsl::bio,
            profile_dsl::picture_url,
            user_dsl::name,
        ))
        .filter(user_dsl::name.eq(user_name))
        .first::<models::JoinedUserProfile>(conn)
        .map_err(from_diesel_err)?
        .into())
}
