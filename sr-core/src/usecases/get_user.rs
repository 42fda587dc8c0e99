use super::prelude::*;

pub fn get_user_with_profile<R>(repo: &R, user_name: &str) -> Result<(User, UserProfile)>
where
    R: UserRepo + ProfileRepo,
{
    let user = repo.get_user_by_name(user_name)?;
    let profile = repo.get_profile_of_user(user_name)?;
    Ok((user, profile))
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::usecases::{create_new_user, NewUser};

    #[test]
    fn existing_user_with_profile() {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                name: "testuser".into(),
                email: "test@test.com".into(),
                password: "testabc123".into(),
            },
        )
        .unwrap();
        let (user, profile) = get_user_with_profile(&db, "testuser").unwrap();
        assert_eq!(user.name, "testuser");
        assert_eq!(profile.user_name, "testuser");
    }

    #[test]
    fn unknown_user() {
        let db = MockDb::default();
        let err = get_user_with_profile(&db, "nobody").err().unwrap();
        assert!(matches!(
            err,
            Error::Repo(crate::repositories::Error::NotFound)
        ));
    }
}
