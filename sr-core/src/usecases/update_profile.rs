use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub bio: Option<String>,
}

/// Update the e-mail address and/or bio of the authenticated user.
///
/// Empty fields leave the stored values untouched.
pub fn update_profile<R>(repo: &R, principal: &Principal, update: ProfileUpdate) -> Result<()>
where
    R: UserRepo + ProfileRepo,
{
    let ProfileUpdate { email, bio } = update;
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        if !validate::is_valid_email(&email) {
            return Err(Error::Email);
        }
        let mut user = repo.get_user_by_name(&principal.user_name)?;
        user.email = email;
        repo.update_user(&user)?;
    }
    if let Some(bio) = bio.filter(|b| !b.is_empty()) {
        let mut profile = repo.get_profile_of_user(&principal.user_name)?;
        profile.bio = bio;
        repo.update_profile(&profile)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::usecases::{create_new_user, NewUser};

    fn db_with_user() -> MockDb {
        let db = MockDb::default();
        create_new_user(
            &db,
            NewUser {
                name: "testuser".into(),
                email: "old@test.com".into(),
                password: "testabc123".into(),
            },
        )
        .unwrap();
        db
    }

    #[test]
    fn update_email_and_bio() {
        let db = db_with_user();
        let principal = Principal::new("testuser");
        update_profile(
            &db,
            &principal,
            ProfileUpdate {
                email: Some("new@test.com".into()),
                bio: Some("new bio".into()),
            },
        )
        .unwrap();
        assert_eq!(db.get_user_by_name("testuser").unwrap().email, "new@test.com");
        assert_eq!(db.get_profile_of_user("testuser").unwrap().bio, "new bio");
    }

    #[test]
    fn empty_fields_are_ignored() {
        let db = db_with_user();
        let principal = Principal::new("testuser");
        update_profile(
            &db,
            &principal,
            ProfileUpdate {
                email: Some("".into()),
                bio: None,
            },
        )
        .unwrap();
        assert_eq!(db.get_user_by_name("testuser").unwrap().email, "old@test.com");
    }

    #[test]
    fn reject_invalid_email() {
        let db = db_with_user();
        let principal = Principal::new("testuser");
        let err = update_profile(
            &db,
            &principal,
            ProfileUpdate {
                email: Some("not-an-email".into()),
                bio: None,
            },
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::Email));
        assert_eq!(db.get_user_by_name("testuser").unwrap().email, "old@test.com");
    }
}
