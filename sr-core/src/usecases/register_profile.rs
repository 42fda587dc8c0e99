use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub bio: String,
    pub picture_url: Option<String>,
}

/// Fill in the profile of the authenticated user.
pub fn register_profile<R>(repo: &R, principal: &Principal, new_profile: NewProfile) -> Result<()>
where
    R: ProfileRepo,
{
    let NewProfile { bio, picture_url } = new_profile;
    let mut profile = repo.get_profile_of_user(&principal.user_name)?;
    profile.bio = bio;
    profile.picture_url = picture_url;
    repo.update_profile(&profile)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn fill_in_own_profile() {
        let db = MockDb::default();
        db.profiles.borrow_mut().push(UserProfile {
            user_name: "testuser".into(),
            ..Default::default()
        });
        let principal = Principal::new("testuser");
        register_profile(
            &db,
            &principal,
            NewProfile {
                bio: "streams and games".into(),
                picture_url: Some("/media/profile_images/test.png".into()),
            },
        )
        .unwrap();
        let profile = db.get_profile_of_user("testuser").unwrap();
        assert_eq!(profile.bio, "streams and games");
        assert!(profile.picture_url.is_some());
    }

    #[test]
    fn profile_must_exist() {
        let db = MockDb::default();
        let principal = Principal::new("nobody");
        assert!(register_profile(&db, &principal, NewProfile::default()).is_err());
    }
}
