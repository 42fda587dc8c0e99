/// The authenticated user on whose behalf an operation runs.
///
/// Resolved by the caller (e.g. from the session cookie) and passed in
/// explicitly. The core never consults any ambient login state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_name: String,
}

impl Principal {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }
}
