/// Routes under `/users/` that are not scoped to a single user.
///
/// These are matched before any username segment, so a user called `login`
/// can never shadow the login endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRoute {
    List,
    ApiToken,
    OidcCodeExchange,
    Login,
    Logout,
    Signup,
    PasswordReset,
}

impl AccountRoute {
    pub const ALL: [AccountRoute; 7] = [
        Self::List,
        Self::ApiToken,
        Self::OidcCodeExchange,
        Self::Login,
        Self::Logout,
        Self::Signup,
        Self::PasswordReset,
    ];

    /// Path below `/users/`.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::List => "",
            Self::ApiToken => "api-token/",
            Self::OidcCodeExchange => "oidc/code-exchange/",
            Self::Login => "login/",
            Self::Logout => "logout/",
            Self::Signup => "signup/",
            Self::PasswordReset => "password/reset/",
        }
    }

    pub fn path(&self) -> String {
        format!("{}{}", super::USERS_PREFIX, self.suffix())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "userprofile-list",
            Self::ApiToken => "user-token-exchange",
            Self::OidcCodeExchange => "user-oidc-code-exchange",
            Self::Login => "user-login",
            Self::Logout => "user-logout",
            Self::Signup => "user-signup",
            Self::PasswordReset => "userprofile-password-reset",
        }
    }
}
