//! Authentication gate.
//!
//! A local UI flag only. Nothing here talks to a backend; the gate decides
//! whether the resolver renders admin screens or one of the sign-in flows.

use crate::error::ParseError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Sign-in sub-flow shown while unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AuthView {
    #[default]
    Login,
    ForgotPassword,
    RequestAccess,
}

impl AuthView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthView::Login => "login",
            AuthView::ForgotPassword => "forgotPassword",
            AuthView::RequestAccess => "requestAccess",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthView::Login => "Sign In",
            AuthView::ForgotPassword => "Reset Password",
            AuthView::RequestAccess => "Request Access",
        }
    }
}

impl fmt::Display for AuthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthView {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "login" => Ok(AuthView::Login),
            "forgotPassword" => Ok(AuthView::ForgotPassword),
            "requestAccess" => Ok(AuthView::RequestAccess),
            _ => Err(ParseError::UnknownAuthView(s.to_string())),
        }
    }
}

/// Identity stored on successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub signed_in_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            signed_in_at: Utc::now(),
        }
    }
}

/// Authenticated flag plus the active sign-in sub-flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGate {
    user: Option<AdminUser>,
    auth_view: AuthView,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn auth_view(&self) -> AuthView {
        self.auth_view
    }

    pub fn login(&mut self, user: AdminUser) {
        self.user = Some(user);
        self.auth_view = AuthView::Login;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.auth_view = AuthView::Login;
    }

    /// Switch the sign-in sub-flow. Ignored once signed in.
    pub fn show(&mut self, view: AuthView) -> bool {
        if self.is_authenticated() {
            return false;
        }
        self.auth_view = view;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> AdminUser {
        AdminUser::new("Amara Okafor", "amara@minex.test", "super-admin")
    }

    #[test]
    fn test_gate_starts_unauthenticated_on_login() {
        let gate = AuthGate::new();
        assert!(!gate.is_authenticated());
        assert_eq!(gate.auth_view(), AuthView::Login);
    }

    #[test]
    fn test_login_resets_auth_view() {
        let mut gate = AuthGate::new();
        assert!(gate.show(AuthView::RequestAccess));
        gate.login(admin());
        assert!(gate.is_authenticated());
        assert_eq!(gate.auth_view(), AuthView::Login);
    }

    #[test]
    fn test_show_ignored_while_authenticated() {
        let mut gate = AuthGate::new();
        gate.login(admin());
        assert!(!gate.show(AuthView::ForgotPassword));
        assert_eq!(gate.auth_view(), AuthView::Login);
    }

    #[test]
    fn test_logout_clears_user() {
        let mut gate = AuthGate::new();
        gate.login(admin());
        gate.logout();
        assert!(gate.user().is_none());
        assert_eq!(gate.auth_view(), AuthView::Login);
    }

    #[test]
    fn test_auth_view_tags() {
        for view in [AuthView::Login, AuthView::ForgotPassword, AuthView::RequestAccess] {
            assert_eq!(view.as_str().parse::<AuthView>().unwrap(), view);
            let json = serde_json::to_string(&view).unwrap();
            assert_eq!(json, format!("\"{}\"", view.as_str()));
        }
    }
}
