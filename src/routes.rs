//! Route Table
//!
//! Top-level screens under the app prefix and which users may reach them.

use crate::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Requests,
    Profile,
    Cart,
    Admin,
}

pub const ALL_SCREENS: [Screen; 5] = [
    Screen::Home,
    Screen::Requests,
    Screen::Profile,
    Screen::Cart,
    Screen::Admin,
];

impl Screen {
    /// Path segment below the app prefix ("" for the index)
    pub fn segment(self) -> &'static str {
        match self {
            Screen::Home => "",
            Screen::Requests => "requests",
            Screen::Profile => "profile",
            Screen::Cart => "cart",
            Screen::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Inventory",
            Screen::Requests => "Requests",
            Screen::Profile => "Profile",
            Screen::Cart => "Cart",
            Screen::Admin => "Admin",
        }
    }

    pub fn staff_only(self) -> bool {
        matches!(self, Screen::Admin)
    }

    pub fn href(self, prefix: &str) -> String {
        match self.segment() {
            "" => prefix.to_string(),
            segment => format!("{}/{}", prefix, segment),
        }
    }

    pub fn allowed_for(self, user: &User) -> bool {
        !self.staff_only() || user.is_staff
    }
}

/// Screens shown in the nav bar for `user`
pub fn visible_screens(user: &User) -> Vec<Screen> {
    ALL_SCREENS.into_iter().filter(|s| s.allowed_for(user)).collect()
}

/// Resolve a location path; `None` for unknown paths or screens the user may not see
pub fn screen_for_path(prefix: &str, path: &str, user: &User) -> Option<Screen> {
    let rest = path.strip_prefix(prefix)?;
    let segment = rest.trim_matches('/');
    ALL_SCREENS
        .into_iter()
        .find(|s| s.segment() == segment)
        .filter(|s| s.allowed_for(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_staff: bool) -> User {
        User {
            id: 7,
            username: "kip".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            is_staff,
        }
    }

    #[test]
    fn test_admin_hidden_for_regular_user() {
        let screens = visible_screens(&user(false));
        assert_eq!(screens.len(), 4);
        assert!(!screens.contains(&Screen::Admin));
    }

    #[test]
    fn test_admin_visible_for_staff() {
        assert!(visible_screens(&user(true)).contains(&Screen::Admin));
    }

    #[test]
    fn test_screen_for_path() {
        let staff = user(true);
        assert_eq!(screen_for_path("/app", "/app", &staff), Some(Screen::Home));
        assert_eq!(screen_for_path("/app", "/app/", &staff), Some(Screen::Home));
        assert_eq!(screen_for_path("/app", "/app/cart/", &staff), Some(Screen::Cart));
        assert_eq!(screen_for_path("/app", "/app/admin", &staff), Some(Screen::Admin));
        assert_eq!(screen_for_path("/app", "/app/admin", &user(false)), None);
        assert_eq!(screen_for_path("/app", "/app/nowhere", &staff), None);
        assert_eq!(screen_for_path("/app", "/login", &staff), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(Screen::Home.href("/app"), "/app");
        assert_eq!(Screen::Requests.href("/app"), "/app/requests");
    }
}
