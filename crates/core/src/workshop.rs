//! State behind the context demo: a member, their settings and a cart,
//! shared by every component under the workshop provider.

use serde::{Deserialize, Serialize};

use crate::model::{Language, Role, Theme, UserId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Member {
    /// Signed in from the user tab.
    #[must_use]
    pub fn admin() -> Self {
        Self {
            id: UserId::new(1),
            name: "Ali Mohammadi".to_string(),
            email: "ali@example.com".to_string(),
            role: Role::Admin,
        }
    }

    /// Signed in from the innermost nested component.
    #[must_use]
    pub fn tester() -> Self {
        Self {
            id: UserId::new(1),
            name: "Test user".to_string(),
            email: "test@example.com".to_string(),
            role: Role::User,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopSettings {
    pub theme: Theme,
    pub language: Language,
    pub notifications: bool,
}

impl Default for WorkshopSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: Language::Fa,
            notifications: true,
        }
    }
}

impl WorkshopSettings {
    /// Pretty JSON shown under "current settings".
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub language: Option<Language>,
    pub notifications: Option<bool>,
}

/// Fixed items offered as quick-add buttons.
pub const QUICK_CART_ITEMS: [&str; 4] = [
    "Rust book",
    "Gaming mouse",
    "Mechanical keyboard",
    "24 inch monitor",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkshopState {
    member: Option<Member>,
    settings: WorkshopSettings,
    cart: Vec<String>,
}

impl WorkshopState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> WorkshopSettings {
        self.settings
    }

    #[must_use]
    pub fn cart(&self) -> &[String] {
        &self.cart
    }

    pub fn login(&mut self, member: Member) {
        self.member = Some(member);
    }

    /// Sign out and empty the cart.
    pub fn logout(&mut self) {
        self.member = None;
        self.cart.clear();
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.settings.theme = theme;
        }
        if let Some(language) = patch.language {
            self.settings.language = language;
        }
        if let Some(notifications) = patch.notifications {
            self.settings.notifications = notifications;
        }
    }

    pub fn add_to_cart(&mut self, item: impl Into<String>) {
        self.cart.push(item.into());
    }

    /// Remove the first entry equal to `item`. Returns false when absent.
    pub fn remove_from_cart(&mut self, item: &str) -> bool {
        match self.cart.iter().position(|entry| entry == item) {
            Some(index) => {
                self.cart.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_absent_item_is_a_noop() {
        let mut state = WorkshopState::new();
        state.add_to_cart("Rust book");
        let before = state.clone();
        assert!(!state.remove_from_cart("Gaming mouse"));
        assert_eq!(state, before);
    }

    #[test]
    fn removing_present_item_drops_exactly_one_entry() {
        let mut state = WorkshopState::new();
        state.add_to_cart("Rust book");
        state.add_to_cart("Gaming mouse");
        state.add_to_cart("Rust book");

        assert!(state.remove_from_cart("Rust book"));
        assert_eq!(state.cart(), ["Gaming mouse".to_string(), "Rust book".to_string()]);
    }

    #[test]
    fn logout_clears_member_and_cart() {
        let mut state = WorkshopState::new();
        state.login(Member::admin());
        state.add_to_cart(QUICK_CART_ITEMS[0]);
        state.logout();
        assert!(state.member().is_none());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn settings_patch_only_touches_given_fields() {
        let mut state = WorkshopState::new();
        state.update_settings(SettingsPatch {
            notifications: Some(false),
            ..SettingsPatch::default()
        });
        let settings = state.settings();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Fa);
        assert!(!settings.notifications);
    }

    #[test]
    fn settings_render_as_json() {
        let json = WorkshopSettings::default().to_pretty_json();
        assert!(json.contains("\"theme\": \"light\""), "{json}");
        assert!(json.contains("\"language\": \"fa\""), "{json}");
        assert!(json.contains("\"notifications\": true"), "{json}");
    }
}
