//! Форма системных настроек. Значения живут только в памяти формы,
//! "Save Changes" пишет снимок в лог.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Profile,
    Users,
    Security,
    Billing,
    Notifications,
    Integrations,
    Database,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 8] = [
        SettingsTab::General,
        SettingsTab::Profile,
        SettingsTab::Users,
        SettingsTab::Security,
        SettingsTab::Billing,
        SettingsTab::Notifications,
        SettingsTab::Integrations,
        SettingsTab::Database,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Profile => "profile",
            SettingsTab::Users => "users",
            SettingsTab::Security => "security",
            SettingsTab::Billing => "billing",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Integrations => "integrations",
            SettingsTab::Database => "database",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Profile => "Profile",
            SettingsTab::Users => "Users & Permissions",
            SettingsTab::Security => "Security",
            SettingsTab::Billing => "Billing",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::Database => "Database",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingsTab::General => "General Settings",
            SettingsTab::Profile => "Profile Settings",
            SettingsTab::Users => "Users & Permissions",
            SettingsTab::Security => "Security Settings",
            SettingsTab::Billing => "Billing & Subscription",
            SettingsTab::Notifications => "Notification Settings",
            SettingsTab::Integrations => "Integrations",
            SettingsTab::Database => "Database Settings",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SettingsTab::General => "Configure general system settings and preferences.",
            SettingsTab::Profile => "Manage your personal profile information.",
            SettingsTab::Users => "Manage users and their access permissions.",
            SettingsTab::Security => "Configure security settings and preferences.",
            SettingsTab::Billing => "Manage your billing information and subscription plan.",
            SettingsTab::Notifications => "Configure how and when you receive notifications.",
            SettingsTab::Integrations => "Connect with third-party services and applications.",
            SettingsTab::Database => "Configure database connections and settings.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingsTab::General => "settings",
            SettingsTab::Profile => "user",
            SettingsTab::Users => "users",
            SettingsTab::Security => "shield",
            SettingsTab::Billing => "credit-card",
            SettingsTab::Notifications => "bell",
            SettingsTab::Integrations => "globe",
            SettingsTab::Database => "database",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .unwrap_or_default()
    }
}

/// (value, label) для выпадающих списков
pub type SelectOption = (&'static str, &'static str);

pub const TIMEZONE_OPTIONS: [SelectOption; 4] = [
    ("america-new_york", "America/New York"),
    ("america-los_angeles", "America/Los Angeles"),
    ("europe-london", "Europe/London"),
    ("asia-tokyo", "Asia/Tokyo"),
];

pub const CURRENCY_OPTIONS: [SelectOption; 4] = [
    ("usd", "USD ($)"),
    ("eur", "EUR (€)"),
    ("gbp", "GBP (£)"),
    ("jpy", "JPY (¥)"),
];

pub const DATE_FORMAT_OPTIONS: [SelectOption; 3] = [
    ("mm-dd-yyyy", "MM/DD/YYYY"),
    ("dd-mm-yyyy", "DD/MM/YYYY"),
    ("yyyy-mm-dd", "YYYY/MM/DD"),
];

pub const LANGUAGE_OPTIONS: [SelectOption; 4] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub business_name: String,
    pub business_email: String,
    pub business_phone: String,
    pub business_address: String,
    pub timezone: String,
    pub currency: String,
    pub date_format: String,
    pub language: String,
    pub dark_mode: bool,
    pub email_notifications: bool,
    pub auto_logout: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            business_name: "Inventory Management System".to_string(),
            business_email: "contact@example.com".to_string(),
            business_phone: "(555) 123-4567".to_string(),
            business_address: "123 Business St, City, State 12345".to_string(),
            timezone: TIMEZONE_OPTIONS[0].0.to_string(),
            currency: CURRENCY_OPTIONS[0].0.to_string(),
            date_format: DATE_FORMAT_OPTIONS[0].0.to_string(),
            language: LANGUAGE_OPTIONS[0].0.to_string(),
            dark_mode: true,
            email_notifications: true,
            auto_logout: false,
        }
    }
}

impl GeneralSettings {
    /// Значение переключателя по id из PREFERENCE_TOGGLES
    pub fn toggle(&self, id: &str) -> Option<bool> {
        match id {
            "dark-mode" => Some(self.dark_mode),
            "notifications" => Some(self.email_notifications),
            "auto-logout" => Some(self.auto_logout),
            _ => None,
        }
    }

    /// Неизвестный id ничего не меняет и возвращает false
    pub fn set_toggle(&mut self, id: &str, value: bool) -> bool {
        let slot = match id {
            "dark-mode" => &mut self.dark_mode,
            "notifications" => &mut self.email_notifications,
            "auto-logout" => &mut self.auto_logout,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Снимок для лога при сохранении
    pub fn log_save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::info!(target: "settings", "save requested: {}", json),
            Err(e) => log::warn!(target: "settings", "failed to serialize settings: {}", e),
        }
    }
}

/// Описание переключателя в блоке System Preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

pub const PREFERENCE_TOGGLES: [ToggleSpec; 3] = [
    ToggleSpec {
        id: "dark-mode",
        label: "Dark Mode",
        hint: "Use dark theme throughout the application",
    },
    ToggleSpec {
        id: "notifications",
        label: "Email Notifications",
        hint: "Receive email notifications for important events",
    },
    ToggleSpec {
        id: "auto-logout",
        label: "Auto Logout",
        hint: "Automatically log out after period of inactivity",
    },
];

pub fn option_label(options: &[SelectOption], value: &str) -> Option<&'static str> {
    options.iter().find(|(v, _)| *v == value).map(|(_, l)| *l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = GeneralSettings::default();
        assert!(s.dark_mode);
        assert!(s.email_notifications);
        assert!(!s.auto_logout);
        assert_eq!(option_label(&TIMEZONE_OPTIONS, &s.timezone), Some("America/New York"));
        assert_eq!(option_label(&CURRENCY_OPTIONS, "gbp"), Some("GBP (£)"));
        assert_eq!(option_label(&LANGUAGE_OPTIONS, "ru"), None);
    }

    #[test]
    fn test_tab_keys() {
        for tab in SettingsTab::ALL {
            assert_eq!(SettingsTab::from_key(tab.key()), tab);
        }
        assert_eq!(SettingsTab::from_key("nope"), SettingsTab::General);
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_value(GeneralSettings::default()).unwrap();
        assert_eq!(json["businessName"], "Inventory Management System");
        assert_eq!(json["autoLogout"], false);
    }

    #[test]
    fn test_every_preference_toggle_is_bound() {
        let mut s = GeneralSettings::default();
        for spec in PREFERENCE_TOGGLES {
            let before = s.toggle(spec.id).unwrap();
            assert!(s.set_toggle(spec.id, !before));
            assert_eq!(s.toggle(spec.id), Some(!before));
        }
        assert!(!s.dark_mode);
        assert!(s.auto_logout);

        assert_eq!(s.toggle("sound"), None);
        let snapshot = s.clone();
        assert!(!s.set_toggle("sound", true));
        assert_eq!(s, snapshot);
    }
}
