//! Icon set
//!
//! Closed set of icons used by the screens, each mapped to a terminal glyph.
//! String keys are parsed once; an unknown key is an error, never a fallback.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown icon key: '{0}'")]
pub struct IconError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Users,
    ClipboardList,
    FileClock,
    Building,
    Clock,
    AlertCircle,
    Check,
    Search,
    Filter,
    Phone,
    Mail,
    Briefcase,
    User,
    Calendar,
    MapPin,
    Globe,
    ChevronDown,
    ChevronRight,
    Menu,
    Sun,
    Moon,
    Laptop,
}

impl Icon {
    pub const ALL: [Icon; 22] = [
        Icon::Users,
        Icon::ClipboardList,
        Icon::FileClock,
        Icon::Building,
        Icon::Clock,
        Icon::AlertCircle,
        Icon::Check,
        Icon::Search,
        Icon::Filter,
        Icon::Phone,
        Icon::Mail,
        Icon::Briefcase,
        Icon::User,
        Icon::Calendar,
        Icon::MapPin,
        Icon::Globe,
        Icon::ChevronDown,
        Icon::ChevronRight,
        Icon::Menu,
        Icon::Sun,
        Icon::Moon,
        Icon::Laptop,
    ];

    /// Kebab-case key, as used in config and empty-state descriptors
    pub fn key(&self) -> &'static str {
        match self {
            Icon::Users => "users",
            Icon::ClipboardList => "clipboard-list",
            Icon::FileClock => "file-clock",
            Icon::Building => "building-2",
            Icon::Clock => "clock",
            Icon::AlertCircle => "alert-circle",
            Icon::Check => "check",
            Icon::Search => "search",
            Icon::Filter => "filter",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::Briefcase => "briefcase",
            Icon::User => "user",
            Icon::Calendar => "calendar",
            Icon::MapPin => "map-pin",
            Icon::Globe => "globe",
            Icon::ChevronDown => "chevron-down",
            Icon::ChevronRight => "chevron-right",
            Icon::Menu => "menu",
            Icon::Sun => "sun",
            Icon::Moon => "moon",
            Icon::Laptop => "laptop",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::ClipboardList => "📋",
            Icon::FileClock => "🗂",
            Icon::Building => "🏛",
            Icon::Clock => "⏱",
            Icon::AlertCircle => "⚠",
            Icon::Check => "✔",
            Icon::Search => "⌕",
            Icon::Filter => "⚲",
            Icon::Phone => "☎",
            Icon::Mail => "✉",
            Icon::Briefcase => "💼",
            Icon::User => "👤",
            Icon::Calendar => "📅",
            Icon::MapPin => "📍",
            Icon::Globe => "🌐",
            Icon::ChevronDown => "▾",
            Icon::ChevronRight => "▸",
            Icon::Menu => "☰",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Laptop => "💻",
        }
    }
}

impl FromStr for Icon {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.key() == s)
            .ok_or_else(|| IconError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_round_trip() {
        for icon in Icon::ALL {
            assert_eq!(icon.key().parse::<Icon>(), Ok(icon));
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert_eq!("file-question".parse::<Icon>(), Err(IconError("file-question".into())));
        assert!("Users".parse::<Icon>().is_err());
    }

    #[test]
    fn test_keys_unique() {
        let keys: HashSet<_> = Icon::ALL.iter().map(|i| i.key()).collect();
        assert_eq!(keys.len(), Icon::ALL.len());
    }
}
