//! Theme Tests
//!
//! Theme store cycling and resolution, palettes and readable contrast.

use legaltui::theme::hex;
use legaltui::ui::theme::{color_to_rgb, meets_wcag_aa};
use legaltui::{Palette, SystemScheme, ThemeMode, ThemeStore};
use proptest::prelude::*;

fn arb_mode() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![
        Just(ThemeMode::Light),
        Just(ThemeMode::Dark),
        Just(ThemeMode::System),
    ]
}

fn arb_scheme() -> impl Strategy<Value = SystemScheme> {
    prop_oneof![
        Just(SystemScheme::Light),
        Just(SystemScheme::Dark),
        Just(SystemScheme::Unknown),
    ]
}

// =============================================================================
// Store Resolution
// =============================================================================

#[test]
fn test_default_store_follows_system() {
    let store = ThemeStore::default();
    assert_eq!(store.mode(), ThemeMode::System);
    assert!(!store.is_dark());
}

#[test]
fn test_system_mode_resolves_against_host() {
    let mut store = ThemeStore::new(ThemeMode::System, SystemScheme::Dark);
    assert!(store.is_dark());
    assert_eq!(store.colors(), &Palette::DARK);

    store.set_system_scheme(SystemScheme::Light);
    assert!(!store.is_dark());
    assert_eq!(store.colors(), &Palette::LIGHT);

    store.set_system_scheme(SystemScheme::Unknown);
    assert!(!store.is_dark());
}

#[test]
fn test_explicit_mode_ignores_host() {
    let store = ThemeStore::new(ThemeMode::Light, SystemScheme::Dark);
    assert!(!store.is_dark());
    let store = ThemeStore::new(ThemeMode::Dark, SystemScheme::Light);
    assert!(store.is_dark());
}

#[test]
fn test_colorfgbg_parsing() {
    assert_eq!(SystemScheme::from_colorfgbg("15;0"), SystemScheme::Dark);
    assert_eq!(SystemScheme::from_colorfgbg("0;15"), SystemScheme::Light);
    assert_eq!(SystemScheme::from_colorfgbg("0;default;8"), SystemScheme::Dark);
    assert_eq!(SystemScheme::from_colorfgbg("garbage"), SystemScheme::Unknown);
    assert_eq!(SystemScheme::from_colorfgbg(""), SystemScheme::Unknown);
}

#[test]
fn test_mode_parsing() {
    assert_eq!(" Dark ".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
    let err = "sepia".parse::<ThemeMode>().unwrap_err();
    assert!(err.to_string().contains("sepia"));
}

// =============================================================================
// Palettes
// =============================================================================

#[test]
fn test_palette_hex_values() {
    assert_eq!(hex(Palette::LIGHT.primary).as_deref(), Some("#0F3460"));
    assert_eq!(hex(Palette::DARK.background).as_deref(), Some("#121212"));
    assert_eq!(hex(ratatui::style::Color::Reset), None);
}

#[test]
fn test_palette_text_is_readable() {
    for palette in [Palette::LIGHT, Palette::DARK] {
        let text = color_to_rgb(palette.text).unwrap();
        let background = color_to_rgb(palette.background).unwrap();
        let secondary = color_to_rgb(palette.text_secondary).unwrap();
        let card = color_to_rgb(palette.card).unwrap();
        assert!(meets_wcag_aa(text, background));
        assert!(meets_wcag_aa(text, card));
        assert!(meets_wcag_aa(secondary, card));
    }
}

#[test]
fn test_palette_entry_names_are_unique() {
    let entries = Palette::LIGHT.entries();
    let mut names: Vec<_> = entries.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), entries.len());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn cycle_has_period_three(mode in arb_mode(), scheme in arb_scheme()) {
        let mut store = ThemeStore::new(mode, scheme);
        store.cycle();
        store.cycle();
        prop_assert_eq!(store.cycle(), mode);
        prop_assert_eq!(store.mode(), mode);
    }

    #[test]
    fn cycle_visits_every_mode(mode in arb_mode()) {
        let mut store = ThemeStore::new(mode, SystemScheme::Unknown);
        let mut seen = vec![store.mode()];
        seen.push(store.cycle());
        seen.push(store.cycle());
        seen.sort_by_key(|m| m.as_str());
        seen.dedup();
        prop_assert_eq!(seen.len(), 3);
    }

    #[test]
    fn colors_match_dark_flag(mode in arb_mode(), scheme in arb_scheme()) {
        let store = ThemeStore::new(mode, scheme);
        let expected = if store.is_dark() { &Palette::DARK } else { &Palette::LIGHT };
        prop_assert_eq!(store.colors(), expected);
    }
}
