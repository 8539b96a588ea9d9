use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use rstest::*;

use vkeyboard::{
    core::{
        msg::Msg,
        state::ui::KeyHitMap,
        translator::{translate, TranslationContext},
    },
    domain::KeyId,
    infrastructure::{config::Config, tui::Event},
};

fn translate_key(code: KeyCode, modifiers: KeyModifiers, reports_key_release: bool) -> Vec<Msg> {
    let config = Config::defaults().expect("default config");
    let hit_map = KeyHitMap::default();
    let ctx = TranslationContext {
        keybindings: &config.keybindings,
        hit_map: &hit_map,
        reports_key_release,
    };
    translate(&Event::Key(KeyEvent::new(code, modifiers)), &ctx)
}

#[rstest]
#[case(KeyCode::Esc, KeyModifiers::NONE, Msg::Quit)]
#[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Msg::Quit)]
#[case(KeyCode::Char('q'), KeyModifiers::CONTROL, Msg::Quit)]
#[case(KeyCode::Char('l'), KeyModifiers::CONTROL, Msg::ToggleLanguage)]
#[case(KeyCode::F(2), KeyModifiers::NONE, Msg::ToggleCapsLock)]
fn test_default_bindings_win_over_typing(
    #[case] code: KeyCode,
    #[case] modifiers: KeyModifiers,
    #[case] expected: Msg,
) {
    for reports_key_release in [true, false] {
        assert_eq!(
            translate_key(code, modifiers, reports_key_release),
            vec![expected.clone()]
        );
    }
}

#[rstest]
#[case(KeyModifiers::CONTROL)]
#[case(KeyModifiers::ALT)]
fn test_unbound_control_characters_are_not_typed(#[case] modifiers: KeyModifiers) {
    assert_eq!(translate_key(KeyCode::Char('a'), modifiers, true), vec![]);
    assert_eq!(translate_key(KeyCode::Char('a'), modifiers, false), vec![]);
}

#[test]
fn test_backtab_is_shifted_tab() {
    assert_eq!(
        translate_key(KeyCode::BackTab, KeyModifiers::SHIFT, true),
        vec![Msg::KeyDown {
            key: KeyId::Tab,
            shift: true
        }]
    );
}
