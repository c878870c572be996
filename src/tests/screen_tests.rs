use crossterm::event::KeyCode;
use ratatui::{backend::TestBackend, Frame, Terminal};

use crate::interactive::app::{InteractiveApp, Screen};
use crate::interactive::screens::home::{draw_home, HOME_BODY};
use crate::interactive::screens::profile::{draw_profile, PROFILE_BODY};
use crate::interactive::screens::settings::{draw_settings, SETTING_WIDGET_LABEL};
use crate::interactive::ui;

fn render_to_text<F>(draw_fn: F) -> String
where
    F: FnOnce(&mut Frame),
{
    let backend = TestBackend::new(40, 10);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw_fn).unwrap();

    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_screen_body_literals() {
    assert_eq!(HOME_BODY, "");
    assert_eq!(PROFILE_BODY, "profile");
    assert_eq!(SETTING_WIDGET_LABEL, "Setting 2");
}

#[test]
fn test_home_screen_renders_no_text() {
    let text = render_to_text(|f| draw_home(f, f.size()));

    // Border glyphs only, no body text
    assert!(text.chars().all(|c| !c.is_ascii_alphanumeric()));
}

#[test]
fn test_profile_screen_renders_single_label() {
    let text = render_to_text(|f| draw_profile(f, f.size()));

    assert_eq!(text.matches(PROFILE_BODY).count(), 1);
}

#[test]
fn test_settings_screen_renders_widget_label() {
    let text = render_to_text(|f| draw_settings(f, f.size()));

    assert_eq!(text.matches(SETTING_WIDGET_LABEL).count(), 1);
}

#[test]
fn test_full_ui_shows_current_screen() {
    let mut app = InteractiveApp::new();
    app.screen = Screen::Profile;

    let text = render_to_text(|f| ui::draw(f, &app));

    assert!(text.contains("Coach"));
    assert!(text.contains(PROFILE_BODY));
}

#[test]
fn test_navigation_keys() {
    let mut app = InteractiveApp::new();
    assert_eq!(app.screen, Screen::Home);

    app.handle_key(KeyCode::Char('p'));
    assert_eq!(app.screen, Screen::Profile);

    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.screen, Screen::Settings);

    app.handle_key(KeyCode::Char('1'));
    assert_eq!(app.screen, Screen::Home);

    app.handle_key(KeyCode::Tab);
    assert_eq!(app.screen, Screen::Profile);
}

#[test]
fn test_quit_keys() {
    let mut app = InteractiveApp::new();
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit);

    let mut app = InteractiveApp::new();
    app.handle_key(KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn test_screen_cycle_wraps() {
    assert_eq!(Screen::Home.next(), Screen::Profile);
    assert_eq!(Screen::Profile.next(), Screen::Settings);
    assert_eq!(Screen::Settings.next(), Screen::Home);
}
