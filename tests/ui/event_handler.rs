use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use yourtasks::ui::core::{EventHandler, EventType};

#[test]
fn test_default_tick_rate() {
    assert_eq!(EventHandler::new().tick_rate(), Duration::from_millis(100));
    assert_eq!(
        EventHandler::with_tick_rate(Duration::from_millis(25)).tick_rate(),
        Duration::from_millis(25)
    );
}

#[test]
fn test_only_key_presses_are_forwarded() {
    let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);

    assert!(matches!(
        EventHandler::classify(Event::Key(press)),
        EventType::Key(KeyEvent {
            code: KeyCode::Char('a'),
            ..
        })
    ));
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));
}

#[test]
fn test_resize_and_other_events() {
    assert!(matches!(
        EventHandler::classify(Event::Resize(120, 40)),
        EventType::Resize(120, 40)
    ));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}
