use super::*;
use crate::domain::models::MedsetError;
use crate::test_utils::{MockKeyboard, SharedBuffer};

fn console() -> (Console, SharedBuffer) {
    let buffer = SharedBuffer::default();
    return (Console::new(Box::new(buffer.clone())), buffer);
}

#[test]
fn it_decides_on_recognized_keys() {
    assert_eq!(decide(Key::Enter), Some(NavigationResult::Exit));
    assert_eq!(decide(Key::Escape), Some(NavigationResult::Back));
    assert_eq!(decide(Key::Interrupt), Some(NavigationResult::Terminate));
    assert_eq!(decide(Key::Char('q')), Some(NavigationResult::Terminate));
}

#[test]
fn it_ignores_other_keys() {
    assert_eq!(decide(Key::Char('a')), None);
    assert_eq!(decide(Key::Char('Q')), None);
    assert_eq!(decide(Key::Char(' ')), None);
    assert_eq!(decide(Key::Other), None);
}

#[tokio::test]
async fn it_resolves_exit_on_enter_and_restores_line_mode_once() {
    let keyboard = MockKeyboard::new(vec![Key::Char('x'), Key::Other, Key::Enter]);
    let stats = keyboard.stats();
    let (mut console, buffer) = console();

    let result = KeystrokePrompt::new(Box::new(keyboard))
        .wait_for_decision(&mut console)
        .await
        .unwrap();

    assert_eq!(result, NavigationResult::Exit);
    let stats = stats.lock().unwrap();
    assert_eq!(stats.enabled, 1);
    assert_eq!(stats.disabled, 1);
    assert_eq!(stats.reads, 3);
    assert!(!stats.raw);
    assert!(buffer
        .contents()
        .contains("Press Enter to exit or Esc to return to menu..."));
}

#[tokio::test]
async fn it_resolves_back_on_escape() {
    let keyboard = MockKeyboard::new(vec![Key::Char('a'), Key::Escape]);
    let stats = keyboard.stats();
    let (mut console, _) = console();

    let result = KeystrokePrompt::new(Box::new(keyboard))
        .wait_for_decision(&mut console)
        .await
        .unwrap();

    assert_eq!(result, NavigationResult::Back);
    assert_eq!(stats.lock().unwrap().disabled, 1);
    assert!(!stats.lock().unwrap().raw);
}

#[tokio::test]
async fn it_terminates_on_q_or_ctrl_c_after_cleanup() {
    for first in [Key::Char('q'), Key::Interrupt] {
        let keyboard = MockKeyboard::new(vec![first, Key::Enter]);
        let stats = keyboard.stats();
        let (mut console, _) = console();

        let result = KeystrokePrompt::new(Box::new(keyboard))
            .wait_for_decision(&mut console)
            .await
            .unwrap();

        assert_eq!(result, NavigationResult::Terminate);
        let stats = stats.lock().unwrap();
        assert_eq!(stats.reads, 1);
        assert_eq!(stats.disabled, 1);
        assert!(!stats.raw);
    }
}

#[tokio::test]
async fn it_restores_line_mode_when_input_closes() {
    let keyboard = MockKeyboard::new(vec![Key::Char('z')]);
    let stats = keyboard.stats();
    let (mut console, _) = console();

    let err = KeystrokePrompt::new(Box::new(keyboard))
        .wait_for_decision(&mut console)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MedsetError>(),
        Some(MedsetError::InputClosed)
    ));
    assert_eq!(stats.lock().unwrap().disabled, 1);
    assert!(!stats.lock().unwrap().raw);
}

#[tokio::test]
async fn it_propagates_raw_mode_failures_without_reading() {
    let keyboard = MockKeyboard::non_interactive();
    let stats = keyboard.stats();
    let (mut console, _) = console();

    let err = KeystrokePrompt::new(Box::new(keyboard))
        .wait_for_decision(&mut console)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MedsetError>(),
        Some(MedsetError::NotInteractive(_))
    ));
    let stats = stats.lock().unwrap();
    assert_eq!(stats.reads, 0);
    assert_eq!(stats.disabled, 0);
}
