use super::*;
use crate::app::action::Action;
use crate::app::command::Command;
use crate::app::state::AppState;
use crate::domain::models::{GitRepository, ProjectId, ServiceSource, TeamId};
use crate::domain::platform::MockPlatformClient;
use crate::palette::{DynamicSource, PageId};
use crossterm::event::{Event, KeyCode, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_handle_command_success() {
    let mut mock = MockPlatformClient::new();
    mock.expect_list_repositories().returning(|_| {
        Ok(vec![GitRepository {
            full_name: "acme/api".to_string(),
            clone_url: "https://github.com/acme/api.git".to_string(),
        }])
    });

    let client = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(
        Command::FetchPageItems {
            page: PageId("repos_project".to_string()),
            source: DynamicSource::Repositories,
            team: TeamId("t1".to_string()),
        },
        client,
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::PageItemsLoaded(page, Ok(items)) = action {
        assert_eq!(page.0, "repos_project");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "acme/api");
    } else {
        panic!("Expected Action::PageItemsLoaded(Ok), got {action:?}");
    }
}

#[tokio::test]
async fn test_handle_command_error_propagation() {
    let mut mock = MockPlatformClient::new();
    mock.expect_list_repositories()
        .returning(|_| Err(anyhow::anyhow!("GitHub unreachable")));

    let client = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(1);

    handle_command(
        Command::FetchPageItems {
            page: PageId("repos_project".to_string()),
            source: DynamicSource::Repositories,
            team: TeamId("t1".to_string()),
        },
        client,
        tx,
    )
    .unwrap();

    let action = rx.recv().await.unwrap();
    if let Action::PageItemsLoaded(_, Err(message)) = action {
        assert!(message.contains("GitHub unreachable"));
    } else {
        panic!("Expected Action::PageItemsLoaded(Err), got {action:?}");
    }
}

#[tokio::test]
async fn test_full_command_error_to_state() {
    let mut mock = MockPlatformClient::new();
    mock.expect_create_service()
        .returning(|_, _, _, _| Err(anyhow::anyhow!("quota exceeded")));

    let client = Arc::new(mock);
    let (tx, mut rx) = mpsc::channel(2);
    let mut state = AppState::default();

    handle_command(
        Command::CreateService {
            team: TeamId("t1".to_string()),
            project: ProjectId("p1".to_string()),
            environment: None,
            source: ServiceSource::DockerImage {
                image: "nginx:latest".to_string(),
            },
            item: (PageId("root_project".to_string()), "docker".to_string()),
        },
        client,
        tx,
    )
    .unwrap();

    // 1. First action: OperationStarted
    let action1 = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action1);
    assert!(state
        .status_message
        .as_deref()
        .is_some_and(|m| m.contains("Deploying nginx:latest")));

    // 2. Second action: OperationCompleted(Err)
    let action2 = rx.recv().await.unwrap();
    crate::app::reducer::update(&mut state, action2);

    let error = state.last_error.unwrap();
    assert!(error.message.contains("quota exceeded"));
    assert!(state.palette.pending.is_empty());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockPlatformClient::new();
    mock.expect_list_repositories().returning(|_| {
        Ok(vec![GitRepository {
            full_name: "acme/api".to_string(),
            clone_url: "https://github.com/acme/api.git".to_string(),
        }])
    });
    mock.expect_list_templates().returning(|| Ok(vec![]));
    mock.expect_create_project()
        .returning(|_| Ok(ProjectId("p-new".to_string())));
    mock.expect_create_environment()
        .returning(|_, _| Ok(crate::domain::models::EnvironmentId("e-new".to_string())));
    mock.expect_create_service()
        .returning(|_, _, _, _| Ok("svc-new".to_string()));

    let client = Arc::new(mock);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Unwind whatever mode fuzzing left us in, then quit
        for _ in 0..8 {
            let _ = event_tx
                .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                    KeyCode::Esc,
                    KeyModifiers::NONE,
                ))))
                .await;
        }
        let _ = event_tx
            .send(Ok(Event::Key(crossterm::event::KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
            ))))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, client, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    use crossterm::event::KeyEvent;
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
