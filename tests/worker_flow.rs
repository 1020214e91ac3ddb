//! End-to-end flows through the background worker.
//!
//! Commands go in over the async channel, outcomes come back as events
//! on the sync channel, exactly as the view loop wires them.

mod common;

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use blogdeck::api::BlogDraft;
use blogdeck::session::SessionFile;
use blogdeck::ui::events::AppEvent;
use blogdeck::worker::{Command, Worker};
use common::mock_api::MockApi;
use tempfile::TempDir;

struct Rig {
    mock: MockApi,
    commands: tokio::sync::mpsc::Sender<Command>,
    events: mpsc::Receiver<AppEvent>,
    session_path: PathBuf,
    _dir: TempDir,
}

async fn start_rig() -> Rig {
    let mock = MockApi::start().await;
    mock.add_user("ada", "Ada Lovelace", "analytical").await;
    mock.seed_blog(
        "React patterns",
        "Michael Chan",
        "https://reactpatterns.com/",
        7,
        "ada",
    )
    .await;
    mock.seed_blog(
        "Go To Statement Considered Harmful",
        "Edsger W. Dijkstra",
        "https://homepages.cwi.nl/~storm/teaching/reader/Dijkstra68.pdf",
        5,
        "ada",
    )
    .await;

    let (api, cache) = common::cache_for(&mock);
    let dir = TempDir::new().unwrap();
    let session_path = dir.path().join("session.json");
    let session_file = SessionFile::at(&session_path);

    let (event_tx, event_rx) = mpsc::channel();
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(8);
    let worker = Worker::new(api, cache, session_file, event_tx);
    tokio::spawn(worker.run(command_rx));

    Rig {
        mock,
        commands: command_tx,
        events: event_rx,
        session_path,
        _dir: dir,
    }
}

/// Wait for the next worker event without blocking the runtime.
async fn next_event(events: &mpsc::Receiver<AppEvent>) -> AppEvent {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    loop {
        match events.try_recv() {
            Ok(event) => return event,
            Err(mpsc::TryRecvError::Empty) => {
                if tokio::time::Instant::now() >= deadline {
                    panic!("no worker event arrived within 3s");
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            Err(mpsc::TryRecvError::Disconnected) => panic!("worker hung up"),
        }
    }
}

/// Assert that nothing more arrives for a little while.
async fn expect_quiet(events: &mpsc::Receiver<AppEvent>) {
    tokio::time::sleep(Duration::from_millis(150)).await;
    if let Ok(event) = events.try_recv() {
        panic!("unexpected event: {}", common::event_name(&event));
    }
}

async fn log_in(rig: &Rig) {
    rig.commands
        .send(Command::LogIn {
            username: "ada".to_string(),
            password: "analytical".to_string(),
        })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::LoginDone(Ok(_)) => {}
        other => panic!("expected LoginDone, got {}", common::event_name(&other)),
    }
    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(_)) => {}
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }
}

#[tokio::test]
async fn test_login_persists_session_and_loads_blogs() {
    let rig = start_rig().await;

    rig.commands
        .send(Command::LogIn {
            username: "ada".to_string(),
            password: "analytical".to_string(),
        })
        .await
        .unwrap();

    let session = match next_event(&rig.events).await {
        AppEvent::LoginDone(Ok(session)) => session,
        other => panic!("expected LoginDone, got {}", common::event_name(&other)),
    };
    assert_eq!(session.username, "ada");

    // The session hit disk before the event was emitted.
    let stored = SessionFile::at(&rig.session_path).load();
    assert_eq!(stored, Some(session));

    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(blogs)) => assert_eq!(blogs.len(), 2),
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }
}

#[tokio::test]
async fn test_rejected_login_reports_error_and_stores_nothing() {
    let rig = start_rig().await;

    rig.commands
        .send(Command::LogIn {
            username: "ada".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::LoginDone(Err(err)) => assert!(err.is_unauthorized()),
        other => panic!("expected LoginDone, got {}", common::event_name(&other)),
    }
    expect_quiet(&rig.events).await;
    assert!(!rig.session_path.exists());
}

#[tokio::test]
async fn test_create_refetches_the_collection() {
    let rig = start_rig().await;
    log_in(&rig).await;

    let draft = BlogDraft {
        title: "First class tests".to_string(),
        author: "Robert C. Martin".to_string(),
        url: "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.html".to_string(),
        likes: 0,
    };
    rig.commands
        .send(Command::CreateBlog { draft })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::BlogCreated(Ok(blog)) => assert_eq!(blog.title, "First class tests"),
        other => panic!("expected BlogCreated, got {}", common::event_name(&other)),
    }
    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(blogs)) => {
            assert_eq!(blogs.len(), 3);
            assert!(blogs.iter().any(|blog| blog.title == "First class tests"));
        }
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }

    // One fetch at login, one refetch after the create went stale.
    assert_eq!(rig.mock.request_count("GET", "/api/blogs").await, 2);
}

#[tokio::test]
async fn test_like_bumps_the_displayed_count_by_one() {
    let rig = start_rig().await;
    log_in(&rig).await;

    let target = rig
        .mock
        .blogs()
        .await
        .into_iter()
        .find(|blog| blog.likes == 5)
        .unwrap();

    rig.commands
        .send(Command::LikeBlog {
            id: target.id.clone(),
            likes: target.likes,
        })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::BlogUpdated(Ok(blog)) => assert_eq!(blog.likes, 6),
        other => panic!("expected BlogUpdated, got {}", common::event_name(&other)),
    }
    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(blogs)) => {
            let patched = blogs.iter().find(|blog| blog.id == target.id).unwrap();
            assert_eq!(patched.likes, 6);
        }
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }

    // The post-update reload was served from the patched cache.
    assert_eq!(rig.mock.request_count("GET", "/api/blogs").await, 1);
    let server_side = rig.mock.blogs().await;
    assert_eq!(
        server_side.iter().find(|b| b.id == target.id).unwrap().likes,
        6
    );
}

#[tokio::test]
async fn test_delete_drops_the_entry_and_reports_its_title() {
    let rig = start_rig().await;
    log_in(&rig).await;

    let target = rig.mock.blogs().await[0].clone();
    rig.commands
        .send(Command::DeleteBlog {
            id: target.id.clone(),
            title: target.title.clone(),
        })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::BlogDeleted { title, outcome } => {
            assert_eq!(title, target.title);
            assert!(outcome.is_ok());
        }
        other => panic!("expected BlogDeleted, got {}", common::event_name(&other)),
    }
    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(blogs)) => {
            assert_eq!(blogs.len(), 1);
            assert!(blogs.iter().all(|blog| blog.id != target.id));
        }
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }
    assert_eq!(rig.mock.blogs().await.len(), 1);
}

#[tokio::test]
async fn test_failed_mutation_skips_the_reload() {
    let rig = start_rig().await;
    log_in(&rig).await;

    let target = rig.mock.blogs().await[0].clone();
    rig.mock.fail_requests(500, "database unavailable").await;

    rig.commands
        .send(Command::LikeBlog {
            id: target.id.clone(),
            likes: target.likes,
        })
        .await
        .unwrap();

    match next_event(&rig.events).await {
        AppEvent::BlogUpdated(Err(_)) => {}
        other => panic!("expected BlogUpdated, got {}", common::event_name(&other)),
    }
    expect_quiet(&rig.events).await;

    // Server state never moved.
    rig.mock.restore().await;
    let server_side = rig.mock.blogs().await;
    assert_eq!(
        server_side.iter().find(|b| b.id == target.id).unwrap().likes,
        target.likes
    );
}

#[tokio::test]
async fn test_logout_clears_token_and_stored_session() {
    let rig = start_rig().await;
    log_in(&rig).await;
    assert!(rig.session_path.exists());

    rig.commands.send(Command::LogOut).await.unwrap();

    // Logout emits no event; wait for the file to disappear.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(3);
    while rig.session_path.exists() {
        if tokio::time::Instant::now() >= deadline {
            panic!("session file was not cleared");
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    // The next load goes back to the server, without a bearer token.
    rig.commands.send(Command::LoadBlogs).await.unwrap();
    match next_event(&rig.events).await {
        AppEvent::BlogsLoaded(Ok(blogs)) => assert_eq!(blogs.len(), 2),
        other => panic!("expected BlogsLoaded, got {}", common::event_name(&other)),
    }
    let last_list = rig
        .mock
        .captured_requests()
        .await
        .into_iter()
        .filter(|req| req.method == "GET" && req.path == "/api/blogs")
        .next_back()
        .unwrap();
    assert_eq!(last_list.bearer, None);
}

#[tokio::test]
async fn test_load_users_reports_summaries() {
    let rig = start_rig().await;
    rig.mock.add_user("grace", "Grace Hopper", "cobol").await;

    rig.commands.send(Command::LoadUsers).await.unwrap();

    match next_event(&rig.events).await {
        AppEvent::UsersLoaded(Ok(users)) => {
            assert_eq!(users.len(), 2);
            let ada = users.iter().find(|user| user.username == "ada").unwrap();
            assert_eq!(ada.blog_count(), 2);
            let grace = users.iter().find(|user| user.username == "grace").unwrap();
            assert_eq!(grace.blog_count(), 0);
        }
        other => panic!("expected UsersLoaded, got {}", common::event_name(&other)),
    }
}
