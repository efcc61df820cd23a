use chrono::{NaiveDate, NaiveDateTime};
use ice_scraper::{
    EventKind,
    calendar::write_calendar,
    config::Config,
    error::AppError,
    schedule::{DocumentSource, fetch_events},
    testing_utils::{GamePageBuilder, PracticePageBuilder, test_config},
};
use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn practice_body() -> String {
    PracticePageBuilder::new()
        .empty_cell()
        .practice("Sharks vs Wolves", "Mon Mar 10, 2025", "6:00 PM - 7:00 PM", "North Pole")
        .practice("Hawks vs Wolves", "Tue Mar 11, 2025", "6:00 PM - 7:00 PM", "North Pole")
        .empty_cell()
        .build()
}

fn game_body() -> String {
    GamePageBuilder::new()
        .game("Wed Apr 02, 2025", "7:30 PM - 8:30 PM", "Sharks", "Hawks", "South Pole")
        .game("Thu Apr 03, 2025", "9:00 PM - 10:00 PM", "Wolves", "Hawks", "South Pole")
        .build()
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

fn config_for(server: &MockServer, team: &str) -> Config {
    let mut config = test_config(team);
    config.practice.url = format!("{}/practice", server.uri());
    config.games.url = format!("{}/games", server.uri());
    config.http_timeout_seconds = 5;
    config
}

/// Both schedule scenarios through HTTP: one practice and one game for the team
#[tokio::test]
async fn test_full_run_extracts_practice_and_game() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 200, practice_body()).await;
    mount_page(&server, "/games", 200, game_body()).await;

    let config = config_for(&server, "sharks");
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    assert_eq!(events.len(), 2);

    let practice = &events[0];
    assert_eq!(practice.kind, EventKind::Practice);
    assert_eq!(practice.title, "Sharks Vs Wolves (prac)");
    assert_eq!(practice.start, at(2025, 3, 10, 18, 0));
    assert_eq!(practice.location_detail, "North Pole");
    assert_eq!(practice.location_address, config.location);

    let game = &events[1];
    assert_eq!(game.kind, EventKind::Game);
    assert_eq!(game.title, "Sharks Vs Hawks (game)");
    assert_eq!(game.start, at(2025, 4, 2, 19, 30));
    assert_eq!(game.end(), at(2025, 4, 2, 20, 30));
    assert_eq!(game.location_detail, "South Pole");
}

/// Each kind is fetched from its own configured page
#[tokio::test]
async fn test_each_kind_uses_its_own_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/practice"))
        .respond_with(ResponseTemplate::new(200).set_body_string(practice_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_string(game_body()))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, "Hawks");
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Hawks Vs Wolves (prac)",
            "Sharks Vs Hawks (game)",
            "Wolves Vs Hawks (game)"
        ]
    );
}

/// A failing page only costs its own schedule kind
#[tokio::test]
async fn test_missing_practice_page_keeps_games() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 404, String::new()).await;
    mount_page(&server, "/games", 200, game_body()).await;

    let config = config_for(&server, "Sharks");
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, EventKind::Game);
}

#[tokio::test]
async fn test_both_pages_failing_is_not_an_error() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 403, String::new()).await;
    mount_page(&server, "/games", 200, "   ".to_string()).await;

    let config = config_for(&server, "Sharks");
    let source = DocumentSource::new(&config).unwrap();

    assert!(fetch_events(&source, &config).await.unwrap().is_empty());
    assert!(matches!(
        source.fetch(&config.games.url).await,
        Err(AppError::SourceNoData { .. })
    ));
    assert!(matches!(
        source.fetch(&config.practice.url).await,
        Err(AppError::SourceClientError { status: 403, .. })
    ));
}

/// A transient 503 is retried and the page still used
#[tokio::test]
async fn test_transient_failure_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_page(&server, "/games", 200, game_body()).await;
    mount_page(&server, "/practice", 200, practice_body()).await;

    let config = config_for(&server, "Sharks");
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[1].title, "Sharks Vs Hawks (game)");
}

/// Games after the first blank row are never read
#[tokio::test]
async fn test_game_table_stops_at_blank_row() {
    let server = MockServer::start().await;
    let body = GamePageBuilder::new()
        .game("Wed Apr 02, 2025", "7:30 PM - 8:30 PM", "Sharks", "Hawks", "South Pole")
        .blank_game()
        .game("Fri Apr 04, 2025", "7:30 PM - 8:30 PM", "Sharks", "Wolves", "South Pole")
        .build();
    mount_page(&server, "/games", 200, body).await;
    mount_page(&server, "/practice", 200, PracticePageBuilder::new().build()).await;

    let config = config_for(&server, "Sharks");
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, at(2025, 4, 2, 19, 30));
}

#[tokio::test]
async fn test_extraction_is_idempotent() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 200, practice_body()).await;
    mount_page(&server, "/games", 200, game_body()).await;

    let config = config_for(&server, "wolves");
    let source = DocumentSource::new(&config).unwrap();

    let first = fetch_events(&source, &config).await.unwrap();
    let second = fetch_events(&source, &config).await.unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

/// Config file on disk, then fetch, then calendar file
#[tokio::test]
async fn test_config_file_to_calendar_file() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 200, practice_body()).await;
    mount_page(&server, "/games", 200, game_body()).await;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let ics_path = dir.path().join("sharks.ics");

    let mut config = config_for(&server, "Sharks");
    config.ics_file = ics_path.to_string_lossy().to_string();
    config
        .save_to_path(config_path.to_str().unwrap())
        .await
        .unwrap();

    let loaded = Config::load(Some(config_path.to_str().unwrap()))
        .await
        .unwrap();
    let source = DocumentSource::new(&loaded).unwrap();
    let events = fetch_events(&source, &loaded).await.unwrap();
    write_calendar(&loaded.ics_file, &events).await.unwrap();

    let ics = tokio::fs::read_to_string(&ics_path).await.unwrap();
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    assert!(ics.contains("SUMMARY:Sharks Vs Wolves (prac)"));
    assert!(ics.contains("SUMMARY:Sharks Vs Hawks (game)"));
    assert!(ics.contains("DTSTART:20250402T193000"));
    assert!(ics.contains("DTEND:20250402T203000"));
    assert!(ics.contains("DESCRIPTION:South Pole"));
}

/// The older JSON layout with `xpath` keys still loads and runs
#[tokio::test]
async fn test_legacy_json_config_runs() {
    let server = MockServer::start().await;
    mount_page(&server, "/practice", 200, practice_body()).await;
    mount_page(&server, "/games", 200, game_body()).await;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("IceScraper.json");
    let json = serde_json::json!({
        "team": "Sharks",
        "location": "2305 N Arena Way",
        "ics_file": dir.path().join("out.ics").to_string_lossy(),
        "proxies": { "enable": false },
        "practice": {
            "url": format!("{}/practice", server.uri()),
            "xpath": ice_scraper::testing_utils::PRACTICE_QUERY
        },
        "games": {
            "url": format!("{}/games", server.uri()),
            "xpath": ice_scraper::testing_utils::GAME_QUERY
        }
    });
    tokio::fs::write(&config_path, json.to_string())
        .await
        .unwrap();

    let config = Config::load(Some(config_path.to_str().unwrap()))
        .await
        .unwrap();
    let source = DocumentSource::new(&config).unwrap();
    let events = fetch_events(&source, &config).await.unwrap();

    assert_eq!(events.len(), 2);
}
