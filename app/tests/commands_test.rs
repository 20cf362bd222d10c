use careerwatch_app::{commands, AppState};
use careerwatch_core::{AppConfig, Target};
use tempfile::TempDir;

fn state_in(tmp: &TempDir) -> AppState {
    let mut config = AppConfig::default();
    config.storage.url_file = tmp.path().join("career_urls.txt");
    config.storage.report_path = tmp.path().join("report.html");
    AppState::new(config).expect("valid config")
}

#[test]
fn test_add_list_remove() {
    let tmp = TempDir::new().expect("create temp dir");
    let state = state_in(&tmp);

    commands::targets::add(&state, " Acme ", "https://acme.example/careers").unwrap();
    commands::targets::add(&state, "Globex", "https://globex.example/jobs").unwrap();
    commands::targets::list(&state).unwrap();

    // Unknown key is reported, not fatal.
    commands::targets::remove(&state, "Initech").unwrap();
    commands::targets::remove(&state, "acme").unwrap();

    assert_eq!(
        state.store.load().unwrap(),
        vec![Target::new("Globex", "https://globex.example/jobs")]
    );
}

#[test]
fn test_add_invalid_url_is_error() {
    let tmp = TempDir::new().expect("create temp dir");
    let state = state_in(&tmp);
    assert!(commands::targets::add(&state, "Acme", "not a url").is_err());
    assert!(state.store.load().unwrap().is_empty());
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = AppConfig::default();
    config.scanning.concurrent_scans = 0;
    assert!(AppState::new(config).is_err());
}

#[tokio::test]
async fn test_search_with_no_urls_writes_nothing() {
    let tmp = TempDir::new().expect("create temp dir");
    let state = state_in(&tmp);

    let summary = commands::search::run(&state, "engineer").await.unwrap();
    assert!(summary.is_none());
    assert!(!state.config.storage.report_path.exists());
}

#[tokio::test]
async fn test_search_rejects_blank_keyword() {
    let tmp = TempDir::new().expect("create temp dir");
    let state = state_in(&tmp);
    commands::targets::add(&state, "Acme", "https://acme.example/careers").unwrap();

    assert!(commands::search::run(&state, "   ").await.is_err());
}
