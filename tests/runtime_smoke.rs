#![cfg(test)]
// End-to-end runtime smoke test (headless)
// - Starts lectern::app::run in the background with a temp HOME and a local catalog.
// - Runs with LECTERN_TEST_HEADLESS=1 to bypass raw TTY setup/restore.
// - Pre-selects a new table T1 and waits for the tick flush to save it.
// - If still running after the wait, aborts the task and asserts the join was a clean cancel.

use std::time::Duration;

#[tokio::test(flavor = "multi_thread")]
async fn runtime_smoke_headless_initializes_and_runs_without_panic() {
    let home = tempfile::tempdir().expect("temp home");
    let catalog = tempfile::tempdir().expect("temp catalog");
    std::fs::write(
        catalog.path().join("schedules-majors.json"),
        r#"[{"id":"CS101","title":"Intro","credits":"3","major":"CS","grade":1,"schedule":"월1~2"}]"#,
    )
    .expect("write majors");
    std::fs::write(catalog.path().join("schedules-liberal-arts.json"), "[]")
        .expect("write liberal arts");

    unsafe {
        std::env::set_var("LECTERN_TEST_HEADLESS", "1");
        std::env::set_var("HOME", home.path());
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    let opts = lectern::app::RunOptions {
        catalog: Some(catalog.path().display().to_string()),
        preselect: Some(lectern::state::SearchInfo {
            table_id: "T1".into(),
            day: Some("월".into()),
            time: None,
        }),
    };
    let handle = tokio::spawn(async move { lectern::app::run(opts).await });

    let saved = home
        .path()
        .join(".config")
        .join("lectern")
        .join("lists")
        .join("schedules.json");
    let mut persisted = false;
    for _ in 0..40 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        if std::fs::read_to_string(&saved).is_ok_and(|s| s.contains("\"T1\"")) {
            persisted = true;
            break;
        }
    }
    assert!(persisted, "pre-selected table T1 was not saved");

    if handle.is_finished() {
        match handle.await {
            Ok(run_result) => {
                if let Err(e) = run_result {
                    panic!("app::run returned error early: {e:?}");
                }
                return;
            }
            Err(join_err) => panic!("app::run task panicked: {join_err}"),
        }
    }

    handle.abort();
    match handle.await {
        Ok(run_result) => {
            if let Err(e) = run_result {
                panic!("app::run completed with error on abort race: {e:?}");
            }
        }
        Err(join_err) => {
            assert!(
                join_err.is_cancelled(),
                "app::run join error should be cancellation, got: {join_err}"
            );
        }
    }
}
