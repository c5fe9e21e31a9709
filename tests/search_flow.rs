//! Integration test: catalog directory → fetch → filter → page → add to a table.

use std::time::Duration;

use lectern::logic::{
    PAGE_SIZE, accept_lecture_batch, add_selected_to_schedule, maybe_advance_page, open_dialog,
    options,
};
use lectern::sources::{CatalogClient, CatalogLocation};
use lectern::state::{AppState, LectureBatch, SearchInfo};

fn write_catalog(dir: &std::path::Path) {
    let majors: Vec<serde_json::Value> = (0..180)
        .map(|i| {
            serde_json::json!({
                "id": format!("CS{i:03}"),
                "title": format!("Computing {i}"),
                "credits": if i % 3 == 0 { "3" } else { "2" },
                "major": "공과대학<p>컴퓨터공학과",
                "grade": i % 4 + 1,
                "schedule": if i % 2 == 0 { "월1~2(A-101)<p>수3" } else { "화4,5" },
            })
        })
        .collect();
    let liberal: Vec<serde_json::Value> = (0..70)
        .map(|i| {
            serde_json::json!({
                "id": format!("LA{i:03}"),
                "title": format!("Writing {i}"),
                "credits": "2",
                "major": "교양",
                "grade": 1,
                "schedule": "금7~9",
            })
        })
        .collect();
    std::fs::write(
        dir.join("schedules-majors.json"),
        serde_json::to_string(&majors).expect("majors json"),
    )
    .expect("write majors");
    std::fs::write(
        dir.join("schedules-liberal-arts.json"),
        serde_json::to_string(&liberal).expect("liberal json"),
    )
    .expect("write liberal arts");
}

#[tokio::test]
/// What: A full search session over a local catalog
///
/// - Input: 180 majors + 70 liberal-arts lectures; dialog opened for T1 with day 월
/// - Output: Filtered to Monday lectures; paging reveals the rest; adding one lecture
///   appends its two meetings to T1 and closes the dialog
async fn search_session_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_catalog(dir.path());
    let client = CatalogClient::new(
        CatalogLocation::Dir(dir.path().to_path_buf()),
        "schedules-majors.json",
        "schedules-liberal-arts.json",
        Duration::from_secs(5),
    )
    .expect("client");

    let mut app = AppState {
        schedules_path: dir.path().join("schedules.json"),
        ..AppState::default()
    };
    app.ensure_tables(["T1", "T2"]);

    let mount_id = open_dialog(
        &mut app,
        SearchInfo {
            table_id: "T1".into(),
            day: Some("월".into()),
            time: None,
        },
    );
    let lectures = client.fetch_all_lectures().await.expect("fetch");
    assert_eq!(lectures.len(), 250);
    assert_eq!(lectures[0].id, "CS000");
    assert_eq!(lectures[180].id, "LA000");

    assert!(accept_lecture_batch(
        &mut app,
        LectureBatch {
            mount_id,
            lectures: Some(lectures),
        }
    ));
    assert_eq!(app.filtered.len(), 90);
    assert!(app.filtered.iter().all(|l| l.schedule.starts_with('월')));
    assert_eq!(app.all_majors.len(), 2);

    // Clearing the day widens to every lecture; paging then reveals 100 at a time.
    options::toggle_day(&mut app, "월");
    assert_eq!(app.filtered.len(), 250);
    assert_eq!(app.pager.visible_len(250), PAGE_SIZE);
    app.results_rows = 20;
    app.results_selected = PAGE_SIZE - 1;
    assert!(maybe_advance_page(&mut app));
    assert_eq!(app.pager.visible_len(250), 200);

    // Narrow again: credits prefix "3" among Monday lectures.
    options::toggle_day(&mut app, "월");
    options::set_credits(&mut app, Some(3));
    assert_eq!(app.pager.page(), 1);
    assert!(app.filtered.iter().all(|l| l.credits.starts_with('3')));
    let first = app.filtered[0].clone();

    let added = add_selected_to_schedule(&mut app).expect("dialog open");
    assert_eq!(added, 2);
    assert!(!app.dialog_open());
    let t1 = app.schedules.get("T1").expect("T1");
    assert_eq!(t1.len(), 2);
    assert_eq!(t1[0].lecture, first);
    assert_eq!(t1[0].room.as_deref(), Some("A-101"));
    assert!(app.schedules.get("T2").is_some_and(Vec::is_empty));

    // Repeated fetches are served by the cache.
    let again = client.fetch_all_lectures().await.expect("fetch again");
    assert_eq!(again.len(), 250);
    assert_eq!(client.requests_issued(), 2);
}
