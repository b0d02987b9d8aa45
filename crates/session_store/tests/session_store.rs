use std::fs;
use std::path::PathBuf;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::json;
use session_store::{default_session_path, Day, SessionRecord, SessionStore, SessionStoreError};
use tempfile::TempDir;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

fn new_store() -> (TempDir, SessionStore) {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = SessionStore::in_project(dir.path());
    (dir, store)
}

fn write_raw(store: &SessionStore, contents: &str) {
    fs::write(store.path(), contents).expect("session file should be written");
}

fn rfc3339(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).expect("timestamp should format")
}

#[test]
fn in_project_uses_fixed_file_name() {
    let (dir, store) = new_store();
    assert_eq!(store.path(), default_session_path(dir.path()));
    assert_eq!(
        store.path().file_name().and_then(|name| name.to_str()),
        Some("session-state.json")
    );
}

#[test]
fn save_then_load_round_trips_the_record() {
    let (_dir, store) = new_store();
    let record = SessionRecord::new("session-1", "2026-02-14T18:30:00Z", Day::Day1)
        .with_team("Blox Builders")
        .with_game_name("Lava Escape");

    store.save(&record).expect("save should succeed");

    assert_eq!(store.load(), Some(record));
}

#[test]
fn save_overwrites_previous_record_wholesale() {
    let (_dir, store) = new_store();
    let first = SessionRecord::new("session-1", "2026-02-14T18:30:00Z", Day::Day1)
        .with_team("Blox Builders");
    let second = SessionRecord::new("session-2", "2026-02-15T09:00:00Z", Day::Day2);

    store.save(&first).expect("first save");
    store.save(&second).expect("second save");

    let loaded = store.load().expect("record should exist");
    assert_eq!(loaded, second);
    assert!(loaded.team.is_none(), "no merge with the previous record");
}

#[test]
fn saved_file_is_pretty_camel_case_json() {
    let (_dir, store) = new_store();
    let record = SessionRecord::new("session-1", "2026-02-14T18:30:00Z", Day::Day2)
        .with_game_name("Obby");
    store.save(&record).expect("save should succeed");

    let raw = fs::read_to_string(store.path()).expect("file should exist");
    assert!(raw.contains("\n  \"sessionId\": \"session-1\""), "{raw}");

    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(
        value,
        json!({
            "sessionId": "session-1",
            "savedAt": "2026-02-14T18:30:00Z",
            "day": 2,
            "gameName": "Obby",
        })
    );
}

#[test]
fn save_leaves_no_temp_files_behind() {
    let (dir, store) = new_store();
    store
        .save(&SessionRecord::new("s", "2026-02-14T18:30:00Z", Day::Day1))
        .expect("save should succeed");

    let names: Vec<PathBuf> = fs::read_dir(dir.path())
        .expect("dir should list")
        .map(|entry| entry.expect("entry").path())
        .collect();
    assert_eq!(names, vec![store.path().to_path_buf()]);
}

#[cfg(unix)]
#[test]
fn new_session_file_gets_the_same_mode_as_any_new_file() {
    use std::os::unix::fs::PermissionsExt;

    let (dir, store) = new_store();
    store
        .save(&SessionRecord::new("s", "2026-02-14T18:30:00Z", Day::Day1))
        .expect("save should succeed");

    let plain = dir.path().join("plain.txt");
    fs::write(&plain, "x").expect("plain file should be written");
    let mode = |path: &std::path::Path| {
        fs::metadata(path).expect("metadata").permissions().mode() & 0o777
    };
    assert_eq!(mode(store.path()), mode(&plain));
}

#[cfg(unix)]
#[test]
fn save_keeps_permissions_of_the_replaced_file() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = new_store();
    store
        .save(&SessionRecord::new("s", "2026-02-14T18:30:00Z", Day::Day1))
        .expect("first save");
    fs::set_permissions(store.path(), fs::Permissions::from_mode(0o640)).expect("chmod");

    store
        .save(&SessionRecord::new("s", "2026-02-14T19:00:00Z", Day::Day2))
        .expect("second save");
    let mode = fs::metadata(store.path()).expect("metadata").permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}

#[test]
fn save_into_missing_directory_propagates_io_error() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let store = SessionStore::new(dir.path().join("missing").join("session-state.json"));

    let error = store
        .save(&SessionRecord::new("s", "2026-02-14T18:30:00Z", Day::Day1))
        .expect_err("save must fail without a parent directory");
    assert_matches!(error, SessionStoreError::Io { .. });
}

#[test]
fn load_without_file_is_absent() {
    let (_dir, store) = new_store();
    assert_eq!(store.load(), None);
    assert_matches!(store.try_load(), Ok(None));
}

#[test]
fn load_with_corrupted_file_is_absent() {
    let (_dir, store) = new_store();
    write_raw(&store, "{ this is not json");

    assert_eq!(store.load(), None);
    assert_matches!(store.try_load(), Err(SessionStoreError::JsonParse { .. }));
}

#[test]
fn load_with_illegal_day_is_absent() {
    let (_dir, store) = new_store();
    write_raw(
        &store,
        &json!({"sessionId": "s", "savedAt": "2026-02-14T18:30:00Z", "day": 3}).to_string(),
    );

    assert_eq!(store.load(), None);
}

#[test]
fn load_accepts_legacy_date_key() {
    let (_dir, store) = new_store();
    write_raw(
        &store,
        &json!({"sessionId": "s", "date": "2026-02-14T18:30:00.000Z", "day": 1, "team": "Red"})
            .to_string(),
    );

    let record = store.load().expect("legacy record should load");
    assert_eq!(record.saved_at, "2026-02-14T18:30:00.000Z");
    assert_eq!(record.team.as_deref(), Some("Red"));
}

#[test]
fn detect_day_without_record_is_day_one() {
    let (_dir, store) = new_store();
    assert_eq!(store.detect_day(), Day::Day1);
    assert_eq!(store.detect_day_at(datetime!(2026-02-15 09:00 UTC)), Day::Day1);
}

#[test]
fn detect_day_same_calendar_day_keeps_stored_day() {
    let (_dir, store) = new_store();
    let now = datetime!(2026-02-14 23:59 UTC);

    store
        .save(&SessionRecord::new("s", "2026-02-14T00:01:00Z", Day::Day1))
        .expect("save");
    assert_eq!(store.detect_day_at(now), Day::Day1);

    store
        .save(&SessionRecord::new("s", "2026-02-14T00:01:00Z", Day::Day2))
        .expect("save");
    assert_eq!(store.detect_day_at(now), Day::Day2);
}

#[test]
fn detect_day_after_midnight_is_day_two_whatever_was_stored() {
    let (_dir, store) = new_store();
    store
        .save(&SessionRecord::new("s", "2026-02-14T23:55:00Z", Day::Day1))
        .expect("save");

    assert_eq!(store.detect_day_at(datetime!(2026-02-15 00:05 UTC)), Day::Day2);
}

#[test]
fn detect_day_compares_dates_in_the_callers_offset() {
    let (_dir, store) = new_store();
    // 22:10 UTC on the 13th is already 00:10 on the 14th at +02:00.
    store
        .save(&SessionRecord::new("s", "2026-02-13T22:10:00Z", Day::Day1))
        .expect("save");

    assert_eq!(
        store.detect_day_at(datetime!(2026-02-14 08:00 +02:00)),
        Day::Day1
    );
    assert_eq!(store.detect_day_at(datetime!(2026-02-14 08:00 UTC)), Day::Day2);
}

#[test]
fn detect_day_same_local_day_across_daylight_saving_switch() {
    let (_dir, store) = new_store();
    // Saved at 00:30 PDT; by 10:00 the clocks have fallen back to PST.
    store
        .save(&SessionRecord::new("s", "2026-11-01T00:30:00-07:00", Day::Day1))
        .expect("save");

    assert_eq!(
        store.detect_day_at(datetime!(2026-11-01 10:00 -08:00)),
        Day::Day1
    );
    assert_eq!(
        store.detect_day_at(datetime!(2026-11-02 08:00 -08:00)),
        Day::Day2
    );
}

#[test]
fn detect_day_reads_offset_stamps_on_their_own_calendar() {
    let (_dir, store) = new_store();
    // 23:30 on the 14th at -05:00 is already the 15th in UTC.
    store
        .save(&SessionRecord::new("s", "2026-02-14T23:30:00-05:00", Day::Day1))
        .expect("save");

    assert_eq!(
        store.detect_day_at(datetime!(2026-02-14 23:50 -05:00)),
        Day::Day1
    );
    assert_eq!(
        store.detect_day_at(datetime!(2026-02-15 07:00 -05:00)),
        Day::Day2
    );
}

#[test]
fn detect_day_with_unparsable_timestamp_is_day_one() {
    let (_dir, store) = new_store();
    store
        .save(&SessionRecord::new("s", "not a date", Day::Day2))
        .expect("save");

    assert_eq!(store.detect_day_at(datetime!(2026-02-14 08:00 UTC)), Day::Day1);
}

#[test]
fn detect_day_with_corrupted_file_is_day_one() {
    let (_dir, store) = new_store();
    write_raw(&store, "[]");
    assert_eq!(store.detect_day(), Day::Day1);
}

#[test]
fn detect_day_against_real_clock() {
    let (_dir, store) = new_store();

    let today = SessionRecord::stamped_now("s", Day::Day1).expect("stamp");
    store.save(&today).expect("save");
    assert_eq!(store.detect_day(), Day::Day1);

    let yesterday = SessionRecord::new(
        "s",
        rfc3339(OffsetDateTime::now_utc() - Duration::days(1)),
        Day::Day1,
    );
    store.save(&yesterday).expect("save");
    assert_eq!(store.detect_day(), Day::Day2);
}
