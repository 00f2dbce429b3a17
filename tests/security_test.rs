/// Security-focused integration tests
///
/// These tests verify storage boundaries: path traversal, resource limits, concurrent writers
mod common;

use std::fs;

use brick_tracker::{FileRecordStore, RecordRepository, TrackerError, search};
use common::{PartBuilder, RecordBuilder, SetDataDirBuilder};

#[test]
fn test_security_traversal_ids_stay_inside_data_dir() {
    let root = tempfile::TempDir::new().unwrap();
    let data_dir = root.path().join("sets");
    let mut store = FileRecordStore::new(&data_dir);

    let hostile = ["../escape", "../../etc/passwd", "/tmp/absolute", "a/b", "..\\windows", "~"];
    for id in hostile {
        store.create(&RecordBuilder::new(id).build()).unwrap();
    }

    // Nothing was written next to the data directory
    let outside: Vec<_> = fs::read_dir(root.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(outside, vec![std::ffi::OsString::from("sets")]);

    // Every id is a flat file inside it and round-trips
    let inside = fs::read_dir(&data_dir).unwrap().count();
    assert_eq!(inside, hostile.len());
    for id in hostile {
        assert_eq!(store.load(id).unwrap().id, id);
        assert_eq!(store.path_for(id).parent().unwrap(), data_dir.as_path());
    }

    let mut expected: Vec<String> = hostile.iter().map(|id| id.to_string()).collect();
    expected.sort();
    assert_eq!(store.list_ids().unwrap(), expected);
}

#[test]
fn test_security_oversized_file_rejected() {
    let data_dir = SetDataDirBuilder::new()
        .with_record(RecordBuilder::new("ok").part(PartBuilder::new("3001", "Red").need(1)))
        .build();

    // 11MB of padding, over the 10MB limit
    let padding = " ".repeat(11 * 1024 * 1024);
    fs::write(data_dir.path().join("huge.json"), format!("{}{{}}", padding)).unwrap();

    let store = FileRecordStore::new(data_dir.path());
    let err = store.load("huge").unwrap_err();
    assert!(matches!(err, TrackerError::MalformedRecord { .. }));
    assert!(err.to_string().contains("too large"), "{}", err);

    // Search carries on with the readable set
    let results = search("3001", &store).unwrap();
    assert_eq!(results[0].sets_needing, vec!["ok".to_string()]);
}

#[test]
fn test_security_concurrent_writers_last_write_wins() {
    let data_dir = SetDataDirBuilder::new()
        .with_record(
            RecordBuilder::new("6020-1")
                .part(PartBuilder::new("3001", "Red").need(4))
                .part(PartBuilder::new("3003", "Blue").need(2)),
        )
        .build();

    // Two independent handles, as two processes would have
    let mut first = FileRecordStore::new(data_dir.path());
    let mut second = FileRecordStore::new(data_dir.path());

    let stale = first.load("6020-1").unwrap();

    let mut parts = stale.parts.clone();
    parts[1].have = 2;
    second.update_parts("6020-1", parts).unwrap();

    let mut parts = stale.parts.clone();
    parts[0].have = 4;
    first.update_parts("6020-1", parts).unwrap();

    // The second handle's update is silently lost
    let record = second.load("6020-1").unwrap();
    assert_eq!(record.parts[0].have, 4);
    assert_eq!(record.parts[1].have, 0);
    assert!(!record.completed);
}

#[test]
fn test_security_file_id_mismatch_rejected() {
    // A file renamed onto another set's name must not be served as that set
    let other = serde_json::to_string(&RecordBuilder::new("other").build()).unwrap();
    let data_dir = SetDataDirBuilder::new().with_raw_file("6020-1.json", &other).build();

    let store = FileRecordStore::new(data_dir.path());
    assert!(matches!(store.load("6020-1"), Err(TrackerError::MalformedRecord { .. })));
}

#[test]
#[cfg(unix)]
fn test_security_no_temp_files_after_writes() {
    let data_dir = SetDataDirBuilder::new().build();
    let mut store = FileRecordStore::new(data_dir.path());

    let mut record = RecordBuilder::new("6020-1").part(PartBuilder::new("3001", "Red").need(3)).build();
    store.create(&record).unwrap();
    for have in 0..=3 {
        record.parts[0].have = have;
        store.save(&record).unwrap();
    }

    let names: Vec<String> = fs::read_dir(data_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["6020-1.json".to_string()]);
}
