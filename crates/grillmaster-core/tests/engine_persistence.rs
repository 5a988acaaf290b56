//! Integration tests for the timer engine's persistence contract.
//!
//! Exercises the driver end to end against a real snapshot file: every
//! mutation lands on disk, and a fresh driver restores exactly what the
//! previous one left.

use grillmaster_core::{Driver, NullSink, SnapshotFile, TimerSpec};

fn spec(name: &str, duration: u64, flip: Option<u64>) -> TimerSpec {
    TimerSpec {
        name: name.into(),
        duration,
        flip_interval: flip,
        notes: None,
    }
}

#[test]
fn every_mutation_is_on_disk_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timers.json");
    let mut driver = Driver::open(SnapshotFile::at(&path), NullSink).unwrap();

    let timer = driver.add(spec("Picanha", 1200, Some(180))).unwrap();
    let on_disk = SnapshotFile::at(&path).load().unwrap().unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].id, timer.id);
    assert_eq!(on_disk[0].remaining_time, 1200);

    driver.tick().unwrap();
    let on_disk = SnapshotFile::at(&path).load().unwrap().unwrap();
    assert_eq!(on_disk[0].remaining_time, 1199);

    driver.pause(timer.id).unwrap();
    let on_disk = SnapshotFile::at(&path).load().unwrap().unwrap();
    assert!(on_disk[0].is_paused);

    driver.delete(timer.id).unwrap();
    let on_disk = SnapshotFile::at(&path).load().unwrap().unwrap();
    assert!(on_disk.is_empty());
}

#[test]
fn restart_mid_cook_resumes_where_it_left_off() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timers.json");

    let paused_id;
    {
        let mut driver = Driver::open(SnapshotFile::at(&path), NullSink).unwrap();
        driver.add(spec("Sausages", 30, Some(10))).unwrap();
        let resting = driver.add(spec("Resting Steak", 300, None)).unwrap();
        paused_id = resting.id;
        driver.pause(paused_id).unwrap();
        for _ in 0..10 {
            driver.tick().unwrap();
        }
        // First flip fired on the tenth tick.
        assert_eq!(driver.timers()[0].remaining_time, 20);
        assert_eq!(driver.timers()[0].flip_remaining, Some(10));
    }

    // "Process restart": a new driver over the same snapshot.
    let mut driver = Driver::open(SnapshotFile::at(&path), NullSink).unwrap();
    assert_eq!(driver.timers().len(), 2);
    assert_eq!(driver.timers()[0].name, "Sausages");
    assert_eq!(driver.timers()[0].remaining_time, 20);
    assert!(driver.get(paused_id).unwrap().is_paused);
    assert_eq!(driver.get(paused_id).unwrap().remaining_time, 300);

    // The restored sequence keeps counting. The 20th tick lands on a
    // coincident flip/completion boundary, so completion takes one
    // extra tick.
    for _ in 0..21 {
        driver.tick().unwrap();
    }
    assert!(!driver.timers()[0].is_active);
    assert_eq!(driver.timers()[0].remaining_time, 0);
    // Still paused, still untouched.
    assert_eq!(driver.get(paused_id).unwrap().remaining_time, 300);
}

#[test]
fn snapshot_roundtrip_preserves_order_ids_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timers.json");

    let mut driver = Driver::open(SnapshotFile::at(&path), NullSink).unwrap();
    driver.add(spec("One", 60, None)).unwrap();
    driver.add(spec("Two", 120, Some(30))).unwrap();
    driver.add(spec("Three", 180, None)).unwrap();
    driver.tick().unwrap();
    let before = driver.timers().to_vec();

    let restored = Driver::open(SnapshotFile::at(&path), NullSink).unwrap();
    assert_eq!(restored.timers(), &before[..]);
}
