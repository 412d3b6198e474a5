mod utils;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use std::process::Command;
use tempfile::tempdir;
use train_fare_engine::core::model::BerthKind;
use train_fare_engine::input::fare_dataset::FareDataset;
use train_fare_engine::test_utils::{cleanup_xml, read_xml_file};
use utils::{write_dataset, DATASET_XML};

fn cmd() -> Command {
    Command::cargo_bin("train-fare-engine").unwrap()
}

#[test]
fn test_add_distance_fare_range() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-distance-fare")
        .arg("-d").arg(&dataset_path)
        .arg("--table").arg("7")
        .arg("--min-km").arg("0")
        .arg("--max-km").arg("80")
        .arg("-a").arg("25")
        .assert()
        .stdout("Added distance fare range 2 to fare table 7\n")
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    let ranges = &dataset.distance_fare_tables[0].ranges;
    assert_eq!(ranges.len(), 3);
    assert_eq!(ranges[2].min_km, 0.0);
    assert_eq!(ranges[2].max_km, Some(80.0));
    assert_eq!(ranges[2].amount, 25);
}

#[test]
fn test_overlapping_range_is_rejected() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-distance-fare")
        .arg("-d").arg(&dataset_path)
        .arg("--table").arg("7")
        .arg("--min-km").arg("100")
        .arg("--max-km").arg("400")
        .arg("-a").arg("60")
        .assert()
        .stdout("")
        .stderr("Error: \"range 100..400 overlaps existing range 80..300 in scope fare table 7\"\n")
        .failure();

    assert_eq!(read_xml_file(&dataset_path), cleanup_xml(DATASET_XML.into()));
}

#[test]
fn test_second_open_ended_range_is_rejected() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-distance-fare")
        .arg("-d").arg(&dataset_path)
        .arg("--table").arg("7")
        .arg("--min-km").arg("500")
        .arg("-a").arg("120")
        .assert()
        .stdout("")
        .stderr("Error: \"range 500.. overlaps existing range 300.. in scope fare table 7\"\n")
        .failure();
}

#[test]
fn test_unknown_fare_table() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-distance-fare")
        .arg("-d").arg(&dataset_path)
        .arg("--table").arg("9")
        .arg("--min-km").arg("0")
        .arg("--max-km").arg("80")
        .arg("-a").arg("25")
        .assert()
        .stdout("")
        .stderr("Error: \"fare table 9 does not exist\"\n")
        .failure();
}

#[test]
fn test_empty_range_is_rejected() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-distance-fare")
        .arg("-d").arg(&dataset_path)
        .arg("--table").arg("7")
        .arg("--min-km").arg("300")
        .arg("--max-km").arg("200")
        .arg("-a").arg("60")
        .assert()
        .stdout("")
        .stderr("Error: \"the upper bound 200 must be greater than the lower bound 300\"\n")
        .failure();
}

#[test]
fn test_add_ac_fare_range_creates_the_table() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-ac-fare")
        .arg("-d").arg(&dataset_path)
        .arg("-c").arg("11")
        .arg("--min-km").arg("0")
        .arg("-a").arg("12")
        .assert()
        .stdout("Added AC fare range 2 to coach 11\n")
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    let table = dataset.ac_fare_tables.iter().find(|table| table.coach_id.0 == 11).unwrap();
    assert_eq!(table.ranges.len(), 1);
    assert_eq!(table.ranges[0].amount, 12);
}

#[test]
fn test_add_ac_fare_range_for_unknown_coach() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-ac-fare")
        .arg("-d").arg(&dataset_path)
        .arg("-c").arg("99")
        .arg("--min-km").arg("0")
        .arg("-a").arg("12")
        .assert()
        .stdout("")
        .stderr("Error: \"coach 99 does not exist\"\n")
        .failure();
}

#[test]
fn test_add_berth_fee_range() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("tariff").arg("add-berth-fee")
        .arg("-d").arg(&dataset_path)
        .arg("-c").arg("14")
        .arg("-b").arg("upper")
        .arg("--min-km").arg("0")
        .arg("-a").arg("15")
        .assert()
        .stdout("Added berth fee range 1 to coach 14 (upper berth)\n")
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    let table = dataset
        .berth_fee_tables
        .iter()
        .find(|table| table.coach_id.0 == 14 && table.berth_kind == BerthKind::Upper)
        .unwrap();
    assert_eq!(table.ranges.len(), 1);
    assert_eq!(table.ranges[0].amount, 15);
}
