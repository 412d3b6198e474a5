mod utils;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use std::process::Command;
use tempfile::tempdir;
use train_fare_engine::input::fare_dataset::FareDataset;
use train_fare_engine::test_utils::{cleanup_xml, read_xml_file};
use utils::{write_dataset, DATASET_XML};

fn cmd() -> Command {
    Command::cargo_bin("train-fare-engine").unwrap()
}

#[test]
fn test_materialize_single_train() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("materialize-distances")
        .arg("-d").arg(&dataset_path)
        .arg("-t").arg("1")
        .assert()
        .stdout("Calculated 3 stop pairs, saved 6 distances\n")
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    assert_eq!(dataset.route_distances.len(), 6);
    let row = dataset
        .route_distances
        .iter()
        .find(|row| row.from_station_id.0 == 3 && row.to_station_id.0 == 1)
        .unwrap();
    assert_eq!(row.train_id.0, 1);
    assert_eq!(row.distance_km, 250.0);
}

#[test]
fn test_materialize_all_active_trains() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("materialize-distances")
        .arg("-d").arg(&dataset_path)
        .assert()
        .stdout(
            "Processed 3 trains, saved 8 distances\n\
             Status: completed with errors\n  \
             train 5 has 1 stops, at least 2 are needed\n",
        )
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    assert_eq!(dataset.route_distances.len(), 8);
    // the inactive train 3 got nothing
    assert!(dataset.route_distances.iter().all(|row| row.train_id.0 != 3));
}

#[test]
fn test_output_flag_leaves_the_input_untouched() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);
    let output_path = tmp_dir.path().join("materialized.xml");

    cmd()
        .arg("materialize-distances")
        .arg("-d").arg(&dataset_path)
        .arg("-t").arg("2")
        .arg("-o").arg(&output_path)
        .assert()
        .stdout("Calculated 1 stop pairs, saved 2 distances\n")
        .stderr("")
        .success();

    assert_eq!(read_xml_file(&dataset_path), cleanup_xml(DATASET_XML.into()));
    let dataset = FareDataset::from_xml_file(&output_path).unwrap();
    assert_eq!(dataset.route_distances.len(), 2);
}

#[test]
fn test_spent_timeout_processes_nothing() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("materialize-distances")
        .arg("-d").arg(&dataset_path)
        .arg("--timeout-secs").arg("0")
        .assert()
        .stdout("Processed 0 trains, saved 0 distances\nStatus: success\n")
        .stderr("")
        .success();

    let dataset = FareDataset::from_xml_file(&dataset_path).unwrap();
    assert!(dataset.route_distances.is_empty());
}

#[test]
fn test_materialize_unknown_train() {
    let tmp_dir = tempdir().unwrap();
    let dataset_path = write_dataset(&tmp_dir);

    cmd()
        .arg("materialize-distances")
        .arg("-d").arg(&dataset_path)
        .arg("-t").arg("9")
        .assert()
        .stdout("")
        .stderr("Error: \"train 9 does not exist\"\n")
        .failure();

    assert_eq!(read_xml_file(&dataset_path), cleanup_xml(DATASET_XML.into()));
}
