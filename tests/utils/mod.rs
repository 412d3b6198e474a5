use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DATASET_XML: &str = r#"<FareDataset>
    <Station id="1" name="Origin"/>
    <Station id="2" name="Midway"/>
    <Station id="3" name="Terminus"/>
    <TrainType id="1" name="Express"/>
    <Train id="1" trainTypeId="1">
        <Stop stationId="1" distanceFromOriginKm="0"/>
        <Stop stationId="2" distanceFromOriginKm="120"/>
        <Stop stationId="3" distanceFromOriginKm="250"/>
    </Train>
    <Train id="2" trainTypeId="1">
        <Stop stationId="1" distanceFromOriginKm="0"/>
        <Stop stationId="3" distanceFromOriginKm="80.5"/>
    </Train>
    <Train id="3" trainTypeId="1" active="false">
        <Stop stationId="1" distanceFromOriginKm="0"/>
        <Stop stationId="2" distanceFromOriginKm="60"/>
    </Train>
    <Train id="5" trainTypeId="1">
        <Stop stationId="2" distanceFromOriginKm="0"/>
    </Train>
    <Coach id="11" travelClass="2" kind="Standard"/>
    <Coach id="12" travelClass="2" kind="AirConditioned"/>
    <Coach id="14" travelClass="2" kind="SleeperAc"/>
    <BaseFare trainTypeId="1" travelClass="2" amount="100"/>
    <DistanceFareTable id="7" travelClass="2">
        <Range minKm="80" maxKm="300" amount="50"/>
        <Range minKm="300" amount="90"/>
    </DistanceFareTable>
    <AcFareTable coachId="12">
        <Range minKm="100" maxKm="400" amount="30"/>
    </AcFareTable>
    <AcFareTable coachId="14">
        <Range minKm="0" amount="35"/>
    </AcFareTable>
    <BerthFeeTable coachId="14" berthKind="Lower">
        <Range minKm="0" amount="20"/>
    </BerthFeeTable>
</FareDataset>
"#;

pub fn write_dataset(tmp_dir: &TempDir) -> PathBuf {
    let path = tmp_dir.path().join("dataset.xml");
    fs::write(&path, DATASET_XML).unwrap();
    path
}
