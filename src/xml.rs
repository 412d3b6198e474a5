use quick_xml::{DeError, SeError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadXMLFileError {
    #[error("{0}")]
    IOError(#[from] io::Error),

    #[error("{0}")]
    DeError(#[from] DeError),
}

#[derive(Error, Debug)]
pub enum WriteXMLFileError {
    #[error("{0}")]
    IOError(#[from] io::Error),

    #[error("{0}")]
    SeError(#[from] SeError),
}

pub fn from_xml_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ReadXMLFileError> {
    let raw_xml = fs::read_to_string(path)?;
    Ok(quick_xml::de::from_str(&raw_xml)?)
}

pub fn to_xml_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<(), WriteXMLFileError> {
    let mut buffer = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 4);
    value.serialize(serializer)?;
    buffer.push('\n');
    fs::write(path, buffer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    #[serde(rename = "Example")]
    struct Example {
        #[serde(rename = "@name")]
        name: String,

        #[serde(rename = "Entry", default)]
        entries: Vec<Entry>,
    }

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Entry {
        #[serde(rename = "@value")]
        value: u32,
    }

    fn example() -> Example {
        Example {
            name: "test".into(),
            entries: vec![Entry { value: 1 }, Entry { value: 2 }],
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("example.xml");

        to_xml_file(&example(), &path).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));

        let read_back: Example = from_xml_file(&path).unwrap();
        assert_eq!(read_back, example());
    }

    #[test]
    fn test_read_missing_file() {
        let tmp_dir = tempdir().unwrap();
        let result: Result<Example, _> = from_xml_file(tmp_dir.path().join("nope.xml"));
        assert!(matches!(result, Err(ReadXMLFileError::IOError(_))));
    }

    #[test]
    fn test_read_malformed_file() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("broken.xml");
        fs::write(&path, "<Example name=").unwrap();
        let result: Result<Example, _> = from_xml_file(&path);
        assert!(matches!(result, Err(ReadXMLFileError::DeError(_))));
    }
}
