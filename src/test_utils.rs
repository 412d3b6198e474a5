use regex::Regex;
use std::fs;
use std::path::Path;

/// Reads an XML file and normalizes its whitespace so tests can compare
/// documents regardless of indentation.
pub fn read_xml_file<P: AsRef<Path>>(path: P) -> String {
    cleanup_xml(fs::read_to_string(path).unwrap())
}

pub fn cleanup_xml(raw_xml: String) -> String {
    let normalized = Regex::new("[ \n\r\t]+").unwrap().replace_all(raw_xml.trim(), " ");
    let normalized = Regex::new("> <").unwrap().replace_all(&normalized, "><");
    let normalized = Regex::new(" >").unwrap().replace_all(&normalized, ">");
    let normalized = Regex::new(" />").unwrap().replace_all(&normalized, "/>");
    normalized.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_xml_collapses_whitespace() {
        let raw = "\n<Doc>\n    <Item a=\"1\" />\n    <Item a=\"2\" >x</Item>\n</Doc>\n";
        assert_eq!(cleanup_xml(raw.into()), "<Doc><Item a=\"1\"/><Item a=\"2\">x</Item></Doc>");
    }
}
