use crate::document::Document;
use crate::error::Error;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and decode a deployment export from a local JSON file.
///
/// Fails on the first structural problem: a missing `clusters` key, or a
/// cluster/service/role/parcel without its identifying field, is reported as
/// `MalformedDocument` with the offending line and column.
pub fn load_document(path: &Path) -> Result<Document, Error> {
    let text = read(path)?;
    parse_document(&text).map_err(|e| at(e, path))
}

/// Read a JSON file without imposing the deployment schema (`--all`).
pub fn load_raw(path: &Path) -> Result<Value, Error> {
    let text = read(path)?;
    parse_raw(&text).map_err(|e| at(e, path))
}

pub fn parse_document(text: &str) -> Result<Document, Error> {
    serde_json::from_str(text).map_err(|source| Error::MalformedDocument { path: None, source })
}

pub fn parse_raw(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|source| Error::MalformedDocument { path: None, source })
}

fn at(err: Error, path: &Path) -> Error {
    match err {
        Error::MalformedDocument { source, .. } => Error::MalformedDocument {
            path: Some(path.to_path_buf()),
            source,
        },
        other => other,
    }
}

fn read(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn keeps_opaque_fields() {
        let doc = parse_document(
            r#"{
                "timestamp": "2024-01-01",
                "clusters": [{
                    "name": "C1",
                    "version": "CDH7",
                    "services": [],
                    "parcels": [{"product": "CDH", "version": "7.1.9", "stage": "ACTIVATED"}]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.rest["timestamp"], "2024-01-01");
        let cluster = &doc.clusters[0];
        assert_eq!(cluster.name, "C1");
        assert_eq!(cluster.rest["version"], "CDH7");
        assert_eq!(cluster.parcels[0].rest["stage"], "ACTIVATED");
        // Navigation keys are not duplicated into the opaque map.
        assert!(!cluster.rest.contains_key("name"));
        assert!(!cluster.rest.contains_key("parcels"));
    }

    #[test]
    fn missing_clusters_key_is_malformed() {
        let err = parse_document(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { path: None, .. }));
        assert!(err.to_string().contains("clusters"), "{}", err);
    }

    #[test]
    fn role_without_name_is_malformed() {
        let err = parse_document(
            r#"{"clusters": [{"name": "C1", "parcels": [], "services": [
                {"type": "HDFS", "roleConfigGroups": [], "roles": [{"type": "NAMENODE"}]}
            ]}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("name"), "{}", err);
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            parse_raw("{\"clusters\": [").unwrap_err(),
            Error::MalformedDocument { .. }
        ));
    }

    #[test]
    fn raw_accepts_any_json() {
        let value = parse_raw(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(value["items"][1], 2);
    }

    #[test]
    fn load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_document(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_raw(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
