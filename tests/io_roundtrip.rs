//! Acquisition and serialization round-trips through temporary files

use std::fs;
use std::io::Write;
use std::path::Path;

use vuamc::vuamc::{
    file_checksums, load_corpus, parse_corpus, write_csv, write_manifest, CorpusError,
    ParseOptions, RunManifest,
};

const CORPUS: &str = r##"<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text xml:id="a1e-fragment01">
    <s n="1">
      <w lemma="the" type="AT0">The</w>
      <w lemma="case" type="NN1" xml:id="w2">case</w>
      <w lemma="against" type="PRP" corresp="#w2">against</w>
    </s>
  </text>
</TEI>"##;

fn write_zip(path: &Path, entry_name: &str, content: &str) {
    let file = fs::File::create(path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file(entry_name, zip::write::SimpleFileOptions::default())
        .expect("start entry");
    writer.write_all(content.as_bytes()).expect("write entry");
    writer.finish().expect("finish archive");
}

#[test]
fn csv_round_trip_preserves_columns_and_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("corpus.csv");

    let rows = parse_corpus(CORPUS, &ParseOptions::default()).expect("parses");
    write_csv(&rows, &out).expect("writes");

    let mut reader = csv::Reader::from_path(&out).expect("reads back");
    let headers: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(
        headers,
        [
            "File_ID",
            "Genre",
            "Sentence_ID",
            "Original_Word",
            "Lemma",
            "POS",
            "Metaphor",
            "Type",
            "Subtype",
            "MFlag",
            "xml:id",
            "corresp",
        ]
    );

    let data: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("record")).collect();
    assert_eq!(data.len(), 2);
    assert_eq!(&data[0][3], "The");
    assert_eq!(&data[1][3], "case against");
    assert_eq!(&data[1][1], "News");
}

#[test]
fn plain_file_loads_directly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corpus.xml");
    fs::write(&path, CORPUS).expect("write corpus");
    assert_eq!(load_corpus(&path).expect("loads"), CORPUS);
}

#[test]
fn archive_yields_its_first_xml_entry() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corpus.zip");
    write_zip(&path, "2541/corpus.xml", CORPUS);
    assert_eq!(load_corpus(&path).expect("loads"), CORPUS);
}

#[test]
fn archive_without_xml_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("corpus.zip");
    write_zip(&path, "readme.txt", "no corpus here");
    assert!(matches!(
        load_corpus(&path).unwrap_err(),
        CorpusError::NoDocument(_)
    ));
}

#[test]
fn directory_scan_prefers_xml_and_is_deterministic() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("b.xml"), CORPUS).expect("write b");
    fs::write(dir.path().join("a.xml"), "<x/>").expect("write a");
    write_zip(&dir.path().join("corpus.zip"), "corpus.xml", CORPUS);
    // Lexicographically first .xml wins over any archive.
    assert_eq!(load_corpus(dir.path()).expect("loads"), "<x/>");
}

#[test]
fn directory_scan_falls_back_to_archives() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_zip(&dir.path().join("corpus.zip"), "corpus.xml", CORPUS);
    assert_eq!(load_corpus(dir.path()).expect("loads"), CORPUS);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        load_corpus(dir.path()).unwrap_err(),
        CorpusError::NoDocument(_)
    ));
}

#[test]
fn manifest_round_trips_through_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("corpus.csv");
    let rows = parse_corpus(CORPUS, &ParseOptions::default()).expect("parses");
    write_csv(&rows, &out).expect("writes");

    let sums = file_checksums(&out).expect("checksums");
    let manifest = RunManifest {
        output: out.display().to_string(),
        rows: rows.len(),
        md5: sums.md5.clone(),
        sha256: sums.sha256.clone(),
    };
    let manifest_path = dir.path().join("corpus.manifest.json");
    write_manifest(&manifest, &manifest_path).expect("writes manifest");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest_path).expect("reads back"))
            .expect("valid json");
    assert_eq!(json["rows"], 2);
    assert_eq!(json["md5"], sums.md5.as_str());
    assert_eq!(json["sha256"], sums.sha256.as_str());
}
