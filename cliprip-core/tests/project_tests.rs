// cliprip-core/tests/project_tests.rs

use cliprip_core::error::CoreError;
use cliprip_core::project::Project;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const SAMPLE_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<mlt>
  <profile frame_rate_num="30000" frame_rate_den="1000"/>
  <producer id="1" name="a.mov" resource="/in/a.mov"/>
  <producer id="2" name="b.mp4" resource="/in/b.mp4"/>
  <playlist>
    <entry producer="1" in="30" out="90"/>
    <entry producer="2_1" in="0" out="60"/>
  </playlist>
</mlt>"#;

#[test]
fn test_parse_sample_project() {
    let project = Project::parse(SAMPLE_XML).unwrap();

    assert_eq!(project.profile.frame_rate_num, 30000.0);
    assert_eq!(project.profile.frame_rate_den, 1000.0);
    assert_eq!(project.profile.frame_rate(), 30.0);

    assert_eq!(project.producers.len(), 2);
    assert_eq!(project.producers[0].id, "1");
    assert_eq!(project.producers[0].name, "a.mov");
    assert_eq!(project.producers[0].resource, "/in/a.mov");
    assert_eq!(project.producers[1].id, "2");

    assert_eq!(project.entries.len(), 2);
    assert_eq!(project.entries[0].producer, "1");
    assert_eq!(project.entries[0].in_frame, 30);
    assert_eq!(project.entries[0].out_frame, 90);
    assert_eq!(project.entries[1].producer, "2_1");
}

#[test]
fn test_parse_preserves_document_order() {
    let xml = r#"<mlt>
      <profile frame_rate_num="25" frame_rate_den="1"/>
      <producer id="z" name="z.mov" resource="/z.mov"/>
      <producer id="a" name="a.mov" resource="/a.mov"/>
      <playlist>
        <entry producer="a" in="0" out="10"/>
        <entry producer="z" in="5" out="15"/>
      </playlist>
    </mlt>"#;
    let project = Project::parse(xml).unwrap();

    let producer_ids: Vec<&str> = project.producers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(producer_ids, vec!["z", "a"]);
    let entry_refs: Vec<&str> = project.entries.iter().map(|e| e.producer.as_str()).collect();
    assert_eq!(entry_refs, vec!["a", "z"]);
}

#[test]
fn test_parse_malformed_xml() {
    let result = Project::parse("<mlt><profile frame_rate_num=");
    match result {
        Err(CoreError::XmlParse(_)) => {}
        other => panic!("Expected XmlParse error, got: {:?}", other),
    }
}

#[test]
fn test_parse_missing_profile() {
    let result = Project::parse("<mlt><producer id=\"1\" name=\"a.mov\" resource=\"/a\"/></mlt>");
    match result {
        Err(CoreError::InvalidProfile(msg)) => assert!(msg.contains("profile")),
        other => panic!("Expected InvalidProfile error, got: {:?}", other),
    }
}

#[test]
fn test_parse_non_numeric_frame_rate() {
    let result =
        Project::parse("<mlt><profile frame_rate_num=\"abc\" frame_rate_den=\"1\"/></mlt>");
    match result {
        Err(CoreError::InvalidProfile(msg)) => assert!(msg.contains("frame_rate_num")),
        other => panic!("Expected InvalidProfile error, got: {:?}", other),
    }
}

#[test]
fn test_parse_missing_frame_rate_den() {
    let result = Project::parse("<mlt><profile frame_rate_num=\"25\"/></mlt>");
    match result {
        Err(CoreError::InvalidProfile(msg)) => assert!(msg.contains("frame_rate_den")),
        other => panic!("Expected InvalidProfile error, got: {:?}", other),
    }
}

#[test]
fn test_parse_zero_frame_rate_den() {
    let result =
        Project::parse("<mlt><profile frame_rate_num=\"25\" frame_rate_den=\"0\"/></mlt>");
    match result {
        Err(CoreError::InvalidProfile(msg)) => assert!(msg.contains("zero")),
        other => panic!("Expected InvalidProfile error, got: {:?}", other),
    }
}

#[test]
fn test_parse_producer_missing_resource() {
    let xml = r#"<mlt>
      <profile frame_rate_num="25" frame_rate_den="1"/>
      <producer id="3" name="c.mov"/>
    </mlt>"#;
    match Project::parse(xml) {
        Err(CoreError::MalformedProducer(msg)) => {
            assert!(msg.contains("'3'"));
            assert!(msg.contains("resource"));
        }
        other => panic!("Expected MalformedProducer error, got: {:?}", other),
    }
}

#[test]
fn test_parse_entry_with_non_integer_frame() {
    let xml = r#"<mlt>
      <profile frame_rate_num="25" frame_rate_den="1"/>
      <playlist><entry producer="1" in="x" out="10"/></playlist>
    </mlt>"#;
    match Project::parse(xml) {
        Err(CoreError::MalformedEntry(msg)) => assert!(msg.contains("'in'")),
        other => panic!("Expected MalformedEntry error, got: {:?}", other),
    }
}

#[test]
fn test_parse_entry_missing_out() {
    let xml = r#"<mlt>
      <profile frame_rate_num="25" frame_rate_den="1"/>
      <playlist><entry producer="1" in="0"/></playlist>
    </mlt>"#;
    match Project::parse(xml) {
        Err(CoreError::MalformedEntry(msg)) => assert!(msg.contains("'out'")),
        other => panic!("Expected MalformedEntry error, got: {:?}", other),
    }
}

#[test]
fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("edit.mlt");
    fs::write(&path, SAMPLE_XML)?;

    let project = Project::load(&path)?;
    assert_eq!(project.producers.len(), 2);

    dir.close()?;
    Ok(())
}

#[test]
fn test_load_nonexistent_file() {
    let path = PathBuf::from("surely_this_does_not_exist_42.mlt");
    match Project::load(&path) {
        Err(CoreError::Io(_)) => {}
        other => panic!("Expected Io error, got: {:?}", other),
    }
}
