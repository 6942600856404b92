use skelgen::config::{load_config, parse_config, Parameter, SkeletonConfig};
use skelgen::error::Error;
use tempfile::TempDir;

const XML_DESCRIPTOR: &str = r#"<skeleton>
  <name>webapp</name>
  <description>A web application skeleton</description>
  <parameters>
    <param name="proj" description="Project name"/>
    <param name="owner" description="Owner name"/>
  </parameters>
</skeleton>"#;

#[test]
fn test_parse_xml_descriptor() {
    let config = parse_config(XML_DESCRIPTOR, "config.xml");

    assert_eq!(config.name, "webapp");
    assert_eq!(config.description, "A web application skeleton");
    assert_eq!(
        config.parameters,
        vec![
            Parameter { name: "proj".to_string(), prompt: "Project name".to_string() },
            Parameter { name: "owner".to_string(), prompt: "Owner name".to_string() },
        ]
    );
}

#[test]
fn test_parse_yaml_descriptor() {
    let content = r#"
name: webapp
description: A web application skeleton
parameters:
  - name: proj
    prompt: Project name
  - name: owner
    description: Owner name
"#;
    let config = parse_config(content, "config.yml");

    assert_eq!(config.name, "webapp");
    assert_eq!(config.parameters.len(), 2);
    // `description` is accepted as an alias for `prompt`
    assert_eq!(config.parameters[1].prompt, "Owner name");
}

#[test]
fn test_parse_json_descriptor() {
    let content = r#"{
  "name": "webapp",
  "parameters": [{"name": "proj", "prompt": "Project name"}]
}"#;
    let config = parse_config(content, "config.json");

    assert_eq!(config.name, "webapp");
    assert_eq!(config.description, "");
    assert_eq!(config.parameters[0].name, "proj");
}

#[test]
fn test_parameter_order_is_declaration_order() {
    let content = r#"
parameters:
  - name: c
  - name: a
  - name: b
"#;
    let config = parse_config(content, "config.yaml");
    let names: Vec<&str> = config.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_malformed_descriptor_defaults_to_empty() {
    let config = parse_config("<skeleton><name>unterminated", "config.xml");
    assert_eq!(config, SkeletonConfig::default());

    let config = parse_config("{\"name\": ", "config.json");
    assert_eq!(config, SkeletonConfig::default());
}

#[test]
fn test_load_config_missing_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_config(temp_dir.path());
    assert!(matches!(result, Err(Error::MissingDescriptorError { .. })));
}

#[test]
fn test_load_config_picks_first_found() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.xml"), XML_DESCRIPTOR).unwrap();
    std::fs::write(temp_dir.path().join("config.yml"), "name: other").unwrap();

    let config = load_config(temp_dir.path()).unwrap();
    assert_eq!(config.name, "webapp");
}
