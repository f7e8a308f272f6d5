use festival_map::{
    Config, LoadError, Venues, bundled_schedule, load_configured_schedule, load_configured_venues,
    load_schedule_from_json, load_venue_table_from_json,
};
use std::io::Write;
use tempfile::NamedTempFile;

const SCHEDULE_JSON: &str = r#"{
  "eventName": "Sinulog 2025",
  "tagline": "One beat, one dance",
  "schedule": [
    {
      "date": "2025-01-15",
      "dateRange": "January 15-19",
      "events": [
        { "name": "Opening Mass", "time": "6:00 AM", "venue": "Basilica del Sto. Nino" },
        { "name": "Traslacion", "time": "4:00 AM", "venue": ["Basilica del Sto. Nino", "Mandaue City"], "description": "By land" }
      ]
    }
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config_with(vars: &[(&str, String)]) -> Config {
    Config::from_lookup(|name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.clone())
    })
    .unwrap()
}

#[test]
fn schedule_file_loads_with_camel_case_fields() {
    let file = write_temp(SCHEDULE_JSON);
    let data = load_schedule_from_json(file.path()).unwrap();
    assert_eq!(data.event_name, "Sinulog 2025");
    let day = &data.schedule[0];
    assert_eq!(day.date_range.as_deref(), Some("January 15-19"));
    assert_eq!(day.events.len(), 2);
    assert!(matches!(day.events[1].venue, Venues::Multiple(ref v) if v.len() == 2));
    assert_eq!(day.events[1].description.as_deref(), Some("By land"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_schedule_from_json("/nonexistent/schedule.json").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let file = write_temp(r#"{"eventName": "x", "schedule": "#);
    let err = load_schedule_from_json(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Serialization(_)));
    assert!(err.to_string().starts_with("serialization error"));
}

#[test]
fn venue_table_file_keeps_entry_order() {
    let file = write_temp(
        r#"[{"name":"Park","lat":1.0,"lng":2.0},{"name":"City Park","lat":3.0,"lng":4.0}]"#,
    );
    let table = load_venue_table_from_json(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.entries()[0].name, "Park");
    assert_eq!(table.resolve("City Park").unwrap().lat, 3.0);
    assert_eq!(table.resolve("North Park").unwrap().lat, 1.0);
}

#[test]
fn empty_venue_table_is_rejected() {
    let file = write_temp("[]");
    let err = load_venue_table_from_json(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::InvalidData(_)));
}

#[test]
fn configured_paths_take_precedence_over_bundled_data() {
    let schedule = write_temp(SCHEDULE_JSON);
    let venues = write_temp(r#"[{"name":"Basilica","lat":1.0,"lng":1.0}]"#);
    let config = config_with(&[
        ("FESTIVAL_MAP_SCHEDULE", schedule.path().display().to_string()),
        ("FESTIVAL_MAP_VENUES", venues.path().display().to_string()),
    ]);

    let data = load_configured_schedule(&config).unwrap();
    assert_eq!(data.tagline, "One beat, one dance");
    let table = load_configured_venues(&config).unwrap();
    assert_eq!(table.len(), 1);
}

#[test]
fn defaults_use_bundled_schedule_and_builtin_table() {
    let config = config_with(&[]);
    let data = load_configured_schedule(&config).unwrap();
    assert_eq!(data, bundled_schedule().unwrap());
    assert_eq!(load_configured_venues(&config).unwrap().len(), 13);
}
