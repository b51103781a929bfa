use entitykit::{load_settings_from, run, StdioHost};
use entitykit_core::{EventBus, PluginEvent};
use entitykit_report::Plugin;
use entitykit_settings::ReportSettings;
use parking_lot::Mutex;
use serde_json::Value;
use std::io::Cursor;
use std::sync::Arc;

type Session = Arc<Mutex<Plugin<StdioHost<Vec<u8>>>>>;

fn session() -> (Session, EventBus) {
    let host = StdioHost::new(Vec::new(), false);
    let plugin = Arc::new(Mutex::new(Plugin::new(host, ReportSettings::default())));
    let bus = EventBus::new();
    Plugin::attach(&plugin, &bus);
    (plugin, bus)
}

fn output_lines(plugin: &Session) -> Vec<Value> {
    let guard = plugin.lock();
    String::from_utf8_lossy(guard.host().writer())
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

const SELECTION: &str = r#"{"type":"selection","nodes":[{"id":"1:1","name":"Ship","type":"GROUP","x":10,"y":20,"children":[{"id":"1:2","name":"Core","type":"RECTANGLE","x":5,"y":5,"fills":[{"type":"SOLID","color":{"r":0,"g":0,"b":1},"opacity":0.5}]}]}]}"#;

#[test]
fn test_loaded_then_selection_then_copy() {
    let (plugin, bus) = session();
    bus.publish(PluginEvent::Loaded).unwrap();

    let input = format!("{}\n{}\n", SELECTION, r#"{"type":"copy-entity-config"}"#);
    let handled = run(Cursor::new(input), &*plugin, &bus).unwrap();
    assert_eq!(handled, 2);

    let lines = output_lines(&plugin);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0]["type"], "entity-infos");
    assert_eq!(lines[0]["entityInfo"], "Sélectionner une entité. (groupe)");
    assert_eq!(lines[2]["entityData"], "_");

    assert_eq!(
        lines[3]["entityInfo"],
        "Entity: ship </br>Rectangles: <span style='color: red;'>1</span> </br>Core: 1 </br>Total: 2</br>"
    );
    let config = lines[4]["entityConfig"].as_str().unwrap();
    assert!(config.contains("    core: {\n"));
    assert!(config.contains("        origin: { x: 15, y: 25 },\n"));
    assert!(config.contains("        fillStyle: 'rgba(0, 0, 255, 0.5)'\n"));

    assert_eq!(lines[6]["type"], "copy");
    assert_eq!(lines[6]["text"], config);
}

#[test]
fn test_malformed_frames_are_skipped() {
    let (plugin, bus) = session();
    let input = "not json\n\n{\"type\":\"resize\"}\n{\"type\":\"copy-entity-data\"}\n";
    let handled = run(Cursor::new(input), &*plugin, &bus).unwrap();
    assert_eq!(handled, 1);

    let lines = output_lines(&plugin);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["text"], "_");
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let (plugin, bus) = session();
    let input: &[u8] = b"\xff\xfe\n{\"type\":\"copy-entity-data\"}\n";
    let handled = run(Cursor::new(input), &*plugin, &bus).unwrap();
    assert_eq!(handled, 1);

    let lines = output_lines(&plugin);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["type"], "copy");
    assert_eq!(lines[0]["text"], "_");
}

#[test]
fn test_explicit_settings_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_settings_from(Some(dir.path().join("missing.toml").as_path())).is_err());
}

#[test]
fn test_names_written_back_into_held_selection() {
    let (plugin, bus) = session();
    run(Cursor::new(SELECTION), &*plugin, &bus).unwrap();

    let guard = plugin.lock();
    let selection = entitykit_core::Host::selection(guard.host());
    assert_eq!(selection[0].name, "ship");
    assert_eq!(selection[0].children[0].name, "core");
}

#[test]
fn test_settings_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "scale_factor = 2.0\nfallback_fill = \"#000000\"\n").unwrap();

    let settings = load_settings_from(Some(path.as_path())).unwrap();
    assert_eq!(settings.scale_factor, 2.0);
    assert_eq!(settings.fallback_fill, "#000000");
    assert_eq!(settings.coordinate_digits, 3);
}
