//! End-to-end checks of the generated artifacts.

use entitykit_core::{
    AffineMatrix, EventBus, NodeKind, Paint, PluginEvent, PluginMessage, RecordingHost,
    SceneNode, UiCommand,
};
use entitykit_report::{assemble, Artifacts, Plugin};
use entitykit_settings::ReportSettings;
use parking_lot::Mutex;
use std::sync::Arc;

fn rectangle_and_vector() -> SceneNode {
    SceneNode::new("1:1", "Ship", NodeKind::Group)
        .at(10.0, 20.0)
        .with_child(
            SceneNode::new("1:2", "Body", NodeKind::Rectangle)
                .at(5.0, 5.0)
                .with_fill(Paint::solid(1.0, 0.0, 0.0)),
        )
        .with_child(
            SceneNode::new("1:3", "Wing", NodeKind::Vector)
                .at(0.0, 0.0)
                .with_path("M0,0 L10,10 Z"),
        )
}

fn render(selection: &[SceneNode]) -> Artifacts {
    let settings = ReportSettings::default();
    Artifacts::render(&assemble(selection, &settings), &settings)
}

#[test]
fn test_group_with_rectangle_and_vector() {
    let artifacts = render(&[rectangle_and_vector()]);

    let expected_config = "\
const ship = {
    body: {
        scaleFactor: 3.5,
        origin: { x: 15, y: 25 },
        offset: { x: 0, y: 0 },
        fillStyle: 'rgba(255, 0, 0, 1)'
    },
    wing: {
        scaleFactor: 3.5,
        origin: { x: 10, y: 20 },
        offset: { x: 0, y: 0 },
        fillStyle: '#2D2D2D'
    }
};
export default ship;
";
    assert_eq!(artifacts.config, expected_config);

    let expected_data = "\
{
    \"ship\": {
        \"body\": [
        ],
        \"wing\": [
            { \"x\": 0, \"y\": 0 },
            { \"x\": 10, \"y\": 10 }
        ]
    }
}
";
    assert_eq!(artifacts.data, expected_data);

    assert_eq!(
        artifacts.info,
        "Entity: ship </br>\
         Rectangles: <span style='color: red;'>1</span> </br>\
         Vectors: 1 </br>\
         Core: <span style='color: red;'>0</span> </br>\
         Total: 2</br>"
    );
}

#[test]
fn test_empty_selection_verbatim() {
    let artifacts = render(&[]);
    assert_eq!(artifacts.info, "Sélectionner une entité. (groupe)");
    assert_eq!(artifacts.config, "_");
    assert_eq!(artifacts.data, "_");
}

#[test]
fn test_selection_without_group() {
    let artifacts = render(&[SceneNode::new("1", "Loose", NodeKind::Rectangle)]);
    assert_eq!(artifacts.info, "Cette sélection n'est pas un groupe.");
    assert!(artifacts.config.is_empty());
    assert!(artifacts.data.is_empty());
}

#[test]
fn test_coordinates_rounded_to_three_decimals() {
    let group = SceneNode::new("g", "g", NodeKind::Group)
        .with_child(SceneNode::new("s", "s", NodeKind::Vector).with_path("M 1.23456 2.0"));
    let artifacts = render(&[group]);
    assert!(artifacts.data.contains("{ \"x\": 1.235, \"y\": 2 }\n"));
}

#[test]
fn test_flipped_shape_gets_rotation_and_scale() {
    let group = SceneNode::new("g", "g", NodeKind::Group).with_child(
        SceneNode::new("s", "s", NodeKind::Polygon)
            .with_transform(AffineMatrix([[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])),
    );
    let artifacts = render(&[group]);
    assert!(artifacts.config.contains("        rotation: 3.1416,\n"));
    assert!(artifacts.config.contains("        scaleY: -1,\n"));
}

#[test]
fn test_groups_and_loose_nodes_mixed() {
    let other = SceneNode::new("2:1", "Enemy", NodeKind::Group)
        .with_child(SceneNode::new("2:2", "core", NodeKind::Star));
    let loose = SceneNode::new("3:1", "Loose", NodeKind::Line);
    let artifacts = render(&[rectangle_and_vector(), loose, other]);

    assert_eq!(artifacts.config.matches("export default").count(), 2);
    let ship = artifacts.config.find("const ship").unwrap();
    let enemy = artifacts.config.find("const enemy").unwrap();
    assert!(ship < enemy);

    assert!(artifacts.info.contains("Entity: enemy </br>Stars: <span style='color: red;'>1</span> </br>Core: 1 </br>Total: 2</br>"));
    assert!(artifacts.data.ends_with("        \"core\": [\n        ]\n    }\n}\n"));
}

#[test]
fn test_transparent_fill_prints_full_opacity() {
    let group = SceneNode::new("g", "g", NodeKind::Group).with_child(
        SceneNode::new("r", "r", NodeKind::Rectangle)
            .with_fill(Paint::solid(0.0, 0.0, 0.0).with_opacity(0.0)),
    );
    let artifacts = render(&[group]);
    assert!(artifacts
        .config
        .contains("        fillStyle: 'rgba(0, 0, 0, 1)'\n"));
}

#[test]
fn test_duplicate_points_across_paths() {
    let group = SceneNode::new("g", "g", NodeKind::Group).with_child(
        SceneNode::new("s", "s", NodeKind::Vector)
            .with_path("M 0 0 L 5 5 Z")
            .with_path("M 5 5 L 0 0 L 1 1"),
    );
    let artifacts = render(&[group]);
    assert_eq!(artifacts.data.matches("\"x\"").count(), 3);
}

#[test]
fn test_bus_driven_session() {
    let host = RecordingHost::new(vec![rectangle_and_vector()]);
    let plugin = Arc::new(Mutex::new(Plugin::new(host, ReportSettings::default())));
    let bus = EventBus::new();
    Plugin::attach(&plugin, &bus);

    bus.publish(PluginEvent::Loaded).unwrap();
    bus.publish(PluginEvent::Ui(UiCommand::CopyEntityConfig)).unwrap();

    {
        let guard = plugin.lock();
        let copied = guard.host().last_copy().unwrap();
        assert_eq!(copied, guard.artifacts().config);
        assert_eq!(guard.host().nodes[0].name, "ship");
    }

    plugin.lock().host_mut().set_selection(Vec::new());
    bus.publish(PluginEvent::SelectionChanged).unwrap();
    bus.publish(PluginEvent::Ui(UiCommand::CopyEntityData)).unwrap();

    let guard = plugin.lock();
    assert_eq!(guard.host().last_copy(), Some("_"));
    assert!(matches!(
        guard.host().messages.iter().rev().nth(3),
        Some(PluginMessage::EntityInfos { entity_info }) if entity_info == "Sélectionner une entité. (groupe)"
    ));
}
