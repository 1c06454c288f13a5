//! Integration tests for deployment-level per-device settings.

use perdev::{FilterCriterion, FilterMode, PerDeviceConfigs, PerDeviceConfigsError};
use test_support::{inventory, names, reference_inventory};

fn edge_inventory() -> Vec<perdev::DirEntry> {
    inventory(&[
        ("docker-compose.yaml", true),
        ("edge-configs", false),
        ("edge-configs/agent-01.env", true),
        ("edge-configs/agent-02.env", true),
        ("edge-configs/factory-north", false),
        ("edge-configs/factory-north/plc.yaml", true),
        ("edge-configs/factory-south", false),
        ("edge-configs/factory-south/plc.yaml", true),
    ])
}

// ============================================================================
// Selection
// ============================================================================

/// A device receives its own file and the folders of its groups.
#[test]
fn device_file_with_group_folders() {
    let settings = PerDeviceConfigs::new("edge-configs", FilterMode::File)
        .with_group_match_type(FilterMode::Dir);

    let selected = settings.select(&edge_inventory(), "agent-01", ["factory-north"]);

    assert_eq!(
        names(&selected),
        [
            "docker-compose.yaml",
            "edge-configs",
            "edge-configs/agent-01.env",
            "edge-configs/factory-north",
            "edge-configs/factory-north/plc.yaml",
        ]
    );
}

/// Group order decides the order of group slices.
#[test]
fn group_order_is_preserved() {
    let settings = PerDeviceConfigs::new("edge-configs", FilterMode::File)
        .with_group_match_type(FilterMode::Dir);

    let selected = settings.select(
        &edge_inventory(),
        "agent-02",
        vec!["factory-south".to_owned(), "factory-north".to_owned()],
    );

    assert_eq!(
        names(&selected),
        [
            "docker-compose.yaml",
            "edge-configs",
            "edge-configs/agent-02.env",
            "edge-configs/factory-south",
            "edge-configs/factory-south/plc.yaml",
            "edge-configs/factory-north",
            "edge-configs/factory-north/plc.yaml",
        ]
    );
}

/// Without a configured path every device receives everything.
#[test]
fn disabled_settings_select_everything() {
    let settings = PerDeviceConfigs::default();
    let base = reference_inventory();

    assert_eq!(settings.select(&base, "file1", ["folder1"]), base);
}

/// Settings reproduce the plain merge for the same criteria.
#[test]
fn selection_matches_explicit_merge() {
    let settings =
        PerDeviceConfigs::new("configs", FilterMode::File).with_group_match_type(FilterMode::Dir);
    let base = reference_inventory();

    let criteria = settings.criteria("file1", ["folder1", "folder2"]);
    assert_eq!(
        criteria,
        [
            FilterCriterion::file("file1"),
            FilterCriterion::dir("folder1"),
            FilterCriterion::dir("folder2"),
        ]
    );
    assert_eq!(
        settings.select(&base, "file1", ["folder1", "folder2"]),
        perdev::merge_filter_for_device(&base, "configs", &criteria)
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn validation() {
    assert_eq!(PerDeviceConfigs::new("configs", FilterMode::Dir).validate(), Ok(()));
    assert_eq!(PerDeviceConfigs::new("", FilterMode::Unsupported).validate(), Ok(()));
    assert_eq!(
        PerDeviceConfigs::new("configs", FilterMode::Unsupported).validate(),
        Err(PerDeviceConfigsError::UnsupportedMatchType {
            path: "configs".to_owned()
        })
    );
}

/// Strict parsing of stored tokens surfaces unknown modes.
#[test]
fn strict_mode_parsing() {
    let err = "directory".parse::<FilterMode>().unwrap_err();
    assert_eq!(err.token(), "directory");
    assert_eq!(FilterMode::from_token("directory"), FilterMode::Unsupported);
}
