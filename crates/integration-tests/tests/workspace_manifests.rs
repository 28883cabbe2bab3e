//! Every crate manifest must inherit only dependencies the workspace declares.

const WORKSPACE: &str = include_str!("../../../Cargo.toml");

const MEMBERS: &[(&str, &str)] = &[
    ("core", include_str!("../../core/Cargo.toml")),
    ("admin", include_str!("../../admin/Cargo.toml")),
    ("cli", include_str!("../../cli/Cargo.toml")),
    ("integration-tests", include_str!("../Cargo.toml")),
];

fn inherited(manifest: &str) -> impl Iterator<Item = &str> {
    manifest
        .lines()
        .filter(|line| line.contains("workspace = true }"))
        .filter_map(|line| line.split_once(" = ").map(|(name, _)| name.trim()))
}

#[test]
fn test_inherited_dependencies_exist_in_workspace() {
    for (member, manifest) in MEMBERS {
        for name in inherited(manifest) {
            assert!(
                WORKSPACE.lines().any(|line| line.starts_with(&format!("{name} = "))),
                "{member} inherits `{name}`, which the workspace does not declare"
            );
        }
    }
}

#[test]
fn test_admin_declares_its_observability_crates() {
    let admin: Vec<_> = inherited(MEMBERS[1].1).collect();
    for name in ["sentry", "sentry-tower", "tracing", "tracing-subscriber"] {
        assert!(admin.contains(&name), "admin is missing `{name}`");
    }
}
