use serde_json::json;

use crate::models::validation::ValidationError;
use crate::models::*;

fn project_json() -> serde_json::Value {
    json!({
        "id": "4af1c3a2-0b5e-4c8f-9a6b-1f2d3e4c5b6a",
        "workspace": "9c8b7a6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "name": "Web App",
        "description": "Customer facing site",
        "identifier": "WEB",
        "network": 2,
        "project_lead": null,
        "archive_in": 3,
        "close_in": 0,
        "sort_order": 65535.0,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-02T11:30:00.123456Z",
        "created_by": "1b2c3d4e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
        "updated_by": null,
        "archived_at": null,
        "external_id": "gh-123",
        "external_source": "github",
        "total_members": 4
    })
}

#[test]
fn test_project_deserializes_with_flattened_bases() {
    let project: Project = serde_json::from_value(project_json()).unwrap();

    assert_eq!(project.name, "Web App");
    assert_eq!(project.identifier, "WEB");
    assert_eq!(project.archive_in, Some(3));
    assert!(project.audit.created_by.is_some());
    assert!(project.audit.updated_by.is_none());
    assert!(project.lifecycle.is_active());
    assert_eq!(project.external.external_source.as_deref(), Some("github"));
    assert!(project.validate().is_ok());
}

#[test]
fn test_project_validation_rejects_bad_fields() {
    let mut project: Project = serde_json::from_value(project_json()).unwrap();
    project.identifier = "web".to_string();
    assert!(matches!(
        project.validate(),
        Err(ValidationError::InvalidCharacters { field: "identifier", .. })
    ));

    let mut project: Project = serde_json::from_value(project_json()).unwrap();
    project.close_in = Some(13);
    assert_eq!(
        project.validate(),
        Err(ValidationError::OutOfRange {
            field: "close_in",
            min: 0,
            max: 12,
            actual: 13
        })
    );

    let mut project: Project = serde_json::from_value(project_json()).unwrap();
    project.external.external_id = Some("x".repeat(256));
    assert!(matches!(
        project.validate(),
        Err(ValidationError::TooLong { field: "external_id", .. })
    ));
}

#[test]
fn test_normalize_identifier() {
    assert_eq!(normalize_identifier("web app"), "WEBAPP");
    assert_eq!(normalize_identifier(" ops_2 "), "OPS_2");
    assert_eq!(normalize_identifier("API"), "API");
}

#[test]
fn test_validate_identifier_limits() {
    assert!(validate_identifier("PROJ_2024").is_ok());
    assert!(validate_identifier("ABCDEFGHIJKL").is_ok());
    assert!(matches!(
        validate_identifier("ABCDEFGHIJKLM"),
        Err(ValidationError::TooLong { max: 12, .. })
    ));
    assert!(matches!(
        validate_identifier("WEB-1"),
        Err(ValidationError::InvalidCharacters { .. })
    ));
    assert!(matches!(
        validate_identifier(""),
        Err(ValidationError::Empty { .. })
    ));
}

#[test]
fn test_lifecycle_state() {
    let active = Lifecycle::default();
    assert!(active.is_active());

    let archived: Lifecycle =
        serde_json::from_value(json!({"archived_at": "2024-06-01T00:00:00Z"})).unwrap();
    assert!(archived.is_archived());
    assert!(!archived.is_deleted());
    assert!(!archived.is_active());

    let deleted: Lifecycle =
        serde_json::from_value(json!({"deleted_at": "2024-06-01T00:00:00Z"})).unwrap();
    assert!(deleted.is_deleted());
    assert!(!deleted.is_active());
}

#[test]
fn test_issue_point_range() {
    let mut issue: Issue = serde_json::from_value(json!({
        "id": "0d9f8e7c-6b5a-4c3d-9e2f-1a0b9c8d7e6f",
        "workspace": "9c8b7a6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "project": "4af1c3a2-0b5e-4c8f-9a6b-1f2d3e4c5b6a",
        "name": "Fix login redirect",
        "sequence_id": 42,
        "priority": "high",
        "assignees": [],
        "labels": ["5a4b3c2d-1e0f-4a9b-8c7d-6e5f4a3b2c1d"],
        "point": 5,
        "start_date": "2024-05-10",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(issue.priority, Some(Priority::High));
    assert_eq!(issue.labels.as_ref().map(Vec::len), Some(1));
    assert!(issue.validate().is_ok());

    issue.point = Some(13);
    assert!(matches!(
        issue.validate(),
        Err(ValidationError::OutOfRange { field: "point", .. })
    ));
}

#[test]
fn test_state_slug_and_group() {
    let mut state: State = serde_json::from_value(json!({
        "id": "7e6d5c4b-3a2f-4e1d-8c0b-9a8f7e6d5c4b",
        "workspace": "9c8b7a6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "project": "4af1c3a2-0b5e-4c8f-9a6b-1f2d3e4c5b6a",
        "name": "In Review",
        "color": "#F59E0B",
        "slug": "in-review",
        "group": "started",
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(state.group, Some(StateGroup::Started));
    assert!(state.validate().is_ok());

    state.slug = Some("in review".to_string());
    assert!(matches!(
        state.validate(),
        Err(ValidationError::InvalidCharacters { field: "slug", .. })
    ));
}

#[test]
fn test_cycle_counts_are_flattened() {
    let cycle: Cycle = serde_json::from_value(json!({
        "id": "2c1b0a9f-8e7d-4c6b-9a5f-4e3d2c1b0a9f",
        "workspace": "9c8b7a6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "project": "4af1c3a2-0b5e-4c8f-9a6b-1f2d3e4c5b6a",
        "name": "Sprint 7",
        "start_date": "2024-05-06T00:00:00Z",
        "end_date": "2024-05-20T00:00:00Z",
        "total_issues": 12,
        "completed_issues": 5,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    }))
    .unwrap();

    assert_eq!(cycle.counts.total_issues, Some(12));
    assert_eq!(cycle.counts.completed_issues, Some(5));
    assert_eq!(cycle.counts.backlog_issues, None);
    assert!(cycle.validate().is_ok());
}

#[test]
fn test_closed_vocabularies_use_wire_names() {
    assert_eq!(serde_json::to_value(Priority::None).unwrap(), json!("none"));
    assert_eq!(
        serde_json::to_value(StateGroup::Cancelled).unwrap(),
        json!("cancelled")
    );
    assert!(serde_json::from_value::<StateGroup>(json!("triage")).is_err());
}

#[test]
fn test_worklog_deserializes() {
    let worklog: WorkLog = serde_json::from_value(json!({
        "id": "6f5e4d3c-2b1a-4f0e-9d8c-7b6a5f4e3d2c",
        "issue": "0d9f8e7c-6b5a-4c3d-9e2f-1a0b9c8d7e6f",
        "project": "4af1c3a2-0b5e-4c8f-9a6b-1f2d3e4c5b6a",
        "workspace": "9c8b7a6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
        "duration": 90,
        "description": "Pairing on auth flow",
        "logged_at": "2024-05-03T14:00:00Z",
        "created_at": "2024-05-03T15:00:00Z",
        "updated_at": "2024-05-03T15:00:00Z"
    }))
    .unwrap();

    assert_eq!(worklog.duration, 90);
    assert!(worklog.user.is_none());
    assert!(serde_json::from_value::<WorkLog>(json!({"duration": -5})).is_err());
}

// =============================================================================
// Field helpers
// =============================================================================

mod helpers {
    use crate::models::validation::*;

    #[test]
    fn test_max_chars_counts_characters_not_bytes() {
        assert!(max_chars("name", &"é".repeat(255), NAME_MAX).is_ok());
        assert_eq!(
            max_chars("name", &"é".repeat(256), NAME_MAX),
            Err(ValidationError::TooLong {
                field: "name",
                max: 255,
                actual: 256
            })
        );
        assert!(optional_max_chars("name", None, 1).is_ok());
    }

    #[test]
    fn test_not_empty_rejects_whitespace() {
        assert_eq!(
            not_empty("name", "   "),
            Err(ValidationError::Empty { field: "name" })
        );
        assert!(not_empty("name", "x").is_ok());
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative("duration", 0.0).is_ok());
        assert!(non_negative("duration", 1.25).is_ok());
        assert!(non_negative("duration", f64::NAN).is_err());

        let err = non_negative("duration", -0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "duration must be a non-negative number (got -0.5)"
        );
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(in_range("estimate_point", 0, 0, 12).is_ok());
        assert!(in_range("estimate_point", 12, 0, 12).is_ok());
        assert!(in_range("estimate_point", -1, 0, 12).is_err());
        assert!(optional_in_range("estimate_point", None, 0, 12).is_ok());
    }

    #[test]
    fn test_charset_reports_offending_value() {
        let err = charset("slug", "a b", "lowercase letters", |c| c.is_ascii_lowercase())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidCharacters {
                field: "slug",
                allowed: "lowercase letters",
                value: "a b".to_string()
            }
        );
    }
}
