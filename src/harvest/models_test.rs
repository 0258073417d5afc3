//! Tests for response decoding and query construction.

use serde_json::json;

use crate::harvest::models::{
    ClientFilter, Company, Project, ProjectFilter, TimeEntry, TimeEntryFilter, TimeEntryList,
    TimeEntryPayload, UserList,
};

#[test]
fn test_decode_company() {
    let company: Company = serde_json::from_value(json!({
        "base_uri": "https://acme.harvestapp.com",
        "full_domain": "acme.harvestapp.com",
        "name": "Acme Agency",
        "is_active": true,
        "week_start_day": "Monday",
        "time_format": "decimal",
        "date_format": "%Y-%m-%d",
        "plan_type": "standard",
        "clock": "24h",
        "currency": "EUR",
        "unknown_future_field": 42
    }))
    .unwrap();

    assert_eq!(company.name, "Acme Agency");
    assert_eq!(company.base_uri, "https://acme.harvestapp.com");
    assert_eq!(company.currency, "EUR");
}

#[test]
fn test_decode_project_with_embedded_client() {
    let project: Project = serde_json::from_value(json!({
        "id": 14308069,
        "name": "Online Store - Phase 1",
        "code": "OS1",
        "is_active": true,
        "is_billable": true,
        "bill_by": "Project",
        "budget": 200.0,
        "hourly_rate": 100.0,
        "client": {"id": 5735776, "name": "123 Industries", "currency": "EUR"}
    }))
    .unwrap();

    assert_eq!(project.id, 14308069);
    assert_eq!(project.code.as_deref(), Some("OS1"));
    assert_eq!(project.hourly_rate, Some(100.0));
    let client = project.client.unwrap();
    assert_eq!(client.id, 5735776);
    assert_eq!(client.name, "123 Industries");
}

#[test]
fn test_decode_time_entry_with_truncated_embeds() {
    // Harvest embeds truncated copies of related resources in list responses.
    let entry: TimeEntry = serde_json::from_value(json!({
        "id": 636709355,
        "spent_date": "2017-03-02",
        "hours": 2.11,
        "rounded_hours": 2.25,
        "notes": "Adding CSS styling",
        "is_locked": true,
        "locked_reason": "Item Approved and Locked for this Time Period",
        "billable": true,
        "user": {"id": 1782959, "first_name": "Kim", "last_name": "Allen"},
        "project": {"id": 14307913, "name": "Marketing Website"},
        "task": {"id": 8083365, "name": "Graphic Design"}
    }))
    .unwrap();

    assert_eq!(entry.id, 636709355);
    assert_eq!(entry.spent_date, "2017-03-02");
    assert_eq!(entry.rounded_hours, 2.25);
    assert_eq!(entry.user.as_ref().unwrap().first_name, "Kim");
    assert_eq!(entry.project.as_ref().unwrap().name, "Marketing Website");
}

#[test]
fn test_decode_list_envelope_flattens_pagination() {
    let list: TimeEntryList = serde_json::from_value(json!({
        "time_entries": [{"id": 1, "spent_date": "2024-01-01", "hours": 1.0}],
        "per_page": 100,
        "total_pages": 3,
        "total_entries": 250,
        "next_page": 2,
        "previous_page": null,
        "page": 1,
        "links": {
            "first": "https://api.harvestapp.com/v2/time_entries?page=1",
            "next": "https://api.harvestapp.com/v2/time_entries?page=2",
            "previous": null,
            "last": "https://api.harvestapp.com/v2/time_entries?page=3"
        }
    }))
    .unwrap();

    assert_eq!(list.time_entries.len(), 1);
    assert_eq!(list.pagination.total_entries, 250);
    assert_eq!(list.pagination.next_page, Some(2));
    assert!(list.pagination.links.unwrap().previous.is_none());
}

#[test]
fn test_decode_empty_user_list() {
    let list: UserList = serde_json::from_value(json!({"users": [], "total_entries": 0})).unwrap();
    assert!(list.users.is_empty());
    assert_eq!(list.pagination.total_entries, 0);
}

// =============================================================================
// Query construction: absent/falsy filters must be omitted entirely
// =============================================================================

#[test]
fn test_client_filter_empty_produces_no_pairs() {
    assert!(ClientFilter::default().to_query().is_empty());
}

#[test]
fn test_client_filter_omits_empty_name_and_false_flag() {
    let filter = ClientFilter {
        name: Some("".to_string()),
        is_active: Some(false),
    };
    assert!(filter.to_query().is_empty());
}

#[test]
fn test_client_filter_includes_present_values() {
    let filter = ClientFilter {
        name: Some("Acme".to_string()),
        is_active: Some(true),
    };
    assert_eq!(
        filter.to_query(),
        vec![
            ("name", "Acme".to_string()),
            ("is_active", "true".to_string())
        ]
    );
}

#[test]
fn test_project_filter_omits_zero_client_id() {
    let filter = ProjectFilter {
        client_id: Some(0),
        name: None,
        is_active: None,
    };
    assert!(filter.to_query().is_empty());
}

#[test]
fn test_project_filter_includes_client_id() {
    let filter = ProjectFilter {
        client_id: Some(5735776),
        name: Some("Store".to_string()),
        is_active: Some(true),
    };
    assert_eq!(
        filter.to_query(),
        vec![
            ("client_id", "5735776".to_string()),
            ("name", "Store".to_string()),
            ("is_active", "true".to_string())
        ]
    );
}

#[test]
fn test_time_entry_filter_omits_absent_values() {
    let filter = TimeEntryFilter {
        project_id: Some(14307913),
        from: Some("2024-01-01".to_string()),
        to: Some("".to_string()),
        ..Default::default()
    };
    assert_eq!(
        filter.to_query(),
        vec![
            ("project_id", "14307913".to_string()),
            ("from", "2024-01-01".to_string())
        ]
    );
}

// =============================================================================
// Request body serialization
// =============================================================================

#[test]
fn test_payload_skips_absent_optional_fields() {
    let payload = TimeEntryPayload {
        project_id: 14307913,
        task_id: 8083365,
        user_id: None,
        spent_date: "2024-01-01".to_string(),
        hours: 2.0,
        notes: None,
    };

    let value = serde_json::to_value(&payload).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("user_id"));
    assert!(!object.contains_key("notes"));
    assert_eq!(object["project_id"], 14307913);
    assert_eq!(object["spent_date"], "2024-01-01");
}

#[test]
fn test_payload_includes_present_optional_fields() {
    let payload = TimeEntryPayload {
        project_id: 1,
        task_id: 2,
        user_id: Some(3),
        spent_date: "2024-01-01".to_string(),
        hours: 1.5,
        notes: Some("standup".to_string()),
    };

    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["user_id"], 3);
    assert_eq!(value["notes"], "standup");
    assert_eq!(value["hours"], 1.5);
}
