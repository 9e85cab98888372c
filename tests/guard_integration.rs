//! Integration tests driving the crate through the JSON contract the
//! session layer ships: decode a user record, run the guards exactly the
//! way a route guard would.

use tally_access::{
    AllowList, Module, Permission, ReportId, Role, RolePolicy, UserSnapshot, all_of, any_of,
    can_open_module, can_use_capability, can_view_report,
};

fn decode(json: &str) -> UserSnapshot {
    serde_json::from_str(json).expect("valid user record")
}

#[test]
fn restricted_user_record_round_trip() {
    let user = decode(
        r#"{
            "id": "u42",
            "username": "jamie",
            "role": "user",
            "is_active": true,
            "permissions": {
                "view_dashboard": true,
                "view_sales": true,
                "create_sales": true,
                "manage_users": false
            },
            "allowed_modules": ["sales", "dashboard"],
            "allowed_reports": ["sales_monthly"]
        }"#,
    );

    assert_eq!(user.role, Role::User);
    assert!(can_use_capability(Some(&user), Permission::CreateSales));
    assert!(!can_use_capability(Some(&user), Permission::ManageUsers));
    // Absent from the override map entirely
    assert!(!can_use_capability(Some(&user), Permission::ExportData));

    assert!(can_open_module(Some(&user), Module::Sales));
    assert!(can_open_module(Some(&user), Module::Dashboard));
    assert!(!can_open_module(Some(&user), Module::Audit));

    assert!(can_view_report(Some(&user), &ReportId::from("sales_monthly")));
    assert!(!can_view_report(Some(&user), &ReportId::from("noi_summary")));

    // Re-encoding keeps the plain-array wire shape for allow-lists
    let encoded = serde_json::to_value(&user).expect("serializable");
    assert!(encoded["allowed_modules"].is_array());
    assert_eq!(encoded["allowed_reports"], serde_json::json!(["sales_monthly"]));
}

#[test]
fn missing_and_empty_allow_lists_mean_unrestricted() {
    // Gate fields omitted entirely
    let bare = decode(
        r#"{"id": "u1", "username": "alex", "role": "user", "is_active": true}"#,
    );
    assert!(bare.allowed_modules.is_unrestricted());
    assert!(bare.allowed_reports.is_unrestricted());
    for module in Module::ALL {
        assert!(can_open_module(Some(&bare), module));
    }

    // Explicit empty arrays decode the same way
    let emptied = decode(
        r#"{
            "id": "u2",
            "username": "sam",
            "role": "user",
            "is_active": true,
            "allowed_modules": [],
            "allowed_reports": []
        }"#,
    );
    assert_eq!(emptied.allowed_modules, AllowList::Unrestricted);
    assert!(can_open_module(Some(&emptied), Module::Audit));
    assert!(can_view_report(Some(&emptied), &ReportId::from("noi_summary")));

    // But permissions stay deny-by-default: no override map means no grants
    assert!(!can_use_capability(Some(&emptied), Permission::ViewDashboard));
}

#[test]
fn unknown_identifiers_fail_loudly_at_the_boundary() {
    // Unknown role
    let err = serde_json::from_str::<UserSnapshot>(
        r#"{"id": "u3", "username": "kim", "role": "superuser", "is_active": true}"#,
    );
    assert!(err.is_err());

    // Unknown permission key in the override map
    let err = serde_json::from_str::<UserSnapshot>(
        r#"{
            "id": "u3",
            "username": "kim",
            "role": "user",
            "is_active": true,
            "permissions": {"launch_missiles": true}
        }"#,
    );
    assert!(err.is_err());

    // Unknown module in the allow-list
    let err = serde_json::from_str::<UserSnapshot>(
        r#"{
            "id": "u3",
            "username": "kim",
            "role": "user",
            "is_active": true,
            "allowed_modules": ["settings"]
        }"#,
    );
    assert!(err.is_err());
}

#[test]
fn deactivated_account_is_denied_despite_grants() {
    let user = decode(
        r#"{
            "id": "u5",
            "username": "lee",
            "role": "user",
            "is_active": false,
            "permissions": {"view_sales": true, "export_data": true}
        }"#,
    );

    assert!(!can_use_capability(Some(&user), Permission::ViewSales));
    assert!(!any_of(Some(&user), &[Permission::ViewSales, Permission::ExportData]));
    assert!(!can_open_module(Some(&user), Module::Sales));
}

#[test]
fn admin_record_passes_every_guard() {
    let admin = decode(
        r#"{
            "id": "u0",
            "username": "root",
            "role": "admin",
            "is_active": false,
            "allowed_modules": ["dashboard"]
        }"#,
    );

    assert!(all_of(Some(&admin), &Permission::ALL));
    for module in Module::ALL {
        assert!(can_open_module(Some(&admin), module));
    }
    assert!(can_view_report(Some(&admin), &ReportId::from("noi_summary")));
}

#[test]
fn seeded_permission_maps_survive_the_wire() {
    let policy = RolePolicy::builtin();
    let viewer = UserSnapshot::seeded("u7", "dana", Role::Viewer, &policy);

    let json = serde_json::to_string(&viewer).expect("serializable");
    let restored = decode(&json);

    assert_eq!(restored.permissions, viewer.permissions);
    assert!(can_use_capability(Some(&restored), Permission::ViewSales));
    assert!(!can_use_capability(Some(&restored), Permission::CreateSales));
}
