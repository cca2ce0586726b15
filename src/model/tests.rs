use serde_json::json;

use super::*;

#[test]
fn domain_page() {
    let page: Page<Domain> = serde_json::from_value(json!({
        "totalRecords": 2,
        "totalPages": 1,
        "page": 0,
        "data": [
            {"id": 1119443, "name": "example.com", "folderId": 1990, "gtdEnabled": false},
            {"id": "1119444", "name": "example.org", "pendingActionId": 0}
        ]
    }))
    .unwrap();

    assert_eq!(page.total_records, Some(2));
    assert_eq!(page.page, Some(0));
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].folder_id, Some(1990));
    assert_eq!(page.data[1].id, 1119444);
    assert!(!page.data[1].gtd_enabled);
}

#[test]
fn empty_page() {
    let page: Page<TransferAcl> = serde_json::from_value(json!({})).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total_pages, None);
}

#[test]
fn soa_record_body() {
    let soa = SoaRecord {
        id: None,
        name: "PHPLibraryTest".to_string(),
        email: "php.library.com".to_string(),
        comp: "ns.phplibrarytest.com".to_string(),
        ttl: 86400,
        serial: 2012020203,
        refresh: 14400,
        retry: 1800,
        expire: 86400,
        negative_cache: 1800,
    };

    let value = serde_json::to_value(&soa).unwrap();
    assert_eq!(value["negativeCache"], 1800);
    assert!(value.get("id").is_none());

    let mut created = value.clone();
    created["id"] = json!(42);
    let back: SoaRecord = serde_json::from_value(created).unwrap();
    assert_eq!(back.id, Some(42));
    assert_eq!(back.name, soa.name);
}

#[test]
fn soa_record_string_numbers() {
    let soa: SoaRecord = serde_json::from_value(json!({
        "id": "7",
        "name": "PHPLibraryTest",
        "email": "php.library.com",
        "comp": "ns.phplibrarytest.com",
        "ttl": "86400",
        "serial": "2012020203",
        "refresh": 14400,
        "retry": "1800",
        "expire": "86400",
        "negativeCache": "1800"
    }))
    .unwrap();

    assert_eq!(soa.id, Some(7));
    assert_eq!(soa.ttl, 86400);
    assert_eq!(soa.serial, 2012020203);
    assert_eq!(soa.refresh, 14400);
    assert_eq!(soa.retry, 1800);
    assert_eq!(soa.negative_cache, 1800);

    let bad = serde_json::from_value::<SoaRecord>(json!({
        "name": "x", "email": "x", "comp": "x", "ttl": "a day",
        "serial": 1, "refresh": 1, "retry": 1, "expire": 1, "negativeCache": 1
    }));
    assert!(bad.is_err());
}

#[test]
fn transfer_acl() {
    let acl: TransferAcl = serde_json::from_value(json!({
        "id": 3001,
        "name": "secondaries",
        "ips": ["192.0.2.1", "198.51.100.7"]
    }))
    .unwrap();
    assert_eq!(acl.id, Some(3001));
    assert_eq!(acl.ips.len(), 2);
}
