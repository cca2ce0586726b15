use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::thread;

use dnsmadeeasy::model::{Page, SoaRecord, TransferAcl};
use dnsmadeeasy::transport::{HttpRequest, HttpResponse, Transport};
use dnsmadeeasy::{Client, ClientError, ConfigError, TransportError};
use reqwest::{Method, StatusCode};
use serde_json::{Value as JsonValue, json};

/// In-memory stand-in for the API: stores whatever is posted to a
/// collection and serves it back by id.
#[derive(Default)]
struct State {
    next_id: i64,
    items: BTreeMap<(String, i64), JsonValue>,
    requests: Vec<HttpRequest>,
}

#[derive(Clone, Default)]
struct FakeServer {
    state: Arc<Mutex<State>>,
}

impl FakeServer {
    fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    fn not_found() -> HttpResponse {
        HttpResponse::new(
            StatusCode::NOT_FOUND,
            json!({"error": ["Resource not found."]}).to_string(),
        )
    }
}

impl Transport for FakeServer {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());

        if request.header("x-dnsme-apiKey").is_none() || request.header("x-dnsme-hmac").is_none()
        {
            return Ok(HttpResponse::new(StatusCode::FORBIDDEN, ""));
        }

        let path = request
            .url
            .path()
            .strip_prefix("/V2.0")
            .unwrap_or_default()
            .to_string();
        let (collection, id) = match path.rsplit_once('/') {
            Some((collection, id)) => match id.parse::<i64>() {
                Ok(id) => (collection.to_string(), Some(id)),
                Err(_) => (path.clone(), None),
            },
            None => (path.clone(), None),
        };

        Ok(match (request.method.clone(), id) {
            (Method::GET, None) => {
                let data: Vec<_> = state
                    .items
                    .iter()
                    .filter(|((c, _), _)| *c == collection)
                    .map(|(_, v)| v.clone())
                    .collect();
                let body = json!({
                    "data": data,
                    "page": 0,
                    "totalPages": 1,
                    "totalRecords": data.len(),
                });
                HttpResponse::new(StatusCode::OK, body.to_string())
            }
            (Method::POST, None) => {
                state.next_id += 1;
                let id = state.next_id;
                let mut item = request.body.clone().unwrap_or_else(|| json!({}));
                item["id"] = json!(id);
                state.items.insert((collection, id), item.clone());
                HttpResponse::new(StatusCode::CREATED, item.to_string())
            }
            (Method::GET, Some(id)) => match state.items.get(&(collection, id)) {
                Some(item) => HttpResponse::new(StatusCode::OK, item.to_string()),
                None => Self::not_found(),
            },
            (Method::PUT, Some(id)) => {
                let key = (collection, id);
                if !state.items.contains_key(&key) {
                    return Ok(Self::not_found());
                }
                let mut item = request.body.clone().unwrap_or_else(|| json!({}));
                item["id"] = json!(id);
                state.items.insert(key, item);
                HttpResponse::new(StatusCode::OK, "")
            }
            (Method::DELETE, Some(id)) => match state.items.remove(&(collection, id)) {
                Some(_) => HttpResponse::new(StatusCode::OK, ""),
                None => Self::not_found(),
            },
            _ => HttpResponse::new(StatusCode::METHOD_NOT_ALLOWED, ""),
        })
    }
}

fn client(server: &FakeServer) -> Client {
    Client::builder()
        .api_key("my-api-key")
        .secret_key("my-secret")
        .sandbox(true)
        .transport(server.clone())
        .build()
        .unwrap()
}

fn soa() -> SoaRecord {
    SoaRecord {
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
    }
}

#[test]
fn soa_round_trip() {
    let server = FakeServer::default();
    let client = client(&server);
    let soa_records = client.soa_records();

    let created = soa_records.add(&soa()).unwrap();
    assert!(created.success());
    let id = created.id().unwrap();

    let fetched: SoaRecord = soa_records.get(id).unwrap().json().unwrap();
    assert_eq!(fetched, SoaRecord { id: Some(id), ..soa() });

    let updated = SoaRecord {
        email: "php2.library.com".to_string(),
        ..fetched
    };
    assert!(soa_records.update(id, &updated).unwrap().success());
    let fetched: SoaRecord = soa_records.get(id).unwrap().json().unwrap();
    assert_eq!(fetched.email, "php2.library.com");

    let page: Page<SoaRecord> = soa_records.list(Some(10), None).unwrap().json().unwrap();
    assert_eq!(page.total_records, Some(1));
    assert_eq!(page.data[0].name, "PHPLibraryTest");

    assert!(soa_records.delete(id).unwrap().success());

    let gone = soa_records.get(id).unwrap();
    assert!(!gone.success());
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    assert_eq!(gone.body().unwrap()["error"][0], "Resource not found.");

    let err = gone.error_for_status().unwrap_err();
    assert_eq!(err.messages(), ["Resource not found.".to_string()]);
}

#[test]
fn transfer_acl_round_trip() {
    let server = FakeServer::default();
    let client = client(&server);

    let acl = TransferAcl {
        id: None,
        name: "secondaries".to_string(),
        ips: vec!["192.0.2.1".to_string(), "198.51.100.7".to_string()],
    };
    let id = client.transfer_acl().add(&acl).unwrap().id().unwrap();

    let fetched: TransferAcl = client.transfer_acl().get(id).unwrap().json().unwrap();
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.name, acl.name);
    assert_eq!(fetched.ips, acl.ips);

    let state = server.state.lock().unwrap();
    let requests = &state.requests;
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url.as_str(),
        "https://api.sandbox.dnsmadeeasy.com/V2.0/dns/transferAcl"
    );
    assert_eq!(requests[0].header("x-dnsme-apiKey"), Some("my-api-key"));
    assert_eq!(requests[1].header("content-type"), Some("application/json"));
}

#[test]
fn empty_credentials_never_reach_the_server() {
    let server = FakeServer::default();
    let client = Client::builder()
        .api_key("")
        .secret_key("")
        .transport(server.clone())
        .build()
        .unwrap();

    let err = client.domains().list(None, None).unwrap_err();
    assert!(matches!(err, ClientError::Config(ConfigError::EmptyApiKey)));
    assert_eq!(server.request_count(), 0);
}

#[test]
fn builder_requires_credentials() {
    let err = Client::builder().api_key("key").build().err().unwrap();
    assert!(matches!(
        err,
        ClientError::Config(ConfigError::MissingField(ref field)) if field == "secret_key"
    ));

    let err = Client::builder().secret_key("secret").build().err().unwrap();
    assert!(matches!(
        err,
        ClientError::Config(ConfigError::MissingField(ref field)) if field == "api_key"
    ));
}

#[test]
fn runtime_toggles() {
    let server = FakeServer::default();
    let mut client = client(&server);

    assert!(client.configuration().using_sandbox());
    client.use_sandbox(false);
    assert!(!client.configuration().using_sandbox());
    assert_eq!(client.configuration().url(), "https://api.dnsmadeeasy.com/V2.0");

    client.debug(true);
    assert!(client.configuration().debug());
    client.folders().list(None, None).unwrap();
    client.debug(false);
    assert!(!client.configuration().debug());

    assert_eq!(
        server.state.lock().unwrap().requests[0].url.as_str(),
        "https://api.dnsmadeeasy.com/V2.0/security/folder"
    );
}

#[test]
fn managers_cover_their_paths() {
    let server = FakeServer::default();
    let client = client(&server);

    assert_eq!(client.domains().path(), "/dns/managed");
    assert_eq!(client.records(5).path(), "/dns/managed/5/records");
    assert_eq!(client.soa_records().path(), "/dns/soa");
    assert_eq!(client.vanity_dns().path(), "/dns/vanity");
    assert_eq!(client.templates().path(), "/dns/template");
    assert_eq!(client.template_records(8).path(), "/dns/template/8/records");
    assert_eq!(client.transfer_acl().path(), "/dns/transferAcl");
    assert_eq!(client.folders().path(), "/security/folder");
    assert_eq!(client.secondary().path(), "/dns/secondary");
    assert_eq!(client.secondary_ip_sets().path(), "/dns/secondary/ipSet");
}

#[test]
fn client_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();

    let server = FakeServer::default();
    let client = client(&server);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let page: Page<JsonValue> = client.folders().list(None, None).unwrap().json().unwrap();
                assert!(page.data.is_empty());
            });
        }
    });
    assert_eq!(server.request_count(), 4);
}
