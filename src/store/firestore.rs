use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::config::FirestoreConfig;
use crate::error::{FetchFailure, StoreError};
use crate::projects::Project;
use crate::store::ProjectRepository;

const ORDER_FIELD: &str = "createdAt";

/// Reads projects through the Firestore REST `runQuery` endpoint.
pub struct FirestoreRepository {
    client: reqwest::Client,
    endpoint: Url,
    collection: String,
}

impl FirestoreRepository {
    /// # Errors
    ///
    /// Fails when the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &FirestoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // Without a trailing slash `join` would replace the last base segment.
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let mut endpoint = Url::parse(&base)?.join(&format!(
            "v1/projects/{}/databases/{}/documents:runQuery",
            urlencoding::encode(&config.project_id),
            urlencoding::encode(&config.database)
        ))?;

        if let Some(key) = &config.api_key {
            endpoint.query_pairs_mut().append_pair("key", key);
        }

        Ok(Self {
            client,
            endpoint,
            collection: config.collection.clone(),
        })
    }

    fn query_body(&self) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.collection }],
                "orderBy": [{
                    "field": { "fieldPath": ORDER_FIELD },
                    "direction": "DESCENDING"
                }]
            }
        })
    }
}

#[async_trait]
impl ProjectRepository for FirestoreRepository {
    fn name(&self) -> &'static str {
        "firestore"
    }

    #[tracing::instrument(skip(self), fields(collection = %self.collection))]
    async fn list_projects(&self) -> Result<Vec<Project>, FetchFailure> {
        let results: Vec<RunQueryResult> = self
            .client
            .post(self.endpoint.clone())
            .header(USER_AGENT, "teddverse/1.0")
            .json(&self.query_body())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let projects = results
            .into_iter()
            .filter_map(|r| r.document)
            .map(Project::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(count = projects.len(), "fetched projects");
        Ok(projects)
    }
}

/// One element of the `runQuery` response stream. Entries that only carry
/// a `readTime` have no document.
#[derive(Debug, Deserialize)]
struct RunQueryResult {
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

impl Document {
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn string(&self, field: &str) -> Option<String> {
        self.fields
            .get(field)?
            .get("stringValue")?
            .as_str()
            .map(str::to_owned)
    }

    fn strings(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .and_then(|v| v.get("arrayValue"))
            .and_then(|v| v.get("values"))
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.get("stringValue")?.as_str())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        let raw = self.fields.get(field)?.get("timestampValue")?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

impl TryFrom<Document> for Project {
    type Error = FetchFailure;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let created_at = doc.timestamp(ORDER_FIELD).ok_or_else(|| {
            FetchFailure::Malformed(format!("document {} has no {ORDER_FIELD}", doc.name))
        })?;

        Ok(Project {
            id: doc.id().to_owned(),
            title: doc.string("title").unwrap_or_default(),
            about: doc.string("about").unwrap_or_default(),
            image_name: doc.string("imageName").unwrap_or_default(),
            tags: doc.strings("tags"),
            live_link: doc.string("liveLink"),
            source_link: doc.string("sourceLink"),
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const QUERY_PATH: &str = "/v1/projects/teddverse/databases/%28default%29/documents:runQuery";

    fn repository(server: &MockServer) -> FirestoreRepository {
        let mut config = FirestoreConfig::new("teddverse");
        config.base_url = server.uri();
        FirestoreRepository::new(&config).unwrap()
    }

    fn document(id: &str, title: &str, created_at: &str) -> Value {
        json!({
            "document": {
                "name": format!("projects/teddverse/databases/(default)/documents/projects/{id}"),
                "fields": {
                    "title": { "stringValue": title },
                    "about": { "stringValue": format!("About {title}") },
                    "imageName": { "stringValue": format!("{id}.png") },
                    "createdAt": { "timestampValue": created_at }
                },
                "createTime": created_at,
                "updateTime": created_at
            },
            "readTime": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn sends_ordered_structured_query() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .and(header("User-Agent", "teddverse/1.0"))
            .and(body_partial_json(json!({
                "structuredQuery": {
                    "from": [{ "collectionId": "projects" }],
                    "orderBy": [{
                        "field": { "fieldPath": "createdAt" },
                        "direction": "DESCENDING"
                    }]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let projects = repository(&server).list_projects().await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn decodes_documents_in_response_order() {
        let server = MockServer::start().await;

        let mut alpha = document("1", "Alpha", "2024-06-01T12:00:00Z");
        alpha["document"]["fields"]["liveLink"] = json!({ "stringValue": "https://a" });
        alpha["document"]["fields"]["tags"] = json!({
            "arrayValue": { "values": [{ "stringValue": "a" }, { "stringValue": "b" }] }
        });
        let beta = document("2", "Beta", "2024-01-01T12:00:00Z");

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([alpha, beta])))
            .mount(&server)
            .await;

        let projects = repository(&server).list_projects().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].id, "1");
        assert_eq!(projects[0].title, "Alpha");
        assert_eq!(projects[0].image_name, "1.png");
        assert_eq!(projects[0].tags, vec!["a", "b"]);
        assert_eq!(projects[0].live_link(), Some("https://a"));
        assert!(projects[0].source_link().is_none());
        assert_eq!(projects[1].title, "Beta");
        assert!(projects[1].tags.is_empty());
        assert!(projects[0].created_at > projects[1].created_at);
    }

    #[tokio::test]
    async fn empty_array_value_has_no_tags() {
        let server = MockServer::start().await;

        let mut doc = document("1", "Alpha", "2024-06-01T12:00:00Z");
        doc["document"]["fields"]["tags"] = json!({ "arrayValue": {} });

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([doc])))
            .mount(&server)
            .await;

        let projects = repository(&server).list_projects().await.unwrap();
        assert!(projects[0].tags.is_empty());
    }

    #[tokio::test]
    async fn read_time_only_response_is_empty() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{ "readTime": "2025-01-01T00:00:00Z" }])),
            )
            .mount(&server)
            .await;

        let projects = repository(&server).list_projects().await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn appends_api_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .and(query_param("key", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = FirestoreConfig::new("teddverse");
        config.base_url = server.uri();
        config.api_key = Some("secret".to_string());

        let repository = FirestoreRepository::new(&config).unwrap();
        assert!(repository.list_projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_status_is_a_fetch_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let result = repository(&server).list_projects().await;
        assert!(matches!(result, Err(FetchFailure::Http(_))));
    }

    #[tokio::test]
    async fn missing_created_at_is_malformed() {
        let server = MockServer::start().await;

        let mut doc = document("1", "Alpha", "2024-06-01T12:00:00Z");
        doc["document"]["fields"]
            .as_object_mut()
            .unwrap()
            .remove("createdAt");

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([doc])))
            .mount(&server)
            .await;

        let result = repository(&server).list_projects().await;
        assert!(matches!(result, Err(FetchFailure::Malformed(_))));
    }

    #[tokio::test]
    async fn slow_store_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(QUERY_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([]))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = FirestoreConfig::new("teddverse");
        config.base_url = server.uri();
        config.timeout_secs = 1;

        let result = FirestoreRepository::new(&config)
            .unwrap()
            .list_projects()
            .await;

        assert!(matches!(result, Err(FetchFailure::Http(e)) if e.is_timeout()));
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_ids() {
        let mut config = FirestoreConfig::new("tedd verse");
        config.base_url = "http://localhost:8080/firestore".to_string();
        config.database = "main/db".to_string();

        let repository = FirestoreRepository::new(&config).unwrap();

        assert_eq!(
            repository.endpoint.as_str(),
            "http://localhost:8080/firestore/v1/projects/tedd%20verse/databases/main%2Fdb/documents:runQuery"
        );
    }

    #[test]
    fn endpoint_accepts_base_with_trailing_slash() {
        let mut config = FirestoreConfig::new("teddverse");
        config.base_url = "http://localhost:8080/firestore/".to_string();

        let repository = FirestoreRepository::new(&config).unwrap();

        assert_eq!(
            repository.endpoint.path(),
            "/firestore/v1/projects/teddverse/databases/%28default%29/documents:runQuery"
        );
    }

    #[tokio::test]
    async fn queries_under_base_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/firestore{QUERY_PATH}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = FirestoreConfig::new("teddverse");
        config.base_url = format!("{}/firestore", server.uri());

        let repository = FirestoreRepository::new(&config).unwrap();
        assert!(repository.list_projects().await.unwrap().is_empty());
    }

    #[test]
    fn document_id_is_last_path_segment() {
        let doc = Document {
            name: "projects/p/databases/(default)/documents/projects/xyz".to_string(),
            fields: HashMap::new(),
        };
        assert_eq!(doc.id(), "xyz");
    }
}
