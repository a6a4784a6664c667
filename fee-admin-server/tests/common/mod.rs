//! In-memory implementation of the repository and session traits.
//!
//! A session works on a private copy of the tables and publishes it on commit,
//! so dropped sessions leave no trace, like a rolled back transaction.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use fee_admin_api::{FeeConfig, TableInfo};
use fee_admin_db::models::customer::{CustomerModel, CustomerNoteModel, NewCustomer, NewCustomerNote};
use fee_admin_db::models::fee_config::{
    ConfigMatrixModel, ConfigMatrixView, CustomConfigModel, LinkedCustom, LinkedPreset, NewConfigMatrix,
    NewPresetConfig, PresetConfigModel,
};
use fee_admin_db::models::soft_delete::{SoftDeletable, Tombstone, ACTOR_MAX_LEN};
use fee_admin_db::repository::config_matrix_repository::ConfigMatrixRepository;
use fee_admin_db::repository::custom_config_repository::CustomConfigRepository;
use fee_admin_db::repository::customer_note_repository::CustomerNoteRepository;
use fee_admin_db::repository::customer_repository::CustomerRepository;
use fee_admin_db::repository::error::{RepoResult, RepositoryError};
use fee_admin_db::repository::find_by_id::FindById;
use fee_admin_db::repository::pagination::{Page, PageRequest};
use fee_admin_db::repository::preset_config_repository::PresetConfigRepository;
use fee_admin_db::repository::schema_repository::SchemaRepository;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use fee_admin_db::repository::soft_delete::SoftDelete;
use fee_admin_db::utils::bounded;
use fee_admin_server::{router, FeeAdminService};
use parking_lot::RwLock;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub customers: Vec<CustomerModel>,
    pub notes: Vec<CustomerNoteModel>,
    pub presets: Vec<PresetConfigModel>,
    pub customs: Vec<CustomConfigModel>,
    pub matrix: Vec<ConfigMatrixModel>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<RwLock<Tables>>;

fn tombstone(actor: &str) -> Option<Tombstone> {
    Some(Tombstone {
        deleted_at: Utc::now(),
        deleted_by: bounded("deleted_by", actor, ACTOR_MAX_LEN).ok(),
    })
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn search_term(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}

fn not_found_row(table: &'static str) -> RepositoryError {
    RepositoryError::InvalidRow {
        table,
        reason: "no active row to update".to_string(),
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    committed: Shared,
    unavailable: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed state, including soft-deleted rows
    pub fn snapshot(&self) -> Tables {
        self.committed.read().clone()
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    fn check_available(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for MemoryStore {
    type Session = MemorySession;

    async fn begin(&self) -> RepoResult<MemorySession> {
        self.check_available()?;
        let working: Shared = Arc::new(RwLock::new(self.committed.read().clone()));
        Ok(MemorySession {
            committed: self.committed.clone(),
            repos: MemoryRepo { tables: working },
        })
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check_available()
    }
}

pub struct MemorySession {
    committed: Shared,
    repos: MemoryRepo,
}

#[async_trait]
impl Session for MemorySession {
    fn customers(&self) -> &dyn CustomerRepository {
        &self.repos
    }

    fn customer_notes(&self) -> &dyn CustomerNoteRepository {
        &self.repos
    }

    fn preset_configs(&self) -> &dyn PresetConfigRepository {
        &self.repos
    }

    fn custom_configs(&self) -> &dyn CustomConfigRepository {
        &self.repos
    }

    fn config_matrix(&self) -> &dyn ConfigMatrixRepository {
        &self.repos
    }

    fn schema(&self) -> &dyn SchemaRepository {
        &self.repos
    }

    async fn commit(self) -> RepoResult<()> {
        let working = self.repos.tables.read().clone();
        *self.committed.write() = working;
        Ok(())
    }
}

/// One struct serves every repository trait over the session's working copy
pub struct MemoryRepo {
    tables: Shared,
}

impl MemoryRepo {
    fn view(tables: &Tables, entry: &ConfigMatrixModel) -> ConfigMatrixView {
        let customer_name = tables
            .customers
            .iter()
            .find(|c| c.is_active() && c.id == entry.customer_id)
            .map(|c| c.name.as_str().to_string());
        let preset = entry.source.preset_config_id().and_then(|id| {
            tables.presets.iter().find(|p| p.is_active() && p.id == id).map(|p| LinkedPreset {
                id: p.id,
                name: p.name.as_str().to_string(),
                config: p.config,
            })
        });
        let custom = entry.source.custom_config_id().and_then(|id| {
            tables
                .customs
                .iter()
                .find(|c| c.is_active() && c.id == id)
                .map(|c| LinkedCustom { id: c.id, config: c.config })
        });
        ConfigMatrixView::resolve(entry.clone(), customer_name, preset, custom)
    }
}

#[async_trait]
impl FindById<CustomerModel> for MemoryRepo {
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<CustomerModel>> {
        let tables = self.tables.read();
        Ok(tables.customers.iter().find(|c| c.is_active() && c.id.as_str() == id).cloned())
    }
}

#[async_trait]
impl SoftDelete<CustomerModel> for MemoryRepo {
    async fn soft_delete(&self, id: &str, actor: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        match tables.customers.iter_mut().find(|c| c.is_active() && c.id.as_str() == id) {
            Some(customer) => {
                customer.tombstone = tombstone(actor);
                customer.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl CustomerRepository for MemoryRepo {
    async fn create(&self, item: NewCustomer) -> RepoResult<CustomerModel> {
        let mut tables = self.tables.write();
        if tables.customers.iter().any(|c| c.id == item.id) {
            return Err(RepositoryError::UniqueViolation("customers_pkey".to_string()));
        }
        let now = Utc::now();
        let customer = CustomerModel {
            id: item.id,
            name: item.name,
            email: item.email,
            phone: item.phone,
            address: item.address,
            date_of_birth: item.date_of_birth,
            created_at: now,
            updated_at: now,
            tombstone: None,
        };
        tables.customers.push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, item: &CustomerModel) -> RepoResult<CustomerModel> {
        let mut tables = self.tables.write();
        let row = tables
            .customers
            .iter_mut()
            .find(|c| c.is_active() && c.id == item.id)
            .ok_or_else(|| not_found_row("customers"))?;
        *row = CustomerModel {
            updated_at: Utc::now(),
            created_at: row.created_at,
            tombstone: None,
            ..item.clone()
        };
        Ok(row.clone())
    }

    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<CustomerModel>> {
        let tables = self.tables.read();
        let term = search_term(search);
        let rows: Vec<_> = tables
            .customers
            .iter()
            .rev()
            .filter(|c| c.is_active())
            .filter(|c| term.map_or(true, |t| contains_ci(&c.name, t) || contains_ci(&c.email, t)))
            .cloned()
            .collect();
        Ok(page.slice(rows))
    }
}

#[async_trait]
impl FindById<CustomerNoteModel> for MemoryRepo {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<CustomerNoteModel>> {
        let tables = self.tables.read();
        Ok(tables.notes.iter().find(|n| n.is_active() && n.id == *id).cloned())
    }
}

#[async_trait]
impl SoftDelete<CustomerNoteModel> for MemoryRepo {
    async fn soft_delete(&self, id: &i64, actor: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        match tables.notes.iter_mut().find(|n| n.is_active() && n.id == *id) {
            Some(note) => {
                note.tombstone = tombstone(actor);
                note.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl CustomerNoteRepository for MemoryRepo {
    async fn create(&self, item: NewCustomerNote) -> RepoResult<CustomerNoteModel> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let note = CustomerNoteModel {
            id: tables.next_id(),
            customer_id: item.customer_id,
            note: item.note,
            created_at: now,
            updated_at: now,
            tombstone: None,
        };
        tables.notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, item: &CustomerNoteModel) -> RepoResult<CustomerNoteModel> {
        let mut tables = self.tables.write();
        let row = tables
            .notes
            .iter_mut()
            .find(|n| n.is_active() && n.id == item.id)
            .ok_or_else(|| not_found_row("customer_notes"))?;
        row.note = item.note.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn find_for_customer(&self, customer_id: &str, note_id: i64) -> RepoResult<Option<CustomerNoteModel>> {
        let tables = self.tables.read();
        Ok(tables
            .notes
            .iter()
            .find(|n| n.is_active() && n.id == note_id && n.customer_id.as_str() == customer_id)
            .cloned())
    }

    async fn list_for_customer(&self, customer_id: &str, page: PageRequest) -> RepoResult<Page<CustomerNoteModel>> {
        let tables = self.tables.read();
        let rows: Vec<_> = tables
            .notes
            .iter()
            .rev()
            .filter(|n| n.is_active() && n.customer_id.as_str() == customer_id)
            .cloned()
            .collect();
        Ok(page.slice(rows))
    }
}

#[async_trait]
impl FindById<PresetConfigModel> for MemoryRepo {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<PresetConfigModel>> {
        let tables = self.tables.read();
        Ok(tables.presets.iter().find(|p| p.is_active() && p.id == *id).cloned())
    }
}

#[async_trait]
impl SoftDelete<PresetConfigModel> for MemoryRepo {
    async fn soft_delete(&self, id: &i64, actor: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        match tables.presets.iter_mut().find(|p| p.is_active() && p.id == *id) {
            Some(preset) => {
                preset.tombstone = tombstone(actor);
                preset.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl PresetConfigRepository for MemoryRepo {
    async fn create(&self, item: NewPresetConfig) -> RepoResult<PresetConfigModel> {
        let mut tables = self.tables.write();
        if tables.presets.iter().any(|p| p.is_active() && p.name == item.name) {
            return Err(RepositoryError::UniqueViolation("preset_configs_name_active_key".to_string()));
        }
        let now = Utc::now();
        let preset = PresetConfigModel {
            id: tables.next_id(),
            name: item.name,
            config: item.config,
            created_at: now,
            updated_at: now,
            tombstone: None,
        };
        tables.presets.push(preset.clone());
        Ok(preset)
    }

    async fn update(&self, item: &PresetConfigModel) -> RepoResult<PresetConfigModel> {
        let mut tables = self.tables.write();
        if tables
            .presets
            .iter()
            .any(|p| p.is_active() && p.id != item.id && p.name == item.name)
        {
            return Err(RepositoryError::UniqueViolation("preset_configs_name_active_key".to_string()));
        }
        let row = tables
            .presets
            .iter_mut()
            .find(|p| p.is_active() && p.id == item.id)
            .ok_or_else(|| not_found_row("preset_configs"))?;
        row.name = item.name.clone();
        row.config = item.config;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn search(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<PresetConfigModel>> {
        let tables = self.tables.read();
        let term = search_term(search);
        let mut rows: Vec<_> = tables
            .presets
            .iter()
            .filter(|p| p.is_active())
            .filter(|p| term.map_or(true, |t| contains_ci(&p.name, t)))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(page.slice(rows))
    }
}

#[async_trait]
impl FindById<CustomConfigModel> for MemoryRepo {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<CustomConfigModel>> {
        let tables = self.tables.read();
        Ok(tables.customs.iter().find(|c| c.is_active() && c.id == *id).cloned())
    }
}

#[async_trait]
impl CustomConfigRepository for MemoryRepo {
    async fn create(&self, config: FeeConfig) -> RepoResult<CustomConfigModel> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let custom = CustomConfigModel {
            id: tables.next_id(),
            config,
            created_at: now,
            updated_at: now,
            tombstone: None,
        };
        tables.customs.push(custom.clone());
        Ok(custom)
    }

    async fn update_config(&self, id: i64, config: FeeConfig) -> RepoResult<CustomConfigModel> {
        let mut tables = self.tables.write();
        let row = tables
            .customs
            .iter_mut()
            .find(|c| c.is_active() && c.id == id)
            .ok_or_else(|| not_found_row("custom_configs"))?;
        row.config = config;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

#[async_trait]
impl FindById<ConfigMatrixModel> for MemoryRepo {
    async fn find_by_id(&self, id: &i64) -> RepoResult<Option<ConfigMatrixModel>> {
        let tables = self.tables.read();
        Ok(tables.matrix.iter().find(|m| m.is_active() && m.id == *id).cloned())
    }
}

#[async_trait]
impl SoftDelete<ConfigMatrixModel> for MemoryRepo {
    async fn soft_delete(&self, id: &i64, actor: &str) -> RepoResult<bool> {
        let mut tables = self.tables.write();
        match tables.matrix.iter_mut().find(|m| m.is_active() && m.id == *id) {
            Some(entry) => {
                entry.tombstone = tombstone(actor);
                entry.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ConfigMatrixRepository for MemoryRepo {
    async fn create(&self, item: NewConfigMatrix) -> RepoResult<ConfigMatrixModel> {
        let mut tables = self.tables.write();
        let now = Utc::now();
        let entry = ConfigMatrixModel {
            id: tables.next_id(),
            customer_id: item.customer_id,
            source: item.source,
            effective_from: item.effective_from,
            created_at: now,
            updated_at: now,
            tombstone: None,
        };
        tables.matrix.push(entry.clone());
        Ok(entry)
    }

    async fn update(&self, item: &ConfigMatrixModel) -> RepoResult<ConfigMatrixModel> {
        let mut tables = self.tables.write();
        let row = tables
            .matrix
            .iter_mut()
            .find(|m| m.is_active() && m.id == item.id)
            .ok_or_else(|| not_found_row("customer_config_matrix"))?;
        row.source = item.source;
        row.effective_from = item.effective_from;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn find_view(&self, id: i64) -> RepoResult<Option<ConfigMatrixView>> {
        let tables = self.tables.read();
        Ok(tables
            .matrix
            .iter()
            .find(|m| m.is_active() && m.id == id)
            .map(|m| Self::view(&tables, m)))
    }

    async fn list_views(&self, customer_id: Option<&str>, page: PageRequest) -> RepoResult<Page<ConfigMatrixView>> {
        let tables = self.tables.read();
        let mut rows: Vec<_> = tables
            .matrix
            .iter()
            .filter(|m| m.is_active())
            .filter(|m| customer_id.map_or(true, |id| m.customer_id.as_str() == id))
            .collect();
        rows.sort_by(|a, b| b.effective_from.cmp(&a.effective_from).then(b.id.cmp(&a.id)));
        let views: Vec<_> = rows.into_iter().map(|m| Self::view(&tables, m)).collect();
        Ok(page.slice(views))
    }

    async fn count_by_preset(&self, preset_config_id: i64) -> RepoResult<usize> {
        let tables = self.tables.read();
        Ok(tables
            .matrix
            .iter()
            .filter(|m| m.is_active() && m.source.preset_config_id() == Some(preset_config_id))
            .count())
    }
}

#[async_trait]
impl SchemaRepository for MemoryRepo {
    async fn describe_tables(&self, _sample_rows: usize) -> RepoResult<Vec<TableInfo>> {
        Ok(Vec::new())
    }
}

pub fn service(store: &MemoryStore) -> FeeAdminService<MemoryStore> {
    FeeAdminService::new(store.clone(), "api")
}

pub fn app(store: &MemoryStore) -> Router {
    router(Arc::new(service(store)))
}

/// Send one request through the router and decode the JSON response, if any
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send a raw body with a JSON content type
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
