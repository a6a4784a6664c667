use fee_admin_api::{
    validate_page, ApiError, ApiResult, ConfigMatrixCreate, ConfigMatrixListQuery, ConfigMatrixListResponse,
    ConfigMatrixOut, ConfigMatrixUpdate, FeeConfig, SourceRequest,
};
use fee_admin_db::models::fee_config::{ConfigSource, NewConfigMatrix};
use fee_admin_db::repository::pagination::PageRequest;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use tracing::{debug, info};

use super::customer::CUSTOMER_NOT_FOUND;
use super::preset_config::PRESET_NOT_FOUND;
use super::FeeAdminService;

const ENTRY_NOT_FOUND: &str = "Config matrix entry not found";

/// Turn a requested source into a stored one, creating a custom config row when needed.
///
/// `current` is the entry's existing source. A custom payload replacing a custom
/// source overwrites that row in place as long as it is still active.
async fn resolve_source<S: Session>(
    session: &S,
    requested: SourceRequest,
    current: Option<ConfigSource>,
) -> ApiResult<ConfigSource> {
    match requested {
        SourceRequest::Preset(preset_id) => {
            if session.preset_configs().find_by_id(&preset_id).await?.is_none() {
                return Err(ApiError::not_found(PRESET_NOT_FOUND));
            }
            Ok(ConfigSource::Preset(preset_id))
        }
        SourceRequest::Custom(config) => match current {
            Some(ConfigSource::Custom(custom_id)) => overwrite_or_create(session, custom_id, config).await,
            _ => {
                let custom = session.custom_configs().create(config).await?;
                Ok(ConfigSource::Custom(custom.id))
            }
        },
    }
}

async fn overwrite_or_create<S: Session>(session: &S, custom_id: i64, config: FeeConfig) -> ApiResult<ConfigSource> {
    let repo = session.custom_configs();
    let custom = match repo.find_by_id(&custom_id).await? {
        Some(_) => repo.update_config(custom_id, config).await?,
        None => repo.create(config).await?,
    };
    Ok(ConfigSource::Custom(custom.id))
}

async fn load_view<S: Session>(session: &S, id: i64) -> ApiResult<ConfigMatrixOut> {
    session
        .config_matrix()
        .find_view(id)
        .await?
        .map(ConfigMatrixOut::from)
        .ok_or_else(|| ApiError::not_found(ENTRY_NOT_FOUND))
}

impl<U: UnitOfWork> FeeAdminService<U> {
    pub async fn list_config_matrix(&self, query: &ConfigMatrixListQuery) -> ApiResult<ConfigMatrixListResponse> {
        let (limit, offset) = validate_page(query.limit, query.offset)?;
        let customer_id = query.customer_id.as_deref().filter(|id| !id.is_empty());

        let session = self.uow.begin().await?;
        let page = session
            .config_matrix()
            .list_views(customer_id, PageRequest::new(limit, offset))
            .await?;
        session.commit().await?;

        debug!(customer_id = ?customer_id, total = page.total, "listed config matrix");
        Ok(ConfigMatrixListResponse {
            total: page.total,
            config_matrix: page.items.into_iter().map(ConfigMatrixOut::from).collect(),
        })
    }

    pub async fn get_config_matrix(&self, id: i64) -> ApiResult<ConfigMatrixOut> {
        let session = self.uow.begin().await?;
        let entry = load_view(&session, id).await?;
        session.commit().await?;
        Ok(entry)
    }

    /// Bind a customer to a preset or to a new custom config from a given date
    pub async fn create_config_matrix(&self, body: ConfigMatrixCreate) -> ApiResult<ConfigMatrixOut> {
        let requested = body.source()?;

        let session = self.uow.begin().await?;
        let customer = session
            .customers()
            .find_by_id(&body.customer_id)
            .await?
            .ok_or_else(|| ApiError::not_found(CUSTOMER_NOT_FOUND))?;
        let source = resolve_source(&session, requested, None).await?;

        let entry = session
            .config_matrix()
            .create(NewConfigMatrix {
                customer_id: customer.id,
                source,
                effective_from: body.effective_from,
            })
            .await?;
        let out = load_view(&session, entry.id).await?;
        session.commit().await?;

        info!(
            config_matrix_id = out.id,
            customer_id = %out.customer_id,
            source = ?source,
            "config matrix entry created"
        );
        Ok(out)
    }

    /// Change the source and/or effective date of an entry.
    ///
    /// Switching to a preset drops the custom link; the custom row itself is kept.
    pub async fn update_config_matrix(&self, id: i64, body: ConfigMatrixUpdate) -> ApiResult<ConfigMatrixOut> {
        let requested = body.source()?;

        let session = self.uow.begin().await?;
        let mut entry = session
            .config_matrix()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(ENTRY_NOT_FOUND))?;
        if body.is_empty() {
            return Err(ApiError::validation("No fields to update"));
        }

        if let Some(requested) = requested {
            entry.source = resolve_source(&session, requested, Some(entry.source)).await?;
        }
        if let Some(effective_from) = body.effective_from {
            entry.effective_from = effective_from;
        }

        session.config_matrix().update(&entry).await?;
        let out = load_view(&session, id).await?;
        session.commit().await?;

        info!(config_matrix_id = id, source = ?entry.source, "config matrix entry updated");
        Ok(out)
    }

    pub async fn delete_config_matrix(&self, id: i64) -> ApiResult<()> {
        let session = self.uow.begin().await?;
        if !session.config_matrix().soft_delete(&id, &self.delete_actor).await? {
            return Err(ApiError::not_found(ENTRY_NOT_FOUND));
        }
        session.commit().await?;

        info!(config_matrix_id = id, actor = %self.delete_actor, "config matrix entry deleted");
        Ok(())
    }
}
