use fee_admin_api::{
    validate_page, ApiError, ApiResult, PresetConfigCreate, PresetConfigListQuery, PresetConfigListResponse,
    PresetConfigOut, PresetConfigUpdate, PRESET_NAME_MAX_LEN,
};
use fee_admin_db::models::fee_config::NewPresetConfig;
use fee_admin_db::repository::pagination::PageRequest;
use fee_admin_db::repository::session::{Session, UnitOfWork};
use fee_admin_db::utils::bounded;
use tracing::{info, warn};
use validator::Validate;

use super::FeeAdminService;

pub(crate) const PRESET_NOT_FOUND: &str = "Preset config not found";

/// Message returned when a preset still backs active matrix entries
fn linked_message(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Cannot delete: preset is linked to {count} customer{plural}")
}

impl<U: UnitOfWork> FeeAdminService<U> {
    pub async fn list_preset_configs(&self, query: &PresetConfigListQuery) -> ApiResult<PresetConfigListResponse> {
        let (limit, offset) = validate_page(query.limit, query.offset)?;
        let session = self.uow.begin().await?;

        let page = session
            .preset_configs()
            .search(query.search.as_deref(), PageRequest::new(limit, offset))
            .await?;
        session.commit().await?;

        Ok(PresetConfigListResponse {
            total: page.total,
            preset_configs: page.items.into_iter().map(PresetConfigOut::from).collect(),
        })
    }

    pub async fn get_preset_config(&self, id: i64) -> ApiResult<PresetConfigOut> {
        let session = self.uow.begin().await?;
        let preset = session
            .preset_configs()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(PRESET_NOT_FOUND))?;
        session.commit().await?;
        Ok(preset.into())
    }

    pub async fn create_preset_config(&self, body: PresetConfigCreate) -> ApiResult<PresetConfigOut> {
        body.validate()?;
        let new_preset = NewPresetConfig {
            name: bounded("name", &body.name, PRESET_NAME_MAX_LEN)?,
            config: body.config,
        };

        let session = self.uow.begin().await?;
        let preset = session.preset_configs().create(new_preset).await?;
        session.commit().await?;

        info!(preset_config_id = preset.id, name = %preset.name, "preset config created");
        Ok(preset.into())
    }

    pub async fn update_preset_config(&self, id: i64, body: PresetConfigUpdate) -> ApiResult<PresetConfigOut> {
        body.validate_patch()?;

        let session = self.uow.begin().await?;
        let mut preset = session
            .preset_configs()
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(PRESET_NOT_FOUND))?;
        if body.is_empty() {
            return Err(ApiError::validation("No fields to update"));
        }

        preset.apply_update(&body)?;
        let preset = session.preset_configs().update(&preset).await?;
        session.commit().await?;

        info!(preset_config_id = preset.id, "preset config updated");
        Ok(preset.into())
    }

    /// Soft-delete a preset that no active matrix entry references
    pub async fn delete_preset_config(&self, id: i64) -> ApiResult<()> {
        let session = self.uow.begin().await?;
        if session.preset_configs().find_by_id(&id).await?.is_none() {
            return Err(ApiError::not_found(PRESET_NOT_FOUND));
        }

        let linked = session.config_matrix().count_by_preset(id).await?;
        if linked > 0 {
            warn!(preset_config_id = id, linked, "refusing to delete linked preset config");
            return Err(ApiError::conflict(linked_message(linked)));
        }

        if !session.preset_configs().soft_delete(&id, &self.delete_actor).await? {
            return Err(ApiError::not_found(PRESET_NOT_FOUND));
        }
        session.commit().await?;

        info!(preset_config_id = id, actor = %self.delete_actor, "preset config deleted");
        Ok(())
    }
}
