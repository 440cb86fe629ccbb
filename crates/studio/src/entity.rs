//! The two admin-managed collections behind [`ContentController`].
//!
//! [`ContentController`]: crate::controller::ContentController

use async_trait::async_trait;
use nemitzam_core::drafts::{CategoryDraft, ProjectDraft};
use nemitzam_core::error::CoreError;
use nemitzam_core::types::DbId;
use nemitzam_db::models::category::Category;
use nemitzam_db::models::project::Project;
use nemitzam_db::{Gateway, GatewayResult, ListQuery};

/// Operator-facing strings for one collection.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_delete: &'static str,
    pub save_action: &'static str,
    pub delete_action: &'static str,
}

/// A row type editable through the admin workflow.
#[async_trait]
pub trait ContentEntity: Clone + Send + Sync + Sized + 'static {
    type Draft: Clone + Default + PartialEq + Send + Sync;

    /// Entity name used in logs and `NotFound` errors.
    const NAME: &'static str;

    const MESSAGES: Messages;

    fn id(&self) -> DbId;

    /// Form contents for editing this row.
    fn to_draft(&self) -> Self::Draft;

    /// Presence check on the required fields.
    fn validate(draft: &Self::Draft) -> Result<(), CoreError>;

    /// The draft as written to the gateway.
    fn prepare(draft: &Self::Draft) -> Self::Draft {
        draft.clone()
    }

    async fn list(gateway: &dyn Gateway) -> GatewayResult<Vec<Self>>;

    async fn insert(gateway: &dyn Gateway, draft: &Self::Draft) -> GatewayResult<Self>;

    async fn update(
        gateway: &dyn Gateway,
        id: DbId,
        draft: &Self::Draft,
    ) -> GatewayResult<Option<Self>>;

    async fn delete(gateway: &dyn Gateway, id: DbId) -> GatewayResult<bool>;
}

#[async_trait]
impl ContentEntity for Project {
    type Draft = ProjectDraft;

    const NAME: &'static str = "Project";

    const MESSAGES: Messages = Messages {
        missing_fields: "⚠️ Por favor completa título e imagen",
        created: "✅ Proyecto creado exitosamente",
        updated: "✅ Proyecto actualizado exitosamente",
        deleted: "✅ Proyecto eliminado exitosamente",
        confirm_delete: "🗑️ ¿Estás seguro de eliminar este proyecto?",
        save_action: "guardar proyecto",
        delete_action: "eliminar proyecto",
    };

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
            order_index: self.order_index,
        }
    }

    fn validate(draft: &ProjectDraft) -> Result<(), CoreError> {
        draft.validate()
    }

    async fn list(gateway: &dyn Gateway) -> GatewayResult<Vec<Self>> {
        gateway.list_projects(ListQuery::all()).await
    }

    async fn insert(gateway: &dyn Gateway, draft: &ProjectDraft) -> GatewayResult<Self> {
        gateway.insert_project(draft).await
    }

    async fn update(
        gateway: &dyn Gateway,
        id: DbId,
        draft: &ProjectDraft,
    ) -> GatewayResult<Option<Self>> {
        gateway.update_project(id, draft).await
    }

    async fn delete(gateway: &dyn Gateway, id: DbId) -> GatewayResult<bool> {
        gateway.delete_project(id).await
    }
}

#[async_trait]
impl ContentEntity for Category {
    type Draft = CategoryDraft;

    const NAME: &'static str = "Category";

    const MESSAGES: Messages = Messages {
        missing_fields: "⚠️ Por favor completa nombre y slug",
        created: "✅ Categoría creada exitosamente",
        updated: "✅ Categoría actualizada exitosamente",
        deleted: "✅ Categoría eliminada exitosamente",
        confirm_delete: "🗑️ ¿Estás seguro de eliminar esta categoría?",
        save_action: "guardar categoría",
        delete_action: "eliminar categoría",
    };

    fn id(&self) -> DbId {
        self.id
    }

    fn to_draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
            slug: self.slug.clone(),
            display_order: self.display_order,
        }
    }

    fn validate(draft: &CategoryDraft) -> Result<(), CoreError> {
        draft.validate()
    }

    fn prepare(draft: &CategoryDraft) -> CategoryDraft {
        draft.normalized()
    }

    async fn list(gateway: &dyn Gateway) -> GatewayResult<Vec<Self>> {
        gateway.list_categories().await
    }

    async fn insert(gateway: &dyn Gateway, draft: &CategoryDraft) -> GatewayResult<Self> {
        gateway.insert_category(draft).await
    }

    async fn update(
        gateway: &dyn Gateway,
        id: DbId,
        draft: &CategoryDraft,
    ) -> GatewayResult<Option<Self>> {
        gateway.update_category(id, draft).await
    }

    async fn delete(gateway: &dyn Gateway, id: DbId) -> GatewayResult<bool> {
        gateway.delete_category(id).await
    }
}
