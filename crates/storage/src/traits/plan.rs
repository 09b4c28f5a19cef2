use async_trait::async_trait;
use planforge_core::PlanWithTemplate;

use crate::error::StorageError;
use crate::types::PlanSectionContents;

/// Read access to plans, their sections and template metadata.
#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Count of plans owned by the user.
    async fn count_plans(&self, user_id: &str) -> Result<u64, StorageError>;

    /// The user's plans with joined template metadata, newest update first
    /// (ties broken by ascending id so the order is stable).
    async fn plans_with_templates(
        &self,
        user_id: &str,
    ) -> Result<Vec<PlanWithTemplate>, StorageError>;

    /// Section contents of a single plan.
    async fn section_contents(&self, plan_id: &str) -> Result<Vec<Option<String>>, StorageError>;

    /// Section contents of every plan of the user, grouped per plan.
    ///
    /// One joined query; plans with no sections appear with an empty group.
    async fn section_contents_by_plan(
        &self,
        user_id: &str,
    ) -> Result<Vec<PlanSectionContents>, StorageError>;
}
