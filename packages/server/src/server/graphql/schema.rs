//! GraphQL schema definition.

use juniper::{EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;
use uuid::Uuid;

use super::context::GraphQLContext;

// Common types
use crate::common::{AgencyId, CategoryId, ContentId, ReportPeriod, UserId, WorkflowError};

// Domain actions
use crate::domains::agency::actions as agency_actions;
use crate::domains::category::actions as category_actions;
use crate::domains::compliance::actions as compliance_actions;
use crate::domains::content::actions as content_actions;
use crate::domains::user::actions as user_actions;

// Domain data types (GraphQL types)
use crate::domains::agency::data::{AgencyData, AgencyInput};
use crate::domains::category::data::{CategoryData, CategoryInput};
use crate::domains::compliance::data::{
    AgencyComplianceData, ComplianceReportData, TrendPointData,
};
use crate::domains::content::actions::VerificationOutcome;
use crate::domains::content::data::{
    ContentData, ContentInput, VerificationData, VerificationResult,
};
use crate::domains::user::data::{UserData, UserInput};
use crate::domains::user::models::User;

/// Map a workflow error to a field error carrying a stable `code` extension.
///
/// Database failures are logged and reported without detail.
pub fn to_field_error(err: WorkflowError) -> FieldError {
    let message = match &err {
        WorkflowError::Database(e) => {
            error!(error = %e, "Database error while resolving field");
            "Internal server error".to_string()
        }
        other => other.to_string(),
    };

    let mut extensions = juniper::Object::with_capacity(1);
    extensions.add_field("code", juniper::Value::scalar(err.code().to_string()));
    FieldError::new(message, juniper::Value::Object(extensions))
}

fn report_period(month: i32, year: i32) -> Result<ReportPeriod, WorkflowError> {
    let month = u32::try_from(month)
        .map_err(|_| WorkflowError::validation(format!("month must be between 1 and 12, got {}", month)))?;
    ReportPeriod::new(month, year)
}

impl From<VerificationOutcome> for VerificationResult {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            content: outcome.content.into(),
            verification: outcome.verification.into(),
        }
    }
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Content Queries
    // =========================================================================

    /// Review queue, oldest submission first (operators)
    async fn pending_contents(ctx: &GraphQLContext) -> FieldResult<Vec<ContentData>> {
        let contents = content_actions::pending_contents(ctx.actor()?, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(contents.into_iter().map(ContentData::from).collect())
    }

    /// Content created by the signed-in publisher, newest first
    async fn my_contents(ctx: &GraphQLContext) -> FieldResult<Vec<ContentData>> {
        let contents = content_actions::my_contents(ctx.actor()?, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(contents.into_iter().map(ContentData::from).collect())
    }

    async fn content(ctx: &GraphQLContext, id: Uuid) -> FieldResult<ContentData> {
        let content = content_actions::content_detail(ctx.actor()?, ContentId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(content.into())
    }

    /// Verification trail of one content item, newest first
    async fn verifications(ctx: &GraphQLContext, content_id: Uuid) -> FieldResult<Vec<VerificationData>> {
        let records = content_actions::verification_history(
            ctx.actor()?,
            ContentId::from_uuid(content_id),
            &ctx.deps,
        )
        .await
        .map_err(to_field_error)?;
        Ok(records.into_iter().map(VerificationData::from).collect())
    }

    // =========================================================================
    // Compliance Queries
    // =========================================================================

    /// Quota compliance of all active SKPDs for a month
    async fn compliance_report(
        ctx: &GraphQLContext,
        month: i32,
        year: i32,
    ) -> FieldResult<ComplianceReportData> {
        let period = report_period(month, year).map_err(to_field_error)?;
        let report = compliance_actions::compliance_report(ctx.actor()?, period, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(report.into())
    }

    async fn agency_compliance(
        ctx: &GraphQLContext,
        agency_id: Uuid,
        month: i32,
        year: i32,
    ) -> FieldResult<AgencyComplianceData> {
        let period = report_period(month, year).map_err(to_field_error)?;
        let row = compliance_actions::agency_compliance(
            ctx.actor()?,
            AgencyId::from_uuid(agency_id),
            period,
            &ctx.deps,
        )
        .await
        .map_err(to_field_error)?;
        Ok(row.into())
    }

    /// Six months ending with the given month, oldest first
    async fn compliance_trend(
        ctx: &GraphQLContext,
        agency_id: Uuid,
        month: i32,
        year: i32,
    ) -> FieldResult<Vec<TrendPointData>> {
        let period = report_period(month, year).map_err(to_field_error)?;
        let points = compliance_actions::compliance_trend(
            ctx.actor()?,
            AgencyId::from_uuid(agency_id),
            period,
            &ctx.deps,
        )
        .await
        .map_err(to_field_error)?;
        Ok(points.into_iter().map(TrendPointData::from).collect())
    }

    // =========================================================================
    // Administration Queries
    // =========================================================================

    async fn agencies(ctx: &GraphQLContext) -> FieldResult<Vec<AgencyData>> {
        let agencies = agency_actions::list_agencies(ctx.actor()?, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(agencies.into_iter().map(AgencyData::from).collect())
    }

    async fn agency(ctx: &GraphQLContext, id: Uuid) -> FieldResult<AgencyData> {
        let agency = agency_actions::get_agency(ctx.actor()?, AgencyId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(agency.into())
    }

    async fn categories(ctx: &GraphQLContext, active_only: Option<bool>) -> FieldResult<Vec<CategoryData>> {
        let categories =
            category_actions::list_categories(ctx.actor()?, active_only.unwrap_or(false), &ctx.deps)
                .await
                .map_err(to_field_error)?;
        Ok(categories.into_iter().map(CategoryData::from).collect())
    }

    async fn users(ctx: &GraphQLContext) -> FieldResult<Vec<UserData>> {
        let users = user_actions::list_users(ctx.actor()?, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(users.into_iter().map(UserData::from).collect())
    }

    /// The signed-in user
    async fn me(ctx: &GraphQLContext) -> FieldResult<UserData> {
        let actor = ctx.actor()?;
        let user = User::get(actor.user_id, &ctx.deps.db_pool)
            .await
            .map_err(to_field_error)?;
        Ok(user.into())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Content Mutations
    // =========================================================================

    /// Create content as a draft, or straight into review when `submit` is true
    async fn create_content(
        ctx: &GraphQLContext,
        input: ContentInput,
        submit: Option<bool>,
    ) -> FieldResult<ContentData> {
        let content = content_actions::create_content(ctx.actor()?, input, submit.unwrap_or(false), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(content.into())
    }

    async fn submit_content(ctx: &GraphQLContext, id: Uuid) -> FieldResult<ContentData> {
        let content = content_actions::submit_content(ctx.actor()?, ContentId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(content.into())
    }

    /// Edit draft or rejected content. Rejected content goes back to review.
    async fn edit_content(
        ctx: &GraphQLContext,
        id: Uuid,
        input: ContentInput,
        submit: Option<bool>,
    ) -> FieldResult<ContentData> {
        let content = content_actions::edit_content(
            ctx.actor()?,
            ContentId::from_uuid(id),
            input,
            submit.unwrap_or(false),
            &ctx.deps,
        )
        .await
        .map_err(to_field_error)?;
        Ok(content.into())
    }

    async fn approve_content(
        ctx: &GraphQLContext,
        id: Uuid,
        reason: Option<String>,
    ) -> FieldResult<VerificationResult> {
        let outcome = content_actions::approve_content(ctx.actor()?, ContentId::from_uuid(id), reason, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(outcome.into())
    }

    async fn reject_content(
        ctx: &GraphQLContext,
        id: Uuid,
        reason: String,
    ) -> FieldResult<VerificationResult> {
        let outcome = content_actions::reject_content(ctx.actor()?, ContentId::from_uuid(id), reason, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(outcome.into())
    }

    // =========================================================================
    // SKPD Mutations
    // =========================================================================

    async fn create_agency(ctx: &GraphQLContext, input: AgencyInput) -> FieldResult<AgencyData> {
        let agency = agency_actions::create_agency(ctx.actor()?, input, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(agency.into())
    }

    async fn update_agency(ctx: &GraphQLContext, id: Uuid, input: AgencyInput) -> FieldResult<AgencyData> {
        let agency = agency_actions::update_agency(ctx.actor()?, AgencyId::from_uuid(id), input, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(agency.into())
    }

    async fn toggle_agency_status(ctx: &GraphQLContext, id: Uuid) -> FieldResult<AgencyData> {
        let agency = agency_actions::toggle_agency_status(ctx.actor()?, AgencyId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(agency.into())
    }

    async fn delete_agency(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        agency_actions::delete_agency(ctx.actor()?, AgencyId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(true)
    }

    // =========================================================================
    // Category Mutations
    // =========================================================================

    async fn create_category(ctx: &GraphQLContext, input: CategoryInput) -> FieldResult<CategoryData> {
        let category = category_actions::create_category(ctx.actor()?, input, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(category.into())
    }

    async fn update_category(
        ctx: &GraphQLContext,
        id: Uuid,
        input: CategoryInput,
    ) -> FieldResult<CategoryData> {
        let category =
            category_actions::update_category(ctx.actor()?, CategoryId::from_uuid(id), input, &ctx.deps)
                .await
                .map_err(to_field_error)?;
        Ok(category.into())
    }

    async fn toggle_category(ctx: &GraphQLContext, id: Uuid) -> FieldResult<CategoryData> {
        let category = category_actions::toggle_category(ctx.actor()?, CategoryId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(category.into())
    }

    // =========================================================================
    // User Mutations
    // =========================================================================

    async fn create_user(ctx: &GraphQLContext, input: UserInput) -> FieldResult<UserData> {
        let user = user_actions::create_user(ctx.actor()?, input, &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(user.into())
    }

    async fn toggle_user_active(ctx: &GraphQLContext, id: Uuid) -> FieldResult<UserData> {
        let user = user_actions::toggle_user_active(ctx.actor()?, UserId::from_uuid(id), &ctx.deps)
            .await
            .map_err(to_field_error)?;
        Ok(user.into())
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_carry_workflow_code() {
        let err = to_field_error(WorkflowError::invalid_state("only Pending content can be verified"));
        assert_eq!(err.message(), "Invalid state: only Pending content can be verified");
        assert_eq!(
            err.extensions(),
            &juniper::graphql_value!({ "code": "INVALID_STATE" })
        );
    }

    #[test]
    fn database_errors_are_masked() {
        let err = to_field_error(WorkflowError::Database(sqlx::Error::RowNotFound));
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn negative_month_is_a_validation_error() {
        assert!(matches!(report_period(-1, 2025), Err(WorkflowError::Validation(_))));
        assert!(report_period(3, 2025).is_ok());
    }
}
