//! Publisher flows: create, submit, edit and resubmit

mod common;

use crate::common::{content_input, create_user, date, TestHarness, World};
use publikasi_core::common::{ReportPeriod, Role, WorkflowError};
use publikasi_core::domains::agency::models::{Agency, AgencyStatus};
use publikasi_core::domains::category::models::Category;
use publikasi_core::domains::content::actions::{
    approve_content, content_detail, content_listing, create_content, edit_content, my_contents,
    pending_contents, reject_content, submit_content, verification_history,
};
use publikasi_core::domains::content::models::{Content, ContentStatus, VerificationDecision};
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn create_as_draft_or_pending(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;

    let draft = create_content(
        &world.publisher(),
        content_input(world.category.id, "  Rapat Koordinasi  "),
        false,
        &ctx.deps,
    )
    .await
    .unwrap();
    assert_eq!(draft.status, ContentStatus::Draft);
    assert_eq!(draft.title, "Rapat Koordinasi");
    assert_eq!(draft.agency_id, world.agency.id);

    let pending = create_content(
        &world.publisher(),
        content_input(world.category.id, "Sosialisasi"),
        true,
        &ctx.deps,
    )
    .await
    .unwrap();
    assert_eq!(pending.status, ContentStatus::Pending);

    let mine = my_contents(&world.publisher(), &ctx.deps).await.unwrap();
    assert_eq!(mine.len(), 2);
    // Creation never notifies
    assert!(ctx.notifier.sent_for(draft.id).is_empty());
    assert!(ctx.notifier.sent_for(pending.id).is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_rejects_bad_input(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;

    let mut input = content_input(world.category.id, "Judul");
    input.publication_url = "ftp://example.go.id/file".to_string();
    let result = create_content(&world.publisher(), input, false, &ctx.deps).await;
    assert!(matches!(result, Err(WorkflowError::Validation(_))));

    let long_title = "a".repeat(256);
    let result = create_content(
        &world.publisher(),
        content_input(world.category.id, &long_title),
        false,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Validation(_))));

    Category::set_active(world.category.id, false, &ctx.db_pool).await.unwrap();
    let result = create_content(
        &world.publisher(),
        content_input(world.category.id, "Judul"),
        false,
        &ctx.deps,
    )
    .await;
    assert!(matches!(result, Err(WorkflowError::Validation(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn inactive_agency_cannot_create_content(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    Agency::set_status(world.agency.id, AgencyStatus::Inactive, &ctx.db_pool)
        .await
        .unwrap();

    let result = create_content(
        &world.publisher(),
        content_input(world.category.id, "Judul"),
        true,
        &ctx.deps,
    )
    .await;

    assert!(matches!(result, Err(WorkflowError::InvalidState(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn operators_cannot_create_content(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;

    let result = create_content(
        &world.operator(),
        content_input(world.category.id, "Judul"),
        true,
        &ctx.deps,
    )
    .await;

    assert!(matches!(result, Err(WorkflowError::Authorization(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn submitting_a_draft_puts_it_in_the_queue(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let draft = world
        .content(&ctx.db_pool, ContentStatus::Draft, date(2025, 3, 1))
        .await;

    let submitted = submit_content(&world.publisher(), draft.id, &ctx.deps).await.unwrap();
    assert_eq!(submitted.status, ContentStatus::Pending);

    let queue = pending_contents(&world.operator(), &ctx.deps).await.unwrap();
    assert!(queue.iter().any(|c| c.id == draft.id));

    let again = submit_content(&world.publisher(), draft.id, &ctx.deps).await;
    assert!(matches!(again, Err(WorkflowError::InvalidState(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn editing_rejected_content_resubmits_and_notifies_once(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Rejected, date(2025, 3, 5))
        .await;

    let edited = edit_content(
        &world.publisher(),
        content.id,
        content_input(world.category.id, "Judul diperbaiki"),
        false,
        &ctx.deps,
    )
    .await
    .unwrap();

    assert_eq!(edited.status, ContentStatus::Pending);
    assert_eq!(edited.title, "Judul diperbaiki");

    let sent = ctx.notifier.sent_for(content.id);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].status, ContentStatus::Pending);
    assert_eq!(sent[0].user_id, world.publisher.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn editing_a_draft_keeps_it_a_draft_unless_submitted(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Draft, date(2025, 3, 5))
        .await;

    let kept = edit_content(
        &world.publisher(),
        content.id,
        content_input(world.category.id, "Versi dua"),
        false,
        &ctx.deps,
    )
    .await
    .unwrap();
    assert_eq!(kept.status, ContentStatus::Draft);

    let submitted = edit_content(
        &world.publisher(),
        content.id,
        content_input(world.category.id, "Versi tiga"),
        true,
        &ctx.deps,
    )
    .await
    .unwrap();
    assert_eq!(submitted.status, ContentStatus::Pending);
    assert!(ctx.notifier.sent_for(content.id).is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn another_publisher_cannot_edit(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let colleague = create_user(&ctx.db_pool, Role::Publisher, Some(world.agency.id)).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Rejected, date(2025, 3, 5))
        .await;

    let result = edit_content(
        &colleague.actor(),
        content.id,
        content_input(world.category.id, "Bukan milik saya"),
        false,
        &ctx.deps,
    )
    .await;

    assert!(matches!(result, Err(WorkflowError::Authorization(_))));
    assert!(ctx.notifier.sent_for(content.id).is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn ownership_is_checked_before_input(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let colleague = create_user(&ctx.db_pool, Role::Publisher, Some(world.agency.id)).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Rejected, date(2025, 3, 5))
        .await;
    Category::set_active(world.category.id, false, &ctx.db_pool).await.unwrap();

    let result = edit_content(
        &colleague.actor(),
        content.id,
        content_input(world.category.id, "   "),
        false,
        &ctx.deps,
    )
    .await;

    assert!(matches!(result, Err(WorkflowError::Authorization(_))));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn locked_content_reports_state_before_bad_input(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Pending, date(2025, 3, 5))
        .await;

    let result = edit_content(
        &world.publisher(),
        content.id,
        content_input(world.category.id, "   "),
        false,
        &ctx.deps,
    )
    .await;

    assert!(matches!(result, Err(WorkflowError::InvalidState(_))));
    let reloaded = Content::get(content.id, &ctx.db_pool).await.unwrap();
    assert_eq!(reloaded.status, ContentStatus::Pending);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn pending_and_approved_content_is_locked(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;

    for status in [ContentStatus::Pending, ContentStatus::Approved, ContentStatus::Published] {
        let content = world.content(&ctx.db_pool, status, date(2025, 3, 5)).await;
        let result = edit_content(
            &world.publisher(),
            content.id,
            content_input(world.category.id, "Terlambat"),
            false,
            &ctx.deps,
        )
        .await;
        assert!(matches!(result, Err(WorkflowError::InvalidState(_))), "{status}");
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn verification_history_accumulates_across_cycles(ctx: &TestHarness) {
    let world = World::new(&ctx.db_pool).await;
    let content = world
        .content(&ctx.db_pool, ContentStatus::Pending, date(2025, 3, 5))
        .await;

    reject_content(&world.operator(), content.id, "Foto kurang jelas".to_string(), &ctx.deps)
        .await
        .unwrap();
    edit_content(
        &world.publisher(),
        content.id,
        content_input(world.category.id, "Foto baru"),
        false,
        &ctx.deps,
    )
    .await
    .unwrap();
    approve_content(&world.operator(), content.id, None, &ctx.deps)
        .await
        .unwrap();

    let history = verification_history(&world.publisher(), content.id, &ctx.deps)
        .await
        .unwrap();
    let decisions: Vec<VerificationDecision> = history.iter().map(|v| v.decision).collect();
    assert_eq!(
        decisions,
        vec![VerificationDecision::Approved, VerificationDecision::Rejected]
    );

    let statuses: Vec<ContentStatus> = ctx
        .notifier
        .sent_for(content.id)
        .iter()
        .map(|n| n.status)
        .collect();
    assert_eq!(
        statuses,
        vec![ContentStatus::Rejected, ContentStatus::Pending, ContentStatus::Approved]
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn publishers_only_read_their_own_agency(ctx: &TestHarness) {
    let ours = World::new(&ctx.db_pool).await;
    let theirs = World::new(&ctx.db_pool).await;
    let content = theirs
        .content(&ctx.db_pool, ContentStatus::Pending, date(2025, 3, 5))
        .await;

    let denied = content_detail(&ours.publisher(), content.id, &ctx.deps).await;
    assert!(matches!(denied, Err(WorkflowError::Authorization(_))));

    let own = content_detail(&theirs.publisher(), content.id, &ctx.deps).await;
    assert!(own.is_ok());

    let operator = content_detail(&ours.operator(), content.id, &ctx.deps).await;
    assert!(operator.is_ok());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn monthly_listing_is_scoped_by_role(ctx: &TestHarness) {
    let ours = World::new(&ctx.db_pool).await;
    let theirs = World::new(&ctx.db_pool).await;
    let own = ours.content(&ctx.db_pool, ContentStatus::Approved, date(2025, 3, 5)).await;
    let foreign = theirs.content(&ctx.db_pool, ContentStatus::Pending, date(2025, 3, 6)).await;
    let april = ours.content(&ctx.db_pool, ContentStatus::Approved, date(2025, 4, 1)).await;
    let march = ReportPeriod::new(3, 2025).unwrap();

    let mine = content_listing(&ours.publisher(), march, &ctx.deps).await.unwrap();
    assert!(mine.iter().any(|row| row.id == own.id));
    assert!(mine.iter().all(|row| row.id != foreign.id && row.id != april.id));

    let all = content_listing(&ours.operator(), march, &ctx.deps).await.unwrap();
    assert!(all.iter().any(|row| row.id == own.id));
    assert!(all.iter().any(|row| row.id == foreign.id));
    assert!(all.iter().all(|row| row.id != april.id));
}
