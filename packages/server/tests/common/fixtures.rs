//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly. Names carry a fresh UUID so
//! tests sharing the database never collide.

use chrono::NaiveDate;
use publikasi_core::common::{Actor, AgencyId, CategoryId, Role, UserId};
use publikasi_core::domains::agency::models::Agency;
use publikasi_core::domains::category::models::Category;
use publikasi_core::domains::content::data::ContentInput;
use publikasi_core::domains::content::models::{Content, ContentStatus, NewContent};
use publikasi_core::domains::user::models::User;
use sqlx::PgPool;
use uuid::Uuid;

fn unique(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub async fn create_agency(pool: &PgPool, monthly_quota: i32) -> Agency {
    Agency::create(AgencyId::new(), &unique("Dinas"), monthly_quota, pool)
        .await
        .expect("Failed to create agency")
}

pub async fn create_category(pool: &PgPool) -> Category {
    Category::create(CategoryId::new(), &unique("Kategori"), Some("Test category"), pool)
        .await
        .expect("Failed to create category")
}

pub async fn create_user(pool: &PgPool, role: Role, agency_id: Option<AgencyId>) -> User {
    let id = UserId::new();
    User::create(
        id,
        &format!("{} user", role),
        &format!("{}-{}@test.go.id", role, id),
        role,
        agency_id,
        pool,
    )
    .await
    .expect("Failed to create user")
}

/// Insert content directly in the given status, bypassing the workflow
pub async fn create_content(
    pool: &PgPool,
    publisher: &User,
    category_id: CategoryId,
    status: ContentStatus,
    publication_date: NaiveDate,
) -> Content {
    let agency_id = publisher.agency_id.expect("publisher has an agency");
    Content::create(
        NewContent::builder()
            .agency_id(agency_id)
            .publisher_id(publisher.id)
            .category_id(category_id)
            .title(unique("Berita"))
            .publication_url("https://example.go.id/berita")
            .publication_date(publication_date)
            .status(status)
            .build(),
        pool,
    )
    .await
    .expect("Failed to create content")
}

pub fn content_input(category_id: CategoryId, title: &str) -> ContentInput {
    ContentInput {
        category_id: category_id.into_uuid(),
        title: title.to_string(),
        description: Some("Kegiatan dinas".to_string()),
        publication_url: "https://example.go.id/kegiatan".to_string(),
        publication_date: date(2025, 3, 10),
    }
}

/// One SKPD with a publisher, plus an operator, an admin and an active category
pub struct World {
    pub agency: Agency,
    pub category: Category,
    pub publisher: User,
    pub operator: User,
    pub admin: User,
}

impl World {
    pub async fn new(pool: &PgPool) -> Self {
        Self::with_quota(pool, 3).await
    }

    pub async fn with_quota(pool: &PgPool, monthly_quota: i32) -> Self {
        let agency = create_agency(pool, monthly_quota).await;
        let category = create_category(pool).await;
        let publisher = create_user(pool, Role::Publisher, Some(agency.id)).await;
        let operator = create_user(pool, Role::Operator, None).await;
        let admin = create_user(pool, Role::Admin, None).await;
        Self {
            agency,
            category,
            publisher,
            operator,
            admin,
        }
    }

    pub fn publisher(&self) -> Actor {
        self.publisher.actor()
    }

    pub fn operator(&self) -> Actor {
        self.operator.actor()
    }

    pub fn admin(&self) -> Actor {
        self.admin.actor()
    }

    /// Content by this world's publisher in the given status
    pub async fn content(&self, pool: &PgPool, status: ContentStatus, on: NaiveDate) -> Content {
        create_content(pool, &self.publisher, self.category.id, status, on).await
    }
}
