use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resort_content::{Event, EventStatus, Hero, Interaction, OfferStatus, SpecialOffer};
use resort_core::{ContentRepository, RepositoryError, RepositoryResult};
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(Box::new(e))
}

/// Decode rows one by one. A row that fails is logged and skipped so the
/// rest of the batch still reaches the page.
fn decode_rows<R, T>(kind: &str, rows: Vec<R>) -> Vec<T>
where
    T: TryFrom<R, Error = RepositoryError>,
{
    rows.into_iter()
        .filter_map(|row| match T::try_from(row) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(kind, error = %e, "skipping undecodable row");
                None
            }
        })
        .collect()
}

#[derive(sqlx::FromRow)]
struct HeroRow {
    id: Uuid,
    property_id: Option<Uuid>,
    title: String,
    subtitle: Option<String>,
    image_url: Option<String>,
    cta_label: Option<String>,
    cta_href: Option<String>,
    target_pages: Vec<String>,
    is_active: bool,
    is_featured: bool,
    sort_order: i32,
    show_from: Option<DateTime<Utc>>,
    show_until: Option<DateTime<Utc>>,
    view_count: i64,
    click_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<HeroRow> for Hero {
    fn from(row: HeroRow) -> Self {
        Hero {
            id: row.id,
            property_id: row.property_id,
            title: row.title,
            subtitle: row.subtitle,
            image_url: row.image_url,
            cta_label: row.cta_label,
            cta_href: row.cta_href,
            target_pages: row.target_pages.into(),
            is_active: row.is_active,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            show_from: row.show_from,
            show_until: row.show_until,
            view_count: row.view_count,
            click_count: row.click_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: Uuid,
    property_id: Option<Uuid>,
    title: String,
    description: Option<String>,
    image_url: Option<String>,
    discount_percentage: Option<f64>,
    promo_code: Option<String>,
    status: String,
    is_published: bool,
    is_pinned: bool,
    is_featured: bool,
    sort_order: i32,
    valid_from: Option<DateTime<Utc>>,
    valid_to: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OfferRow> for SpecialOffer {
    type Error = RepositoryError;

    fn try_from(row: OfferRow) -> Result<Self, Self::Error> {
        let status: OfferStatus = row
            .status
            .parse()
            .map_err(|e: resort_content::ContentError| RepositoryError::Decode(format!("offer {}: {}", row.id, e)))?;

        Ok(SpecialOffer {
            id: row.id,
            property_id: row.property_id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            discount_percentage: row.discount_percentage,
            promo_code: row.promo_code,
            status,
            is_published: row.is_published,
            is_pinned: row.is_pinned,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            valid_from: row.valid_from,
            valid_to: row.valid_to,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    property_id: Option<Uuid>,
    title: String,
    description: Option<String>,
    venue: Option<String>,
    image_url: Option<String>,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    status: String,
    is_published: bool,
    is_pinned: bool,
    is_featured: bool,
    sort_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = RepositoryError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let status: EventStatus = row
            .status
            .parse()
            .map_err(|e: resort_content::ContentError| RepositoryError::Decode(format!("event {}: {}", row.id, e)))?;

        Ok(Event {
            id: row.id,
            property_id: row.property_id,
            title: row.title,
            description: row.description,
            venue: row.venue,
            image_url: row.image_url,
            start_date: row.start_date,
            end_date: row.end_date,
            status,
            is_published: row.is_published,
            is_pinned: row.is_pinned,
            is_featured: row.is_featured,
            sort_order: row.sort_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn list_heroes(&self) -> RepositoryResult<Vec<Hero>> {
        let rows = sqlx::query_as::<_, HeroRow>(
            r#"
            SELECT id, property_id, title, subtitle, image_url, cta_label, cta_href, target_pages,
                   is_active, is_featured, sort_order, show_from, show_until, view_count, click_count,
                   created_at, updated_at
            FROM heroes
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(rows.into_iter().map(Hero::from).collect())
    }

    async fn list_offers(&self) -> RepositoryResult<Vec<SpecialOffer>> {
        let rows = sqlx::query_as::<_, OfferRow>(
            r#"
            SELECT id, property_id, title, description, image_url, discount_percentage, promo_code, status,
                   is_published, is_pinned, is_featured, sort_order, valid_from, valid_to, created_at, updated_at
            FROM special_offers
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(decode_rows("offers", rows))
    }

    async fn list_events(&self) -> RepositoryResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, property_id, title, description, venue, image_url, start_date, end_date, status,
                   is_published, is_pinned, is_featured, sort_order, created_at, updated_at
            FROM events
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        Ok(decode_rows("events", rows))
    }

    async fn increment_hero_counter(&self, id: Uuid, interaction: Interaction) -> RepositoryResult<()> {
        // Single-statement increment; concurrent bumps never overwrite each other.
        let sql = format!(
            "UPDATE heroes SET {col} = {col} + 1 WHERE id = $1",
            col = interaction.counter_column()
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(backend)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}
