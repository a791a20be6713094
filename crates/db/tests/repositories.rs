use assert_matches::assert_matches;
use falcone_core::audit::{action_types, entity_types};
use falcone_core::types::MAIN_SLUG;
use falcone_db::models::audit::CreateAuditLog;
use falcone_db::models::booking::{CreateBookingRequest, UpdateBookingRequest};
use falcone_db::models::contact_message::CreateContactMessage;
use falcone_db::models::event::{CreateEvent, EventFilter, UpdateEvent};
use falcone_db::models::media_asset::{CreateMediaAsset, MediaFilter, UpdateMediaAsset};
use falcone_db::models::mix::{CreateMix, MixFilter};
use falcone_db::models::press_kit::UpsertPressKit;
use falcone_db::models::site_settings::UpsertSiteSettings;
use falcone_db::repositories::{
    AuditLogRepo, BookingRepo, ContactMessageRepo, EventRepo, MediaAssetRepo, MixRepo,
    PressKitRepo, SiteSettingsRepo,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use sqlx::PgPool;

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

fn booking(name: &str) -> CreateBookingRequest {
    from_json(json!({
        "name": name,
        "email": "promoter@example.com",
        "eventDate": "2026-07-04",
        "location": "Berlin",
        "message": "Summer rooftop party, 300 guests"
    }))
}

fn event(title: &str, start_at: &str, published: bool) -> CreateEvent {
    from_json(json!({
        "title": title,
        "startAt": start_at,
        "city": "Lisbon",
        "country": "Portugal",
        "venue": "Lux Fragil",
        "isPublished": published
    }))
}

fn mix(title: &str, featured: bool, sort_order: i32) -> CreateMix {
    from_json(json!({
        "title": title,
        "embedUrl": "https://soundcloud.com/dj/mix",
        "embedType": "soundcloud",
        "isFeatured": featured,
        "sortOrder": sort_order
    }))
}

fn media(title: &str, media_type: &str, published: bool) -> CreateMediaAsset {
    from_json(json!({
        "type": media_type,
        "title": title,
        "url": "https://cdn.example.com/photos/1-a.jpg",
        "isPublished": published
    }))
}

fn press_kit(bio: &str) -> UpsertPressKit {
    from_json(json!({
        "bioShort": bio,
        "socialLinks": { "instagram": "https://instagram.com/dj" },
        "achievements": ["Residency at Club X"]
    }))
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_starts_new_and_accepts_any_transition(pool: PgPool) {
    let created = BookingRepo::create(&pool, &booking("Ana")).await.unwrap();
    assert_eq!(created.status, "NEW");
    assert_eq!(created.event_date.to_string(), "2026-07-04");
    assert!(created.phone.is_none());

    for status in ["COMPLETED", "NEW", "DECLINED"] {
        let patch = UpdateBookingRequest {
            status: Some(status.into()),
            notes: Some(format!("moved to {status}")),
        };
        let updated = BookingRepo::update(&pool, created.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_update_keeps_omitted_fields(pool: PgPool) {
    let created = BookingRepo::create(&pool, &booking("Ana")).await.unwrap();
    let with_notes = UpdateBookingRequest {
        status: None,
        notes: Some("Called back".into()),
    };
    BookingRepo::update(&pool, created.id, &with_notes).await.unwrap();

    let status_only = UpdateBookingRequest {
        status: Some("CONTACTED".into()),
        notes: None,
    };
    let updated = BookingRepo::update(&pool, created.id, &status_only)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "CONTACTED");
    assert_eq!(updated.notes.as_deref(), Some("Called back"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_list_pages_and_filters(pool: PgPool) {
    for i in 0..5 {
        BookingRepo::create(&pool, &booking(&format!("Client {i}"))).await.unwrap();
    }
    let first = BookingRepo::list_recent(&pool, 1).await.unwrap();
    let confirm = UpdateBookingRequest {
        status: Some("CONFIRMED".into()),
        notes: None,
    };
    BookingRepo::update(&pool, first[0].id, &confirm).await.unwrap();

    let page = BookingRepo::list(&pool, None, 2, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(BookingRepo::count(&pool, None).await.unwrap(), 5);

    let confirmed = BookingRepo::list(&pool, Some("CONFIRMED"), 20, 0).await.unwrap();
    assert_eq!(confirmed.len(), 1);
    assert_eq!(BookingRepo::count(&pool, Some("NEW")).await.unwrap(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_rows_report_absence(pool: PgPool) {
    assert!(BookingRepo::find_by_id(&pool, 999).await.unwrap().is_none());
    assert!(!BookingRepo::delete(&pool, 999).await.unwrap());
    assert!(EventRepo::update(&pool, 999, &UpdateEvent::default())
        .await
        .unwrap()
        .is_none());
    assert!(!MixRepo::delete(&pool, 999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upcoming_events_are_ascending_and_exclude_past(pool: PgPool) {
    EventRepo::create(&pool, &event("Past Gig", "2020-01-01T22:00:00Z", true)).await.unwrap();
    EventRepo::create(&pool, &event("Later Gig", "2099-06-01T22:00:00Z", true)).await.unwrap();
    EventRepo::create(&pool, &event("Sooner Gig", "2098-06-01T22:00:00Z", true)).await.unwrap();
    EventRepo::create(&pool, &event("Hidden Gig", "2097-06-01T22:00:00Z", false)).await.unwrap();

    let filter = EventFilter {
        upcoming: true,
        published_only: true,
        ..Default::default()
    };
    let titles: Vec<_> = EventRepo::list(&pool, &filter)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Sooner Gig", "Later Gig"]);

    let all = EventRepo::list(&pool, &EventFilter::default()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].title, "Later Gig");
    assert_eq!(all[3].title, "Past Gig");

    assert_eq!(EventRepo::count_upcoming_published(&pool).await.unwrap(), 2);
    assert_eq!(EventRepo::list_next(&pool, 1).await.unwrap()[0].title, "Sooner Gig");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_update_clears_end_time_and_urls_with_empty_string(pool: PgPool) {
    let input: CreateEvent = from_json(json!({
        "title": "NYE",
        "startAt": "2099-12-31T22:00",
        "endAt": "2100-01-01T04:00",
        "city": "Berlin",
        "country": "Germany",
        "venue": "Tresor",
        "ticketUrl": "https://tickets.example.com/nye"
    }));
    let created = EventRepo::create(&pool, &input).await.unwrap();
    assert!(created.end_at.is_some());
    assert!(created.is_published);
    assert!(!created.is_featured);

    let patch: UpdateEvent = from_json(json!({ "endAt": "", "ticketUrl": "" }));
    let updated = EventRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.end_at.is_none());
    assert!(updated.ticket_url.is_none());
    assert_eq!(updated.title, "NYE");
    assert_eq!(updated.start_at, created.start_at);
}

// ---------------------------------------------------------------------------
// Mixes & media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn mixes_order_featured_then_sort_order(pool: PgPool) {
    MixRepo::create(&pool, &mix("A", false, 0)).await.unwrap();
    MixRepo::create(&pool, &mix("B", true, 5)).await.unwrap();
    MixRepo::create(&pool, &mix("C", false, -1)).await.unwrap();

    let titles: Vec<_> = MixRepo::list(&pool, &MixFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.title)
        .collect();
    assert_eq!(titles, vec!["B", "C", "A"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mix_decade_filter(pool: PgPool) {
    let mut eighties = mix("Synth Night", false, 0);
    eighties.decade = Some("EIGHTIES".into());
    MixRepo::create(&pool, &eighties).await.unwrap();
    MixRepo::create(&pool, &mix("Untagged", false, 0)).await.unwrap();

    let filter = MixFilter {
        decade: Some("EIGHTIES".into()),
        ..Default::default()
    };
    let found = MixRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].decade.as_deref(), Some("EIGHTIES"));
    assert_eq!(MixRepo::count_published(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_filters_combine(pool: PgPool) {
    MediaAssetRepo::create(&pool, &media("Crowd", "PHOTO", true)).await.unwrap();
    MediaAssetRepo::create(&pool, &media("Backstage", "PHOTO", false)).await.unwrap();
    MediaAssetRepo::create(&pool, &media("Aftermovie", "VIDEO", true)).await.unwrap();

    let filter = MediaFilter {
        media_type: Some("PHOTO".into()),
        published_only: true,
        ..Default::default()
    };
    let found = MediaAssetRepo::list(&pool, &filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Crowd");
    assert!(found[0].tags.is_empty());
    assert_eq!(MediaAssetRepo::count(&pool).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn media_decade_is_cleared_by_empty_string(pool: PgPool) {
    let mut input = media("Crowd", "PHOTO", true);
    input.decade = Some("NINETIES".into());
    let asset = MediaAssetRepo::create(&pool, &input).await.unwrap();

    let untouched = UpdateMediaAsset {
        title: Some("Crowd surfing".into()),
        ..Default::default()
    };
    let asset = MediaAssetRepo::update(&pool, asset.id, &untouched).await.unwrap().unwrap();
    assert_eq!(asset.decade.as_deref(), Some("NINETIES"));

    let cleared = UpdateMediaAsset {
        decade: Some(String::new()),
        ..Default::default()
    };
    let asset = MediaAssetRepo::update(&pool, asset.id, &cleared).await.unwrap().unwrap();
    assert_eq!(asset.decade, None);
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn press_kit_upsert_is_idempotent(pool: PgPool) {
    assert!(PressKitRepo::find_by_slug(&pool, MAIN_SLUG).await.unwrap().is_none());

    let bio = "x".repeat(60);
    let first = PressKitRepo::upsert(&pool, MAIN_SLUG, &press_kit(&bio)).await.unwrap();
    let second = PressKitRepo::upsert(&pool, MAIN_SLUG, &press_kit(&bio)).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.bio_short, bio);
    assert_eq!(
        second.social_links.unwrap()["instagram"],
        "https://instagram.com/dj"
    );

    let (rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM press_kits")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn site_settings_upsert_replaces_content(pool: PgPool) {
    let first = SiteSettingsRepo::upsert(&pool, MAIN_SLUG, &UpsertSiteSettings::defaults("DJ Falcone"))
        .await
        .unwrap();
    assert!(first.booking_enabled);
    assert!(!first.maintenance_mode);

    let mut next = UpsertSiteSettings::defaults("DJ Falcone Live");
    next.maintenance_mode = true;
    let second = SiteSettingsRepo::upsert(&pool, MAIN_SLUG, &next).await.unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.site_name, "DJ Falcone Live");
    assert!(second.maintenance_mode);
}

// ---------------------------------------------------------------------------
// Contact messages & audit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_unread_filter_follows_read_flag(pool: PgPool) {
    let input: CreateContactMessage = from_json(json!({
        "name": "Bo",
        "email": "bo@example.com",
        "message": "Love the last mix!"
    }));
    let a = ContactMessageRepo::create(&pool, &input).await.unwrap();
    ContactMessageRepo::create(&pool, &input).await.unwrap();

    ContactMessageRepo::set_read(&pool, a.id, true).await.unwrap();

    assert_eq!(ContactMessageRepo::list(&pool, true).await.unwrap().len(), 1);
    assert_eq!(ContactMessageRepo::list(&pool, false).await.unwrap().len(), 2);
    assert_eq!(ContactMessageRepo::count_unread(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn audit_entries_are_appended(pool: PgPool) {
    let entry = CreateAuditLog::new(action_types::CREATE, entity_types::BOOKING_REQUEST)
        .entity_id(42)
        .meta(json!({ "email": "promoter@example.com" }))
        .client(Some("203.0.113.7".into()), None);
    let stored = AuditLogRepo::insert(&pool, &entry).await.unwrap();
    assert!(stored.actor_id.is_none());

    let entries = AuditLogRepo::list_for_entity(&pool, entity_types::BOOKING_REQUEST, 42)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].ip_address.as_deref(), Some("203.0.113.7"));

    let bogus = CreateAuditLog::new("PUBLISH", entity_types::EVENT);
    assert_matches!(
        AuditLogRepo::insert(&pool, &bogus).await,
        Err(sqlx::Error::Database(_))
    );
}
