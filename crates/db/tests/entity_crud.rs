use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, Utc};
use sqlx::PgPool;

use dogule_db::models::finanz::{CreateFinanz, FinanzFilter};
use dogule_db::models::hund::{CreateHund, HundFilter};
use dogule_db::models::kalender::{CreateKalenderEvent, KalenderFilter, UpdateKalenderEvent};
use dogule_db::models::kommunikation::{CreateNachricht, NachrichtFilter};
use dogule_db::models::kunde::{CreateKunde, Kunde, KundeFilter, UpdateKunde};
use dogule_db::models::kurs::{CreateKurs, KursFilter};
use dogule_db::models::refresh_token::CreateRefreshToken;
use dogule_db::models::user::CreateUser;
use dogule_db::repositories::{
    FinanzRepo, HundRepo, KalenderRepo, KommunikationRepo, KundeRepo, KursRepo,
    RefreshTokenRepo, UserRepo,
};
use dogule_db::Database;

async fn bootstrap(pool: &PgPool) {
    Database::from_pool(pool.clone()).connect().await.unwrap();
}

fn new_kunde(vorname: &str, nachname: &str) -> CreateKunde {
    CreateKunde {
        vorname: vorname.to_string(),
        nachname: nachname.to_string(),
        email: None,
        telefon: None,
        adresse: None,
        notizen: None,
    }
}

fn new_hund(kunde: &Kunde, name: &str) -> CreateHund {
    CreateHund {
        kunde_id: kunde.id,
        name: name.to_string(),
        rasse: None,
        geburtsdatum: None,
        chip_nummer: None,
        notizen: None,
    }
}

fn new_finanz(typ: &str, betrag_cents: i64, datum: Option<NaiveDate>) -> CreateFinanz {
    CreateFinanz {
        typ: typ.to_string(),
        betrag_cents,
        datum,
        beschreibung: None,
        kategorie: None,
        kunde_id: None,
        kurs_id: None,
    }
}

// ---------------------------------------------------------------------------
// Kunden
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_kunde_crud(pool: PgPool) {
    bootstrap(&pool).await;

    let created = KundeRepo::create(&pool, &new_kunde("Anna", "Muster"))
        .await
        .unwrap();
    assert_eq!(created.vorname, "Anna");

    let found = KundeRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(found.unwrap().nachname, "Muster");

    let updated = KundeRepo::update(
        &pool,
        created.id,
        &UpdateKunde {
            telefon: Some("+41 79 000 00 00".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.vorname, "Anna", "untouched fields keep their value");
    assert_eq!(updated.telefon.as_deref(), Some("+41 79 000 00 00"));
    assert!(updated.updated_at >= created.updated_at);

    assert!(KundeRepo::delete(&pool, created.id).await.unwrap());
    assert!(!KundeRepo::delete(&pool, created.id).await.unwrap());
    assert!(KundeRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn test_update_missing_kunde_returns_none(pool: PgPool) {
    bootstrap(&pool).await;
    let result = KundeRepo::update(&pool, uuid::Uuid::new_v4(), &UpdateKunde::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
async fn test_kunde_pagination_and_total(pool: PgPool) {
    bootstrap(&pool).await;
    for name in ["Arnold", "Berger", "Conrad"] {
        KundeRepo::create(&pool, &new_kunde("X", name)).await.unwrap();
    }

    let filter = KundeFilter::default();
    let page = KundeRepo::list(&pool, &filter, 2, 0).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].nachname, "Arnold");
    assert_eq!(KundeRepo::count(&pool, &filter).await.unwrap(), 3);

    let rest = KundeRepo::list(&pool, &filter, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].nachname, "Conrad");
}

#[sqlx::test]
async fn test_kunde_search_matches_case_insensitively(pool: PgPool) {
    bootstrap(&pool).await;
    KundeRepo::create(&pool, &new_kunde("Anna", "Muster")).await.unwrap();
    KundeRepo::create(&pool, &new_kunde("Beat", "Keller")).await.unwrap();

    let filter = KundeFilter {
        search: Some("must".to_string()),
    };
    let hits = KundeRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].vorname, "Anna");
    assert_eq!(KundeRepo::count(&pool, &filter).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Hunde
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_deleting_kunde_cascades_to_hunde(pool: PgPool) {
    bootstrap(&pool).await;
    let kunde = KundeRepo::create(&pool, &new_kunde("Anna", "Muster"))
        .await
        .unwrap();
    HundRepo::create(&pool, &new_hund(&kunde, "Bello")).await.unwrap();
    HundRepo::create(&pool, &new_hund(&kunde, "Luna")).await.unwrap();

    let by_owner = HundFilter {
        kunde_id: Some(kunde.id),
    };
    assert_eq!(HundRepo::count(&pool, &by_owner).await.unwrap(), 2);

    KundeRepo::delete(&pool, kunde.id).await.unwrap();
    assert_eq!(
        HundRepo::count(&pool, &HundFilter::default()).await.unwrap(),
        0
    );
}

#[sqlx::test]
async fn test_hund_requires_existing_kunde(pool: PgPool) {
    bootstrap(&pool).await;
    let input = CreateHund {
        kunde_id: uuid::Uuid::new_v4(),
        name: "Waise".to_string(),
        rasse: None,
        geburtsdatum: None,
        chip_nummer: None,
        notizen: None,
    };
    let err = HundRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23503"));
}

// ---------------------------------------------------------------------------
// Kurse
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_kurs_date_order_is_enforced_by_table(pool: PgPool) {
    bootstrap(&pool).await;
    let input = CreateKurs {
        titel: "Welpenkurs".to_string(),
        beschreibung: None,
        trainer: None,
        ort: None,
        start_datum: NaiveDate::from_ymd_opt(2026, 5, 10),
        end_datum: NaiveDate::from_ymd_opt(2026, 5, 1),
        max_teilnehmer: Some(8),
        preis_cents: Some(24_000),
    };
    let err = KursRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23514"));
    assert_eq!(
        KursRepo::count(&pool, &KursFilter::default()).await.unwrap(),
        0
    );
}

// ---------------------------------------------------------------------------
// Finanzen
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_finanz_sums_per_typ(pool: PgPool) {
    bootstrap(&pool).await;
    FinanzRepo::create(&pool, &new_finanz("ausgabe", 1500, None))
        .await
        .unwrap();
    FinanzRepo::create(&pool, &new_finanz("einnahme", 2500, None))
        .await
        .unwrap();

    let summary = FinanzRepo::summary(&pool, None, None).await.unwrap();
    assert_eq!(summary.einnahme, 2500);
    assert_eq!(summary.ausgabe, 1500);
    assert_eq!(summary.saldo, 1000);
}

#[sqlx::test]
async fn test_finanz_sum_is_zero_without_rows(pool: PgPool) {
    bootstrap(&pool).await;
    let sum = FinanzRepo::sum_by_typ(&pool, "einnahme", None, None)
        .await
        .unwrap();
    assert_eq!(sum, 0);
}

#[sqlx::test]
async fn test_finanz_date_range_filter(pool: PgPool) {
    bootstrap(&pool).await;
    let jan = NaiveDate::from_ymd_opt(2026, 1, 15);
    let feb = NaiveDate::from_ymd_opt(2026, 2, 15);
    FinanzRepo::create(&pool, &new_finanz("einnahme", 100, jan))
        .await
        .unwrap();
    FinanzRepo::create(&pool, &new_finanz("einnahme", 200, feb))
        .await
        .unwrap();

    let filter = FinanzFilter {
        typ: None,
        from: NaiveDate::from_ymd_opt(2026, 2, 1),
        to: None,
    };
    let rows = FinanzRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].betrag_cents, 200);

    let sum = FinanzRepo::sum_by_typ(&pool, "einnahme", None, NaiveDate::from_ymd_opt(2026, 1, 31))
        .await
        .unwrap();
    assert_eq!(sum, 100);
}

#[sqlx::test]
async fn test_finanz_defaults_datum_to_today(pool: PgPool) {
    bootstrap(&pool).await;
    let row = FinanzRepo::create(&pool, &new_finanz("einnahme", 1, None))
        .await
        .unwrap();
    let (today,): (NaiveDate,) = sqlx::query_as("SELECT CURRENT_DATE")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.datum, today);
}

#[sqlx::test]
async fn test_finanz_rejects_unknown_typ_at_table_level(pool: PgPool) {
    bootstrap(&pool).await;
    let err = FinanzRepo::create(&pool, &new_finanz("spende", 1, None))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23514"));
}

// ---------------------------------------------------------------------------
// Kalender
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_kalender_range_check_and_upcoming(pool: PgPool) {
    bootstrap(&pool).await;
    let now = Utc::now();

    let past = CreateKalenderEvent {
        titel: "Gestern".to_string(),
        beschreibung: None,
        ort: None,
        start_at: now - Duration::days(1),
        end_at: now - Duration::days(1) + Duration::hours(1),
        kurs_id: None,
        hund_id: None,
    };
    let future = CreateKalenderEvent {
        titel: "Morgen".to_string(),
        start_at: now + Duration::days(1),
        end_at: now + Duration::days(1) + Duration::hours(1),
        ..past.clone()
    };
    KalenderRepo::create(&pool, &past).await.unwrap();
    let event = KalenderRepo::create(&pool, &future).await.unwrap();

    assert_eq!(KalenderRepo::count_upcoming(&pool, now).await.unwrap(), 1);

    let window = KalenderFilter {
        from: Some(now),
        ..Default::default()
    };
    let rows = KalenderRepo::list(&pool, &window, 20, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].titel, "Morgen");

    let err = KalenderRepo::update(
        &pool,
        event.id,
        &UpdateKalenderEvent {
            end_at: Some(event.start_at - Duration::minutes(1)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23514"));
}

// ---------------------------------------------------------------------------
// Kommunikation
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_kommunikation_filters_by_kunde(pool: PgPool) {
    bootstrap(&pool).await;
    let kunde = KundeRepo::create(&pool, &new_kunde("Anna", "Muster"))
        .await
        .unwrap();

    let input = CreateNachricht {
        kanal: "email".to_string(),
        richtung: "ausgehend".to_string(),
        betreff: Some("Kursbestätigung".to_string()),
        inhalt: "Willkommen".to_string(),
        kunde_id: Some(kunde.id),
        hund_id: None,
        gesendet_at: None,
    };
    let created = KommunikationRepo::create(&pool, &input).await.unwrap();
    KommunikationRepo::create(
        &pool,
        &CreateNachricht {
            kunde_id: None,
            ..input.clone()
        },
    )
    .await
    .unwrap();

    let filter = NachrichtFilter {
        kunde_id: Some(kunde.id),
        kanal: None,
    };
    let rows = KommunikationRepo::list(&pool, &filter, 20, 0).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, created.id);

    // Deleting the customer keeps the message but clears the link.
    KundeRepo::delete(&pool, kunde.id).await.unwrap();
    let orphan = KommunikationRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert!(orphan.kunde_id.is_none());
}

// ---------------------------------------------------------------------------
// Users & refresh tokens
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_duplicate_email_is_unique_violation(pool: PgPool) {
    bootstrap(&pool).await;
    let input = CreateUser {
        email: "a@example.ch".to_string(),
        password_hash: "hash".to_string(),
        name: None,
    };
    UserRepo::create(&pool, &input).await.unwrap();
    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.is_unique_violation());
}

#[sqlx::test]
async fn test_refresh_token_revocation(pool: PgPool) {
    bootstrap(&pool).await;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email: "b@example.ch".to_string(),
            password_hash: "hash".to_string(),
            name: Some("B".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        UserRepo::find_by_email(&pool, "b@example.ch")
            .await
            .unwrap()
            .map(|u| u.id),
        Some(user.id)
    );

    let expires_at = Utc::now() + Duration::days(7);
    for hash in ["h1", "h2"] {
        RefreshTokenRepo::create(
            &pool,
            &CreateRefreshToken {
                user_id: user.id,
                token_hash: hash.to_string(),
                expires_at,
            },
        )
        .await
        .unwrap();
    }

    let first = RefreshTokenRepo::find_by_hash(&pool, "h1")
        .await
        .unwrap()
        .unwrap();
    assert!(!first.is_revoked());
    assert!(RefreshTokenRepo::revoke(&pool, first.id).await.unwrap());
    assert!(!RefreshTokenRepo::revoke(&pool, first.id).await.unwrap());

    // Revoked rows are still found so callers can tell reuse from garbage.
    let first = RefreshTokenRepo::find_by_hash(&pool, "h1")
        .await
        .unwrap()
        .unwrap();
    assert!(first.is_revoked());

    assert_eq!(
        RefreshTokenRepo::revoke_all_for_user(&pool, user.id)
            .await
            .unwrap(),
        1
    );
}
