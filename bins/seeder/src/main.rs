//! Database seeder for Valuar development and testing.
//!
//! Seeds the default sector configuration table. Existing sectors are left
//! untouched so admin edits to multiples survive a re-seed.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use valuar_db::entities::sectors;

/// Default sector table: id, display name, base multiple in tenths,
/// description, report paragraph.
const DEFAULT_SECTORS: &[(&str, &str, i64, &str, &str)] = &[
    (
        "bouw",
        "Bouw & Installatie",
        45,
        "Bouwbedrijven, installateurs en aannemers",
        "Bouw- en installatiebedrijven worden gewaardeerd op orderportefeuille en vakbekwaam personeel.",
    ),
    (
        "ict",
        "ICT & Software",
        55,
        "Softwarebedrijven, IT-dienstverleners en hosting",
        "ICT-bedrijven kennen relatief hoge multiples door terugkerende omzet en schaalbaarheid.",
    ),
    (
        "zakelijke-dienstverlening",
        "Zakelijke dienstverlening",
        50,
        "Advies, administratie en overige zakelijke diensten",
        "Bij zakelijke dienstverleners weegt de afhankelijkheid van de eigenaar zwaar mee in de waardering.",
    ),
    (
        "industrie",
        "Industrie & Productie",
        45,
        "Maakbedrijven en productieondernemingen",
        "Industriële bedrijven worden beoordeeld op machinepark, bezettingsgraad en klantenspreiding.",
    ),
    (
        "groothandel",
        "Groothandel",
        40,
        "Groothandels en distributiebedrijven",
        "Voor groothandels zijn leverancierscontracten en voorraadbeheer bepalend voor de waarde.",
    ),
    (
        "detailhandel",
        "Detailhandel",
        35,
        "Winkels en webshops",
        "Detailhandel kent lagere multiples door margedruk en locatieafhankelijkheid.",
    ),
    (
        "transport",
        "Transport & Logistiek",
        40,
        "Transporteurs, logistiek en opslag",
        "Transportbedrijven worden gewaardeerd op contractduur, wagenpark en chauffeursbestand.",
    ),
    (
        "horeca",
        "Horeca",
        30,
        "Restaurants, cafés en hotels",
        "Horecaondernemingen zijn sterk locatie- en eigenaarsgebonden, wat de multiple drukt.",
    ),
    (
        "zorg",
        "Zorg & Welzijn",
        50,
        "Zorginstellingen en praktijken",
        "Zorgondernemingen profiteren van stabiele vraag en langlopende contracten met verzekeraars.",
    ),
    (
        "overig",
        "Overig",
        40,
        "Sectoren die niet in een andere categorie passen",
        "Voor overige sectoren wordt een gemiddelde marktmultiple gehanteerd.",
    ),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = valuar_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding sectors...");
    seed_sectors(&db).await;

    println!("Seeding complete!");
}

async fn seed_sectors(db: &DatabaseConnection) {
    for (id, name, multiple_tenths, description, text) in DEFAULT_SECTORS {
        let existing = sectors::Entity::find_by_id(*id)
            .one(db)
            .await
            .expect("Failed to query sectors");
        if existing.is_some() {
            println!("  sector '{id}' already present, skipping");
            continue;
        }

        let now = Utc::now();
        let sector = sectors::ActiveModel {
            id: Set((*id).to_string()),
            name: Set((*name).to_string()),
            multiple: Set(Decimal::new(*multiple_tenths, 1)),
            description: Set((*description).to_string()),
            text: Set((*text).to_string()),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };
        sector.insert(db).await.expect("Failed to insert sector");
        println!("  seeded sector '{id}'");
    }
}
