use anyhow::Context;
use heroes_common::db::Database;
use heroes_entity::{hero, strength::Strength};
use heroes_module_fundamental::{
    hero::service::HeroService, hero_power::model::ValidatedHeroPower,
    hero_power::service::HeroPowerService, power::service::PowerService,
};
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::instrument;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
    ("super human senses", "allows the wielder to use her senses at a super-human level"),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// Hero powers, by index into [`HEROES`] and [`POWERS`].
const HERO_POWERS: &[(usize, usize, Strength)] = &[
    (0, 3, Strength::Strong),
    (1, 0, Strength::Average),
    (2, 2, Strength::Strong),
    (3, 1, Strength::Weak),
    (5, 1, Strength::Strong),
    (5, 0, Strength::Strong),
    (7, 1, Strength::Average),
];

/// Store the sample heroes and powers, unless there are heroes already.
///
/// Returns `true` if data was stored.
#[instrument(skip(db), err)]
pub async fn sample_data(db: &Database) -> anyhow::Result<bool> {
    if hero::Entity::find().count(db).await? > 0 {
        log::info!("Heroes present, skipping sample data");
        return Ok(false);
    }

    let heroes = HeroService::new();
    let powers = PowerService::new(db.clone());
    let hero_powers = HeroPowerService::new(db.clone());

    let tx = db.begin().await?;

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        hero_ids.push(heroes.create_hero(name, super_name, &tx).await?.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        power_ids.push(powers.create_power(name, description, &tx).await?.id);
    }

    for (hero, power, strength) in HERO_POWERS {
        let new = ValidatedHeroPower {
            hero_id: *hero_ids.get(*hero).context("unknown sample hero")?,
            power_id: *power_ids.get(*power).context("unknown sample power")?,
            strength: *strength,
        };
        hero_powers.insert_hero_power(new, &tx).await?;
    }

    tx.commit().await?;

    log::info!(
        "Stored {} heroes, {} powers, and {} hero powers",
        HEROES.len(),
        POWERS.len(),
        HERO_POWERS.len()
    );

    Ok(true)
}
