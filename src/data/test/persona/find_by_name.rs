use super::*;

/// Tests finding a persona by name without knowing its owner.
///
/// Expected: Ok(Some) with the owner's user ID
#[tokio::test]
async fn finds_persona_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PersonaFactory::new(db)
        .user_id("42")
        .guild_id("2")
        .name("Alice")
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let found = repo.find_by_name(2, "Alice").await?;

    assert_eq!(found.map(|p| p.user_id), Some(42));

    Ok(())
}

/// Tests that a shared persona name resolves to the oldest record.
///
/// Two users own a persona with the same name in one guild; the lookup ignores
/// the owner and returns the first stored record.
///
/// Expected: Ok(Some) with the first owner
#[tokio::test]
async fn resolves_shared_name_to_first_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PersonaFactory::new(db)
        .user_id("10")
        .guild_id("2")
        .name("Narrator")
        .build()
        .await?;
    PersonaFactory::new(db)
        .user_id("20")
        .guild_id("2")
        .name("Narrator")
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let found = repo.find_by_name(2, "Narrator").await?;

    assert_eq!(found.map(|p| p.user_id), Some(10));

    Ok(())
}

/// Tests that personas from other guilds are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PersonaFactory::new(db)
        .guild_id("3")
        .name("Alice")
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let found = repo.find_by_name(2, "Alice").await?;

    assert!(found.is_none());

    Ok(())
}
