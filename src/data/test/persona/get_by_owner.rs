use super::*;

/// Tests listing personas returns the most recently created first.
///
/// Expected: Ok with personas in descending creation order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (name, age_minutes) in [("Old", 30), ("Newest", 0), ("Middle", 10)] {
        PersonaFactory::new(db)
            .user_id("1")
            .guild_id("2")
            .name(name)
            .created_at(now - Duration::minutes(age_minutes))
            .build()
            .await?;
    }

    let repo = PersonaRepository::new(db);
    let personas = repo.get_by_owner(1, 2).await?;

    let names: Vec<&str> = personas.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Old"]);

    Ok(())
}

/// Tests listing personas is scoped to the owner and guild.
///
/// Verifies that personas of other users and personas the same user owns in
/// other guilds are excluded.
///
/// Expected: Ok with only the owner's personas in that guild
#[tokio::test]
async fn scopes_to_owner_and_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PersonaFactory::new(db)
        .user_id("1")
        .guild_id("2")
        .name("Mine")
        .build()
        .await?;
    PersonaFactory::new(db)
        .user_id("1")
        .guild_id("3")
        .name("Other Guild")
        .build()
        .await?;
    PersonaFactory::new(db)
        .user_id("9")
        .guild_id("2")
        .name("Other User")
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let personas = repo.get_by_owner(1, 2).await?;

    assert_eq!(personas.len(), 1);
    assert_eq!(personas[0].name, "Mine");

    Ok(())
}

/// Tests listing personas for a user without any.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonaRepository::new(db);
    let personas = repo.get_by_owner(1, 2).await?;

    assert!(personas.is_empty());

    Ok(())
}
