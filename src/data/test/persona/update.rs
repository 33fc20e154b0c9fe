use super::*;

/// Tests updating a persona's prefix only.
///
/// Expected: Ok(Some) with new prefix and unchanged avatar
#[tokio::test]
async fn updates_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = PersonaFactory::new(db)
        .user_id("1")
        .guild_id("2")
        .name("Alice")
        .prefix("a:")
        .avatar_url(Some("https://example.com/a.png".to_string()))
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let updated = repo
        .update(UpdatePersonaParam {
            user_id: 1,
            guild_id: 2,
            name: "Alice".to_string(),
            prefix: Some("al:".to_string()),
            avatar_url: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.prefix, "al:");
    assert_eq!(
        updated.avatar_url.as_deref(),
        Some("https://example.com/a.png")
    );
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests clearing a persona's avatar.
///
/// Expected: Ok(Some) with avatar removed
#[tokio::test]
async fn clears_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PersonaFactory::new(db)
        .user_id("1")
        .guild_id("2")
        .name("Alice")
        .avatar_url(Some("https://example.com/a.png".to_string()))
        .build()
        .await?;

    let repo = PersonaRepository::new(db);
    let updated = repo
        .update(UpdatePersonaParam {
            user_id: 1,
            guild_id: 2,
            name: "Alice".to_string(),
            prefix: None,
            avatar_url: Some(None),
        })
        .await?
        .unwrap();

    assert!(updated.avatar_url.is_none());

    Ok(())
}

/// Tests updating a persona that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_persona() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonaRepository::new(db);
    let updated = repo
        .update(UpdatePersonaParam {
            user_id: 1,
            guild_id: 2,
            name: "Ghost".to_string(),
            prefix: Some("g:".to_string()),
            avatar_url: None,
        })
        .await?;

    assert!(updated.is_none());

    Ok(())
}
