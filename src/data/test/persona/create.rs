use super::*;

/// Tests creating a new persona.
///
/// Verifies that the repository stores every field and returns parsed IDs.
///
/// Expected: Ok with persona created
#[tokio::test]
async fn creates_persona() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonaRepository::new(db);
    let persona = repo
        .create(CreatePersonaParam {
            user_id: 111111111,
            guild_id: 222222222,
            name: "Alice".to_string(),
            prefix: "a:".to_string(),
            avatar_url: Some("https://example.com/alice.png".to_string()),
        })
        .await?;

    assert_eq!(persona.user_id, 111111111);
    assert_eq!(persona.guild_id, 222222222);
    assert_eq!(persona.name, "Alice");
    assert_eq!(persona.prefix, "a:");
    assert_eq!(
        persona.avatar_url.as_deref(),
        Some("https://example.com/alice.png")
    );
    assert_eq!(persona.created_at, persona.updated_at);

    let count = entity::prelude::Persona::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the prefix is stored verbatim.
///
/// Verifies that surrounding whitespace and case in a prefix are preserved since
/// prefixes are compared as raw substrings.
///
/// Expected: Ok with prefix unchanged
#[tokio::test]
async fn preserves_prefix_verbatim() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PersonaRepository::new(db);
    let persona = repo
        .create(CreatePersonaParam {
            user_id: 1,
            guild_id: 2,
            name: "Bob".to_string(),
            prefix: " B> ".to_string(),
            avatar_url: None,
        })
        .await?;

    assert_eq!(persona.prefix, " B> ");
    assert!(persona.avatar_url.is_none());

    Ok(())
}
