use super::*;

/// Tests counting a user's personas in a guild.
///
/// Expected: Ok with count of only that owner's personas
#[tokio::test]
async fn counts_owner_personas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Persona)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        PersonaFactory::new(db)
            .user_id("1")
            .guild_id("2")
            .build()
            .await?;
    }
    PersonaFactory::new(db)
        .user_id("5")
        .guild_id("2")
        .build()
        .await?;

    let repo = PersonaRepository::new(db);

    assert_eq!(repo.count_by_owner(1, 2).await?, 3);
    assert_eq!(repo.count_by_owner(7, 2).await?, 0);

    Ok(())
}
