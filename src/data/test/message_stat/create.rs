use super::*;

/// Tests recording an ordinary human message.
///
/// Expected: Ok(true) with is_persona false and no persona name
#[tokio::test]
async fn records_human_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageStatRepository::new(db);
    let inserted = repo
        .create(CreateMessageStatParam {
            user_id: 1,
            guild_id: 2,
            channel_id: 3,
            message_id: 4,
            persona_name: None,
        })
        .await?;

    assert!(inserted);
    let stored = repo.find_by_message_id(4).await?.unwrap();
    assert!(!stored.is_persona);
    assert!(stored.persona_name.is_none());
    assert_eq!(stored.user_id, 1);
    assert_eq!(stored.channel_id, 3);

    Ok(())
}

/// Tests recording a persona message sets the persona flag.
///
/// Expected: Ok(true) with is_persona true and the persona name stored
#[tokio::test]
async fn records_persona_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageStatRepository::new(db);
    repo.create(CreateMessageStatParam {
        user_id: 1,
        guild_id: 2,
        channel_id: 3,
        message_id: 5,
        persona_name: Some("Alice".to_string()),
    })
    .await?;

    let stored = repo.find_by_message_id(5).await?.unwrap();
    assert!(stored.is_persona);
    assert_eq!(stored.persona_name.as_deref(), Some("Alice"));

    Ok(())
}

/// Tests that recording the same message ID twice keeps one record.
///
/// The second write must be ignored without error, leaving the first record as-is.
///
/// Expected: Ok(false) on the duplicate, single record in table
#[tokio::test]
async fn ignores_duplicate_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageStat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::message_stat::MessageStatFactory::new(db)
        .message_id("77")
        .build()
        .await?;

    let repo = MessageStatRepository::new(db);
    let inserted = repo
        .create(CreateMessageStatParam {
            user_id: 1,
            guild_id: 2,
            channel_id: 3,
            message_id: 77,
            persona_name: Some("Alice".to_string()),
        })
        .await?;

    assert!(!inserted);
    let count = entity::prelude::MessageStat::find().count(db).await?;
    assert_eq!(count, 1);
    let stored = repo.find_by_message_id(77).await?.unwrap();
    assert!(!stored.is_persona);

    Ok(())
}
