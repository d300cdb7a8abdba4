//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an OWNER user subscribed to a default plan.
///
/// The plan allows 2 gyms, 5 members and 5 equipment rows.
///
/// # Returns
/// - `Ok((owner, subscription))` - The created owner and the plan they are subscribed to
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owner_with_subscription(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::subscription::Model), DbErr> {
    let subscription = crate::factory::subscription::create_subscription(db).await?;
    let owner = crate::factory::user::UserFactory::new(db)
        .role("OWNER")
        .subscription_id(subscription.id)
        .build()
        .await?;

    Ok((owner, subscription))
}

/// Creates an owner with a plan and one gym.
///
/// # Returns
/// - `Ok((owner, subscription, gym))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_gym_with_owner(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::subscription::Model,
        entity::gym::Model,
    ),
    DbErr,
> {
    let (owner, subscription) = create_owner_with_subscription(db).await?;
    let gym = crate::factory::gym::create_gym(db, owner.id).await?;

    Ok((owner, subscription, gym))
}
