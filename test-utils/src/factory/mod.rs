//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder plus a `create_*` shorthand.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let (owner, plan) = factory::helpers::create_owner_with_subscription(&db).await?;
//!     let gym = factory::create_gym(&db, owner.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let owner = factory::user::UserFactory::new(&db)
//!     .email("owner@example.com")
//!     .role("OWNER")
//!     .subscription_id(plan.id)
//!     .build()
//!     .await?;
//! ```

pub mod equipment;
pub mod gym;
pub mod helpers;
pub mod member;
pub mod subscription;
pub mod todo;
pub mod user;

pub use equipment::create_equipment;
pub use gym::create_gym;
pub use member::create_member;
pub use subscription::{create_feature, create_subscription};
pub use todo::create_todo;
pub use user::create_user;
