use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Todo};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Todo)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the subscription plan tables.
    ///
    /// Adds, in dependency order:
    /// - Subscription
    /// - Feature
    /// - SubscriptionFeature
    /// - User
    pub fn with_subscription_tables(self) -> Self {
        self.with_table(Subscription)
            .with_table(Feature)
            .with_table(SubscriptionFeature)
            .with_table(User)
    }

    /// Adds every table needed for gym, member and equipment operations.
    ///
    /// Equivalent to `with_subscription_tables()` followed by Gym, Member,
    /// MembershipFee and Equipment.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_gym_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_gym_tables(self) -> Self {
        self.with_subscription_tables()
            .with_table(Gym)
            .with_table(Member)
            .with_table(MembershipFee)
            .with_table(Equipment)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_gym_tables().with_table(Todo)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
