use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price: f64,
    pub yearly_price: f64,
    pub max_gyms: i32,
    pub max_members: i32,
    pub max_equipment: i32,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::subscription_feature::Entity")]
    SubscriptionFeature,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::subscription_feature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubscriptionFeature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
