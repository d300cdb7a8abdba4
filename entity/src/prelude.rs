pub use super::equipment::Entity as Equipment;
pub use super::feature::Entity as Feature;
pub use super::gym::Entity as Gym;
pub use super::member::Entity as Member;
pub use super::membership_fee::Entity as MembershipFee;
pub use super::subscription::Entity as Subscription;
pub use super::subscription_feature::Entity as SubscriptionFeature;
pub use super::todo::Entity as Todo;
pub use super::user::Entity as User;
