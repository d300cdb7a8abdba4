mod equipment;
mod gym;
mod member;
mod membership_fee;
mod subscription;
mod todo;
mod user;
