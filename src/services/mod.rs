//! Background services running next to the bot: reminder triggers and the
//! health endpoint.

pub mod health;
pub mod reminder;
pub mod timezone;
