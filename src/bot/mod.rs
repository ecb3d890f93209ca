//! Telegram side of the bot: commands, inline buttons, screens and the
//! update handlers that tie them to the session store.

pub mod actions;
pub mod commands;
pub mod handlers;
pub mod keyboards;
pub mod screens;
