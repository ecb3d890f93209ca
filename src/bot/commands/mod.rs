pub mod stats;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Команды бота:")]
pub enum Command {
    #[command(description = "начать заново и открыть главное меню")]
    Start,
    #[command(description = "как пользоваться ботом")]
    Help,
    #[command(description = "главное меню")]
    Menu,
    #[command(description = "мои результаты")]
    Stats,
}
