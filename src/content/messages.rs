//! Canned bot texts. Sent as plain text, so no markdown escaping is needed.

pub const WELCOME_MESSAGE: &str = "🧠 Привет! Я помощник курса по развитию мышления.\n\n\
Здесь можно проверить знания по модулям курса, потренировать внимание и скорость, \
размять мозг и задать вопрос ИИ-помощнику.\n\nВыбери, с чего начнём:";

pub const HELP_MESSAGE: &str = "❓ Как пользоваться ботом\n\n\
📚 Тест-квиз — вопросы по модулям курса\n\
👁 Тест на внимание — найди отличия и посчитай детали\n\
⚡ Тест на скорость — отвечай быстро и точно\n\
🧠 Разминка мозга — последовательности, логика и закономерности\n\
🤖 ИИ помощник — задай вопрос по курсу\n\
⏰ Напоминания — настрой, как часто напоминать о тренировках\n\n\
Команды:\n/start — начать заново\n/menu — главное меню\n/stats — мои результаты\n/help — эта справка";

pub const MAIN_MENU_MESSAGE: &str = "🏠 Главное меню\n\nВыбери, чем заняться:";

pub const QUIZ_SELECTION_MESSAGE: &str = "📚 Выбери модуль курса для квиза:";

pub const ATTENTION_TEST_INTRO: &str = "👁 Тест на внимание\n\n\
Читай внимательно: в каждом вопросе спрятана деталь, которую легко пропустить.";

pub const SPEED_TEST_INTRO: &str = "⚡ Тест на скорость\n\n\
Время пошло! Отвечай как можно быстрее, но не теряй точность.";

pub const BRAIN_GAMES_INTRO: &str = "🧠 Разминка мозга\n\nВыбери игру — в каждой по 5 раундов:";

pub const AI_WELCOME_MESSAGE: &str = "🤖 Я ИИ-помощник курса.\n\n\
Задай вопрос о мышлении, креативности или материалах курса — отвечу кратко и по делу.";

pub const AI_THINKING_MESSAGE: &str = "Думаю над ответом...";

pub const AI_NEXT_QUESTION_MESSAGE: &str = "❓ Задай следующий вопрос:";

pub const AI_FEEDBACK_THANKS: &str = "Спасибо за отзыв!";

pub const AI_FEEDBACK_ALREADY_GIVEN: &str = "Отзыв уже учтён";

pub const AI_FEEDBACK_UNAVAILABLE: &str = "Этот ответ нельзя оценить";

pub const UNKNOWN_COMMAND_MESSAGE: &str = "Не знаю такой команды. Список команд: /help";

pub const AI_OUTSIDE_CHAT_HINT: &str = "Чтобы задать вопрос ИИ-помощнику, открой /menu и выбери «🤖 ИИ помощник».";

pub const REMINDER_SETUP_MESSAGE: &str = "⏰ Как часто напоминать о тренировках?";

pub const REMINDER_CONFIRMED_MESSAGE: &str = "✅ Напоминания настроены! Буду напоминать о тренировках.";

pub const REMINDER_CANCELLED_MESSAGE: &str = "❌ Все напоминания отключены. Включить их снова можно в меню «⏰ Напоминания».";

pub const ALREADY_FINISHED_MESSAGE: &str = "Это задание уже завершено!";

pub const RESULT_NOT_SAVED_MESSAGE: &str = "Результат не удалось сохранить, но он засчитан в этой сессии.";

/// Reminder texts; one is picked at random per delivery.
pub const REMINDER_MESSAGES: &[&str] = &[
    "🧠 Привет! Не забывай прокачивать своё мышление! Готов к новым вызовам?",
    "💪 Время для тренировки мозга! Какой тест выберешь сегодня?",
    "🚀 Твой мозг ждёт новых задач! Загляни в помощник курса!",
    "🎯 Маленький шаг к большому мышлению! Пора заниматься!",
    "🌟 Развитие мышления — это путь к успеху! Продолжай движение!",
];
