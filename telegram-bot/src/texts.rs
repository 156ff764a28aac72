//! User-facing texts and keyboards (Russian).

use crate::core::ReplyKeyboard;

pub const START: &str = "Привет! Я бот для аналитики Telegram-каналов.\n\n\
Я могу помочь анализировать контент, генерировать идеи для постов \
и создавать опросы для вашей аудитории.\n\n\
Введите /menu, чтобы увидеть доступные команды.";

pub const HELP: &str = "Доступные команды:\n\n\
/start - Начать работу с ботом\n\
/menu - Открыть меню с функциями\n\
/help - Показать это сообщение\n\
/cancel - Отменить текущую операцию\n\n\
Через меню вы можете:\n\
- Анализировать контент канала\n\
- Генерировать контент-план\n\
- Анализировать отдельные посты\n\
- Создавать опросы для аудитории\n";

pub const MENU_PROMPT: &str = "Выберите действие:";
pub const CANCELLED: &str = "Операция отменена.";
pub const ACTION_CANCELLED: &str = "Действие отменено.";
pub const UNKNOWN_COMMAND: &str =
    "Извините, я не знаю такой команды. Используйте /help, чтобы увидеть список доступных команд.";
pub const WORKING: &str = "Выполняю запрос... Это может занять некоторое время.";
pub const INVALID_POST_ID: &str = "Неверный формат ID поста. Пожалуйста, введите число.";

pub const BUTTON_ANALYZE_CHANNEL: &str = "Анализ канала";
pub const BUTTON_CONTENT_PLAN: &str = "Генерация контент-плана";
pub const BUTTON_ANALYZE_POST: &str = "Анализ поста";
pub const BUTTON_SURVEY: &str = "Создать опрос";
pub const YES: &str = "Да";
pub const NO: &str = "Нет";

pub const ASK_CHANNEL_FOR_ANALYSIS: &str =
    "Пожалуйста, введите username канала для анализа (например, @channel_name):";
pub const ASK_CHANNEL_FOR_PLAN: &str =
    "Пожалуйста, введите username канала для генерации контент-плана (например, @channel_name):";
pub const ASK_CHANNEL_FOR_SURVEY: &str =
    "Пожалуйста, введите username канала для создания опроса (например, @channel_name):";
pub const ASK_POST_ID: &str = "Пожалуйста, введите ID поста для анализа (например, 123):";

pub fn menu_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::column(&[
        BUTTON_ANALYZE_CHANNEL,
        BUTTON_CONTENT_PLAN,
        BUTTON_ANALYZE_POST,
        BUTTON_SURVEY,
    ])
}

pub fn confirm_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::row(&[YES, NO])
}

pub fn confirm_channel_analysis(username: &str) -> String {
    format!("Вы хотите проанализировать канал @{}?", username)
}

pub fn confirm_content_plan(username: &str) -> String {
    format!("Вы хотите сгенерировать контент-план для канала @{}?", username)
}

pub fn confirm_survey(username: &str) -> String {
    format!("Вы хотите создать опрос для аудитории канала @{}?", username)
}

pub fn confirm_post_analysis(post_id: i64) -> String {
    format!("Вы хотите проанализировать пост с ID {}?", post_id)
}

pub fn action_succeeded(summary: &str) -> String {
    format!("Задача выполнена успешно!\n\n{}", summary)
}

pub fn action_failed(error: &str) -> String {
    format!(
        "Произошла ошибка: {}\n\nПожалуйста, попробуйте еще раз или свяжитесь с администратором.",
        error
    )
}
