//! Analytics prompts. Data is embedded as pretty-printed JSON with non-ASCII kept as is.

use serde_json::Value;

use crate::ChatMessage;

/// Which analytics task a prompt belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    ChannelAnalysis,
    ContentPlan,
    PostPerformance,
    Survey,
}

impl PromptKind {
    pub fn system_message(&self) -> &'static str {
        match self {
            PromptKind::ChannelAnalysis => "Ты аналитик социальных медиа, который анализирует Telegram-каналы и предоставляет инсайты и рекомендации.",
            PromptKind::ContentPlan => "Ты контент-менеджер для Telegram-канала, который создает эффективные контент-планы на основе аналитики.",
            PromptKind::PostPerformance => "Ты аналитик социальных медиа, который оценивает эффективность постов в Telegram.",
            PromptKind::Survey => "Ты специалист по маркетинговым исследованиям, который создает эффективные опросы для аудитории Telegram-канала.",
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            PromptKind::ChannelAnalysis | PromptKind::PostPerformance => 0.3,
            PromptKind::ContentPlan => 0.7,
            PromptKind::Survey => 0.5,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            PromptKind::ChannelAnalysis | PromptKind::Survey => 2000,
            PromptKind::ContentPlan => 2500,
            PromptKind::PostPerformance => 1500,
        }
    }
}

/// Messages plus sampling settings for one analytics request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisPrompt {
    pub kind: PromptKind,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl AnalysisPrompt {
    fn new(kind: PromptKind, user_content: String) -> Self {
        Self {
            kind,
            messages: vec![
                ChatMessage::system(kind.system_message()),
                ChatMessage::user(user_content),
            ],
            temperature: kind.temperature(),
            max_tokens: kind.max_tokens(),
        }
    }

    /// The user message text.
    pub fn user_content(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Overall channel analysis from a list of recent posts with comments and reactions.
pub fn channel_analysis(posts: &Value) -> AnalysisPrompt {
    let content = format!(
        "Проанализируй следующие данные из Telegram-канала:

{}

Выполни следующие задачи:
1. Определи основные темы и категории контента
2. Выяви посты с наибольшим вовлечением (по просмотрам, комментариям и реакциям)
3. Проанализируй тональность комментариев и общее настроение аудитории
4. Выяви ключевые запросы и вопросы подписчиков
5. Предложи 5 идей для новых постов на основе анализа
6. Определи оптимальное время публикации контента
7. Выдели сильные и слабые стороны существующего контента

Результат представь в формате JSON со следующими ключами:
- main_topics
- top_posts
- audience_sentiment
- audience_questions
- content_ideas
- optimal_posting_time
- content_strengths
- content_weaknesses",
        pretty(posts)
    );
    AnalysisPrompt::new(PromptKind::ChannelAnalysis, content)
}

/// Content plan for `days` days built on a previous channel analysis.
pub fn content_plan(analysis: &Value, days: u32) -> AnalysisPrompt {
    let content = format!(
        "На основе следующего анализа Telegram-канала:

{}

Создай контент-план на {} дней. Для каждого дня предложи:
1. Тему поста
2. Краткое описание содержания
3. Тип контента (информационный, развлекательный, опрос, обучающий, интерактивный и т.д.)
4. Оптимальное время публикации
5. Ожидаемый отклик аудитории

Результат представь в формате JSON, где ключи - дни (day_1, day_2, ...), а значения - объекты с полями:
- title
- description
- content_type
- posting_time
- expected_engagement",
        pretty(analysis),
        days
    );
    AnalysisPrompt::new(PromptKind::ContentPlan, content)
}

/// Performance review of a single post with all its comments and reactions.
pub fn post_performance(post: &Value) -> AnalysisPrompt {
    let content = format!(
        "Проанализируй эффективность этого поста из Telegram-канала:

{}

Выполни следующие задачи:
1. Оцени вовлечение аудитории (высокое, среднее, низкое) с обоснованием
2. Проанализируй тональность комментариев (позитивная, нейтральная, негативная)
3. Выяви ключевые вопросы или запросы в комментариях
4. Предложи, как можно улучшить пост или его подачу
5. Определи, что в посте сработало хорошо, а что нет

Результат представь в формате JSON со следующими ключами:
- engagement_level
- engagement_analysis
- comments_sentiment
- key_questions
- improvement_suggestions
- pros_and_cons (объект с массивами pros и cons)",
        pretty(post)
    );
    AnalysisPrompt::new(PromptKind::PostPerformance, content)
}

/// Audience survey built on a previous channel analysis.
pub fn survey(analysis: &Value) -> AnalysisPrompt {
    let content = format!(
        "На основе следующего анализа Telegram-канала:

{}

Создай опрос для аудитории, который поможет лучше понять их потребности и улучшить контент.

Опрос должен содержать:
1. Краткое вступление с объяснением цели опроса
2. 5-7 вопросов разных типов (выбор одного варианта, множественный выбор, открытый вопрос и т.д.)
3. Благодарность за участие

Вопросы должны касаться:
- Предпочтений по темам контента
- Удовлетворенности текущим контентом
- Пожеланий по новым форматам
- Демографических данных аудитории (возраст, интересы и т.д.)
- Частоты взаимодействия с каналом

Результат представь в формате JSON со следующими ключами:
- title
- description
- questions (массив объектов с полями: question_text, question_type, options)
- thank_you_message",
        pretty(analysis)
    );
    AnalysisPrompt::new(PromptKind::Survey, content)
}
