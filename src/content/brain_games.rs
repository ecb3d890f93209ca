use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::{Question, StaticQuestion};

/// Rounds in one brain game.
pub const ROUNDS_PER_GAME: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainGameKind {
    Sequence,
    Logic,
    Pattern,
}

#[derive(Debug)]
pub struct BrainGame {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: BrainGameKind,
}

pub static BRAIN_GAMES: &[BrainGame] = &[
    BrainGame {
        id: "sequence",
        title: "Числовые последовательности",
        kind: BrainGameKind::Sequence,
    },
    BrainGame {
        id: "logic",
        title: "Логические задачи",
        kind: BrainGameKind::Logic,
    },
    BrainGame {
        id: "pattern",
        title: "Поиск закономерностей",
        kind: BrainGameKind::Pattern,
    },
];

pub fn find_game(id: &str) -> Option<&'static BrainGame> {
    BRAIN_GAMES.iter().find(|g| g.id == id)
}

/// Number sequence behind a "what comes next" task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencePattern {
    Arithmetic { start: i64, step: i64 },
    Geometric { start: i64, ratio: i64 },
    Fibonacci,
}

impl SequencePattern {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => SequencePattern::Arithmetic {
                start: rng.random_range(1..=10),
                step: rng.random_range(2..=5),
            },
            1 => SequencePattern::Geometric {
                start: rng.random_range(1..=5),
                ratio: rng.random_range(2..=3),
            },
            _ => SequencePattern::Fibonacci,
        }
    }

    /// The four terms shown to the player.
    pub fn terms(&self) -> [i64; 4] {
        match *self {
            SequencePattern::Arithmetic { start, step } => {
                [0, 1, 2, 3].map(|i| start + i * step)
            }
            SequencePattern::Geometric { start, ratio } => {
                [0u32, 1, 2, 3].map(|i| start * ratio.pow(i))
            }
            SequencePattern::Fibonacci => [1, 1, 2, 3],
        }
    }

    pub fn next_term(&self) -> i64 {
        match *self {
            SequencePattern::Arithmetic { start, step } => start + 4 * step,
            SequencePattern::Geometric { start, ratio } => start * ratio.pow(4),
            SequencePattern::Fibonacci => 5,
        }
    }
}

/// Builds the shuffled answer options for `correct` and returns them with the
/// post-shuffle index of the right value.
pub fn distractor_options<R: Rng + ?Sized>(correct: i64, rng: &mut R) -> (Vec<i64>, usize) {
    let doubled = correct * 2;
    let mut above = correct + rng.random_range(1..=5);
    while above == doubled {
        above = correct + rng.random_range(1..=5);
    }
    let below = correct - rng.random_range(1..=3);

    let mut options = vec![correct, above, below, doubled];
    options.shuffle(rng);
    let index = options.iter().position(|&v| v == correct).unwrap_or(0);
    (options, index)
}

pub fn sequence_task<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let pattern = SequencePattern::random(rng);
    let [a, b, c, d] = pattern.terms();
    let (options, correct) = distractor_options(pattern.next_term(), rng);

    Question {
        prompt: format!("Найдите следующее число в последовательности:\n{a}, {b}, {c}, {d}, ?"),
        options: options.iter().map(i64::to_string).collect(),
        correct,
        explanation: None,
    }
}

pub fn generate_task<R: Rng + ?Sized>(kind: BrainGameKind, rng: &mut R) -> Question {
    match kind {
        BrainGameKind::Sequence => sequence_task(rng),
        BrainGameKind::Logic => draw(LOGIC_TASKS, rng),
        BrainGameKind::Pattern => draw(PATTERN_TASKS, rng),
    }
}

/// One freshly generated task per round.
pub fn generate_rounds<R: Rng + ?Sized>(kind: BrainGameKind, rounds: usize, rng: &mut R) -> Vec<Question> {
    (0..rounds).map(|_| generate_task(kind, rng)).collect()
}

fn draw<R: Rng + ?Sized>(bank: &[StaticQuestion], rng: &mut R) -> Question {
    bank.choose(rng)
        .map(StaticQuestion::to_question)
        .unwrap_or_else(|| Question {
            prompt: "Выберите правильный ответ:".to_string(),
            options: vec!["Вариант A".to_string(), "Вариант B".to_string()],
            correct: 0,
            explanation: None,
        })
}

pub static LOGIC_TASKS: &[StaticQuestion] = &[
    StaticQuestion {
        prompt: "Если все розы — цветы, а некоторые цветы быстро увядают, то:",
        options: &[
            "Все розы быстро увядают",
            "Некоторые розы быстро увядают",
            "Ни одна роза не увядает",
            "Нельзя определить",
        ],
        correct: 3,
        explanation: "Увядающие цветы могут не быть розами, поэтому вывод сделать нельзя.",
    },
    StaticQuestion {
        prompt: "Аня выше Бори, Боря выше Вити. Кто самый низкий?",
        options: &["Аня", "Боря", "Витя", "Нельзя определить"],
        correct: 2,
        explanation: "Аня > Боря > Витя.",
    },
    StaticQuestion {
        prompt: "У отца Маши пять дочерей: Чача, Чече, Чичи, Чочо. Как зовут пятую?",
        options: &["Чучу", "Маша", "Чяча", "Чыча"],
        correct: 1,
        explanation: "Пятая дочь — сама Маша.",
    },
    StaticQuestion {
        prompt: "Сколько месяцев в году имеют 28 дней?",
        options: &["1", "2", "6", "12"],
        correct: 3,
        explanation: "В каждом месяце есть как минимум 28 дней.",
    },
    StaticQuestion {
        prompt: "Бутылка с пробкой стоит 110 рублей. Бутылка на 100 рублей дороже пробки. Сколько стоит пробка?",
        options: &["10 рублей", "5 рублей", "1 рубль", "15 рублей"],
        correct: 1,
        explanation: "Пробка 5, бутылка 105: разница 100, сумма 110.",
    },
];

pub static PATTERN_TASKS: &[StaticQuestion] = &[
    StaticQuestion {
        prompt: "Какая фигура должна быть следующей?\n🔴 ⚫ 🔴 ⚫ 🔴 ?",
        options: &["🔴", "⚫", "🔵", "🟡"],
        correct: 1,
        explanation: "Цвета чередуются.",
    },
    StaticQuestion {
        prompt: "Продолжите ряд:\n🔺 🔺 🟦 🔺 🔺 🟦 🔺 ?",
        options: &["🟦", "🔺", "🟢", "⚫"],
        correct: 1,
        explanation: "Повторяется блок из двух треугольников и квадрата.",
    },
    StaticQuestion {
        prompt: "Какая буква следующая?\nА В Д Ж ?",
        options: &["З", "И", "К", "Е"],
        correct: 1,
        explanation: "Буквы идут через одну: А (Б) В (Г) Д (Е) Ж (З) И.",
    },
    StaticQuestion {
        prompt: "Продолжите ряд:\n🌑 🌓 🌕 🌗 ?",
        options: &["🌕", "🌓", "🌑", "🌗"],
        correct: 2,
        explanation: "Фазы луны повторяются по кругу.",
    },
    StaticQuestion {
        prompt: "Что пропущено?\n1A 2B 3C ? 5E",
        options: &["4D", "4C", "3D", "6F"],
        correct: 0,
        explanation: "Цифры и буквы растут синхронно.",
    },
];
