use super::StaticQuestion;

/// Average seconds per question under which a speed run can earn the top tier.
pub const SPEED_TARGET_SECONDS_PER_QUESTION: f64 = 10.0;

pub static ATTENTION_QUESTIONS: &[StaticQuestion] = &[
    StaticQuestion {
        prompt: "Сколько раз буква «о» встречается во фразе «Около окна стоял огромный комод»?",
        options: &["7", "8", "9", "10"],
        correct: 2,
        explanation: "Около (3), окна (1), стоял (1), огромный (2), комод (2) — всего 9.",
    },
    StaticQuestion {
        prompt: "Найдите лишнее: 🍎 🍐 🍊 🥕 🍌",
        options: &["🍎", "🍊", "🥕", "🍌"],
        correct: 2,
        explanation: "Морковь — овощ, остальное — фрукты.",
    },
    StaticQuestion {
        prompt: "Какое число отличается: 3 5 7 9 11 14 13",
        options: &["5", "9", "14", "13"],
        correct: 2,
        explanation: "Все числа нечётные, кроме 14.",
    },
    StaticQuestion {
        prompt: "Какого слова нет в ряду: «дом, сад, лес, мост, сад, дом»?",
        options: &["дом", "лес", "мост", "кот"],
        correct: 3,
        explanation: "Слово «кот» в ряду не встречается.",
    },
    StaticQuestion {
        prompt: "Сколько треугольников в строке: ▲ △ ▲ ▲ △ ■ ▲",
        options: &["4", "5", "6", "7"],
        correct: 2,
        explanation: "Закрашенных четыре, пустых два — всего шесть, квадрат не считается.",
    },
    StaticQuestion {
        prompt: "Какая пара написана одинаково?",
        options: &[
            "МЫШЛЕНИЕ — МЫШЛЕНИЯ",
            "ВНИМАНИЕ — ВНИМАНИЕ",
            "ПАМЯТЬ — ПАМЯЗЬ",
            "ЛОГИКА — ЛОГИНКА",
        ],
        correct: 1,
        explanation: "В остальных парах заменена или добавлена одна буква.",
    },
];

pub static SPEED_QUESTIONS: &[StaticQuestion] = &[
    StaticQuestion {
        prompt: "17 + 26 = ?",
        options: &["43", "42", "33", "53"],
        correct: 0,
        explanation: "17 + 26 = 43.",
    },
    StaticQuestion {
        prompt: "Какое слово лишнее: стол, стул, шкаф, яблоко?",
        options: &["стол", "стул", "шкаф", "яблоко"],
        correct: 3,
        explanation: "Яблоко не мебель.",
    },
    StaticQuestion {
        prompt: "8 × 7 = ?",
        options: &["54", "56", "58", "64"],
        correct: 1,
        explanation: "8 × 7 = 56.",
    },
    StaticQuestion {
        prompt: "Продолжите ряд: 2, 4, 8, 16, ?",
        options: &["18", "24", "32", "30"],
        correct: 2,
        explanation: "Каждое число удваивается.",
    },
    StaticQuestion {
        prompt: "Антоним к слову «быстрый»:",
        options: &["резкий", "медленный", "ловкий", "шустрый"],
        correct: 1,
        explanation: "Противоположность быстрого — медленный.",
    },
    StaticQuestion {
        prompt: "100 − 37 = ?",
        options: &["73", "67", "63", "53"],
        correct: 2,
        explanation: "100 − 37 = 63.",
    },
    StaticQuestion {
        prompt: "Какой день идёт после среды?",
        options: &["вторник", "пятница", "четверг", "понедельник"],
        correct: 2,
        explanation: "После среды наступает четверг.",
    },
    StaticQuestion {
        prompt: "Сколько минут в 2,5 часах?",
        options: &["120", "150", "250", "180"],
        correct: 1,
        explanation: "2,5 × 60 = 150.",
    },
];
