use super::StaticQuestion;

/// A course module with its quiz.
#[derive(Debug)]
pub struct QuizModule {
    pub id: &'static str,
    pub title: &'static str,
    pub questions: &'static [StaticQuestion],
}

pub fn find_module(id: &str) -> Option<&'static QuizModule> {
    QUIZ_MODULES.iter().find(|m| m.id == id)
}

pub static QUIZ_MODULES: &[QuizModule] = &[
    QuizModule {
        id: "module1",
        title: "Основы мышления",
        questions: &[
            StaticQuestion {
                prompt: "Что такое когнитивное искажение?",
                options: &[
                    "Систематическая ошибка в рассуждениях",
                    "Болезнь памяти",
                    "Способ быстрого чтения",
                    "Разновидность логической задачи",
                ],
                correct: 0,
                explanation: "Когнитивные искажения — устойчивые ошибки восприятия и суждений, которые возникают у всех людей.",
            },
            StaticQuestion {
                prompt: "Какое мышление Д. Канеман называет «Системой 1»?",
                options: &[
                    "Медленное и аналитическое",
                    "Быстрое и интуитивное",
                    "Коллективное",
                    "Математическое",
                ],
                correct: 1,
                explanation: "Система 1 работает автоматически и быстро, Система 2 — медленно и с усилием.",
            },
            StaticQuestion {
                prompt: "Что помогает снизить влияние эффекта подтверждения?",
                options: &[
                    "Искать только подтверждающие факты",
                    "Спорить громче",
                    "Сознательно искать аргументы против своей гипотезы",
                    "Принимать решения быстрее",
                ],
                correct: 2,
                explanation: "Поиск опровержений — главный способ проверить гипотезу честно.",
            },
            StaticQuestion {
                prompt: "Что такое метапознание?",
                options: &[
                    "Изучение иностранных языков",
                    "Размышление о собственном мышлении",
                    "Запоминание больших объёмов текста",
                    "Скорочтение",
                ],
                correct: 1,
                explanation: "Метапознание — умение наблюдать за своими мыслями и управлять ими.",
            },
            StaticQuestion {
                prompt: "Какая привычка лучше всего тренирует мышление?",
                options: &[
                    "Регулярно решать новые, непривычные задачи",
                    "Повторять одно и то же упражнение",
                    "Избегать сложных вопросов",
                    "Полагаться только на интуицию",
                ],
                correct: 0,
                explanation: "Мозг развивается, когда сталкивается с новизной и умеренной сложностью.",
            },
        ],
    },
    QuizModule {
        id: "module2",
        title: "Креативные техники",
        questions: &[
            StaticQuestion {
                prompt: "Главное правило мозгового штурма на этапе генерации идей:",
                options: &[
                    "Сразу критиковать слабые идеи",
                    "Не критиковать и собирать как можно больше идей",
                    "Выбирать одну идею и развивать её",
                    "Работать только в одиночку",
                ],
                correct: 1,
                explanation: "Критика на этапе генерации гасит поток идей, оценка идёт отдельным шагом.",
            },
            StaticQuestion {
                prompt: "Что означает буква «S» в методе SCAMPER?",
                options: &["Simplify", "Stop", "Substitute", "Search"],
                correct: 2,
                explanation: "Substitute — «замени»: что можно заменить в объекте или процессе?",
            },
            StaticQuestion {
                prompt: "Метод «шести шляп» предложил:",
                options: &["Эдвард де Боно", "Альтшуллер", "Алекс Осборн", "Тони Бьюзен"],
                correct: 0,
                explanation: "Эдвард де Боно описал метод в книге «Шесть шляп мышления».",
            },
            StaticQuestion {
                prompt: "Для чего используется интеллект-карта (mind map)?",
                options: &[
                    "Для навигации по городу",
                    "Для визуальной структуризации идей вокруг центральной темы",
                    "Для учёта расходов",
                    "Для проверки орфографии",
                ],
                correct: 1,
                explanation: "Интеллект-карта раскладывает связи между идеями от центра к периферии.",
            },
            StaticQuestion {
                prompt: "Что такое метод фокальных объектов?",
                options: &[
                    "Перенос признаков случайных объектов на исследуемый",
                    "Фотографирование объекта с разных сторон",
                    "Сужение задачи до одного свойства",
                    "Голосование за лучшую идею",
                ],
                correct: 0,
                explanation: "Случайные признаки помогают увидеть объект под неожиданным углом.",
            },
        ],
    },
    QuizModule {
        id: "module3",
        title: "Критическое мышление",
        questions: &[
            StaticQuestion {
                prompt: "Что такое аргумент «ad hominem»?",
                options: &[
                    "Ссылка на статистику",
                    "Переход на личность оппонента вместо обсуждения тезиса",
                    "Аргумент от большинства",
                    "Логический вывод из посылок",
                ],
                correct: 1,
                explanation: "Ad hominem атакует автора, а не его утверждение.",
            },
            StaticQuestion {
                prompt: "Корреляция двух явлений означает, что:",
                options: &[
                    "Одно обязательно вызывает другое",
                    "Они никак не связаны",
                    "Они изменяются согласованно, но причинность не доказана",
                    "Одно из них случайно",
                ],
                correct: 2,
                explanation: "Корреляция не равна причинности: может существовать третий фактор.",
            },
            StaticQuestion {
                prompt: "Какой вопрос в первую очередь стоит задать об источнике информации?",
                options: &[
                    "Насколько он популярен?",
                    "Кто автор и на чём основаны его выводы?",
                    "Нравится ли он моим друзьям?",
                    "Красиво ли оформлен сайт?",
                ],
                correct: 1,
                explanation: "Надёжность источника определяется компетентностью автора и доказательствами.",
            },
            StaticQuestion {
                prompt: "«Ложная дилемма» — это:",
                options: &[
                    "Выбор из двух вариантов, когда на самом деле их больше",
                    "Задача без решения",
                    "Спор двух экспертов",
                    "Правильный логический вывод",
                ],
                correct: 0,
                explanation: "Ложная дилемма искусственно сужает выбор до двух крайностей.",
            },
            StaticQuestion {
                prompt: "Принцип «бритвы Оккама» советует:",
                options: &[
                    "Выбирать самое сложное объяснение",
                    "Не умножать сущности без необходимости",
                    "Доверять первому впечатлению",
                    "Отвергать любые гипотезы",
                ],
                correct: 1,
                explanation: "Из равноценных объяснений предпочтительнее то, что требует меньше допущений.",
            },
        ],
    },
];
