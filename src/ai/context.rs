/// Course material handed to the model with every question.
pub const COURSE_CONTEXT: &str = "\
Курс «Развитие креативного и критического мышления».

Модуль 1. Основы мышления.
Как работает мышление: Система 1 (быстрая, интуитивная) и Система 2 (медленная, \
аналитическая) по Д. Канеману. Когнитивные искажения: эффект подтверждения, эффект \
якоря, ошибка выжившего, эвристика доступности. Метапознание: умение замечать свои \
мысли и управлять ими. Привычки, которые развивают мышление: новые задачи, \
рефлексия, ведение заметок, сон и физическая активность.

Модуль 2. Креативные техники.
Мозговой штурм: генерация без критики, затем отбор. SCAMPER: замени, объедини, \
адаптируй, измени, найди другое применение, убери, переверни. Шесть шляп мышления \
Эдварда де Боно. Интеллект-карты для структуризации идей. Метод фокальных объектов. \
Латеральное мышление и поиск неочевидных связей. Творческий процесс: подготовка, \
инкубация, озарение, проверка.

Модуль 3. Критическое мышление.
Структура аргумента: тезис, доводы, вывод. Логические ошибки: ad hominem, ложная \
дилемма, соломенное чучело, апелляция к большинству, подмена корреляции \
причинностью. Проверка источников: кто автор, на чём основаны выводы, есть ли \
независимые подтверждения. Бритва Оккама. Принятие решений в условиях \
неопределённости.

Практика.
Ежедневные короткие тренировки внимания и скорости реакции, логические задачи и \
поиск закономерностей, регулярное повторение материала модулей.";

/// Context for a question. The whole course blob is always used.
pub fn context_for(_question: &str) -> &'static str {
    COURSE_CONTEXT
}
