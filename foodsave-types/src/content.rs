// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static copy and figures shown on the landing page.
//!
//! Text is Russian only; there is no localisation layer.

use crate::step::Step;

/// Colour family of a card. The UI maps it to concrete classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Teal,
    Green,
    Yellow,
    Red,
    Blue,
    Purple,
}

/// Big number with a caption underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Figure {
    pub value: &'static str,
    pub caption: &'static str,
}

/// Big number with a heading and a caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

/// Card without a figure: heading, caption and an optional glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub icon: Option<&'static str>,
    pub title: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

const STEPS: [(u32, &str, &str, &str); 4] = [
    (
        1,
        "ШАГ ПЕРВЫЙ",
        "Найдите Сюрприз-пакеты в магазинах и ресторанах рядом с вами. Специальные предложения для студентов и семей в Ташкенте, скоро и других городах Узбекистана.",
        "🔍",
    ),
    (
        2,
        "ШАГ ВТОРОЙ",
        "Выберите понравившийся сюрприз-пакет. Каждый пакет содержит продукты высокого качества по специальной цене. Выбирайте из множества вариантов от проверенных партнеров.",
        "🛒",
    ),
    (
        3,
        "ШАГ ТРЕТИЙ",
        "Забронируйте и оплатите заказ в приложении. Получайте уведомления о статусе заказа и готовности к выдаче. Быстро, удобно и безопасно!",
        "💳",
    ),
    (
        4,
        "ШАГ ЧЕТВЕРТЫЙ",
        "Получите свой заказ в выбранном месте в указанное время. Наслаждайтесь вкусной едой по выгодной цене и помогайте бороться с пищевыми отходами!",
        "🎁",
    ),
];

/// The "how it works" sequence, in display order.
pub fn how_it_works_steps() -> Vec<Step> {
    STEPS
        .iter()
        .filter_map(|(id, title, content, icon)| Step::new(*id, *title, *content, *icon))
        .collect()
}

pub const HERO_FIGURES: [Figure; 3] = [
    Figure {
        value: "40%",
        caption: "продуктов выбрасывается глобально",
    },
    Figure {
        value: "2.5млрд",
        caption: "тонн еды тратится ежегодно",
    },
    Figure {
        value: "80,000кг",
        caption: "выбрасывается каждую секунду",
    },
];

pub const WASTE_CATEGORIES: [Point; 3] = [
    Point {
        icon: None,
        title: "Овощи - 25%",
        caption: "Наиболее выбрасываемая категория продуктов",
        tone: Tone::Teal,
    },
    Point {
        icon: None,
        title: "Зерновые - 24%",
        caption: "Вторая по объему потерь категория",
        tone: Tone::Green,
    },
    Point {
        icon: None,
        title: "Фрукты - 12%",
        caption: "Третья категория по объему отходов",
        tone: Tone::Yellow,
    },
];

pub const MARKET_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        value: "35 млн",
        title: "Население Узбекистана",
        caption: "Огромный потенциальный рынок для нашего приложения",
        tone: Tone::Teal,
    },
    Highlight {
        value: "0",
        title: "Конкурентов",
        caption: "Мы первые на рынке Узбекистана с этой технологией",
        tone: Tone::Teal,
    },
    Highlight {
        value: "$2.1B",
        title: "Потенциальный рынок",
        caption: "Оценочная стоимость рынка пищевых отходов в регионе",
        tone: Tone::Teal,
    },
];

pub const ENVIRONMENT_IMPACT: [Highlight; 4] = [
    Highlight {
        value: "8-10%",
        title: "Парниковых газов",
        caption: "от пищевых отходов глобально",
        tone: Tone::Red,
    },
    Highlight {
        value: "25%",
        title: "Пресной воды",
        caption: "тратится на выброшенную еду",
        tone: Tone::Blue,
    },
    Highlight {
        value: "28%",
        title: "Сельхозземель",
        caption: "используется для выброшенной еды",
        tone: Tone::Green,
    },
    Highlight {
        value: "$1трлн",
        title: "Экономический ущерб",
        caption: "от пищевых отходов ежегодно",
        tone: Tone::Purple,
    },
];

/// Numbered advantages in the investment section; the number is the
/// position plus one.
pub const INVESTMENT_ADVANTAGES: [Point; 4] = [
    Point {
        icon: None,
        title: "Первопроходцы рынка",
        caption: "Нулевая конкуренция в Узбекистане",
        tone: Tone::Teal,
    },
    Point {
        icon: None,
        title: "Масштабируемая модель",
        caption: "Готов к расширению в регионе",
        tone: Tone::Teal,
    },
    Point {
        icon: None,
        title: "Социальное воздействие",
        caption: "Решение экологических проблем",
        tone: Tone::Teal,
    },
    Point {
        icon: None,
        title: "Проверенная модель",
        caption: "Успех Too Good To Go в Европе",
        tone: Tone::Teal,
    },
];

pub const INVESTMENT_FIGURES: [Figure; 2] = [
    Figure {
        value: "500%",
        caption: "Потенциальный ROI",
    },
    Figure {
        value: "2M",
        caption: "Пользователей в 5 лет",
    },
];

pub const SOLUTION_AUDIENCES: [Point; 3] = [
    Point {
        icon: Some("🏪"),
        title: "Для бизнеса",
        caption: "Монетизация излишков, сокращение потерь, улучшение имиджа",
        tone: Tone::Yellow,
    },
    Point {
        icon: Some("👥"),
        title: "Для потребителей",
        caption: "Качественная еда по выгодным ценам, экологическая ответственность",
        tone: Tone::Green,
    },
    Point {
        icon: Some("🌍"),
        title: "Для планеты",
        caption: "Сокращение CO2, экономия ресурсов, устойчивое развитие",
        tone: Tone::Blue,
    },
];

pub const CALL_TO_ACTION_FIGURES: [Figure; 3] = [
    Figure {
        value: "35M+",
        caption: "Потенциальных пользователей",
    },
    Figure {
        value: "$100M+",
        caption: "Размер рынка",
    },
    Figure {
        value: "0",
        caption: "Прямых конкурентов",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StepCarousel;

    #[test]
    fn shipped_steps_build_a_valid_carousel() {
        let steps = how_it_works_steps();
        assert_eq!(steps.len(), STEPS.len());
        let carousel = StepCarousel::new(steps).expect("static steps are valid");
        assert_eq!(carousel.len(), 4);
        assert_eq!(carousel.current().title, "ШАГ ПЕРВЫЙ");
        assert_eq!(carousel.current().icon, "🔍");
    }

    #[test]
    fn step_ids_follow_display_order() {
        let ids: Vec<u32> = how_it_works_steps().iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn cards_have_text() {
        let figures = HERO_FIGURES
            .iter()
            .chain(INVESTMENT_FIGURES.iter())
            .chain(CALL_TO_ACTION_FIGURES.iter());
        for f in figures {
            assert!(!f.value.is_empty() && !f.caption.is_empty());
        }
        for h in MARKET_HIGHLIGHTS.iter().chain(ENVIRONMENT_IMPACT.iter()) {
            assert!(!h.value.is_empty() && !h.title.is_empty());
        }
        for p in SOLUTION_AUDIENCES.iter() {
            assert!(p.icon.is_some());
        }
    }
}
