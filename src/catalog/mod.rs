//! Static plan catalog.
//!
//! Everything in here is compiled into the binary and never mutated at
//! runtime: the three-week meal rotation and the reference tables shown by
//! the `tips`, `reduction` and `costs` commands.

use crate::models::{MealEntry, MealSlot, WeekPlan};
use crate::utils::formatting::format_kg;

pub const PLAN_TITLE: &str = "Dieta da Soja, Ovo e Frango";
pub const PLAN_SUBTITLE: &str =
    "Perca de 5 a 9 kg em 21 dias com uma dieta prática, barata e rica em proteínas.";

pub const PLAN_DAYS: u8 = 21;
pub const WEEK_COUNT: u8 = 3;
pub const MEALS_PER_DAY: usize = 4;
/// Meals over the whole plan (4 per day × 21 days). The catalog itself only
/// models one representative week per rotation slot.
pub const PLANNED_MEALS: usize = MEALS_PER_DAY * PLAN_DAYS as usize;
pub const REDUCTION_PERCENT: u8 = 30;

type SlotOptions = (MealSlot, &'static str, &'static str);

const WEEKS: [[SlotOptions; 4]; 3] = [
    [
        (
            MealSlot::Breakfast,
            "3 ovos cozidos + café preto",
            "Omelete (2 ovos + 2 claras) + 50g soja",
        ),
        (
            MealSlot::Lunch,
            "120g frango + 100g soja + salada",
            "Frango desfiado + omelete 2 ovos",
        ),
        (
            MealSlot::Snack,
            "2 ovos + 50g soja",
            "3 claras + 1 ovo + pepino",
        ),
        (
            MealSlot::Dinner,
            "120g frango + 80g soja",
            "3 ovos mexidos + legumes",
        ),
    ],
    [
        (
            MealSlot::Breakfast,
            "Panqueca de ovos + soja",
            "Ovo pochê + salada de pepino",
        ),
        (
            MealSlot::Lunch,
            "Frango desfiado + soja + vinagrete",
            "Frango grelhado + ovos + brócolis",
        ),
        (
            MealSlot::Snack,
            "Omelete + soja + cheiro-verde",
            "1 ovo + 2 claras + repolho",
        ),
        (
            MealSlot::Dinner,
            "Frango assado + soja + couve",
            "2 ovos cozidos + 1 mexido + legumes",
        ),
    ],
    [
        (
            MealSlot::Breakfast,
            "2 ovos + soja + folhas",
            "Omelete enrolada com soja",
        ),
        (
            MealSlot::Lunch,
            "Frango desfiado + soja + limão",
            "150g frango + 1 ovo + abobrinha",
        ),
        (
            MealSlot::Snack,
            "2 ovos + soja + limão",
            "2 claras + 1 ovo + pepino",
        ),
        (
            MealSlot::Dinner,
            "Frango grelhado + soja + couve",
            "Omelete 3 ovos + soja + legumes",
        ),
    ],
];

const SEASONINGS: [&str; 5] = [
    "Sal marinho ou rosa (moderado)",
    "Alho, cebola, limão, vinagre",
    "Pimenta-do-reino, orégano, cúrcuma, páprica",
    "Coentro, cebolinha, manjericão",
    "Cominho, noz-moscada",
];

const PREPARATION_METHODS: [&str; 5] = [
    "Grelhar frango e ovos sem óleo",
    "Cozinhar ovos e soja em lotes",
    "Desfiar frango para misturar com soja",
    "Fazer omelete ou panqueca de ovos",
    "Saltear soja com alho e cebola",
];

const TIPS: [&str; 4] = [
    "Beba de 3 a 3,5L de água por dia",
    "Prepare os alimentos em lotes para facilitar",
    "Varie os temperos para não enjoar",
    "Verduras e legumes são livres",
];

/// Build a fresh copy of the rotation, every meal not completed.
pub fn initial_weeks() -> Vec<WeekPlan> {
    WEEKS
        .iter()
        .zip(1..=WEEK_COUNT)
        .map(|(slots, week_number)| WeekPlan {
            week_number,
            meals: slots
                .iter()
                .map(|(slot, a, b)| MealEntry::new(week_number, *slot, a, b))
                .collect(),
        })
        .collect()
}

/// Read access by week number (1-based).
pub fn week(number: u8) -> Option<WeekPlan> {
    initial_weeks()
        .into_iter()
        .find(|w| w.week_number == number)
}

pub fn seasonings() -> &'static [&'static str] {
    &SEASONINGS
}

pub fn preparation_methods() -> &'static [&'static str] {
    &PREPARATION_METHODS
}

pub fn tips() -> &'static [&'static str] {
    &TIPS
}

// ---------------------------
// Portion reduction
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionRow {
    pub food: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ReductionGuide {
    pub title: &'static str,
    pub intro: &'static str,
    pub rows: &'static [ReductionRow],
    pub keep: &'static [&'static str],
}

const REDUCTION_ROWS: [ReductionRow; 3] = [
    ReductionRow {
        food: "Frango",
        change: "120g → 85g por refeição",
    },
    ReductionRow {
        food: "Ovos",
        change: "3 ovos → 2 ovos (ou 2 ovos + 1 clara)",
    },
    ReductionRow {
        food: "Soja",
        change: "100g → 70g por refeição",
    },
];

const REDUCTION_KEEP: [&str; 3] = [
    "Legumes e verduras livres",
    "Hidratação de 3 a 3,5L/dia",
    "Temperos naturais",
];

pub fn reduction_guide() -> ReductionGuide {
    ReductionGuide {
        title: "Para repetir a dieta após 21 dias",
        intro: "Caso não tenha atingido a meta desejada, reduza as porções em 30% e reinicie o ciclo.",
        rows: &REDUCTION_ROWS,
        keep: &REDUCTION_KEEP,
    }
}

// ---------------------------
// Costs & shopping
// ---------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyQuantity {
    Grams(u32),
    Units(u32),
}

impl DailyQuantity {
    pub fn times(&self, days: u32) -> DailyQuantity {
        match self {
            DailyQuantity::Grams(g) => DailyQuantity::Grams(g * days),
            DailyQuantity::Units(u) => DailyQuantity::Units(u * days),
        }
    }

    /// Short form used in the cost table ("250g", "5 unid.").
    pub fn short(&self) -> String {
        match self {
            DailyQuantity::Grams(g) => format!("{}g", g),
            DailyQuantity::Units(u) => format!("{} unid.", u),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRow {
    pub food: &'static str,
    pub shopping_name: &'static str,
    /// Shorter name used on the full-plan list.
    pub plan_shopping_name: &'static str,
    pub daily_qty: DailyQuantity,
    pub daily_cost_cents: u32,
}

impl CostRow {
    pub fn plan_cost_cents(&self) -> u32 {
        self.daily_cost_cents * PLAN_DAYS as u32
    }

    /// "1,75 kg de soja crua", "35 ovos", "5,25 kg de soja", ...
    pub fn shopping_line(&self, days: u32) -> String {
        let name = if days >= PLAN_DAYS as u32 {
            self.plan_shopping_name
        } else {
            self.shopping_name
        };

        match self.daily_qty.times(days) {
            DailyQuantity::Grams(g) => format!("{} de {}", format_kg(g), name),
            DailyQuantity::Units(u) => format!("{} {}", u, name),
        }
    }
}

const COST_ROWS: [CostRow; 3] = [
    CostRow {
        food: "Soja",
        shopping_name: "soja crua",
        plan_shopping_name: "soja",
        daily_qty: DailyQuantity::Grams(250),
        daily_cost_cents: 250,
    },
    CostRow {
        food: "Ovos",
        shopping_name: "ovos",
        plan_shopping_name: "ovos",
        daily_qty: DailyQuantity::Units(5),
        daily_cost_cents: 300,
    },
    CostRow {
        food: "Frango",
        shopping_name: "peito de frango",
        plan_shopping_name: "frango",
        daily_qty: DailyQuantity::Grams(250),
        daily_cost_cents: 400,
    },
];

const FREE_ITEMS: &str = "Verduras e temperos naturais à vontade";
const PLAN_FREE_ITEMS: &str = "Verduras e temperos naturais";

pub fn cost_rows() -> &'static [CostRow] {
    &COST_ROWS
}

pub fn daily_cost_cents() -> u32 {
    COST_ROWS.iter().map(|r| r.daily_cost_cents).sum()
}

pub fn plan_cost_cents() -> u32 {
    COST_ROWS.iter().map(CostRow::plan_cost_cents).sum()
}

/// Shopping list for `days` days of the plan (7 → weekly, 21 → full plan).
pub fn shopping_list(days: u32) -> Vec<String> {
    let mut lines: Vec<String> = COST_ROWS.iter().map(|r| r.shopping_line(days)).collect();
    lines.push(if days >= PLAN_DAYS as u32 {
        PLAN_FREE_ITEMS
    } else {
        FREE_ITEMS
    }
    .to_string());
    lines
}
