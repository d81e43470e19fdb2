//! Text views for the read-only commands.
//!
//! Each view returns the rendered text; the command handlers print it.

use crate::catalog::{self, PLAN_DAYS, REDUCTION_PERCENT};
use crate::core::summary::DashboardSummary;
use crate::models::{ProgressState, WeekPlan};
use crate::utils::colors::{GREEN, RESET, YELLOW, color_for_completed, color_for_delta};
use crate::utils::formatting::{bold, format_brl, format_delta, ratio};
use crate::utils::table::{Column, Table};
use crate::utils::weight::display_weight;

fn underline(title: &str, sep: char) -> String {
    let width = unicode_width::UnicodeWidthStr::width(title);
    format!("{}\n{}\n", bold(title), sep.to_string().repeat(width))
}

fn reduced_banner() -> String {
    format!(
        "{YELLOW}🔻 Reduced mode active: read every portion as {}% smaller.{RESET}\n",
        REDUCTION_PERCENT
    )
}

/// "  • item" lines.
fn bullets<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|i| format!("  • {}\n", i.as_ref()))
        .collect()
}

fn weight_loss(delta: Option<f64>) -> String {
    match delta {
        Some(d) => format!("{}{}{}", color_for_delta(d), format_delta(d), RESET),
        None => "unavailable".to_string(),
    }
}

pub fn render_dashboard(summary: &DashboardSummary, sep: char) -> String {
    let mut out = underline(catalog::PLAN_TITLE, sep);
    out.push_str(&format!("{}\n\n", catalog::PLAN_SUBTITLE));

    out.push_str(&format!(
        "⚖️  Initial weight : {}\n🎯 Current weight : {}\n📉 Weight loss    : {}\n",
        display_weight(&summary.initial_weight),
        display_weight(&summary.current_weight),
        weight_loss(summary.weight_delta)
    ));

    out.push('\n');
    out.push_str(&underline("Progress", sep));
    out.push_str(&format!(
        "📅 Day            : {}\n",
        ratio(summary.current_day as usize, summary.plan_days as usize)
    ));
    out.push_str(&format!(
        "🍽️  Meals done     : {} ({}%)\n",
        ratio(summary.completed_meals, summary.total_meals),
        summary.completion_percent()
    ));
    out.push_str(&format!(
        "🗓️  Weeks done     : {}\n",
        ratio(summary.weeks_completed, catalog::WEEK_COUNT as usize)
    ));
    out.push_str(&format!(
        "💰 Daily cost     : {}\n",
        format_brl(summary.daily_cost_cents)
    ));
    out.push_str(&format!(
        "\n{} planned meals over {} days, following a {}-week rotation.\n",
        summary.planned_meals,
        summary.plan_days,
        catalog::WEEK_COUNT
    ));

    if summary.reduced_mode_active {
        out.push('\n');
        out.push_str(&reduced_banner());
    }

    out
}

pub fn render_menu(week: &WeekPlan, reduced: bool, wrap_width: usize, sep: char) -> String {
    let mut out = underline(&format!("Week {}", week.week_number), sep);

    if reduced {
        out.push_str(&reduced_banner());
    }

    let indent = "      ";
    let opts = textwrap::Options::new(wrap_width.max(20))
        .initial_indent(indent)
        .subsequent_indent(indent);

    for meal in &week.meals {
        let status = if meal.completed { "done" } else { "pending" };
        out.push_str(&format!(
            "\n{}{}{} {} ({}) [{}] {}\n",
            color_for_completed(meal.completed),
            meal.status_icon(),
            RESET,
            bold(meal.slot.label()),
            meal.slot.label_pt(),
            meal.id,
            status
        ));

        out.push_str(&format!(
            "   Option 1:\n{}\n   Option 2:\n{}\n",
            textwrap::fill(&meal.option_a, &opts),
            textwrap::fill(&meal.option_b, &opts)
        ));
    }

    out.push_str(&format!(
        "\n{} of {} meals done this week.\n",
        week.completed_count(),
        week.meals.len()
    ));

    out
}

pub fn render_weights(state: &ProgressState) -> String {
    format!(
        "Initial weight: {}\nCurrent weight: {}\nWeight loss:    {}\n",
        display_weight(&state.initial_weight),
        display_weight(&state.current_weight),
        weight_loss(state.compute_weight_delta())
    )
}

pub fn render_day(state: &ProgressState) -> String {
    format!(
        "📅 Day {} (week {} of the rotation)\n",
        ratio(state.current_day as usize, PLAN_DAYS as usize),
        state.current_week_number()
    )
}

pub fn render_tips(sep: char) -> String {
    let mut out = underline("Allowed seasonings", sep);
    out.push_str(&bullets(catalog::seasonings()));

    out.push('\n');
    out.push_str(&underline("Preparation methods", sep));
    out.push_str(&bullets(catalog::preparation_methods()));

    out.push('\n');
    out.push_str(&underline("💡 Tips", sep));
    out.push_str(&bullets(catalog::tips()));

    out
}

pub fn render_reduction(reduced: bool, sep: char) -> String {
    let guide = catalog::reduction_guide();

    let mut out = underline(
        &format!("{}% reduction: {}", REDUCTION_PERCENT, guide.title),
        sep,
    );
    out.push_str(&format!("{}\n\n", guide.intro));

    let mut table =
        Table::new(vec![Column::new("Food"), Column::new("Portion")]).with_separator(sep);
    for row in guide.rows {
        table.add_row(vec![row.food.to_string(), row.change.to_string()]);
    }
    out.push_str(&table.render());

    out.push_str("\n✅ Keep:\n");
    out.push_str(&bullets(guide.keep));

    out.push('\n');
    if reduced {
        out.push_str(&format!(
            "{GREEN}✅ Reduced mode is active: portions are {}% smaller.{RESET}\n",
            REDUCTION_PERCENT
        ));
    } else {
        out.push_str("Start a reduced cycle with: rdiettracker cycle\n");
    }

    out
}

pub fn render_costs(shopping: bool, sep: char) -> String {
    let mut out = underline("Estimated costs", sep);

    let mut table = Table::new(vec![
        Column::new("Food"),
        Column::new("Daily qty"),
        Column::new("Cost/day"),
        Column::new(&format!("{} days", PLAN_DAYS)),
    ])
    .with_separator(sep);

    for row in catalog::cost_rows() {
        table.add_row(vec![
            row.food.to_string(),
            row.daily_qty.short(),
            format_brl(row.daily_cost_cents),
            format_brl(row.plan_cost_cents()),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        "-".to_string(),
        format!("{}/day", format_brl(catalog::daily_cost_cents())),
        format_brl(catalog::plan_cost_cents()),
    ]);
    out.push_str(&table.render());

    if shopping {
        for (title, days) in [("🛒 Weekly list", 7), ("🛒 21-day list", PLAN_DAYS as u32)] {
            out.push('\n');
            out.push_str(&underline(title, sep));
            out.push_str(&bullets(catalog::shopping_list(days)));
        }
    }

    out
}

