//! Pure mapping from domain data to rendered view state.

use super::state::{LOADING_PLACEHOLDER, MealCard, MealsView, StatsView};
use crate::models::meal::{Meal, Stats};
use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Heading of the empty meal list.
pub const EMPTY_MEALS_MESSAGE: &str = "No meals yet today";
pub const EMPTY_MEALS_HINT: &str = "Add your first meal using the form above";

/// Rounds a nutrition value for display, half away from zero.
pub fn round_value(value: f64) -> i64 {
    value.round() as i64
}

pub fn show_loading(view: &mut StatsView) {
    view.calories = LOADING_PLACEHOLDER.to_string();
    view.protein = LOADING_PLACEHOLDER.to_string();
    view.fat = LOADING_PLACEHOLDER.to_string();
    view.carbs = LOADING_PLACEHOLDER.to_string();
}

/// Writes the rounded totals, rendering missing ones as 0.
pub fn update_stats(view: &mut StatsView, stats: &Stats) {
    let display = |value: Option<f64>| round_value(value.unwrap_or(0.0)).to_string();

    view.calories = display(stats.calories);
    view.protein = display(stats.protein);
    view.fat = display(stats.fat);
    view.carbs = display(stats.carbs);
    view.meal_count = stats.meal_count;
}

/// Renders one card per meal in the order given, or the empty state.
pub fn update_meals_list(view: &mut MealsView, meals: Option<&[Meal]>) {
    update_meals_list_at(view, meals, &Local::now());
}

pub fn update_meals_list_at<Tz>(view: &mut MealsView, meals: Option<&[Meal]>, now: &DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    *view = match meals {
        Some(meals) if !meals.is_empty() => {
            MealsView::Cards(meals.iter().map(|meal| meal_card(meal, now)).collect())
        }
        _ => MealsView::Empty,
    };
}

fn meal_card<Tz>(meal: &Meal, now: &DateTime<Tz>) -> MealCard
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    MealCard {
        time_label: format_date_at(&meal.timestamp, now),
        calories: round_value(meal.calories),
        protein: round_value(meal.protein),
        fat: round_value(meal.fat),
        carbs: round_value(meal.carbs),
        meal_type: meal.meal_type,
        description: meal.description.clone(),
    }
}

/// Formats a meal timestamp against the local clock.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    format_date_at(timestamp, &Local::now())
}

/// Time only (`02:30 PM`) when `timestamp` falls on the same calendar day as
/// `now` in `now`'s time zone, otherwise date and time (`Oct 21, 02:30 PM`).
pub fn format_date_at<Tz>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(&now.timezone());

    if local.date_naive() == now.date_naive() {
        local.format("%I:%M %p").to_string()
    } else {
        local.format("%b %-d, %I:%M %p").to_string()
    }
}
