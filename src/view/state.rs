use crate::models::meal::{MealDraft, MealType, coerce_nutrient};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Text shown in every stat target while a load cycle is in flight.
pub const LOADING_PLACEHOLDER: &str = "...";

pub const SUBMIT_LABEL: &str = "Add Meal";
pub const SUBMITTING_LABEL: &str = "Adding...";

/// Rendered values of the four daily totals.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub meal_count: Option<u32>,
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            calories: "0".to_string(),
            protein: "0".to_string(),
            fat: "0".to_string(),
            carbs: "0".to_string(),
            meal_count: None,
        }
    }
}

/// One rendered meal.
#[derive(Clone, Debug, PartialEq)]
pub struct MealCard {
    pub time_label: String,
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
    pub meal_type: Option<MealType>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum MealsView {
    /// Nothing loaded yet.
    #[default]
    Pending,
    Empty,
    Cards(Vec<MealCard>),
}

impl MealsView {
    pub fn cards(&self) -> &[MealCard] {
        match self {
            MealsView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Calories,
    Protein,
    Fat,
    Carbs,
    MealType,
    Description,
}

/// Raw text of the meal form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MealForm {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub meal_type: String,
    pub description: String,
}

impl MealForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Calories => self.calories = value,
            FormField::Protein => self.protein = value,
            FormField::Fat => self.fat = value,
            FormField::Carbs => self.carbs = value,
            FormField::MealType => self.meal_type = value,
            FormField::Description => self.description = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds a draft for `user_id`, coercing every numeric input.
    pub fn to_draft(&self, user_id: &str) -> MealDraft {
        let description = self.description.trim();

        MealDraft {
            user_id: user_id.to_string(),
            calories: coerce_nutrient(&self.calories),
            protein: coerce_nutrient(&self.protein),
            fat: coerce_nutrient(&self.fat),
            carbs: coerce_nutrient(&self.carbs),
            meal_type: self.meal_type.parse().ok(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}

/// State of the form's submit control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub enabled: bool,
    pub label: &'static str,
}

impl SubmitButton {
    pub fn idle() -> Self {
        Self {
            enabled: true,
            label: SUBMIT_LABEL,
        }
    }

    pub fn busy() -> Self {
        Self {
            enabled: false,
            label: SUBMITTING_LABEL,
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.enabled
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::idle()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub stats: StatsView,
    pub meals: MealsView,
    pub form: MealForm,
    pub submit: SubmitButton,
    pub toasts: Vec<Toast>,
    next_toast_id: u32,
}

impl ViewState {
    /// Adds a toast and returns the id to dismiss it with.
    pub fn push_toast(&mut self, message: &str) -> u32 {
        let id = self.next_toast_id;
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss_toast(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Shared handle to the single `ViewState` of the page.
///
/// Every mutation goes through `update`, which releases the borrow before
/// calling the change hook so a synchronous re-render can read the state.
#[derive(Clone)]
pub struct ViewHandle {
    state: Rc<RefCell<ViewState>>,
    on_change: Rc<dyn Fn()>,
}

impl ViewHandle {
    pub fn new(on_change: impl Fn() + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(ViewState::default())),
            on_change: Rc::new(on_change),
        }
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        (self.on_change)();
        result
    }

    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle")
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_form_to_draft_coerces_fields() {
        let mut form = MealForm::default();
        form.set(FormField::Calories, "abc".to_string());
        form.set(FormField::Protein, "25".to_string());
        form.set(FormField::Fat, "12.5g".to_string());
        form.set(FormField::MealType, "dinner".to_string());
        form.set(FormField::Description, "  ".to_string());

        let draft = form.to_draft("123");
        assert_eq!(draft.user_id, "123");
        assert_eq!(draft.calories, 0.0);
        assert_eq!(draft.protein, 25.0);
        assert_eq!(draft.fat, 12.5);
        assert_eq!(draft.carbs, 0.0);
        assert_eq!(draft.meal_type, Some(MealType::Dinner));
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_form_reset() {
        let mut form = MealForm::default();
        form.set(FormField::Carbs, "40".to_string());
        form.set(FormField::Description, "Oats".to_string());
        form.reset();
        assert_eq!(form, MealForm::default());
    }

    #[test]
    fn test_toasts_dismiss_by_id() {
        let mut state = ViewState::default();
        let first = state.push_toast("one");
        let second = state.push_toast("two");
        assert_ne!(first, second);

        state.dismiss_toast(first);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "two");
    }

    #[test]
    fn test_handle_update_fires_change_hook() {
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let view = ViewHandle::new(move || counter.set(counter.get() + 1));

        view.update(|v| v.submit = SubmitButton::busy());
        assert_eq!(changes.get(), 1);
        assert!(view.read(|v| v.submit.is_busy()));
        assert_eq!(view.snapshot().submit.label, SUBMITTING_LABEL);
    }
}
