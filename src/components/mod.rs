pub mod meal_form;
pub mod meal_list;
pub mod stats_panel;
pub mod toast;

pub use meal_form::MealForm;
pub use meal_list::MealList;
pub use stats_panel::StatsPanel;
pub use toast::ToastStack;
