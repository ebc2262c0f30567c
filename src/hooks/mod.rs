pub mod use_diet;
