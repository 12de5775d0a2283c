pub mod pagination;
pub mod telegram_init_data;
pub mod time;
pub mod validation;
