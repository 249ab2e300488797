pub mod actions;
pub mod app;
pub mod confirm_modal;
pub mod entries_table;
pub mod error_modal;
pub mod form_panel;
pub mod notice_banner;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::FormApp;
