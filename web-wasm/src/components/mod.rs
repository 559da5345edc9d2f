pub mod custom_selection;
pub mod error_list;
pub mod header;
pub mod image_gallery;
pub mod lightbox;
pub mod mode_selector;
pub mod progress_bar;
pub mod settings_panel;
