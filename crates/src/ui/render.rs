// Render module split into focused submodules.

pub mod full;
pub mod list;
pub mod modeline;
pub mod styles;
pub mod util;

pub use full::{render_full, render_header};
pub use list::{render_list_content, render_main_content, render_visible_items};
pub use modeline::{render_modeline, render_modeline_padded};
