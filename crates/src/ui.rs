// UI module root: the album picker, split into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

pub use model::{AlbumItem, Model, initial_model};
pub use render::{render_full, render_header, render_list_content, render_modeline_padded};
pub use run::run;
pub use update::handle_update;

// Messages used by the update logic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    WindowSize { width: usize, height: usize },
    KeyBackspace,
    KeyEsc,
    Rune(char),
    KeyUp,
    KeyDown,
}
