use crate::acekey::{Assignment, InputState, assign_keybindings};
use crate::albums::{Album, entities};

// small constants reused by rendering code
pub const HEADER_LINES: usize = 1;
pub const MODELINE_LINES: usize = 1;
pub const RESERVED_LINES: usize = HEADER_LINES + MODELINE_LINES;
pub const DEFAULT_WIDTH: usize = 80;

// One album row as shown in the picker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlbumItem {
    pub id: String,
    pub label: String,
    pub asset_count: Option<u64>,
    pub key: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Model {
    pub items: Vec<AlbumItem>,
    pub assignment: Assignment<String>,
    pub input: InputState,
    // id of the album picked by a completed shortcut
    pub selected: Option<String>,
    pub show_unbound: bool,
    // pagination
    pub page: usize,
    pub per_page: usize,
    pub screen_width: usize,
}

pub fn initial_model(albums: Vec<Album>) -> Model {
    let mut m = Model {
        show_unbound: true,
        ..Model::default()
    };
    m.set_albums(albums);
    m
}

impl Model {
    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) {
        crate::ui::update::handle_update(self, msg);
    }

    /// Replaces the album list and recomputes every keybinding from scratch.
    pub fn set_albums(&mut self, albums: Vec<Album>) {
        let assignment = assign_keybindings(&entities(&albums));
        self.items = albums
            .into_iter()
            .map(|a| {
                let key = assignment.get(&a.id).map(str::to_string);
                AlbumItem {
                    id: a.id,
                    label: a.album_name,
                    asset_count: a.asset_count,
                    key,
                }
            })
            .collect();
        self.assignment = assignment;
        // a buffer typed against the old bindings means nothing now
        self.input.reset();
        self.selected = None;
        self.page = 0;
    }

    pub fn mode(&self) -> String {
        if !self.input.is_empty() {
            return format!("Typed: {}", self.input.buffer());
        }
        "albums".to_string()
    }

    /// True when the row's key still extends what has been typed.
    pub fn is_reachable(&self, it: &AlbumItem) -> bool {
        it.key
            .as_deref()
            .is_some_and(|k| k.starts_with(self.input.buffer()))
    }

    pub fn bound_count(&self) -> usize {
        self.assignment.len()
    }

    pub fn total_pages(&self) -> usize {
        let total = self.render_visible_items().len();
        if self.per_page == 0 || total == 0 {
            1
        } else {
            total.div_ceil(self.per_page)
        }
    }

    // Delegate rendering helpers to the render module
    pub fn render_visible_items(&self) -> Vec<AlbumItem> {
        crate::ui::render::list::render_visible_items(self)
    }

    pub fn render_list_content(&self, visible: &[AlbumItem]) -> String {
        crate::ui::render::list::render_list_content(self, visible)
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::full::render_full(self)
    }
}
