use crate::acekey::{KeyInput, MatchOutcome, step};
use crate::ui::model::Model;
use log::info;

pub fn handle_update(m: &mut Model, msg: crate::ui::Msg) {
    match msg {
        crate::ui::Msg::WindowSize { width, height } => handle_window_size(m, width, height),
        crate::ui::Msg::KeyBackspace => handle_key_input(m, KeyInput::Backspace),
        crate::ui::Msg::KeyEsc => handle_key_input(m, KeyInput::Cancel),
        crate::ui::Msg::KeyDown => handle_key_down(m),
        crate::ui::Msg::KeyUp => handle_key_up(m),
        crate::ui::Msg::Rune(r) => handle_key_input(m, KeyInput::Char(r)),
    }
}

fn handle_window_size(m: &mut Model, width: usize, height: usize) {
    m.screen_width = width;
    m.per_page = height.saturating_sub(crate::ui::model::RESERVED_LINES);
    if m.page >= m.total_pages() {
        m.page = 0;
    }
}

fn handle_key_input(m: &mut Model, input: KeyInput) {
    let selected = match step(&m.assignment, &mut m.input, input) {
        MatchOutcome::Matched(id) => Some(id.clone()),
        MatchOutcome::Partial(_) | MatchOutcome::Rejected { .. } | MatchOutcome::Empty => None,
    };
    if let Some(id) = selected {
        info!("album {id} selected");
        m.selected = Some(id);
        return;
    }
    if !m.input.is_empty() {
        show_first_reachable(m);
    }
}

// Jump to the page holding the first row the buffer can still reach
fn show_first_reachable(m: &mut Model) {
    if m.per_page == 0 {
        return;
    }
    let visible = m.render_visible_items();
    if let Some(pos) = visible.iter().position(|it| m.is_reachable(it)) {
        m.page = pos / m.per_page;
    }
}

fn handle_key_down(m: &mut Model) {
    if m.page + 1 < m.total_pages() {
        m.page += 1;
    }
}

fn handle_key_up(m: &mut Model) {
    if m.page > 0 {
        m.page -= 1;
    }
}
