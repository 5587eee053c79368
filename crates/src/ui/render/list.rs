use crate::ui::model::{AlbumItem, DEFAULT_WIDTH, Model};
use crate::ui::render::styles::{STYLE_ACE, STYLE_DESC, STYLE_LABEL, STYLE_TYPED};
use crate::ui::render::util::{normalize_and_pad, truncate_chars};

const UNBOUND_MARK: &str = "--";

pub fn render_visible_items(m: &Model) -> Vec<AlbumItem> {
    m.items
        .iter()
        .filter(|it| m.show_unbound || it.key.is_some())
        .cloned()
        .collect()
}

fn key_column_width(visible: &[AlbumItem]) -> usize {
    visible
        .iter()
        .filter_map(|it| it.key.as_ref().map(String::len))
        .max()
        .unwrap_or(0)
        .max(UNBOUND_MARK.len())
}

// Typed part and remaining part of the key, in different colors
fn render_key(m: &Model, it: &AlbumItem, width: usize) -> String {
    let typed = m.input.buffer();
    let pad = |len: usize| " ".repeat(width.saturating_sub(len));
    match it.key.as_deref() {
        None => format!("{}{}", STYLE_DESC.render(UNBOUND_MARK), pad(UNBOUND_MARK.len())),
        Some(key) if m.is_reachable(it) => {
            let (done, rest) = key.split_at(typed.len());
            let mut out = String::new();
            if !done.is_empty() {
                out.push_str(&STYLE_TYPED.render(done));
            }
            out.push_str(&STYLE_ACE.render(rest));
            out.push_str(&pad(key.len()));
            out
        }
        Some(key) => format!("{}{}", STYLE_DESC.render(key), pad(key.len())),
    }
}

fn render_item_line(m: &Model, it: &AlbumItem, key_width: usize, total_width: usize) -> String {
    let count = it
        .asset_count
        .map(|n| format!(" ({n})"))
        .unwrap_or_default();
    // leading space, key column, two-space gap, one column of slack
    let fixed = 1 + key_width + 2 + count.chars().count() + 1;
    let label = truncate_chars(&it.label, total_width.saturating_sub(fixed));
    let dim = it.key.is_none() || (!m.input.is_empty() && !m.is_reachable(it));
    let label_styled = if dim {
        STYLE_DESC.render(&label)
    } else {
        STYLE_LABEL.render(&label)
    };
    let count_styled = if count.is_empty() {
        String::new()
    } else {
        STYLE_DESC.render(&count)
    };
    format!(
        " {}  {}{}",
        render_key(m, it, key_width),
        label_styled,
        count_styled
    )
}

fn screen_width(m: &Model) -> usize {
    if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    }
}

fn rows_per_page(m: &Model, visible: &[AlbumItem]) -> usize {
    if m.per_page == 0 {
        visible.len()
    } else {
        m.per_page
    }
}

pub fn render_list_content(m: &Model, visible: &[AlbumItem]) -> String {
    let total_width = screen_width(m);
    let key_width = key_column_width(visible);
    let per = rows_per_page(m, visible);
    let start = m.page.saturating_mul(per).min(visible.len());
    let end = usize::min(start + per, visible.len());
    visible[start..end]
        .iter()
        .map(|it| render_item_line(m, it, key_width, total_width))
        .collect::<Vec<_>>()
        .join("\n")
}

// List area padded to exactly one page of full-width lines
pub fn render_main_content(m: &Model) -> String {
    let visible = m.render_visible_items();
    let list = m.render_list_content(&visible);
    let lines: Vec<String> = list.lines().map(str::to_string).collect();
    normalize_and_pad(lines, screen_width(m), rows_per_page(m, &visible))
}
