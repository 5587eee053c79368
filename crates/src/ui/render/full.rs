use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::{STYLE_DESC, STYLE_TITLE};
use crate::ui::render::util::truncate_chars;
use lipgloss::Style;

pub fn render_header(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let title = "Albums";
    let summary = format!(
        "  {} of {} with shortcuts",
        m.bound_count(),
        m.items.len()
    );
    let summary = truncate_chars(
        &summary,
        total_width.saturating_sub(title.chars().count() + 2),
    );
    let line = format!(" {}{}", STYLE_TITLE.render(title), STYLE_DESC.render(&summary));
    Style::new().width(total_width as i32).render(&line)
}

pub fn render_full(m: &Model) -> String {
    let mut lines = vec![render_header(m)];
    lines.extend(
        crate::ui::render::list::render_main_content(m)
            .lines()
            .map(str::to_string),
    );
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}
