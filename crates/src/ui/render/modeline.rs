use crate::ui::model::{DEFAULT_WIDTH, Model};
use crate::ui::render::styles::STYLE_MODELINE;
use crate::ui::render::util::truncate_chars;
use lipgloss::Color;

pub fn render_modeline(m: &Model, inner_max: usize) -> String {
    // prepare inner styles without padding so spacing is under our control
    let inner_style = STYLE_MODELINE.clone().padding(0, 0, 0, 0);
    let key_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(238, 0, 238))
        .bold(true)
        .padding(0, 0, 0, 0);
    let warn_style = STYLE_MODELINE
        .clone()
        .foreground(Color::from_rgb(255, 96, 96))
        .bold(true)
        .padding(0, 0, 0, 0);
    let pag_style = STYLE_MODELINE.clone().faint(true).padding(0, 0, 0, 0);

    // key/description pairs; Esc quits only when nothing is typed
    let esc_desc = if m.input.is_empty() { "quit" } else { "cancel" };
    let pairs_def: Vec<(&str, &str)> = vec![("⌫", "undo"), ("⎋", esc_desc), ("↑/↓", "page")];
    let pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, d)| {
            let plain_len = d.chars().count() + 1 + k.chars().count();
            let rendered = format!(
                "{}{}{}",
                inner_style.render(d),
                inner_style.render(":"),
                key_style.render(k)
            );
            (rendered, plain_len)
        })
        .collect();
    let pair_sep_width = 2usize;

    let total_pages = m.total_pages();
    let pag_plain = if total_pages > 1 {
        format!("Page {}/{}", m.page + 1, total_pages)
    } else {
        String::new()
    };
    let pag_width = pag_plain.chars().count();

    let mode = m.mode();
    let mode_w = mode.chars().count() + 2; // Padding(0,1) adds 1 left + 1 right
    let sep_w = " | ".chars().count();
    let avail = inner_max.saturating_sub(mode_w + sep_w);

    // the warning outranks the hints, so it is placed first and only truncated as a last resort
    let warning = m
        .input
        .warning_message()
        .map(|w| truncate_chars(&w, avail.saturating_sub(pag_width + 2)))
        .unwrap_or_default();
    let warning_width = if warning.is_empty() {
        0
    } else {
        warning.chars().count() + pair_sep_width
    };

    // drop rightmost pairs until everything fits into avail
    let mut pairs_count = pairs.len();
    let left_width = |count: usize| -> usize {
        if count == 0 {
            return warning_width;
        }
        warning_width
            + pairs.iter().take(count).map(|(_, w)| *w).sum::<usize>()
            + pair_sep_width * (count - 1)
    };
    while pairs_count > 0 && left_width(pairs_count) + pag_width + 2 > avail {
        pairs_count -= 1;
    }
    let used = left_width(pairs_count);

    let mut left_rendered = String::new();
    if !warning.is_empty() {
        left_rendered.push_str(&warn_style.render(&warning));
        left_rendered.push_str(&inner_style.render("  "));
    }
    left_rendered.push_str(
        &pairs
            .iter()
            .take(pairs_count)
            .map(|(r, _)| r.clone())
            .collect::<Vec<_>>()
            .join(&inner_style.render("  ")),
    );

    let pad = avail.saturating_sub(used + pag_width + 2);
    let filler = if pad > 0 {
        STYLE_MODELINE.clone().width(pad as i32).render("")
    } else {
        String::new()
    };
    let pag_rendered = if pag_plain.is_empty() {
        String::new()
    } else {
        pag_style.render(&pag_plain)
    };

    let mode_style = STYLE_MODELINE
        .clone()
        .background(Color::from_rgb(101, 101, 101))
        .padding(0, 1, 0, 1)
        .bold(true);
    let sep_styled = inner_style.render(" | ");
    format!(
        "{}{sep_styled}{left_rendered}{filler}{pag_rendered}",
        mode_style.render(&mode)
    )
}

pub fn render_modeline_padded(m: &Model) -> String {
    let total_width = if m.screen_width > 0 {
        m.screen_width
    } else {
        DEFAULT_WIDTH
    };
    let inner_max = total_width.saturating_sub(3);
    let modeline = render_modeline(m, inner_max).replace('\n', " ");
    STYLE_MODELINE
        .clone()
        .width(total_width as i32)
        .render(&modeline)
}
