use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::keymap::{FULL_HELP, KeyHelp, SHORT_HELP};
use crate::tui::theme::Theme;
use crate::util::unicode::display_width;

use super::helpers::hint_line;

const COLUMN_GAP: usize = 4;

/// Rows the help area needs
pub fn help_height(expanded: bool) -> u16 {
    if expanded {
        FULL_HELP.iter().map(|group| group.len()).max().unwrap_or(1) as u16
    } else {
        1
    }
}

/// Collapsed one-line help, or the full binding table in columns
pub fn render_help_bar(frame: &mut Frame, expanded: bool, theme: &Theme, area: Rect) {
    let lines = if expanded {
        full_help_lines(FULL_HELP, theme)
    } else {
        vec![hint_line(SHORT_HELP, theme)]
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn full_help_lines(groups: &[&[KeyHelp]], theme: &Theme) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(theme.text);
    let desc_style = Style::default().fg(theme.dim);

    let key_widths: Vec<usize> = groups
        .iter()
        .map(|g| g.iter().map(|h| display_width(h.keys)).max().unwrap_or(0))
        .collect();
    let desc_widths: Vec<usize> = groups
        .iter()
        .map(|g| g.iter().map(|h| display_width(h.desc)).max().unwrap_or(0))
        .collect();

    let rows = groups.iter().map(|g| g.len()).max().unwrap_or(0);
    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (col, group) in groups.iter().enumerate() {
                let last = col + 1 == groups.len();
                match group.get(row) {
                    Some(entry) => {
                        let key_pad = key_widths[col] - display_width(entry.keys);
                        spans.push(Span::styled(
                            format!("{}{} ", entry.keys, " ".repeat(key_pad)),
                            key_style,
                        ));
                        let mut desc = entry.desc.to_string();
                        if !last {
                            let pad = desc_widths[col] - display_width(entry.desc);
                            desc.push_str(&" ".repeat(pad + COLUMN_GAP));
                        }
                        spans.push(Span::styled(desc, desc_style));
                    }
                    None if !last => {
                        let blank = key_widths[col] + 1 + desc_widths[col] + COLUMN_GAP;
                        spans.push(Span::raw(" ".repeat(blank)));
                    }
                    None => {}
                }
            }
            Line::from(spans)
        })
        .collect()
}
