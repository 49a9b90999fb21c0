use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const HELP_CONTENT: &str = r"
CLOUDTASKS - Remote download task client
========================================

TASK LIST
---------
j/k ↑↓      Move cursor
h/l ←→      Collapse/expand a torrent container
Space       Toggle selection of the current row
Ctrl+A      Select every visible row
Enter       Quick view (preview videos, open documents and images)
m           Open the actions menu
p           Preview current task
d           Download current task
Del / x     Remove selected tasks
y           Copy download address
Y           Copy source address
n           Copy task name
s           Copy as script
- / +       Collapse / expand all
w           Resize columns to contents

FILTER
------
Ctrl+F      Show and focus the filter (selects its text when already shown)
Esc         Hide the filter bar (the filter stays applied)
Ctrl+U      Clear the filter and hide the bar
Enter       Return to the task list

ADD TASKS
---------
a           Open the add task dialog
Tab         Next mode (Single, BitTorrent, Batch)
Alt+1/2/3   Jump to a mode
Enter/Ctrl+S Accept
Esc         Close the dialog
Ctrl+V      Batch mode: read links from the clipboard
Ctrl+O      BitTorrent mode: upload a torrent file
e           Batch mode: edit links by hand (Ctrl+S parses them)
Space       Toggle a torrent file or batch link
Paste       Dropped .torrent files are uploaded, dropped text becomes a batch

GENERAL CONTROLS
----------------
r           Refresh the task list
V           Toggle quick view
i           Change icon theme
G           Show logs
?           Toggle help panel
q / Ctrl+C  Quit application

HELP PANEL SCROLLING
--------------------
j/k ↑↓      Scroll help content
PageUp/Down Page through help content
Home/End    Jump to top/bottom

ROW COLORS
----------
Blue name   Download link is still being resolved by the service

Press 'Esc' or '?' to close this help panel
";

fn render_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Lines of `content` visible from `scroll_offset`, updating the scrollbar to match
fn visible_text(
    content: &str,
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> (String, bool) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    (text, total_lines > visible_height)
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (message_text, scrollable) =
        visible_text(message, content_area.height as usize, scroll_offset, scrollbar_state);

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if scrollable {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!("{} Info", icons.info());
    render_message_dialog(f, area, title, Color::Blue, message, scroll_offset, scrollbar_state);
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let title = format!("{} Error", icons.error());
    render_message_dialog(f, area, title, Color::Red, message, scroll_offset, scrollbar_state);
}

fn render_full_screen_text(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let outer = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, outer);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        outer.x + margin_x,
        outer.y + margin_y,
        outer.width.saturating_sub(margin_x * 2),
        outer.height.saturating_sub(margin_y * 2),
    );

    let visible_height = content_area.height.saturating_sub(2) as usize;
    let (text, scrollable) = visible_text(content, visible_height, scroll_offset, scrollbar_state);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if scrollable {
        render_scrollbar(f, content_area, scrollbar_state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_full_screen_text(
        f,
        area,
        "📖 Help - Press 'Esc' or '?' to close",
        HELP_CONTENT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let mut content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    if let Some(path) = logger.log_file() {
        content = format!("Writing to {}\n\n{}", path.display(), content);
    }

    render_full_screen_text(f, area, DIALOG_TITLE_LOGS, &content, scroll_offset, scrollbar_state);
}
