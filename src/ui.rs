use ratatui::{prelude::*, widgets::*};

use crate::constants::REPLY_PLACEHOLDER;
use crate::models::{Comment, SortType};

/// Renders a text input field, showing the placeholder when empty
pub fn render_input<'a>(
    content: &'a str,
    placeholder: &'a str,
    title: &'a str,
    border_style: Style,
) -> Paragraph<'a> {
    let text = if content.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(content)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    Paragraph::new(Line::from(text)).block(block)
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles.iter().map(|t| Line::from(*t)).collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .divider("|")
}

/// Sort selector built from every sort option
pub fn render_sort_selector(sort: SortType) -> Tabs<'static> {
    let titles: Vec<&'static str> = SortType::ALL.iter().map(|s| s.label()).collect();
    render_tabs(&titles, sort.index())
}

/// Star marker for a comment
pub fn star_span(starred: bool) -> Span<'static> {
    if starred {
        Span::styled("★", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::styled("☆", Style::default().fg(Color::DarkGray))
    }
}

/// Reply draft shown under the selected comment. `cursor` is a byte
/// offset into `text`, set while the draft is being edited.
#[derive(Clone, Copy, Debug)]
pub struct ReplyDraft<'a> {
    pub text: &'a str,
    pub cursor: Option<usize>,
}

/// Draft text with the cursor cell drawn reversed
fn draft_spans(draft: ReplyDraft) -> Vec<Span<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let Some(cursor) = draft.cursor else {
        if draft.text.is_empty() {
            return vec![Span::styled(REPLY_PLACEHOLDER, Style::default().fg(Color::DarkGray))];
        }
        return vec![Span::styled(draft.text.to_string(), style)];
    };

    let cursor = cursor.min(draft.text.len());
    let (before, rest) = draft.text.split_at(
        (0..=cursor).rev().find(|&i| draft.text.is_char_boundary(i)).unwrap_or(0),
    );
    let mut chars = rest.chars();
    let under = chars.next().map(String::from).unwrap_or_else(|| String::from(" "));

    vec![
        Span::styled(before.to_string(), style),
        Span::styled(under, style.add_modifier(Modifier::REVERSED)),
        Span::styled(chars.as_str().to_string(), style),
    ]
}

/// Lines for one comment: optional timestamp, text with star, replies,
/// and the reply draft when the comment is selected
pub fn comment_lines(
    comment: &Comment,
    show_timestamp: bool,
    timestamp_format: &str,
    reply_draft: Option<ReplyDraft>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if show_timestamp {
        lines.push(Line::from(Span::styled(
            comment.formatted_timestamp(timestamp_format),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(vec![
        star_span(comment.starred),
        Span::raw(" "),
        Span::raw(comment.text.clone()),
    ]));

    for reply in &comment.replies {
        lines.push(Line::from(vec![
            Span::styled("    │ ", Style::default().fg(Color::DarkGray)),
            Span::raw(reply.text.clone()),
        ]));
    }

    if let Some(draft) = reply_draft {
        let mut spans = vec![Span::raw("    ↳ ")];
        spans.extend(draft_spans(draft));
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reply;
    use chrono::{Local, TimeZone};

    fn sample() -> Comment {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let mut comment = Comment::new(1, "Hello", at);
        comment.replies.push(Reply { id: 1, text: "Hi".into() });
        comment
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_comment_lines_with_timestamp() {
        let lines = comment_lines(&sample(), true, "%-m/%-d/%Y, %-I:%M:%S %p", None);
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[0]), "3/9/2024, 2:05:07 PM");
        assert_eq!(text(&lines[1]), "☆ Hello");
        assert_eq!(text(&lines[2]), "    │ Hi");
    }

    #[test]
    fn test_comment_lines_hidden_timestamp_and_draft() {
        let mut comment = sample();
        comment.starred = true;
        let draft = ReplyDraft { text: "", cursor: None };
        let lines = comment_lines(&comment, false, "%c", Some(draft));
        assert_eq!(lines.len(), 3);
        assert_eq!(text(&lines[0]), "★ Hello");
        assert_eq!(text(&lines[2]), format!("    ↳ {}", REPLY_PLACEHOLDER));
    }

    #[test]
    fn test_reply_draft_shows_cursor_while_editing() {
        let draft = ReplyDraft { text: "héllo", cursor: Some(1) };
        let lines = comment_lines(&sample(), false, "%c", Some(draft));
        let spans = &lines[2].spans;
        assert_eq!(text(&lines[2]), "    ↳ héllo");
        assert_eq!(spans[1].content, "h");
        assert_eq!(spans[2].content, "é");
        assert!(spans[2].style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(spans[3].content, "llo");
    }

    #[test]
    fn test_reply_draft_cursor_at_end() {
        let draft = ReplyDraft { text: "", cursor: Some(0) };
        let lines = comment_lines(&sample(), false, "%c", Some(draft));
        assert_eq!(text(&lines[2]), "    ↳  ");
        assert!(lines[2].spans[2].style.add_modifier.contains(Modifier::REVERSED));
    }
}
