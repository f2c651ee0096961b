use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Draw the footer bar with the form mode and record count
pub fn draw_footer(frame: &mut Frame, area: Rect, editing: Option<&str>, count: usize) {
  let mode = match editing {
    Some(name) => Span::styled(
      format!("Editing {}", name),
      Style::default().fg(Color::Yellow).bold(),
    ),
    None => Span::styled("Creating", Style::default().fg(Color::Cyan).bold()),
  };

  let line = Line::from(vec![
    Span::raw(" "),
    mode,
    Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
    Span::styled(
      format!("{} employee{}", count, if count == 1 { "" } else { "s" }),
      Style::default().fg(Color::White),
    ),
  ]);
  let paragraph = Paragraph::new(line).style(Style::default().bg(Color::Black));

  frame.render_widget(paragraph, area);
}
