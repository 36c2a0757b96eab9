//! Rendering of the explorer screen.
//!
//! `render` is a pure function of [`App`]: every frame is rebuilt from the
//! current state, so nothing from an earlier analysis can linger on screen.

use super::actions::Focus;
use super::app::{App, DialogKind};
use super::theme::Theme;
use crate::observability::{set_phase, AnalysisPhase};
use crate::sentiment::{classify_with, PolarityScorer, SentimentReport, Verdict};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap,
    },
    Frame,
};

/// Rows of text visible in the input box.
const INPUT_HEIGHT: u16 = 7;

pub fn render<S: PolarityScorer>(frame: &mut Frame, app: &App<S>) {
    let _phase = set_phase(AnalysisPhase::Rendering);
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // Title
            Constraint::Length(INPUT_HEIGHT + 2), // Input
            Constraint::Length(1),                // Buttons
            Constraint::Min(0),                   // Results
            Constraint::Length(1),                // Footer
        ])
        .split(frame.area());

    render_title(frame, chunks[0], &theme);
    render_input(frame, app, chunks[1], &theme);
    render_buttons(frame, app, chunks[2], &theme);
    match app.report() {
        Some(report) => render_results(frame, app, report, chunks[3], &theme),
        None => render_placeholder(frame, chunks[3], &theme),
    }
    render_footer(frame, chunks[4], &theme);

    if app.dialog().is_some() {
        render_dialog(frame, app, &theme);
    }
}

fn render_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Sentiment Analysis Tool",
        theme.title_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_input<S: PolarityScorer>(frame: &mut Frame, app: &App<S>, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::Input;
    let input = app.input();
    let (row, _) = input.cursor();
    let cursor_col = input.cursor_display_col();
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let (scroll_y, scroll_x) = input_scroll((row, cursor_col), (inner_width, inner_height));

    let lines: Vec<Line> = input.lines().iter().map(|l| Line::from(l.as_str())).collect();
    let paragraph = Paragraph::new(lines)
        .scroll((scroll_y as u16, scroll_x as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter text to analyze")
                .border_style(theme.border_style(focused)),
        );
    frame.render_widget(paragraph, area);

    if focused && app.dialog().is_none() {
        let x = area.x + 1 + (cursor_col - scroll_x) as u16;
        let y = area.y + 1 + (row - scroll_y) as u16;
        frame.set_cursor_position((x, y));
    }
}

/// Vertical and horizontal offsets that keep the cursor inside a box of
/// `(width, height)` cells. The last column stays free for the cursor itself.
fn input_scroll((row, col): (usize, usize), (width, height): (usize, usize)) -> (usize, usize) {
    let scroll_y = row.saturating_sub(height.max(1) - 1);
    let scroll_x = col.saturating_sub(width.max(1) - 1);
    (scroll_y, scroll_x)
}

fn render_buttons<S: PolarityScorer>(frame: &mut Frame, app: &App<S>, area: Rect, theme: &Theme) {
    let focus = app.focus();
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            " Analyze ",
            theme.button_style(focus == Focus::AnalyzeButton),
        ),
        Span::raw("  "),
        Span::styled(" Clear ", theme.button_style(focus == Focus::ClearButton)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Type some text and press F5 to analyze it.",
        theme.hint_style(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(theme.border_style(false)));
    frame.render_widget(hint, area);
}

fn render_results<S: PolarityScorer>(
    frame: &mut Frame,
    app: &App<S>,
    report: &SentimentReport,
    area: Rect,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Verdict
            Constraint::Length(7), // Metrics
            Constraint::Min(3),    // Words
        ])
        .split(columns[0]);

    render_verdict(frame, report.verdict, left[0], theme);
    render_metrics(frame, report, app.precision(), left[1], theme);
    render_words(frame, report, app.word_selection(), app.precision(), left[2], theme);
    render_distribution(frame, report, app.precision(), columns[1], theme);
}

fn render_verdict(frame: &mut Frame, verdict: Verdict, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::raw(" Overall Sentiment: "),
        Span::styled(
            format!("{} {}", verdict.label(), verdict.emoji()),
            theme.verdict_style(verdict),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_metrics(
    frame: &mut Frame,
    report: &SentimentReport,
    precision: usize,
    area: Rect,
    theme: &Theme,
) {
    let rows = report
        .metric_rows()
        .into_iter()
        .map(|(metric, value)| Row::new(vec![metric.to_string(), format!("{value:.precision$}")]));

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(8)])
        .header(Row::new(vec!["Metric", "Value"]).style(theme.header_style()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Scores")
                .border_style(theme.border_style(false)),
        );
    frame.render_widget(table, area);
}

fn render_words(
    frame: &mut Frame,
    report: &SentimentReport,
    selected: usize,
    precision: usize,
    area: Rect,
    theme: &Theme,
) {
    let rows = report.words.iter().map(|word| {
        let verdict = classify_with(word.compound, &report.thresholds);
        Row::new(vec![
            Span::raw(word.word.clone()),
            Span::styled(
                format!("{:.precision$}", word.compound),
                Style::default().fg(theme.verdict_color(verdict)),
            ),
        ])
    });

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(16)])
        .header(Row::new(vec!["Word", "Sentiment Score"]).style(theme.header_style()))
        .row_highlight_style(theme.selection_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Word-level Sentiment Analysis ({})", report.word_count()))
                .border_style(theme.border_style(false)),
        );

    let mut state = TableState::default();
    if !report.words.is_empty() {
        state.select(Some(selected.min(report.words.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_distribution(
    frame: &mut Frame,
    report: &SentimentReport,
    precision: usize,
    area: Rect,
    theme: &Theme,
) {
    let bars: Vec<Bar> = Verdict::all()
        .into_iter()
        .zip(report.scores.proportions())
        .map(|(verdict, (label, value))| {
            let color = theme.verdict_color(verdict);
            Bar::default()
                .value(percent(value))
                .label(Line::from(label))
                .text_value(format!("{value:.precision$}"))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(4) / 3).clamp(3, 12);

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Sentiment Distribution")
                .border_style(theme.border_style(false)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max(100);
    frame.render_widget(chart, area);
}

/// Proportion in [0, 1] as a whole percentage for the bar height.
fn percent(value: f64) -> u64 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 100.0).round() as u64
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let hints = Paragraph::new(Line::from(Span::styled(
        "F5/Ctrl-R analyze  Ctrl-L clear  Tab focus  PgUp/PgDn words  Esc quit",
        theme.hint_style(),
    )));
    frame.render_widget(hints, area);
}

fn render_dialog<S: PolarityScorer>(frame: &mut Frame, app: &App<S>, theme: &Theme) {
    let Some(dialog) = app.dialog() else {
        return;
    };
    let area = centered_rect(50, 7, frame.area());
    let is_error = dialog.kind == DialogKind::Error;

    let body = vec![
        Line::from(dialog.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("Press Enter to close", theme.hint_style())),
    ];
    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title.as_str())
                .border_style(theme.dialog_border_style(is_error)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Rect of `percent_x` of the width and `height` rows, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width * percent_x / 100).max(20).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
