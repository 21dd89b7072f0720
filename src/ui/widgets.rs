use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, List, ListItem, Paragraph, Widget},
};

use super::app::WeekSummary;
use crate::analytics::PersonalRecord;
use crate::models::{WeightUnit, WorkoutDay, WorkoutPlan, WorkoutSession};

fn panel_block(title: &str, is_selected: bool) -> Block<'_> {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(border_style)
}

fn weight_str(weight_lbs: f64, unit: WeightUnit) -> String {
    format!("{:.1} {}", WeightUnit::Lbs.convert(weight_lbs, unit), unit)
}

/// Render today's scheduled workout
pub fn render_today(
    area: Rect,
    buf: &mut Buffer,
    today: Option<&WorkoutDay>,
    selected_index: usize,
    is_selected: bool,
) {
    let block = panel_block("🏋 Today", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let Some(day) = today else {
        Paragraph::new("No workout scheduled")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    };

    if day.workout_type.is_rest() {
        Paragraph::new("Rest day — recovery time")
            .style(Style::default().fg(Color::Green))
            .render(inner, buf);
        return;
    }

    let mut items = vec![ListItem::new(Line::from(vec![
        Span::styled(
            day.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ~{} min", day.estimated_minutes),
            Style::default().fg(Color::Gray),
        ),
    ]))];

    items.extend(day.exercises.iter().enumerate().map(|(idx, exercise)| {
        let line_style = if is_selected && idx == selected_index {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        ListItem::new(Line::from(Span::styled(
            format!(
                "  {:<26} {}x{}",
                exercise.name, exercise.sets, exercise.reps
            ),
            line_style,
        )))
    }));

    List::new(items).render(inner, buf);
}

/// Render weekly summary widget
pub fn render_week_summary(
    area: Rect,
    buf: &mut Buffer,
    summary: &WeekSummary,
    unit: WeightUnit,
    is_selected: bool,
) {
    let block = panel_block("📊 This Week", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(vec![
            Span::styled("Sessions: ", Style::default().fg(Color::Gray)),
            Span::styled(
                summary.sessions.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Volume: ", Style::default().fg(Color::Gray)),
            Span::styled(
                weight_str(summary.volume_lbs, unit),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Progress: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}%", ((summary.progress * 100.0).round() as u32).min(100)),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} days", summary.streak_days),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    Paragraph::new(lines).render(inner, buf);
}

/// Render weekly session bar chart
pub fn render_week_chart(area: Rect, buf: &mut Buffer, summary: &WeekSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📈 Sessions by Day ")
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    block.render(area, buf);

    let days = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let data: Vec<(&str, u64)> = days
        .iter()
        .zip(summary.sessions_by_day.iter())
        .map(|(day, count)| (*day, u64::from(*count)))
        .collect();

    let barchart = BarChart::default()
        .data(&data)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::White).bg(Color::Green));

    barchart.render(inner, buf);
}

/// Render recent sessions list
pub fn render_recent_sessions(
    area: Rect,
    buf: &mut Buffer,
    sessions: &[WorkoutSession],
    plan: &WorkoutPlan,
    unit: WeightUnit,
    selected_index: usize,
    is_selected: bool,
) {
    let block = panel_block("📒 Recent Sessions", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    if sessions.is_empty() {
        Paragraph::new("No sessions yet.\nRun 'liftlog session log' to record one.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = sessions
        .iter()
        .enumerate()
        .map(|(idx, session)| {
            let day_name = plan
                .day(session.day_number)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| format!("Day {}", session.day_number));

            let line_style = if is_selected && idx == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let content = format!(
                "{} {:<22} {:>2} sets {:>12}",
                session.date.format("%m/%d"),
                &day_name[..day_name.len().min(22)],
                session.total_sets(),
                weight_str(session.volume_lbs(), unit)
            );

            ListItem::new(Line::from(Span::styled(content, line_style)))
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render personal records panel
pub fn render_records(
    area: Rect,
    buf: &mut Buffer,
    records: &[PersonalRecord],
    unit: WeightUnit,
    selected_index: usize,
    is_selected: bool,
) {
    let block = panel_block("🏆 Personal Records", is_selected);
    let inner = block.inner(area);
    block.render(area, buf);

    if records.is_empty() {
        Paragraph::new("No records yet.\nLog sessions to start setting them.")
            .style(Style::default().fg(Color::Gray))
            .render(inner, buf);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let line_style = if is_selected && idx == selected_index {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let content = format!(
                "{:<24} {:>12} x{}",
                &record.exercise[..record.exercise.len().min(24)],
                weight_str(record.weight_lbs, unit),
                record.reps
            );

            ListItem::new(Line::from(Span::styled(content, line_style)))
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ❓ Help ")
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    block.render(area, buf);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation:",
            Style::default().fg(Color::Cyan),
        )),
        Line::from("  ↑/k      - Move up"),
        Line::from("  ↓/j      - Move down"),
        Line::from("  ←/h      - Previous panel"),
        Line::from("  →/l      - Next panel"),
        Line::from("  Tab      - Next panel"),
        Line::from("  Shift+Tab - Previous panel"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Cyan))),
        Line::from("  R        - Refresh data"),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    Paragraph::new(help_text).render(inner, buf);
}

/// Render status bar at bottom
pub fn render_status_bar(
    area: Rect,
    buf: &mut Buffer,
    greeting: &str,
    user_name: &str,
    summary: &WeekSummary,
) {
    let who = Span::styled(
        format!(" {}, {} ", greeting, user_name),
        Style::default().fg(Color::White).bg(Color::DarkGray),
    );

    let streak = Span::styled(
        format!(" 🔥 {} day streak ", summary.streak_days),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    );

    let progress = Span::styled(
        format!(
            " week {}% ",
            ((summary.progress * 100.0).round() as u32).min(100)
        ),
        Style::default().fg(Color::Yellow).bg(Color::DarkGray),
    );

    let help_hint = Span::styled(
        " Press ? for help ",
        Style::default().fg(Color::Gray).bg(Color::DarkGray),
    );

    let line = Line::from(vec![who, streak, progress, help_hint]);
    Paragraph::new(line).render(area, buf);
}
