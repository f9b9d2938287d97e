//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(8), // power chart
            Constraint::Min(8), // charge chart
            Constraint::Length(3), // SOC gauge
            Constraint::Length(3), // status line
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);

    let power: Vec<(f64, f64)> = app
        .history
        .iter()
        .map(|r| (r.hour as f64, r.power_generated_w))
        .collect();
    let charge: Vec<(f64, f64)> = app
        .history
        .iter()
        .map(|r| (r.hour as f64, r.charge_level_wh))
        .collect();
    let x_bounds = hour_bounds(&power);

    render_series(
        frame,
        chunks[1],
        SeriesChart {
            title: " Power Generated ",
            name: "Power",
            unit: "W",
            color: style::POWER_COLOR,
            data: &power,
            x_bounds,
            y_bounds: style::bounds_from_zero(app.rated_power_w()),
        },
    );
    render_series(
        frame,
        chunks[2],
        SeriesChart {
            title: " Battery Charge Level ",
            name: "Charge",
            unit: "Wh",
            color: style::CHARGE_COLOR,
            data: &charge,
            x_bounds,
            y_bounds: style::bounds_from_zero(app.capacity_wh()),
        },
    );

    render_soc_gauge(frame, app, chunks[3]);
    render_status(frame, app, chunks[4]);
    render_footer(frame, chunks[5]);
}

/// Hour-axis bounds covering the visible history.
fn hour_bounds(data: &[(f64, f64)]) -> [f64; 2] {
    let lo = data.first().map_or(0.0, |p| p.0);
    let hi = data.last().map_or(1.0, |p| p.0).max(lo + 1.0);
    [lo, hi]
}

/// Header bar: scenario label, hour progress, speed, run state, day/night.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (state_icon, state_label) = if app.is_finished() {
        ("■", "DONE")
    } else if app.paused {
        ("‖", "PAUSED")
    } else {
        ("▶", "RUNNING")
    };

    let (phase, phase_color) = if app.is_daylight() {
        ("DAY", style::DAY_COLOR)
    } else {
        ("NIGHT", style::NIGHT_COLOR)
    };

    let header = Line::from(vec![
        Span::styled(
            " LUNAR-CHARGE ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&app.label, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " │ hour {}/{} │ {}ms │ {} {} │ ",
            app.hours_done(),
            app.total_hours(),
            app.tick_interval_ms(),
            state_icon,
            state_label,
        )),
        Span::styled(
            phase,
            Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

struct SeriesChart<'a> {
    title: &'a str,
    name: &'a str,
    unit: &'a str,
    color: Color,
    data: &'a [(f64, f64)],
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

/// One time series against hour index.
fn render_series(frame: &mut Frame, area: Rect, series: SeriesChart<'_>) {
    let datasets = vec![
        Dataset::default()
            .name(series.name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(series.color))
            .data(series.data),
    ];

    let [x_lo, x_hi] = series.x_bounds;
    let [y_lo, y_hi] = series.y_bounds;

    let chart = Chart::new(datasets)
        .block(Block::default().title(series.title).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("hour")
                .bounds(series.x_bounds)
                .labels(vec![format!("{}", x_lo as u64), format!("{}", x_hi as u64)]),
        )
        .y_axis(
            Axis::default()
                .title(series.unit)
                .style(Style::default().fg(series.color))
                .bounds(series.y_bounds)
                .labels(vec![format!("{y_lo:.0}"), format!("{y_hi:.0}")]),
        );

    frame.render_widget(chart, area);
}

/// Battery state-of-charge gauge.
fn render_soc_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let soc = app.battery_soc();
    let gauge = Gauge::default()
        .block(Block::default().title(" SOC ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(style::soc_color(soc)))
        .ratio(soc.clamp(0.0, 1.0))
        .label(format!("{:.1}%", soc * 100.0));
    frame.render_widget(gauge, area);
}

/// Latest status record, in console format.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.last_record() {
        Some(r) => Line::from(format!("  {r}")),
        None => Line::from("  Waiting for first hour..."),
    };
    let paragraph =
        Paragraph::new(line).block(Block::default().title(" Status ").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Space:Pause  +/-:Speed  1/2/3:Preset  r:Restart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
