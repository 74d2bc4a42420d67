use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Spoke},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};
use std::f64::consts::PI;

use modewheel::pitch::PitchClass;
use modewheel::session::Provenance;

use crate::app::{App, AppMode};

// ── Colour ring ───────────────────────────────────────────────────────────────

/// Hues of the twelve ring slots, interpolated between
/// 0, 30, 60, 120, 200, 260 and 300 degrees.
const RING_HUES: [f32; 12] = [
    0.0, 15.0, 30.0, 45.0, 60.0, 90.0, 120.0, 160.0, 200.0, 230.0, 260.0, 280.0,
];

/// Convert HSL (h in degrees 0–360, s and l in 0.0–1.0) to RGB [0–255].
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [
        ((r1 + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((g1 + m) * 255.0).clamp(0.0, 255.0) as u8,
        ((b1 + m) * 255.0).clamp(0.0, 255.0) as u8,
    ]
}

fn ring_color(slot: usize) -> Color {
    let [r, g, b] = hsl_to_rgb(RING_HUES[slot % 12], 0.7, 0.55);
    Color::Rgb(r, g, b)
}

fn interval_color(app: &App, interval: PitchClass) -> Color {
    ring_color(app.session.color_index(interval))
}

// ── Top-level layout ──────────────────────────────────────────────────────────

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // title bar
            Constraint::Min(16),    // wheel + panels
            Constraint::Length(4),  // status
            Constraint::Length(5),  // help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(body[1]);

    draw_title(f, rows[0], app);
    draw_wheel(f, body[0], app);
    draw_family(f, side[0], app);
    draw_tiles(f, side[1], app);
    draw_status(f, rows[2], app);
    draw_help(f, rows[3], app);
}

// ── Title bar ─────────────────────────────────────────────────────────────────

fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let catalog = app.session.catalog();
    let audio = if app.audio_enabled { "audio on" } else { "silent" };
    let playing = if app.busy { "  ▶" } else { "" };
    let text = format!(
        "  ModeWheel  ─  {} families, {} modes  ─  [{}]{}",
        catalog.len(), catalog.pattern_count(), audio, playing
    );
    let color = if app.audio_enabled { Color::Cyan } else { Color::Yellow };
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}

// ── Wheel ─────────────────────────────────────────────────────────────────────

/// Clockwise from twelve o'clock, one slot per semitone.
fn slot_xy(slot: usize, radius: f64) -> (f64, f64) {
    let angle = PI / 2.0 - slot as f64 * PI / 6.0;
    (radius * angle.cos(), radius * angle.sin())
}

fn draw_wheel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Wheel — root {} ", app.session.root().name()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);

    // Cells are about twice as tall as wide; widen x so the circle stays round.
    let aspect = if inner.height == 0 { 1.0 } else { inner.width as f64 / (inner.height as f64 * 2.0) };
    let selection = app.session.selection();
    let sounding = app.sounding_intervals();
    let root = app.session.root();

    let spokes: Vec<(f64, f64, Color)> = selection
        .iter()
        .map(|iv| {
            let (x, y) = slot_xy(iv.index(), 0.8);
            (x, y, interval_color(app, iv))
        })
        .collect();

    let labels: Vec<(f64, f64, Span<'static>)> = PitchClass::all()
        .map(|iv| {
            let (x, y) = slot_xy(iv.index(), 1.05);
            let name = iv.transpose(root.value() as i32).short_name();
            let style = if sounding.contains(&iv) {
                Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if selection.contains(iv) {
                Style::default().fg(interval_color(app, iv)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            (x - 0.04 * name.len() as f64, y, Span::styled(name, style))
        })
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.25 * aspect, 1.25 * aspect])
        .y_bounds([-1.25, 1.25])
        .paint(move |ctx| {
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: 0.85, color: Color::DarkGray });
            for &(x2, y2, color) in &spokes {
                ctx.draw(&Spoke { x1: 0.0, y1: 0.0, x2, y2, color });
            }
            ctx.layer();
            for (x, y, span) in &labels {
                ctx.print(*x, *y, span.clone());
            }
        });
    f.render_widget(canvas, area);
}

// ── Family panel ──────────────────────────────────────────────────────────────

fn draw_family(f: &mut Frame, area: Rect, app: &App) {
    let s = &app.session;
    let d = Style::default().fg(Color::DarkGray);
    let b = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let (label_style, prov) = match s.provenance() {
        Provenance::Matched => (Style::default().fg(Color::Green).add_modifier(Modifier::BOLD), "matched"),
        Provenance::Custom  => (Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD), "custom"),
    };

    let siblings = s.catalog().family_names_with_note_count(s.active().note_count);
    let position = siblings.iter().position(|&n| n == s.active().family).map_or(0, |i| i + 1);

    let address = if app.mode == AppMode::Address {
        Span::styled(format!("{}▏", app.address_input),
                     Style::default().fg(Color::Black).bg(Color::Yellow))
    } else {
        Span::styled(s.address(), b)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Notes: ", d), Span::styled(s.note_count().to_string(), b),
            Span::raw("   "),
            Span::styled("Family: ", d), Span::styled(s.family_label(), label_style),
            Span::styled(format!("  ({}/{} with {} notes)", position, siblings.len(), s.active().note_count), d),
        ]),
        Line::from(vec![
            Span::styled("Mode: ", d),
            Span::styled(s.rotation_name().unwrap_or("—"), b),
            Span::raw("   "),
            Span::styled("Address: ", d), address,
        ]),
        Line::from(vec![
            Span::styled("Root: ", d), Span::styled(s.root().name(), b),
            Span::raw("   "),
            Span::styled("Intervals: ", d), Span::styled(s.selection().to_string(), b),
            Span::raw("   "),
            Span::styled(prov, label_style),
        ]),
        Line::from(vec![
            Span::styled("Spelled: ", d),
            Span::raw(
                s.selection().iter()
                    .map(|iv| iv.interval_name())
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Mode ").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ── Degree tiles ──────────────────────────────────────────────────────────────

fn draw_tiles(f: &mut Frame, area: Rect, app: &App) {
    let tiles = app.tiles();
    let mut lines: Vec<Line> = Vec::new();
    if tiles.is_empty() {
        lines.push(Line::from(Span::styled("  (no notes selected)", Style::default().fg(Color::DarkGray))));
    }
    for tile in &tiles {
        let selected = tile.degree == app.cursor;
        let color = interval_color(app, tile.interval);
        let base = if selected {
            Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "▶" } else { " " }, base),
            Span::styled(format!("{:>3} ", tile.degree + 1), base),
            Span::styled(format!("{:<7}", tile.note.short_name()), base),
            Span::styled(format!("{:<8}", tile.chord), base),
            Span::styled(tile.mode_name.clone(), base),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Degrees — [Tab] Cursor  [Space] Mode  [t] Chord  [n] Note ")
                .borders(Borders::ALL),
        ),
        area,
    );
}

// ── Status bar ────────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let vol     = app.volume();
    let notes   = app.active_note_names();
    let notes_s = if notes.is_empty() { "—".to_string() } else { notes.join(" ") };
    let step_s  = match app.progress {
        Some((step, len)) => format!("  (step {}/{})", (step + 1).min(len), len),
        None => String::new(),
    };
    let fx = app.effect_names().join(" → ");

    let text = vec![
        Line::from(vec![
            Span::styled("Vol: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.0}%", vol * 100.0),
                         Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            Span::raw("  │  "),
            Span::styled("Oct: ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.settings.octave.to_string(),
                         Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw("  │  "),
            Span::styled(app.status_msg.as_str(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("Playing: ", Style::default().fg(Color::DarkGray)),
            Span::styled(notes_s,     Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::styled(step_s,      Style::default().fg(Color::DarkGray)),
            Span::raw("  │  "),
            Span::styled("FX: ",      Style::default().fg(Color::DarkGray)),
            Span::styled(fx,          Style::default().fg(Color::Cyan)),
        ]),
    ];

    f.render_widget(
        Paragraph::new(text)
            .block(Block::default().title(" Status ").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        area,
    );
}

// ── Help panel ────────────────────────────────────────────────────────────────

fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let w = Style::default().fg(Color::White);

    let lines = match app.mode {
        AppMode::Wheel => vec![
            Line::from(vec![
                Span::styled("[1-9 0 - =] ", w), Span::raw("Toggle interval  │  "),
                Span::styled("[↑↓] ",        w), Span::raw("Note count  │  "),
                Span::styled("[←→] ",        w), Span::raw("Family  │  "),
                Span::styled("[, .] ",       w), Span::raw("Rotate mode  │  "),
                Span::styled("[[ ]] ",       w), Span::raw("Root"),
            ]),
            Line::from(vec![
                Span::styled("[Space] ",     w), Span::raw("Play mode  │  "),
                Span::styled("[t] ",         w), Span::raw("Chord  │  "),
                Span::styled("[c] ",         w), Span::raw("All chords  │  "),
                Span::styled("[n] ",         w), Span::raw("Note  │  "),
                Span::styled("[s] ",         w), Span::raw("Stop  │  "),
                Span::styled("[: / Enter] ", w), Span::raw("Address  │  "),
                Span::styled("[PgUp/Dn] ",   w), Span::raw("Volume  │  "),
                Span::styled("[Esc] ",       w), Span::raw("Quit"),
            ]),
        ],
        AppMode::Address => vec![
            Line::from(vec![
                Span::raw("Type notes.family.mode, e.g. 7.1.2 for Dorian  │  "),
                Span::styled("[Enter] ", w), Span::raw("Load  │  "),
                Span::styled("[Esc] ",   w), Span::raw("Cancel"),
            ]),
        ],
    };

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().title(" Help ").borders(Borders::ALL))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
    }

    #[test]
    fn test_slot_positions() {
        let (x, y) = slot_xy(0, 1.0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);
        let (x, y) = slot_xy(3, 1.0);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);
    }
}
