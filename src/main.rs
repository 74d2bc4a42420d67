mod app;
mod audio;
mod effects;
mod sequencer;
mod synth;
mod ui;

use anyhow::{bail, Context, Result};
use app::{App, AppMode};
use audio::AudioOutput;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, sync::{Arc, Mutex}, time::Duration};
use synth::Synth;

use modewheel::address::Address;
use modewheel::catalog::Catalog;
use modewheel::pitch::{PitchClass, PitchSet};
use modewheel::settings::{load_settings, AppSettings};

#[derive(Parser)]
#[command(name = "modewheel", about = "Terminal explorer for scales and their modes")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to modewheel.json next to the executable)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Name a set of pitch classes, e.g. `detect 0 2 4 5 7 9 11`
    Detect {
        /// Pitch classes 0-11, separated by spaces or commas
        #[arg(required = true)]
        pcs: Vec<String>,
    },

    /// Print the mode at an address such as 7.1.2
    Show {
        address: String,
    },

    /// List every family with this many notes
    Families {
        note_count: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.settings.as_deref());

    match cli.command {
        Some(Command::Detect { pcs }) => detect_command(&pcs),
        Some(Command::Show { address }) => show_command(&address),
        Some(Command::Families { note_count }) => families_command(note_count),
        None => interactive(settings),
    }
}

// ── One-shot commands ─────────────────────────────────────────────────────────

fn parse_pitch_set(args: &[String]) -> Result<PitchSet> {
    let mut set = PitchSet::EMPTY;
    for token in args.iter().flat_map(|a| a.split(',')).map(str::trim).filter(|t| !t.is_empty()) {
        let value: u8 = token.parse().with_context(|| format!("'{}' is not a pitch class", token))?;
        match PitchClass::new(value) {
            Some(pc) => set.insert(pc),
            None => bail!("pitch class {} is outside 0..=11", value),
        }
    }
    Ok(set)
}

fn detect_command(args: &[String]) -> Result<()> {
    let set = parse_pitch_set(args)?;
    let catalog = Catalog::builtin();
    let detection = catalog.detect(set, None);
    match detection.mode_ref() {
        Some(m) => {
            let fam = catalog.family(m.family).context("matched family missing from catalog")?;
            let address = Address::new(fam.note_count(), fam.family_index(), m.rotation as i64 + 1);
            println!("{}: {} ({}) {}", set, fam.mode_name(m.rotation), fam.name(), address);
        }
        None => println!("{}: {} ({}.0.1)", set, detection.family_name(), set.len()),
    }
    Ok(())
}

fn show_command(text: &str) -> Result<()> {
    let address: Address = text.parse()?;
    let (fam, rotation) = address.resolve(Catalog::builtin())?;
    let pattern = fam.pattern(rotation).context("rotation out of range")?;
    println!("{} {}.{}.{}", fam.name(), fam.note_count(), fam.family_index(), rotation + 1);
    println!("  mode:      {}", fam.mode_name(rotation));
    println!("  intervals: {}", pattern);
    let spelled: Vec<&str> = pattern.iter().map(PitchClass::interval_name).collect();
    println!("  spelled:   {}", spelled.join(" "));
    let rels = pattern.to_vec();
    let chords: Vec<String> =
        (0..rels.len()).map(|i| modewheel::chords::chord_symbol(&rels, i)).collect();
    println!("  chords:    {}", chords.join(" "));
    Ok(())
}

fn families_command(note_count: u8) -> Result<()> {
    let catalog = Catalog::builtin();
    let mut any = false;
    for fam in catalog.families_with_note_count(note_count) {
        any = true;
        println!(
            "{:>2}.{:<3} {:<28} {} modes",
            fam.note_count(),
            fam.family_index(),
            fam.name(),
            fam.rotation_count()
        );
    }
    if !any {
        bail!("no families with {} notes", note_count);
    }
    Ok(())
}

// ── Interactive explorer ──────────────────────────────────────────────────────

fn interactive(settings: AppSettings) -> Result<()> {
    let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
    let (engine, audio_note) = if settings.audio {
        match AudioOutput::open(Arc::clone(&synth)) {
            Ok(output) => {
                let note = format!("Audio: {} @ {:.0} Hz", output.device_name, output.sample_rate);
                (Some(output), Some(note))
            }
            Err(e) => (None, Some(format!("Audio unavailable ({:#}), running silently", e))),
        }
    } else {
        (None, None)
    };
    let mut app = App::new(Arc::clone(&synth), settings, engine.is_some())?;
    if let Some(note) = audio_note {
        app.status_msg = format!("{}  │  {}", note, app.status_msg);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    app.stop_audio();
    drop(engine);
    if let Err(e) = result { eprintln!("Error: {:?}", e); }
    Ok(())
}

fn is_quit_chord(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

// ── Address entry ─────────────────────────────────────────────────────────────

/// Keys while the address prompt is open. Returns false to quit.
fn address_key(app: &mut App, key: KeyEvent) -> bool {
    if is_quit_chord(&key) {
        app.address_cancel();
        return false;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter             => app.address_commit(),
        KeyCode::Esc               => app.address_cancel(),
        KeyCode::Backspace         => app.address_backspace(),
        KeyCode::Char(c) if !ctrl  => app.address_push(c),
        _ => {}
    }
    true
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.refresh_active_notes();
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                if app.mode == AppMode::Address {
                    if !address_key(app, key) {
                        break;
                    }
                    continue;
                }

                match key.code {
                    // Global quit
                    KeyCode::Esc => break,
                    _ if is_quit_chord(&key) => break,

                    // ── Catalog navigation ────────────────────────────────
                    KeyCode::Up    => app.note_count_step(1),
                    KeyCode::Down  => app.note_count_step(-1),
                    KeyCode::Right => app.family_step(1),
                    KeyCode::Left  => app.family_step(-1),
                    KeyCode::Enter | KeyCode::Char(':') => app.begin_address(),

                    // ── Rotation / root ───────────────────────────────────
                    KeyCode::Char('.') => app.rotate(1),
                    KeyCode::Char(',') => app.rotate(-1),
                    KeyCode::Char(']') => app.root_step(1),
                    KeyCode::Char('[') => app.root_step(-1),

                    // ── Degree cursor + playback ──────────────────────────
                    KeyCode::Tab      => app.cursor_step(1),
                    KeyCode::BackTab  => app.cursor_step(-1),
                    KeyCode::Char(' ') => app.play_mode(),
                    KeyCode::Char('t') => app.play_triad(),
                    KeyCode::Char('c') => app.play_chords(),
                    KeyCode::Char('n') => app.play_note(),
                    KeyCode::Char('s') => { app.stop_audio(); app.status_msg = "Stopped".to_string(); }
                    KeyCode::PageUp   => app.volume_up(),
                    KeyCode::PageDown => app.volume_down(),

                    // ── Interval toggles ──────────────────────────────────
                    KeyCode::Char(c) => app.toggle_interval(c),

                    _ => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_pitch_set() {
        let set = parse_pitch_set(&args(&["0", "4,7", " 11 "])).unwrap();
        assert_eq!(set.to_vec(), vec![0, 4, 7, 11]);
        assert!(parse_pitch_set(&args(&["12"])).is_err());
        assert!(parse_pitch_set(&args(&["x"])).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["modewheel", "show", "7.1.2"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Show { ref address }) if address == "7.1.2"));
        let cli = Cli::try_parse_from(["modewheel", "--settings", "x.json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.settings, Some(PathBuf::from("x.json")));
        assert!(Cli::try_parse_from(["modewheel", "detect"]).is_err());
    }

    #[test]
    fn test_ctrl_c_leaves_address_entry() {
        let synth = Arc::new(Mutex::new(Synth::new(44100.0)));
        let mut app = App::new(synth, AppSettings::default(), false).unwrap();
        app.begin_address();
        app.address_input.clear();

        assert!(address_key(&mut app, KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE)));
        assert!(address_key(&mut app, KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL)));
        assert_eq!(app.address_input, "5");

        assert!(!address_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert_eq!(app.mode, AppMode::Wheel);
        assert_eq!(app.session.address(), "7.1.1");
    }

    #[test]
    fn test_commands_run() {
        assert!(show_command("7.1.2").is_ok());
        assert!(show_command("7.1").is_err());
        assert!(families_command(2).is_ok());
        assert!(families_command(13).is_err());
        assert!(detect_command(&args(&["0", "6"])).is_ok());
    }
}
