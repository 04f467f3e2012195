//! spokes - TUI and CLI for polar chart grid generation
//!
//! Usage:
//!   spokes                       Launch TUI preview
//!   spokes render [preset]       Render one grid to SVG/JSON/PNG
//!   spokes recipe <yaml>         Render layered grid compositions
//!   spokes sheet                 Generate a preset reference sheet
//!   spokes benchmark             Time grid generation
//!   spokes presets               List built-in presets

mod cli;

use std::env;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use image::{DynamicImage, RgbaImage};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use ratatui_image::{
    picker::{Picker, ProtocolType},
    protocol::StatefulProtocol,
    StatefulImage,
};
use resvg::usvg;
use tiny_skia::Pixmap;

use spokes::{build_grid, GridSpec, GridType, Point};

use cli::{
    cmd_benchmark, cmd_recipe, cmd_render, cmd_sheet, evenly_spaced_angles, evenly_spaced_radii,
    GridStyle, Preset,
};

// Raster dimensions for the terminal preview
const IMAGE_WIDTH: u32 = 1800;
const IMAGE_HEIGHT: u32 = 1800;

// Logical document the preview grid is laid out in
const LOGICAL_SIZE: f64 = 600.0;
const PREVIEW_OUTER_RADIUS: f64 = 260.0;

/// Application state for the TUI.
struct App {
    /// Built-in presets shown in the sidebar
    presets: &'static [Preset],
    /// Current preset selection
    preset_state: ListState,
    /// Current spoke count
    spokes: usize,
    /// Current ring count
    rings: usize,
    /// Inner radius as a percentage of the outer radius
    inner_pct: f64,
    /// Circle or polygon rings
    grid_type: GridType,
    /// Whether spokes are drawn
    radial_lines: bool,
    /// Which setting is focused (0=spokes, 1=rings, 2=inner)
    setting_focus: usize,
    /// Zoom level (1.0 = fit to view)
    zoom: f64,
    /// Should exit
    should_quit: bool,
    /// Image picker for terminal protocol detection
    picker: Picker,
    /// Current rendered image protocol state
    image_state: Option<Box<dyn StatefulProtocol>>,
    /// Flag to indicate image needs re-rendering
    needs_image_update: bool,
}

impl App {
    fn new() -> Self {
        let presets = Preset::all();
        let mut preset_state = ListState::default();
        preset_state.select(Some(3)); // "radar"

        // Initialize image picker - force Sixel protocol
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let mut app = App {
            presets,
            preset_state,
            spokes: 6,
            rings: 5,
            inner_pct: 0.0,
            grid_type: GridType::Polygon,
            radial_lines: true,
            setting_focus: 0,
            zoom: 1.0,
            should_quit: false,
            picker,
            image_state: None,
            needs_image_update: true,
        };
        app.apply_selected_preset();
        app
    }

    /// The spec the preview currently describes.
    fn spec(&self) -> GridSpec {
        let center = Point::new(LOGICAL_SIZE / 2.0, LOGICAL_SIZE / 2.0);
        let inner_radius = PREVIEW_OUTER_RADIUS * self.inner_pct / 100.0;
        GridSpec {
            center,
            inner_radius,
            outer_radius: PREVIEW_OUTER_RADIUS,
            angles: evenly_spaced_angles(self.spokes),
            radii: evenly_spaced_radii(self.rings, inner_radius, PREVIEW_OUTER_RADIUS),
            grid_type: self.grid_type,
            radial_lines: self.radial_lines,
        }
    }

    fn selected_preset(&self) -> &'static Preset {
        &self.presets[self.preset_state.selected().unwrap_or(0)]
    }

    /// Load the highlighted preset into the adjustable settings.
    fn apply_selected_preset(&mut self) {
        let preset = self.selected_preset();
        self.spokes = preset.spokes;
        self.rings = preset.rings;
        self.inner_pct = preset.inner_fraction * 100.0;
        self.grid_type = preset.grid_type;
        self.radial_lines = preset.radial_lines;
        self.needs_image_update = true;
    }

    fn update_image(&mut self) {
        if self.needs_image_update {
            let img = render_to_image(self);
            self.image_state = Some(self.picker.new_resize_protocol(img));
            self.needs_image_update = false;
        }
    }

    fn next_preset(&mut self) {
        let i = match self.preset_state.selected() {
            Some(i) => (i + 1) % self.presets.len(),
            None => 0,
        };
        self.preset_state.select(Some(i));
        self.apply_selected_preset();
    }

    fn prev_preset(&mut self) {
        let i = match self.preset_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.presets.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.preset_state.select(Some(i));
        self.apply_selected_preset();
    }

    fn adjust_setting(&mut self, delta: i64) {
        match self.setting_focus {
            0 => {
                self.spokes = (self.spokes as i64 + delta).clamp(0, 90) as usize;
            }
            1 => {
                self.rings = (self.rings as i64 + delta).clamp(0, 30) as usize;
            }
            2 => {
                self.inner_pct = (self.inner_pct + delta as f64 * 5.0).clamp(0.0, 90.0);
            }
            _ => {}
        }
        self.needs_image_update = true;
    }

    fn toggle_grid_type(&mut self) {
        self.grid_type = match self.grid_type {
            GridType::Polygon => GridType::Circle,
            GridType::Circle => GridType::Polygon,
        };
        self.needs_image_update = true;
    }

    fn toggle_radial_lines(&mut self) {
        self.radial_lines = !self.radial_lines;
        self.needs_image_update = true;
    }

    fn zoom_in(&mut self) {
        self.zoom = (self.zoom * 1.25).min(10.0);
        self.needs_image_update = true;
    }

    fn zoom_out(&mut self) {
        self.zoom = (self.zoom / 1.25).max(0.5);
        self.needs_image_update = true;
    }

    fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.needs_image_update = true;
    }
}

/// Render the current grid to an image using resvg.
fn render_to_image(app: &App) -> DynamicImage {
    let result = build_grid(&app.spec());
    let style = GridStyle {
        color: "#888888".to_string(),
        stroke_width: 1.5,
        opacity: 1.0,
    };
    let svg = cli::common::grid_document(&result, LOGICAL_SIZE, LOGICAL_SIZE, &style, "white");

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(&svg, &options).expect("Failed to parse generated SVG");

    let mut pixmap = Pixmap::new(IMAGE_WIDTH, IMAGE_HEIGHT).expect("Failed to create pixmap");
    pixmap.fill(tiny_skia::Color::WHITE);

    // Scale the logical document up to the raster, keeping it centered
    // while zooming.
    let scale = IMAGE_WIDTH as f32 / LOGICAL_SIZE as f32 * app.zoom as f32;
    let offset = (IMAGE_WIDTH as f32 - LOGICAL_SIZE as f32 * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(offset, offset);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(IMAGE_WIDTH, IMAGE_HEIGHT, pixmap.take())
        .expect("Failed to create image");

    DynamicImage::ImageRgba8(rgba)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "render" => {
                cmd_render(&args[2..]);
                return;
            }
            "recipe" => {
                cmd_recipe(&args[2..]);
                return;
            }
            "sheet" => {
                cmd_sheet(&args[2..]);
                return;
            }
            "benchmark" | "bench" => {
                cmd_benchmark(&args[2..]);
                return;
            }
            "presets" => {
                cmd_presets();
                return;
            }
            "help" | "--help" | "-h" => {
                print_usage(&args[0]);
                return;
            }
            _ => {}
        }
    }

    // Launch TUI
    if let Err(e) = run_tui() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_presets() {
    println!("Available presets:");
    for preset in Preset::all() {
        println!("  {:10} {}", preset.name, preset.description);
    }
}

fn print_usage(prog: &str) {
    eprintln!("spokes - polar chart grid generation");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {}                        Launch TUI preview", prog);
    eprintln!("  {} render [preset] [options]", prog);
    eprintln!("  {} recipe <recipe.yaml> [-o out.svg]", prog);
    eprintln!("  {} sheet [-o sheet.svg] [--png sheet.png]", prog);
    eprintln!("  {} benchmark [-t circle]", prog);
    eprintln!("  {} presets", prog);
    eprintln!();
    eprintln!("Render options:");
    eprintln!("  -n, --spokes <n>       Evenly spaced spoke count");
    eprintln!("  -r, --rings <n>        Evenly spaced ring count");
    eprintln!("  --angles <a,b,c>       Explicit angles (degrees)");
    eprintln!("  --radii <r1,r2>        Explicit ring radii");
    eprintln!("  --inner/--outer <r>    Inner/outer radius");
    eprintln!("  -t, --type <kind>      polygon or circle");
    eprintln!("  --no-radial            Suppress spokes");
    eprintln!("  --json                 JSON output instead of SVG");
    eprintln!("  --png <file>           Also rasterize to PNG");
    eprintln!();
    eprintln!("TUI Controls:");
    eprintln!("  ↑/↓ or j/k    Select preset");
    eprintln!("  ←/→ or h/l    Adjust setting (fine)");
    eprintln!("  [ / ]         Adjust setting (coarse)");
    eprintln!("  Tab           Switch between spokes/rings/inner");
    eprintln!("  g             Toggle circle/polygon rings");
    eprintln!("  x             Toggle radial lines");
    eprintln!("  +/-           Zoom, 0 reset");
    eprintln!("  q / Esc       Quit");
}

fn run_tui() -> Result<(), String> {
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(EnterAlternateScreen)
        .map_err(|e| e.to_string())?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout()
        .execute(LeaveAlternateScreen)
        .map_err(|e| e.to_string())?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.update_image();

        terminal
            .draw(|frame| ui(frame, app))
            .map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.prev_preset();
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.next_preset();
                        }
                        KeyCode::Tab => {
                            app.setting_focus = (app.setting_focus + 1) % 3;
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            app.adjust_setting(-1);
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.adjust_setting(1);
                        }
                        KeyCode::Char('[') => {
                            app.adjust_setting(-5);
                        }
                        KeyCode::Char(']') => {
                            app.adjust_setting(5);
                        }
                        KeyCode::Char('g') => {
                            app.toggle_grid_type();
                        }
                        KeyCode::Char('x') => {
                            app.toggle_radial_lines();
                        }
                        KeyCode::Char('+') | KeyCode::Char('=') => {
                            app.zoom_in();
                        }
                        KeyCode::Char('-') | KeyCode::Char('_') => {
                            app.zoom_out();
                        }
                        KeyCode::Char('0') | KeyCode::Char('r') => {
                            app.reset_view();
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(40)])
        .split(main_layout[0]);

    // Split left sidebar into preset list and stats
    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(9)])
        .split(top_layout[0]);

    // Preset list
    let items: Vec<ListItem> = app.presets.iter().map(|p| ListItem::new(p.name)).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Presets ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.preset_state);

    // Stats panel
    let shape_count = build_grid(&app.spec()).shape_count();
    let stats_text = format!(
        "Spokes: {}\nRings: {}\nShapes: {}\nType: {}\nRadial: {}\nZoom: {:.0}%",
        app.spokes,
        app.rings,
        shape_count,
        app.grid_type.name(),
        if app.radial_lines { "on" } else { "off" },
        app.zoom * 100.0
    );
    let stats = Paragraph::new(stats_text)
        .block(
            Block::default()
                .title(" Grid ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(stats, sidebar_layout[1]);

    // Preview image
    let image_block = Block::default()
        .title(format!(" {} ", app.selected_preset().name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Settings panel
    let settings_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(main_layout[1]);

    let focus_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let spokes_text = Paragraph::new(format!("{}", app.spokes))
        .style(focus_style(app.setting_focus == 0))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Spokes ")
                .borders(Borders::ALL)
                .border_style(focus_style(app.setting_focus == 0)),
        );
    frame.render_widget(spokes_text, settings_layout[0]);

    let rings_text = Paragraph::new(format!("{}", app.rings))
        .style(focus_style(app.setting_focus == 1))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Rings ")
                .borders(Borders::ALL)
                .border_style(focus_style(app.setting_focus == 1)),
        );
    frame.render_widget(rings_text, settings_layout[1]);

    let inner_text = Paragraph::new(format!("{:.0}%", app.inner_pct))
        .style(focus_style(app.setting_focus == 2))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Inner ")
                .borders(Borders::ALL)
                .border_style(focus_style(app.setting_focus == 2)),
        );
    frame.render_widget(inner_text, settings_layout[2]);

    let help = Paragraph::new("↑↓ preset  ←→ adjust  Tab switch\ng type  x radial  +/- zoom\n0 reset  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, settings_layout[3]);
}
