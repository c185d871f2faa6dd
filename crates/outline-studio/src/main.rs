use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use outline_engine::logging::{init_logging, LoggingConfig};
use outline_engine::path::{GeometryConfig, OutlineGeometry};
use outline_engine::scene::{DrawCmd, DrawList};
use outline_engine::text::{FontId, TextMeasure};
use outline_engine::time::FrameClock;
use outline_ui::prelude::*;

const VIEWPORT: Vec2 = Vec2::new(320.0, 56.0);
const FRAME: Duration = Duration::from_millis(16);

/// One scripted frame of user input.
enum Step {
    Idle(u32),
    Click(Vec2),
    Type(&'static str),
    Press(Key),
}

fn main() -> Result<()> {
    // `--verbose` surfaces the field's transition and gap logs.
    let logging = if std::env::args().skip(1).any(|a| a == "--verbose") {
        LoggingConfig::with_filter("info,outline_ui=debug,outline_engine=debug")
    } else {
        LoggingConfig::default()
    };
    init_logging(logging);

    let mut scene = UiScene::new();
    let font_data = load_font()?;
    let font = scene.load_font(&font_data).context("failed to parse system font")?;

    report_radius_sweep(&scene.font_system, font, "Email address");

    let submitted = Rc::new(RefCell::new(None));
    let sink = submitted.clone();
    let mut root: Element = OutlinedTextField::new()
        .font(font)
        .placeholder("Email address")
        .on_change(|v| log::debug!("text changed: {v:?}"))
        .on_focus(|| log::info!("field focused"))
        .on_blur(|| log::info!("field blurred"))
        .on_submit(move |v| *sink.borrow_mut() = Some(v))
        .into();

    let script = [
        Step::Idle(3),
        Step::Click(Vec2::new(60.0, 22.0)),
        Step::Idle(15),
        Step::Type("ada@example.com"),
        Step::Press(Key::Enter),
        Step::Click(Vec2::new(600.0, 200.0)),
        Step::Idle(15),
        Step::Click(Vec2::new(60.0, 22.0)),
        Step::Press(Key::Backspace),
        Step::Press(Key::Escape),
        Step::Idle(15),
        Step::Click(Vec2::new(60.0, 22.0)),
        Step::Press(Key::Tab),
        Step::Idle(15),
    ];

    let mut clock = FrameClock::new();
    for step in &script {
        let frames = match step {
            Step::Idle(n) => *n,
            _ => 1,
        };
        for _ in 0..frames {
            std::thread::sleep(FRAME);
            let input = input_for(step, clock.tick().dt);
            let draw_list = scene.frame(&mut root, VIEWPORT, &input);
            if !matches!(step, Step::Idle(_)) {
                log_frame(draw_list);
            }
        }
        if let Step::Idle(_) = step {
            log_frame(&scene.draw_list);
        }
    }

    match submitted.borrow().as_deref() {
        Some(v) => log::info!("submitted value: {v:?}"),
        None => log::warn!("nothing was submitted"),
    }
    Ok(())
}

fn input_for(step: &Step, dt: f32) -> UiInput {
    let mut input = UiInput { dt, ..Default::default() };
    match step {
        Step::Idle(_) => {}
        Step::Click(pos) => {
            input.mouse_pos = *pos;
            input.mouse_clicked = true;
        }
        Step::Type(text) => input.text_input.push((*text).to_string()),
        Step::Press(key) => input.keys_pressed.push((*key, Modifiers::default())),
    }
    input
}

/// Gap fractions of one label across a range of corner radii.
fn report_radius_sweep(fonts: &dyn TextMeasure, font: FontId, label: &str) {
    let style = OutlineStyle::default();
    let label_width = fonts.measure_text(label, font, style.outlined_placeholder_font_size).x;
    let bounds = Rect::new(0.0, 0.0, VIEWPORT.x, style.min_height);

    for radius in [0.0, 4.0, 7.0, 12.0, 22.0, 40.0] {
        let geometry = OutlineGeometry::new(GeometryConfig::new(bounds, radius, style.line_width));
        let gap = geometry.gap_for_label(label_width);
        log::info!(
            "radius {radius:>4.1}: path {:>7.2}px, gap end {:.4}, label at x {:.2}",
            geometry.total_length(),
            gap.end,
            geometry.embedded_label_x(),
        );
    }
}

fn log_frame(draw_list: &DrawList) {
    for cmd in draw_list.commands() {
        match cmd {
            DrawCmd::StrokePath(s) => {
                let start = s.points.first().copied().unwrap_or_default();
                log::info!(
                    "  border: {} points, {:.1}px drawn, starts at ({:.1}, {:.1})",
                    s.points.len(),
                    s.length(),
                    start.x,
                    start.y,
                );
            }
            DrawCmd::Text(t) => {
                log::info!("  text {:?} @ ({:.1}, {:.1}) size {}", t.text, t.origin.x, t.origin.y, t.size);
            }
            DrawCmd::Rect(r) => {
                log::debug!("  caret at x {:.1}", r.rect.origin.x);
            }
        }
    }
}

fn load_font() -> Result<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .context("no system font found (looked for DejaVu Sans and Noto Sans)")
}
