use anyhow::Context;
use snapsheet_foundation::{PointerEvent, PointerEventKind};
use snapsheet_ui::{BottomSheet, FrameClock, Point, ScrollState, SheetConfig, SheetSurface};
use std::time::Duration;

const DEFAULT_SCREEN_HEIGHT: f32 = 800.0;
const FRAME: Duration = Duration::from_millis(16);
const LIST_CONTENT_HEIGHT: f32 = 2400.0;

/// Prints a text gauge of the sheet offset instead of drawing.
struct ConsoleSurface {
    screen_height: f32,
    title: String,
}

impl SheetSurface for ConsoleSurface {
    type Content = String;

    fn set_content(&mut self, content: String) {
        self.title = content;
    }

    fn set_offset(&mut self, offset: f32) {
        let visible = if self.screen_height > 0.0 {
            1.0 - offset / self.screen_height
        } else {
            0.0
        };
        let filled = (visible.clamp(0.0, 1.0) * 40.0).round() as usize;
        log::debug!(
            "[{:<40}] {} offset={offset:.1}",
            "#".repeat(filled),
            self.title
        );
    }

    fn animate_to(&mut self, target: f32) {
        log::info!("{}: snapping to {target:.1}", self.title);
    }
}

struct Session {
    sheet: BottomSheet<ConsoleSurface>,
    clock: FrameClock,
}

impl Session {
    fn pointer(&mut self, kind: PointerEventKind, y: f32) {
        let event = PointerEvent::new(kind, Point::new(200.0, y), self.clock.now_nanos());
        self.sheet.on_pointer_event(&event);
    }

    fn drag(&mut self, label: &str, from_y: f32, to_y: f32, steps: u32) {
        println!("-> {label}");
        self.pointer(PointerEventKind::Down, from_y);
        for i in 1..=steps {
            std::thread::sleep(FRAME);
            let t = i as f32 / steps as f32;
            self.pointer(PointerEventKind::Move, from_y + (to_y - from_y) * t);
        }
        self.pointer(PointerEventKind::Up, to_y);
        self.settle();
        let position = self.sheet.position();
        println!(
            "   {:?} at {:.1} (list scrolled {:.1})",
            position.snap_state,
            position.current_offset,
            self.sheet.scroll_state().value()
        );
    }

    fn settle(&mut self) {
        while self.sheet.advance_frame(self.clock.now_nanos()) {
            std::thread::sleep(FRAME);
        }
    }
}

fn screen_height_from_args() -> anyhow::Result<f32> {
    match std::env::args().nth(1) {
        Some(arg) => {
            let height: f32 = arg
                .parse()
                .with_context(|| format!("screen height must be a number, got {arg:?}"))?;
            anyhow::ensure!(height > 0.0, "screen height must be positive, got {height}");
            Ok(height)
        }
        None => Ok(DEFAULT_SCREEN_HEIGHT),
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let screen_height = screen_height_from_args()?;

    println!("=== snapsheet demo ===");
    println!("screen height {screen_height}, run with RUST_LOG=debug for offsets");

    let scroll = ScrollState::new(0.0);
    scroll.set_max_value(LIST_CONTENT_HEIGHT - screen_height);

    let surface = ConsoleSurface {
        screen_height,
        title: String::new(),
    };
    let mut session = Session {
        sheet: BottomSheet::new(surface, scroll, SheetConfig::default()),
        clock: FrameClock::new(),
    };
    session.sheet.set_content("Nearby places".to_string());
    session.sheet.on_layout(screen_height);

    let h = screen_height;
    session.drag("pull the sheet open", h * 0.6, h * 0.1, 12);
    session.drag("scroll the list", h * 0.8, h * 0.3, 10);
    session.drag("pull down: list scrolls back first", h * 0.3, h * 0.8, 10);
    session.drag("pull down again: sheet follows", h * 0.2, h * 0.65, 10);
    session.drag("push it away", h * 0.55, h * 0.99, 10);

    Ok(())
}
