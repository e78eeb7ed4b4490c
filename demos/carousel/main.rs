//! Drives the page indicator the way a host carousel would: one
//! `set_progress` update per frame while the user "drags" across ten
//! pages, then snaps back page by page.

use page_indicator::prelude::*;
use std::io::Write;
use std::thread;
use std::time::Duration;

const PAGES: usize = 10;
const FRAMES_PER_PAGE: u32 = 12;
const FRAME: Duration = Duration::from_millis(40);

fn draw(indicator: &PageIndicator) {
    print!(
        "\r\x1b[2K  {}   page {:>4.1} / {}",
        indicator.view(),
        indicator.current_page(),
        indicator.num_pages()
    );
    let _ = std::io::stdout().flush();
}

fn main() {
    let mut indicator = PageIndicator::new();
    indicator.set_bounds(80.0, 1.0);
    indicator.apply(State::new(PAGES, 0.0));

    print!("\x1b[?25l");

    // Forward drag: fractional progress per frame, like a scroll surface
    // reporting its offset.
    let total_frames = (PAGES as u32 - 1) * FRAMES_PER_PAGE;
    for frame in 0..=total_frames {
        indicator.set_progress(frame as f64 / FRAMES_PER_PAGE as f64);
        draw(&indicator);
        thread::sleep(FRAME);
    }

    // Snap back page by page, the keymap-driven path.
    while indicator.current_page() > 0.0 {
        thread::sleep(FRAME * 6);
        indicator.prev_page();
        draw(&indicator);
    }

    println!("\x1b[?25h");
}
