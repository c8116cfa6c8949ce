//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use product_card::catalog::ProductDisplay;
use product_card::config::PageConfig;
use product_card::ui::app::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DEMO_TOML: &str = r##"[page]
background = "#f5f5f5"
card_width = 40

[product]
image = "tap.png"
brand = "Omnires"
part_number = "2123532"
title = "Connection with a handle Omnires round"
specs = [
  { label = "Material of execution", value = "brass" },
  { label = "Manufacturer's color", value = "chrome" },
]
guarantee = "5 years"
price = 45.0
original_price = 55.0
discount = 30
in_stock = true
unit = "Item"
"##;

/// Writes `content` to `name` inside a fresh temp dir.
pub fn temp_product(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write product file");
    (temp_dir, path)
}

pub fn demo_app() -> App {
    App::new(ProductDisplay::demo(), PageConfig::default())
}

/// Draws the full page into an off-screen terminal and returns its rows.
pub fn draw_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| product_card::ui::render::draw(frame, app))
        .unwrap();
    product_card::ui::card::view::buffer_rows(terminal.backend().buffer())
}

pub fn find_row(rows: &[String], needle: &str) -> Option<usize> {
    rows.iter().position(|row| row.contains(needle))
}
