use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use log::info;
use pagedots::canvas::CellCanvas;
use pagedots::{
    Attributes, CallbackPager, CallbackPagerAdapter, Canvas, Color, ConfigError, Constraints,
    IndicatorController, IndicatorOptions, IndicatorStyle, PanEvent, SimPager, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const PAGER_WIDTH: u32 = 40;
const INITIAL_PAGES: usize = 8;
const LABEL_X: i32 = 2;
const INDICATOR_X: i32 = 18;
const FIRST_ROW: i32 = 4;
const ROW_HEIGHT: i32 = 4;

const TEXT: Color = Color::rgb(200, 200, 200);
const MUTED: Color = Color::rgb(110, 110, 110);

struct Row {
    style: IndicatorStyle,
    indicator: IndicatorController,
}

/// Pointer state while the left button is down over an indicator.
struct Press {
    row: usize,
    last: (u16, u16),
    moved: bool,
}

fn main() -> io::Result<()> {
    let log_file = File::create("pagedots-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let pager = Rc::new(SimPager::new(PAGER_WIDTH, INITIAL_PAGES));
    let rows = build_rows(&pager).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    pager.set_current_item(0);

    let mut term = Terminal::new()?;
    let mut press: Option<Press> = None;

    loop {
        render(&mut term, &pager, &rows)?;

        for event in term.poll(Duration::from_millis(100))? {
            match event {
                CrosstermEvent::Key(key) => {
                    if !handle_key(key, &pager, &rows) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                CrosstermEvent::Mouse(mouse) => handle_mouse(mouse, &rows, &mut press),
                _ => {}
            }
        }
    }
}

fn build_rows(pager: &Rc<SimPager>) -> Result<Vec<Row>, ConfigError> {
    // Terminal cells stand in for pixels, so dimensions are small.
    let base = Attributes::new()
        .set("dot_min_size", "1")
        .set("dot_max_size", "2.5")
        .set("dot_spacing", "1")
        .set("resizing_span", "2")
        .set("dot_size", "3")
        .set("dot_padding", "0.5")
        .set("pie_size", "3")
        .set("dot_active_color", "#FFFF4081")
        .set("dot_inactive_color", "#FF5C6BC0");

    let per_style = [
        (IndicatorStyle::Resizing, base.clone().set("interpolator", "decelerate")),
        (IndicatorStyle::ColorOnly, base.clone()),
        (IndicatorStyle::Pie, base.clone().set("pie_color", "#FF26A69A")),
        (IndicatorStyle::Percent, base.clone()),
        (
            IndicatorStyle::IgnoreRange,
            base.clone()
                .set("ignore_first", "1")
                .set("ignore_last", "1")
                .set("ignore_hides", "true")
                .set("interpolator", "3"),
        ),
    ];

    per_style
        .into_iter()
        .map(|(style, attrs)| {
            let options = IndicatorOptions::from_attributes(&attrs)?;
            let indicator = IndicatorController::new(style, options);
            indicator.bind(Rc::new(CallbackPagerAdapter::new(pager)));
            Ok(Row { style, indicator })
        })
        .collect()
}

fn render(term: &mut Terminal, pager: &SimPager, rows: &[Row]) -> io::Result<()> {
    let (width, height) = term.size();
    let constraints = Constraints::at_most(
        u32::from(width).saturating_sub(INDICATOR_X as u32),
        ROW_HEIGHT as u32,
    );

    let buffer = term.frame()?;
    let mut canvas = CellCanvas::new(buffer);

    canvas.draw_text(
        LABEL_X as f32,
        1.0,
        &format!(
            "page {}/{}  scroll {:.2}",
            pager.current_item() + 1,
            pager.page_count(),
            pager.scroll_position()
        ),
        TEXT,
    );

    for (i, row) in rows.iter().enumerate() {
        let y = FIRST_ROW + i as i32 * ROW_HEIGHT;
        canvas.draw_text(LABEL_X as f32, y as f32, row.style.name(), TEXT);
        row.indicator.layout((INDICATOR_X, y), constraints);
        row.indicator.draw(&mut canvas);
    }

    let flags = rows.first().map(|row| {
        (
            row.indicator.swipe_enabled(),
            row.indicator.click_enabled(),
        )
    });
    if let Some((swipe, click)) = flags {
        canvas.draw_text(
            LABEL_X as f32,
            f32::from(height.saturating_sub(2)),
            &format!(
                "←/→ page  +/- pages  s swipe:{}  c click:{}  q quit",
                on_off(swipe),
                on_off(click)
            ),
            MUTED,
        );
    }

    term.present()
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

/// Returns false when the demo should exit.
fn handle_key(key: KeyEvent, pager: &SimPager, rows: &[Row]) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return false,
        KeyCode::Left => pager.set_current_item(pager.current_item().saturating_sub(1)),
        KeyCode::Right => pager.set_current_item(pager.current_item() + 1),
        KeyCode::Char('+') => pager.set_item_count(pager.page_count() + 1),
        KeyCode::Char('-') => pager.set_item_count(pager.page_count().saturating_sub(1)),
        KeyCode::Char('s') => {
            for row in rows {
                row.indicator.set_swipe_enabled(!row.indicator.swipe_enabled());
            }
        }
        KeyCode::Char('c') => {
            for row in rows {
                row.indicator.set_click_enabled(!row.indicator.click_enabled());
            }
        }
        _ => {}
    }
    true
}

fn handle_mouse(mouse: MouseEvent, rows: &[Row], press: &mut Option<Press>) {
    let (x, y) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(row) = row_at(rows, x, y) else {
                return;
            };
            let result = rows[row].indicator.handle_pan(PanEvent::Down {
                x: f32::from(x),
                y: f32::from(y),
            });
            info!("Pan down on {} -> {:?}", rows[row].style, result);
            *press = Some(Press {
                row,
                last: (x, y),
                moved: false,
            });
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(state) = press.as_mut() else {
                return;
            };
            let (last_x, last_y) = state.last;
            let result = rows[state.row].indicator.handle_pan(PanEvent::Move {
                distance_x: f32::from(last_x) - f32::from(x),
                distance_y: f32::from(last_y) - f32::from(y),
            });
            state.last = (x, y);
            // A press that never swiped still counts as a click.
            state.moved |= result.is_handled();
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(state) = press.take() else {
                return;
            };
            let indicator = &rows[state.row].indicator;
            indicator.handle_pan(PanEvent::Up);
            if !state.moved {
                indicator.click_at(i32::from(x), i32::from(y));
            }
        }
        _ => {}
    }
}

fn row_at(rows: &[Row], x: u16, y: u16) -> Option<usize> {
    let (x, y) = (i32::from(x), i32::from(y));
    rows.iter().position(|row| {
        row.indicator
            .slots()
            .iter()
            .any(|slot| slot.bounds().contains(x, y))
    })
}
