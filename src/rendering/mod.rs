use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::CellCoord;

const STATUS_COLOR: Color = Color::new(0.7, 0.7, 0.7, 1.0);
const PAUSED_COLOR: Color = Color::new(1.0, 0.65, 0.0, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw live cells as squares, leaving a one pixel gap as grid lines
pub fn draw_cells(cells: &[CellCoord], pixel_size: f32) {
    for &(x, y) in cells {
        draw_rectangle(
            x as f32 * pixel_size + 1.0,
            y as f32 * pixel_size + 1.0,
            pixel_size - 1.0,
            pixel_size - 1.0,
            DARKGREEN,
        );
    }
}

/// One line of status text in the top-left corner
pub fn draw_status(session: &Session) {
    let automaton = &session.automaton;
    let rules = automaton.rules();
    let status = format!(
        "gen {} | {} {} | {} | {} | {} live | {:.1} ms",
        automaton.generation(),
        rules,
        rules.topology(),
        automaton.algorithm(),
        session.frame_rate,
        format_number(session.live_cells.len()),
        session.last_step_time_ms,
    );
    draw_text(&status, 6.0, 16.0, 18.0, STATUS_COLOR);

    if !session.is_running {
        let dims = measure_text(&status, None, 18, 1.0);
        draw_text("PAUSED", dims.width + 18.0, 16.0, 18.0, PAUSED_COLOR);
    }
}

/// Draw a whole frame from the session's live-cell list
pub fn draw_frame(session: &Session) {
    clear_background(BLACK);
    draw_cells(&session.live_cells, session.pixel_size);
    draw_status(session);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_460), "2.5K");
        assert_eq!(format_number(3_000_000), "3.0M");
    }
}
