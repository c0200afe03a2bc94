use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::Topology;

/// Paint under the cursor while the left button is held, so dragging draws
pub fn handle_mouse_paint(session: &mut Session, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Left) {
        session.paint_at(mouse_pos.0, mouse_pos.1);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 11] = [
        (KeyCode::P, Session::toggle_running),
        (KeyCode::Minus, Session::slower),
        (KeyCode::Equal, Session::faster),
        (KeyCode::M, Session::unlimited),
        (KeyCode::C, Session::clear),
        (KeyCode::R, Session::reset),
        (KeyCode::F, Session::fill_rectangle),
        (KeyCode::Key1, |s| s.with_topology(Topology::Moore)),
        (KeyCode::Key2, |s| s.with_topology(Topology::Cross)),
        (KeyCode::Key3, |s| s.with_topology(Topology::Diagonal)),
        (KeyCode::N, Session::next_rule),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
