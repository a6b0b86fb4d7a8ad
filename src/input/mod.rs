use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::rendering::window::{CELL_SIZE, grid_area_height, grid_area_width};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Middle) {
        camera.drag_to(mouse_pos);
    } else {
        camera.end_drag();
    }
}

/// Paint or erase the cell under the cursor while paused.
/// Any cell can be edited, including ones outside the advisory rectangle.
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    if state.is_running || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let cell = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    if is_mouse_button_down(MouseButton::Left) {
        state.sim.add_cell(cell.row, cell.col);
    } else if is_mouse_button_down(MouseButton::Right) {
        state.sim.remove_cell(cell.row, cell.col);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, camera: &mut Camera) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // 'H' jumps to the live cells, wherever they have wandered
    if is_key_pressed(KeyCode::H) {
        match new_state.sim.bounding_box() {
            Some((min, max)) => {
                camera.center_on(min.midpoint(max), grid_area_width(), grid_area_height(), CELL_SIZE);
            }
            None => camera.reset(),
        }
    }

    new_state
}
