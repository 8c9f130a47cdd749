//! Viewer render system.
//!
//! Draws every [`Sprite`] centred in the window, with its collision mask in
//! red (darker while the mouse is over it), its origin in blue, its centre in
//! green and user points in orange.
//! Bound joystick variables are listed in the top-left corner.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::point::Point;
use crate::components::sprite::Sprite;
use crate::resources::joystickbindings::JoystickAxisBindings;
use crate::resources::viewertexture::ViewerTexture;
use crate::resources::worldsignals::WorldSignals;

const POINT_RADIUS: f32 = 3.0;
const FONT_SIZE: i32 = 10;

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    viewer_texture: NonSend<ViewerTexture>,
    sprites: Query<&Sprite>,
    signals: Res<WorldSignals>,
    bindings: Res<JoystickAxisBindings>,
) {
    let screen = Vector2 {
        x: rl.get_screen_width() as f32,
        y: rl.get_screen_height() as f32,
    };
    let mouse = rl.get_mouse_position();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);

    for sprite in sprites.iter() {
        let centre = sprite.centre().pos;
        let offset = Vector2 {
            x: screen.x / 2.0 - centre.x,
            y: screen.y / 2.0 - centre.y,
        };

        if let Some(tex) = viewer_texture.0.as_ref() {
            d.draw_texture_v(tex, offset, Color::WHITE);
        }

        // Origin pivot placed so the texture's top-left sits on `offset`.
        let position = sprite.origin().pos + offset;
        let mask_color = if sprite.mask_contains(position, 0.0, mouse) {
            Color::MAROON
        } else {
            Color::RED
        };
        for polygon in sprite.collision_mask_at(position, 0.0) {
            let n = polygon.len();
            for i in 0..n {
                d.draw_line_v(polygon.vertices[i], polygon.vertices[(i + 1) % n], mask_color);
            }
            if n > 0 {
                d.draw_circle_v(polygon.centroid(), POINT_RADIUS / 2.0, mask_color);
            }
        }

        draw_point(&mut d, sprite.origin(), offset, Color::BLUE);
        draw_point(&mut d, sprite.centre(), offset, Color::GREEN);
        for point in sprite.points() {
            draw_point(&mut d, point, offset, Color::ORANGE);
        }
    }

    for (i, binding) in bindings.bindings.iter().enumerate() {
        let value = signals.get_scalar(&binding.variable).unwrap_or(0.0);
        let text = format!("{}: {:.1}", binding.variable, value);
        d.draw_text(&text, 10, 10 + i as i32 * (FONT_SIZE + 4), FONT_SIZE, Color::BLACK);
    }
}

fn draw_point(d: &mut RaylibDrawHandle, point: &Point, offset: Vector2, color: Color) {
    let pos = point.pos + offset;
    d.draw_circle_v(pos, POINT_RADIUS, color);
    d.draw_text(
        &point.name,
        (pos.x + POINT_RADIUS * 2.0) as i32,
        pos.y as i32,
        FONT_SIZE,
        color,
    );
}
