//! Gizmo-based render consumer.
//!
//! This is the boundary layer the core exposes itself to: it reads each
//! body's position, radius, colors, trail and outline, and the advisory
//! [`CollisionState`], and never mutates physics state.
//!
//! The trail and outline helpers publish points in render space (origin
//! top-left, y down, per the `render_y = height - y` contract); this module
//! maps them back into the y-up world the 2D camera looks at.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::CollisionState;
use crate::environment::Environment;
use crate::types::Viewport;

/// Marker for the collision banner text entity.
#[derive(Component)]
struct CollisionBanner;

/// Plugin drawing bodies, trails and the collision banner.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (draw_bodies, show_collision_banner));
    }
}

/// Place the 2D camera so world coordinates equal simulation pixels.
fn setup_camera(mut commands: Commands, viewport: Res<Viewport>) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(
            (viewport.width / 2.0) as f32,
            (viewport.height / 2.0) as f32,
            0.0,
        ),
    ));
}

/// Map a render-space point back to the y-up world frame.
fn world_point(p: DVec2, height: f64) -> Vec2 {
    Vec2::new(p.x as f32, (height - p.y) as f32)
}

fn draw_bodies(environment: Res<Environment>, viewport: Res<Viewport>, mut gizmos: Gizmos) {
    let height = viewport.height;

    for body in &environment.bodies {
        // Trail first so bodies draw on top of it
        if body.trail().len() > 1 {
            gizmos.linestrip_2d(
                body.trail().iter().map(|&p| world_point(p, height)),
                body.line_color,
            );
        }

        let center = Vec2::new(body.pos.x as f32, body.pos.y as f32);
        if body.radius < 2.0 {
            // Too small for an outline; draw a dot
            gizmos.circle_2d(center, 1.0, body.color);
            continue;
        }

        gizmos.circle_2d(center, body.radius as f32, body.color);
        // Two offset rings thicken the anti-aliased outline
        for ring in [0u32, 1] {
            let outline = body.outline(height, ring);
            gizmos.linestrip_2d(
                outline
                    .iter()
                    .chain(outline.first())
                    .map(|&p| world_point(p, height)),
                body.color,
            );
        }
    }
}

/// Display the terminal message once a collision has been observed.
///
/// The banner is advisory; the simulation keeps stepping behind it.
fn show_collision_banner(
    mut commands: Commands,
    collision_state: Res<CollisionState>,
    viewport: Res<Viewport>,
    banner: Query<(), With<CollisionBanner>>,
) {
    if collision_state.first_impact.is_none() || !banner.is_empty() {
        return;
    }

    commands.spawn((
        CollisionBanner,
        Text2d::new("YOU KILLED EVERYONE"),
        TextFont {
            font_size: 60.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.0, 0.0)),
        Transform::from_xyz(
            (viewport.width / 2.0) as f32,
            (viewport.height / 2.0) as f32,
            1.0,
        ),
    ));
}
