//! Custom cursor: a ring that tracks the pointer and a dot that trails it.

use std::collections::VecDeque;

use bevy::{prelude::*, window::CursorMoved};

use crate::theme::Palette;

/// How far the dot lags behind the ring, in seconds
pub const TRAIL_DELAY: f32 = 0.08;

const RING_RADIUS: f32 = 14.0;
const DOT_RADIUS: f32 = 3.0;

/// Ring and dot positions in window coordinates.
#[derive(Resource, Clone, Debug, Default)]
pub struct CursorTrail {
    ring: Option<Vec2>,
    dot: Option<Vec2>,
    pending: VecDeque<(f32, Vec2)>,
}

impl CursorTrail {
    /// Record a pointer move at time `now` (seconds).
    pub fn push(&mut self, now: f32, pos: Vec2) {
        self.ring = Some(pos);
        self.pending.push_back((now + TRAIL_DELAY, pos));
    }

    /// Move the dot through every sample whose delay has elapsed.
    pub fn advance(&mut self, now: f32) {
        while let Some(&(due, pos)) = self.pending.front() {
            if due > now {
                break;
            }
            self.dot = Some(pos);
            self.pending.pop_front();
        }
    }

    pub fn ring(&self) -> Option<Vec2> {
        self.ring
    }

    pub fn dot(&self) -> Option<Vec2> {
        self.dot
    }
}

/// The ring node.
#[derive(Component)]
pub struct CursorRing;

/// The trailing dot node.
#[derive(Component)]
pub struct CursorDot;

pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorTrail>()
            .add_systems(Startup, spawn_cursor)
            .add_systems(Update, (follow_pointer, place_cursor).chain());
    }
}

fn spawn_cursor(mut commands: Commands, palette: Res<Palette>) {
    commands.spawn((
        CursorRing,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(RING_RADIUS * 2.0),
            height: Val::Px(RING_RADIUS * 2.0),
            border: UiRect::all(Val::Px(2.0)),
            display: Display::None,
            ..default()
        },
        BorderColor(palette.accent),
        BorderRadius::MAX,
        GlobalZIndex(i32::MAX),
    ));
    commands.spawn((
        CursorDot,
        Node {
            position_type: PositionType::Absolute,
            width: Val::Px(DOT_RADIUS * 2.0),
            height: Val::Px(DOT_RADIUS * 2.0),
            display: Display::None,
            ..default()
        },
        BackgroundColor(palette.accent),
        BorderRadius::MAX,
        GlobalZIndex(i32::MAX),
    ));
}

fn follow_pointer(
    time: Res<Time>,
    mut moved: EventReader<CursorMoved>,
    mut trail: ResMut<CursorTrail>,
) {
    let now = time.elapsed_secs();
    for event in moved.read() {
        trail.push(now, event.position);
    }
    trail.advance(now);
}

fn place(node: &mut Node, center: Option<Vec2>, radius: f32) {
    match center {
        Some(center) => {
            node.display = Display::Flex;
            node.left = Val::Px(center.x - radius);
            node.top = Val::Px(center.y - radius);
        }
        None => node.display = Display::None,
    }
}

fn place_cursor(
    trail: Res<CursorTrail>,
    palette: Res<Palette>,
    mut rings: Query<(&mut Node, &mut BorderColor), (With<CursorRing>, Without<CursorDot>)>,
    mut dots: Query<(&mut Node, &mut BackgroundColor), (With<CursorDot>, Without<CursorRing>)>,
) {
    if !trail.is_changed() && !palette.is_changed() {
        return;
    }
    for (mut node, mut border) in &mut rings {
        place(&mut node, trail.ring(), RING_RADIUS);
        border.0 = palette.accent;
    }
    for (mut node, mut background) in &mut dots {
        place(&mut node, trail.dot(), DOT_RADIUS);
        background.0 = palette.accent;
    }
}
