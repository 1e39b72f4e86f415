//! Screen-space body labels.
//!
//! Each label is a UI node that follows the projected position of a
//! [`LabelAnchor`] child of its body, so it moves with the body without any
//! per-body bookkeeping.

use bevy::prelude::*;

use crate::bodies::{BodyLabel, LabelAnchor};
use crate::viewport::MainCamera;

const LABEL_PADDING_PX: f32 = 5.0;

pub fn spawn_label(
    commands: &mut Commands,
    anchor: Entity,
    text: &str,
    font_size: f32,
    overlay: Option<Entity>,
) -> Entity {
    let mut label = commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::all(Val::Px(LABEL_PADDING_PX)),
            ..default()
        },
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        // Shown once the first projection succeeds.
        Visibility::Hidden,
        BodyLabel { anchor },
        Name::new(format!("{text} label")),
    ));
    if let Some(overlay) = overlay {
        label.insert(ChildOf(overlay));
    }
    label.id()
}

/// Top-left corner placing a node of `size` centered on `screen`.
pub fn centered_corner(screen: Vec2, size: Vec2) -> Vec2 {
    screen - size * 0.5
}

/// Project every label anchor into the viewport and move its label there.
pub fn update_label_positions(
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    anchors: Query<&GlobalTransform, With<LabelAnchor>>,
    mut labels: Query<(&BodyLabel, &mut Node, &mut Visibility, &ComputedNode)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, mut node, mut visibility, computed) in labels.iter_mut() {
        let Ok(anchor) = anchors.get(label.anchor) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        match camera.world_to_viewport(camera_transform, anchor.translation()) {
            Ok(screen) => {
                let size = computed.size() * computed.inverse_scale_factor();
                let corner = centered_corner(screen, size);
                node.left = Val::Px(corner.x);
                node.top = Val::Px(corner.y);
                visibility.set_if_neq(Visibility::Inherited);
            }
            // Behind the camera or outside the depth range.
            Err(_) => {
                visibility.set_if_neq(Visibility::Hidden);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_corner() {
        let corner = centered_corner(Vec2::new(400.0, 300.0), Vec2::new(60.0, 20.0));
        assert_eq!(corner, Vec2::new(370.0, 290.0));
    }

    #[test]
    fn test_spawned_label_is_hidden_until_projected() {
        let mut app = App::new();
        let anchor = app.world_mut().spawn(LabelAnchor).id();
        let overlay = app.world_mut().spawn(Node::default()).id();

        let label = spawn_label(
            &mut app.world_mut().commands(),
            anchor,
            "Earth",
            14.0,
            Some(overlay),
        );
        app.world_mut().flush();

        let world = app.world();
        assert_eq!(world.get::<BodyLabel>(label).unwrap().anchor, anchor);
        assert_eq!(world.get::<Visibility>(label), Some(&Visibility::Hidden));
        assert_eq!(world.get::<ChildOf>(label).unwrap().parent(), overlay);
        assert_eq!(world.get::<Text>(label).unwrap().0, "Earth");
    }
}
