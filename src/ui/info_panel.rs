//! Body information panel.

use bevy::prelude::*;
use bevy_feathers::theme::{ThemeBackgroundColor, ThemeFontColor, ThemedText};
use bevy_feathers::tokens;

use crate::bodies::{BodyDef, BodyRegistry};
use crate::selection::SelectedBody;

/// Root node of the panel; hidden until the first selection.
#[derive(Component)]
pub struct InfoPanel;

#[derive(Component)]
pub struct InfoPanelHeading;

#[derive(Component)]
pub struct InfoPanelBody;

/// Text shown for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub heading: String,
    pub lines: Vec<String>,
}

impl PanelContent {
    pub fn for_body(body: &BodyDef) -> Self {
        Self {
            heading: body.name.clone(),
            lines: vec![
                format!("Radius: {}", body.radius),
                format!("Orbit Completion Speed: {}", body.period_label()),
                format!("Diameter: {}", body.diameter),
            ],
        }
    }

    pub fn body_text(&self) -> String {
        self.lines.join("\n")
    }
}

pub fn spawn_info_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                right: Val::Px(12.0),
                width: Val::Px(260.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(12.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor::default(),
            ThemeBackgroundColor(tokens::WINDOW_BG),
            InfoPanel,
            Name::new("Info Panel"),
        ))
        .with_children(|panel| {
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                ThemedText,
                ThemeFontColor(tokens::TEXT_MAIN),
                InfoPanelHeading,
            ));
            panel.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                ThemedText,
                ThemeFontColor(tokens::TEXT_DIM),
                InfoPanelBody,
            ));
        });
}

/// Rewrite and reveal the panel whenever the selection changes.
pub fn update_info_panel(
    selected: Res<SelectedBody>,
    registry: Res<BodyRegistry>,
    mut panels: Query<&mut Node, With<InfoPanel>>,
    mut headings: Query<&mut Text, (With<InfoPanelHeading>, Without<InfoPanelBody>)>,
    mut bodies: Query<&mut Text, (With<InfoPanelBody>, Without<InfoPanelHeading>)>,
) {
    if !selected.is_changed() {
        return;
    }
    let Some(body) = selected.0.and_then(|id| registry.get(id)) else {
        return;
    };

    let content = PanelContent::for_body(body);
    for mut heading in headings.iter_mut() {
        heading.0 = content.heading.clone();
    }
    for mut text in bodies.iter_mut() {
        text.0 = content.body_text();
    }
    for mut node in panels.iter_mut() {
        node.display = Display::Flex;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyId;

    fn panel_app() -> App {
        let mut app = App::new();
        app.init_resource::<BodyRegistry>()
            .init_resource::<SelectedBody>()
            .add_systems(Startup, spawn_info_panel)
            .add_systems(Update, update_info_panel);
        app.update();
        app
    }

    fn panel_state(app: &mut App) -> (Display, String, String) {
        let world = app.world_mut();
        let display = world
            .query_filtered::<&Node, With<InfoPanel>>()
            .single(world)
            .unwrap()
            .display;
        let heading = world
            .query_filtered::<&Text, With<InfoPanelHeading>>()
            .single(world)
            .unwrap()
            .0
            .clone();
        let body = world
            .query_filtered::<&Text, With<InfoPanelBody>>()
            .single(world)
            .unwrap()
            .0
            .clone();
        (display, heading, body)
    }

    #[test]
    fn test_panel_colors_come_from_theme() {
        let mut app = panel_app();
        let world = app.world_mut();
        let background = world
            .query_filtered::<&ThemeBackgroundColor, With<InfoPanel>>()
            .single(world)
            .unwrap();
        assert_eq!(background.0, tokens::WINDOW_BG);
        let heading = world
            .query_filtered::<&ThemeFontColor, With<InfoPanelHeading>>()
            .single(world)
            .unwrap();
        assert_eq!(heading.0, tokens::TEXT_MAIN);
        let body = world
            .query_filtered::<&ThemeFontColor, With<InfoPanelBody>>()
            .single(world)
            .unwrap();
        assert_eq!(body.0, tokens::TEXT_DIM);
    }

    #[test]
    fn test_content_includes_name_and_diameter() {
        let registry = BodyRegistry::default();
        let (_, saturn) = registry.find("Saturn").unwrap();
        let content = PanelContent::for_body(saturn);
        assert_eq!(content.heading, "Saturn");
        assert!(content.body_text().contains("Diameter: 120,500"));
        assert!(content.body_text().contains("29.5 years"));
    }

    #[test]
    fn test_content_placeholder_for_central_star() {
        let registry = BodyRegistry::default();
        let (_, sun) = registry.find("Sun").unwrap();
        let content = PanelContent::for_body(sun);
        assert!(content.body_text().contains("Orbit Completion Speed: N/A"));
    }

    #[test]
    fn test_panel_hidden_until_selection() {
        let mut app = panel_app();
        let (display, heading, _) = panel_state(&mut app);
        assert_eq!(display, Display::None);
        assert!(heading.is_empty());
    }

    #[test]
    fn test_selection_shows_panel() {
        let mut app = panel_app();
        let (earth, _) = app.world().resource::<BodyRegistry>().find("Earth").unwrap();
        app.world_mut().resource_mut::<SelectedBody>().0 = Some(earth);
        app.update();

        let (display, heading, body) = panel_state(&mut app);
        assert_eq!(display, Display::Flex);
        assert_eq!(heading, "Earth");
        assert!(body.contains("12,800"));
    }

    #[test]
    fn test_unknown_selection_leaves_panel_unchanged() {
        let mut app = panel_app();
        let (mars, _) = app.world().resource::<BodyRegistry>().find("Mars").unwrap();
        app.world_mut().resource_mut::<SelectedBody>().0 = Some(mars);
        app.update();
        let before = panel_state(&mut app);

        app.world_mut().resource_mut::<SelectedBody>().0 = Some(BodyId(999));
        app.update();
        assert_eq!(panel_state(&mut app), before);
    }
}
