use bevy::prelude::*;

use crate::camera::{HeadBob, PlayerCamera};
use crate::player::{KinematicBody, MoveConfig, Orientation, Player};

use super::collider::Platform;
use super::level::Level;
use super::FLOOR_Y;

/// Visual extent of the ground plane.
const FLOOR_SIZE: f32 = 60.0;

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let level = Level::builtin();
    info!("Level loaded: {} platforms", level.platforms.len());
    if level.platforms.is_empty() {
        warn!("Level has no platforms; only the ground plane will collide");
    }

    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.35, 0.3),
        ..default()
    });
    let platform_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.8, 0.75, 0.7),
        ..default()
    });

    // Ground plane
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, FLOOR_Y, 0.0),
    ));

    // Platforms: the render mesh and the collider come from the same box,
    // so visuals and physics cannot drift apart.
    for def in &level.platforms {
        let bounds = def.bounds();
        let size = bounds.size();
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(platform_material.clone()),
            Transform::from_translation(bounds.center()),
            Platform { bounds },
        ));
    }

    // Point light above the scene
    commands.spawn((
        PointLight {
            shadows_enabled: false,
            intensity: 2_000_000.0,
            range: 40.0,
            ..default()
        },
        Transform::from_xyz(0.0, 8.0, 0.0),
    ));

    // Simulation entity; no mesh in first person.
    let spawn = level.spawn_point();
    commands.spawn((
        Player,
        Orientation::default(),
        MoveConfig::default(),
        KinematicBody::spawn_at(spawn),
    ));

    // View entity, synced from the body every frame.
    commands.spawn((
        PlayerCamera,
        HeadBob::default(),
        Camera3d::default(),
        Transform::from_translation(spawn).looking_to(Vec3::NEG_Z, Vec3::Y),
    ));
}
