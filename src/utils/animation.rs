//! Spin animation of the front layer.
//!
//! The timer system is the only writer of [`AnimationAngle`]; the placement
//! system only runs when the angle changed and always reads its latest value,
//! so a frame that completed several ticks still renders once.

use bevy::prelude::*;

use crate::utils::geometry::placement;
use crate::utils::objects::{AnimationAngle, Cubie, FrontLayer, SpinTimer};

/// Advances the angle once per timer completion during this frame.
pub fn advance_animation_angle(
    time: Res<Time>,
    mut timer: ResMut<SpinTimer>,
    mut angle: ResMut<AnimationAngle>,
) {
    timer.0.tick(time.delta());

    for _ in 0..timer.0.times_finished_this_tick() {
        angle.advance();
    }
}

/// Moves the front-layer cubies to the current angle.
pub fn place_front_layer(
    angle: Res<AnimationAngle>,
    mut front_layer: Query<(&Cubie, &mut Transform), With<FrontLayer>>,
) {
    for (cubie, mut transform) in &mut front_layer {
        let placed = placement(cubie.position, Some(angle.0));
        transform.translation = placed.translation;
        transform.rotation = placed.rotation;
    }
}

/// Space pauses and resumes the spin.
pub fn toggle_spin_pause(keyboard: Res<ButtonInput<KeyCode>>, mut timer: ResMut<SpinTimer>) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }

    if timer.0.is_paused() {
        timer.0.unpause();
        info!("Spin resumed");
    } else {
        timer.0.pause();
        info!("Spin paused");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn spin_world(start: u32) -> World {
        let mut world = World::new();
        world.insert_resource(Time::<()>::default());
        world.insert_resource(SpinTimer::new(Duration::from_millis(17)));
        world.insert_resource(AnimationAngle(start));
        world
    }

    fn step(world: &mut World, delta: Duration) {
        world.resource_mut::<Time>().advance_by(delta);
        world.run_system_once(advance_animation_angle).unwrap();
    }

    #[test]
    fn test_advance_wraps_at_full_turn() {
        let mut angle = AnimationAngle(358);
        angle.advance();
        assert_eq!(angle, AnimationAngle(359));
        angle.advance();
        assert_eq!(angle, AnimationAngle(0));
        angle.advance();
        assert_eq!(angle, AnimationAngle(1));
    }

    #[test]
    fn test_each_tick_is_one_degree() {
        let mut angle = AnimationAngle(0);
        for expected in 1..360 {
            angle.advance();
            assert_eq!(angle.0, expected);
        }
        angle.advance();
        assert_eq!(angle.0, 0);
    }

    #[test]
    fn test_timer_advances_once_per_period() {
        let mut world = spin_world(10);

        step(&mut world, Duration::from_millis(10));
        assert_eq!(*world.resource::<AnimationAngle>(), AnimationAngle(10));

        step(&mut world, Duration::from_millis(7));
        assert_eq!(*world.resource::<AnimationAngle>(), AnimationAngle(11));
    }

    #[test]
    fn test_long_frame_counts_every_tick() {
        let mut world = spin_world(359);

        step(&mut world, Duration::from_millis(34));
        assert_eq!(*world.resource::<AnimationAngle>(), AnimationAngle(1));
    }

    #[test]
    fn test_paused_timer_does_not_advance() {
        let mut world = spin_world(5);
        world.resource_mut::<SpinTimer>().0.pause();

        step(&mut world, Duration::from_millis(100));
        assert_eq!(*world.resource::<AnimationAngle>(), AnimationAngle(5));
    }

    #[test]
    fn test_place_front_layer_moves_only_front_cubies() {
        let mut world = World::new();
        world.insert_resource(AnimationAngle(90));

        let front = world
            .spawn((
                Cubie {
                    position: IVec3::new(1, 0, 1),
                },
                FrontLayer,
                Transform::from_xyz(1.0, 0.0, 1.0),
            ))
            .id();
        let back = world
            .spawn((
                Cubie {
                    position: IVec3::new(1, 0, -1),
                },
                Transform::from_xyz(1.0, 0.0, -1.0),
            ))
            .id();

        world.run_system_once(place_front_layer).unwrap();

        let front_transform = world.get::<Transform>(front).unwrap();
        assert!(
            front_transform
                .translation
                .abs_diff_eq(Vec3::new(0.0, 1.0, 1.0), 1e-5)
        );
        assert!(
            front_transform
                .rotation
                .abs_diff_eq(Quat::from_rotation_z(90f32.to_radians()), 1e-5)
        );

        let back_transform = world.get::<Transform>(back).unwrap();
        assert_eq!(back_transform.translation, Vec3::new(1.0, 0.0, -1.0));
        assert_eq!(back_transform.rotation, Quat::IDENTITY);
    }
}
