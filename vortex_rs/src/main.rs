//! Simple 2D game engine: headless demo scene.

use std::error::Error;

use ultraviolet::Vec2;

use vortex_core::component::{
    Box2D, Circle2D, Color, Polygon2D, Shape, Transform2D, Triangle2D, Vector2D,
};
use vortex_core::config::{Config, ENGINE_NAME, ENGINE_VERSION};
use vortex_core::ecs::Registry;
use vortex_core::frame::Frame;

mod logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "binary must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "binary must be compiled by Cargo");

const FRAME_COUNT: u32 = 4;

/// Entry point of `vortex-rs` game engine demo.
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let version = APP_VERSION_STR.parse()?;
    let config = Config::new(APP_NAME.to_string(), version, cfg!(debug_assertions));

    let _handle = logger::init(config.log_level())?;
    log::info!("logger initialized successfully");
    log::info!(
        "starting {} {} on {} {}",
        config.name(),
        config.version(),
        ENGINE_NAME,
        *ENGINE_VERSION,
    );

    let background = Color::from_hex("#4D607D")?;
    let mut registry = Registry::new();
    populate(&mut registry)?;
    log::debug!("scene contains {} entities", registry.len());

    for frame_index in 0..FRAME_COUNT {
        update(&mut registry, frame_index)?;
        draw(&Frame::collect(&registry, &background), frame_index);
    }

    log::info!("closing this application");
    Ok(())
}

fn populate(registry: &mut Registry) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let player = registry.create_entity();
    registry.add_component(player, Transform2D::new(100.0, 100.0, 32.0, 32.0));
    registry.add_component(player, Color::from_hex("a259f7")?);
    registry.add_component(player, Box2D::new(Vec2::zero(), Vec2::new(32.0, 32.0)));
    registry.add_component(player, Vector2D::new(3.0, 4.0));

    let sign = registry.create_entity();
    registry.add_component(sign, Transform2D::at(300.0, 50.0).with_rotation(15.0));
    registry.add_component(sign, Color::from_rgb(&[240, 200, 40])?);
    registry.add_component(
        sign,
        Triangle2D::new(Vec2::zero(), Vec2::new(64.0, 0.0), Vec2::new(32.0, 64.0)),
    );

    let ball = registry.create_entity();
    registry.add_component(ball, Transform2D::at(200.0, 300.0).with_scale(0.5, 0.5));
    registry.add_component(ball, Color::new(255, 255, 255));
    registry.add_component(ball, Circle2D::new(Vec2::new(32.0, 32.0), 32.0));
    registry.add_component(ball, Vector2D::new(-2.0, 1.0));

    let ground = registry.create_entity();
    registry.add_component(ground, Transform2D::new(0.0, 500.0, 800.0, 100.0));
    registry.add_component(
        ground,
        Polygon2D::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(800.0, 0.0),
            Vec2::new(800.0, 100.0),
            Vec2::new(0.0, 100.0),
        ])?,
    );
    Ok(())
}

/// Moves entities by their velocities and changes shapes of some of them.
fn update(
    registry: &mut Registry,
    frame_index: u32,
) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    for entity in registry.query::<(Transform2D, Vector2D)>() {
        let velocity = match registry.get_component::<Vector2D>(entity) {
            Some(&velocity) => velocity,
            None => continue,
        };
        if let Some(transform) = registry.get_component_mut::<Transform2D>(entity) {
            transform.x += velocity.x;
            transform.y += velocity.y;
            transform.rotation += velocity.magnitude();
        }
    }

    for entity in registry.query::<(Polygon2D,)>() {
        if let Some(polygon) = registry.get_component_mut::<Polygon2D>(entity) {
            let sag = frame_index as f32 * 5.0;
            let points = polygon
                .points()
                .iter()
                .map(|point| Vec2::new(point.x, point.y + sag * (point.x / 800.0)))
                .collect();
            polygon.set_points(points)?;
            log::debug!(
                "polygon of {} now has area {:.1}, middle point {:?}",
                entity,
                polygon.area(),
                polygon.middle_point(),
            );
        }
    }
    Ok(())
}

fn draw(frame: &Frame, frame_index: u32) {
    log::info!(
        "frame {}: clear with {:?}, {} objects",
        frame_index,
        frame.clear_color,
        frame.objects.len(),
    );
    for object in &frame.objects {
        log::debug!(
            "draw {} with color {:?} and matrix {:?}",
            object.entity,
            object.color,
            object.matrix,
        );
    }
}
