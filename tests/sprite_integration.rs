//! Sprites sharing textures through the `TextureStore` inside a bevy `World`.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};
use std::sync::Arc;

use aberredext::components::point::Point;
use aberredext::components::polygon::Polygon2d;
use aberredext::components::sprite::{Sprite, TextureOwnership};
use aberredext::resources::texturestore::{TextureData, TextureStore};

/// Marks the sprite that recolours its texture.
#[derive(Component)]
struct Tinted;

fn tint_system(mut query: Query<&mut Sprite, With<Tinted>>) {
    for mut sprite in query.iter_mut() {
        sprite.take_ownership_of_texture();
        if let Some(tex) = sprite.texture_mut() {
            for px in tex.pixels_mut() {
                *px = Color::RED;
            }
        }
    }
}

fn make_world() -> (World, Entity, Entity) {
    let mut world = World::new();
    let mut store = TextureStore::new();
    let shared = store.insert("ship", TextureData::solid(16, 8, Color::WHITE));
    world.insert_resource(store);

    let plain = world.spawn(Sprite::with_texture(Arc::clone(&shared))).id();
    let tinted = world.spawn((Sprite::with_texture(shared), Tinted)).id();
    (world, plain, tinted)
}

#[test]
fn sprites_share_store_texture_until_ownership_taken() {
    let (mut world, plain, tinted) = make_world();
    let store_tex = world.resource::<TextureStore>().get("ship").unwrap();
    assert_eq!(Arc::strong_count(&store_tex), 4);

    let mut schedule = Schedule::default();
    schedule.add_systems(tint_system);
    schedule.run(&mut world);

    let plain_sprite = world.get::<Sprite>(plain).unwrap();
    assert_eq!(plain_sprite.ownership(), TextureOwnership::Shared);
    assert!(Arc::ptr_eq(plain_sprite.texture().unwrap(), &store_tex));
    assert_eq!(plain_sprite.texture().unwrap().pixel(0, 0), Some(Color::WHITE));

    let tinted_sprite = world.get::<Sprite>(tinted).unwrap();
    assert_eq!(tinted_sprite.ownership(), TextureOwnership::Owned);
    assert!(!Arc::ptr_eq(tinted_sprite.texture().unwrap(), &store_tex));
    assert_eq!(tinted_sprite.texture().unwrap().pixel(15, 7), Some(Color::RED));
    assert_eq!(store_tex.pixel(15, 7), Some(Color::WHITE));
}

#[test]
fn reloading_store_texture_updates_centre_and_mask() {
    let (mut world, plain, _) = make_world();
    let bigger = world
        .resource_mut::<TextureStore>()
        .insert("ship", TextureData::solid(64, 30, Color::WHITE));

    let mut sprite = world.get_mut::<Sprite>(plain).unwrap();
    sprite.load_texture(bigger);

    assert_eq!(sprite.centre().pos, Vector2 { x: 32.0, y: 15.0 });
    assert_eq!(sprite.collision_mask(), vec![Polygon2d::rectangle(64.0, 30.0)]);
}

#[test]
fn points_survive_texture_changes() {
    let (mut world, plain, _) = make_world();
    let other = Arc::new(TextureData::solid(2, 2, Color::BLACK));

    let mut sprite = world.get_mut::<Sprite>(plain).unwrap();
    sprite.add_point(Point::new("exhaust", 0.0, 4.0));
    sprite.set_origin(8.0, 4.0);
    sprite.load_texture(other);

    assert!(sprite.has_point("exhaust"));
    assert_eq!(sprite.get_point("Origin").unwrap().pos, Vector2 { x: 8.0, y: 4.0 });
    assert_eq!(sprite.get_point("Centre").unwrap().pos, Vector2 { x: 1.0, y: 1.0 });
}

#[test]
fn custom_mask_query_across_entities() {
    let (mut world, plain, tinted) = make_world();
    let triangle = Polygon2d::new(vec![
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 16.0, y: 4.0 },
        Vector2 { x: 0.0, y: 8.0 },
    ]);
    {
        let mut sprite = world.get_mut::<Sprite>(tinted).unwrap();
        sprite.set_custom_collision_mask(vec![triangle.clone()]);
        sprite.set_collision_mask_automatic(false);
    }

    let mut query = world.query::<(Entity, &Sprite)>();
    for (entity, sprite) in query.iter(&world) {
        let mask = sprite.collision_mask();
        assert_eq!(mask.len(), 1);
        if entity == plain {
            assert_eq!(mask[0], Polygon2d::rectangle(16.0, 8.0));
        } else {
            assert_eq!(mask[0], triangle);
        }
    }
}
