//! `aberredext` viewer entry point.
//!
//! Opens a raylib window showing one sprite with its collision mask and named
//! points, and lists the live axis readings of one joystick.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --texture assets/textures/player.png --point hand:12:30
//! ```

use aberredext::components::point::Point;
use aberredext::components::sprite::Sprite;
use aberredext::events::joystick::JoystickButtonEvent;
use aberredext::resources::gameconfig::GameConfig;
use aberredext::resources::joystick::{JoystickAxis, JoystickState};
use aberredext::resources::joystickbindings::JoystickAxisBindings;
use aberredext::resources::texturestore::TextureStore;
use aberredext::resources::viewertexture::ViewerTexture;
use aberredext::resources::worldsignals::WorldSignals;
use aberredext::systems::joystick::{joystick_axis_binding_system, update_joystick_state};
use aberredext::systems::render::render_system;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

const TEXTURE_KEY: &str = "viewer";

/// Sprite and joystick viewer for the Aberred Engine
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Texture to show; overrides `[viewer] texture`.
    #[arg(long, value_name = "PATH")]
    texture: Option<PathBuf>,

    /// Joystick to bind; overrides `[viewer] joystick`.
    #[arg(long)]
    joystick: Option<u32>,

    /// Extra named point, as `name:x:y`. Can be repeated.
    #[arg(long = "point", value_name = "NAME:X:Y")]
    points: Vec<Point>,

    /// Use a fixed centre instead of the texture's middle, as `x:y`.
    #[arg(long, value_name = "X:Y")]
    centre: Option<String>,

    /// Write the effective configuration back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}, using defaults", e);
    }
    if let Some(texture) = cli.texture {
        config.texture = Some(texture);
    }
    if let Some(joystick) = cli.joystick {
        config.joystick = joystick;
    }
    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
        }
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Aberred Engine - sprite viewer")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- Sprite ---------------
    let mut textures = TextureStore::new();
    let mut sprite = Sprite::new();
    let mut viewer_texture = ViewerTexture::default();
    if let Some(path) = &config.texture {
        match textures.load(TEXTURE_KEY, path) {
            Ok(data) => sprite.load_texture(data),
            Err(e) => error!("{}", e),
        }
        match path.to_str() {
            Some(path_str) => match rl.load_texture(&thread, path_str) {
                Ok(tex) => viewer_texture.0 = Some(tex),
                Err(e) => error!("Failed to upload texture {}: {}", path_str, e),
            },
            None => error!("Texture path is not valid UTF-8: {:?}", path),
        }
    }
    if let Some(centre) = &cli.centre {
        match format!("Centre:{}", centre).parse::<Point>() {
            Ok(p) => {
                sprite.set_centre_automatic(false);
                if let Some(c) = sprite.get_point_mut("Centre") {
                    c.pos = p.pos;
                }
            }
            Err(e) => error!("{}", e),
        }
    }
    for point in cli.points {
        sprite.add_point(point);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldSignals::default());
    world.insert_resource(JoystickState::new());
    let mut bindings = JoystickAxisBindings::new();
    for axis in JoystickAxis::ALL {
        bindings.bind(
            config.joystick,
            axis.name(),
            format!("joystick{}.{}", config.joystick, axis.name()),
        );
    }
    world.insert_resource(bindings);
    world.insert_resource(textures);
    world.insert_resource(config);
    world.spawn(sprite);

    world.insert_non_send_resource(viewer_texture);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(|trigger: On<JoystickButtonEvent>| {
        let event = trigger.event();
        info!(
            "Joystick {} button {} {}",
            event.joystick,
            event.button,
            if event.pressed { "down" } else { "up" }
        );
    });
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_joystick_state);
    update.add_systems(joystick_axis_binding_system.after(update_joystick_state));
    update.add_systems(render_system.after(joystick_axis_binding_system));

    info!("Viewer running");
    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);
        world.clear_trackers();
    }
}
