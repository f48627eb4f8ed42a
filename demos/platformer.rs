//! Headless platformer run: a player walks and jumps across a small level
//! while an aggressive chaser pursues it. No window; world state and the
//! sprite list are logged instead. Run with `RUST_LOG=info` to watch.

use sindri::prelude::*;

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);

fn main() {
    env_logger::init();

    let mut engine = Engine::new();
    // Handle values stand in for whatever the renderer's upload step returns.
    let idle = TextureHandle(1);
    let walk_a = TextureHandle(2);
    let walk_b = TextureHandle(3);
    let ground_tex = TextureHandle(4);
    engine.textures.insert("player_idle", idle);
    engine.textures.insert("player_walk_a", walk_a);
    engine.textures.insert("player_walk_b", walk_b);
    engine.textures.insert("ground", ground_tex);

    // Ground slab plus a floating ledge.
    for (center, size) in [
        (Vec2::new(0.0, 0.0), Vec2::new(4000.0, 100.0)),
        (Vec2::new(700.0, 200.0), Vec2::new(300.0, 40.0)),
    ] {
        let terrain = engine.world.spawn(Category::Terrain, Capabilities::NONE);
        engine.world.attach(terrain, Position(center));
        engine.world.attach(terrain, Hitbox { size, grounded: false });
        engine.world.attach(terrain, TextureBox(size));
        engine.world.attach(terrain, TextureRef { current: Some(ground_tex) });
    }

    let player = engine.world.spawn(
        Category::Character,
        Capabilities { animated: true, ai_controlled: false },
    );
    engine.world.attach(player, Position(Vec2::new(0.0, 200.0)));
    engine.world.attach(player, Velocity::default());
    engine.world.attach(player, Gravity(-900.0));
    engine.world.attach(player, Hitbox::new(48.0, 64.0));
    engine.world.attach(player, TextureBox(Vec2::new(48.0, 64.0)));
    engine.world.attach(player, TextureRef::default());
    engine.world.attach(player, MovementTuning::new(180.0, 420.0));
    engine.world.attach(
        player,
        AnimationState::new(0.15)
            .with_frames(AnimState::Standing, vec![idle])
            .with_frames(AnimState::WalkingRight, vec![walk_a, walk_b])
            .with_frames(AnimState::WalkingLeft, vec![walk_b, walk_a])
            .with_frames(AnimState::JumpingRight, vec![idle])
            .with_frames(AnimState::JumpingLeft, vec![idle])
            .with_frames(AnimState::FallingRight, vec![idle])
            .with_frames(AnimState::FallingLeft, vec![idle]),
    );
    engine.world.set_player(Some(player));
    engine.world.set_camera_follow(true);

    let chaser = engine.world.spawn(
        Category::Character,
        Capabilities { animated: false, ai_controlled: true },
    );
    engine.world.attach(chaser, Position(Vec2::new(900.0, 75.0)));
    engine.world.attach(chaser, Velocity::default());
    engine.world.attach(chaser, Gravity(-900.0));
    engine.world.attach(chaser, Hitbox::new(48.0, 48.0));
    engine.world.attach(chaser, TextureBox(Vec2::new(48.0, 48.0)));
    engine.world.attach(chaser, TextureRef { current: Some(idle) });
    engine.world.attach(chaser, MovementTuning::new(140.0, 380.0));
    engine.world.attach(chaser, AIProfile { behavior: AiBehavior::Aggressive });

    // Scripted input: walk right for 3 seconds, jumping once a second.
    for frame in 0..300u32 {
        let intent = MovementIntent {
            right: true,
            left: false,
            jump: frame % 60 == 0,
        };
        engine.frame_with(DT, intent);

        if frame % 60 == 0 {
            let pos = engine.world.get::<Position>(player).unwrap().0;
            let chaser_pos = engine.world.get::<Position>(chaser).unwrap().0;
            let anim = engine.world.get::<AnimationState>(player).unwrap().current;
            log::info!(
                "t={:.2}s player=({:.1}, {:.1}) {:?} chaser=({:.1}, {:.1})",
                engine.time.elapsed_secs(),
                pos.x,
                pos.y,
                anim,
                chaser_pos.x,
                chaser_pos.y,
            );
        }
    }

    let sprites = engine.sprites(VIEWPORT);
    log::info!("final frame: {} sprites", sprites.len());
    for sprite in &sprites {
        log::debug!(
            "sprite tex={} at ({:.1}, {:.1}) size ({:.0}x{:.0})",
            sprite.texture.0,
            sprite.position.x,
            sprite.position.y,
            sprite.size.x,
            sprite.size.y,
        );
    }
}
