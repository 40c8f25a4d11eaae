use glam::Vec2;
use pixel_physics::{Body, BodyType, Polygon, Shape, World, WorldConfig};

/// Seconds of simulated time.
const DURATION: f32 = 10.0;
/// Frame time fed to the fixed-step driver (a 50 Hz display).
const FRAME_DT: f32 = 1.0 / 50.0;
/// A new raindrop every this many frames.
const SPAWN_INTERVAL: usize = 5;
/// Bodies falling below this line are removed.
const KILL_Y: f32 = 40.0;

struct RainScene {
    world: World,
    spawned: usize,
    removed: usize,
}

impl RainScene {
    fn new() -> anyhow::Result<Self> {
        let mut world = World::from_config(WorldConfig::default())?;

        // Static circle the rain falls onto.
        world.add_body(
            Body::new_static(Shape::circle(4.0)?, Vec2::new(0.0, 10.0)).with_user_data(1),
        );

        // Static floor with a small pile of polygons on the right.
        world.add_body(
            Body::new_static(Shape::rectangle(8.0, 0.5)?, Vec2::new(14.0, 20.0))
                .with_user_data(1),
        );
        for i in 0..6 {
            let sides = 3 + i % 4;
            let pos = Vec2::new(11.0 + (i % 3) as f32 * 2.5, 16.0 - (i / 3) as f32 * 2.5);
            world.add_body(
                Body::new_dynamic(Polygon::regular(sides, 0.9)?.into(), pos, 2.0)
                    .with_shape_inertia()
                    .with_restitution(0.2)
                    .with_friction(0.5, 0.3),
            );
        }

        Ok(Self {
            world,
            spawned: 0,
            removed: 0,
        })
    }

    fn spawn_raindrop(&mut self) -> anyhow::Result<()> {
        let x = (((self.spawned * 37 + 11) % 100) as f32 / 100.0 - 0.5) * 10.0;
        self.world.add_body(
            Body::new_dynamic(Shape::circle(0.3)?, Vec2::new(x, -5.0), 1.0)
                .with_restitution(0.3)
                .with_user_data(self.spawned as u64 + 100),
        );
        self.spawned += 1;
        Ok(())
    }

    fn remove_fallen(&mut self) {
        let fallen: Vec<_> = self
            .world
            .handles()
            .iter()
            .zip(self.world.bodies())
            .filter(|(_, body)| body.body_type == BodyType::Dynamic && body.position.y > KILL_Y)
            .map(|(handle, _)| *handle)
            .collect();

        for handle in fallen {
            if self.world.remove_body(handle) {
                self.removed += 1;
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut scene = RainScene::new()?;
    let frames = (DURATION / FRAME_DT) as usize;
    let mut substeps = 0u32;
    let mut peak_collisions = 0usize;

    for frame in 0..frames {
        if frame % SPAWN_INTERVAL == 0 {
            scene.spawn_raindrop()?;
        }

        substeps += scene.world.step(FRAME_DT);
        peak_collisions = peak_collisions.max(scene.world.step_collisions().len());
        scene.remove_fallen();

        if frame % 100 == 0 {
            log::info!(
                "frame {frame}: {} bodies, {} collisions",
                scene.world.len(),
                scene.world.step_collisions().len()
            );
        }
    }

    let resting = scene
        .world
        .bodies()
        .iter()
        .filter(|b| b.is_dynamic() && b.velocity.length() < 0.1)
        .count();

    log::info!(
        "simulated {DURATION}s in {substeps} steps: {} spawned, {} removed, {} alive, {} resting, peak {} collisions",
        scene.spawned,
        scene.removed,
        scene.world.len(),
        resting,
        peak_collisions
    );

    Ok(())
}
