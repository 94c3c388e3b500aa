use std::time::Duration;

use glam::Vec4;
use ornament::{AnimatorSettings, AudioSource, Material, Node, OrnamentAnimator, Scene, Timer};

/// Headless host loop: runs an ornament for a few seconds and drives it
/// the way a timeline would.
///
/// Usage: `cargo run --example spinning_ornament [settings.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => AnimatorSettings::load(path)?,
        None => AnimatorSettings::default(),
    };

    // 1. Populate the host scene
    let mut scene = Scene::new();
    let host = scene.add_node(Node::new().with_name("stage"));
    let ornament = scene.add_node(Node::new().with_name("ornament"));
    let tint = scene.add_material(Material::default().with_name("ornament_tint"));
    let theme = scene.add_audio(AudioSource::new("theme.ogg"));
    scene.attach_audio(host, theme);

    // 2. Attach the animator to the stage node
    let mut animator = OrnamentAnimator::new(settings)
        .attached_to(host)
        .with_node(ornament)
        .with_material(tint);
    animator.start(&mut scene);
    animator.play_audio(&mut scene);

    // 3. Frame loop with a few scripted cues
    let mut timer = Timer::new().with_max_delta(Duration::from_millis(250));
    let mut cue = 0;
    while timer.elapsed_seconds() < 4.0 {
        std::thread::sleep(Duration::from_millis(16));
        let dt = timer.tick();

        let t = timer.elapsed_seconds();
        if cue == 0 && t > 1.0 {
            animator.set_scale(2.0);
            animator.set_color(Vec4::new(1.0, 0.3, 0.1, 1.0));
            animator.set_complexity(16, 5);
            cue += 1;
        } else if cue == 1 && t > 2.5 {
            animator.pause_audio(&mut scene);
            animator.set_scale(0.5);
            cue += 1;
        }

        animator.tick(dt, &mut scene);
        scene.update_transforms();

        if timer.frame_count % 30 == 0 {
            let node = scene.node(ornament)?;
            let color = scene.material(tint)?.color();
            log::info!(
                "t={t:.2}s scale={:.3} z={:.1}deg color=({:.2}, {:.2}, {:.2})",
                animator.current_scale(),
                node.transform.rotation_euler().z.to_degrees(),
                color.x,
                color.y,
                color.z,
            );
        }
    }

    animator.stop_audio(&mut scene);
    log::info!("Finished after {} frames", timer.frame_count);
    Ok(())
}
