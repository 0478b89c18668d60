use circle_packer::{
    Bounds, CirclePacker, Circle, CircleId, Command, Listeners, PackerConfig, Point,
    PositionUpdate, PositionUpdates,
};
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MAX_FRAMES: u32 = 600;

/// Toy engine for the demo: eases every circle toward the target. No
/// collision handling.
struct DriftEngine {
    circles: BTreeMap<CircleId, Point>,
    dragged: Option<CircleId>,
    target: Point,
    damping: f64,
}

impl DriftEngine {
    fn new() -> Self {
        Self {
            circles: BTreeMap::new(),
            dragged: None,
            target: Point::default(),
            damping: 0.2,
        }
    }

    fn apply(&mut self, command: Command) -> Option<PositionUpdates> {
        match command {
            Command::AddCircles(circles) => {
                for circle in circles {
                    self.circles.insert(circle.id, circle.position);
                }
            }
            Command::RemoveCircle(id) => {
                self.circles.remove(&id);
            }
            Command::Target(target) => self.target = target,
            Command::Damping(damping) => self.damping = damping.clamp(0.0, 1.0),
            Command::DragStart(drag) => self.dragged = Some(drag.id),
            Command::Drag(drag) => {
                if let Some(position) = self.circles.get_mut(&drag.id) {
                    *position = drag.position;
                }
            }
            Command::DragEnd(_) => self.dragged = None,
            Command::Update => return Some(self.step()),
            _ => {}
        }
        None
    }

    fn step(&mut self) -> PositionUpdates {
        let mut updates = PositionUpdates::new();
        for (id, position) in &mut self.circles {
            let delta = if self.dragged.as_ref() == Some(id) {
                Point::default()
            } else {
                let offset = self.target - *position;
                Point::new(offset.x * self.damping, offset.y * self.damping)
            };
            *position = *position + delta;
            updates.insert(id.clone(), PositionUpdate::new(*position, delta));
        }
        updates
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let config = PackerConfig {
        circles: vec![
            Circle::new("a", 10.0, Point::new(0.0, 0.0)),
            Circle::new("b", 6.0, Point::new(200.0, 10.0)),
            Circle::new("c", 8.0, Point::new(30.0, 180.0)),
        ],
        bounds: Bounds::new(200.0, 200.0),
        target: Point::new(100.0, 100.0),
        ..PackerConfig::default()
    };

    let moves = Rc::new(Cell::new(0u32));
    let move_counter = Rc::clone(&moves);
    let listeners = Listeners::new()
        .on_move_start(|| info!("circles started moving"))
        .on_move(move |_| move_counter.set(move_counter.get() + 1))
        .on_move_end(|| info!("circles settled"));

    let mut engine = DriftEngine::new();
    let mut packer = CirclePacker::spawn(config, listeners, move |command: Command| {
        engine.apply(command)
    })?;

    let start = Instant::now();
    let mut frames = 0;
    while let Some(handle) = packer.scheduler_mut().take_due() {
        if frames >= MAX_FRAMES {
            packer.stop_loop()?;
            break;
        }
        thread::sleep(FRAME_INTERVAL);
        packer.on_frame(handle)?;
        frames += 1;
    }

    info!(
        frames,
        moves = moves.get(),
        elapsed = ?start.elapsed(),
        "packing loop finished"
    );

    packer.destroy()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }

    #[test]
    fn test_drift_engine_moves_toward_target() {
        let mut engine = DriftEngine::new();
        engine.apply(Command::Target(Point::new(10.0, 10.0)));
        engine.apply(Command::AddCircles(vec![Circle::new("a", 1.0, Point::new(0.0, 0.0))]));

        let updates = engine.apply(Command::Update).unwrap();
        let update = updates[&CircleId::new("a")];

        assert_eq!(update.delta, Point::new(2.0, 2.0));
        assert_eq!(update.position, Point::new(2.0, 2.0));
    }

    #[test]
    fn test_dragged_circle_holds_still() {
        let mut engine = DriftEngine::new();
        engine.apply(Command::AddCircles(vec![Circle::new("a", 1.0, Point::new(5.0, 5.0))]));
        engine.apply(Command::DragStart(circle_packer::DragTarget {
            id: CircleId::new("a"),
        }));

        let updates = engine.apply(Command::Update).unwrap();

        assert_eq!(updates[&CircleId::new("a")].delta, Point::default());
    }
}
