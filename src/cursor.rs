use std::time::Duration;

/// Elements that make the cursor ring grow when hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [role=\"button\"], .interactive";

const MAX_FRAME: Duration = Duration::from_millis(100);
const SUB_STEP: f64 = 1.0 / 120.0;
const REST_EPSILON: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 25.0,
            mass: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Axis {
    value: f64,
    velocity: f64,
    target: f64,
}

impl Axis {
    fn step(&mut self, config: &SpringConfig, dt: f64) {
        let force = -config.stiffness * (self.value - self.target) - config.damping * self.velocity;
        self.velocity += force / config.mass * dt;
        self.value += self.velocity * dt;
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON
    }

    fn jump(&mut self, to: f64) {
        *self = Axis {
            value: to,
            velocity: 0.0,
            target: to,
        };
    }
}

/// Two-axis spring chasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    x: Axis,
    y: Axis,
}

impl Spring {
    pub fn new(config: SpringConfig, x: f64, y: f64) -> Self {
        let mut spring = Self {
            config,
            x: Axis::default(),
            y: Axis::default(),
        };
        spring.jump_to(x, y);
        spring
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.value, self.y.value)
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.x.target = x;
        self.y.target = y;
    }

    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.x.jump(x);
        self.y.jump(y);
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.at_rest() && self.y.at_rest()
    }

    /// Advances by `elapsed`, clamped to 100ms, in sub-steps of at most
    /// 1/120 s. Settles exactly on the target once close enough.
    pub fn step(&mut self, elapsed: Duration) {
        let mut remaining = elapsed.min(MAX_FRAME).as_secs_f64();
        while remaining > 0.0 {
            let dt = remaining.min(SUB_STEP);
            self.x.step(&self.config, dt);
            self.y.step(&self.config, dt);
            remaining -= dt;
        }
        if self.is_at_rest() {
            let (x, y) = (self.x.target, self.y.target);
            self.jump_to(x, y);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    spring: Spring,
    visible: bool,
    hovering: bool,
    pressed: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            spring: Spring::new(SpringConfig::default(), -100.0, -100.0),
            visible: false,
            hovering: false,
            pressed: false,
        }
    }
}

impl CursorState {
    pub fn on_move(&mut self, x: f64, y: f64) {
        if self.visible {
            self.spring.set_target(x, y);
        } else {
            self.spring.jump_to(x, y);
            self.visible = true;
        }
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Returns `true` if the position changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.spring.is_at_rest() {
            return false;
        }
        self.spring.step(elapsed);
        true
    }

    pub fn position(&self) -> (f64, f64) {
        self.spring.position()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn scale(&self) -> f64 {
        if self.hovering {
            1.5
        } else if self.pressed {
            0.8
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0, 0.0);
        spring.set_target(300.0, -120.0);
        assert!(!spring.is_at_rest());

        run(&mut spring, 10);
        let (x, _) = spring.position();
        assert!(x > 0.0 && x < 330.0, "moving towards the target, got {x}");

        run(&mut spring, 120);
        assert!(spring.is_at_rest());
        assert_eq!(spring.position(), (300.0, -120.0));
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clamped = Spring::new(SpringConfig::default(), 0.0, 0.0);
        let mut reference = clamped;
        clamped.set_target(500.0, 0.0);
        reference.set_target(500.0, 0.0);

        clamped.step(Duration::from_secs(5));
        reference.step(Duration::from_millis(100));
        assert_eq!(clamped.position(), reference.position());
    }

    #[test]
    fn test_first_move_snaps() {
        let mut cursor = CursorState::default();
        assert!(!cursor.visible());

        cursor.on_move(40.0, 60.0);
        assert!(cursor.visible());
        assert_eq!(cursor.position(), (40.0, 60.0));
        assert!(!cursor.tick(Duration::from_millis(16)));

        // later moves are smoothed
        cursor.on_move(140.0, 60.0);
        assert!(cursor.tick(Duration::from_millis(16)));
        let (x, _) = cursor.position();
        assert!(x > 40.0 && x < 140.0);
    }

    #[test]
    fn test_leave_hides_and_next_move_snaps_again() {
        let mut cursor = CursorState::default();
        cursor.on_move(10.0, 10.0);
        cursor.on_leave();
        assert!(!cursor.visible());

        cursor.on_move(500.0, 400.0);
        assert!(cursor.visible());
        assert_eq!(cursor.position(), (500.0, 400.0));
    }

    #[test]
    fn test_scale_prefers_hover_over_press() {
        let mut cursor = CursorState::default();
        assert_eq!(cursor.scale(), 1.0);

        cursor.set_pressed(true);
        assert_eq!(cursor.scale(), 0.8);

        cursor.set_hovering(true);
        assert_eq!(cursor.scale(), 1.5);

        cursor.set_pressed(false);
        cursor.set_hovering(false);
        assert_eq!(cursor.scale(), 1.0);
    }
}
