//! Delayed work polled once per simulation step.
//!
//! Tasks count down in simulated time only, so a paused or frozen game
//! never fires them.

use glam::DVec2;

use voidrush_core::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskPayload {
    /// Replace a telegraph beacon with an enemy.
    MaterializeEnemy {
        beacon: EntityId,
        position: DVec2,
        speed_multiplier: f64,
    },
    /// Offer the draft or open the hangar after the warp cue.
    OpenIntermission,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTask {
    pub remaining: f64,
    pub payload: TaskPayload,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn schedule(&mut self, delay: f64, payload: TaskPayload) {
        self.tasks.push(ScheduledTask {
            remaining: delay,
            payload,
        });
    }

    /// Count every task down by `dt` and move the due ones into `due`,
    /// in the order they were scheduled.
    pub fn poll(&mut self, dt: f64, due: &mut Vec<TaskPayload>) {
        self.tasks.retain_mut(|task| {
            task.remaining -= dt;
            if task.remaining <= 0.0 {
                due.push(task.payload);
                false
            } else {
                true
            }
        });
    }

    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_fire_after_delay_in_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(0.5, TaskPayload::OpenIntermission);
        scheduler.schedule(
            0.2,
            TaskPayload::MaterializeEnemy {
                beacon: EntityId(3),
                position: DVec2::ZERO,
                speed_multiplier: 1.0,
            },
        );
        let mut due = Vec::new();
        scheduler.poll(0.1, &mut due);
        assert!(due.is_empty());
        scheduler.poll(0.45, &mut due);
        assert_eq!(due.len(), 2);
        assert_eq!(due[0], TaskPayload::OpenIntermission, "scheduled order is kept");
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_clear_cancels_pending() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(1.0, TaskPayload::OpenIntermission);
        scheduler.clear();
        let mut due = Vec::new();
        scheduler.poll(5.0, &mut due);
        assert!(due.is_empty());
    }
}
