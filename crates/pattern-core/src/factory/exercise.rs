//! Gym exercises.

use serde::{Deserialize, Serialize};

use super::Factory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Legs,
    Arms,
}

/// An exercise with default start/stop announcements.
pub trait Exercise {
    fn name(&self) -> &'static str;

    fn muscle_group(&self) -> MuscleGroup;

    fn start(&self) -> String {
        format!("Started {}", self.name())
    }

    fn stop(&self) -> String {
        format!("Finished {}", self.name())
    }
}

pub struct Jumping;

impl Exercise for Jumping {
    fn name(&self) -> &'static str {
        "Jumping"
    }

    fn muscle_group(&self) -> MuscleGroup {
        MuscleGroup::Legs
    }
}

pub struct Squat;

impl Exercise for Squat {
    fn name(&self) -> &'static str {
        "Squat"
    }

    fn muscle_group(&self) -> MuscleGroup {
        MuscleGroup::Legs
    }
}

pub struct PushUps;

impl Exercise for PushUps {
    fn name(&self) -> &'static str {
        "Push-ups"
    }

    fn muscle_group(&self) -> MuscleGroup {
        MuscleGroup::Arms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Jumping,
    Squat,
    PushUps,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 3] = [
        ExerciseKind::Jumping,
        ExerciseKind::Squat,
        ExerciseKind::PushUps,
    ];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExerciseFactory;

impl Factory for ExerciseFactory {
    type Kind = ExerciseKind;
    type Product = Box<dyn Exercise>;

    fn create(&self, kind: ExerciseKind) -> Box<dyn Exercise> {
        tracing::debug!(?kind, "creating exercise");
        match kind {
            ExerciseKind::Jumping => Box::new(Jumping),
            ExerciseKind::Squat => Box::new(Squat),
            ExerciseKind::PushUps => Box::new(PushUps),
        }
    }
}

/// Collects exercises from its factory and runs them in order.
pub struct Gym {
    factory: ExerciseFactory,
    exercises: Vec<Box<dyn Exercise>>,
}

impl Gym {
    pub fn new(factory: ExerciseFactory) -> Self {
        Self {
            factory,
            exercises: Vec::new(),
        }
    }

    pub fn add(&mut self, kind: ExerciseKind) {
        self.exercises.push(self.factory.create(kind));
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Start then stop each exercise; one line per announcement.
    pub fn run(&self) -> Vec<String> {
        self.exercises
            .iter()
            .flat_map(|e| [e.start(), e.stop()])
            .collect()
    }
}
