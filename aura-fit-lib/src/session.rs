//src/session.rs
use thiserror::Error;

use crate::builder::BuilderState;
use crate::model::{seed_workouts, Workout};
use crate::view::{ViewRouter, ViewState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("A workout with id '{0}' is already in the list.")]
    DuplicateWorkoutId(String),
}

/// Workouts held for the lifetime of the session, newest first.
#[derive(Debug, Clone, Default)]
pub struct WorkoutList {
    workouts: Vec<Workout>,
}

impl WorkoutList {
    /// Builds a list, rejecting the first repeated id.
    pub fn from_workouts(workouts: Vec<Workout>) -> Result<Self, Error> {
        let mut list = Self::default();
        for workout in workouts.into_iter().rev() {
            list.prepend(workout)?;
        }
        Ok(list)
    }

    pub fn prepend(&mut self, workout: Workout) -> Result<(), Error> {
        if self.contains(&workout.id) {
            return Err(Error::DuplicateWorkoutId(workout.id));
        }
        self.workouts.insert(0, workout);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.workouts.iter().any(|w| w.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Top-level application state: current view, saved workouts, builder.
#[derive(Debug, Clone)]
pub struct Session {
    router: ViewRouter,
    workouts: WorkoutList,
    builder: BuilderState,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_workouts(WorkoutList::default())
    }
}

impl Session {
    /// A fresh session holding the demo workout.
    pub fn seeded() -> Self {
        let workouts = WorkoutList::from_workouts(seed_workouts()).unwrap_or_default();
        Self::with_workouts(workouts)
    }

    pub fn with_workouts(workouts: WorkoutList) -> Self {
        Self {
            router: ViewRouter::new(),
            workouts,
            builder: BuilderState::new(),
        }
    }

    pub const fn current_view(&self) -> ViewState {
        self.router.current()
    }

    pub fn navigate(&mut self, target: ViewState) {
        self.router.navigate(target);
    }

    pub const fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub const fn workouts(&self) -> &WorkoutList {
        &self.workouts
    }

    pub const fn builder(&self) -> &BuilderState {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut BuilderState {
        &mut self.builder
    }

    /// Saves the pending generated workout at the top of the list and
    /// returns to the dashboard. Returns `Ok(false)` when nothing was
    /// pending.
    ///
    /// # Errors
    /// `DuplicateWorkoutId` if the id is already taken; the workout stays
    /// pending in that case.
    pub fn save_generated(&mut self) -> Result<bool, Error> {
        let Some(workout) = self.builder.generated() else {
            return Ok(false);
        };
        if self.workouts.contains(&workout.id) {
            return Err(Error::DuplicateWorkoutId(workout.id.clone()));
        }
        if let Some(workout) = self.builder.take_generated() {
            tracing::info!(id = %workout.id, title = %workout.title, "workout saved");
            self.workouts.prepend(workout)?;
        }
        self.router.navigate(ViewState::Dashboard);
        Ok(true)
    }

    /// Throws away the pending generated workout. The list is untouched.
    pub fn discard_generated(&mut self) {
        self.builder.discard();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_session_starts_on_dashboard_with_demo_workout() {
        let session = Session::seeded();
        assert_eq!(session.current_view(), ViewState::Dashboard);
        assert_eq!(session.workouts().len(), 1);
        assert_eq!(session.workouts().get(0).unwrap().id, "1");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut seed = seed_workouts();
        seed.push(seed[0].clone());
        assert_eq!(
            WorkoutList::from_workouts(seed).unwrap_err(),
            Error::DuplicateWorkoutId("1".to_string())
        );
    }

    #[test]
    fn from_workouts_keeps_order() {
        let mut first = seed_workouts().remove(0);
        let mut second = first.clone();
        first.id = "a".into();
        second.id = "b".into();
        let list = WorkoutList::from_workouts(vec![first, second]).unwrap();
        let ids: Vec<&str> = list.as_slice().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn save_without_pending_workout_is_noop() {
        let mut session = Session::seeded();
        session.navigate(ViewState::Builder);
        assert_eq!(session.save_generated(), Ok(false));
        assert_eq!(session.current_view(), ViewState::Builder);
        assert_eq!(session.workouts().len(), 1);
    }
}
